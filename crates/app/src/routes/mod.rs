pub mod company;
pub mod home;
pub mod not_found;
pub mod owner;
pub mod register;
pub mod search;

use dioxus::prelude::*;

/// Application routes. Everything under a tenant slug is resolved by the
/// access gate, which decides between the public page and the dashboard.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/companies")]
    CompanySearch {},
    #[route("/register/company?:token")]
    CompanyRegister { token: Option<String> },
    #[route("/register/member?:token")]
    MemberRegister { token: Option<String> },
    #[route("/owner")]
    OwnerDashboard {},
    #[route("/:slug")]
    CompanyGate { slug: String },
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
fn Home() -> Element {
    home::HomePage()
}

#[component]
fn CompanySearch() -> Element {
    search::CompanySearchPage()
}

#[component]
fn CompanyRegister(token: Option<String>) -> Element {
    rsx! { register::company::CompanyRegisterPage { token: token } }
}

#[component]
fn MemberRegister(token: Option<String>) -> Element {
    rsx! { register::member::MemberRegisterPage { token: token } }
}

#[component]
fn OwnerDashboard() -> Element {
    owner::OwnerDashboardPage()
}

#[component]
fn CompanyGate(slug: String) -> Element {
    rsx! { company::gate::CompanyGatePage { slug: slug } }
}

#[component]
fn NotFound(route: Vec<String>) -> Element {
    rsx! { not_found::NotFoundPage { route: route } }
}
