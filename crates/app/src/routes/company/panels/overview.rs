//! Dashboard tab: stat cards and the member's personal attendance chart.
//! The mark-attendance and apply-leave actions live in the shell topbar.

use crate::routes::company::dashboard::DashboardResource;
use dioxus::prelude::*;
use shared_types::PersonalAttendanceSummary;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, DonutChart, DonutSlice,
    PageHeader, PageTitle, Skeleton,
};

#[component]
pub fn OverviewPanel(data: DashboardResource, email: String) -> Element {
    rsx! {
        PageHeader {
            PageTitle { "Dashboard" }
        }

        match &*data.read() {
            Some(Ok(dash)) => {
                let summary = dash
                    .member_by_email(&email)
                    .map(|m| m.attendance_summary())
                    .unwrap_or_default();
                let team = dash.data.users.len();
                let open_applications = dash
                    .data
                    .applications
                    .iter()
                    .filter(|a| a.status.is_open())
                    .count();
                rsx! {
                    div { class: "stat-cards",
                        StatCard { label: "Days present", value: summary.present }
                        StatCard { label: "Days absent", value: summary.absent }
                        StatCard { label: "Days on leave", value: summary.leave }
                        StatCard { label: "Team members", value: team as u32 }
                        StatCard { label: "Open applications", value: open_applications as u32 }
                    }

                    Card {
                        CardHeader {
                            CardTitle { "My attendance" }
                        }
                        CardContent {
                            DonutChart {
                                slices: summary_slices(&summary),
                                center_label: format!("{}", summary.total),
                            }
                        }
                    }
                }
            }
            Some(Err(e)) => rsx! {
                Card {
                    CardContent {
                        p { class: "empty-note", "{e.friendly_message()}" }
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: {
                                let mut data = data;
                                move |_| data.restart()
                            },
                            "Retry"
                        }
                    }
                }
            },
            None => rsx! {
                div { class: "loading",
                    Skeleton {}
                    Skeleton {}
                    Skeleton {}
                }
            },
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: u32) -> Element {
    rsx! {
        Card {
            CardContent {
                div { class: "stat-value", "{value}" }
                div { class: "stat-label", "{label}" }
            }
        }
    }
}

fn summary_slices(summary: &PersonalAttendanceSummary) -> Vec<DonutSlice> {
    vec![
        DonutSlice::new("Present", summary.present, "var(--success)"),
        DonutSlice::new("Absent", summary.absent, "var(--destructive)"),
        DonutSlice::new("Leave", summary.leave, "var(--warning)"),
    ]
}
