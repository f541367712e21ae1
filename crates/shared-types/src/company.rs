use serde::{Deserialize, Serialize};

/// A tenant company. The slug is the sole routing key for tenant-scoped
/// screens; an inactive company is hidden from public search and its admin
/// operations are blocked server-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Company {
    #[serde(default, rename = "_id")]
    pub id: String,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "logoUrl")]
    pub logo_url: Option<String>,
    #[serde(default = "default_true", rename = "isActive")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Body of `GET /company/get`, the public directory listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompaniesResponse {
    #[serde(default)]
    pub companies: Vec<Company>,
}

/// Success body of `POST /register/company`; the slug feeds the admin
/// registration phase that follows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompanyRegisteredResponse {
    #[serde(default)]
    pub message: String,
    pub company: Company,
}

/// Owner-scope aggregate returned by `GET /admin/stats`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OwnerStats {
    #[serde(default, rename = "totalCompanies")]
    pub total_companies: u32,
    #[serde(default, rename = "blockedCompanies")]
    pub blocked_companies: u32,
    #[serde(default, rename = "activeCompanies")]
    pub active_companies: u32,
    #[serde(default)]
    pub companies: Vec<Company>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn stats_counts_parse_from_backend_shape() {
        let stats: OwnerStats = serde_json::from_str(
            r#"{"totalCompanies":3,"blockedCompanies":1,"activeCompanies":2,
                "companies":[{"_id":"1","slug":"acme","name":"Acme","isActive":true}]}"#,
        )
        .unwrap();
        assert_eq!(stats.total_companies, 3);
        assert_eq!(stats.blocked_companies, 1);
        assert_eq!(stats.active_companies, 2);
        assert_eq!(stats.companies.len(), 1);
        assert!(stats.companies[0].is_active);
    }

    #[test]
    fn company_active_defaults_to_true() {
        let company: Company =
            serde_json::from_str(r#"{"slug":"acme","name":"Acme"}"#).unwrap();
        assert!(company.is_active);
    }
}
