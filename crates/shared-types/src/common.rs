use serde::{Deserialize, Serialize};

/// Login success payload for both the owner and per-tenant login endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenResponse {
    pub token: String,
}

/// Platform owner profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OwnerProfile {
    pub name: String,
    pub email: String,
    #[serde(default, rename = "profilePic")]
    pub profile_pic: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OwnerProfileResponse {
    pub owner: OwnerProfile,
}
