use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String, // admin id
    pub email: String,
    pub name: String,
    pub exp: usize, // expiration timestamp
    pub iat: usize, // issued at
}

/// Request body for the upstream POST /admin/verify endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyAdminRequest {
    pub email: String,
    pub password: String,
}

/// Response body of the upstream POST /admin/verify endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyAdminResponse {
    pub valid: bool,
    #[serde(default)]
    pub user: Option<VerifiedAdmin>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifiedAdmin {
    #[serde(default)]
    pub id: Option<String>,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}
