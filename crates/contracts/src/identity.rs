use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::membership::Membership;

/// A user account record owned by the upstream HiveAuth API.
///
/// Field names follow the upstream wire format (camelCase).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email_verified: bool,
    pub is_active: bool,
    pub is_locked: bool,
    pub lock_reason: Option<String>,
    pub failed_login_attempts: u32,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memberships: Option<Vec<Membership>>,
}

/// Payload for POST /admin/identities
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIdentity {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub password: String,
}

/// Payload for PUT /admin/identities/:id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIdentity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Payload for POST /admin/identities/:id/password
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetPassword {
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_uses_upstream_wire_casing() {
        let json = serde_json::json!({
            "id": "id-1",
            "email": "a@b.co",
            "name": null,
            "phone": null,
            "emailVerified": true,
            "isActive": true,
            "isLocked": false,
            "lockReason": null,
            "failedLoginAttempts": 0,
            "lastLoginAt": null,
            "createdAt": "2026-01-01T00:00:00Z",
            "updatedAt": "2026-01-01T00:00:00Z"
        });
        let identity: Identity = serde_json::from_value(json).unwrap();
        assert!(identity.email_verified);
        assert!(identity.memberships.is_none());

        let back = serde_json::to_value(&identity).unwrap();
        assert!(back.get("emailVerified").is_some());
        assert!(back.get("failedLoginAttempts").is_some());
    }

    #[test]
    fn update_skips_unset_fields() {
        let update = UpdateIdentity {
            is_active: Some(false),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "isActive": false }));
    }
}
