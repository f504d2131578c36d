use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::membership::Membership;

/// An organization/workspace record owned by the upstream HiveAuth API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub plan: TenantPlan,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memberships: Option<Vec<Membership>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TenantPlan {
    Free,
    Starter,
    Professional,
    Enterprise,
}

impl TenantPlan {
    pub const ALL: [TenantPlan; 4] = [
        TenantPlan::Free,
        TenantPlan::Starter,
        TenantPlan::Professional,
        TenantPlan::Enterprise,
    ];

    /// Wire value, as the upstream API spells it
    pub fn as_str(&self) -> &'static str {
        match self {
            TenantPlan::Free => "free",
            TenantPlan::Starter => "starter",
            TenantPlan::Professional => "professional",
            TenantPlan::Enterprise => "enterprise",
        }
    }
}

/// Payload for POST /admin/tenants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTenant {
    pub slug: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<TenantPlan>,
}

/// Payload for PUT /admin/tenants/:id
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTenant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<TenantPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_round_trips_lowercase() {
        for plan in TenantPlan::ALL {
            let json = serde_json::to_value(plan).unwrap();
            assert_eq!(json, serde_json::json!(plan.as_str()));
            let back: TenantPlan = serde_json::from_value(json).unwrap();
            assert_eq!(back, plan);
        }
    }
}
