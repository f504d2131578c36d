use serde::{Deserialize, Serialize};

use crate::tenant::TenantPlan;

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    10
}

/// Query parameters for GET /admin/identities.
///
/// Unset filters are omitted from the query string entirely, matching what
/// the upstream list endpoint expects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityListQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_locked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,
}

impl Default for IdentityListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            search: None,
            is_active: None,
            is_locked: None,
            email_verified: None,
        }
    }
}

/// Query parameters for GET /admin/tenants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantListQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<TenantPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl Default for TenantListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            search: None,
            plan: None,
            is_active: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_filters_are_omitted() {
        let query = IdentityListQuery {
            page: 2,
            ..Default::default()
        };
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json, serde_json::json!({ "page": 2, "pageSize": 10 }));
    }

    #[test]
    fn set_filters_serialize_camel_case() {
        let query = IdentityListQuery {
            is_locked: Some(true),
            search: Some("alice".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["isLocked"], serde_json::json!(true));
        assert_eq!(json["search"], serde_json::json!("alice"));
    }

    #[test]
    fn tenant_plan_filter_uses_wire_value() {
        let query = TenantListQuery {
            plan: Some(TenantPlan::Enterprise),
            ..Default::default()
        };
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["plan"], serde_json::json!("enterprise"));
    }
}
