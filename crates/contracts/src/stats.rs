use serde::{Deserialize, Serialize};

/// Aggregate counters for the dashboard overview.
///
/// `Default` is the all-zero fallback shown when the stats fetch fails.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_identities: u64,
    pub active_identities: u64,
    pub locked_identities: u64,
    pub verified_identities: u64,
    pub total_tenants: u64,
    pub active_tenants: u64,
    pub plan_distribution: PlanDistribution,
    pub recent_logins_24h: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanDistribution {
    pub free: u64,
    pub starter: u64,
    pub professional: u64,
    pub enterprise: u64,
}

impl PlanDistribution {
    pub fn total(&self) -> u64 {
        self.free + self.starter + self.professional + self.enterprise
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_wire_casing() {
        let stats: DashboardStats = serde_json::from_value(serde_json::json!({
            "totalIdentities": 10,
            "activeIdentities": 8,
            "lockedIdentities": 1,
            "verifiedIdentities": 7,
            "totalTenants": 3,
            "activeTenants": 3,
            "planDistribution": { "free": 1, "starter": 1, "professional": 1, "enterprise": 0 },
            "recentLogins24h": 5
        }))
        .unwrap();
        assert_eq!(stats.recent_logins_24h, 5);
        assert_eq!(stats.plan_distribution.total(), 3);
    }
}
