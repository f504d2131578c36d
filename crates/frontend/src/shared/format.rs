//! Display formatting helpers shared by the list and detail screens

use chrono::{DateTime, Utc};
use contracts::membership::MembershipRole;
use contracts::tenant::TenantPlan;

/// Date with time, "-" for missing values
pub fn format_date(value: Option<DateTime<Utc>>) -> String {
    match value {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => "-".to_string(),
    }
}

/// Date only, for compact columns
pub fn format_date_short(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d").to_string()
}

pub fn plan_label(plan: TenantPlan) -> &'static str {
    match plan {
        TenantPlan::Free => "Free",
        TenantPlan::Starter => "Starter",
        TenantPlan::Professional => "Professional",
        TenantPlan::Enterprise => "Enterprise",
    }
}

pub fn role_label(role: MembershipRole) -> &'static str {
    match role {
        MembershipRole::Owner => "Owner",
        MembershipRole::Admin => "Admin",
        MembershipRole::Member => "Member",
    }
}

/// Shorten a long email for table cells, keeping the domain readable
pub fn truncate_email(email: &str, max_length: usize) -> String {
    if email.len() <= max_length {
        return email.to_string();
    }
    let Some((local, domain)) = email.split_once('@') else {
        return email.to_string();
    };
    let keep = max_length
        .saturating_sub(domain.len() + 4)
        .max(5)
        .min(local.len());
    format!("{}...@{}", &local[..keep], domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_email() {
        assert_eq!(truncate_email("a@b.co", 25), "a@b.co");
        assert_eq!(
            truncate_email("averyverylongaddress@example.com", 25),
            "avery...@example.com"
        );
        // short local parts are never cut below the minimum
        assert_eq!(
            truncate_email("short@a-very-long-domain-name.example.com", 10),
            "short...@a-very-long-domain-name.example.com"
        );
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(None), "-");
        let dt = DateTime::parse_from_rfc3339("2026-02-03T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_date(Some(dt)), "2026-02-03 10:30");
        assert_eq!(format_date_short(dt), "2026-02-03");
    }
}
