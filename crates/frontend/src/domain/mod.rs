pub mod identities;
pub mod tenants;
