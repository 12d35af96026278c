pub mod advisor;
pub mod calculations;
pub mod models;
pub mod rules;
pub mod store;

pub use advisor::suggest_optimizations;
pub use calculations::engine::{compute_tax, ProfileError, TaxEngine};
pub use models::*;
pub use rules::{ConfigError, EntityRuleTable, JurisdictionTable, TaxRuleSet};
pub use store::{NewProfileRecord, ProfileRecord, ProfileStore, StoreError};
