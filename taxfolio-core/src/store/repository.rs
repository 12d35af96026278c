//! Profile persistence boundary.
//!
//! The engine consumes fully-populated [`TaxProfile`] values and never
//! touches storage itself; applications implement [`ProfileStore`] over
//! whatever backend they use. Every operation is async and the trait is
//! object-safe, so stores can be shared as `Arc<dyn ProfileStore>`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::TaxProfile;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("profile not found")]
    NotFound,

    #[error("backend error: {0}")]
    Backend(String),

    #[error("connection error: {0}")]
    Connection(String),
}

/// A stored profile with its persistence metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub id: i64,
    pub name: String,
    /// At most one record per store is active at a time.
    pub is_active: bool,
    pub profile: TaxProfile,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload; the backend assigns the id and both timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProfileRecord {
    pub name: String,
    pub profile: TaxProfile,
}

#[async_trait]
pub trait ProfileStore: Send + Sync {
    // Single profiles
    async fn save_profile(&self, new: NewProfileRecord) -> Result<ProfileRecord, StoreError>;
    async fn load_profile(&self, id: i64) -> Result<ProfileRecord, StoreError>;
    async fn update_profile(&self, record: &ProfileRecord) -> Result<(), StoreError>;
    async fn delete_profile(&self, id: i64) -> Result<(), StoreError>;

    // Listing and selection
    async fn list_profiles(&self) -> Result<Vec<ProfileRecord>, StoreError>;
    async fn set_active_profile(&self, id: i64) -> Result<(), StoreError>;
    async fn active_profile(&self) -> Result<Option<ProfileRecord>, StoreError>;
}
