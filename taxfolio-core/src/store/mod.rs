pub mod repository;

pub use repository::{NewProfileRecord, ProfileRecord, ProfileStore, StoreError};
