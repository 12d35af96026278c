//! Bracket schedule override tooling for the taxfolio rule tables.

pub mod loader;

pub use loader::{ScheduleCsvError, ScheduleLoader, ScheduleRecord};
