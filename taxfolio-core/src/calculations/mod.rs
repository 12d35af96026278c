//! Tax math: bracket evaluation, rounding, and the aggregation engine.

pub mod brackets;
pub mod common;
pub mod engine;

pub use engine::{compute_tax, ProfileError, TaxEngine};
