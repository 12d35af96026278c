use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::entity::EntityType;
use crate::models::income_source::CustomIncomeSource;

/// The unit of computation. Every standard field carries a fixed natural
/// treatment (`dividends` is always dividend-treatment, and so on); only
/// custom sources carry their own. The engine never mutates a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxProfile {
    pub jurisdiction_id: String,
    pub entity_type: EntityType,
    pub salary: Decimal,
    pub business_income: Decimal,
    pub capital_gains_short_term: Decimal,
    pub capital_gains_long_term: Decimal,
    pub dividends: Decimal,
    pub rental_income: Decimal,
    pub crypto_gains: Decimal,
    pub deductible_expenses: Decimal,
    pub custom_income_sources: Vec<CustomIncomeSource>,
}

impl TaxProfile {
    /// An all-zero profile for the given jurisdiction and entity type.
    pub fn empty(
        jurisdiction_id: impl Into<String>,
        entity_type: EntityType,
    ) -> Self {
        Self {
            jurisdiction_id: jurisdiction_id.into(),
            entity_type,
            salary: Decimal::ZERO,
            business_income: Decimal::ZERO,
            capital_gains_short_term: Decimal::ZERO,
            capital_gains_long_term: Decimal::ZERO,
            dividends: Decimal::ZERO,
            rental_income: Decimal::ZERO,
            crypto_gains: Decimal::ZERO,
            deductible_expenses: Decimal::ZERO,
            custom_income_sources: Vec::new(),
        }
    }
}
