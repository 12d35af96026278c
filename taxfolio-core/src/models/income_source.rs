use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::treatment::{IncomeType, TaxTreatment};

/// A user-defined income source. `label` and `notes` are free text and are
/// never interpreted; `tax_treatment` is what the aggregation engine taxes
/// by, with `income_type` kept as classification metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomIncomeSource {
    pub id: String,
    pub label: String,
    pub amount: Decimal,
    pub income_type: IncomeType,
    pub tax_treatment: TaxTreatment,
    pub notes: Option<String>,
}

impl CustomIncomeSource {
    /// Creates a source with the treatment defaulted from the income type.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        amount: Decimal,
        income_type: IncomeType,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            amount,
            income_type,
            tax_treatment: income_type.default_treatment(),
            notes: None,
        }
    }

    /// Overrides the default treatment. The engine always consumes the
    /// stored treatment, so the override fully decides taxation.
    pub fn with_treatment(mut self, treatment: TaxTreatment) -> Self {
        self.tax_treatment = treatment;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
