use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::entity::EntityType;

/// One slice of a progressive schedule. `max_income` of `None` marks the
/// unbounded top bracket. The range is half-open: an amount exactly at
/// `max_income` belongs to the next bracket up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub rate: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapitalGainsRates {
    pub short_term_rate: Decimal,
    pub long_term_rate: Decimal,
}

/// Basis on which the self-employed contribution leg is assessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeContributionBasis {
    GrossBusinessIncome,
    NetOfDeductibleExpenses,
}

/// Social-security / payroll contribution rates. Caps are absolute income
/// amounts above which the rate stops applying; `None` means uncapped.
/// Jurisdictions with no self-employed scheme leave `self_employed_rate`
/// unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialSecurityRates {
    pub employee_rate: Decimal,
    pub employee_cap: Option<Decimal>,
    pub employer_rate: Decimal,
    pub employer_cap: Option<Decimal>,
    pub self_employed_rate: Option<Decimal>,
    pub self_employed_cap: Option<Decimal>,
    pub self_employed_basis: SeContributionBasis,
}

/// Additional flat rate on the corporate profit base, with the statutory
/// origin recorded for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorporateSurcharge {
    pub rate: Decimal,
    pub basis: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorporateRates {
    pub standard_rate: Decimal,
    pub surcharges: Vec<CorporateSurcharge>,
}

impl CorporateRates {
    /// Standard rate plus all surcharge rates.
    pub fn total_rate(&self) -> Decimal {
        self.surcharges
            .iter()
            .fold(self.standard_rate, |acc, s| acc + s.rate)
    }
}

/// Full rule set for one jurisdiction. Immutable after table load;
/// structural invariants are checked by the rule tables, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionConfig {
    pub id: String,
    pub name: String,
    pub currency_code: String,
    pub currency_symbol: String,
    pub tax_year: i32,
    pub ordinary_brackets: Vec<TaxBracket>,
    pub capital_gains: CapitalGainsRates,
    pub dividend_rate: Decimal,
    pub social_security: SocialSecurityRates,
    pub corporate: CorporateRates,
    pub standard_deduction: Decimal,
    pub valid_entity_types: Vec<EntityType>,
}

impl JurisdictionConfig {
    pub fn allows_entity_type(&self, entity_type: EntityType) -> bool {
        self.valid_entity_types.contains(&entity_type)
    }
}
