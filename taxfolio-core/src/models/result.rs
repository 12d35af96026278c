use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::treatment::TaxTreatment;

/// Income and attributed tax for one treatment bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreatmentLine {
    pub treatment: TaxTreatment,
    pub amount: Decimal,
    pub tax: Decimal,
}

/// Per-leg social-security contributions.
///
/// The employer leg is computed for transparency but is employer-borne: it
/// never reduces the taxpayer's net income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialSecurityContributions {
    pub employee: Decimal,
    pub employer: Decimal,
    pub self_employed: Decimal,
}

impl SocialSecurityContributions {
    /// The legs the taxpayer bears: employee plus self-employed.
    pub fn taxpayer_total(&self) -> Decimal {
        self.employee + self.self_employed
    }
}

/// Complete liability breakdown for one profile evaluation.
///
/// Money fields are rounded to two decimal places, rates to four.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxComputationResult {
    /// Sum of every income bucket, exempt income included.
    pub total_income: Decimal,

    /// Deductions claimed against ordinary income: the jurisdiction's
    /// standard deduction plus the profile's deductible expenses. May
    /// exceed what was actually usable; `taxable_ordinary_income` carries
    /// the floored amount.
    pub total_deductions: Decimal,

    /// Ordinary base after deductions, floored at zero.
    pub taxable_ordinary_income: Decimal,

    /// Progressive bracket tax on `taxable_ordinary_income`.
    pub income_tax: Decimal,

    /// Short-term plus long-term capital-gains tax.
    pub capital_gains_tax: Decimal,

    /// Flat-rate tax on dividend-treatment income.
    pub dividend_tax: Decimal,

    /// Tax on the passive and preferential buckets, assessed at the
    /// long-term capital-gains rate.
    pub passive_tax: Decimal,

    /// Per-leg social-security contributions, employer leg included.
    pub social_security: SocialSecurityContributions,

    /// Taxpayer-borne social security: employee plus self-employed legs.
    pub social_security_tax: Decimal,

    /// Entity-level tax on business income; zero for pass-through
    /// entities.
    pub corporate_tax: Decimal,

    /// Sum of income, capital-gains, dividend, passive, taxpayer-borne
    /// social-security, and corporate taxes.
    pub total_tax: Decimal,

    /// `total_income` minus `total_tax`.
    pub net_income: Decimal,

    /// `total_tax / total_income`; zero when there is no income.
    pub effective_rate: Decimal,

    /// Ordinary-bracket rate at the last unit of taxable ordinary income.
    pub marginal_rate: Decimal,

    /// One line per treatment with a non-zero amount, in treatment
    /// declaration order. Line amounts sum to `total_income`; line taxes
    /// sum to `total_tax` minus `social_security_tax`, which is reported
    /// in its own fields rather than attributed to a bucket.
    pub breakdown_by_treatment: Vec<TreatmentLine>,
}
