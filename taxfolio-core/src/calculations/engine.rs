//! Tax aggregation engine.
//!
//! Composes the bracket calculator, the treatment buckets, and the
//! jurisdiction and entity rules into one liability breakdown per
//! profile. The computation is pure: no state is kept between calls and
//! identical inputs produce bit-identical results.
//!
//! # Pipeline
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Validate the profile (amounts, source ids, entity validity) |
//! | 2    | Bucket every income amount by tax treatment |
//! | 3    | Branch on the entity rule: merge business income into the ordinary base, or tax it at the corporate rate |
//! | 4    | Subtract the standard deduction and deductible expenses, floored at zero |
//! | 5    | Evaluate progressive tax on the taxable ordinary base |
//! | 6    | Apply flat rates to the short/long gain, dividend, passive, and preferential buckets |
//! | 7    | Apply social-security legs with their caps |
//! | 8    | Total up, derive net income and the marginal/effective rates |
//! | 9    | Attribute tax to per-treatment breakdown lines |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use taxfolio_core::calculations::engine::compute_tax;
//! use taxfolio_core::models::{EntityType, TaxProfile};
//! use taxfolio_core::rules::TaxRuleSet;
//!
//! let rules = TaxRuleSet::builtin().unwrap();
//! let mut profile = TaxProfile::empty("us", EntityType::Individual);
//! profile.salary = dec!(60000);
//!
//! let result = compute_tax(&profile, rules.jurisdictions(), rules.entities()).unwrap();
//!
//! // 11925 × 0.10 + 33075 × 0.12 on the post-deduction base of 45000
//! assert_eq!(result.income_tax, dec!(5161.50));
//! // Employee social security at 7.65% of the 60000 wage base
//! assert_eq!(result.social_security_tax, dec!(4590.00));
//! assert_eq!(result.total_tax, dec!(9751.50));
//! ```

use rust_decimal::Decimal;
use std::collections::HashSet;
use thiserror::Error;
use tracing::warn;

use crate::calculations::brackets;
use crate::calculations::common::{max, round_half_up, round_rate};
use crate::models::{
    EntityType, EntityTypeRule, JurisdictionConfig, SeContributionBasis,
    SocialSecurityContributions, TaxComputationResult, TaxProfile, TaxTreatment, TreatmentLine,
};
use crate::rules::{EntityRuleTable, JurisdictionTable};

/// Rejections raised before any computation starts. The caller fixes the
/// profile and retries; no partial result is ever produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    /// The profile references a jurisdiction id that is not in the table.
    #[error("unknown jurisdiction '{0}'")]
    UnknownJurisdiction(String),

    /// The entity rule table has no rule for the profile's entity type.
    #[error("no entity rule for '{}'", .0.as_str())]
    MissingEntityRule(EntityType),

    /// The entity type is not valid in the profile's jurisdiction.
    #[error(
        "entity type '{}' is not valid in jurisdiction '{jurisdiction}'",
        .entity_type.as_str()
    )]
    EntityTypeNotValid {
        entity_type: EntityType,
        jurisdiction: String,
    },

    /// An income amount or deduction is negative.
    #[error("{field} must be non-negative, got {amount}")]
    NegativeAmount { field: String, amount: Decimal },

    /// Two custom income sources share an id.
    #[error("duplicate custom income source id '{id}'")]
    DuplicateSourceId { id: String },
}

/// Income totals per treatment bucket.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct TreatmentBuckets {
    ordinary: Decimal,
    short_term: Decimal,
    long_term: Decimal,
    dividend: Decimal,
    passive: Decimal,
    business: Decimal,
    exempt: Decimal,
    preferential: Decimal,
}

impl TreatmentBuckets {
    fn add(
        &mut self,
        treatment: TaxTreatment,
        amount: Decimal,
    ) {
        match treatment {
            TaxTreatment::Ordinary => self.ordinary += amount,
            TaxTreatment::ShortTermCapitalGain => self.short_term += amount,
            TaxTreatment::LongTermCapitalGain => self.long_term += amount,
            TaxTreatment::QualifiedDividend => self.dividend += amount,
            TaxTreatment::PassiveIncome => self.passive += amount,
            TaxTreatment::BusinessIncome => self.business += amount,
            TaxTreatment::TaxExempt => self.exempt += amount,
            TaxTreatment::PreferentialRate => self.preferential += amount,
        }
    }

    fn amount(&self, treatment: TaxTreatment) -> Decimal {
        match treatment {
            TaxTreatment::Ordinary => self.ordinary,
            TaxTreatment::ShortTermCapitalGain => self.short_term,
            TaxTreatment::LongTermCapitalGain => self.long_term,
            TaxTreatment::QualifiedDividend => self.dividend,
            TaxTreatment::PassiveIncome => self.passive,
            TaxTreatment::BusinessIncome => self.business,
            TaxTreatment::TaxExempt => self.exempt,
            TaxTreatment::PreferentialRate => self.preferential,
        }
    }

    fn total(&self) -> Decimal {
        TaxTreatment::ALL
            .iter()
            .fold(Decimal::ZERO, |acc, t| acc + self.amount(*t))
    }
}

/// Per-treatment tax amounts used to build the breakdown lines.
#[derive(Debug, Clone, Copy)]
struct ComponentTaxes {
    income_tax: Decimal,
    short_term_tax: Decimal,
    long_term_tax: Decimal,
    dividend_tax: Decimal,
    passive_line_tax: Decimal,
    preferential_line_tax: Decimal,
    corporate_tax: Decimal,
}

/// Calculator over one resolved jurisdiction and entity rule.
///
/// [`compute_tax`] resolves the profile's identifiers against the rule
/// tables and drives this; callers holding already-resolved references
/// can use the engine directly.
#[derive(Debug, Clone)]
pub struct TaxEngine<'a> {
    jurisdiction: &'a JurisdictionConfig,
    entity_rule: &'a EntityTypeRule,
}

impl<'a> TaxEngine<'a> {
    pub fn new(
        jurisdiction: &'a JurisdictionConfig,
        entity_rule: &'a EntityTypeRule,
    ) -> Self {
        Self {
            jurisdiction,
            entity_rule,
        }
    }

    /// Computes the full liability breakdown for a profile.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError`] if the entity type is not valid in the
    /// jurisdiction, an amount is negative, or custom source ids repeat.
    /// Any all-zero profile computes to a valid zero-tax result.
    pub fn compute(&self, profile: &TaxProfile) -> Result<TaxComputationResult, ProfileError> {
        self.validate(profile)?;

        // Bucket every amount by treatment
        let buckets = self.bucket_income(profile);
        let total_income = buckets.total();

        // Entity branch: pass-through merges business into the ordinary
        // base; a taxable entity pays corporate tax on it instead
        let (ordinary_base, corporate_tax) = if self.entity_rule.is_pass_through {
            (buckets.ordinary + buckets.business, Decimal::ZERO)
        } else {
            (buckets.ordinary, self.corporate_tax(buckets.business))
        };

        // Deductions reduce the ordinary base only, floored at zero
        let total_deductions = self.jurisdiction.standard_deduction + profile.deductible_expenses;
        let taxable_ordinary_income = max(ordinary_base - total_deductions, Decimal::ZERO);
        if total_deductions > ordinary_base && total_deductions > Decimal::ZERO {
            warn!(
                ordinary_base = %ordinary_base,
                total_deductions = %total_deductions,
                "deductions exceed ordinary income; taxable base floored at zero"
            );
        }

        // Progressive tax on the ordinary base
        let income_tax = round_half_up(brackets::progressive_tax(
            taxable_ordinary_income,
            &self.jurisdiction.ordinary_brackets,
        ));

        // Flat-rate buckets, each rounded as its own line
        let gains = &self.jurisdiction.capital_gains;
        let short_term_tax = round_half_up(buckets.short_term * gains.short_term_rate);
        let long_term_tax = round_half_up(buckets.long_term * gains.long_term_rate);
        let capital_gains_tax = short_term_tax + long_term_tax;
        let dividend_tax = round_half_up(buckets.dividend * self.jurisdiction.dividend_rate);

        // Passive and preferential income ride the long-term gains rate
        let passive_line_tax = round_half_up(buckets.passive * gains.long_term_rate);
        let preferential_line_tax = round_half_up(buckets.preferential * gains.long_term_rate);
        let passive_tax = passive_line_tax + preferential_line_tax;

        let social_security = self.social_security(profile, buckets.ordinary, buckets.business);
        let social_security_tax = social_security.taxpayer_total();

        let total_tax = income_tax
            + capital_gains_tax
            + dividend_tax
            + passive_tax
            + social_security_tax
            + corporate_tax;
        let net_income = total_income - total_tax;
        let effective_rate = if total_income == Decimal::ZERO {
            Decimal::ZERO
        } else {
            round_rate(total_tax / total_income)
        };
        let marginal_rate = brackets::marginal_rate(
            taxable_ordinary_income,
            &self.jurisdiction.ordinary_brackets,
        );

        let breakdown_by_treatment = self.breakdown(
            &buckets,
            ComponentTaxes {
                income_tax,
                short_term_tax,
                long_term_tax,
                dividend_tax,
                passive_line_tax,
                preferential_line_tax,
                corporate_tax,
            },
        );

        Ok(TaxComputationResult {
            total_income,
            total_deductions,
            taxable_ordinary_income,
            income_tax,
            capital_gains_tax,
            dividend_tax,
            passive_tax,
            social_security,
            social_security_tax,
            corporate_tax,
            total_tax,
            net_income,
            effective_rate,
            marginal_rate,
            breakdown_by_treatment,
        })
    }

    /// Rejects invalid profiles before any arithmetic runs.
    fn validate(&self, profile: &TaxProfile) -> Result<(), ProfileError> {
        if !self.jurisdiction.allows_entity_type(profile.entity_type) {
            return Err(ProfileError::EntityTypeNotValid {
                entity_type: profile.entity_type,
                jurisdiction: self.jurisdiction.id.clone(),
            });
        }

        let standard_fields = [
            ("salary", profile.salary),
            ("business income", profile.business_income),
            ("short-term capital gains", profile.capital_gains_short_term),
            ("long-term capital gains", profile.capital_gains_long_term),
            ("dividends", profile.dividends),
            ("rental income", profile.rental_income),
            ("crypto gains", profile.crypto_gains),
            ("deductible expenses", profile.deductible_expenses),
        ];
        for (field, amount) in standard_fields {
            if amount < Decimal::ZERO {
                return Err(ProfileError::NegativeAmount {
                    field: field.to_owned(),
                    amount,
                });
            }
        }

        let mut seen_ids = HashSet::new();
        for source in &profile.custom_income_sources {
            if source.amount < Decimal::ZERO {
                return Err(ProfileError::NegativeAmount {
                    field: format!("custom income source '{}'", source.id),
                    amount: source.amount,
                });
            }
            if !seen_ids.insert(source.id.as_str()) {
                return Err(ProfileError::DuplicateSourceId {
                    id: source.id.clone(),
                });
            }
        }

        Ok(())
    }

    /// Buckets the standard fields by their fixed treatments and every
    /// custom source by its stored treatment.
    fn bucket_income(&self, profile: &TaxProfile) -> TreatmentBuckets {
        let mut buckets = TreatmentBuckets::default();

        if self.entity_rule.owner_compensation_taxable {
            buckets.add(TaxTreatment::Ordinary, profile.salary);
        } else {
            // Untaxed owner draw: counts toward total income, taxed nowhere
            if profile.salary > Decimal::ZERO {
                warn!(
                    salary = %profile.salary,
                    entity_type = self.entity_rule.entity_type.as_str(),
                    "owner compensation is not taxable for this entity type; salary treated as a draw"
                );
            }
            buckets.add(TaxTreatment::TaxExempt, profile.salary);
        }
        buckets.add(TaxTreatment::BusinessIncome, profile.business_income);
        buckets.add(TaxTreatment::ShortTermCapitalGain, profile.capital_gains_short_term);
        buckets.add(TaxTreatment::LongTermCapitalGain, profile.capital_gains_long_term);
        buckets.add(TaxTreatment::QualifiedDividend, profile.dividends);
        buckets.add(TaxTreatment::PassiveIncome, profile.rental_income);
        // Crypto is property in the modeled jurisdictions
        buckets.add(TaxTreatment::ShortTermCapitalGain, profile.crypto_gains);

        for source in &profile.custom_income_sources {
            buckets.add(source.tax_treatment, source.amount);
        }

        buckets
    }

    /// Entity-level tax on business profit at the standard rate plus all
    /// surcharges. Deductible expenses never reduce this base.
    fn corporate_tax(&self, business_income: Decimal) -> Decimal {
        round_half_up(business_income * self.jurisdiction.corporate.total_rate())
    }

    /// Applies the contribution legs. Employee and employer legs run on
    /// the non-business ordinary income; the self-employed leg runs on
    /// business income and only for pass-through entities, where that
    /// income is the owner's own.
    fn social_security(
        &self,
        profile: &TaxProfile,
        ordinary_income: Decimal,
        business_income: Decimal,
    ) -> SocialSecurityContributions {
        let ss = &self.jurisdiction.social_security;

        let employee =
            round_half_up(capped(ordinary_income, ss.employee_cap) * ss.employee_rate);
        let employer =
            round_half_up(capped(ordinary_income, ss.employer_cap) * ss.employer_rate);

        let self_employed = match ss.self_employed_rate {
            Some(rate) if self.entity_rule.is_pass_through => {
                let basis = match ss.self_employed_basis {
                    SeContributionBasis::GrossBusinessIncome => business_income,
                    SeContributionBasis::NetOfDeductibleExpenses => {
                        max(business_income - profile.deductible_expenses, Decimal::ZERO)
                    }
                };
                round_half_up(capped(basis, ss.self_employed_cap) * rate)
            }
            _ => Decimal::ZERO,
        };

        SocialSecurityContributions {
            employee,
            employer,
            self_employed,
        }
    }

    /// One line per non-empty bucket, in treatment declaration order.
    ///
    /// Bracket tax is attributed pro rata by amount between the ordinary
    /// and business lines (business share by subtraction, so the two
    /// sum exactly); for a taxable entity the business line carries the
    /// corporate tax instead. Social security stays out of the lines.
    fn breakdown(
        &self,
        buckets: &TreatmentBuckets,
        taxes: ComponentTaxes,
    ) -> Vec<TreatmentLine> {
        let (ordinary_income_tax, business_line_tax) = if self.entity_rule.is_pass_through {
            let base = buckets.ordinary + buckets.business;
            if base > Decimal::ZERO && buckets.business > Decimal::ZERO {
                let ordinary_share =
                    round_half_up(taxes.income_tax * buckets.ordinary / base);
                (ordinary_share, taxes.income_tax - ordinary_share)
            } else {
                (taxes.income_tax, Decimal::ZERO)
            }
        } else {
            (taxes.income_tax, taxes.corporate_tax)
        };

        TaxTreatment::ALL
            .iter()
            .filter(|treatment| buckets.amount(**treatment) > Decimal::ZERO)
            .map(|treatment| {
                let tax = match treatment {
                    TaxTreatment::Ordinary => ordinary_income_tax,
                    TaxTreatment::ShortTermCapitalGain => taxes.short_term_tax,
                    TaxTreatment::LongTermCapitalGain => taxes.long_term_tax,
                    TaxTreatment::QualifiedDividend => taxes.dividend_tax,
                    TaxTreatment::PassiveIncome => taxes.passive_line_tax,
                    TaxTreatment::BusinessIncome => business_line_tax,
                    TaxTreatment::TaxExempt => Decimal::ZERO,
                    TaxTreatment::PreferentialRate => taxes.preferential_line_tax,
                };
                TreatmentLine {
                    treatment: *treatment,
                    amount: buckets.amount(*treatment),
                    tax,
                }
            })
            .collect()
    }
}

fn capped(
    basis: Decimal,
    cap: Option<Decimal>,
) -> Decimal {
    match cap {
        Some(cap) => basis.min(cap),
        None => basis,
    }
}

/// Resolves the profile's jurisdiction and entity rule, then computes.
///
/// # Errors
///
/// Returns [`ProfileError`] for an unknown jurisdiction id, a missing
/// entity rule, or any profile rejection from [`TaxEngine::compute`].
pub fn compute_tax(
    profile: &TaxProfile,
    jurisdictions: &JurisdictionTable,
    entities: &EntityRuleTable,
) -> Result<TaxComputationResult, ProfileError> {
    let jurisdiction = jurisdictions
        .get(&profile.jurisdiction_id)
        .ok_or_else(|| ProfileError::UnknownJurisdiction(profile.jurisdiction_id.clone()))?;
    let entity_rule = entities
        .get(profile.entity_type)
        .ok_or(ProfileError::MissingEntityRule(profile.entity_type))?;

    TaxEngine::new(jurisdiction, entity_rule).compute(profile)
}
