//! Optimization advisor.
//!
//! Inspects a computed breakdown together with the profile it came from
//! and emits a short, priority-ordered list of advisory strings. The
//! advisor is derived and non-authoritative: it never errors, and any
//! rule whose inputs do not line up simply stays silent.

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;
use crate::models::{
    EntityTypeRule, IncomeType, JurisdictionConfig, TaxComputationResult, TaxProfile, TaxTreatment,
};

/// Evaluates every advisory rule against the profile and its computed
/// result. Rules are independent; the output order is priority order.
pub fn suggest_optimizations(
    profile: &TaxProfile,
    jurisdiction: &JurisdictionConfig,
    entity_rule: &EntityTypeRule,
    result: &TaxComputationResult,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if let Some(s) = holding_period(jurisdiction, result) {
        suggestions.push(s);
    }
    if let Some(s) = entity_structure(jurisdiction, entity_rule, result) {
        suggestions.push(s);
    }
    if let Some(s) = distribution_planning(entity_rule, result) {
        suggestions.push(s);
    }
    if let Some(s) = expense_tracking(profile, result) {
        suggestions.push(s);
    }
    suggestions.extend(treatment_mismatches(profile));

    suggestions
}

/// Total amount on the breakdown line for one treatment, zero if the
/// bucket was empty.
fn bucket_amount(
    result: &TaxComputationResult,
    treatment: TaxTreatment,
) -> Decimal {
    result
        .breakdown_by_treatment
        .iter()
        .filter(|line| line.treatment == treatment)
        .map(|line| line.amount)
        .sum()
}

fn percent(rate: Decimal) -> Decimal {
    (rate * Decimal::ONE_HUNDRED).normalize()
}

/// Short-term gains taxed above the long-term rate: quantify what longer
/// holding periods would save.
fn holding_period(
    jurisdiction: &JurisdictionConfig,
    result: &TaxComputationResult,
) -> Option<String> {
    let short_term = bucket_amount(result, TaxTreatment::ShortTermCapitalGain);
    let gains = &jurisdiction.capital_gains;
    if short_term <= Decimal::ZERO || gains.long_term_rate >= gains.short_term_rate {
        return None;
    }

    let saving = round_half_up(short_term * (gains.short_term_rate - gains.long_term_rate));
    Some(format!(
        "Short-term gains of {short_term} are taxed at {}% against a long-term rate of {}%. \
         Extending holding periods past the long-term threshold would save roughly {saving}.",
        percent(gains.short_term_rate),
        percent(gains.long_term_rate),
    ))
}

/// Pass-through business profit taxed above the corporate rate: worth
/// evaluating a taxable entity.
fn entity_structure(
    jurisdiction: &JurisdictionConfig,
    entity_rule: &EntityTypeRule,
    result: &TaxComputationResult,
) -> Option<String> {
    let business = bucket_amount(result, TaxTreatment::BusinessIncome);
    let corporate_rate = jurisdiction.corporate.total_rate();
    if !entity_rule.is_pass_through
        || business <= Decimal::ZERO
        || result.marginal_rate <= corporate_rate
    {
        return None;
    }

    Some(format!(
        "Business income of {business} is taxed at your {}% marginal rate. \
         The {}% corporate rate in {} is lower; evaluate a non-pass-through structure.",
        percent(result.marginal_rate),
        percent(corporate_rate),
        jurisdiction.name,
    ))
}

/// Entity-level profit with no declared dividends: the estimate stops at
/// the entity boundary until distributions are on the profile.
fn distribution_planning(
    entity_rule: &EntityTypeRule,
    result: &TaxComputationResult,
) -> Option<String> {
    let business = bucket_amount(result, TaxTreatment::BusinessIncome);
    let dividends = bucket_amount(result, TaxTreatment::QualifiedDividend);
    if entity_rule.is_pass_through || business <= Decimal::ZERO || dividends > Decimal::ZERO {
        return None;
    }

    Some(format!(
        "Entity-level profit of {business} only reaches you through distributions. \
         Declare planned dividends on the profile so distribution tax is part of the estimate."
    ))
}

/// Business income with no recorded expenses: almost every business has
/// some.
fn expense_tracking(
    profile: &TaxProfile,
    result: &TaxComputationResult,
) -> Option<String> {
    let business = bucket_amount(result, TaxTreatment::BusinessIncome);
    if profile.deductible_expenses != Decimal::ZERO || business <= Decimal::ZERO {
        return None;
    }

    Some(
        "No deductible expenses are recorded against business income. \
         Tracked expenses reduce the taxable base."
            .to_owned(),
    )
}

/// Rental or royalty sources overridden to ordinary treatment are
/// usually a data-entry mistake, not a deliberate election.
fn treatment_mismatches(profile: &TaxProfile) -> Vec<String> {
    profile
        .custom_income_sources
        .iter()
        .filter(|source| {
            source.tax_treatment == TaxTreatment::Ordinary
                && matches!(source.income_type, IncomeType::Rental | IncomeType::Royalty)
        })
        .map(|source| {
            format!(
                "Custom source '{}' ({}) is treated as ordinary income but its type '{}' \
                 is normally passive. Check the treatment override.",
                source.id,
                source.label,
                source.income_type.as_str(),
            )
        })
        .collect()
}
