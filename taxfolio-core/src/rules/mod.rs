//! Jurisdiction and entity rule tables.
//!
//! Rule data is a set of plain values keyed by stable identifiers,
//! validated once at load time. The aggregation engine only ever sees
//! configurations that passed validation, so its arithmetic never has to
//! re-check structure. [`TaxRuleSet::builtin`] loads the compiled-in
//! 2025 tables; `taxfolio-data` can rebuild a table with CSV bracket
//! overrides through [`JurisdictionTable::new`].

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::advisor;
use crate::calculations::engine::{self, ProfileError};
use crate::models::{
    EntityType, EntityTypeRule, JurisdictionConfig, TaxComputationResult, TaxProfile,
};

mod entities;
mod jurisdictions;

/// Structural problems in rule data. Fatal at load time; never surfaced
/// per computation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A jurisdiction has an empty ordinary bracket schedule.
    #[error("jurisdiction '{jurisdiction}' has no ordinary brackets")]
    EmptyBrackets { jurisdiction: String },

    /// The first bracket does not start at zero.
    #[error("jurisdiction '{jurisdiction}': first bracket must start at 0, got {min_income}")]
    FirstBracketNotZero {
        jurisdiction: String,
        min_income: Decimal,
    },

    /// A bracket's upper bound does not exceed its lower bound.
    #[error("jurisdiction '{jurisdiction}': bracket at {min_income} has a non-increasing bound")]
    BoundsNotIncreasing {
        jurisdiction: String,
        min_income: Decimal,
    },

    /// Adjacent brackets leave a gap or overlap.
    #[error(
        "jurisdiction '{jurisdiction}': bracket at {min_income} is not contiguous with the previous bound {expected}"
    )]
    BracketGap {
        jurisdiction: String,
        expected: Decimal,
        min_income: Decimal,
    },

    /// A bracket other than the last has no upper bound.
    #[error("jurisdiction '{jurisdiction}': only the final bracket may be unbounded")]
    UnboundedBracketBeforeLast { jurisdiction: String },

    /// The final bracket has an upper bound.
    #[error("jurisdiction '{jurisdiction}': the final bracket must be unbounded")]
    LastBracketBounded { jurisdiction: String },

    /// Bracket rates decrease as income rises.
    #[error("jurisdiction '{jurisdiction}': bracket rates decrease at {min_income}")]
    DecreasingRate {
        jurisdiction: String,
        min_income: Decimal,
    },

    /// A rate lies outside `[0, 1]`.
    #[error("jurisdiction '{jurisdiction}': {field} {rate} is outside [0, 1]")]
    RateOutOfRange {
        jurisdiction: String,
        field: &'static str,
        rate: Decimal,
    },

    /// A cap or deduction amount is negative.
    #[error("jurisdiction '{jurisdiction}': {field} must be non-negative, got {value}")]
    NegativeAmount {
        jurisdiction: String,
        field: &'static str,
        value: Decimal,
    },

    /// A jurisdiction lists no valid entity types.
    #[error("jurisdiction '{jurisdiction}' lists no valid entity types")]
    NoEntityTypes { jurisdiction: String },

    /// Two jurisdiction configurations share an id.
    #[error("duplicate jurisdiction id '{id}'")]
    DuplicateJurisdiction { id: String },

    /// Two entity rules cover the same entity type.
    #[error("duplicate entity rule for '{}'", .entity_type.as_str())]
    DuplicateEntityRule { entity_type: EntityType },

    /// A jurisdiction allows an entity type that has no rule.
    #[error(
        "jurisdiction '{jurisdiction}' allows entity type '{}' which has no rule",
        .entity_type.as_str()
    )]
    MissingEntityRule {
        jurisdiction: String,
        entity_type: EntityType,
    },
}

fn check_rate(
    jurisdiction: &str,
    field: &'static str,
    rate: Decimal,
) -> Result<(), ConfigError> {
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(ConfigError::RateOutOfRange {
            jurisdiction: jurisdiction.to_owned(),
            field,
            rate,
        });
    }
    Ok(())
}

fn check_non_negative(
    jurisdiction: &str,
    field: &'static str,
    value: Decimal,
) -> Result<(), ConfigError> {
    if value < Decimal::ZERO {
        return Err(ConfigError::NegativeAmount {
            jurisdiction: jurisdiction.to_owned(),
            field,
            value,
        });
    }
    Ok(())
}

/// Checks one configuration against every structural invariant.
fn validate_jurisdiction(config: &JurisdictionConfig) -> Result<(), ConfigError> {
    let id = config.id.as_str();

    let Some(first) = config.ordinary_brackets.first() else {
        return Err(ConfigError::EmptyBrackets {
            jurisdiction: id.to_owned(),
        });
    };
    if first.min_income != Decimal::ZERO {
        return Err(ConfigError::FirstBracketNotZero {
            jurisdiction: id.to_owned(),
            min_income: first.min_income,
        });
    }
    for bracket in &config.ordinary_brackets {
        check_rate(id, "bracket rate", bracket.rate)?;
    }
    for pair in config.ordinary_brackets.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        let Some(prev_max) = prev.max_income else {
            return Err(ConfigError::UnboundedBracketBeforeLast {
                jurisdiction: id.to_owned(),
            });
        };
        if prev_max <= prev.min_income {
            return Err(ConfigError::BoundsNotIncreasing {
                jurisdiction: id.to_owned(),
                min_income: prev.min_income,
            });
        }
        if next.min_income != prev_max {
            return Err(ConfigError::BracketGap {
                jurisdiction: id.to_owned(),
                expected: prev_max,
                min_income: next.min_income,
            });
        }
        if next.rate < prev.rate {
            return Err(ConfigError::DecreasingRate {
                jurisdiction: id.to_owned(),
                min_income: next.min_income,
            });
        }
    }
    if config
        .ordinary_brackets
        .last()
        .is_some_and(|b| b.max_income.is_some())
    {
        return Err(ConfigError::LastBracketBounded {
            jurisdiction: id.to_owned(),
        });
    }

    check_rate(id, "short-term capital-gains rate", config.capital_gains.short_term_rate)?;
    check_rate(id, "long-term capital-gains rate", config.capital_gains.long_term_rate)?;
    check_rate(id, "dividend rate", config.dividend_rate)?;

    let ss = &config.social_security;
    check_rate(id, "employee social-security rate", ss.employee_rate)?;
    check_rate(id, "employer social-security rate", ss.employer_rate)?;
    if let Some(rate) = ss.self_employed_rate {
        check_rate(id, "self-employed social-security rate", rate)?;
    }
    if let Some(cap) = ss.employee_cap {
        check_non_negative(id, "employee social-security cap", cap)?;
    }
    if let Some(cap) = ss.employer_cap {
        check_non_negative(id, "employer social-security cap", cap)?;
    }
    if let Some(cap) = ss.self_employed_cap {
        check_non_negative(id, "self-employed social-security cap", cap)?;
    }

    check_rate(id, "corporate rate", config.corporate.standard_rate)?;
    for surcharge in &config.corporate.surcharges {
        check_rate(id, "corporate surcharge rate", surcharge.rate)?;
    }

    check_non_negative(id, "standard deduction", config.standard_deduction)?;

    if config.valid_entity_types.is_empty() {
        return Err(ConfigError::NoEntityTypes {
            jurisdiction: id.to_owned(),
        });
    }

    Ok(())
}

/// Jurisdiction configurations keyed by id, validated at construction.
#[derive(Debug, Clone)]
pub struct JurisdictionTable {
    configs: BTreeMap<String, JurisdictionConfig>,
}

impl JurisdictionTable {
    /// Builds a table, validating every configuration and rejecting
    /// duplicate ids.
    pub fn new(configs: Vec<JurisdictionConfig>) -> Result<Self, ConfigError> {
        let mut table = BTreeMap::new();
        for config in configs {
            validate_jurisdiction(&config)?;
            let id = config.id.clone();
            if table.insert(id.clone(), config).is_some() {
                return Err(ConfigError::DuplicateJurisdiction { id });
            }
        }
        Ok(Self { configs: table })
    }

    pub fn get(&self, id: &str) -> Option<&JurisdictionConfig> {
        self.configs.get(id)
    }

    /// Configurations in id order.
    pub fn iter(&self) -> impl Iterator<Item = &JurisdictionConfig> {
        self.configs.values()
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}

/// Entity rules keyed by entity type.
#[derive(Debug, Clone)]
pub struct EntityRuleTable {
    rules: BTreeMap<EntityType, EntityTypeRule>,
}

impl EntityRuleTable {
    pub fn new(rules: Vec<EntityTypeRule>) -> Result<Self, ConfigError> {
        let mut table = BTreeMap::new();
        for rule in rules {
            if table.insert(rule.entity_type, rule).is_some() {
                return Err(ConfigError::DuplicateEntityRule {
                    entity_type: rule.entity_type,
                });
            }
        }
        Ok(Self { rules: table })
    }

    pub fn get(&self, entity_type: EntityType) -> Option<&EntityTypeRule> {
        self.rules.get(&entity_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EntityTypeRule> {
        self.rules.values()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// A validated jurisdiction table plus entity rule table.
///
/// Construction cross-checks that every entity type a jurisdiction allows
/// has a rule, so lookups during computation cannot dangle.
#[derive(Debug, Clone)]
pub struct TaxRuleSet {
    jurisdictions: JurisdictionTable,
    entities: EntityRuleTable,
}

impl TaxRuleSet {
    pub fn new(
        jurisdictions: JurisdictionTable,
        entities: EntityRuleTable,
    ) -> Result<Self, ConfigError> {
        for config in jurisdictions.iter() {
            for entity_type in &config.valid_entity_types {
                if entities.get(*entity_type).is_none() {
                    return Err(ConfigError::MissingEntityRule {
                        jurisdiction: config.id.clone(),
                        entity_type: *entity_type,
                    });
                }
            }
        }
        Ok(Self {
            jurisdictions,
            entities,
        })
    }

    /// Loads the compiled-in 2025 rule tables.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::new(
            JurisdictionTable::new(jurisdictions::builtin())?,
            EntityRuleTable::new(entities::builtin())?,
        )
    }

    pub fn jurisdictions(&self) -> &JurisdictionTable {
        &self.jurisdictions
    }

    pub fn entities(&self) -> &EntityRuleTable {
        &self.entities
    }

    /// Computes a full liability breakdown for the profile.
    pub fn compute(&self, profile: &TaxProfile) -> Result<TaxComputationResult, ProfileError> {
        engine::compute_tax(profile, &self.jurisdictions, &self.entities)
    }

    /// Advisory suggestions for a computed result. Returns an empty list
    /// when the profile's jurisdiction or entity rule cannot be resolved;
    /// advisory generation never fails.
    pub fn suggest(
        &self,
        profile: &TaxProfile,
        result: &TaxComputationResult,
    ) -> Vec<String> {
        let Some(jurisdiction) = self.jurisdictions.get(&profile.jurisdiction_id) else {
            return Vec::new();
        };
        let Some(entity_rule) = self.entities.get(profile.entity_type) else {
            return Vec::new();
        };
        advisor::suggest_optimizations(profile, jurisdiction, entity_rule, result)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use crate::models::{
        CapitalGainsRates, CorporateRates, SeContributionBasis, SocialSecurityRates, TaxBracket,
    };

    use super::*;

    fn test_jurisdiction() -> JurisdictionConfig {
        JurisdictionConfig {
            id: "test".into(),
            name: "Testland".into(),
            currency_code: "USD".into(),
            currency_symbol: "$".into(),
            tax_year: 2025,
            ordinary_brackets: vec![
                TaxBracket {
                    min_income: dec!(0),
                    max_income: Some(dec!(10000)),
                    rate: dec!(0.10),
                },
                TaxBracket {
                    min_income: dec!(10000),
                    max_income: None,
                    rate: dec!(0.20),
                },
            ],
            capital_gains: CapitalGainsRates {
                short_term_rate: dec!(0.20),
                long_term_rate: dec!(0.10),
            },
            dividend_rate: dec!(0.10),
            social_security: SocialSecurityRates {
                employee_rate: dec!(0.05),
                employee_cap: Some(dec!(100000)),
                employer_rate: dec!(0.05),
                employer_cap: Some(dec!(100000)),
                self_employed_rate: Some(dec!(0.10)),
                self_employed_cap: Some(dec!(100000)),
                self_employed_basis: SeContributionBasis::NetOfDeductibleExpenses,
            },
            corporate: CorporateRates {
                standard_rate: dec!(0.21),
                surcharges: vec![],
            },
            standard_deduction: dec!(5000),
            valid_entity_types: vec![EntityType::Individual],
        }
    }

    fn test_entity_rules() -> Vec<EntityTypeRule> {
        vec![EntityTypeRule {
            entity_type: EntityType::Individual,
            is_pass_through: true,
            owner_compensation_taxable: true,
        }]
    }

    // =========================================================================
    // validate_jurisdiction tests
    // =========================================================================

    #[test]
    fn validate_accepts_well_formed_config() {
        let config = test_jurisdiction();

        let result = validate_jurisdiction(&config);

        assert_eq!(result, Ok(()));
    }

    #[test]
    fn validate_rejects_empty_brackets() {
        let mut config = test_jurisdiction();
        config.ordinary_brackets.clear();

        let result = validate_jurisdiction(&config);

        assert_eq!(
            result,
            Err(ConfigError::EmptyBrackets {
                jurisdiction: "test".into()
            })
        );
    }

    #[test]
    fn validate_rejects_first_bracket_above_zero() {
        let mut config = test_jurisdiction();
        config.ordinary_brackets[0].min_income = dec!(100);

        let result = validate_jurisdiction(&config);

        assert_eq!(
            result,
            Err(ConfigError::FirstBracketNotZero {
                jurisdiction: "test".into(),
                min_income: dec!(100),
            })
        );
    }

    #[test]
    fn validate_rejects_bracket_gap() {
        let mut config = test_jurisdiction();
        config.ordinary_brackets[1].min_income = dec!(12000);

        let result = validate_jurisdiction(&config);

        assert_eq!(
            result,
            Err(ConfigError::BracketGap {
                jurisdiction: "test".into(),
                expected: dec!(10000),
                min_income: dec!(12000),
            })
        );
    }

    #[test]
    fn validate_rejects_non_increasing_bounds() {
        let mut config = test_jurisdiction();
        config.ordinary_brackets[0].max_income = Some(dec!(0));

        let result = validate_jurisdiction(&config);

        assert_eq!(
            result,
            Err(ConfigError::BoundsNotIncreasing {
                jurisdiction: "test".into(),
                min_income: dec!(0),
            })
        );
    }

    #[test]
    fn validate_rejects_unbounded_bracket_before_last() {
        let mut config = test_jurisdiction();
        config.ordinary_brackets[0].max_income = None;

        let result = validate_jurisdiction(&config);

        assert_eq!(
            result,
            Err(ConfigError::UnboundedBracketBeforeLast {
                jurisdiction: "test".into()
            })
        );
    }

    #[test]
    fn validate_rejects_bounded_final_bracket() {
        let mut config = test_jurisdiction();
        config.ordinary_brackets[1].max_income = Some(dec!(50000));

        let result = validate_jurisdiction(&config);

        assert_eq!(
            result,
            Err(ConfigError::LastBracketBounded {
                jurisdiction: "test".into()
            })
        );
    }

    #[test]
    fn validate_rejects_decreasing_rates() {
        let mut config = test_jurisdiction();
        config.ordinary_brackets[1].rate = dec!(0.05);

        let result = validate_jurisdiction(&config);

        assert_eq!(
            result,
            Err(ConfigError::DecreasingRate {
                jurisdiction: "test".into(),
                min_income: dec!(10000),
            })
        );
    }

    #[test]
    fn validate_rejects_rate_above_one() {
        let mut config = test_jurisdiction();
        config.dividend_rate = dec!(1.5);

        let result = validate_jurisdiction(&config);

        assert_eq!(
            result,
            Err(ConfigError::RateOutOfRange {
                jurisdiction: "test".into(),
                field: "dividend rate",
                rate: dec!(1.5),
            })
        );
    }

    #[test]
    fn validate_rejects_negative_standard_deduction() {
        let mut config = test_jurisdiction();
        config.standard_deduction = dec!(-1);

        let result = validate_jurisdiction(&config);

        assert_eq!(
            result,
            Err(ConfigError::NegativeAmount {
                jurisdiction: "test".into(),
                field: "standard deduction",
                value: dec!(-1),
            })
        );
    }

    #[test]
    fn validate_rejects_negative_cap() {
        let mut config = test_jurisdiction();
        config.social_security.employee_cap = Some(dec!(-100));

        let result = validate_jurisdiction(&config);

        assert_eq!(
            result,
            Err(ConfigError::NegativeAmount {
                jurisdiction: "test".into(),
                field: "employee social-security cap",
                value: dec!(-100),
            })
        );
    }

    #[test]
    fn validate_rejects_empty_entity_type_list() {
        let mut config = test_jurisdiction();
        config.valid_entity_types.clear();

        let result = validate_jurisdiction(&config);

        assert_eq!(
            result,
            Err(ConfigError::NoEntityTypes {
                jurisdiction: "test".into()
            })
        );
    }

    // =========================================================================
    // table construction tests
    // =========================================================================

    #[test]
    fn jurisdiction_table_rejects_duplicate_ids() {
        let result = JurisdictionTable::new(vec![test_jurisdiction(), test_jurisdiction()]);

        assert!(matches!(
            result,
            Err(ConfigError::DuplicateJurisdiction { .. })
        ));
    }

    #[test]
    fn jurisdiction_table_lookup_by_id() {
        let table = JurisdictionTable::new(vec![test_jurisdiction()]).unwrap();

        assert!(table.get("test").is_some());
        assert!(table.get("atlantis").is_none());
    }

    #[test]
    fn entity_rule_table_rejects_duplicates() {
        let mut rules = test_entity_rules();
        rules.push(rules[0]);

        let result = EntityRuleTable::new(rules);

        assert_eq!(
            result.err(),
            Some(ConfigError::DuplicateEntityRule {
                entity_type: EntityType::Individual
            })
        );
    }

    #[test]
    fn rule_set_rejects_entity_type_without_rule() {
        let mut config = test_jurisdiction();
        config.valid_entity_types.push(EntityType::CCorporation);
        let jurisdictions = JurisdictionTable::new(vec![config]).unwrap();
        let entities = EntityRuleTable::new(test_entity_rules()).unwrap();

        let result = TaxRuleSet::new(jurisdictions, entities);

        assert_eq!(
            result.err(),
            Some(ConfigError::MissingEntityRule {
                jurisdiction: "test".into(),
                entity_type: EntityType::CCorporation,
            })
        );
    }

    #[test]
    fn builtin_rule_set_loads_and_validates() {
        let rules = TaxRuleSet::builtin().unwrap();

        assert_eq!(rules.jurisdictions().len(), 8);
        assert_eq!(rules.entities().len(), 6);
        assert!(rules.jurisdictions().get("us").is_some());
        assert!(rules.jurisdictions().get("sg").is_some());
    }
}
