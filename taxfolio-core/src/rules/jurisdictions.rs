//! Builtin jurisdiction configurations, 2025 vintage.
//!
//! Each function returns one [`JurisdictionConfig`] data value; the table
//! constructor validates them against the structural invariants. Rates are
//! estimates of the published 2025 schedules, flattened where this engine
//! models a single rate (see the per-jurisdiction notes). Adding a
//! jurisdiction means adding a function here and listing it in
//! [`builtin`] — no engine change.

use rust_decimal_macros::dec;

use crate::models::{
    CapitalGainsRates, CorporateRates, CorporateSurcharge, EntityType, JurisdictionConfig,
    SeContributionBasis, SocialSecurityRates, TaxBracket,
};

pub(super) fn builtin() -> Vec<JurisdictionConfig> {
    vec![
        united_states(),
        united_kingdom(),
        germany(),
        france(),
        canada(),
        australia(),
        singapore(),
        united_arab_emirates(),
    ]
}

fn bracket(
    min_income: rust_decimal::Decimal,
    max_income: Option<rust_decimal::Decimal>,
    rate: rust_decimal::Decimal,
) -> TaxBracket {
    TaxBracket {
        min_income,
        max_income,
        rate,
    }
}

/// Single-filer federal schedule. Short-term gains modeled at the top
/// ordinary rate; the combined 7.65% employee rate carries the social
/// security wage cap even though the Medicare portion is uncapped.
fn united_states() -> JurisdictionConfig {
    JurisdictionConfig {
        id: "us".into(),
        name: "United States".into(),
        currency_code: "USD".into(),
        currency_symbol: "$".into(),
        tax_year: 2025,
        ordinary_brackets: vec![
            bracket(dec!(0), Some(dec!(11925)), dec!(0.10)),
            bracket(dec!(11925), Some(dec!(48475)), dec!(0.12)),
            bracket(dec!(48475), Some(dec!(103350)), dec!(0.22)),
            bracket(dec!(103350), Some(dec!(197300)), dec!(0.24)),
            bracket(dec!(197300), Some(dec!(250525)), dec!(0.32)),
            bracket(dec!(250525), Some(dec!(626350)), dec!(0.35)),
            bracket(dec!(626350), None, dec!(0.37)),
        ],
        capital_gains: CapitalGainsRates {
            short_term_rate: dec!(0.37),
            long_term_rate: dec!(0.15),
        },
        dividend_rate: dec!(0.15),
        social_security: SocialSecurityRates {
            employee_rate: dec!(0.0765),
            employee_cap: Some(dec!(176100)),
            employer_rate: dec!(0.0765),
            employer_cap: Some(dec!(176100)),
            self_employed_rate: Some(dec!(0.153)),
            self_employed_cap: Some(dec!(176100)),
            self_employed_basis: SeContributionBasis::NetOfDeductibleExpenses,
        },
        corporate: CorporateRates {
            standard_rate: dec!(0.21),
            surcharges: vec![],
        },
        standard_deduction: dec!(15000),
        valid_entity_types: vec![
            EntityType::Individual,
            EntityType::SoleProprietor,
            EntityType::Partnership,
            EntityType::LlcPassThrough,
            EntityType::SCorporation,
            EntityType::CCorporation,
        ],
    }
}

/// Bands apply to income above the personal allowance, which is carried
/// as the standard deduction. National insurance modeled at the main
/// employee rate up to the upper earnings limit.
fn united_kingdom() -> JurisdictionConfig {
    JurisdictionConfig {
        id: "uk".into(),
        name: "United Kingdom".into(),
        currency_code: "GBP".into(),
        currency_symbol: "£".into(),
        tax_year: 2025,
        ordinary_brackets: vec![
            bracket(dec!(0), Some(dec!(37700)), dec!(0.20)),
            bracket(dec!(37700), Some(dec!(125140)), dec!(0.40)),
            bracket(dec!(125140), None, dec!(0.45)),
        ],
        capital_gains: CapitalGainsRates {
            short_term_rate: dec!(0.20),
            long_term_rate: dec!(0.20),
        },
        dividend_rate: dec!(0.0875),
        social_security: SocialSecurityRates {
            employee_rate: dec!(0.08),
            employee_cap: Some(dec!(50270)),
            employer_rate: dec!(0.138),
            employer_cap: None,
            self_employed_rate: Some(dec!(0.06)),
            self_employed_cap: Some(dec!(50270)),
            self_employed_basis: SeContributionBasis::NetOfDeductibleExpenses,
        },
        corporate: CorporateRates {
            standard_rate: dec!(0.25),
            surcharges: vec![],
        },
        standard_deduction: dec!(12570),
        valid_entity_types: vec![
            EntityType::Individual,
            EntityType::SoleProprietor,
            EntityType::Partnership,
            EntityType::CCorporation,
        ],
    }
}

/// The continuous progression formula is approximated with stepped zones
/// above the basic allowance. Investment income at the flat withholding
/// rate including the solidarity surcharge. No general self-employed
/// social-insurance obligation, so that leg is unset.
fn germany() -> JurisdictionConfig {
    JurisdictionConfig {
        id: "de".into(),
        name: "Germany".into(),
        currency_code: "EUR".into(),
        currency_symbol: "€".into(),
        tax_year: 2025,
        ordinary_brackets: vec![
            bracket(dec!(0), Some(dec!(17000)), dec!(0.14)),
            bracket(dec!(17000), Some(dec!(56000)), dec!(0.24)),
            bracket(dec!(56000), Some(dec!(265000)), dec!(0.42)),
            bracket(dec!(265000), None, dec!(0.45)),
        ],
        capital_gains: CapitalGainsRates {
            short_term_rate: dec!(0.26375),
            long_term_rate: dec!(0.26375),
        },
        dividend_rate: dec!(0.26375),
        social_security: SocialSecurityRates {
            employee_rate: dec!(0.20),
            employee_cap: Some(dec!(96600)),
            employer_rate: dec!(0.20),
            employer_cap: Some(dec!(96600)),
            self_employed_rate: None,
            self_employed_cap: None,
            self_employed_basis: SeContributionBasis::NetOfDeductibleExpenses,
        },
        corporate: CorporateRates {
            standard_rate: dec!(0.15),
            surcharges: vec![
                CorporateSurcharge {
                    rate: dec!(0.00825),
                    basis: "solidarity surcharge, 5.5% of the corporate rate".into(),
                },
                CorporateSurcharge {
                    rate: dec!(0.14),
                    basis: "municipal trade tax at the federal average multiplier".into(),
                },
            ],
        },
        standard_deduction: dec!(12096),
        valid_entity_types: vec![
            EntityType::Individual,
            EntityType::SoleProprietor,
            EntityType::Partnership,
            EntityType::CCorporation,
        ],
    }
}

/// Zero-rate first band instead of a separate allowance. Investment
/// income at the flat prélèvement forfaitaire unique. Contributions are
/// largely uncapped, so the caps stay unset.
fn france() -> JurisdictionConfig {
    JurisdictionConfig {
        id: "fr".into(),
        name: "France".into(),
        currency_code: "EUR".into(),
        currency_symbol: "€".into(),
        tax_year: 2025,
        ordinary_brackets: vec![
            bracket(dec!(0), Some(dec!(11497)), dec!(0)),
            bracket(dec!(11497), Some(dec!(29315)), dec!(0.11)),
            bracket(dec!(29315), Some(dec!(83823)), dec!(0.30)),
            bracket(dec!(83823), Some(dec!(180294)), dec!(0.41)),
            bracket(dec!(180294), None, dec!(0.45)),
        ],
        capital_gains: CapitalGainsRates {
            short_term_rate: dec!(0.30),
            long_term_rate: dec!(0.30),
        },
        dividend_rate: dec!(0.30),
        social_security: SocialSecurityRates {
            employee_rate: dec!(0.22),
            employee_cap: None,
            employer_rate: dec!(0.45),
            employer_cap: None,
            self_employed_rate: Some(dec!(0.26)),
            self_employed_cap: None,
            self_employed_basis: SeContributionBasis::NetOfDeductibleExpenses,
        },
        corporate: CorporateRates {
            standard_rate: dec!(0.25),
            surcharges: vec![CorporateSurcharge {
                rate: dec!(0.0083),
                basis: "social contribution, 3.3% of corporate tax above the allowance".into(),
            }],
        },
        standard_deduction: dec!(0),
        valid_entity_types: vec![
            EntityType::Individual,
            EntityType::SoleProprietor,
            EntityType::Partnership,
            EntityType::CCorporation,
        ],
    }
}

/// Federal schedule with the basic personal amount as the standard
/// deduction. Gains modeled flat at the 50%-inclusion midpoint; the
/// provincial layer is carried as a corporate surcharge at the
/// provincial average.
fn canada() -> JurisdictionConfig {
    JurisdictionConfig {
        id: "ca".into(),
        name: "Canada".into(),
        currency_code: "CAD".into(),
        currency_symbol: "C$".into(),
        tax_year: 2025,
        ordinary_brackets: vec![
            bracket(dec!(0), Some(dec!(57375)), dec!(0.15)),
            bracket(dec!(57375), Some(dec!(114750)), dec!(0.205)),
            bracket(dec!(114750), Some(dec!(177882)), dec!(0.26)),
            bracket(dec!(177882), Some(dec!(253414)), dec!(0.29)),
            bracket(dec!(253414), None, dec!(0.33)),
        ],
        capital_gains: CapitalGainsRates {
            short_term_rate: dec!(0.165),
            long_term_rate: dec!(0.165),
        },
        dividend_rate: dec!(0.25),
        social_security: SocialSecurityRates {
            employee_rate: dec!(0.0595),
            employee_cap: Some(dec!(71300)),
            employer_rate: dec!(0.0595),
            employer_cap: Some(dec!(71300)),
            self_employed_rate: Some(dec!(0.119)),
            self_employed_cap: Some(dec!(71300)),
            self_employed_basis: SeContributionBasis::NetOfDeductibleExpenses,
        },
        corporate: CorporateRates {
            standard_rate: dec!(0.15),
            surcharges: vec![CorporateSurcharge {
                rate: dec!(0.115),
                basis: "provincial corporate income tax at the provincial average".into(),
            }],
        },
        standard_deduction: dec!(16129),
        valid_entity_types: vec![
            EntityType::Individual,
            EntityType::SoleProprietor,
            EntityType::Partnership,
            EntityType::CCorporation,
        ],
    }
}

/// Tax-free threshold carried as a zero-rate band. Assets held past
/// twelve months get the 50% discount, modeled as a halved long-term
/// rate. The employee leg is the Medicare levy; the employer leg is the
/// superannuation guarantee.
fn australia() -> JurisdictionConfig {
    JurisdictionConfig {
        id: "au".into(),
        name: "Australia".into(),
        currency_code: "AUD".into(),
        currency_symbol: "A$".into(),
        tax_year: 2025,
        ordinary_brackets: vec![
            bracket(dec!(0), Some(dec!(18200)), dec!(0)),
            bracket(dec!(18200), Some(dec!(45000)), dec!(0.16)),
            bracket(dec!(45000), Some(dec!(135000)), dec!(0.30)),
            bracket(dec!(135000), Some(dec!(190000)), dec!(0.37)),
            bracket(dec!(190000), None, dec!(0.45)),
        ],
        capital_gains: CapitalGainsRates {
            short_term_rate: dec!(0.45),
            long_term_rate: dec!(0.225),
        },
        dividend_rate: dec!(0.30),
        social_security: SocialSecurityRates {
            employee_rate: dec!(0.02),
            employee_cap: None,
            employer_rate: dec!(0.115),
            employer_cap: None,
            self_employed_rate: None,
            self_employed_cap: None,
            self_employed_basis: SeContributionBasis::NetOfDeductibleExpenses,
        },
        corporate: CorporateRates {
            standard_rate: dec!(0.30),
            surcharges: vec![],
        },
        standard_deduction: dec!(0),
        valid_entity_types: vec![
            EntityType::Individual,
            EntityType::SoleProprietor,
            EntityType::Partnership,
            EntityType::CCorporation,
        ],
    }
}

/// Resident schedule with the earned income relief as the standard
/// deduction. No capital-gains tax and one-tier dividends. CPF employee
/// and employer legs up to the annual salary ceiling; the self-employed
/// leg models the MediSave obligation.
fn singapore() -> JurisdictionConfig {
    JurisdictionConfig {
        id: "sg".into(),
        name: "Singapore".into(),
        currency_code: "SGD".into(),
        currency_symbol: "S$".into(),
        tax_year: 2025,
        ordinary_brackets: vec![
            bracket(dec!(0), Some(dec!(20000)), dec!(0)),
            bracket(dec!(20000), Some(dec!(30000)), dec!(0.02)),
            bracket(dec!(30000), Some(dec!(40000)), dec!(0.035)),
            bracket(dec!(40000), Some(dec!(80000)), dec!(0.07)),
            bracket(dec!(80000), Some(dec!(120000)), dec!(0.115)),
            bracket(dec!(120000), Some(dec!(160000)), dec!(0.15)),
            bracket(dec!(160000), Some(dec!(200000)), dec!(0.18)),
            bracket(dec!(200000), Some(dec!(240000)), dec!(0.19)),
            bracket(dec!(240000), Some(dec!(280000)), dec!(0.195)),
            bracket(dec!(280000), Some(dec!(320000)), dec!(0.20)),
            bracket(dec!(320000), Some(dec!(500000)), dec!(0.22)),
            bracket(dec!(500000), Some(dec!(1000000)), dec!(0.23)),
            bracket(dec!(1000000), None, dec!(0.24)),
        ],
        capital_gains: CapitalGainsRates {
            short_term_rate: dec!(0),
            long_term_rate: dec!(0),
        },
        dividend_rate: dec!(0),
        social_security: SocialSecurityRates {
            employee_rate: dec!(0.20),
            employee_cap: Some(dec!(102000)),
            employer_rate: dec!(0.17),
            employer_cap: Some(dec!(102000)),
            self_employed_rate: Some(dec!(0.08)),
            self_employed_cap: Some(dec!(37740)),
            self_employed_basis: SeContributionBasis::NetOfDeductibleExpenses,
        },
        corporate: CorporateRates {
            standard_rate: dec!(0.17),
            surcharges: vec![],
        },
        standard_deduction: dec!(1000),
        valid_entity_types: vec![
            EntityType::Individual,
            EntityType::SoleProprietor,
            EntityType::Partnership,
            EntityType::CCorporation,
        ],
    }
}

/// No personal income tax: a single unbounded zero-rate bracket.
/// Pension contributions apply to nationals up to the salary cap. The
/// corporate rate is the headline rate above the small-profit relief,
/// modeled flat.
fn united_arab_emirates() -> JurisdictionConfig {
    JurisdictionConfig {
        id: "ae".into(),
        name: "United Arab Emirates".into(),
        currency_code: "AED".into(),
        currency_symbol: "د.إ".into(),
        tax_year: 2025,
        ordinary_brackets: vec![bracket(dec!(0), None, dec!(0))],
        capital_gains: CapitalGainsRates {
            short_term_rate: dec!(0),
            long_term_rate: dec!(0),
        },
        dividend_rate: dec!(0),
        social_security: SocialSecurityRates {
            employee_rate: dec!(0.05),
            employee_cap: Some(dec!(600000)),
            employer_rate: dec!(0.125),
            employer_cap: Some(dec!(600000)),
            self_employed_rate: None,
            self_employed_cap: None,
            self_employed_basis: SeContributionBasis::NetOfDeductibleExpenses,
        },
        corporate: CorporateRates {
            standard_rate: dec!(0.09),
            surcharges: vec![],
        },
        standard_deduction: dec!(0),
        valid_entity_types: vec![
            EntityType::Individual,
            EntityType::SoleProprietor,
            EntityType::Partnership,
            EntityType::LlcPassThrough,
            EntityType::CCorporation,
        ],
    }
}
