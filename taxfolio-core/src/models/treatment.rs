use serde::{Deserialize, Serialize};

/// Declared kind of a custom income source. Display metadata only: the
/// engine taxes by [`TaxTreatment`], never by income type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IncomeType {
    Salary,
    SideHustle,
    Freelance,
    Consulting,
    Royalty,
    Rental,
    Pension,
    GovernmentBenefit,
    CapitalGainShort,
    CapitalGainLong,
    Dividend,
    CryptoGain,
    Gift,
    Inheritance,
    Other,
}

impl IncomeType {
    pub const ALL: [IncomeType; 15] = [
        Self::Salary,
        Self::SideHustle,
        Self::Freelance,
        Self::Consulting,
        Self::Royalty,
        Self::Rental,
        Self::Pension,
        Self::GovernmentBenefit,
        Self::CapitalGainShort,
        Self::CapitalGainLong,
        Self::Dividend,
        Self::CryptoGain,
        Self::Gift,
        Self::Inheritance,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Salary => "salary",
            Self::SideHustle => "side-hustle",
            Self::Freelance => "freelance",
            Self::Consulting => "consulting",
            Self::Royalty => "royalty",
            Self::Rental => "rental",
            Self::Pension => "pension",
            Self::GovernmentBenefit => "government-benefit",
            Self::CapitalGainShort => "capital-gain-short",
            Self::CapitalGainLong => "capital-gain-long",
            Self::Dividend => "dividend",
            Self::CryptoGain => "crypto-gain",
            Self::Gift => "gift",
            Self::Inheritance => "inheritance",
            Self::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == s)
    }

    /// Maps an income type to its default tax treatment.
    ///
    /// Total over the enumeration: every income type has exactly one
    /// default. The default is only used to pre-fill a custom income
    /// source at construction; the stored treatment is what the
    /// aggregation engine consumes, so callers may override it freely.
    ///
    /// Crypto gains default to short-term capital-gain treatment since
    /// the modeled jurisdictions treat crypto as property.
    pub fn default_treatment(&self) -> TaxTreatment {
        match self {
            Self::Salary | Self::Pension | Self::Other => TaxTreatment::Ordinary,
            Self::SideHustle | Self::Freelance | Self::Consulting => TaxTreatment::BusinessIncome,
            Self::Royalty | Self::Rental => TaxTreatment::PassiveIncome,
            Self::GovernmentBenefit | Self::Gift | Self::Inheritance => TaxTreatment::TaxExempt,
            Self::CapitalGainShort | Self::CryptoGain => TaxTreatment::ShortTermCapitalGain,
            Self::CapitalGainLong => TaxTreatment::LongTermCapitalGain,
            Self::Dividend => TaxTreatment::QualifiedDividend,
        }
    }
}

/// Rate regime applied to a slice of income, independent of its
/// narrative source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaxTreatment {
    Ordinary,
    ShortTermCapitalGain,
    LongTermCapitalGain,
    QualifiedDividend,
    PassiveIncome,
    BusinessIncome,
    TaxExempt,
    PreferentialRate,
}

impl TaxTreatment {
    pub const ALL: [TaxTreatment; 8] = [
        Self::Ordinary,
        Self::ShortTermCapitalGain,
        Self::LongTermCapitalGain,
        Self::QualifiedDividend,
        Self::PassiveIncome,
        Self::BusinessIncome,
        Self::TaxExempt,
        Self::PreferentialRate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ordinary => "ordinary",
            Self::ShortTermCapitalGain => "short-term-capital-gain",
            Self::LongTermCapitalGain => "long-term-capital-gain",
            Self::QualifiedDividend => "qualified-dividend",
            Self::PassiveIncome => "passive-income",
            Self::BusinessIncome => "business-income",
            Self::TaxExempt => "tax-exempt",
            Self::PreferentialRate => "preferential-rate",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == s)
    }
}
