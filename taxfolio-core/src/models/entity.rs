use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityType {
    Individual,
    SoleProprietor,
    Partnership,
    LlcPassThrough,
    SCorporation,
    CCorporation,
}

impl EntityType {
    pub const ALL: [EntityType; 6] = [
        Self::Individual,
        Self::SoleProprietor,
        Self::Partnership,
        Self::LlcPassThrough,
        Self::SCorporation,
        Self::CCorporation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::SoleProprietor => "sole-proprietor",
            Self::Partnership => "partnership",
            Self::LlcPassThrough => "llc-pass-through",
            Self::SCorporation => "s-corporation",
            Self::CCorporation => "c-corporation",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == s)
    }
}

/// Per-entity-type taxation rule.
///
/// `is_pass_through` decides whether business income is taxed once as the
/// owner's income or at the entity level first. `owner_compensation_taxable`
/// decides whether salary drawn by the owner enters ordinary income or is
/// treated as an untaxed draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityTypeRule {
    pub entity_type: EntityType,
    pub is_pass_through: bool,
    pub owner_compensation_taxable: bool,
}
