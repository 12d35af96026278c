mod entity;
mod income_source;
mod jurisdiction;
mod profile;
mod result;
mod treatment;

pub use entity::{EntityType, EntityTypeRule};
pub use income_source::CustomIncomeSource;
pub use jurisdiction::{
    CapitalGainsRates, CorporateRates, CorporateSurcharge, JurisdictionConfig,
    SeContributionBasis, SocialSecurityRates, TaxBracket,
};
pub use profile::TaxProfile;
pub use result::{SocialSecurityContributions, TaxComputationResult, TreatmentLine};
pub use treatment::{IncomeType, TaxTreatment};
