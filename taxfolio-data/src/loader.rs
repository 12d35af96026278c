use std::collections::BTreeMap;
use std::io::Read;

use rust_decimal::Decimal;
use serde::Deserialize;
use taxfolio_core::{ConfigError, JurisdictionConfig, JurisdictionTable, TaxBracket};
use thiserror::Error;

/// Errors that can occur when loading bracket schedule overrides.
#[derive(Debug, Error)]
pub enum ScheduleCsvError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("jurisdiction '{0}' is not in the table")]
    UnknownJurisdiction(String),

    #[error("mixed tax years for jurisdiction '{0}'")]
    MixedTaxYears(String),

    #[error("invalid schedule: {0}")]
    Invalid(#[from] ConfigError),
}

impl From<csv::Error> for ScheduleCsvError {
    fn from(err: csv::Error) -> Self {
        ScheduleCsvError::CsvParse(err.to_string())
    }
}

/// A single record from a bracket schedule CSV file.
///
/// The CSV format:
/// - `jurisdiction`: The code of the jurisdiction the row belongs to (e.g., us)
/// - `tax_year`: The tax year the schedule is for (e.g., 2026)
/// - `min_income`: The lower bound of this bracket
/// - `max_income`: The upper bound of this bracket (empty for unbounded)
/// - `rate`: The marginal tax rate as a decimal (e.g., 0.10 for 10%)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ScheduleRecord {
    pub jurisdiction: String,
    pub tax_year: i32,
    pub min_income: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub max_income: Option<Decimal>,
    pub rate: Decimal,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for ordinary-bracket schedule overrides from CSV files.
///
/// Overrides replace a jurisdiction's bracket schedule and tax year while
/// leaving every other rate in its config untouched. The result is a new
/// table that has passed the same validation as the builtin one, so a bad
/// override file can never produce a half-valid table.
pub struct ScheduleLoader;

impl ScheduleLoader {
    /// Parse schedule records from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file
    /// or a string slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<ScheduleRecord>, ScheduleCsvError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: ScheduleRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Apply schedule overrides to a jurisdiction table.
    ///
    /// Records are grouped per jurisdiction; each group must reference a
    /// jurisdiction already in the table and carry a single tax year. Rows
    /// may appear in any order, they are sorted by `min_income` before the
    /// rebuilt table is revalidated. Jurisdictions without overrides carry
    /// over unchanged.
    pub fn apply(
        table: &JurisdictionTable,
        records: &[ScheduleRecord],
    ) -> Result<JurisdictionTable, ScheduleCsvError> {
        let mut groups: BTreeMap<&str, Vec<&ScheduleRecord>> = BTreeMap::new();
        for record in records {
            groups
                .entry(record.jurisdiction.as_str())
                .or_default()
                .push(record);
        }

        let mut configs: Vec<JurisdictionConfig> = table.iter().cloned().collect();

        for (jurisdiction_id, group) in groups {
            let config = configs
                .iter_mut()
                .find(|c| c.id == jurisdiction_id)
                .ok_or_else(|| {
                    ScheduleCsvError::UnknownJurisdiction(jurisdiction_id.to_owned())
                })?;

            let tax_year = group
                .iter()
                .map(|r| r.tax_year)
                .next()
                .unwrap_or(config.tax_year);
            if group.iter().any(|r| r.tax_year != tax_year) {
                return Err(ScheduleCsvError::MixedTaxYears(jurisdiction_id.to_owned()));
            }

            let mut brackets: Vec<TaxBracket> = group
                .iter()
                .map(|r| TaxBracket {
                    min_income: r.min_income,
                    max_income: r.max_income,
                    rate: r.rate,
                })
                .collect();
            brackets.sort_by(|a, b| a.min_income.cmp(&b.min_income));

            config.ordinary_brackets = brackets;
            config.tax_year = tax_year;
        }

        Ok(JurisdictionTable::new(configs)?)
    }
}
