use std::collections::HashSet;
use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use taxfolio_core::TaxRuleSet;
use taxfolio_data::ScheduleLoader;

/// Check bracket schedule overrides against the builtin rule tables.
///
/// The CSV file should have the following columns:
/// - jurisdiction: The jurisdiction code the schedule applies to (e.g., us)
/// - tax_year: The tax year the schedule is for (e.g., 2026)
/// - min_income: The lower bound of the bracket
/// - max_income: The upper bound of the bracket (empty for unbounded)
/// - rate: The marginal tax rate as a decimal (e.g., 0.10)
#[derive(Parser, Debug)]
#[command(name = "taxfolio-data-loader")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file containing bracket schedule overrides
    #[arg(short, long)]
    file: PathBuf,

    /// Restrict the summary to a single jurisdiction code
    #[arg(short, long)]
    jurisdiction: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let rules = TaxRuleSet::builtin().context("Failed to load builtin rule tables")?;

    println!("Loading schedule overrides from: {}", args.file.display());

    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open: {}", args.file.display()))?;

    let records = ScheduleLoader::parse(file)
        .with_context(|| format!("Failed to parse CSV: {}", args.file.display()))?;

    println!("Parsed {} schedule rows from CSV", records.len());

    let updated = ScheduleLoader::apply(rules.jurisdictions(), &records)
        .context("Failed to apply schedule overrides")?;

    let overridden: HashSet<&str> = records.iter().map(|r| r.jurisdiction.as_str()).collect();

    for config in updated.iter() {
        if !overridden.contains(config.id.as_str()) {
            continue;
        }
        if let Some(only) = &args.jurisdiction {
            if only != &config.id {
                continue;
            }
        }
        let top_rate = config
            .ordinary_brackets
            .last()
            .map(|b| b.rate)
            .unwrap_or_default();
        println!(
            "{}: {} brackets for {}, top rate {}",
            config.id,
            config.ordinary_brackets.len(),
            config.tax_year,
            top_rate,
        );
    }

    println!(
        "Validated {} override schedule(s) against {} builtin jurisdictions.",
        overridden.len(),
        rules.jurisdictions().len(),
    );

    Ok(())
}
