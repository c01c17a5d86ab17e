//! Generates one section's timetable from a submission file and writes the
//! exported document to disk.
//!
//! Usage: `timetable-render <submission.json> [section] [out-dir]`

use std::path::PathBuf;

use color_eyre::eyre::{eyre, Result, WrapErr};
use dotenv::dotenv;
use rand::rngs::StdRng;
use rand::SeedableRng;
use timetable_api::config::ApiConfig;
use timetable_api::{export, render};
use timetable_core::models::section::validate_section_id;
use timetable_core::models::submission::SectionSubmission;
use timetable_core::registry::PairRegistry;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();
    let config = ApiConfig::from_env()?;

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut args = std::env::args().skip(1);
    let input = args
        .next()
        .map(PathBuf::from)
        .ok_or_else(|| eyre!("usage: timetable-render <submission.json> [section] [out-dir]"))?;
    let section = args.next().unwrap_or_else(|| "1".to_string());
    let out_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
    validate_section_id(&section)?;

    let raw = std::fs::read_to_string(&input)
        .wrap_err_with(|| format!("Failed to read {}", input.display()))?;
    let submission: SectionSubmission =
        serde_json::from_str(&raw).wrap_err("Submission is not valid JSON")?;

    let slots_per_day = submission.slot_count()?;
    let mut registry = PairRegistry::new();
    registry.extend(submission.subject_teacher_pairs()?);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let grid = config
        .generator
        .generate(slots_per_day, registry.all_pairs(), &mut rng);
    let time_labels = config.clock.labels(grid.column_count());
    let table = render::timetable_table(&grid, &time_labels).into_string();

    let document = export::export_section(&section, Some(&table))?;
    let path = document.write_to(&out_dir)?;
    info!(section = %section, pairs = registry.len(), "Timetable written to {}", path.display());

    Ok(())
}
