// isoforge-core/src/application/pipeline.rs

use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::instrument;

use crate::application::ports::TemplateEngine;
use crate::application::reconcile::{EmissionPlan, PipelineSources, reconcile};
use crate::application::serializer::EnumSerializer;
use crate::application::writer::OutputWriter;
use crate::domain::project::ProjectConfig;
use crate::domain::report::RunReport;
use crate::domain::tables::ReferenceTables;
use crate::error::IsoforgeError;

pub const COUNTRIES_FILE: &str = "countries.txt";
pub const CURRENCIES_FILE: &str = "currencies.txt";
pub const SUBDIVISION_TYPES_FILE: &str = "subdivision_types.txt";
pub const REPORT_FILE: &str = "run_report.json";

/// Reconciles every source and writes one file per continent, plus the
/// country, currency and subdivision-type files and `run_report.json`.
///
/// Degraded source data never fails the run; it ends up in the returned report.
/// `Err` is reserved for the target directory or the report itself being unwritable.
#[instrument(skip_all, fields(project = %config.name))]
pub fn run_pipeline<T: TemplateEngine + ?Sized>(
    sources: &PipelineSources<'_>,
    tables: &ReferenceTables,
    template_engine: &T,
    project_dir: &Path,
    config: &ProjectConfig,
) -> Result<RunReport, IsoforgeError> {
    println!("🚀 Starting reconciliation for '{}'...", config.name);
    let start_time = Instant::now();

    // 1. SETUP
    let target_dir = project_dir.join(&config.target_path);
    if !target_dir.exists() {
        fs::create_dir_all(&target_dir)?;
    }
    let mut report = RunReport::new(config.name.clone());

    // 2. RECONCILIATION (Domain)
    let plan = reconcile(sources, tables, &config.unassigned_continent, &mut report);

    // 3. EMISSION
    println!("📝 Writing enum files to {:?}...", target_dir);
    let serializer = EnumSerializer::from_config(template_engine, config);
    let writer = OutputWriter::new(&target_dir);
    emit(&plan, &serializer, &writer, &mut report);

    report.countries = plan.countries.len();
    report.subdivisions = plan.subdivision_count();
    report.aliases = plan.alias_count();
    report.currencies = plan.currencies.len();
    report.subdivision_types = plan.subdivision_types.len();

    save_json(&target_dir.join(REPORT_FILE), &report)?;

    println!(
        "🏁 Done in {:.2?}: {} countries, {} subdivisions (+{} aliases), {} currencies, {} files",
        start_time.elapsed(),
        report.countries,
        report.subdivisions,
        report.aliases,
        report.currencies,
        report.files.len()
    );
    if report.has_issues() {
        println!("⚠️  {} issue(s) reported, see {}", report.issues.len(), REPORT_FILE);
    }

    Ok(report)
}

fn emit<T: TemplateEngine + ?Sized>(
    plan: &EmissionPlan,
    serializer: &EnumSerializer<'_, T>,
    writer: &OutputWriter,
    report: &mut RunReport,
) {
    for continent in &plan.continents {
        println!(
            "  🔹 {} ({} lines)",
            continent.continent,
            continent.lines.len()
        );
        writer.write(
            &continent.file_name(),
            &continent.lines,
            |line| serializer.subdivision(line),
            report,
        );
    }

    writer.write(
        COUNTRIES_FILE,
        &plan.countries,
        |country| serializer.country(country),
        report,
    );
    writer.write(
        CURRENCIES_FILE,
        &plan.currencies,
        |currency| serializer.currency(currency),
        report,
    );
    writer.write(
        SUBDIVISION_TYPES_FILE,
        &plan.subdivision_types,
        |entry| serializer.subdivision_type(entry),
        report,
    );
}

fn save_json<T: serde::Serialize>(path: &Path, data: &T) -> Result<(), IsoforgeError> {
    let content = serde_json::to_string_pretty(data)
        .map_err(|e| IsoforgeError::InternalError(format!("Serialization: {}", e)))?;
    crate::infrastructure::fs::atomic_write(path, content)?;
    Ok(())
}
