//! Report command handler
//!
//! Renders the current estimate to a Markdown or HTML file.

use super::estimate::compute;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use study_cost::config::Config;
use study_cost::error;
use study_cost::report::{write_report, ReportContext, ReportFormat};

/// Run the report command.
pub fn run(
    country: Option<&str>,
    format_str: &str,
    output_dir: Option<&Path>,
    config: &Config,
) -> Result<(), String> {
    let format = ReportFormat::from_str(format_str).map_err(|e| format!("✗ {e}"))?;
    let dir = output_dir.map_or_else(|| PathBuf::from(&config.paths.reports_dir), Path::to_path_buf);

    let view = compute(country, config);
    let ctx = ReportContext::new(&view.country, &view.answers, &view.adjusted, &view.quick);

    let path = write_report(&ctx, format, &dir).map_err(|e| {
        error!("Report generation failed for {}: {e}", view.country);
        format!("✗ Failed to write {format} report: {e}")
    })?;
    println!("✓ Report generated: {}", path.display());
    Ok(())
}
