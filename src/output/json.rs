//! JSON summary of a scan.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::aggregate::ResultGroup;
use crate::config::VERSION;
use crate::run::ScanReport;

#[derive(Serialize)]
struct Summary<'a> {
    version: &'static str,
    generated_at: String,
    hosts: usize,
    targets: usize,
    received: usize,
    kept: usize,
    elapsed_seconds: f64,
    groups: &'a ResultGroup,
}

/// Writes `report` to `path` as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub async fn write_json_summary(report: &ScanReport, path: &Path) -> Result<()> {
    let summary = Summary {
        version: VERSION,
        generated_at: chrono::Utc::now().to_rfc3339(),
        hosts: report.hosts,
        targets: report.targets,
        received: report.received,
        kept: report.kept,
        elapsed_seconds: report.elapsed_seconds,
        groups: &report.groups,
    };
    let json = serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write JSON summary to {}", path.display()))?;
    log::info!("Wrote JSON summary to {}", path.display());
    Ok(())
}
