//! Result file persistence.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use crate::aggregate::ResultGroup;
use crate::config::{
    AUTH_RESULTS_FILE, HTTP_STATUS_FORBIDDEN, HTTP_STATUS_OK, HTTP_STATUS_UNAUTHORIZED,
    OK_RESULTS_FILE,
};

/// Writes the 200 and 401/403 result files into `dir`.
///
/// - `200er-results.txt` holds every URL that answered 200.
/// - `401and403-results.txt` holds the 401 URLs followed by the 403 URLs.
///
/// URLs are joined by `\n` without a trailing newline. A file is only written
/// when it has at least one URL, and an existing file is overwritten. Returns
/// the paths written.
///
/// # Errors
///
/// Returns an error if a file cannot be written.
pub async fn save_results(groups: &ResultGroup, dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    let ok = groups.urls_for_status(HTTP_STATUS_OK);
    if !ok.is_empty() {
        written.push(write_list(dir, OK_RESULTS_FILE, ok.iter()).await?);
    }

    let unauthorized = groups.urls_for_status(HTTP_STATUS_UNAUTHORIZED);
    let forbidden = groups.urls_for_status(HTTP_STATUS_FORBIDDEN);
    if !unauthorized.is_empty() || !forbidden.is_empty() {
        let urls = unauthorized.iter().chain(forbidden.iter());
        written.push(write_list(dir, AUTH_RESULTS_FILE, urls).await?);
    }

    Ok(written)
}

async fn write_list<'a>(
    dir: &Path,
    name: &str,
    urls: impl Iterator<Item = &'a String>,
) -> Result<PathBuf> {
    let path = dir.join(name);
    let content = urls.map(String::as_str).collect::<Vec<_>>().join("\n");
    tokio::fs::write(&path, content)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Saved results to {}", path.display());
    Ok(path)
}
