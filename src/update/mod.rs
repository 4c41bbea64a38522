//! Release check and self-update.
//!
//! Both commands read the GitHub "latest release" document. Neither runs unless
//! the operator asks for it.

mod install;
mod version;

use log::debug;
use serde::Deserialize;

use crate::error_handling::UpdateError;

pub use install::{asset_name, self_update, UpdateOutcome};
pub use version::{check_version, VersionStatus};

/// The parts of a GitHub release this tool reads.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

/// A downloadable file attached to a release.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    pub name: String,
    pub browser_download_url: String,
    #[serde(default)]
    pub size: Option<u64>,
}

impl Release {
    /// Version with any leading `v` removed.
    pub fn version(&self) -> &str {
        normalize_tag(&self.tag_name)
    }
}

/// Strips surrounding whitespace and one leading `v` from a tag.
pub(crate) fn normalize_tag(tag: &str) -> &str {
    let tag = tag.trim();
    tag.strip_prefix('v').unwrap_or(tag)
}

/// Fetches and parses the latest release document.
async fn fetch_latest_release(
    client: &reqwest::Client,
    api_url: &str,
) -> Result<Release, UpdateError> {
    let response = client
        .get(api_url)
        .header(reqwest::header::ACCEPT, "application/vnd.github+json")
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(UpdateError::Status(response.status().as_u16()));
    }

    let body = response.text().await?;
    let release: Release = serde_json::from_str(&body)?;
    debug!(
        "Latest release {} with {} assets",
        release.tag_name,
        release.assets.len()
    );
    Ok(release)
}
