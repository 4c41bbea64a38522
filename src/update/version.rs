use std::fmt;

use log::debug;

use super::{fetch_latest_release, normalize_tag};

/// How the running version compares to the latest release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionStatus {
    Latest,
    Outdated { latest: String },
    Unknown { reason: String },
}

impl fmt::Display for VersionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionStatus::Latest => f.write_str("latest"),
            VersionStatus::Outdated { latest } => write!(f, "outdated (latest is {latest})"),
            VersionStatus::Unknown { reason } => write!(f, "unknown ({reason})"),
        }
    }
}

/// Compares `current` against the latest published release.
///
/// Never fails: any network, status or parse problem yields
/// [`VersionStatus::Unknown`].
pub async fn check_version(
    client: &reqwest::Client,
    api_url: &str,
    current: &str,
) -> VersionStatus {
    match fetch_latest_release(client, api_url).await {
        Ok(release) => compare_versions(current, &release.tag_name),
        Err(e) => {
            debug!("Version check against {api_url} failed: {e}");
            VersionStatus::Unknown {
                reason: e.to_string(),
            }
        }
    }
}

fn compare_versions(current: &str, latest_tag: &str) -> VersionStatus {
    let latest = normalize_tag(latest_tag);
    if latest == normalize_tag(current) {
        VersionStatus::Latest
    } else {
        VersionStatus::Outdated {
            latest: latest.to_string(),
        }
    }
}
