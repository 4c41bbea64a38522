//! Binary self-update.
//!
//! The new binary is staged next to the running one, verified, and only then
//! swapped in with a rename. The previous binary is kept as `<exe>.backup`.

use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};
use tempfile::NamedTempFile;

use super::{fetch_latest_release, normalize_tag, Release, ReleaseAsset};
use crate::error_handling::UpdateError;

/// Result of a successful self-update run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    AlreadyLatest,
    Updated { version: String, backup: PathBuf },
}

/// Release asset name for this platform, e.g. `coffprobing-linux-x86_64`.
pub fn asset_name() -> String {
    format!(
        "coffprobing-{}-{}",
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

fn select_asset<'a>(release: &'a Release, name: &str) -> Result<&'a ReleaseAsset, UpdateError> {
    release
        .assets
        .iter()
        .find(|asset| asset.name == name)
        .ok_or_else(|| UpdateError::MissingAsset(name.to_string()))
}

/// Replaces the binary at `exe_path` with the latest release.
///
/// # Errors
///
/// Fails without touching `exe_path` if the release cannot be fetched, has no
/// asset for this platform, or the download does not verify.
pub async fn self_update(
    client: &reqwest::Client,
    api_url: &str,
    current: &str,
    exe_path: &Path,
) -> Result<UpdateOutcome, UpdateError> {
    let release = fetch_latest_release(client, api_url).await?;
    if release.version() == normalize_tag(current) {
        info!("Already running the latest version {current}");
        return Ok(UpdateOutcome::AlreadyLatest);
    }

    let asset = select_asset(&release, &asset_name())?;
    info!(
        "Downloading {} {} from {}",
        asset.name,
        release.version(),
        asset.browser_download_url
    );

    let staged = download_verified(client, asset, exe_path).await?;
    let target = exe_path.to_path_buf();
    let backup = tokio::task::spawn_blocking(move || install(staged, &target))
        .await
        .map_err(|e| UpdateError::Io(std::io::Error::other(e)))??;

    Ok(UpdateOutcome::Updated {
        version: release.version().to_string(),
        backup,
    })
}

/// Downloads `asset` into a temp file in the executable's directory.
async fn download_verified(
    client: &reqwest::Client,
    asset: &ReleaseAsset,
    exe_path: &Path,
) -> Result<NamedTempFile, UpdateError> {
    let response = client.get(&asset.browser_download_url).send().await?;
    if !response.status().is_success() {
        return Err(UpdateError::Status(response.status().as_u16()));
    }

    let body = response.bytes().await?;
    if body.is_empty() {
        return Err(UpdateError::EmptyDownload);
    }
    let actual = body.len() as u64;
    if let Some(expected) = asset.size {
        if expected != actual {
            return Err(UpdateError::SizeMismatch { expected, actual });
        }
    }

    // Same directory as the target so the final rename stays on one filesystem.
    let dir = exe_path.parent().unwrap_or_else(|| Path::new("."));
    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(&body)?;
    staged.as_file().sync_all()?;
    debug!("Staged {actual} bytes at {}", staged.path().display());
    Ok(staged)
}

/// Backs up `exe_path`, then renames `staged` over it.
fn install(staged: NamedTempFile, exe_path: &Path) -> Result<PathBuf, UpdateError> {
    let mut backup = exe_path.as_os_str().to_owned();
    backup.push(".backup");
    let backup = PathBuf::from(backup);

    std::fs::copy(exe_path, &backup)?;
    info!("Backed up current binary to {}", backup.display());

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(staged.path(), std::fs::Permissions::from_mode(0o755))?;
    }

    staged.persist(exe_path).map_err(|e| UpdateError::Io(e.error))?;
    info!("Installed new binary at {}", exe_path.display());
    Ok(backup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const NEW_BINARY: &[u8] = b"new-binary-bytes";

    async fn release_server(tag: &str, asset: &str, size: Option<u64>, body: &[u8]) -> MockServer {
        let server = MockServer::start().await;
        let mut asset_json = json!({
            "name": asset,
            "browser_download_url": format!("{}/download/bin", server.uri()),
        });
        if let Some(size) = size {
            asset_json["size"] = json!(size);
        }
        Mock::given(method("GET"))
            .and(path("/releases/latest"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"tag_name": tag, "assets": [asset_json]})),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/download/bin"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(body.to_vec()))
            .mount(&server)
            .await;
        server
    }

    fn fake_exe(dir: &Path) -> PathBuf {
        let exe = dir.join("coffprobing");
        std::fs::write(&exe, b"old-binary").unwrap();
        exe
    }

    #[test]
    fn test_asset_name_for_platform() {
        let name = asset_name();
        assert!(name.starts_with("coffprobing-"));
        assert!(name.contains(std::env::consts::OS));
        assert!(name.ends_with(std::env::consts::ARCH));
    }

    #[test]
    fn test_select_asset() {
        let release: Release = serde_json::from_value(json!({
            "tag_name": "v2.0.0",
            "assets": [
                {"name": "coffprobing-linux-x86_64", "browser_download_url": "a"},
                {"name": "coffprobing-macos-aarch64", "browser_download_url": "b"}
            ]
        }))
        .unwrap();

        let asset = select_asset(&release, "coffprobing-macos-aarch64").unwrap();
        assert_eq!(asset.browser_download_url, "b");
        assert!(matches!(
            select_asset(&release, "coffprobing-windows-x86"),
            Err(UpdateError::MissingAsset(_))
        ));
    }

    #[tokio::test]
    async fn test_self_update_installs_with_backup() {
        let server = release_server(
            "v9.9.9",
            &asset_name(),
            Some(NEW_BINARY.len() as u64),
            NEW_BINARY,
        )
        .await;
        let dir = tempfile::tempdir().unwrap();
        let exe = fake_exe(dir.path());

        let client = reqwest::Client::new();
        let api = format!("{}/releases/latest", server.uri());
        let outcome = self_update(&client, &api, "0.1.0", &exe).await.unwrap();

        let backup = dir.path().join("coffprobing.backup");
        assert_eq!(
            outcome,
            UpdateOutcome::Updated {
                version: "9.9.9".into(),
                backup: backup.clone(),
            }
        );
        assert_eq!(std::fs::read(&exe).unwrap(), NEW_BINARY);
        assert_eq!(std::fs::read(&backup).unwrap(), b"old-binary");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&exe).unwrap().permissions().mode();
            assert_eq!(mode & 0o111, 0o111);
        }
    }

    #[tokio::test]
    async fn test_self_update_already_latest() {
        let server = release_server("v0.1.0", &asset_name(), None, NEW_BINARY).await;
        let dir = tempfile::tempdir().unwrap();
        let exe = fake_exe(dir.path());

        let client = reqwest::Client::new();
        let api = format!("{}/releases/latest", server.uri());
        let outcome = self_update(&client, &api, "0.1.0", &exe).await.unwrap();

        assert_eq!(outcome, UpdateOutcome::AlreadyLatest);
        assert_eq!(std::fs::read(&exe).unwrap(), b"old-binary");
    }

    #[tokio::test]
    async fn test_self_update_size_mismatch_leaves_binary() {
        let server = release_server("v9.9.9", &asset_name(), Some(999), NEW_BINARY).await;
        let dir = tempfile::tempdir().unwrap();
        let exe = fake_exe(dir.path());

        let client = reqwest::Client::new();
        let api = format!("{}/releases/latest", server.uri());
        let err = self_update(&client, &api, "0.1.0", &exe).await.unwrap_err();

        assert!(matches!(
            err,
            UpdateError::SizeMismatch {
                expected: 999,
                actual: 16
            }
        ));
        assert_eq!(std::fs::read(&exe).unwrap(), b"old-binary");
        assert!(!dir.path().join("coffprobing.backup").exists());
    }

    #[tokio::test]
    async fn test_self_update_empty_download() {
        let server = release_server("v9.9.9", &asset_name(), None, b"").await;
        let dir = tempfile::tempdir().unwrap();
        let exe = fake_exe(dir.path());

        let client = reqwest::Client::new();
        let api = format!("{}/releases/latest", server.uri());
        let err = self_update(&client, &api, "0.1.0", &exe).await.unwrap_err();
        assert!(matches!(err, UpdateError::EmptyDownload));
        assert_eq!(std::fs::read(&exe).unwrap(), b"old-binary");
    }

    #[tokio::test]
    async fn test_self_update_missing_asset() {
        let server = release_server("v9.9.9", "coffprobing-plan9-mips", None, NEW_BINARY).await;
        let dir = tempfile::tempdir().unwrap();
        let exe = fake_exe(dir.path());

        let client = reqwest::Client::new();
        let api = format!("{}/releases/latest", server.uri());
        let err = self_update(&client, &api, "0.1.0", &exe).await.unwrap_err();
        assert!(matches!(err, UpdateError::MissingAsset(_)));
    }
}
