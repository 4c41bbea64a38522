//! Hosts file loading.

use std::path::Path;

use log::debug;

use crate::error_handling::ConfigError;

/// Reads the hosts file: one host per line, surrounding whitespace trimmed,
/// blank lines skipped. Duplicates are kept.
///
/// # Errors
///
/// Returns `ConfigError::InputFile` if the file cannot be read.
pub async fn load_hosts(path: &Path) -> Result<Vec<String>, ConfigError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::InputFile {
            path: path.to_path_buf(),
            source,
        })?;
    let hosts = parse_hosts(&content);
    debug!("Loaded {} hosts from {}", hosts.len(), path.display());
    Ok(hosts)
}

/// Splits file content into hosts.
pub fn parse_hosts(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_hosts_trims_and_skips_blanks() {
        let hosts = parse_hosts("a.example\n\n  b.example  \r\n\t\nb.example\n");
        assert_eq!(hosts, vec!["a.example", "b.example", "b.example"]);
    }

    #[test]
    fn test_parse_hosts_empty() {
        assert!(parse_hosts("").is_empty());
        assert!(parse_hosts("\n \n").is_empty());
    }

    #[tokio::test]
    async fn test_load_hosts_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "one.example").unwrap();
        writeln!(file, "two.example").unwrap();

        let hosts = load_hosts(file.path()).await.unwrap();
        assert_eq!(hosts, vec!["one.example", "two.example"]);
    }

    #[tokio::test]
    async fn test_load_hosts_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");

        let err = load_hosts(&missing).await.unwrap_err();
        match err {
            ConfigError::InputFile { path, source } => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
