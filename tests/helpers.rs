// Shared test helpers for hosts files and mock servers.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::io::Write;
use std::path::PathBuf;

use coffprobing::{Config, LogFormat, LogLevel, Pacing};
use tempfile::NamedTempFile;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Writes one host per line to a temporary file.
#[allow(dead_code)] // Used by other test files
pub fn write_hosts_file(hosts: &[String]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for host in hosts {
        writeln!(file, "{}", host).expect("Failed to write host");
    }
    file.flush().expect("Failed to flush file");
    file
}

/// Starts a server that answers every GET with `status`.
#[allow(dead_code)] // Used by other test files
pub async fn server_with_status(status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(status))
        .mount(&server)
        .await;
    server
}

/// Host (`127.0.0.1:<port>`) under which a mock server is reachable.
///
/// The server speaks plain HTTP, so the `https://` target for this host is
/// always unreachable.
#[allow(dead_code)] // Used by other test files
pub fn host_of(server: &MockServer) -> String {
    server.address().to_string()
}

/// A fast configuration for scanning `file`.
#[allow(dead_code)] // Used by other test files
pub fn create_test_config(file: PathBuf) -> Config {
    Config {
        file,
        filter_code: None,
        rate_limit: 1000,
        pacing: Pacing::Fixed,
        burst: 10,
        max_concurrency: 10,
        probe_timeout: std::time::Duration::from_secs(5),
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
    }
}
