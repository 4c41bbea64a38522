//! The reqwest-backed prober.

use std::sync::Arc;

use log::debug;

use super::{ProbeOutcome, Prober};
use crate::error_handling::{update_error_stats, InfoType, ProcessingStats};

/// Probes URLs with a shared `reqwest::Client`.
///
/// Timeout and redirect policy come from the client (see
/// [`crate::initialization::init_client`]). Transport failures are counted in
/// the shared [`ProcessingStats`] before being reported as unreachable.
#[derive(Clone)]
pub struct HttpProber {
    client: Arc<reqwest::Client>,
    stats: Arc<ProcessingStats>,
}

impl HttpProber {
    pub fn new(client: Arc<reqwest::Client>, stats: Arc<ProcessingStats>) -> Self {
        HttpProber { client, stats }
    }

    pub fn stats(&self) -> &Arc<ProcessingStats> {
        &self.stats
    }
}

impl Prober for HttpProber {
    async fn probe(&self, url: &str) -> ProbeOutcome {
        match self.client.get(url).send().await {
            Ok(response) => {
                // Compare parsed forms so host case and a bare path are not
                // mistaken for a redirect.
                let final_url = response.url();
                let redirected = reqwest::Url::parse(url)
                    .map(|requested| requested != *final_url)
                    .unwrap_or(false);
                if redirected {
                    self.stats.increment_info(InfoType::HttpRedirect);
                    if url.starts_with("http://") && final_url.scheme() == "https" {
                        self.stats.increment_info(InfoType::HttpsRedirect);
                    }
                    debug!("{url} redirected to {final_url}");
                }
                ProbeOutcome::Status(response.status().as_u16())
            }
            Err(e) => {
                let error_type = update_error_stats(&self.stats, &e);
                debug!("{url} unreachable ({}): {e}", error_type.as_str());
                ProbeOutcome::Unreachable
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::ErrorType;
    use crate::initialization::init_client;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn prober(timeout: Duration) -> HttpProber {
        let client = init_client(timeout).expect("client");
        HttpProber::new(client, Arc::new(ProcessingStats::new()))
    }

    #[tokio::test]
    async fn test_probe_reports_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        let outcome = prober(Duration::from_secs(5)).probe(&server.uri()).await;
        assert_eq!(outcome, ProbeOutcome::Status(403));
    }

    #[tokio::test]
    async fn test_probe_follows_redirects() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(301).insert_header("location", "/landing"),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/landing"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let prober = prober(Duration::from_secs(5));
        let outcome = prober.probe(&server.uri()).await;
        assert_eq!(outcome, ProbeOutcome::Status(200));
        assert_eq!(prober.stats().get_info_count(InfoType::HttpRedirect), 1);
    }

    #[tokio::test]
    async fn test_probe_sends_no_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        prober(Duration::from_secs(5)).probe(&server.uri()).await;

        let requests = server.received_requests().await.expect("recording enabled");
        assert_eq!(requests.len(), 1);
        assert!(
            !requests[0].headers.contains_key("user-agent"),
            "unexpected user-agent: {:?}",
            requests[0].headers.get("user-agent")
        );
    }

    #[tokio::test]
    async fn test_uppercase_host_is_not_a_redirect() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        let url = format!("http://LOCALHOST:{}", server.address().port());

        let prober = prober(Duration::from_secs(5));
        assert_eq!(prober.probe(&url).await, ProbeOutcome::Status(200));
        assert_eq!(prober.probe(&server.uri()).await, ProbeOutcome::Status(200));
        assert_eq!(prober.stats().total_info(), 0);
    }

    #[tokio::test]
    async fn test_probe_timeout_is_unreachable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let prober = prober(Duration::from_millis(200));
        let outcome = prober.probe(&server.uri()).await;
        assert_eq!(outcome, ProbeOutcome::Unreachable);
        assert_eq!(
            prober
                .stats()
                .get_error_count(ErrorType::HttpRequestTimeoutError),
            1
        );
    }

    #[tokio::test]
    async fn test_probe_refused_is_unreachable() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let prober = prober(Duration::from_secs(2));
        let outcome = prober.probe(&format!("http://{addr}")).await;
        assert_eq!(outcome, ProbeOutcome::Unreachable);
        assert_eq!(prober.stats().total_errors(), 1);
    }

    #[tokio::test]
    async fn test_probe_https_against_plain_server_is_unreachable() {
        let server = MockServer::start().await;
        let host = server.address().to_string();

        let outcome = prober(Duration::from_secs(2))
            .probe(&format!("https://{host}"))
            .await;
        assert_eq!(outcome, ProbeOutcome::Unreachable);
    }
}
