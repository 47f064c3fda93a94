// src/fetch/http.rs
// =============================================================================
// The real Fetcher: downloads pages over HTTP(S) with reqwest.
//
// Key functionality:
// - One reqwest Client is built up front and reused (connection pooling)
// - Every request carries our User-Agent header so sites can identify us
// - Requests time out instead of hanging the crawl forever
// - Non-2xx responses are errors; the body of a 404 page is not parsed
// - Bodies are decoded with the Content-Type charset (Latin-1 pages work),
//   falling back to UTF-8, and handed on as UTF-8 bytes
// - reqwest errors are sorted into FetchError variants (timeout, DNS, ...)
//
// Rust concepts:
// - async/await: the request is awaited, but the crawl still does one page
//   at a time
// - Builder pattern: Client::builder().timeout(...).build()
// =============================================================================

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use super::Fetcher;
use crate::error::FetchError;

/// User-Agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!(
    "crawl-signals/",
    env!("CARGO_PKG_VERSION"),
    " (breadth-first link crawler)"
);

/// Settings for the HTTP client, filled from command-line flags.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Fetches pages with a shared reqwest client.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, address: &str) -> Result<Vec<u8>, FetchError> {
        let url = Url::parse(address)
            .map_err(|e| FetchError::InvalidAddress(format!("{}: {}", address, e)))?;

        let response = self.client.get(url).send().await.map_err(categorize_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let text = response.text().await.map_err(categorize_error)?;
        debug!(address, bytes = text.len(), "fetched page");

        Ok(text.into_bytes())
    }
}

// Sorts a reqwest error into one of our FetchError variants
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - DNS resolution failure
// - SSL certificate issues
// - Too many redirects
fn categorize_error(error: reqwest::Error) -> FetchError {
    let error_string = error.to_string();

    if error.is_timeout() {
        FetchError::Timeout
    } else if error.is_redirect() {
        FetchError::Request("too many redirects".to_string())
    } else if error.is_connect() {
        // Connection errors often mean DNS issues or host unreachable
        if error_string.contains("dns") {
            FetchError::Dns
        } else {
            FetchError::Connect(error_string)
        }
    } else {
        FetchError::Request(error_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher_with_agent(user_agent: &str) -> HttpFetcher {
        HttpFetcher::new(&FetchConfig {
            user_agent: user_agent.to_string(),
            ..FetchConfig::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_sends_user_agent_and_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .and(header("user-agent", "test-agent/1.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>hi</p>"))
            .expect(1)
            .mount(&server)
            .await;

        let fetcher = fetcher_with_agent("test-agent/1.0");
        let body = fetcher.fetch(&format!("{}/page", server.uri())).await.unwrap();
        assert_eq!(body, b"<p>hi</p>".to_vec());
    }

    #[tokio::test]
    async fn test_default_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header("user-agent", DEFAULT_USER_AGENT))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new(&FetchConfig::default()).unwrap();
        assert!(fetcher.fetch(&server.uri()).await.is_ok());
    }

    #[tokio::test]
    async fn test_not_found_is_status_error() {
        let server = MockServer::start().await;
        let fetcher = fetcher_with_agent("test-agent/1.0");
        let err = fetcher
            .fetch(&format!("{}/missing", server.uri()))
            .await
            .unwrap_err();
        assert_eq!(err, FetchError::Status(404));
    }

    #[tokio::test]
    async fn test_latin1_body_is_decoded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(b"<p>caf\xe9</p>".to_vec(), "text/html; charset=iso-8859-1"),
            )
            .mount(&server)
            .await;

        let fetcher = fetcher_with_agent("test-agent/1.0");
        let body = fetcher.fetch(&server.uri()).await.unwrap();
        assert_eq!(body, "<p>café</p>".as_bytes().to_vec());
    }

    #[tokio::test]
    async fn test_redirect_loop_is_cut_off() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/loop"))
            .respond_with(ResponseTemplate::new(302).insert_header("location", "/loop"))
            .mount(&server)
            .await;

        let fetcher = fetcher_with_agent("test-agent/1.0");
        let err = fetcher
            .fetch(&format!("{}/loop", server.uri()))
            .await
            .unwrap_err();
        assert_eq!(err, FetchError::Request("too many redirects".to_string()));
    }

    #[tokio::test]
    async fn test_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new(&FetchConfig {
            timeout: Duration::from_millis(50),
            ..FetchConfig::default()
        })
        .unwrap();
        let err = fetcher.fetch(&server.uri()).await.unwrap_err();
        assert_eq!(err, FetchError::Timeout);
    }

    #[tokio::test]
    async fn test_invalid_address() {
        let fetcher = fetcher_with_agent("test-agent/1.0");
        let err = fetcher.fetch("not a url").await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidAddress(_)));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let fetcher = fetcher_with_agent("test-agent/1.0");
        let err = fetcher.fetch("http://127.0.0.1:1/").await.unwrap_err();
        assert!(matches!(err, FetchError::Connect(_)));
    }
}
