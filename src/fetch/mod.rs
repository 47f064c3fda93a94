// src/fetch/mod.rs
// =============================================================================
// This module downloads pages and turns them into parsed documents.
//
// The crawler and the analyzer don't talk to reqwest directly. They use the
// `Fetcher` trait, which has one job: given an address, return the body
// bytes or a FetchError. This means:
// - the real program uses HttpFetcher (reqwest, see http.rs)
// - tests use an in-memory fetcher with canned pages (no internet needed)
//
// Rust concepts:
// - Traits: like interfaces; any type with a `fetch` method can be a Fetcher
// - async-trait: lets a trait have async methods
// - Generics: functions take `&F where F: Fetcher` and work with either one
// =============================================================================

mod http;

use async_trait::async_trait;

use crate::document::Document;
use crate::error::{FetchError, PageError};

pub use http::{FetchConfig, HttpFetcher};

/// Something that can download the body behind an address.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, address: &str) -> Result<Vec<u8>, FetchError>;
}

// Fetches `address` and parses the body
//
// Returns: the parsed Document, or a PageError saying which step failed
pub async fn load_document<F>(fetcher: &F, address: &str) -> Result<Document, PageError>
where
    F: Fetcher + ?Sized,
{
    let body = fetcher.fetch(address).await?;
    let document = Document::parse(&body)?;
    Ok(document)
}


#[cfg(test)]
mod tests {
    use super::testing::StaticFetcher;
    use super::*;
    use crate::error::ParseError;

    #[tokio::test]
    async fn test_load_document_ok() {
        let fetcher = StaticFetcher::new().page("https://a.example/", "<title>A</title>");
        let doc = load_document(&fetcher, "https://a.example/").await.unwrap();
        assert_eq!(doc.root().value().name(), "html");
    }

    #[tokio::test]
    async fn test_load_document_fetch_error() {
        let fetcher = StaticFetcher::new();
        let err = load_document(&fetcher, "https://missing.example/")
            .await
            .err()
            .unwrap();
        assert_eq!(err, PageError::Fetch(FetchError::Status(404)));
    }

    #[tokio::test]
    async fn test_load_document_parse_error() {
        let fetcher = StaticFetcher::new().raw_page("https://bin.example/", b"GIF89a\x00\x01");
        let err = load_document(&fetcher, "https://bin.example/")
            .await
            .err()
            .unwrap();
        assert_eq!(err, PageError::Parse(ParseError::Binary(6)));
    }
}
