// src/error.rs
// =============================================================================
// Error types for fetching and parsing a single page.
//
// There are two kinds of failure for a page:
// - FetchError: the page could not be downloaded (timeout, DNS, bad status...)
// - ParseError: the downloaded bytes could not be turned into a document
//
// PageError wraps both, so code that fetches AND parses can use `?` on either.
//
// How they are used:
// - During a crawl, a PageError only affects that one page. It is logged,
//   recorded in the result, and the crawl moves on.
// - When extracting signals from one page, a PageError is returned to the
//   caller and no signals are produced.
//
// Rust concepts:
// - thiserror: derive macro that implements std::error::Error and Display
// - #[from]: generates From impls so `?` converts errors automatically
// =============================================================================

use serde::Serialize;
use thiserror::Error;

/// The page could not be downloaded.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum FetchError {
    /// The address could not be turned into a request.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// The request took longer than the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// The host name could not be resolved.
    #[error("could not resolve hostname")]
    Dns,

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    Connect(String),

    /// The server answered with a non-success status code.
    #[error("HTTP {0}")]
    Status(u16),

    /// Any other transport failure.
    #[error("request failed: {0}")]
    Request(String),
}

/// The downloaded bytes could not be parsed as markup.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum ParseError {
    /// The body holds NUL bytes, so it is binary data (an image, a PDF...)
    /// rather than text of any encoding.
    #[error("body is binary, not markup (NUL byte at offset {0})")]
    Binary(usize),
}

/// Either step of loading a page failed.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "stage", content = "error", rename_all = "snake_case")]
pub enum PageError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("parse failed: {0}")]
    Parse(#[from] ParseError),
}
