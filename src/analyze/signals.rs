// src/analyze/signals.rs
// =============================================================================
// This module extracts "signals" from one page: what the page is about.
//
// Signals are:
// - title: text of the first <title> element (kept exactly as written)
// - headings: text of every <h1> and <h2>, in document order
// - keywords: every word of the page's visible text, lowercased, minus
//   stopwords. Order and repeats are kept; nothing is ranked or counted.
//
// Headings and keywords skip <script> and <style> content and have their
// whitespace collapsed. The title does not; it is reported raw.
// =============================================================================

use serde::Serialize;
use tracing::info;

use crate::document::Document;
use crate::error::PageError;
use crate::extract::{extract_text, walk, SkipTags, Visit};
use crate::fetch::{load_document, Fetcher};

use super::stopwords::StopwordSet;

const HEADING_TAGS: [&str; 2] = ["h1", "h2"];

/// Title, headings and keywords of a single page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageSignals {
    pub title: String,
    pub headings: Vec<String>,
    pub keywords: Vec<String>,
}

/// Turns parsed documents into PageSignals.
pub struct ContentAnalyzer {
    stopwords: StopwordSet,
    skip: SkipTags,
}

impl ContentAnalyzer {
    pub fn new(stopwords: StopwordSet) -> Self {
        Self {
            stopwords,
            skip: SkipTags::non_content(),
        }
    }

    pub fn analyze(&self, document: &Document) -> PageSignals {
        let root = document.root();
        let mut title: Option<String> = None;
        let mut headings = Vec::new();

        walk(root, &SkipTags::none(), |visit| {
            let Visit::Element(element) = visit else {
                return;
            };
            let name = element.value().name();

            if name == "title" && title.is_none() {
                if let Some(text) = element.children().find_map(|child| child.value().as_text()) {
                    title = Some(String::from(&**text));
                }
            }

            if HEADING_TAGS.contains(&name) {
                let text = extract_text(element, &self.skip);
                if !text.is_empty() {
                    headings.push(text);
                }
            }
        });

        let full_text = extract_text(root, &self.skip);

        PageSignals {
            title: title.unwrap_or_default(),
            headings,
            keywords: self.keywords(&full_text),
        }
    }

    /// Lowercased whitespace-separated tokens of `text` that are not stopwords.
    pub fn keywords(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(str::to_lowercase)
            .filter(|token| !self.stopwords.contains(token))
            .collect()
    }
}

// Fetches one page and extracts its signals
//
// Unlike crawling, a failure here is the caller's problem: a fetch or parse
// error is returned and no partial signals are produced.
pub async fn extract_signals<F>(
    fetcher: &F,
    analyzer: &ContentAnalyzer,
    address: &str,
) -> Result<PageSignals, PageError>
where
    F: Fetcher + ?Sized,
{
    let document = load_document(fetcher, address).await?;
    let signals = analyzer.analyze(&document);

    info!(
        address,
        headings = signals.headings.len(),
        keywords = signals.keywords.len(),
        "extracted page signals"
    );

    Ok(signals)
}
