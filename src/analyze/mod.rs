// src/analyze/mod.rs
// =============================================================================
// This module works out what a single page is about.
//
// Submodules:
// - stopwords: built-in English/Spanish/French stopword lists
// - signals: the ContentAnalyzer (title, headings, keywords)
//
// Analysis is independent from crawling: it looks at one page and is never
// merged across pages.
// =============================================================================

mod signals;
mod stopwords;

pub use signals::{extract_signals, ContentAnalyzer, PageSignals};
pub use stopwords::{Language, StopwordSet};
