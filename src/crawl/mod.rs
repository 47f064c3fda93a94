// src/crawl/mod.rs
// =============================================================================
// This module handles crawling: following links outward from a seed page.
//
// Features:
// - Breadth-first crawling starting from a seed address
// - Only https links are followed (see extract/scheme.rs)
// - Configurable depth limit
// - Each address is visited at most once
// - One page at a time; a failing page is recorded and skipped
//
// Rust concepts:
// - Async programming: the fetch is awaited, one page after another
// - Collections: HashSet for tracking visited addresses, VecDeque for queue
// =============================================================================

mod queue;

// Re-export the main crawling function and its result types
pub use queue::{build_crawl_graph, CrawlResult, PageFailure};
