// src/extract/mod.rs
// =============================================================================
// This module pulls information out of a parsed HTML tree.
//
// Submodules:
// - scheme: decides if a link may be crawled (https only, no whitespace)
// - walk: shared tree traversal that can skip whole subtrees
// - links: collects crawlable links from <a href="..."> elements
// - text: collects visible text, skipping <script>/<style>
//
// This file (mod.rs) re-exports the public API so other modules can write
// `extract::extract_links()` instead of `extract::links::extract_links()`.
// =============================================================================

mod links;
mod scheme;
mod text;
mod walk;

pub use links::extract_links;
pub use text::extract_text;
pub use walk::{walk, SkipTags, Visit};
