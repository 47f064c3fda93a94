// src/extract/text.rs
// =============================================================================
// This module turns a piece of HTML into plain text.
//
// How it works:
// 1. Walk the tree (see walk.rs), skipping elements like <script> and <style>
// 2. Collect every text node, with a single space between each one
// 3. Collapse runs of whitespace into one space and trim the ends
//
// Because every text node is separated by a space, inline markup splits
// words: "<p>foo<b>bar</b></p>" becomes "foo bar", not "foobar".
// =============================================================================

use scraper::ElementRef;

use super::walk::{walk, SkipTags, Visit};

/// Visible text of `root`, whitespace-normalized.
pub fn extract_text(root: ElementRef<'_>, skip: &SkipTags) -> String {
    let mut pieces = Vec::new();

    walk(root, skip, |visit| {
        if let Visit::Text(text) = visit {
            pieces.push(text);
        }
    });

    normalize_whitespace(&pieces.join(" "))
}

/// Collapses whitespace runs to single spaces and trims both ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
