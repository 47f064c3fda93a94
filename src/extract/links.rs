// src/extract/links.rs
// =============================================================================
// This module extracts crawlable links from a parsed HTML page.
//
// For every <a> element, in document order, we look at its href attribute.
// If the href passes the scheme filter (see scheme.rs) we keep it exactly as
// written in the page. We do not resolve relative links and we do not remove
// duplicates: if two anchors point to the same place, the link appears twice.
// The crawler's visited set takes care of duplicates later.
// =============================================================================

use scraper::ElementRef;

use super::scheme::is_admissible;
use super::walk::{walk, SkipTags, Visit};

// Extracts admissible links from `root` and everything below it
//
// Example:
//   html   = "<a href='https://a.com'>A</a><a href='/docs'>Docs</a>"
//   result = ["https://a.com"]
pub fn extract_links(root: ElementRef<'_>) -> Vec<String> {
    let mut links = Vec::new();

    walk(root, &SkipTags::none(), |visit| {
        if let Visit::Element(element) = visit {
            if element.value().name() != "a" {
                return;
            }
            if let Some(href) = element.value().attr("href") {
                if is_admissible(href) {
                    links.push(href.to_string());
                }
            }
        }
    });

    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;

    fn links_of(html: &str) -> Vec<String> {
        let doc = Document::from_html(html);
        extract_links(doc.root())
    }

    #[test]
    fn test_extract_absolute_link() {
        let links = links_of(r#"<a href="https://www.rust-lang.org">Rust</a>"#);
        assert_eq!(links, vec!["https://www.rust-lang.org"]);
    }

    #[test]
    fn test_skip_relative_and_insecure() {
        let links = links_of(
            r#"
            <a href="/docs">Docs</a>
            <a href="http://example.com">Insecure</a>
            <a href="//example.com/x">Scheme relative</a>
            <a href="mailto:test@example.com">Email</a>
            <a>No href</a>
        "#,
        );
        assert!(links.is_empty());
    }

    #[test]
    fn test_document_order_and_duplicates() {
        let links = links_of(
            r#"
            <nav><a href="https://b.example/">B</a></nav>
            <div><p><a href="https://a.example/">A</a></p></div>
            <footer><a href="https://b.example/">B again</a></footer>
        "#,
        );
        assert_eq!(
            links,
            vec!["https://b.example/", "https://a.example/", "https://b.example/"]
        );
    }

    #[test]
    fn test_ignores_href_on_other_elements() {
        let links = links_of(
            r#"<link rel="stylesheet" href="https://cdn.example/x.css"><area href="https://map.example/">"#,
        );
        assert!(links.is_empty());
    }

    #[test]
    fn test_href_kept_verbatim() {
        let links = links_of(r#"<a href="https://Example.com/A?b=1">x</a>"#);
        assert_eq!(links, vec!["https://Example.com/A?b=1"]);
    }
}
