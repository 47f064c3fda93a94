// src/extract/scheme.rs
// =============================================================================
// Decides whether a link is allowed to become a crawl edge.
//
// A link is admissible when:
// - it starts with "https://" followed by something
// - it has no ASCII whitespace (space, tab, CR, LF, form feed) in it
// - the `url` crate can parse it, with an https scheme and a host
//
// Insecure (http://), relative (/docs) and scheme-relative (//host/x) links
// are never followed.
//
// We check whitespace ourselves because Url::parse trims the ends and
// percent-encodes spaces inside the path, so it would accept them. Unicode
// spaces such as U+00A0 are not checked; they get percent-encoded like any
// other non-ASCII character.
// =============================================================================

use url::Url;

const SECURE_PREFIX: &str = "https://";

/// Returns true if `link` may be followed by the crawler.
pub fn is_admissible(link: &str) -> bool {
    if link.bytes().any(|b| b.is_ascii_whitespace()) {
        return false;
    }

    // The prefix must be literal: Url::parse would also accept "HTTPS://"
    match link.strip_prefix(SECURE_PREFIX) {
        Some(rest) if !rest.is_empty() => {}
        _ => return false,
    }

    match Url::parse(link) {
        Ok(url) => url.scheme() == "https" && url.has_host(),
        Err(_) => false,
    }
}
