// src/document.rs
// =============================================================================
// A parsed HTML page.
//
// We use the `scraper` crate which:
// - Parses HTML into a tree of nodes (elements, text, comments...)
// - Is built on html5ever (Mozilla's HTML parser)
// - Never rejects markup: broken HTML is repaired the way a browser does it
//
// Bytes that are not valid UTF-8 (a Latin-1 page, say) are decoded lossily:
// the odd character becomes U+FFFD but the markup and links survive. The
// HTTP fetcher already decodes using the Content-Type charset, so this only
// matters for bodies that arrive without one.
//
// So the only way parsing can fail here is if the bytes are not text at all
// (they contain NUL bytes). Everything else is handed to html5ever.
//
// The rest of the crate only reads from a Document, never changes it.
// =============================================================================

use scraper::{ElementRef, Html};

use crate::error::ParseError;

/// A read-only parsed HTML document.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses a downloaded body into a document.
    pub fn parse(bytes: &[u8]) -> Result<Self, ParseError> {
        if let Some(offset) = bytes.iter().position(|&b| b == 0) {
            return Err(ParseError::Binary(offset));
        }

        let text = String::from_utf8_lossy(bytes);
        Ok(Self::from_html(&text))
    }

    /// Parses markup that is already a string.
    pub fn from_html(text: &str) -> Self {
        Self {
            html: Html::parse_document(text),
        }
    }

    /// The `<html>` element. html5ever always creates one, even for fragments.
    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }
}
