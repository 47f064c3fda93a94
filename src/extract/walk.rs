// src/extract/walk.rs
// =============================================================================
// Pre-order traversal of a parsed HTML tree.
//
// Both the link extractor and the text extractor walk the tree the same way:
// - visit a node, then its children from first to last
// - an element whose tag is in the skip set is not visited, and neither is
//   anything inside it
//
// We use our own stack (a Vec) instead of recursion, so a page with very
// deep nesting can't overflow the call stack.
//
// Rust concepts:
// - Lifetimes ('a): the visited references live as long as the document
// - impl FnMut: the caller passes a closure that gets every visited node
// =============================================================================

use std::collections::HashSet;

use scraper::{ElementRef, Node};

/// Tag names whose whole subtree is ignored during a walk.
#[derive(Debug, Clone, Default)]
pub struct SkipTags {
    tags: HashSet<String>,
}

impl SkipTags {
    /// Skip nothing.
    pub fn none() -> Self {
        Self::default()
    }

    /// Skip elements that hold code rather than visible text.
    pub fn non_content() -> Self {
        Self::new(["script", "style"])
    }

    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tags: tags
                .into_iter()
                .map(|tag| tag.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

/// What the walk hands to the visitor.
#[derive(Debug, Clone, Copy)]
pub enum Visit<'a> {
    Element(ElementRef<'a>),
    Text(&'a str),
}

/// Walks `root` and its descendants in document order.
///
/// Comments, doctypes and processing instructions are passed over silently.
pub fn walk<'a>(root: ElementRef<'a>, skip: &SkipTags, mut visit: impl FnMut(Visit<'a>)) {
    let mut stack = vec![*root];

    while let Some(node) = stack.pop() {
        match node.value() {
            Node::Text(text) => visit(Visit::Text(&**text)),
            Node::Element(element) => {
                if skip.contains(element.name()) {
                    continue;
                }
                if let Some(element) = ElementRef::wrap(node) {
                    visit(Visit::Element(element));
                }
            }
            _ => {}
        }

        // Pushed last-to-first so the first child is popped next
        stack.extend(node.children().rev());
    }
}
