// src/analyze/stopwords.rs
// =============================================================================
// Stopwords: very common words ("the", "and", "de", "et"...) that say little
// about what a page is about. They are removed from the keyword list.
//
// We ship word lists for English, Spanish and French. A StopwordSet is built
// from any combination of them and handed to the analyzer, so each run (or
// each test) picks its own languages.
//
// All words are stored lowercase; callers lowercase tokens before lookup.
// =============================================================================

use std::collections::HashSet;

use clap::ValueEnum;

const ENGLISH: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "if", "while", "with", "of", "at", "by", "for", "to",
    "in", "on", "up", "out", "over", "under", "as", "is", "it", "this", "that", "these", "those",
    "he", "she", "they", "we", "you", "i", "me", "him", "her", "them", "us", "my", "your",
];

const SPANISH: &[&str] = &[
    "un", "una", "unos", "unas", "el", "la", "los", "las", "y", "o", "pero", "si", "mientras",
    "con", "de", "en", "sobre", "bajo", "por", "es", "esto", "eso", "estos", "esas", "él", "ella",
    "ellos", "nosotros", "tú", "yo", "te", "le", "nos",
];

const FRENCH: &[&str] = &[
    "une", "des", "les", "et", "ou", "mais", "pendant", "avec", "à", "dans", "sur", "sous",
    "pour", "est", "ce", "cette", "ces", "il", "elle", "ils", "nous", "vous", "je",
];

/// A language with a built-in stopword list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Language {
    #[value(name = "en", alias = "english")]
    English,
    #[value(name = "es", alias = "spanish")]
    Spanish,
    #[value(name = "fr", alias = "french")]
    French,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Spanish, Language::French];

    fn words(self) -> &'static [&'static str] {
        match self {
            Language::English => ENGLISH,
            Language::Spanish => SPANISH,
            Language::French => FRENCH,
        }
    }
}

/// Lowercase words to drop from keyword output.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Union of the built-in lists for `languages`.
    pub fn for_languages(languages: &[Language]) -> Self {
        Self::from_words(languages.iter().flat_map(|lang| lang.words().iter().copied()))
    }

    /// A custom set. Words are lowercased on the way in.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| word.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Expects an already lowercased token.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::for_languages(&Language::ALL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_language() {
        let set = StopwordSet::for_languages(&[Language::Spanish]);
        assert!(set.contains("los"));
        assert!(set.contains("él"));
        assert!(!set.contains("the"));
        assert!(!set.contains("avec"));
    }

    #[test]
    fn test_default_covers_all_languages() {
        let set = StopwordSet::default();
        assert!(set.contains("the"));
        assert!(set.contains("pero"));
        assert!(set.contains("à"));
        assert!(!set.contains("wikipedia"));
    }

    #[test]
    fn test_overlapping_words_counted_once() {
        // a language listed twice must not inflate the set
        let both = StopwordSet::for_languages(&[Language::English, Language::English]);
        assert_eq!(both.len(), StopwordSet::for_languages(&[Language::English]).len());
    }

    #[test]
    fn test_from_words_lowercases() {
        let set = StopwordSet::from_words(["The", "AND"]);
        assert!(set.contains("the"));
        assert!(set.contains("and"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_empty_set() {
        let set = StopwordSet::for_languages(&[]);
        assert_eq!(set.len(), 0);
        assert!(!set.contains("the"));
    }
}
