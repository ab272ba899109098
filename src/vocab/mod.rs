//! Controlled-vocabulary authority index.
//!
//! Maps exact phrases (e.g. `"Ford automobile"`) to Library of Congress
//! subject-heading URLs. The index is loaded once and never mutated; a
//! missing vocabulary file degrades marque lookups to "no match" rather
//! than failing.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::ReferenceResult;

static DEFAULT_TERMS: Lazy<HashMap<String, String>> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../data/lc-marque-terms.json"))
        .expect("Invalid embedded vocabulary")
});

/// Immutable phrase -> authority-URL mapping. Lookups are exact and
/// case-sensitive; variant generation is the caller's job.
#[derive(Debug, Clone, Default)]
pub struct VocabularyIndex {
    terms: HashMap<String, String>,
}

impl VocabularyIndex {
    /// The vocabulary embedded in the crate.
    pub fn builtin() -> Self {
        Self {
            terms: DEFAULT_TERMS.clone(),
        }
    }

    /// An index with no entries. Every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build an index from phrase/URL pairs.
    pub fn from_terms<I, K, V>(terms: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            terms: terms
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Load an index from a JSON file of phrase -> URL.
    ///
    /// An absent file yields an empty index (degraded but non-fatal);
    /// a file that exists but does not parse is an error.
    pub fn from_path<P: AsRef<Path>>(path: P) -> ReferenceResult<Self> {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_json(&text),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::empty()),
            Err(e) => Err(e.into()),
        }
    }

    /// Parse an index from a JSON string.
    pub fn from_json(text: &str) -> ReferenceResult<Self> {
        Ok(Self {
            terms: serde_json::from_str(text)?,
        })
    }

    /// The authority URL for an exact phrase, if present.
    pub fn get(&self, phrase: &str) -> Option<&str> {
        self.terms.get(phrase).map(String::as_str)
    }

    /// Number of phrases in the index.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True when the index has no entries.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
