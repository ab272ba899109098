//! Vehicle-make resolution against the controlled vocabulary.
//!
//! Authority phrases pin down one inflection ("Ford automobile" but
//! "Porsche automobiles"), while manifests spell marques every which way.
//! The resolver generates lexical variants of the input and probes the
//! vocabulary with each until one hits.

use crate::vocab::VocabularyIndex;

/// A successful vocabulary hit for a marque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarqueMatch {
    /// Authority URL of the matched term.
    pub url: String,
    /// The exact phrase that matched.
    pub value: String,
}

/// Resolves marque strings to controlled-vocabulary entries.
#[derive(Debug, Clone, Default)]
pub struct MarqueResolver {
    vocabulary: VocabularyIndex,
}

impl MarqueResolver {
    /// A resolver over the given vocabulary.
    pub fn new(vocabulary: VocabularyIndex) -> Self {
        Self { vocabulary }
    }

    /// A resolver over the embedded vocabulary.
    pub fn builtin() -> Self {
        Self::new(VocabularyIndex::builtin())
    }

    /// Look a marque up in the vocabulary, trying lexical variants.
    ///
    /// Six base variants are generated (as-is, capitalized, singular,
    /// plural, capitalized singular, capitalized plural), then each base
    /// variant is also tried with `" automobile"` and `" automobiles"`
    /// appended. Candidates are probed in that fixed order and the first
    /// hit wins. Returns `None` when nothing matches - including for empty
    /// input, since no variant of the empty string is in the vocabulary.
    pub fn lookup(&self, marque: &str) -> Option<MarqueMatch> {
        let base = base_variants(marque);
        let mut candidates = base.clone();
        for variant in &base {
            candidates.push(format!("{variant} automobile"));
            candidates.push(format!("{variant} automobiles"));
        }

        candidates.into_iter().find_map(|candidate| {
            self.vocabulary.get(&candidate).map(|url| MarqueMatch {
                url: url.to_string(),
                value: candidate,
            })
        })
    }
}

fn base_variants(marque: &str) -> Vec<String> {
    let capitalized = capitalize(marque);
    vec![
        marque.to_string(),
        capitalized.clone(),
        singularize(marque),
        pluralize(marque),
        singularize(&capitalized),
        pluralize(&capitalized),
    ]
}

/// First character uppercased, the rest lowercased.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

// Minimal English inflection. Marque names are regular enough that a
// trailing-s rule covers the vocabulary's singular/plural split.
fn singularize(text: &str) -> String {
    let bytes = text.as_bytes();
    if text.len() > 3 && bytes[text.len() - 3..].eq_ignore_ascii_case(b"ies") {
        format!("{}y", &text[..text.len() - 3])
    } else if bytes.last().is_some_and(|b| b.eq_ignore_ascii_case(&b's'))
        && !(text.len() > 1 && bytes[text.len() - 2].eq_ignore_ascii_case(&b's'))
    {
        text[..text.len() - 1].to_string()
    } else {
        text.to_string()
    }
}

fn pluralize(text: &str) -> String {
    let bytes = text.as_bytes();
    match bytes.last() {
        None => String::new(),
        Some(b) if b.eq_ignore_ascii_case(&b's') => text.to_string(),
        Some(b) if b.eq_ignore_ascii_case(&b'y') && !ends_with_vowel_before_y(bytes) => {
            format!("{}ies", &text[..text.len() - 1])
        }
        _ => format!("{text}s"),
    }
}

fn ends_with_vowel_before_y(bytes: &[u8]) -> bool {
    bytes.len() > 1
        && matches!(
            bytes[bytes.len() - 2].to_ascii_lowercase(),
            b'a' | b'e' | b'i' | b'o' | b'u'
        )
}
