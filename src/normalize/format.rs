//! Physical-format label normalization.
//!
//! Catalogers write the same format a dozen ways. [`check_formats`]
//! lowercases each entry and rewrites the common misspellings through a
//! fixed correction table; [`is_valid_format`] checks values against the
//! schema's allow-list. Note the deliberate asymmetry: correction
//! lowercases, validation is case-sensitive - both behaviors are pinned
//! by existing manifests.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::schema::ManifestSchema;

static KNOWN_FIXES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("black-and-white negative", "black-and-white negatives"),
        ("color negative", "color negatives"),
        ("slides/color transparency", "color transparencies"),
        ("color negatives/slides", "color negatives"),
        ("black-and-white negative strips", "black-and-white negatives"),
        ("black and white", "black-and-white negatives"),
        ("black-and-white", "black-and-white negatives"),
        ("black and white negative", "black-and-white negatives"),
        ("black and white negatives", "black-and-white negatives"),
        ("color transparency", "color transparencies"),
        ("slide", "slides"),
    ])
});

/// Lowercase a format label and fix the common mistakes.
pub fn check_format(format: &str) -> String {
    let lowered = format.to_lowercase();
    match KNOWN_FIXES.get(lowered.as_str()) {
        Some(fixed) => (*fixed).to_string(),
        None => lowered,
    }
}

/// Apply [`check_format`] to every entry, preserving order and count.
pub fn check_formats<S: AsRef<str>>(formats: &[S]) -> Vec<String> {
    formats.iter().map(|f| check_format(f.as_ref())).collect()
}

/// Whether a format column value only uses labels from the allow-list.
///
/// Blank values pass vacuously. Otherwise the value is split on `|`,
/// each piece trimmed and checked verbatim (case-sensitively) against
/// the schema's `known_formats`.
pub fn is_valid_format(format: &str, schema: &ManifestSchema) -> bool {
    if format.trim().is_empty() {
        return true;
    }
    format
        .split('|')
        .map(str::trim)
        .all(|piece| schema.is_known_format(piece))
}
