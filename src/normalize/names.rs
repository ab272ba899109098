//! Free-text name cleanup.
//!
//! Collection and marque names arrive with boilerplate attached
//! ("The ... of the Revs Institute", "Ford Automobiles"). These helpers
//! strip the boilerplate and nothing else; unrecognized names pass
//! through untouched.

use once_cell::sync::Lazy;
use regex::Regex;

static LEADING_THE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^the ").unwrap());

// Applied one after another: bare institute name, then the longer legal
// forms with and without the trailing period.
static COLLECTION_SUFFIX_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i) of the revs institute$",
        r"(?i) of the revs institute for automotive research$",
        r"(?i) of the revs institute for automotive research, inc$",
        r"(?i) of the revs institute for automotive research, inc\.$",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

static MARQUE_SUFFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)automobiles?$").unwrap());

/// Strip institutional boilerplate from a collection name.
///
/// Removes a leading `"The "` and any trailing
/// `"of the Revs Institute[ for Automotive Research[, Inc[.]]]"`,
/// case-insensitively, then trims.
pub fn clean_collection_name(name: &str) -> String {
    let mut cleaned = LEADING_THE_RE.replace(name, "").into_owned();
    for suffix in COLLECTION_SUFFIX_RES.iter() {
        cleaned = suffix.replace(&cleaned, "").into_owned();
    }
    cleaned.trim().to_string()
}

/// Strip a trailing `"automobile"` / `"automobiles"` from a marque name,
/// case-insensitively, then trim.
pub fn clean_marque_name(name: &str) -> String {
    MARQUE_SUFFIX_RE.replace(name, "").trim().to_string()
}
