//! Country and US-state reference lookups.
//!
//! Wraps the geographic reference tables embedded at compile time from
//! `data/countries.json` and `data/us_states.json`. Lookup misses are
//! `Option::None` (or the input echoed back, for state names) - never
//! errors, since unrecognized place names are expected in archival data.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::ReferenceResult;

/// One country in the reference table.
#[derive(Debug, Clone, Deserialize)]
pub struct Country {
    /// Canonical English short name.
    pub name: String,
    /// ISO 3166-1 alpha-2 code.
    pub alpha2: String,
}

/// One US state (or DC) in the reference table.
#[derive(Debug, Clone, Deserialize)]
pub struct UsState {
    /// USPS postal code.
    pub code: String,
    /// Full state name.
    pub name: String,
}

static COUNTRIES: Lazy<Vec<Country>> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../data/countries.json"))
        .expect("Invalid embedded countries table")
});

static US_STATES: Lazy<Vec<UsState>> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../data/us_states.json"))
        .expect("Invalid embedded states table")
});

// A parenthesized token with no whitespace inside, e.g. "(Calif.)".
static STATE_PAREN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(\S+\)").unwrap());

/// Resolves country and US-state names against the reference tables.
#[derive(Debug, Clone)]
pub struct GeoResolver {
    countries: Vec<Country>,
    states: Vec<UsState>,
}

impl Default for GeoResolver {
    fn default() -> Self {
        Self::builtin()
    }
}

impl GeoResolver {
    /// A resolver over the embedded reference tables.
    pub fn builtin() -> Self {
        Self {
            countries: COUNTRIES.clone(),
            states: US_STATES.clone(),
        }
    }

    /// A resolver over caller-supplied tables.
    pub fn new(countries: Vec<Country>, states: Vec<UsState>) -> Self {
        Self { countries, states }
    }

    /// A resolver with tables loaded from JSON files.
    pub fn from_paths<P: AsRef<Path>>(countries: P, states: P) -> ReferenceResult<Self> {
        let countries = serde_json::from_str(&fs::read_to_string(countries)?)?;
        let states = serde_json::from_str(&fs::read_to_string(states)?)?;
        Ok(Self { countries, states })
    }

    /// Resolve a country name or ISO code to the canonical country name.
    ///
    /// `"USA"` is folded to `"US"` before lookup; both name and code
    /// comparisons ignore case. Returns `None` for unrecognized input.
    pub fn resolve_country(&self, name: &str) -> Option<&str> {
        let name = if name == "USA" { "US" } else { name };
        let candidate = name.trim();
        self.countries
            .iter()
            .find(|c| {
                c.name.eq_ignore_ascii_case(candidate) || c.alpha2.eq_ignore_ascii_case(candidate)
            })
            .map(|c| c.name.as_str())
    }

    /// Split a string like `"San Mateo (Calif.)"` into city and state tokens.
    ///
    /// The state token is the first parenthesized word with the parens
    /// stripped; the city is the rest of the input with that parenthetical
    /// removed and trimmed. Returns `None` when no parenthetical is present.
    pub fn parse_city_state(text: &str) -> Option<(String, String)> {
        let found = STATE_PAREN_RE.find(text)?;
        let state = found
            .as_str()
            .trim_matches(|c| c == '(' || c == ')')
            .trim()
            .to_string();
        let city = format!("{}{}", &text[..found.start()], &text[found.end()..])
            .trim()
            .to_string();
        Some((city, state))
    }

    /// Expand an abbreviated state name (`"Calif."`, `"CA"`) to the full name.
    ///
    /// Periods are dropped and the comparison ignores case; the candidate
    /// matches when it is a prefix of a state's full name or equals its
    /// postal code. Unrecognized input is returned unchanged.
    pub fn resolve_state_name(&self, name: &str) -> String {
        let stripped = name.replace('.', "");
        let candidate = stripped.trim().to_lowercase();
        for state in &self.states {
            if state.name.to_lowercase().starts_with(&candidate)
                || state.code.eq_ignore_ascii_case(&candidate)
            {
                return state.name.clone();
            }
        }
        name.to_string()
    }
}
