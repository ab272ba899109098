//! Year and date parsing for archival date idioms.
//!
//! Archive manifests carry dates in a handful of loose shapes: bare years
//! (`1955`), pipe- or comma-separated lists, abbreviated ranges (`1955-57`,
//! `1961-3`), decade shorthand (`1950s`, `1950's`, `195x`) and full ranges
//! (`1800-1802`). [`parse_years`] expands all of these into a sorted,
//! deduplicated list of four-digit years. [`parse_full_date`] handles exact
//! calendar dates in M/D/Y or Y/M/D order with one- or two-digit fields.

use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

/// Oldest year accepted by default. Nothing in the archive predates
/// photography by that much.
pub const DEFAULT_STARTING_YEAR: i32 = 1800;

// Token grammars. Years start with 1 or 2; tokens have had spaces removed.
static SHORT_RANGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[12]\d{3}-\d{2}$").unwrap());
static TAIL_RANGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[12]\d{3}-[1-9]$").unwrap());
static DECADE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[12]\d{2}(0's|0s|[x_])$").unwrap());
static FULL_RANGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[12]\d{3}-[12]\d{3}$").unwrap());
static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[12]\d{3}$").unwrap());

/// Expand a free-text year expression into all years it denotes.
///
/// Spaces are removed, then the string is split on `|` (if present) or `,`.
/// Every token is run through all matching expansion rules:
///
/// - `1955-57` expands through the two-digit tail, keeping the century stem
/// - `1961-3` expands through the single-digit tail
/// - `1950s`, `1950's`, `195x` and `195_` expand to the whole decade
/// - `1955-1957` expands year by year, but only when the span is under ten
///   years; wider ranges are dropped rather than flooding the result
///
/// Tokens that are not exactly four digits are discarded after expansion.
/// The result is deduplicated and sorted ascending.
///
/// ```
/// use manifest_prep::parse_years;
///
/// assert_eq!(parse_years("1955-57"), vec!["1955", "1956", "1957"]);
/// assert_eq!(parse_years("1955|1955"), vec!["1955"]);
/// ```
pub fn parse_years(text: &str) -> Vec<String> {
    let cleaned = text.replace(' ', "");
    if cleaned.is_empty() {
        return Vec::new();
    }

    let tokens: Vec<String> = if cleaned.contains('|') {
        cleaned.split('|').map(str::to_string).collect()
    } else {
        cleaned.split(',').map(str::to_string).collect()
    };

    let mut expanded: Vec<String> = Vec::new();
    for token in &tokens {
        if SHORT_RANGE_RE.is_match(token) {
            // "1955-57": keep the century stem, walk the two-digit tail.
            let stem = &token[..2];
            let start: u32 = token[2..4].parse().unwrap_or(0);
            let end: u32 = token[5..7].parse().unwrap_or(0);
            for n in start..=end {
                expanded.push(format!("{stem}{n:02}"));
            }
        } else if TAIL_RANGE_RE.is_match(token) {
            // "1961-3": walk the final digit.
            let stem = &token[..3];
            let start: u32 = token[3..4].parse().unwrap_or(0);
            let end: u32 = token[5..6].parse().unwrap_or(0);
            for n in start..=end {
                expanded.push(format!("{stem}{n}"));
            }
        }

        if DECADE_RE.is_match(token) {
            let stem = &token[..3];
            for n in 0..10 {
                expanded.push(format!("{stem}{n}"));
            }
        }

        if FULL_RANGE_RE.is_match(token) {
            let start: i32 = token[..4].parse().unwrap_or(0);
            let end: i32 = token[5..9].parse().unwrap_or(0);
            if end - start < 10 {
                for n in start..=end {
                    expanded.push(n.to_string());
                }
            }
        }
    }

    let mut years: Vec<String> = tokens
        .into_iter()
        .filter(|t| YEAR_RE.is_match(t))
        .collect();
    years.extend(expanded);
    years.sort();
    years.dedup();
    years
}

/// Whether the string is a plausible year between 1800 and today.
pub fn is_valid_year(text: &str) -> bool {
    is_valid_year_from(text, DEFAULT_STARTING_YEAR)
}

/// Whether the string is a plausible year between `starting_year` and today.
///
/// The trimmed string must be all digits and its value must fall in
/// `starting_year..=current_year`.
pub fn is_valid_year_from(text: &str, starting_year: i32) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.chars().any(|c| !c.is_ascii_digit()) {
        return false;
    }
    match trimmed.parse::<i32>() {
        Ok(year) => (starting_year..=current_year()).contains(&year),
        Err(_) => false,
    }
}

fn current_year() -> i32 {
    Local::now().year()
}

/// Parse an exact calendar date out of a loose date string.
///
/// The string must contain at least two `/` or `-` separators, which keeps
/// bare years (`1965`) and year ranges (`1965-1968`) from parsing as dates.
/// Accepted orders are month/day/year (one- or two-digit fields, two- or
/// four-digit year) and year/month/day. Two-digit years resolve via the
/// usual 00-68 / 69-99 pivot; if that lands the date strictly in the
/// future, exactly one hundred years are subtracted, so `"5/1/59"` is
/// 1959-05-01 rather than 2059-05-01. Dates whose final year fails
/// [`is_valid_year`] are rejected.
pub fn parse_full_date(text: &str) -> Option<NaiveDate> {
    let normalized = text.replace(' ', "").replace('-', "/");
    if normalized.matches('/').count() < 2 {
        return None;
    }

    let parsed = ["%m/%d/%y", "%m/%d/%Y", "%Y/%m/%d"]
        .into_iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&normalized, fmt).ok())?;

    let date = if parsed > Local::now().date_naive() {
        parsed.with_year(parsed.year() - 100)?
    } else {
        parsed
    };

    if is_valid_year(&date.year().to_string()) {
        Some(date)
    } else {
        None
    }
}

/// Whether a date column value is acceptable.
///
/// Blank values pass vacuously - the absence of a date is not an error at
/// this layer. Otherwise the value must parse as a full date or yield at
/// least one year through [`parse_years`].
pub fn is_valid_date_string(text: &str) -> bool {
    if text.trim().is_empty() {
        return true;
    }
    parse_full_date(text).is_some() || !parse_years(text).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_years_decade_shorthand() {
        let decade: Vec<String> = (1950..1960).map(|y| y.to_string()).collect();
        assert_eq!(parse_years("1950s"), decade);
        assert_eq!(parse_years("1950's"), decade);
        assert_eq!(parse_years("195x"), decade);
        assert_eq!(parse_years("195_"), decade);
    }

    #[test]
    fn test_parse_years_short_range() {
        assert_eq!(parse_years("1955-57"), vec!["1955", "1956", "1957"]);
        assert_eq!(parse_years("1961-62"), vec!["1961", "1962"]);
    }

    #[test]
    fn test_parse_years_single_digit_tail() {
        assert_eq!(parse_years("1961-3"), vec!["1961", "1962", "1963"]);
        assert_eq!(parse_years("1965-8"), vec!["1965", "1966", "1967", "1968"]);
    }

    #[test]
    fn test_parse_years_full_range() {
        assert_eq!(parse_years("1800-1802"), vec!["1800", "1801", "1802"]);
        assert_eq!(parse_years("1955-1957"), vec!["1955", "1956", "1957"]);
    }

    #[test]
    fn test_parse_years_wide_range_not_expanded() {
        assert!(parse_years("1930-1985").is_empty());
    }

    #[test]
    fn test_parse_years_deduplicates() {
        assert_eq!(parse_years("1955|1955"), vec!["1955"]);
        assert_eq!(
            parse_years("1955-1957 | 1955-1957"),
            vec!["1955", "1956", "1957"]
        );
        assert_eq!(
            parse_years("1955-1957 | 1955 | 1955"),
            vec!["1955", "1956", "1957"]
        );
        assert_eq!(
            parse_years("1955-1957 | 1955 | 1954"),
            vec!["1954", "1955", "1956", "1957"]
        );
    }

    #[test]
    fn test_parse_years_comma_separator() {
        assert_eq!(parse_years("1955, 1961"), vec!["1955", "1961"]);
    }

    #[test]
    fn test_parse_years_drops_malformed_tokens() {
        assert!(parse_years("bogus").is_empty());
        assert_eq!(parse_years("bogus|1955"), vec!["1955"]);
        assert!(parse_years("").is_empty());
    }

    #[test]
    fn test_parse_years_idempotent_on_own_output() {
        let first = parse_years("1950s|1961-3");
        let joined = first.join(",");
        assert_eq!(parse_years(&joined), first);
    }

    #[test]
    fn test_is_valid_year() {
        assert!(is_valid_year("1959"));
        assert!(is_valid_year(" 1959 "));
        assert!(!is_valid_year("bogus"));
        assert!(!is_valid_year("1700"));
        assert!(is_valid_year_from("1700", 1600));
        assert!(!is_valid_year("19 59"));
        assert!(!is_valid_year(""));
    }

    #[test]
    fn test_parse_full_date_accepted_shapes() {
        assert_eq!(parse_full_date("5/1/1959"), Some(ymd(1959, 5, 1)));
        assert_eq!(parse_full_date("5-1-1959"), Some(ymd(1959, 5, 1)));
        assert_eq!(parse_full_date("5-1-2014"), Some(ymd(2014, 5, 1)));
        assert_eq!(parse_full_date("5-1-59"), Some(ymd(1959, 5, 1)));
        assert_eq!(parse_full_date("1/1/71"), Some(ymd(1971, 1, 1)));
        assert_eq!(parse_full_date("5-1-14"), Some(ymd(2014, 5, 1)));
        assert_eq!(parse_full_date("1966-02-27"), Some(ymd(1966, 2, 27)));
        assert_eq!(parse_full_date("1966-2-5"), Some(ymd(1966, 2, 5)));
    }

    #[test]
    fn test_parse_full_date_rejections() {
        assert_eq!(parse_full_date("1966-14-11"), None); // bad month
        assert_eq!(parse_full_date(r"1966\4\11"), None); // wrong separators
        assert_eq!(parse_full_date("bogus"), None);
        assert_eq!(parse_full_date(""), None);
        assert_eq!(parse_full_date("1965"), None); // bare year
        assert_eq!(parse_full_date("1965-68"), None); // year range
        assert_eq!(parse_full_date("1965,1968"), None);
        assert_eq!(parse_full_date("1965|1968"), None);
        assert_eq!(parse_full_date("1965-1968"), None);
        assert_eq!(parse_full_date("1965-8"), None);
        assert_eq!(parse_full_date("2/31/1950"), None); // no such day
    }

    #[test]
    fn test_parse_full_date_future_shifts_back_a_century() {
        let parsed = parse_full_date("5/1/68").unwrap();
        assert_eq!(parsed, ymd(1968, 5, 1));
    }

    #[test]
    fn test_is_valid_date_string() {
        assert!(is_valid_date_string("1959"));
        assert!(!is_valid_date_string("bogus"));
        assert!(is_valid_date_string(""));
        assert!(is_valid_date_string("   "));
        assert!(is_valid_date_string("2/2/1950"));
        assert!(!is_valid_date_string("2/31/1950"));
        assert!(is_valid_date_string("2/2/50"));
        assert!(is_valid_date_string("195x"));
    }
}
