//! Compound location splitting.
//!
//! Manifest location strings pack several units into one cell, most
//! general last: `"123 Street | Palo Alto | United States"`. The parser
//! walks the pieces in reverse so countries are recognized first, and
//! fans the units out into `city`, `state`, `country` and `city_section`
//! columns.

use crate::geo::GeoResolver;
use crate::manifest::Row;

/// Splits compound location strings into discrete geographic columns.
#[derive(Debug, Clone, Default)]
pub struct LocationParser {
    geo: GeoResolver,
}

impl LocationParser {
    /// A parser backed by the given resolver.
    pub fn new(geo: GeoResolver) -> Self {
        Self { geo }
    }

    /// Split `row[column]` into geographic columns, returning an augmented
    /// copy of the row.
    ///
    /// The value is split on `,` or `|` and the pieces are processed in
    /// reverse order of appearance. A piece that resolves as a country sets
    /// `country`; a piece with a parenthesized state token sets `state`
    /// (expanded to the full name) and `city`; a piece matching neither
    /// sets `city_section` to the raw, untrimmed piece. Later pieces in
    /// processing order overwrite earlier assignments to the same column -
    /// last-wins is deliberate and matches how the source data is keyed.
    pub fn parse(&self, row: &Row, column: &str) -> Row {
        let mut out = row.clone();
        let Some(value) = row.get(column) else {
            return out;
        };

        for piece in value.split(['|', ',']).rev() {
            let country = self.geo.resolve_country(piece);
            let city_state = GeoResolver::parse_city_state(piece);

            if let Some(country) = country {
                out.set("country", country.trim());
            }
            if let Some((city, state)) = &city_state {
                out.set("state", self.geo.resolve_state_name(state.trim()));
                out.set("city", city.trim());
            }
            if country.is_none() && city_state.is_none() {
                out.set("city_section", piece);
            }
        }

        out
    }
}

/// Join the geographic columns of a row back into one display string.
///
/// Present, non-blank values are joined with `", "` in
/// `city_section, city, state, country` order.
pub fn format_location(row: &Row) -> String {
    ["city_section", "city", "state", "country"]
        .iter()
        .filter_map(|column| row.get(column))
        .filter(|value| !value.trim().is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pipe_delimited() {
        let row = Row::from_pairs([
            ("other", "value"),
            ("location", "123 Street | Palo Alto | United States"),
        ]);
        let parsed = LocationParser::default().parse(&row, "location");

        assert_eq!(parsed.get("country"), Some("United States"));
        // The street piece is processed after "Palo Alto" and wins, raw.
        assert_eq!(parsed.get("city_section"), Some("123 Street "));
        assert_eq!(parsed.get("other"), Some("value"));
        assert_eq!(parsed.get("city"), None);
        assert_eq!(parsed.get("state"), None);
    }

    #[test]
    fn test_parse_comma_delimited() {
        let row = Row::from_pairs([("location", "Paris, France")]);
        let parsed = LocationParser::default().parse(&row, "location");

        assert_eq!(parsed.get("country"), Some("France"));
        assert_eq!(parsed.get("city_section"), Some("Paris"));
    }

    #[test]
    fn test_parse_city_with_state() {
        let row = Row::from_pairs([("location", "San Mateo (Calif.), United States")]);
        let parsed = LocationParser::default().parse(&row, "location");

        assert_eq!(parsed.get("country"), Some("United States"));
        assert_eq!(parsed.get("state"), Some("California"));
        assert_eq!(parsed.get("city"), Some("San Mateo"));
        assert_eq!(parsed.get("city_section"), None);
    }

    #[test]
    fn test_parse_does_not_mutate_input() {
        let row = Row::from_pairs([("location", "Paris, France")]);
        let _ = LocationParser::default().parse(&row, "location");
        assert_eq!(row.get("country"), None);
    }

    #[test]
    fn test_parse_missing_column() {
        let row = Row::from_pairs([("other", "value")]);
        let parsed = LocationParser::default().parse(&row, "location");
        assert_eq!(parsed, row);
    }

    #[test]
    fn test_format_location() {
        let full = Row::from_pairs([
            ("city_section", "Cool Street"),
            ("city", "Paris"),
            ("state", "Texas"),
            ("country", "USA"),
        ]);
        assert_eq!(format_location(&full), "Cool Street, Paris, Texas, USA");

        let partial = Row::from_pairs([("city", "Paris"), ("country", "France")]);
        assert_eq!(format_location(&partial), "Paris, France");

        let unrelated = Row::from_pairs([("id", "123"), ("title", "Test")]);
        assert_eq!(format_location(&unrelated), "");
    }
}
