//! Manifest rows and CSV ingestion.
//!
//! A [`Row`] is a column-name to string-value mapping; a [`Manifest`] is a
//! header list plus the rows of one CSV file. The validators treat rows as
//! read-only; the location parser returns augmented copies rather than
//! mutating in place.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{ManifestError, ManifestResult};

/// One manifest row: column header -> raw string value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    values: HashMap<String, String>,
}

impl Row {
    /// An empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from column/value pairs. Handy in tests and callers that
    /// assemble rows by hand.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Raw value for a column, if the column is present.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.values.get(column).map(String::as_str)
    }

    /// Set a column value, replacing any previous value.
    pub fn set<K: Into<String>, V: Into<String>>(&mut self, column: K, value: V) {
        self.values.insert(column.into(), value.into());
    }

    /// True when the column is absent or contains only whitespace.
    pub fn is_blank(&self, column: &str) -> bool {
        self.get(column).map_or(true, |v| v.trim().is_empty())
    }

    /// Column names present in this row, in no particular order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of columns in this row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the row carries no columns at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// The tabular contents of one manifest file.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    /// Column headers in file order.
    pub headers: Vec<String>,
    /// Data rows in file order.
    pub rows: Vec<Row>,
}

impl Manifest {
    /// Build a manifest from headers and rows already in memory.
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Self { headers, rows }
    }

    /// Read a manifest from a CSV file with a header row.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> ManifestResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Read a manifest from any CSV source with a header row.
    ///
    /// Headers are trimmed; values are kept verbatim so the location and
    /// year parsers see the original spacing.
    pub fn from_reader<R: Read>(reader: R) -> ManifestResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()
            .map_err(ManifestError::Csv)?
            .iter()
            .map(str::to_string)
            .collect();
        if headers.is_empty() {
            return Err(ManifestError::NoHeaders);
        }

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            let mut row = Row::new();
            for (i, header) in headers.iter().enumerate() {
                row.set(header.clone(), record.get(i).unwrap_or(""));
            }
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }
}
