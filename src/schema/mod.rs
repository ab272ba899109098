//! Declarative manifest schema.
//!
//! The schema groups manifest columns by purpose:
//!
//! - `register` - columns required to create a repository record
//! - `metadata` - columns used to describe an item once registered
//! - `metadata_optional` - housekeeping columns tolerated but not descriptive
//! - `known_formats` - allowed values for the `format` column
//!
//! The register/metadata sections map logical field names (e.g. `sourceid`)
//! to the CSV column headers that carry them. A default schema is embedded
//! at compile time from `config/manifest_headers.yml` and parsed once.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use crate::error::{SchemaError, SchemaResult};

/// Logical field name of the item identifier in the register section.
pub const SOURCEID_FIELD: &str = "sourceid";
/// Logical field name of the item label in the register section.
pub const LABEL_FIELD: &str = "label";
/// Logical field name of the item filename in the register section.
pub const FILENAME_FIELD: &str = "filename";

static DEFAULT_SCHEMA: Lazy<ManifestSchema> = Lazy::new(|| {
    serde_yaml::from_str(include_str!("../../config/manifest_headers.yml"))
        .expect("Invalid embedded schema")
});

/// Column definitions for manifests, grouped by purpose.
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestSchema {
    /// Fields required to create a record (logical name -> column header).
    pub register: BTreeMap<String, String>,
    /// Fields used to enrich a record after registration.
    pub metadata: BTreeMap<String, String>,
    /// Housekeeping fields accepted but not descriptive.
    #[serde(default)]
    pub metadata_optional: BTreeMap<String, String>,
    /// Allowed values for the `format` column.
    #[serde(default)]
    pub known_formats: BTreeSet<String>,
}

impl ManifestSchema {
    /// The schema embedded in the crate, parsed once per process.
    pub fn default_schema() -> &'static ManifestSchema {
        &DEFAULT_SCHEMA
    }

    /// Load a schema from a YAML file.
    ///
    /// A missing or malformed file is fatal: without a schema the toolkit
    /// cannot validate anything.
    pub fn from_path<P: AsRef<Path>>(path: P) -> SchemaResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml(&text)
    }

    /// Parse a schema from a YAML string.
    pub fn from_yaml(text: &str) -> SchemaResult<Self> {
        let schema: Self = serde_yaml::from_str(text)?;
        schema.check_register_fields()?;
        Ok(schema)
    }

    /// The register section must carry the fields the validators index by.
    fn check_register_fields(&self) -> SchemaResult<()> {
        for field in [SOURCEID_FIELD, LABEL_FIELD, FILENAME_FIELD] {
            if !self.register.contains_key(field) {
                return Err(SchemaError::MissingRegisterField(field));
            }
        }
        Ok(())
    }

    /// Column header carrying the sourceid.
    pub fn sourceid_column(&self) -> &str {
        self.register
            .get(SOURCEID_FIELD)
            .map(String::as_str)
            .unwrap_or(SOURCEID_FIELD)
    }

    /// Column header carrying the filename.
    pub fn filename_column(&self) -> &str {
        self.register
            .get(FILENAME_FIELD)
            .map(String::as_str)
            .unwrap_or(FILENAME_FIELD)
    }

    /// Column headers from every section, lowercased.
    ///
    /// Used by the metadata validator to spot unrecognized columns.
    pub fn known_columns(&self) -> BTreeSet<String> {
        self.register
            .values()
            .chain(self.metadata.values())
            .chain(self.metadata_optional.values())
            .map(|c| c.to_lowercase())
            .collect()
    }

    /// Whether a format label is in the allow-list. Case-sensitive.
    pub fn is_known_format(&self, format: &str) -> bool {
        self.known_formats.contains(format)
    }
}
