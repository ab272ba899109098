//! Error types for manifest preparation.
//!
//! Only configuration problems are represented as errors: a schema or
//! reference file that is missing or malformed means the toolkit cannot
//! run at all. Lookup misses and validation failures are ordinary return
//! values ([`Option`] and report types), never errors.
//!
//! Error conversion is automatic via `From` implementations, allowing `?`
//! to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Schema Errors
// =============================================================================

/// Errors loading or interpreting the manifest schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Failed to read the schema file.
    #[error("Failed to read schema file: {0}")]
    Io(#[from] std::io::Error),

    /// The schema document does not parse as YAML.
    #[error("Malformed schema document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The register section lacks a field the validators depend on.
    #[error("Schema register section is missing field '{0}'")]
    MissingRegisterField(&'static str),
}

// =============================================================================
// Manifest Errors
// =============================================================================

/// Errors reading a manifest file into rows.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Failed to read the manifest file.
    #[error("Failed to read manifest file: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid CSV content.
    #[error("Invalid CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The manifest has no header row.
    #[error("Manifest has no header row")]
    NoHeaders,
}

// =============================================================================
// Reference Data Errors
// =============================================================================

/// Errors loading reference data (vocabulary, countries, states).
#[derive(Debug, Error)]
pub enum ReferenceError {
    /// Failed to read the reference file.
    #[error("Failed to read reference file: {0}")]
    Io(#[from] std::io::Error),

    /// The reference file does not parse as JSON.
    #[error("Malformed reference data: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Result type for manifest ingestion.
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Result type for reference data loading.
pub type ReferenceResult<T> = Result<T, ReferenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_display() {
        let err = SchemaError::MissingRegisterField("sourceid");
        assert!(err.to_string().contains("sourceid"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ManifestError = io.into();
        assert!(err.to_string().contains("gone"));
    }
}
