//! # Manifest Prep - photographic archive manifest validation & normalization
//!
//! Manifest Prep checks and cleans the spreadsheet manifests that describe
//! batches of photographs before the batch is registered into a digital
//! repository.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────────────┐
//! │  CSV file   │────▶│   Manifest   │────▶│  validation (register /  │
//! │ (manifest)  │     │  (rows)      │     │  metadata / uniqueness)  │
//! └─────────────┘     └──────────────┘     └──────────────────────────┘
//!                            │
//!                            ▼
//!                     ┌──────────────────────────────────────┐
//!                     │  normalize (dates, location, marque, │
//!                     │  format, names)                      │
//!                     └──────────────────────────────────────┘
//! ```
//!
//! The two flows are independent: structural validation works on whole
//! tables, value normalization works on individual field strings. Run
//! either first.
//!
//! ## Quick Start
//!
//! ```
//! use manifest_prep::{Manifest, ManifestSchema, check_manifest, parse_years};
//!
//! let csv = "sourceid,label,filename,year\nimg_001,Start line,img_001.tif,1955-57\n";
//! let manifest = Manifest::from_reader(csv.as_bytes()).unwrap();
//!
//! let check = check_manifest(&manifest, ManifestSchema::default_schema());
//! assert!(check.is_valid());
//!
//! let years = parse_years(manifest.rows[0].get("year").unwrap());
//! assert_eq!(years, vec!["1955", "1956", "1957"]);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types for schema, manifest and reference loading
//! - [`schema`] - Declarative column schema (register/metadata sections)
//! - [`manifest`] - Rows and CSV ingestion
//! - [`geo`] - Country and US-state reference lookups
//! - [`vocab`] - Controlled-vocabulary authority index
//! - [`normalize`] - Field-level parsers and normalizers
//! - [`validation`] - Structural table validation

// Core modules
pub mod error;
pub mod schema;

// Rows
pub mod manifest;

// Reference data
pub mod geo;
pub mod vocab;

// Field-level normalization
pub mod normalize;

// Table-level validation
pub mod validation;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    ManifestError, ManifestResult, ReferenceError, ReferenceResult, SchemaError, SchemaResult,
};

// =============================================================================
// Re-exports - Schema & rows
// =============================================================================

pub use manifest::{Manifest, Row};
pub use schema::ManifestSchema;

// =============================================================================
// Re-exports - Reference data
// =============================================================================

pub use geo::GeoResolver;
pub use vocab::VocabularyIndex;

// =============================================================================
// Re-exports - Normalizers
// =============================================================================

pub use normalize::dates::{
    is_valid_date_string, is_valid_year, is_valid_year_from, parse_full_date, parse_years,
    DEFAULT_STARTING_YEAR,
};
pub use normalize::format::{check_format, check_formats, is_valid_format};
pub use normalize::location::{format_location, LocationParser};
pub use normalize::marque::{MarqueMatch, MarqueResolver};
pub use normalize::names::{clean_collection_name, clean_marque_name};

// =============================================================================
// Re-exports - Validation
// =============================================================================

pub use validation::{
    check_manifest, unique_source_ids, validate_for_metadata, validate_for_registration,
    BlankField, DuplicateSourceId, ManifestCheck, MetadataReport, RegistrationReport,
    SourceIdIssue, SourceIdProblem, UniquenessReport,
};
