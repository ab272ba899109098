//! Structural validation of manifests against the schema.
//!
//! Two validation purposes exist, mirroring the two stages of repository
//! ingest:
//!
//! - **Registration** ([`validate_for_registration`]): can records be
//!   created from this manifest? Required columns present, required
//!   values filled, sourceids derived from filenames and unique.
//! - **Metadata** ([`validate_for_metadata`]): can this manifest enrich
//!   existing records? No conflicting column pairs, no unrecognized
//!   columns.
//!
//! Every check runs to completion and reports all violations it finds;
//! the reports are advisory output for the people curating spreadsheets,
//! so stopping at the first problem would just mean more round trips.
//! [`unique_source_ids`] extends the sourceid checks across a batch of
//! manifests that will be registered together.

use std::collections::HashMap;

use crate::manifest::{Manifest, Row};
use crate::schema::{ManifestSchema, LABEL_FIELD};

// =============================================================================
// Report Types
// =============================================================================

/// A required field left blank in one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlankField {
    /// 1-based data row number.
    pub row: usize,
    /// Column header of the blank field.
    pub column: String,
}

/// What is wrong with one row's sourceid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceIdProblem {
    /// The sourceid does not equal the filename with its extension stripped.
    FilenameMismatch {
        /// The filename-derived value the sourceid should have been.
        expected: String,
    },
    /// The sourceid contains whitespace.
    ContainsWhitespace,
}

/// A sourceid violation in one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceIdIssue {
    /// 1-based data row number (counted across all manifests for batch checks).
    pub row: usize,
    /// The offending sourceid value.
    pub sourceid: String,
    /// The specific problem.
    pub problem: SourceIdProblem,
}

/// A sourceid that appears more than once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateSourceId {
    /// The duplicated value.
    pub sourceid: String,
    /// How many rows carry it.
    pub count: usize,
}

/// Everything found while checking a manifest for registration.
#[derive(Debug, Clone, Default)]
pub struct RegistrationReport {
    /// Required register columns absent from the header row.
    pub missing_headers: Vec<String>,
    /// Required fields left blank, per row (`label` is exempt).
    pub blank_fields: Vec<BlankField>,
    /// Rows whose sourceid is malformed.
    pub sourceid_issues: Vec<SourceIdIssue>,
    /// Duplicated sourceids, most-repeated first.
    pub duplicates: Vec<DuplicateSourceId>,
}

impl RegistrationReport {
    /// True when no check found a violation.
    pub fn is_valid(&self) -> bool {
        self.missing_headers.is_empty()
            && self.blank_fields.is_empty()
            && self.sourceid_issues.is_empty()
            && self.duplicates.is_empty()
    }
}

/// Everything found while checking a manifest for metadata updates.
#[derive(Debug, Clone, Default)]
pub struct MetadataReport {
    /// The headers include both `date` and `year`.
    pub date_and_year: bool,
    /// The headers include `location` together with `state`, `city` and `country`.
    pub location_and_parts: bool,
    /// Headers not accounted for by any schema section, lowercased.
    pub unknown_headers: Vec<String>,
}

impl MetadataReport {
    /// True when no check found a violation.
    pub fn is_valid(&self) -> bool {
        !self.date_and_year && !self.location_and_parts && self.unknown_headers.is_empty()
    }
}

/// Cross-manifest sourceid uniqueness results.
#[derive(Debug, Clone, Default)]
pub struct UniquenessReport {
    /// Per-row sourceid violations, rows numbered across the whole batch.
    pub sourceid_issues: Vec<SourceIdIssue>,
    /// Sourceids shared by more than one row anywhere in the batch,
    /// most-repeated first.
    pub duplicates: Vec<DuplicateSourceId>,
}

impl UniquenessReport {
    /// True when every sourceid is well-formed and unique.
    pub fn is_valid(&self) -> bool {
        self.sourceid_issues.is_empty() && self.duplicates.is_empty()
    }
}

/// Both top-level reports for one manifest.
#[derive(Debug, Clone)]
pub struct ManifestCheck {
    /// Registration-readiness findings.
    pub registration: RegistrationReport,
    /// Metadata-readiness findings.
    pub metadata: MetadataReport,
}

impl ManifestCheck {
    /// True when the manifest passes both purposes.
    pub fn is_valid(&self) -> bool {
        self.registration.is_valid() && self.metadata.is_valid()
    }
}

// =============================================================================
// Registration Validation
// =============================================================================

/// Check that a manifest can register new records.
///
/// Four independent checks, all evaluated even when earlier ones fail:
/// every register column is present as a header; every required field
/// except `label` is non-blank in every row; every sourceid equals its
/// filename minus extension and carries no whitespace; no sourceid is
/// used twice.
pub fn validate_for_registration(
    manifest: &Manifest,
    schema: &ManifestSchema,
) -> RegistrationReport {
    let mut report = RegistrationReport::default();

    for column in schema.register.values() {
        if !manifest.headers.iter().any(|h| h == column) {
            report.missing_headers.push(column.clone());
        }
    }

    for (index, row) in manifest.rows.iter().enumerate() {
        for (field, column) in &schema.register {
            if field.as_str() != LABEL_FIELD && row.is_blank(column) {
                report.blank_fields.push(BlankField {
                    row: index + 1,
                    column: column.clone(),
                });
            }
        }
    }

    let mut counts: HashMap<String, usize> = HashMap::new();
    for (index, row) in manifest.rows.iter().enumerate() {
        collect_sourceid_issues(index + 1, row, schema, &mut report.sourceid_issues);
        let sourceid = row.get(schema.sourceid_column()).unwrap_or("");
        *counts.entry(sourceid.to_string()).or_default() += 1;
    }
    report.duplicates = duplicates_by_count(counts);

    report
}

// =============================================================================
// Metadata Validation
// =============================================================================

/// Check that a manifest can update metadata on existing records.
///
/// A metadata manifest need not carry every column, but it must not mix
/// `date` with `year`, must not mix `location` with all of `state`,
/// `city` and `country`, and must not carry columns no schema section
/// knows about. Headers are lowercased and blank headers ignored before
/// any of the checks.
pub fn validate_for_metadata(manifest: &Manifest, schema: &ManifestSchema) -> MetadataReport {
    let headers: Vec<String> = manifest
        .headers
        .iter()
        .map(|h| h.to_lowercase())
        .filter(|h| !h.trim().is_empty())
        .collect();
    let has = |name: &str| headers.iter().any(|h| h.as_str() == name);

    let known = schema.known_columns();
    MetadataReport {
        date_and_year: has("date") && has("year"),
        location_and_parts: has("location") && has("state") && has("city") && has("country"),
        unknown_headers: headers
            .iter()
            .filter(|h| !known.contains(*h))
            .cloned()
            .collect(),
    }
}

/// Run both validation purposes over one manifest.
pub fn check_manifest(manifest: &Manifest, schema: &ManifestSchema) -> ManifestCheck {
    ManifestCheck {
        registration: validate_for_registration(manifest, schema),
        metadata: validate_for_metadata(manifest, schema),
    }
}

// =============================================================================
// Cross-Manifest Uniqueness
// =============================================================================

/// Check sourceid integrity across a batch of manifests registered together.
///
/// Rows from all manifests are treated as one table: each row's sourceid
/// must match its filename minus extension and carry no whitespace, and
/// the sourceid must be unique across the whole batch.
pub fn unique_source_ids(manifests: &[Manifest], schema: &ManifestSchema) -> UniquenessReport {
    let mut report = UniquenessReport::default();
    let mut counts: HashMap<String, usize> = HashMap::new();

    let mut row_number = 0;
    for manifest in manifests {
        for row in &manifest.rows {
            row_number += 1;
            collect_sourceid_issues(row_number, row, schema, &mut report.sourceid_issues);
            let sourceid = row.get(schema.sourceid_column()).unwrap_or("");
            *counts.entry(sourceid.to_string()).or_default() += 1;
        }
    }
    report.duplicates = duplicates_by_count(counts);

    report
}

// =============================================================================
// Row-Level Helpers
// =============================================================================

fn collect_sourceid_issues(
    row_number: usize,
    row: &Row,
    schema: &ManifestSchema,
    issues: &mut Vec<SourceIdIssue>,
) {
    let sourceid = row.get(schema.sourceid_column()).unwrap_or("");
    let filename = row.get(schema.filename_column()).unwrap_or("");
    let expected = strip_extension(filename);

    if sourceid != expected {
        issues.push(SourceIdIssue {
            row: row_number,
            sourceid: sourceid.to_string(),
            problem: SourceIdProblem::FilenameMismatch {
                expected: expected.to_string(),
            },
        });
    }
    if sourceid.contains(char::is_whitespace) {
        issues.push(SourceIdIssue {
            row: row_number,
            sourceid: sourceid.to_string(),
            problem: SourceIdProblem::ContainsWhitespace,
        });
    }
}

/// Filename with its final extension removed. Dotfiles and extensionless
/// names pass through unchanged.
fn strip_extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(i) if i > 0 => &filename[..i],
        _ => filename,
    }
}

fn duplicates_by_count(counts: HashMap<String, usize>) -> Vec<DuplicateSourceId> {
    let mut duplicates: Vec<DuplicateSourceId> = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(sourceid, count)| DuplicateSourceId { sourceid, count })
        .collect();
    duplicates.sort_by(|a, b| b.count.cmp(&a.count).then(a.sourceid.cmp(&b.sourceid)));
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::Manifest;

    fn clean_manifest() -> Manifest {
        let csv = "sourceid,label,filename,year,description,format\n\
                   img_001,Image 1,img_001.tif,1955,A race,slides\n\
                   img_002,Image 2,img_002.tif,1956,Another race,slides\n";
        Manifest::from_reader(csv.as_bytes()).unwrap()
    }

    fn schema() -> &'static ManifestSchema {
        ManifestSchema::default_schema()
    }

    #[test]
    fn test_clean_sheet_registers_and_updates() {
        let manifest = clean_manifest();
        let check = check_manifest(&manifest, schema());
        assert!(check.registration.is_valid());
        assert!(check.metadata.is_valid());
        assert!(check.is_valid());
    }

    #[test]
    fn test_blank_label_is_allowed() {
        let csv = "sourceid,label,filename\nimg_001,,img_001.tif\n";
        let manifest = Manifest::from_reader(csv.as_bytes()).unwrap();
        assert!(validate_for_registration(&manifest, schema()).is_valid());
    }

    #[test]
    fn test_missing_label_column_fails_registration() {
        let csv = "sourceid,filename\nimg_001,img_001.tif\n";
        let manifest = Manifest::from_reader(csv.as_bytes()).unwrap();
        let report = validate_for_registration(&manifest, schema());
        assert!(!report.is_valid());
        assert_eq!(report.missing_headers, vec!["label"]);
    }

    #[test]
    fn test_missing_sourceid_column_fails_registration() {
        let csv = "label,filename\nImage 1,img_001.tif\n";
        let manifest = Manifest::from_reader(csv.as_bytes()).unwrap();
        let report = validate_for_registration(&manifest, schema());
        assert!(report.missing_headers.contains(&"sourceid".to_string()));
        // The blank sourceid is also reported per row, independently.
        assert!(!report.blank_fields.is_empty());
    }

    #[test]
    fn test_blank_sourceid_value_fails_registration() {
        let csv = "sourceid,label,filename\n,Image 1,img_001.tif\n";
        let manifest = Manifest::from_reader(csv.as_bytes()).unwrap();
        let report = validate_for_registration(&manifest, schema());
        assert_eq!(
            report.blank_fields,
            vec![BlankField {
                row: 1,
                column: "sourceid".to_string()
            }]
        );
    }

    #[test]
    fn test_sourceid_must_match_filename() {
        let csv = "sourceid,label,filename\nwrong_id,Image 1,img_001.tif\n";
        let manifest = Manifest::from_reader(csv.as_bytes()).unwrap();
        let report = validate_for_registration(&manifest, schema());
        assert_eq!(report.sourceid_issues.len(), 1);
        assert_eq!(
            report.sourceid_issues[0].problem,
            SourceIdProblem::FilenameMismatch {
                expected: "img_001".to_string()
            }
        );
    }

    #[test]
    fn test_sourceid_with_space_is_flagged() {
        let csv = "sourceid,label,filename\n\"img 001\",Image 1,\"img 001.tif\"\n";
        let manifest = Manifest::from_reader(csv.as_bytes()).unwrap();
        let report = validate_for_registration(&manifest, schema());
        // Filename-derived value matches, so only the whitespace rule fires.
        assert_eq!(report.sourceid_issues.len(), 1);
        assert_eq!(
            report.sourceid_issues[0].problem,
            SourceIdProblem::ContainsWhitespace
        );
    }

    #[test]
    fn test_duplicate_sourceids_reported_by_count() {
        let csv = "sourceid,label,filename\n\
                   img_001,A,img_001.tif\n\
                   img_001,B,img_001.tif\n\
                   img_002,C,img_002.tif\n\
                   img_002,D,img_002.tif\n\
                   img_002,E,img_002.tif\n";
        let manifest = Manifest::from_reader(csv.as_bytes()).unwrap();
        let report = validate_for_registration(&manifest, schema());
        assert_eq!(
            report.duplicates,
            vec![
                DuplicateSourceId {
                    sourceid: "img_002".to_string(),
                    count: 3
                },
                DuplicateSourceId {
                    sourceid: "img_001".to_string(),
                    count: 2
                },
            ]
        );
    }

    #[test]
    fn test_date_and_year_conflict() {
        let csv = "sourceid,label,filename,date,year\nimg_001,A,img_001.tif,5/1/1955,1955\n";
        let manifest = Manifest::from_reader(csv.as_bytes()).unwrap();
        let report = validate_for_metadata(&manifest, schema());
        assert!(report.date_and_year);
        assert!(!report.is_valid());
    }

    #[test]
    fn test_date_without_year_is_fine() {
        let csv = "sourceid,label,filename,date\nimg_001,A,img_001.tif,5/1/1955\n";
        let manifest = Manifest::from_reader(csv.as_bytes()).unwrap();
        assert!(validate_for_metadata(&manifest, schema()).is_valid());
    }

    #[test]
    fn test_location_with_all_parts_conflict() {
        let csv = "sourceid,label,filename,location,state,city,country\n\
                   img_001,A,img_001.tif,x,y,z,w\n";
        let manifest = Manifest::from_reader(csv.as_bytes()).unwrap();
        let report = validate_for_metadata(&manifest, schema());
        assert!(report.location_and_parts);
        assert!(!report.is_valid());
    }

    #[test]
    fn test_location_with_some_parts_is_fine() {
        let csv = "sourceid,label,filename,location,state\nimg_001,A,img_001.tif,x,y\n";
        let manifest = Manifest::from_reader(csv.as_bytes()).unwrap();
        assert!(validate_for_metadata(&manifest, schema()).is_valid());
    }

    #[test]
    fn test_unknown_header_reported() {
        let csv = "sourceid,label,filename,favorite_color\nimg_001,A,img_001.tif,red\n";
        let manifest = Manifest::from_reader(csv.as_bytes()).unwrap();
        let report = validate_for_metadata(&manifest, schema());
        assert_eq!(report.unknown_headers, vec!["favorite_color"]);
    }

    #[test]
    fn test_header_case_is_folded_for_metadata() {
        let csv = "Sourceid,Label,Filename\nimg_001,A,img_001.tif\n";
        let manifest = Manifest::from_reader(csv.as_bytes()).unwrap();
        assert!(validate_for_metadata(&manifest, schema()).is_valid());
    }

    #[test]
    fn test_unique_source_ids_clean_batch() {
        let report = unique_source_ids(&[clean_manifest()], schema());
        assert!(report.is_valid());
    }

    #[test]
    fn test_unique_source_ids_across_files() {
        let report = unique_source_ids(&[clean_manifest(), clean_manifest()], schema());
        assert!(!report.is_valid());
        assert_eq!(report.duplicates.len(), 2);
        assert!(report.duplicates.iter().all(|d| d.count == 2));
    }

    #[test]
    fn test_unique_source_ids_checks_filenames() {
        let csv = "sourceid,label,filename\nmalformed,A,img_001.tif\n";
        let manifest = Manifest::from_reader(csv.as_bytes()).unwrap();
        let report = unique_source_ids(&[manifest], schema());
        assert!(!report.is_valid());
        assert_eq!(report.sourceid_issues.len(), 1);
    }

    #[test]
    fn test_strip_extension() {
        assert_eq!(strip_extension("img_001.tif"), "img_001");
        assert_eq!(strip_extension("archive.tar.gz"), "archive.tar");
        assert_eq!(strip_extension("no_extension"), "no_extension");
        assert_eq!(strip_extension(".hidden"), ".hidden");
        assert_eq!(strip_extension(""), "");
    }
}
