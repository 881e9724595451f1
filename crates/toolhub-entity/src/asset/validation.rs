//! Asset validation records and summaries.

use serde::{Deserialize, Serialize};

/// Outcome of classifying one asset URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationStatus {
    /// No rule fired.
    Valid,
    /// At least one rule fired.
    Invalid,
}

/// A violated validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationReason {
    /// Decoded filename is longer than the configured limit.
    FilenameTooLong,
    /// The probe failed or reported no size.
    UnknownFileSize,
    /// The probe reported a zero-length body.
    ZeroByteFile,
    /// The probe reported a size above the configured limit.
    FileTooLarge,
    /// An earlier row had the same filename and size.
    Duplicate,
}

/// Filename length as the calling platform measures it: UTF-16 code units,
/// so a character outside the Basic Multilingual Plane counts twice.
pub fn filename_length(filename: &str) -> usize {
    filename.encode_utf16().count()
}

/// Classification of one spreadsheet row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRecord {
    /// The URL taken from the spreadsheet.
    pub asset_url: String,
    /// Decoded last path segment of the URL.
    pub filename: String,
    /// Length of `filename` in UTF-16 code units.
    pub filename_length: usize,
    /// Declared size, `None` when the probe failed or reported none.
    pub size_bytes: Option<u64>,
    /// Declared content type, empty when unknown.
    pub content_type: String,
    /// `INVALID` exactly when `validation_reasons` is non-empty.
    pub status: ValidationStatus,
    /// Violated rules in evaluation order.
    pub validation_reasons: Vec<ValidationReason>,
}

impl ValidationRecord {
    /// Build a record, deriving length and status from the inputs.
    pub fn new(
        asset_url: String,
        filename: String,
        size_bytes: Option<u64>,
        content_type: String,
        validation_reasons: Vec<ValidationReason>,
    ) -> Self {
        let status = if validation_reasons.is_empty() {
            ValidationStatus::Valid
        } else {
            ValidationStatus::Invalid
        };

        Self {
            filename_length: filename_length(&filename),
            asset_url,
            filename,
            size_bytes,
            content_type,
            status,
            validation_reasons,
        }
    }

    /// Returns whether no rule fired for this row.
    pub fn is_valid(&self) -> bool {
        self.status == ValidationStatus::Valid
    }
}

/// Aggregate counts over one validation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    /// Rows that held a URL.
    pub total_assets: usize,
    /// Rows classified `VALID`.
    pub valid_assets: usize,
    /// Rows classified `INVALID`.
    pub invalid_assets: usize,
}

impl ValidationSummary {
    /// Count the outcomes of a set of records.
    pub fn from_records(records: &[ValidationRecord]) -> Self {
        let valid_assets = records.iter().filter(|r| r.is_valid()).count();
        Self {
            total_assets: records.len(),
            valid_assets,
            invalid_assets: records.len() - valid_assets,
        }
    }
}

/// Result of the `validate_assets` tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Always `SUCCESS`; failures are reported as errors instead.
    pub status: String,
    /// Aggregate counts.
    pub summary: ValidationSummary,
    /// One record per URL row, in spreadsheet order.
    pub results: Vec<ValidationRecord>,
}

impl ValidationReport {
    /// Wrap records into a successful report.
    pub fn success(results: Vec<ValidationRecord>) -> Self {
        Self {
            status: "SUCCESS".to_string(),
            summary: ValidationSummary::from_records(&results),
            results,
        }
    }
}
