//! Asset validation entities.

pub mod validation;

pub use validation::{
    ValidationReason, ValidationRecord, ValidationReport, ValidationStatus, ValidationSummary,
    filename_length,
};
