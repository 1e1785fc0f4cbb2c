//! Signguard SDK
//!
//! Shared vocabulary for the signguard engine: the image data model and
//! the error taxonomy used by the directory client and the remediation pass.

/// Error types and handling
pub mod errors;

/// Image directory data model
pub mod types;

// Re-export commonly used types
pub use errors::{DirectoryError, ErrorHint, RemediationError};
pub use types::{
    unprotected_ids, Image, ImageListResult, ImageOutcome, RemediationOutcome, RemediationReport,
    ServiceMessage, MAX_PAGE_SIZE,
};
