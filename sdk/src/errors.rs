//! Error types and handling
//!
//! This module provides the error taxonomy shared by the directory client
//! and the remediation pass. Every error implements the `ErrorHint` trait,
//! which provides a user-friendly hint for the operator.
//!
//! # Security
//!
//! Error messages never carry the API key. Request URLs are not embedded
//! either, since they contain the account id.

use thiserror::Error;

/// Trait for signguard error extensions
///
/// Gives each error a short hint that is safe to print to an operator.
pub trait ErrorHint {
    /// Returns a user-friendly hint for the error
    fn user_hint(&self) -> &str;
}

/// Errors returned by a single call against the image directory service
///
/// # Error Categories
///
/// - **Transport**: the request never produced a readable response
/// - **Protocol**: the status was not 200 and the body was not a failure envelope
/// - **Decode**: the body could not be parsed into the response envelope
/// - **Service**: the envelope reported `success: false`
///
/// A `success: false` envelope always maps to `Service`, whatever the HTTP
/// status. 401 and 404 are not told apart from other statuses.
///
/// # Examples
///
/// ```
/// use sdk::errors::{DirectoryError, ErrorHint};
///
/// let error = DirectoryError::Protocol { status: 503 };
/// assert_eq!(error.to_string(), "unexpected status code: 503");
/// assert!(error.user_hint().contains("rejected"));
/// ```
#[derive(Debug, Clone, Error)]
pub enum DirectoryError {
    #[error("could not send request: {0}")]
    Transport(String),

    #[error("unexpected status code: {status}")]
    Protocol { status: u16 },

    #[error("could not decode response: {0}")]
    Decode(String),

    #[error("{operation} response not successful (HTTP {status}){}", join_messages(.messages))]
    Service {
        operation: &'static str,
        status: u16,
        messages: Vec<String>,
    },
}

fn join_messages(messages: &[String]) -> String {
    if messages.is_empty() {
        String::new()
    } else {
        format!(": {}", messages.join("; "))
    }
}

impl ErrorHint for DirectoryError {
    fn user_hint(&self) -> &str {
        match self {
            Self::Transport(_) => "Could not reach the image service. Check your connection",
            Self::Protocol { .. } => "The image service rejected the request. Check the account id and API key",
            Self::Decode(_) => "The image service returned an unexpected response",
            Self::Service { .. } => "The image service reported a failure. Check the API key permissions",
        }
    }
}

/// Fatal errors of a remediation pass
///
/// The two listing steps fail independently: an `InitialListing` failure means
/// nothing was remediated, while a `Verification` failure happens after every
/// secure call has already completed and been logged.
#[derive(Debug, Error)]
pub enum RemediationError {
    #[error("failed to get images id: {0}")]
    InitialListing(#[source] DirectoryError),

    #[error("failed to verify remaining images: {0}")]
    Verification(#[source] DirectoryError),
}

impl RemediationError {
    /// The underlying directory error
    pub fn directory_error(&self) -> &DirectoryError {
        match self {
            Self::InitialListing(err) | Self::Verification(err) => err,
        }
    }

    /// Whether any image was patched before the failure
    pub fn remediation_attempted(&self) -> bool {
        matches!(self, Self::Verification(_))
    }
}

impl ErrorHint for RemediationError {
    fn user_hint(&self) -> &str {
        self.directory_error().user_hint()
    }
}
