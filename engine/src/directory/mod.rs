//! Image Directory abstraction
//!
//! The remediation pass only ever talks to the image service through the
//! `ImageDirectory` trait. `ImageDirectoryClient` is the HTTP implementation;
//! tests substitute in-memory directories with scripted per-image outcomes.

use async_trait::async_trait;
use sdk::errors::DirectoryError;

pub mod client;

pub use client::ImageDirectoryClient;

/// Result type for directory operations
pub type Result<T> = std::result::Result<T, DirectoryError>;

/// The two operations the remediation pass needs from the image service
///
/// Implementations must be safe to call concurrently through a shared
/// reference: the orchestrator issues every `secure_image` call at once.
#[async_trait]
pub trait ImageDirectory: Send + Sync {
    /// Ids of images that do not require signed URLs, in service order
    ///
    /// Only the first page is fetched. A full page logs a warning.
    async fn list_unprotected_images(&self) -> Result<Vec<String>>;

    /// Ask the service to require signed URLs for one image
    ///
    /// The id is not validated locally; an unknown id surfaces as whatever
    /// error the service returns.
    async fn secure_image(&self, image_id: &str) -> Result<()>;
}
