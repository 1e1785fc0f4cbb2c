//! Remediation pass
//!
//! One pass is a depth-1 fork-join over the image directory:
//!
//! 1. List unprotected images. Failure here is fatal and nothing is touched.
//! 2. Issue one `secure_image` call per id, all at once, and wait for every
//!    one of them. A failed call is logged with its image id and recorded;
//!    it never cancels its siblings.
//! 3. List again, strictly after the join, and report what is still
//!    unprotected. Failure here is fatal too, but distinct from step 1.
//!
//! Failed images are not retried within a pass. Concurrency is not bounded:
//! a single page caps the fan-out at `MAX_PAGE_SIZE` calls.

use futures::future::join_all;
use sdk::errors::RemediationError;
use sdk::types::{ImageOutcome, RemediationOutcome, RemediationReport};
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::directory::ImageDirectory;

/// Drives remediation passes against an image directory
pub struct Remediator {
    directory: Arc<dyn ImageDirectory>,
}

impl Remediator {
    /// Create a remediator over a shared directory
    pub fn new(directory: Arc<dyn ImageDirectory>) -> Self {
        Self { directory }
    }

    /// Run one list, secure, verify pass
    pub async fn run(&self) -> Result<RemediationReport, RemediationError> {
        let unprotected = self
            .directory
            .list_unprotected_images()
            .await
            .map_err(RemediationError::InitialListing)?;

        info!(count = unprotected.len(), "Found unprotected images");

        let outcomes = self.secure_all(&unprotected).await;

        // Fetch again to see if there are still unprotected images left.
        let remaining = self
            .directory
            .list_unprotected_images()
            .await
            .map_err(RemediationError::Verification)?;

        let report = RemediationReport {
            outcomes,
            remaining,
        };

        if report.remaining_count() > 0 {
            warn!(
                remaining = report.remaining_count(),
                "images left unprotected"
            );
        }

        info!(
            secured = report.secured_count(),
            failed = report.failures().len(),
            "done"
        );

        Ok(report)
    }

    /// Secure every id concurrently and collect one outcome per id
    ///
    /// Outcomes come back in the order of `image_ids`, whatever order the
    /// calls finished in.
    async fn secure_all(&self, image_ids: &[String]) -> Vec<ImageOutcome> {
        let directory = self.directory.as_ref();

        let calls = image_ids.iter().map(|image_id| async move {
            let outcome = match directory.secure_image(image_id).await {
                Ok(()) => {
                    info!(image_id = %image_id, "successfully secured image");
                    RemediationOutcome::Secured
                }
                Err(err) => {
                    error!(image_id = %image_id, error = %err, "failed to secure image");
                    RemediationOutcome::Failed(err)
                }
            };

            ImageOutcome {
                image_id: image_id.clone(),
                outcome,
            }
        });

        join_all(calls).await
    }
}
