//! Image directory data model

use crate::errors::DirectoryError;
use serde::{Deserialize, Deserializer, Serialize};

/// Page-size ceiling for a single list call. A page holding exactly this many
/// images probably has more pages behind it; those are not fetched.
pub const MAX_PAGE_SIZE: usize = 100;

/// Snapshot of one hosted image as returned by a list call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Opaque, unique image identifier
    pub id: String,

    /// Whether the image can only be fetched through a signed URL
    #[serde(rename = "requireSignedURLs", default)]
    pub require_signed_urls: bool,
}

impl Image {
    /// Create a new image snapshot
    pub fn new(id: impl Into<String>, require_signed_urls: bool) -> Self {
        Self {
            id: id.into(),
            require_signed_urls,
        }
    }
}

/// Error or message entry of the response envelope
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceMessage {
    #[serde(default)]
    pub code: i64,
    #[serde(default)]
    pub message: String,
}

impl ServiceMessage {
    /// `message (code N)`, or just the message when the code is unset
    pub fn describe(&self) -> String {
        if self.code == 0 {
            self.message.clone()
        } else {
            format!("{} (code {})", self.message, self.code)
        }
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct ImagePage {
    #[serde(default)]
    images: Vec<Image>,
}

/// Response envelope shared by the list and update operations
///
/// `{"success": bool, "errors": [...], "result": {"images": [...]}}`. The
/// update response carries a single image as `result`, which decodes as an
/// empty image list. A missing `success` flag reads as `false` and a null
/// `errors` array as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageListResult {
    #[serde(default)]
    pub success: bool,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub errors: Vec<ServiceMessage>,

    #[serde(default)]
    result: Option<ImagePage>,
}

impl ImageListResult {
    /// Build a successful envelope around a list of images
    pub fn from_images(images: Vec<Image>) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(ImagePage { images }),
        }
    }

    /// Images in the order the service returned them
    pub fn images(&self) -> &[Image] {
        self.result
            .as_ref()
            .map(|page| page.images.as_slice())
            .unwrap_or_default()
    }

    /// Whether the page hit the page-size ceiling
    pub fn is_full_page(&self) -> bool {
        self.images().len() == MAX_PAGE_SIZE
    }
}

/// Identifiers of images that do not require signed URLs, in service order
pub fn unprotected_ids(images: &[Image]) -> Vec<String> {
    images
        .iter()
        .filter(|image| !image.require_signed_urls)
        .map(|image| image.id.clone())
        .collect()
}

/// Result of securing one image
#[derive(Debug, Clone)]
pub enum RemediationOutcome {
    /// The service accepted the update
    Secured,

    /// The update failed; the image stays unprotected until the next run
    Failed(DirectoryError),
}

impl RemediationOutcome {
    pub fn is_secured(&self) -> bool {
        matches!(self, Self::Secured)
    }
}

/// Outcome of one secure call, keyed by image id
#[derive(Debug, Clone)]
pub struct ImageOutcome {
    pub image_id: String,
    pub outcome: RemediationOutcome,
}

/// Summary of one remediation pass
#[derive(Debug, Clone, Default)]
pub struct RemediationReport {
    /// One entry per image the pass tried to secure
    pub outcomes: Vec<ImageOutcome>,

    /// Images still unprotected according to the verification listing
    pub remaining: Vec<String>,
}

impl RemediationReport {
    /// Number of images the service reported as secured
    pub fn secured_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.outcome.is_secured())
            .count()
    }

    /// Failed images with their errors
    pub fn failures(&self) -> Vec<(&str, &DirectoryError)> {
        self.outcomes
            .iter()
            .filter_map(|o| match &o.outcome {
                RemediationOutcome::Failed(err) => Some((o.image_id.as_str(), err)),
                RemediationOutcome::Secured => None,
            })
            .collect()
    }

    /// Number of images still unprotected after the pass
    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }
}
