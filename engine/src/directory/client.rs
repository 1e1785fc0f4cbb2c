//! HTTP client for the Cloudflare Images API
//!
//! Both operations share one `reqwest::Client`, so concurrent secure calls
//! reuse its connection pool. Responses are classified in a fixed order:
//! a `success: false` envelope is a service error whatever the status, any
//! other non-200 status is a protocol error, and a 200 with an unreadable body
//! is a decode error.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use sdk::errors::DirectoryError;
use sdk::types::{unprotected_ids, ImageListResult, ServiceMessage, MAX_PAGE_SIZE};
use serde::Serialize;
use serde_json::Value;

use super::{ImageDirectory, Result};
use crate::config::DirectoryConfig;

const LIST_OPERATION: &str = "list images";
const UPDATE_OPERATION: &str = "update image";

#[derive(Debug, Serialize)]
struct UpdateImageRequest {
    #[serde(rename = "requireSignedURLs")]
    require_signed_urls: bool,
}

/// Image directory backed by the remote HTTP API
#[derive(Debug, Clone)]
pub struct ImageDirectoryClient {
    config: DirectoryConfig,
    client: Client,
}

impl ImageDirectoryClient {
    /// Create a client with the configured per-request timeout
    pub fn new(config: DirectoryConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| DirectoryError::Transport(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Fetch the first page of images
    pub async fn list_images(&self) -> Result<ImageListResult> {
        let url = format!(
            "{}?page=1&per_page={}",
            self.config.images_url(),
            MAX_PAGE_SIZE
        );

        tracing::debug!(account_id = %self.config.account_id, "Listing images");

        let response = self
            .client
            .get(&url)
            .header("Authorization", self.config.api_key.bearer())
            .send()
            .await
            .map_err(transport_error)?;

        let envelope = read_envelope(LIST_OPERATION, response).await?;

        if envelope.is_full_page() {
            tracing::warn!(
                page_size = MAX_PAGE_SIZE,
                "there's probably more pages to go through"
            );
        }

        tracing::debug!(count = envelope.images().len(), "Listed images");
        Ok(envelope)
    }
}

#[async_trait]
impl ImageDirectory for ImageDirectoryClient {
    async fn list_unprotected_images(&self) -> Result<Vec<String>> {
        let envelope = self.list_images().await?;
        Ok(unprotected_ids(envelope.images()))
    }

    async fn secure_image(&self, image_id: &str) -> Result<()> {
        let url = format!("{}/{}", self.config.images_url(), image_id);

        tracing::debug!(image_id = %image_id, "Requiring signed URLs");

        // .json() sets Content-Type: application/json
        let response = self
            .client
            .patch(&url)
            .header("Authorization", self.config.api_key.bearer())
            .json(&UpdateImageRequest {
                require_signed_urls: true,
            })
            .send()
            .await
            .map_err(transport_error)?;

        read_envelope(UPDATE_OPERATION, response).await?;
        Ok(())
    }
}

fn transport_error(err: reqwest::Error) -> DirectoryError {
    if err.is_timeout() {
        return DirectoryError::Transport("request timed out".to_string());
    }
    // The URL carries the account id; keep it out of logs.
    DirectoryError::Transport(err.without_url().to_string())
}

async fn read_envelope(
    operation: &'static str,
    response: reqwest::Response,
) -> Result<ImageListResult> {
    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;
    classify_response(operation, status, &body)
}

/// Map a raw response onto the error taxonomy
///
/// The success flag is read from the raw JSON before the full decode, so a
/// `success: false` body is a service error even when its other fields have
/// unexpected shapes. On a 200 a missing flag counts as `false`.
fn classify_response(
    operation: &'static str,
    status: StatusCode,
    body: &str,
) -> Result<ImageListResult> {
    if let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(body) {
        let failed = match fields.get("success") {
            Some(Value::Bool(success)) => !success,
            None => status == StatusCode::OK,
            Some(_) => false,
        };

        if failed {
            tracing::debug!(
                status_code = status.as_u16(),
                operation,
                "Service reported failure"
            );
            return Err(DirectoryError::Service {
                operation,
                status: status.as_u16(),
                messages: service_messages(fields.get("errors")),
            });
        }
    }

    if status != StatusCode::OK {
        return Err(DirectoryError::Protocol {
            status: status.as_u16(),
        });
    }

    serde_json::from_str::<ImageListResult>(body).map_err(|e| DirectoryError::Decode(e.to_string()))
}

/// Messages from the envelope's `errors` array; anything unreadable is dropped
fn service_messages(errors: Option<&Value>) -> Vec<String> {
    errors
        .cloned()
        .and_then(|errors| serde_json::from_value::<Vec<ServiceMessage>>(errors).ok())
        .unwrap_or_default()
        .iter()
        .map(ServiceMessage::describe)
        .collect()
}
