//! The upload collaborator and its HTTP implementation.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::error::UploadError;
use crate::form::UploadForm;

/// Where uploads go unless told otherwise.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/upload";

/// Sends an upload payload somewhere and hands back the JSON reply.
///
/// Futures are not required to be `Send`: in the browser the request runs on
/// the single UI thread.
#[async_trait(?Send)]
pub trait Uploader {
    async fn send(&self, form: UploadForm) -> Result<Value, UploadError>;
}

/// POSTs the form to an HTTP endpoint with reqwest.
///
/// No headers beyond what the multipart encoder adds, no retries, no timeout.
#[derive(Debug, Clone)]
pub struct HttpUploader {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpUploader {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpUploader {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait(?Send)]
impl Uploader for HttpUploader {
    async fn send(&self, form: UploadForm) -> Result<Value, UploadError> {
        debug!(
            endpoint = %self.endpoint,
            file = form.file().map(|f| f.name()),
            "sending upload"
        );
        let body = form.into_multipart()?;

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(body)
            .send()
            .await
            .map_err(UploadError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(UploadError::Status {
                status: status.as_u16(),
            });
        }

        response.json::<Value>().await.map_err(UploadError::Decode)
    }
}
