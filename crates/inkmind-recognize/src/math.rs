//! Mathpix math OCR client.

use crate::config::RecognitionConfig;
use crate::error::{RecognitionError, RecognitionResult};
use crate::recognizer::{
    BoxFuture, RecognitionKind, Recognizer, image_form, read_json, secret_header,
};
use inkmind_core::ImageBytes;
use serde::Deserialize;
use std::sync::Arc;

/// Mathpix answers some failures with 200 and an `error` field.
#[derive(Debug, Deserialize)]
struct MathResponse {
    latex_normal: Option<String>,
    error: Option<String>,
}

/// Posts drawings to Mathpix with `app_id` / `app_key` headers.
#[derive(Debug, Clone)]
pub struct MathClient {
    http: reqwest::Client,
    config: Arc<RecognitionConfig>,
}

impl MathClient {
    pub fn new(config: Arc<RecognitionConfig>) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Use an existing HTTP client (shares its connection pool).
    pub fn with_client(http: reqwest::Client, config: Arc<RecognitionConfig>) -> Self {
        Self { http, config }
    }

    /// Upload `image` and return the `latex_normal` field of the response.
    pub async fn recognize_latex(&self, image: ImageBytes) -> RecognitionResult<String> {
        let settings = &self.config.math;
        if settings.endpoint.is_empty() {
            return Err(RecognitionError::MissingEndpoint(RecognitionKind::Math));
        }

        let app_id = secret_header("app_id", &settings.app_id)?;
        let app_key = secret_header("app_key", &settings.app_key)?;

        log::info!("Sending {} byte drawing to math recognition", image.len());
        // The multipart encoder sets `Content-Type: multipart/form-data` with its boundary.
        let response = self
            .http
            .post(&settings.endpoint)
            .header("app_id", app_id)
            .header("app_key", app_key)
            .multipart(image_form(image)?)
            .send()
            .await?;

        let body: MathResponse = read_json(response, "latex_normal").await?;
        match (body.latex_normal, body.error) {
            (Some(latex), _) => Ok(latex),
            (None, Some(error)) => Err(RecognitionError::Service(error)),
            (None, None) => Err(RecognitionError::MissingField("latex_normal")),
        }
    }
}

impl Recognizer for MathClient {
    fn kind(&self) -> RecognitionKind {
        RecognitionKind::Math
    }

    fn recognize(&self, image: ImageBytes) -> BoxFuture<'_, RecognitionResult<String>> {
        Box::pin(self.recognize_latex(image))
    }
}
