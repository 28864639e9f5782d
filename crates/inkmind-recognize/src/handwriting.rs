//! Handwriting OCR client.

use crate::config::RecognitionConfig;
use crate::error::{RecognitionError, RecognitionResult};
use crate::recognizer::{
    BoxFuture, RecognitionKind, Recognizer, image_form, read_json, secret_header,
};
use inkmind_core::ImageBytes;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
struct HandwritingResponse {
    text: Option<String>,
}

/// Posts drawings to a handwriting OCR endpoint with a bearer token.
#[derive(Debug, Clone)]
pub struct HandwritingClient {
    http: reqwest::Client,
    config: Arc<RecognitionConfig>,
}

impl HandwritingClient {
    pub fn new(config: Arc<RecognitionConfig>) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Use an existing HTTP client (shares its connection pool).
    pub fn with_client(http: reqwest::Client, config: Arc<RecognitionConfig>) -> Self {
        Self { http, config }
    }

    /// Upload `image` and return the `text` field of the response.
    pub async fn recognize_text(&self, image: ImageBytes) -> RecognitionResult<String> {
        let settings = &self.config.handwriting;
        if settings.endpoint.is_empty() {
            return Err(RecognitionError::MissingEndpoint(RecognitionKind::Handwriting));
        }

        let authorization =
            secret_header("authorization", &format!("Bearer {}", settings.api_key))?;

        log::info!(
            "Sending {} byte drawing to handwriting recognition",
            image.len()
        );
        let response = self
            .http
            .post(&settings.endpoint)
            .header(AUTHORIZATION, authorization)
            .multipart(image_form(image)?)
            .send()
            .await?;

        let body: HandwritingResponse = read_json(response, "text").await?;
        body.text.ok_or(RecognitionError::MissingField("text"))
    }
}

impl Recognizer for HandwritingClient {
    fn kind(&self) -> RecognitionKind {
        RecognitionKind::Handwriting
    }

    fn recognize(&self, image: ImageBytes) -> BoxFuture<'_, RecognitionResult<String>> {
        Box::pin(self.recognize_text(image))
    }
}
