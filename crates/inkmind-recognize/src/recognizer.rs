//! The seam between the panel and the recognition services.

use crate::error::{RecognitionError, RecognitionResult};
use inkmind_core::ImageBytes;
use reqwest::Response;
use reqwest::header::HeaderValue;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// Boxed future for async operations (compatible with WASM).
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Which recognition service a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecognitionKind {
    Handwriting,
    Math,
}

impl fmt::Display for RecognitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecognitionKind::Handwriting => f.write_str("handwriting"),
            RecognitionKind::Math => f.write_str("math"),
        }
    }
}

/// A service that turns a drawing into text.
///
/// Futures are not `Send`: recognition runs on the UI thread's executor.
pub trait Recognizer {
    /// The kind of text this service produces.
    fn kind(&self) -> RecognitionKind;

    /// Upload `image` and return the recognized text.
    fn recognize(&self, image: ImageBytes) -> BoxFuture<'_, RecognitionResult<String>>;
}

/// Multipart body with the image as its single `file` part.
pub(crate) fn image_form(image: ImageBytes) -> RecognitionResult<Form> {
    let part = Part::bytes(image.data)
        .file_name(image.file_name)
        .mime_str(image.media_type)?;
    Ok(Form::new().part("file", part))
}

/// Credential header value, hidden from debug output.
pub(crate) fn secret_header(name: &'static str, value: &str) -> RecognitionResult<HeaderValue> {
    let mut value =
        HeaderValue::from_str(value).map_err(|_| RecognitionError::InvalidHeader(name))?;
    value.set_sensitive(true);
    Ok(value)
}

/// Check the status and decode a JSON body.
///
/// A success body that is not JSON of the expected shape counts as lacking
/// `field`.
pub(crate) async fn read_json<T: DeserializeOwned>(
    response: Response,
    field: &'static str,
) -> RecognitionResult<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(RecognitionError::Status {
            status: status.as_u16(),
            body,
        });
    }
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| {
        log::debug!("Undecodable response body: {}", e);
        RecognitionError::MissingField(field)
    })
}
