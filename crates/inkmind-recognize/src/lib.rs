//! Recognition clients for the InkMind AI tools.
//!
//! Each client uploads an SVG snapshot of the whiteboard as a single
//! multipart `file` part and extracts one text field from the JSON reply:
//!
//! - [`HandwritingClient`]: bearer token, reads `text`
//! - [`MathClient`]: Mathpix `app_id` / `app_key` headers, reads `latex_normal`

pub mod config;
pub mod error;
pub mod handwriting;
pub mod math;
pub mod recognizer;

pub use config::{HandwritingConfig, MATHPIX_TEXT_URL, MathConfig, RecognitionConfig};
pub use error::{RecognitionError, RecognitionResult};
pub use handwriting::HandwritingClient;
pub use math::MathClient;
pub use recognizer::{BoxFuture, RecognitionKind, Recognizer};
