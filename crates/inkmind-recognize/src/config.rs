//! Service endpoints and credentials.
//!
//! Built once at startup and shared with the clients; nothing here re-reads
//! the environment later.

use std::fmt;

/// Mathpix text recognition endpoint.
pub const MATHPIX_TEXT_URL: &str = "https://api.mathpix.com/v3/text";

/// Environment variable holding the handwriting service token.
pub const ENV_HANDWRITING_API_KEY: &str = "HF_API_KEY";
/// Environment variable holding the handwriting service URL.
pub const ENV_HANDWRITING_ENDPOINT: &str = "HF_HANDWRITING_ENDPOINT";
/// Environment variable holding the Mathpix app id.
pub const ENV_MATHPIX_APP_ID: &str = "MATHPIX_APP_ID";
/// Environment variable holding the Mathpix app key.
pub const ENV_MATHPIX_APP_KEY: &str = "MATHPIX_APP_KEY";
/// Optional override of [`MATHPIX_TEXT_URL`].
pub const ENV_MATHPIX_ENDPOINT: &str = "MATHPIX_ENDPOINT";

/// Handwriting OCR service settings.
#[derive(Clone, Default)]
pub struct HandwritingConfig {
    /// URL that accepts the multipart upload.
    pub endpoint: String,
    /// Sent as `Authorization: Bearer <api_key>`.
    pub api_key: String,
}

/// Math OCR service settings.
#[derive(Clone)]
pub struct MathConfig {
    pub endpoint: String,
    /// Sent as the `app_id` header.
    pub app_id: String,
    /// Sent as the `app_key` header.
    pub app_key: String,
}

impl Default for MathConfig {
    fn default() -> Self {
        Self {
            endpoint: MATHPIX_TEXT_URL.to_string(),
            app_id: String::new(),
            app_key: String::new(),
        }
    }
}

/// Configuration for both recognition services.
#[derive(Debug, Clone, Default)]
pub struct RecognitionConfig {
    pub handwriting: HandwritingConfig,
    pub math: MathConfig,
}

impl RecognitionConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Missing credentials become empty strings; requests still go out and
    /// fail on the service side.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key).unwrap_or_else(|| {
                log::warn!("{} is not set", key);
                String::new()
            })
        };

        Self {
            handwriting: HandwritingConfig {
                endpoint: read(ENV_HANDWRITING_ENDPOINT),
                api_key: read(ENV_HANDWRITING_API_KEY),
            },
            math: MathConfig {
                endpoint: lookup(ENV_MATHPIX_ENDPOINT)
                    .unwrap_or_else(|| MATHPIX_TEXT_URL.to_string()),
                app_id: read(ENV_MATHPIX_APP_ID),
                app_key: read(ENV_MATHPIX_APP_KEY),
            },
        }
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() { "<unset>" } else { "<redacted>" }
}

impl fmt::Debug for HandwritingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandwritingConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &redact(&self.api_key))
            .finish()
    }
}

impl fmt::Debug for MathConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MathConfig")
            .field("endpoint", &self.endpoint)
            .field("app_id", &self.app_id)
            .field("app_key", &redact(&self.app_key))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup() {
        let config = RecognitionConfig::from_lookup(lookup(&[
            (ENV_HANDWRITING_API_KEY, "hf-token"),
            (ENV_HANDWRITING_ENDPOINT, "https://ocr.example/handwriting"),
            (ENV_MATHPIX_APP_ID, "my-app"),
            (ENV_MATHPIX_APP_KEY, "my-key"),
        ]));

        assert_eq!(config.handwriting.api_key, "hf-token");
        assert_eq!(config.handwriting.endpoint, "https://ocr.example/handwriting");
        assert_eq!(config.math.endpoint, MATHPIX_TEXT_URL);
        assert_eq!(config.math.app_id, "my-app");
        assert_eq!(config.math.app_key, "my-key");
    }

    #[test]
    fn test_missing_values_are_empty() {
        let config = RecognitionConfig::from_lookup(|_| None);
        assert!(config.handwriting.api_key.is_empty());
        assert!(config.handwriting.endpoint.is_empty());
        assert!(config.math.app_id.is_empty());
        assert_eq!(config.math.endpoint, MATHPIX_TEXT_URL);
    }

    #[test]
    fn test_math_endpoint_override() {
        let config =
            RecognitionConfig::from_lookup(lookup(&[(ENV_MATHPIX_ENDPOINT, "http://localhost:9000")]));
        assert_eq!(config.math.endpoint, "http://localhost:9000");
    }

    #[test]
    fn test_debug_hides_secrets() {
        let config = RecognitionConfig::from_lookup(lookup(&[
            (ENV_HANDWRITING_API_KEY, "hf-secret"),
            (ENV_MATHPIX_APP_KEY, "mp-secret"),
        ]));
        let debug = format!("{:?}", config);
        assert!(!debug.contains("hf-secret"));
        assert!(!debug.contains("mp-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
