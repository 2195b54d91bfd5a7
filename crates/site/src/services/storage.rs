//! Object storage client for product images.
//!
//! Uploads image blobs to a hosted bucket over its HTTP API and derives the
//! public URL the catalogue row will reference. Keys are derived from the
//! upload timestamp plus a short random suffix.

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::distr::Alphanumeric;
use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use thiserror::Error;

use crate::config::StorageConfig;

/// Length of the random suffix in object keys.
const KEY_SUFFIX_LENGTH: usize = 6;

/// File extensions passed through to the object key; anything else is stored
/// as `bin`.
const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

/// Errors that can occur when talking to object storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Storage API returned an error response.
    #[error("Storage API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Client configuration was invalid.
    #[error("Invalid storage configuration: {0}")]
    Config(String),
}

/// Object storage API client.
#[derive(Clone)]
pub struct StorageClient {
    client: reqwest::Client,
    endpoint: String,
    bucket: String,
}

impl StorageClient {
    /// Create a new storage client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build or the service key
    /// is not a valid header value.
    pub fn new(config: &StorageConfig) -> Result<Self, StorageError> {
        let mut headers = HeaderMap::new();

        let auth_value = format!("Bearer {}", config.service_key.expose_secret());
        headers.insert(
            "Authorization",
            HeaderValue::from_str(&auth_value)
                .map_err(|e| StorageError::Config(format!("invalid service key: {e}")))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            bucket: config.bucket.clone(),
        })
    }

    /// Upload an object and return its public URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API responds with a
    /// non-success status. The caller reports the failure; there is no retry.
    pub async fn upload(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        let url = format!("{}/object/{}/{key}", self.endpoint, self.bucket);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", content_type)
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StorageError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(self.public_url(key))
    }

    /// Public URL for an object in the bucket.
    #[must_use]
    pub fn public_url(&self, key: &str) -> String {
        format!("{}/object/public/{}/{key}", self.endpoint, self.bucket)
    }
}

/// Derive an object key from the upload instant and the original filename.
///
/// Format: `<epoch-millis>-<6 random alphanumerics>.<extension>`. The
/// extension is lowercased and whitelisted; unrecognized extensions become
/// `bin`.
#[must_use]
pub fn object_key(original_filename: &str, now: DateTime<Utc>) -> String {
    let extension = original_filename
        .rsplit('.')
        .next()
        .map(str::to_lowercase)
        .filter(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or_else(|| "bin".to_owned());

    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(KEY_SUFFIX_LENGTH)
        .map(char::from)
        .collect();

    format!("{}-{suffix}.{extension}", now.timestamp_millis())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn test_config() -> StorageConfig {
        StorageConfig {
            endpoint: "https://files.test/storage/v1".to_string(),
            bucket: "product-images".to_string(),
            service_key: SecretString::from("service-key"),
        }
    }

    fn upload_instant() -> DateTime<Utc> {
        "2026-08-30T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_public_url() {
        let client = StorageClient::new(&test_config()).unwrap();
        assert_eq!(
            client.public_url("123-abcdef.png"),
            "https://files.test/storage/v1/object/public/product-images/123-abcdef.png"
        );
    }

    #[test]
    fn test_object_key_is_timestamp_prefixed() {
        let key = object_key("scale.png", upload_instant());
        let millis = upload_instant().timestamp_millis().to_string();
        assert!(key.starts_with(&format!("{millis}-")));
        assert!(key.ends_with(".png"));
    }

    #[test]
    fn test_object_key_lowercases_extension() {
        let key = object_key("PHOTO.JPG", upload_instant());
        assert!(key.ends_with(".jpg"));
    }

    #[test]
    fn test_object_key_rejects_unknown_extension() {
        let key = object_key("payload.exe", upload_instant());
        assert!(key.ends_with(".bin"));

        let key = object_key("no-extension", upload_instant());
        assert!(key.ends_with(".bin"));
    }

    #[test]
    fn test_object_keys_differ_for_same_instant() {
        let a = object_key("scale.png", upload_instant());
        let b = object_key("scale.png", upload_instant());
        assert_ne!(a, b);
    }
}
