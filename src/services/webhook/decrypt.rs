//! Webhook URL Decryption
//!
//! The webhook URL is stored as base64 KMS ciphertext. The trait is the seam
//! between the notifier and AWS KMS so the relay can run against a fake.

use async_trait::async_trait;
use aws_sdk_kms::error::DisplayErrorContext;
use aws_sdk_kms::primitives::Blob;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use super::types::WebhookError;

/// Turns ciphertext bytes into plaintext bytes.
#[async_trait]
pub trait SecretDecryptor: Send + Sync {
    async fn decrypt(&self, ciphertext: Vec<u8>) -> Result<Vec<u8>, WebhookError>;
}

/// AWS KMS backed decryptor.
pub struct KmsDecryptor {
    client: aws_sdk_kms::Client,
}

impl KmsDecryptor {
    pub fn new(client: aws_sdk_kms::Client) -> Self {
        Self { client }
    }

    /// Build a client from the Lambda environment's credentials and region.
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(aws_sdk_kms::Client::new(&config))
    }
}

#[async_trait]
impl SecretDecryptor for KmsDecryptor {
    async fn decrypt(&self, ciphertext: Vec<u8>) -> Result<Vec<u8>, WebhookError> {
        let output = self
            .client
            .decrypt()
            .ciphertext_blob(Blob::new(ciphertext))
            .send()
            .await
            .map_err(|e| {
                WebhookError::DecryptionError(format!("KMS decrypt failed: {}", DisplayErrorContext(&e)))
            })?;

        output
            .plaintext()
            .map(|blob| blob.as_ref().to_vec())
            .ok_or_else(|| WebhookError::DecryptionError("KMS returned no plaintext".to_string()))
    }
}

/// Decode and decrypt the stored webhook token into an HTTPS URL.
///
/// The stored plaintext normally omits the scheme; `https://` is prepended
/// unless one is already present.
pub async fn decrypt_webhook_url(
    decryptor: &dyn SecretDecryptor,
    encrypted: &str,
) -> Result<String, WebhookError> {
    let ciphertext = BASE64
        .decode(encrypted.trim())
        .map_err(|e| WebhookError::DecryptionError(format!("Base64 decode failed: {}", e)))?;

    let plaintext = decryptor.decrypt(ciphertext).await?;
    let url = String::from_utf8(plaintext).map_err(|e| {
        WebhookError::DecryptionError(format!("Decrypted URL is not valid UTF-8: {}", e))
    })?;

    if url.starts_with("https://") || url.starts_with("http://") {
        Ok(url)
    } else {
        Ok(format!("https://{}", url))
    }
}
