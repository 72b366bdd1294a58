//! OCR engine abstraction for image uploads.
//!
//! The server never runs OCR locally; image bytes are shipped to a remote
//! recognition service configured via `OCR_ENDPOINT`. The trait seam keeps
//! the extractor testable with an in-process stub.

use anyhow::Result;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Async OCR backend. Implementations return the recognized plain text.
#[async_trait::async_trait]
pub trait OcrEngine: Send + Sync {
    fn name(&self) -> &str;
    async fn recognize(&self, data: &[u8], mime: &str) -> Result<String>;
}

/// OCR backed by a remote HTTP recognition service.
///
/// The image is submitted as a base64 data URL; the service replies with
/// `{"text": "..."}`.
pub struct RemoteOcrEngine {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl RemoteOcrEngine {
    pub fn new(client: reqwest::Client, endpoint: String, api_key: Option<String>) -> Self {
        Self {
            client,
            endpoint,
            api_key,
        }
    }
}

#[derive(Serialize)]
struct OcrRequest {
    image: String,
    mime_type: String,
    language: String,
}

#[derive(Deserialize)]
struct OcrResponse {
    text: String,
}

#[async_trait::async_trait]
impl OcrEngine for RemoteOcrEngine {
    fn name(&self) -> &str {
        "remote"
    }

    async fn recognize(&self, data: &[u8], mime: &str) -> Result<String> {
        let data_url = format!("data:{};base64,{}", mime, BASE64.encode(data));
        let body = OcrRequest {
            image: data_url,
            mime_type: mime.to_string(),
            language: "eng".to_string(),
        };

        info!("RemoteOcrEngine: submitting {} bytes ({})", data.len(), mime);

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let resp = request.send().await?;
        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            anyhow::bail!("OCR service error ({}): {}", status, text);
        }

        let ocr: OcrResponse = resp.json().await?;
        debug!("RemoteOcrEngine: recognized {} chars", ocr.text.len());
        Ok(ocr.text)
    }
}
