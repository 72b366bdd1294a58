//! Error taxonomy for the analysis pipeline and its HTTP surface.
//!
//! Extraction failures are fatal per request (400). Upstream and format
//! failures are never surfaced directly: the pipeline recovers them through
//! the fallback table so callers always receive a shape-complete 200.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Failure to turn uploaded bytes into text. Terminates the request.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Failed to extract text from PDF")]
    PdfParse(#[source] lopdf::Error),

    #[error("Failed to extract text from image")]
    Ocr(#[source] anyhow::Error),

    #[error("Unsupported file type")]
    UnsupportedType(String),

    #[error("No text could be extracted from the document")]
    EmptyDocument,
}

impl ExtractionError {
    /// Stable machine-readable reason code.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::PdfParse(_) => "pdf-parse-failure",
            Self::Ocr(_) => "ocr-failure",
            Self::UnsupportedType(_) => "unsupported-type",
            Self::EmptyDocument => "empty-document",
        }
    }
}

/// Failure to obtain a reply from the generative model.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("no API credential configured")]
    NoCredential,

    #[error("transport error calling model API: {0}")]
    Network(String),

    #[error("model API quota exhausted")]
    Quota,

    #[error("model API error: {0}")]
    Model(String),
}

impl UpstreamError {
    pub fn reason(&self) -> &'static str {
        match self {
            Self::NoCredential => "no-credential",
            Self::Network(_) => "network",
            Self::Quota => "quota",
            Self::Model(_) => "model-error",
        }
    }
}

/// Model reply that could not be coerced into a JSON object.
/// Carries the working text that failed to parse for logging.
#[derive(Debug, thiserror::Error)]
#[error("model reply is not valid JSON")]
pub struct FormatError {
    pub raw: String,
}

/// HTTP-facing error. Everything a handler can return maps onto either a
/// 400 with `{error}` or a 500 with `{error, details}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }
}

impl From<ExtractionError> for ApiError {
    fn from(err: ExtractionError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            Self::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Internal server error",
                    "details": msg,
                })),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_codes_are_stable() {
        assert_eq!(ExtractionError::EmptyDocument.reason(), "empty-document");
        assert_eq!(
            ExtractionError::UnsupportedType("application/zip".into()).reason(),
            "unsupported-type"
        );
        assert_eq!(UpstreamError::NoCredential.reason(), "no-credential");
        assert_eq!(UpstreamError::Quota.reason(), "quota");
    }

    #[test]
    fn extraction_errors_become_bad_requests() {
        let api: ApiError = ExtractionError::EmptyDocument.into();
        match api {
            ApiError::BadRequest(msg) => {
                assert_eq!(msg, "No text could be extracted from the document")
            }
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }
}
