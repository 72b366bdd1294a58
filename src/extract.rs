//! Text extraction from uploaded documents.
//!
//! Operates on in-memory buffers only; nothing touches disk. PDF text comes
//! from lopdf, plain text is decoded lossily as UTF-8, and images are handed
//! to whatever [`OcrEngine`] is configured.

use crate::error::ExtractionError;
use crate::ocr::OcrEngine;
use lopdf::Document;
use std::io::Cursor;
use tracing::debug;

/// Supported upload categories, derived from the multipart content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
    Png,
    Jpeg,
}

impl DocumentKind {
    /// Map a mime type onto a supported kind. Anything else is rejected
    /// before extraction starts.
    pub fn from_mime(mime: &str) -> Result<Self, ExtractionError> {
        match mime {
            "application/pdf" => Ok(Self::Pdf),
            "text/plain" => Ok(Self::PlainText),
            "image/png" => Ok(Self::Png),
            "image/jpeg" | "image/jpg" => Ok(Self::Jpeg),
            other => Err(ExtractionError::UnsupportedType(other.to_string())),
        }
    }

    /// Fall back to the filename extension when the browser sent no
    /// usable content type.
    pub fn from_filename(name: &str) -> Result<Self, ExtractionError> {
        let lowered = name.to_lowercase();
        if lowered.ends_with(".pdf") {
            Ok(Self::Pdf)
        } else if lowered.ends_with(".txt") {
            Ok(Self::PlainText)
        } else if lowered.ends_with(".png") {
            Ok(Self::Png)
        } else if lowered.ends_with(".jpg") || lowered.ends_with(".jpeg") {
            Ok(Self::Jpeg)
        } else {
            Err(ExtractionError::UnsupportedType(name.to_string()))
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::PlainText => "text/plain",
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }
}

/// Extract text from raw document bytes.
///
/// Returns non-empty text or fails; an extraction that produces only
/// whitespace is reported as [`ExtractionError::EmptyDocument`] rather than
/// silently passed downstream.
pub async fn extract(
    data: &[u8],
    kind: DocumentKind,
    ocr: Option<&dyn OcrEngine>,
) -> Result<String, ExtractionError> {
    let text = match kind {
        DocumentKind::Pdf => extract_pdf_text(data)?,
        DocumentKind::PlainText => String::from_utf8_lossy(data).to_string(),
        DocumentKind::Png | DocumentKind::Jpeg => {
            let engine = ocr.ok_or_else(|| {
                ExtractionError::Ocr(anyhow::anyhow!("no OCR engine configured"))
            })?;
            engine
                .recognize(data, kind.mime())
                .await
                .map_err(ExtractionError::Ocr)?
        }
    };

    if text.trim().is_empty() {
        return Err(ExtractionError::EmptyDocument);
    }

    debug!("extracted {} chars from {:?} upload", text.len(), kind);
    Ok(text)
}

/// Extract text from a PDF with lopdf, page by page. Pages whose content
/// streams fail to decode are skipped; a document that fails to load at all
/// is a hard failure.
fn extract_pdf_text(data: &[u8]) -> Result<String, ExtractionError> {
    let doc = Document::load_from(Cursor::new(data)).map_err(ExtractionError::PdfParse)?;

    let mut text = String::new();
    for (page_num, _) in doc.get_pages() {
        if let Ok(content) = doc.extract_text(&[page_num]) {
            text.push_str(&content);
            text.push('\n');
        }
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn plain_text_decodes_directly() {
        let text = extract(b"hello agreement", DocumentKind::PlainText, None)
            .await
            .unwrap();
        assert_eq!(text, "hello agreement");
    }

    #[tokio::test]
    async fn whitespace_only_text_is_rejected() {
        let err = extract(b"  \n\t ", DocumentKind::PlainText, None)
            .await
            .unwrap_err();
        assert_eq!(err.reason(), "empty-document");
    }

    #[tokio::test]
    async fn malformed_pdf_fails_with_parse_reason() {
        let err = extract(b"not a pdf at all", DocumentKind::Pdf, None)
            .await
            .unwrap_err();
        assert_eq!(err.reason(), "pdf-parse-failure");
    }

    #[tokio::test]
    async fn image_without_ocr_engine_is_an_ocr_failure() {
        let err = extract(&[0x89, 0x50, 0x4e, 0x47], DocumentKind::Png, None)
            .await
            .unwrap_err();
        assert_eq!(err.reason(), "ocr-failure");
    }

    #[test]
    fn mime_mapping_rejects_unknown_types() {
        assert!(DocumentKind::from_mime("application/pdf").is_ok());
        assert!(DocumentKind::from_mime("image/jpg").is_ok());
        let err = DocumentKind::from_mime("application/zip").unwrap_err();
        assert_eq!(err.reason(), "unsupported-type");
    }

    #[test]
    fn filename_fallback_maps_extensions() {
        assert_eq!(
            DocumentKind::from_filename("Contract.PDF").unwrap(),
            DocumentKind::Pdf
        );
        assert_eq!(
            DocumentKind::from_filename("scan.jpeg").unwrap(),
            DocumentKind::Jpeg
        );
        assert!(DocumentKind::from_filename("data.xlsx").is_err());
    }
}
