//! HTTP router and request handlers.
//!
//! Every analysis endpoint runs the same generic pipeline, differing only in
//! which typed result it asks for. Successful requests always return 200 with
//! a schema-conformant body, degraded or not; only extraction and validation
//! problems surface as 400.

use crate::classify::classify;
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::extract::{extract, DocumentKind};
use crate::gemini::GeminiClient;
use crate::languages;
use crate::ocr::{OcrEngine, RemoteOcrEngine};
use crate::pipeline::{resolve_document_type, Pipeline};
use crate::prompt::PromptContext;
use crate::schema::{
    now_iso8601, AnalysisReport, BenchmarkReport, ClauseExplanation, ComplianceReport, QaAnswer,
    TranslationResponse,
};
use axum::extract::{DefaultBodyLimit, FromRequest, Multipart, Request, State};
use axum::http::header;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Maximum accepted upload size. Enforced in the handler so the error shape
/// stays ours; the router body limit sits above this.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const BODY_LIMIT_BYTES: usize = 25 * 1024 * 1024;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Pipeline,
    pub ocr: Option<Arc<dyn OcrEngine>>,
}

impl AppState {
    /// Wire up state from configuration, sharing one HTTP client between the
    /// model and OCR backends.
    pub fn from_config(config: &AppConfig) -> Self {
        let http = reqwest::Client::new();
        let ocr: Option<Arc<dyn OcrEngine>> = config.ocr_endpoint.clone().map(|endpoint| {
            Arc::new(RemoteOcrEngine::new(
                http.clone(),
                endpoint,
                config.ocr_api_key.clone(),
            )) as Arc<dyn OcrEngine>
        });

        Self {
            pipeline: Pipeline::new(GeminiClient::new(http, config)),
            ocr,
        }
    }
}

/// Build the application router with CORS, tracing, and the body limit.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/languages", get(get_languages))
        .route("/analyze", post(analyze_document))
        .route("/explain", post(explain_clause))
        .route("/ask", post(ask_question))
        .route("/compliance", post(compliance_check))
        .route("/benchmark", post(benchmark_document))
        .route("/translate", post(translate_text))
        .route("/audio", post(audio_instructions))
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ============================================================================
// Request bodies
// ============================================================================

#[derive(Deserialize)]
struct AnalyzeRequest {
    text: Option<String>,
    #[serde(rename = "analysisType")]
    analysis_type: Option<String>,
}

#[derive(Deserialize)]
struct ExplainRequest {
    text: Option<String>,
}

#[derive(Deserialize)]
struct AskRequest {
    question: Option<String>,
    #[serde(rename = "documentText")]
    document_text: Option<String>,
}

#[derive(Deserialize)]
struct ComplianceRequest {
    #[serde(rename = "documentText")]
    document_text: Option<String>,
    #[serde(rename = "documentType")]
    document_type: Option<String>,
    jurisdiction: Option<String>,
}

#[derive(Deserialize)]
struct BenchmarkRequest {
    #[serde(rename = "documentText")]
    document_text: Option<String>,
    #[serde(rename = "documentType")]
    document_type: Option<String>,
    industry: Option<String>,
}

#[derive(Deserialize)]
struct TranslateRequest {
    text: Option<String>,
    #[serde(rename = "targetLanguage")]
    target_language: Option<String>,
    #[serde(rename = "sourceLanguage")]
    source_language: Option<String>,
}

#[derive(Deserialize)]
struct AudioRequest {
    text: Option<String>,
    #[serde(rename = "languageCode")]
    language_code: Option<String>,
}

/// Reject missing or blank required fields with the given message.
fn require(value: Option<String>, message: &str) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ApiError::bad_request(message)),
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "OK",
        "message": "LexLink API is running",
        "timestamp": now_iso8601(),
    }))
}

/// Supported-language catalogue with capability flags.
async fn get_languages(State(state): State<AppState>) -> Json<Value> {
    Json(languages::catalogue(state.pipeline.ai_available()))
}

/// Analyze an uploaded document or raw text.
///
/// Accepts either a multipart upload (`file`/`document` field) or a JSON body
/// with `text`. The `analysisType` field may carry a document-type hint;
/// otherwise the keyword classifier decides.
async fn analyze_document(
    State(state): State<AppState>,
    req: Request,
) -> Result<Json<AnalysisReport>, ApiError> {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    let (text, hint) = if content_type.starts_with("multipart/form-data") {
        let multipart = Multipart::from_request(req, &())
            .await
            .map_err(|e| ApiError::bad_request(format!("Multipart error: {}", e)))?;
        (read_upload(&state, multipart).await?, None)
    } else {
        let body: AnalyzeRequest = Json::from_request(req, &())
            .await
            .map(|Json(b)| b)
            .map_err(|_| ApiError::bad_request("Text or document is required"))?;
        let text = require(body.text, "Text or document is required")?;
        (text, body.analysis_type)
    };

    let doc = resolve_document_type(hint.as_deref(), &text);
    info!("analyze: {} chars, detected type {}", text.len(), doc.as_str());

    let ctx = PromptContext::for_document(doc);
    let mut report: AnalysisReport = state.pipeline.run(&ctx, &text).await;
    if report.document_type.is_empty() {
        report.document_type = doc.as_str().to_string();
    }
    report.document_length = Some(text.len());
    Ok(Json(report))
}

/// Explain a single clause in plain language.
async fn explain_clause(
    State(state): State<AppState>,
    body: Option<Json<ExplainRequest>>,
) -> Result<Json<ClauseExplanation>, ApiError> {
    let text = require(
        body.and_then(|Json(b)| b.text),
        "No text provided",
    )?;

    let explanation: ClauseExplanation = state
        .pipeline
        .run(&PromptContext::default(), &text)
        .await;
    Ok(Json(explanation))
}

/// Answer a question about a previously extracted document.
async fn ask_question(
    State(state): State<AppState>,
    body: Option<Json<AskRequest>>,
) -> Result<Json<QaAnswer>, ApiError> {
    const MSG: &str = "Question and document text are required";
    let body = body.map(|Json(b)| b).ok_or_else(|| ApiError::bad_request(MSG))?;
    let question = require(body.question, MSG)?;
    let document_text = require(body.document_text, MSG)?;

    let ctx = PromptContext {
        document_type: Some(classify(&document_text)),
        question: Some(question),
        ..Default::default()
    };
    let answer: QaAnswer = state.pipeline.run(&ctx, &document_text).await;
    Ok(Json(answer))
}

/// Check a document against jurisdiction regulations.
async fn compliance_check(
    State(state): State<AppState>,
    body: Option<Json<ComplianceRequest>>,
) -> Result<Json<ComplianceReport>, ApiError> {
    const MSG: &str = "Document text is required for compliance check";
    let body = body.map(|Json(b)| b).ok_or_else(|| ApiError::bad_request(MSG))?;
    let text = require(body.document_text, MSG)?;
    let jurisdiction = body.jurisdiction.unwrap_or_else(|| "US".to_string());

    let doc = resolve_document_type(body.document_type.as_deref(), &text);
    let ctx = PromptContext {
        document_type: Some(doc),
        jurisdiction: Some(jurisdiction.clone()),
        ..Default::default()
    };

    let mut report: ComplianceReport = state.pipeline.run(&ctx, &text).await;
    if report.jurisdiction.is_empty() {
        report.jurisdiction = jurisdiction;
    }
    if report.document_type.is_empty() {
        report.document_type = doc.as_str().to_string();
    }
    if report.disclaimer.is_none() {
        report.disclaimer = Some(
            "This analysis is for informational purposes only and does not constitute legal advice"
                .to_string(),
        );
    }
    Ok(Json(report))
}

/// Benchmark a document against industry standards.
async fn benchmark_document(
    State(state): State<AppState>,
    body: Option<Json<BenchmarkRequest>>,
) -> Result<Json<BenchmarkReport>, ApiError> {
    const MSG: &str = "Document text is required for benchmarking";
    let body = body.map(|Json(b)| b).ok_or_else(|| ApiError::bad_request(MSG))?;
    let text = require(body.document_text, MSG)?;
    let industry = body.industry.unwrap_or_else(|| "general".to_string());

    let doc = resolve_document_type(body.document_type.as_deref(), &text);
    let ctx = PromptContext {
        document_type: Some(doc),
        industry: Some(industry.clone()),
        ..Default::default()
    };

    let mut report: BenchmarkReport = state.pipeline.run(&ctx, &text).await;
    if report.industry.is_empty() {
        report.industry = industry;
    }
    if report.document_type.is_empty() {
        report.document_type = doc.as_str().to_string();
    }
    if report.disclaimer.is_none() {
        report.disclaimer = Some(
            "Benchmarking analysis is for informational purposes and should be supplemented with professional legal review"
                .to_string(),
        );
    }
    Ok(Json(report))
}

/// Translate text via the model, or echo it in demo mode.
async fn translate_text(
    State(state): State<AppState>,
    body: Option<Json<TranslateRequest>>,
) -> Result<Json<TranslationResponse>, ApiError> {
    let body = body
        .map(|Json(b)| b)
        .ok_or_else(|| ApiError::bad_request("Text is required for translation"))?;
    let text = require(body.text, "Text is required for translation")?;
    let target = body.target_language.unwrap_or_else(|| "en".to_string());
    let source = body.source_language.unwrap_or_else(|| "en".to_string());
    let target_name = languages::language_name(&target).unwrap_or(&target);

    let response = state
        .pipeline
        .translate(&text, &source, &target, target_name)
        .await;
    Ok(Json(response))
}

/// Speech-synthesis instruction payload; audio itself is produced by the
/// browser's Web Speech API.
async fn audio_instructions(
    body: Option<Json<AudioRequest>>,
) -> Result<Json<Value>, ApiError> {
    let body = body
        .map(|Json(b)| b)
        .ok_or_else(|| ApiError::bad_request("Text is required for audio generation"))?;
    let text = require(body.text, "Text is required for audio generation")?;
    let language = body.language_code.unwrap_or_else(|| "en".to_string());

    let mut payload = languages::audio_payload(&text, &language);
    if let Some(map) = payload.as_object_mut() {
        map.insert("timestamp".to_string(), json!(now_iso8601()));
    }
    Ok(Json(payload))
}

// ============================================================================
// Upload handling
// ============================================================================

/// Read the uploaded file out of the multipart form and extract its text.
/// Size and mime checks happen before any extraction work.
async fn read_upload(state: &AppState, mut multipart: Multipart) -> Result<String, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Multipart error: {}", e)))?
    {
        let name = field.name().unwrap_or_default();
        if name != "file" && name != "document" {
            continue;
        }

        let filename = field.file_name().unwrap_or("document").to_string();
        let mime = field.content_type().map(|m| m.to_string());
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("Failed to read file: {}", e)))?;

        if data.len() > MAX_UPLOAD_BYTES {
            return Err(ApiError::bad_request("File too large. Maximum size is 10MB."));
        }

        let kind = match mime.as_deref() {
            Some(mime) if mime != "application/octet-stream" => DocumentKind::from_mime(mime)?,
            _ => DocumentKind::from_filename(&filename)?,
        };

        info!(
            "Received file: {} ({} bytes, {:?})",
            filename,
            data.len(),
            kind
        );

        let ocr = state.ocr.as_deref();
        return Ok(extract(&data, kind, ocr).await?);
    }

    Err(ApiError::bad_request("No document provided"))
}
