//! Integration tests for the LexLink REST API.
//!
//! All tests run without a Gemini credential, exercising handler logic and
//! the degraded-mode pipeline via tower::ServiceExt (no TCP listener needed).

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use lexlink::config::AppConfig;
use lexlink::routes::{create_router, AppState};

/// Router backed by offline configuration: no credential, no OCR endpoint.
fn app() -> Router {
    create_router(AppState::from_config(&AppConfig::offline()))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Hand-built multipart body with a single file field.
fn multipart_request(uri: &str, filename: &str, content_type: &str, data: &[u8]) -> Request<Body> {
    let boundary = "TEST_BOUNDARY";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap()
}

// ---------------------------------------------------------------------------
// Health & catalogue
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_returns_ok_status() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "OK");
}

#[tokio::test]
async fn languages_catalogue_reports_demo_capability() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/languages")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["total"], 26);
    assert_eq!(body["features"]["aiPowered"], false);
    assert_eq!(body["languages"]["en"]["name"], "English");
}

// ---------------------------------------------------------------------------
// /analyze
// ---------------------------------------------------------------------------

#[tokio::test]
async fn analyze_text_without_credential_degrades_gracefully() {
    let request = json_request(
        "/analyze",
        json!({
            "text": "This lease requires tenant to pay rent monthly to the landlord.",
            "analysisType": "legal",
        }),
    );

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["documentType"], "lease_agreement");
    let score = body["riskAssessment"]["overallRiskScore"].as_i64().unwrap();
    assert!((1..=10).contains(&score));
    assert_eq!(body["demoMode"], true);
    assert!(body["note"].as_str().is_some());
    assert!(body["documentLength"].as_u64().unwrap() > 0);
    assert!(body["whenToSeekHelp"].as_str().is_some());
}

#[tokio::test]
async fn analyze_without_text_or_file_is_rejected() {
    let response = app()
        .oneshot(json_request("/analyze", json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Text or document is required");
}

#[tokio::test]
async fn analyze_accepts_plain_text_upload() {
    let request = multipart_request(
        "/analyze",
        "contract.txt",
        "text/plain",
        b"Employment agreement between employer and employee, salary payable monthly.",
    );

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["documentType"], "employment_contract");
    assert_eq!(body["demoMode"], true);
}

#[tokio::test]
async fn oversize_upload_is_rejected_before_extraction() {
    // 15 MB of text, above the 10 MB cap.
    let big = vec![b'a'; 15 * 1024 * 1024];
    let request = multipart_request("/analyze", "huge.txt", "text/plain", &big);

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "File too large. Maximum size is 10MB.");
}

#[tokio::test]
async fn unsupported_mime_type_is_rejected_before_extraction() {
    let request = multipart_request("/analyze", "data.zip", "application/zip", b"PK\x03\x04");

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Unsupported file type");
}

#[tokio::test]
async fn malformed_pdf_upload_fails_with_extraction_error() {
    let request = multipart_request("/analyze", "broken.pdf", "application/pdf", b"not a pdf");

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Failed to extract text from PDF");
}

#[tokio::test]
async fn image_upload_without_ocr_backend_fails_cleanly() {
    let request = multipart_request("/analyze", "scan.png", "image/png", &[0x89, 0x50, 0x4e, 0x47]);

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Failed to extract text from image");
}

#[tokio::test]
async fn analyze_rejects_wrong_method() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/analyze")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// ---------------------------------------------------------------------------
// /explain
// ---------------------------------------------------------------------------

#[tokio::test]
async fn explain_returns_all_six_fields_as_strings() {
    let request = json_request(
        "/explain",
        json!({"text": "Tenant shall vacate within 30 days of notice."}),
    );

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    for field in [
        "plainEnglish",
        "implications",
        "risks",
        "benefits",
        "redFlags",
        "commonScenarios",
    ] {
        assert!(
            body[field].as_str().map(|s| !s.is_empty()).unwrap_or(false),
            "{field} missing or empty"
        );
    }
}

#[tokio::test]
async fn explain_requires_text() {
    let response = app()
        .oneshot(json_request("/explain", json!({"text": "  "})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "No text provided");
}

// ---------------------------------------------------------------------------
// /ask
// ---------------------------------------------------------------------------

#[tokio::test]
async fn ask_answers_in_demo_mode() {
    let request = json_request(
        "/ask",
        json!({
            "question": "Can I sublet the apartment?",
            "documentText": "The lease prohibits subletting without landlord consent.",
        }),
    );

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["answer"].as_str().is_some());
    assert!(!body["followUpQuestions"].as_array().unwrap().is_empty());
    assert_eq!(body["demoMode"], true);
}

#[tokio::test]
async fn ask_requires_both_fields() {
    let response = app()
        .oneshot(json_request("/ask", json!({"question": "What?"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Question and document text are required");
}

// ---------------------------------------------------------------------------
// /compliance and /benchmark
// ---------------------------------------------------------------------------

#[tokio::test]
async fn compliance_echoes_jurisdiction_and_document_type() {
    let request = json_request(
        "/compliance",
        json!({
            "documentText": "The employer shall pay the employee a salary.",
            "jurisdiction": "EU",
        }),
    );

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["jurisdiction"], "EU");
    assert_eq!(body["documentType"], "employment_contract");
    assert!(body["overallStatus"].as_str().is_some());
    assert!(body["disclaimer"].as_str().is_some());
    let score = body["complianceScore"].as_i64().unwrap();
    assert!((1..=10).contains(&score));
}

#[tokio::test]
async fn benchmark_reports_metrics_and_industry() {
    let request = json_request(
        "/benchmark",
        json!({
            "documentText": "This service agreement defines deliverables for the client.",
            "industry": "software",
        }),
    );

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["industry"], "software");
    assert_eq!(body["documentType"], "service_agreement");
    for metric in ["clarity", "completeness", "enforceability", "protection", "fairness"] {
        assert!(body["benchmarkMetrics"][metric].as_i64().is_some());
    }
}

#[tokio::test]
async fn benchmark_requires_document_text() {
    let response = app()
        .oneshot(json_request("/benchmark", json!({"industry": "software"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Document text is required for benchmarking");
}

// ---------------------------------------------------------------------------
// /translate and /audio
// ---------------------------------------------------------------------------

#[tokio::test]
async fn translate_without_credential_echoes_original() {
    let request = json_request(
        "/translate",
        json!({"text": "You must pay rent monthly.", "targetLanguage": "hi"}),
    );

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["originalText"], "You must pay rent monthly.");
    assert_eq!(body["translatedText"], "You must pay rent monthly.");
    assert_eq!(body["targetLanguage"], "hi");
    assert_eq!(body["service"], "mock");
    assert_eq!(body["demoMode"], true);
}

#[tokio::test]
async fn audio_returns_web_speech_instructions() {
    let request = json_request(
        "/audio",
        json!({"text": "Your lease has three risks.", "languageCode": "hi"}),
    );

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["audioContent"].is_null());
    assert_eq!(body["service"], "web-speech-api");
    assert_eq!(body["languageCode"], "hi-IN");
    assert!(body["timestamp"].as_str().is_some());
}

#[tokio::test]
async fn audio_requires_text() {
    let response = app()
        .oneshot(json_request("/audio", json!({"languageCode": "en"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Text is required for audio generation");
}
