//! Pipeline orchestration: classify, prompt, invoke, normalize, and degrade
//! to the fallback table when anything upstream goes wrong.
//!
//! One generic path serves every task. Each typed result implements
//! [`TaskOutput`], which supplies the task selector and the fallback
//! constructor; handlers just pick the output type. No stage retries:
//! each request either proceeds or falls back exactly once.

use crate::classify::{classify, DocumentType};
use crate::fallback;
use crate::gemini::GeminiClient;
use crate::normalize::normalize;
use crate::prompt::{build_prompt, build_translation_prompt, PromptContext, PromptTask};
use crate::schema::{
    now_iso8601, AnalysisReport, BenchmarkReport, ClauseExplanation, ComplianceReport, QaAnswer,
    TranslationResponse,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

const NOTE_NO_CREDENTIAL: &str =
    "Demo mode: configure GEMINI_API_KEY for AI-generated results";
const NOTE_UPSTREAM: &str = "AI service unavailable - returning standard guidance";
const NOTE_FORMAT: &str = "AI response could not be interpreted - returning standard guidance";

/// A typed task result the pipeline can produce.
pub trait TaskOutput: DeserializeOwned + Serialize + Send {
    const TASK: PromptTask;

    /// Deterministic canned result for this task and document type.
    fn fallback(doc: DocumentType) -> Self;

    /// Flag the result as not AI-generated.
    fn mark_degraded(&mut self, note: &str);

    /// Attach the response timestamp.
    fn stamp(&mut self, timestamp: String);
}

macro_rules! impl_task_output {
    ($ty:ty, $task:expr, $fallback:expr) => {
        impl TaskOutput for $ty {
            const TASK: PromptTask = $task;

            fn fallback(doc: DocumentType) -> Self {
                let f: fn(DocumentType) -> Self = $fallback;
                f(doc)
            }

            fn mark_degraded(&mut self, note: &str) {
                self.note = Some(note.to_string());
                self.demo_mode = Some(true);
            }

            fn stamp(&mut self, timestamp: String) {
                self.timestamp = Some(timestamp);
            }
        }
    };
}

impl_task_output!(AnalysisReport, PromptTask::Analyze, fallback::analyze);
impl_task_output!(ClauseExplanation, PromptTask::ExplainClause, |_| {
    fallback::explain_clause()
});
impl_task_output!(QaAnswer, PromptTask::Qa, |_| fallback::qa());
impl_task_output!(
    ComplianceReport,
    PromptTask::ComplianceCheck,
    fallback::compliance
);
impl_task_output!(BenchmarkReport, PromptTask::Benchmark, fallback::benchmark);

/// Resolve the document type from an explicit request hint, falling back to
/// the keyword classifier.
pub fn resolve_document_type(hint: Option<&str>, text: &str) -> DocumentType {
    hint.and_then(DocumentType::parse_hint)
        .unwrap_or_else(|| classify(text))
}

/// Stateless per-request pipeline. Holds only the model client; all document
/// data is request-scoped and discarded at response time.
#[derive(Clone)]
pub struct Pipeline {
    gemini: GeminiClient,
}

impl Pipeline {
    pub fn new(gemini: GeminiClient) -> Self {
        Self { gemini }
    }

    pub fn ai_available(&self) -> bool {
        self.gemini.available()
    }

    /// Run the full prompt → invoke → normalize → decode path for a task.
    /// Never fails: upstream and format errors degrade to the fallback table.
    pub async fn run<T: TaskOutput>(&self, ctx: &PromptContext, text: &str) -> T {
        let doc = ctx.document_type.unwrap_or(DocumentType::GeneralLegal);
        let task = T::TASK;

        let mut result = match self.attempt::<T>(task, ctx, text).await {
            Ok(result) => result,
            Err(note) => {
                info!("task {} degraded to fallback ({})", task.as_str(), note);
                let mut canned = T::fallback(doc);
                canned.mark_degraded(note);
                canned
            }
        };

        result.stamp(now_iso8601());
        result
    }

    async fn attempt<T: TaskOutput>(
        &self,
        task: PromptTask,
        ctx: &PromptContext,
        text: &str,
    ) -> Result<T, &'static str> {
        if !self.gemini.available() {
            return Err(NOTE_NO_CREDENTIAL);
        }

        let prompt = build_prompt(task, ctx, text);
        debug!(
            "task {}: invoking model with {} char prompt",
            task.as_str(),
            prompt.len()
        );

        let raw = self.gemini.generate(&prompt).await.map_err(|e| {
            warn!("task {}: upstream failure ({}): {}", task.as_str(), e.reason(), e);
            NOTE_UPSTREAM
        })?;

        let value = normalize(&raw).map_err(|e| {
            warn!(
                "task {}: reply not parseable as JSON ({} chars of working text)",
                task.as_str(),
                e.raw.len()
            );
            NOTE_FORMAT
        })?;

        let result: T = serde_json::from_value(value).map_err(|e| {
            warn!("task {}: reply shape mismatch: {}", task.as_str(), e);
            NOTE_FORMAT
        })?;

        info!("task {}: model reply accepted", task.as_str());
        Ok(result)
    }

    /// Translate text through the model, or echo the original in demo mode.
    /// The reply is plain text and never goes through the JSON normalizer.
    pub async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
        target_name: &str,
    ) -> TranslationResponse {
        let mut response = TranslationResponse {
            original_text: text.to_string(),
            translated_text: text.to_string(),
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
            service: "mock".to_string(),
            ..Default::default()
        };

        if !self.gemini.available() {
            response.note = Some(NOTE_NO_CREDENTIAL.to_string());
            response.demo_mode = Some(true);
        } else {
            let prompt = build_translation_prompt(text, target_name);
            match self.gemini.generate(&prompt).await {
                Ok(reply) => {
                    response.translated_text = reply.trim().to_string();
                    response.service = "gemini-ai".to_string();
                }
                Err(e) => {
                    warn!("translation failed ({}): {}", e.reason(), e);
                    response.note =
                        Some("Translation unavailable - showing original text".to_string());
                    response.demo_mode = Some(true);
                }
            }
        }

        response.timestamp = Some(now_iso8601());
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use reqwest::Client;

    fn offline_pipeline() -> Pipeline {
        Pipeline::new(GeminiClient::new(Client::new(), &AppConfig::offline()))
    }

    #[tokio::test]
    async fn offline_analyze_degrades_with_markers() {
        let pipeline = offline_pipeline();
        let ctx = PromptContext::for_document(DocumentType::LeaseAgreement);
        let report: AnalysisReport = pipeline.run(&ctx, "lease text").await;

        assert_eq!(report.document_type, "lease_agreement");
        assert_eq!(report.demo_mode, Some(true));
        assert!(report.note.is_some());
        assert!(report.timestamp.is_some());
        assert!((1..=10).contains(&report.risk_assessment.overall_risk_score));
    }

    #[tokio::test]
    async fn offline_explain_is_shape_complete() {
        let pipeline = offline_pipeline();
        let out: ClauseExplanation = pipeline.run(&PromptContext::default(), "clause").await;
        assert!(!out.plain_english.is_empty());
        assert!(!out.common_scenarios.is_empty());
        assert_eq!(out.demo_mode, Some(true));
    }

    #[tokio::test]
    async fn offline_translate_echoes_original() {
        let pipeline = offline_pipeline();
        let out = pipeline.translate("hello", "en", "hi", "Hindi").await;
        assert_eq!(out.translated_text, "hello");
        assert_eq!(out.service, "mock");
        assert_eq!(out.demo_mode, Some(true));
    }

    #[test]
    fn explicit_hint_beats_the_classifier() {
        let doc = resolve_document_type(Some("nda"), "this lease mentions tenant and rent");
        assert_eq!(doc, DocumentType::Nda);
    }

    #[test]
    fn missing_hint_classifies_the_text() {
        let doc = resolve_document_type(None, "the borrower and lender agree on interest rate");
        assert_eq!(doc, DocumentType::LoanAgreement);
    }
}
