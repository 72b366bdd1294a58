//! Typed per-task result objects returned to callers.
//!
//! Every field is defaulted so a model reply with missing fields still
//! decodes; unknown upstream fields are ignored rather than merged. Degraded
//! responses carry `note` and `demoMode` markers so the client can tell the
//! user the data is not AI-generated.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Generate an ISO8601 UTC timestamp for response envelopes.
pub fn now_iso8601() -> String {
    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let days = (secs / 86400) as i64;
    let (year, month, day) = civil_from_days(days);

    let time_of_day = secs % 86400;
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        year,
        month,
        day,
        time_of_day / 3600,
        (time_of_day % 3600) / 60,
        time_of_day % 60
    )
}

/// Days-since-epoch to (year, month, day), Gregorian.
fn civil_from_days(z: i64) -> (i64, u32, u32) {
    let z = z + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let m = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    (if m <= 2 { y + 1 } else { y }, m, d)
}

// ============================================================================
// analyze
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisReport {
    pub document_type: String,
    pub summary: String,
    pub key_terms: Vec<KeyTerm>,
    pub your_rights: Vec<String>,
    pub your_obligations: Vec<String>,
    pub risk_assessment: RiskAssessment,
    pub red_flags: Vec<String>,
    pub recommendations: Vec<Recommendation>,
    pub next_steps: Vec<String>,
    pub when_to_seek_help: String,

    // Response envelope, filled by the handler.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_mode: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyTerm {
    #[serde(default)]
    pub term: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub importance: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    #[serde(default)]
    pub overall_risk_score: u8,
    #[serde(default)]
    pub risk_factors: Vec<RiskFactor>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactor {
    #[serde(default)]
    pub risk: String,
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub reason: String,
}

// ============================================================================
// explain_clause
// ============================================================================

/// Explanation of a single clause. `redFlags` is a prose field here, not a
/// list; the shape follows the prompt schema exactly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClauseExplanation {
    pub plain_english: String,
    pub implications: String,
    pub risks: String,
    pub benefits: String,
    pub red_flags: String,
    pub common_scenarios: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_mode: Option<bool>,
}

// ============================================================================
// qa
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QaAnswer {
    pub answer: String,
    pub explanation: String,
    pub relevant_clauses: String,
    pub additional_considerations: String,
    pub follow_up_questions: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_mode: Option<bool>,
}

// ============================================================================
// compliance_check
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComplianceReport {
    pub compliance_score: u8,
    pub overall_status: String,
    pub jurisdiction: String,
    pub document_type: String,
    pub compliance_issues: Vec<ComplianceIssue>,
    pub strengths: Vec<String>,
    pub required_actions: Vec<RequiredAction>,
    pub recommendations: Vec<String>,
    pub next_steps: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disclaimer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_mode: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceIssue {
    #[serde(default)]
    pub issue: String,
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub requirement: String,
    #[serde(default)]
    pub recommendation: String,
    #[serde(default)]
    pub consequence: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequiredAction {
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub deadline: String,
    #[serde(default)]
    pub legal_basis: String,
}

// ============================================================================
// benchmark
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BenchmarkReport {
    pub overall_score: u8,
    pub industry_rating: String,
    pub document_type: String,
    pub industry: String,
    pub strengths: Vec<BenchmarkStrength>,
    pub weaknesses: Vec<BenchmarkWeakness>,
    pub benchmark_metrics: BenchmarkMetrics,
    pub industry_comparison: IndustryComparison,
    pub recommendations: Vec<BenchmarkRecommendation>,
    pub modernization: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disclaimer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_mode: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkStrength {
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub industry_comparison: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkWeakness {
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub industry_standard: String,
    #[serde(default)]
    pub improvement: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    #[serde(default)]
    pub clarity: u8,
    #[serde(default)]
    pub completeness: u8,
    #[serde(default)]
    pub enforceability: u8,
    #[serde(default)]
    pub protection: u8,
    #[serde(default)]
    pub fairness: u8,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkRecommendation {
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub improvement: String,
    #[serde(default)]
    pub justification: String,
    #[serde(default)]
    pub industry_trend: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryComparison {
    #[serde(default)]
    pub better_than: String,
    #[serde(default)]
    pub common_practices: Vec<String>,
    #[serde(default)]
    pub missing_elements: Vec<String>,
}

// ============================================================================
// translate
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationResponse {
    pub original_text: String,
    pub translated_text: String,
    pub source_language: String,
    pub target_language: String,
    /// Which path produced the translation: `gemini-ai` or `mock`.
    pub service: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_mode: Option<bool>,
}
