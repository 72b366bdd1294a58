//! Prompt construction for the generative model.
//!
//! Each task has a fixed template with the required JSON schema embedded
//! literally; the only varying parts are the document text and the steering
//! context (document type, question, jurisdiction, industry). Document text
//! is hard-truncated to respect the upstream context limit.

use crate::classify::DocumentType;
use serde::{Deserialize, Serialize};

/// Maximum document text interpolated into any prompt.
pub const MAX_PROMPT_TEXT_CHARS: usize = 30_000;

/// The analysis task being requested. Selects the template and the
/// fallback table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptTask {
    Analyze,
    ExplainClause,
    Qa,
    ComplianceCheck,
    Benchmark,
}

impl PromptTask {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Analyze => "analyze",
            Self::ExplainClause => "explain_clause",
            Self::Qa => "qa",
            Self::ComplianceCheck => "compliance_check",
            Self::Benchmark => "benchmark",
        }
    }
}

/// Task-specific steering inputs beyond the document text itself.
#[derive(Debug, Clone, Default)]
pub struct PromptContext {
    pub document_type: Option<DocumentType>,
    pub question: Option<String>,
    pub jurisdiction: Option<String>,
    pub industry: Option<String>,
}

impl PromptContext {
    pub fn for_document(document_type: DocumentType) -> Self {
        Self {
            document_type: Some(document_type),
            ..Self::default()
        }
    }

    fn doc_label(&self) -> &'static str {
        self.document_type
            .unwrap_or(DocumentType::GeneralLegal)
            .label()
    }

    fn doc_name(&self) -> &'static str {
        self.document_type
            .unwrap_or(DocumentType::GeneralLegal)
            .as_str()
    }
}

/// Compose the instruction string for a task. Truncation is a hard cutoff,
/// applied identically regardless of task.
pub fn build_prompt(task: PromptTask, ctx: &PromptContext, text: &str) -> String {
    let text = truncate_for_context(text, MAX_PROMPT_TEXT_CHARS);

    match task {
        PromptTask::Analyze => format!(
            r#"As an expert legal analyst, analyze this {doc_label} document and provide a comprehensive assessment in JSON format.

Document Type: {doc_name}
Document Content: {text}

Provide your analysis in this exact JSON structure:
{{
  "documentType": "{doc_name}",
  "summary": "A clear 2-3 sentence summary in plain English",
  "keyTerms": [
    {{
      "term": "Legal term or concept",
      "explanation": "Simple explanation in everyday language",
      "importance": "Why this matters to the user"
    }}
  ],
  "yourRights": [
    "List of rights the user has"
  ],
  "yourObligations": [
    "List of things the user must do"
  ],
  "riskAssessment": {{
    "overallRiskScore": 1-10,
    "riskFactors": [
      {{
        "risk": "Description of specific risk",
        "severity": "low|medium|high",
        "explanation": "Why this is risky and potential consequences"
      }}
    ]
  }},
  "redFlags": [
    "Specific concerning clauses or terms that need attention"
  ],
  "recommendations": [
    {{
      "action": "Specific action to take",
      "priority": "high|medium|low",
      "reason": "Why this action is recommended"
    }}
  ],
  "nextSteps": [
    "Immediate actions the user should consider"
  ],
  "whenToSeekHelp": "Specific situations when legal consultation is recommended"
}}

Focus on practical implications and use language a non-lawyer can understand. Be specific about risks and actionable in recommendations."#,
            doc_label = ctx.doc_label(),
            doc_name = ctx.doc_name(),
            text = text,
        ),

        PromptTask::ExplainClause => format!(
            r#"As a legal expert, explain this specific clause in simple terms:

"{text}"

Provide a JSON response with:
{{
  "plainEnglish": "What this clause means in everyday language",
  "implications": "What this means for the user specifically",
  "risks": "Potential risks or downsides",
  "benefits": "Potential benefits or protections",
  "redFlags": "Any concerning aspects",
  "commonScenarios": "Real-world examples of when this might matter"
}}"#,
        ),

        PromptTask::Qa => format!(
            r#"Based on this legal document, answer the user's question in simple, practical terms:

Document: {text}

Question: {question}

Provide a JSON response with:
{{
  "answer": "Direct answer to the question",
  "explanation": "Detailed explanation with context",
  "relevantClauses": "Which parts of the document relate to this question",
  "additionalConsiderations": "Other things the user should know",
  "followUpQuestions": ["Suggested related questions they might want to ask"]
}}"#,
            question = ctx.question.as_deref().unwrap_or_default(),
        ),

        PromptTask::ComplianceCheck => format!(
            r#"As a legal compliance expert, analyze this {doc_label} document for compliance with {jurisdiction} laws and regulations.

Document Type: {doc_name}
Jurisdiction: {jurisdiction}
Document Content: {text}

Provide a comprehensive compliance analysis in JSON format:
{{
  "complianceScore": 1-10,
  "overallStatus": "compliant|needs-review|non-compliant",
  "jurisdiction": "{jurisdiction}",
  "documentType": "{doc_name}",
  "complianceIssues": [
    {{
      "issue": "Description of specific compliance issue",
      "severity": "low|medium|high|critical",
      "requirement": "Specific legal requirement not met",
      "recommendation": "How to fix this issue",
      "consequence": "Potential legal consequences"
    }}
  ],
  "strengths": [
    "Areas where the document meets compliance requirements"
  ],
  "requiredActions": [
    {{
      "action": "Specific action required",
      "priority": "immediate|high|medium|low",
      "deadline": "When this should be completed",
      "legalBasis": "The law or regulation requiring this"
    }}
  ],
  "recommendations": [
    "General recommendations for improving compliance"
  ],
  "nextSteps": [
    "Immediate steps to take"
  ]
}}"#,
            doc_label = ctx.doc_label(),
            doc_name = ctx.doc_name(),
            jurisdiction = ctx.jurisdiction.as_deref().unwrap_or("US"),
        ),

        PromptTask::Benchmark => format!(
            r#"As a legal benchmarking expert, analyze this {doc_label} document against industry standards and best practices for the {industry} industry.

Document Type: {doc_name}
Industry: {industry}
Document Content: {text}

Provide a comprehensive benchmarking analysis in JSON format:
{{
  "overallScore": 1-10,
  "industryRating": "poor|below-average|average|above-average|excellent",
  "documentType": "{doc_name}",
  "industry": "{industry}",
  "strengths": [
    {{
      "area": "Specific strength area",
      "description": "What this document does well",
      "industryComparison": "How this compares to industry standard"
    }}
  ],
  "weaknesses": [
    {{
      "area": "Area needing improvement",
      "description": "What could be better",
      "industryStandard": "What the industry standard practice is",
      "improvement": "How to improve this area"
    }}
  ],
  "benchmarkMetrics": {{
    "clarity": 1-10,
    "completeness": 1-10,
    "enforceability": 1-10,
    "protection": 1-10,
    "fairness": 1-10
  }},
  "industryComparison": {{
    "betterThan": "X% of similar documents",
    "commonPractices": ["Industry standard practices this document follows"],
    "missingElements": ["Standard elements not found in this document"]
  }},
  "recommendations": [
    {{
      "priority": "high|medium|low",
      "improvement": "Specific improvement recommendation",
      "justification": "Why this improvement is recommended",
      "industryTrend": "How this relates to industry trends"
    }}
  ],
  "modernization": [
    "Suggestions for updating document to current standards"
  ]
}}"#,
            doc_label = ctx.doc_label(),
            doc_name = ctx.doc_name(),
            industry = ctx.industry.as_deref().unwrap_or("general"),
        ),
    }
}

/// Plain-text translation prompt; the reply is used verbatim and never goes
/// through the JSON normalizer.
pub fn build_translation_prompt(text: &str, target_language: &str) -> String {
    format!(
        "Translate the following text to {target_language}. Only return the translated text, no explanations:\n\nText to translate: {}\n\nTranslated text:",
        truncate_for_context(text, MAX_PROMPT_TEXT_CHARS),
    )
}

/// Hard cutoff at a char boundary, no summarization.
fn truncate_for_context(text: &str, max_chars: usize) -> &str {
    if text.len() <= max_chars {
        text
    } else {
        let mut end = max_chars;
        while !text.is_char_boundary(end) && end > 0 {
            end -= 1;
        }
        &text[..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_prompt_embeds_schema_and_type() {
        let ctx = PromptContext::for_document(DocumentType::LeaseAgreement);
        let prompt = build_prompt(PromptTask::Analyze, &ctx, "tenant pays rent");
        assert!(prompt.contains("\"documentType\": \"lease_agreement\""));
        assert!(prompt.contains("\"severity\": \"low|medium|high\""));
        assert!(prompt.contains("tenant pays rent"));
        assert!(prompt.contains("overallRiskScore"));
    }

    #[test]
    fn qa_prompt_carries_question_and_document() {
        let ctx = PromptContext {
            question: Some("Can I sublet?".to_string()),
            ..Default::default()
        };
        let prompt = build_prompt(PromptTask::Qa, &ctx, "the lease text");
        assert!(prompt.contains("Question: Can I sublet?"));
        assert!(prompt.contains("Document: the lease text"));
        assert!(prompt.contains("followUpQuestions"));
    }

    #[test]
    fn compliance_defaults_jurisdiction_to_us() {
        let prompt = build_prompt(
            PromptTask::ComplianceCheck,
            &PromptContext::default(),
            "doc",
        );
        assert!(prompt.contains("Jurisdiction: US"));
        assert!(prompt.contains("compliant|needs-review|non-compliant"));
    }

    #[test]
    fn text_is_truncated_at_thirty_thousand_chars() {
        let long = "a".repeat(MAX_PROMPT_TEXT_CHARS + 5_000);
        let prompt = build_prompt(
            PromptTask::ExplainClause,
            &PromptContext::default(),
            &long,
        );
        // Template overhead is well under the 5,000 chars that were cut.
        assert!(prompt.len() < long.len());
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // Multi-byte char straddling the cutoff must not split.
        let mut text = "a".repeat(MAX_PROMPT_TEXT_CHARS - 1);
        text.push('é');
        text.push_str("suffix");
        let cut = truncate_for_context(&text, MAX_PROMPT_TEXT_CHARS);
        assert!(cut.len() <= MAX_PROMPT_TEXT_CHARS);
        assert!(cut.ends_with('a'));
    }
}
