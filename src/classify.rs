//! Keyword-heuristic document classification.
//!
//! Classification only steers prompt wording and fallback selection, so a
//! misclassification is harmless. Each candidate type carries a fixed keyword
//! set; the type with the most case-insensitive substring hits wins, ties
//! broken by declaration order.

use serde::{Deserialize, Serialize};

/// Heuristically derived document category. Recomputed per request,
/// never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    LeaseAgreement,
    EmploymentContract,
    Nda,
    ServiceAgreement,
    PurchaseAgreement,
    LoanAgreement,
    PowerOfAttorney,
    WillTestament,
    PrivacyPolicy,
    GeneralLegal,
}

impl DocumentType {
    /// Candidate order doubles as the tie-break order.
    pub const ALL: [DocumentType; 10] = [
        DocumentType::LeaseAgreement,
        DocumentType::EmploymentContract,
        DocumentType::Nda,
        DocumentType::ServiceAgreement,
        DocumentType::PurchaseAgreement,
        DocumentType::LoanAgreement,
        DocumentType::PowerOfAttorney,
        DocumentType::WillTestament,
        DocumentType::PrivacyPolicy,
        DocumentType::GeneralLegal,
    ];

    /// Wire identifier, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LeaseAgreement => "lease_agreement",
            Self::EmploymentContract => "employment_contract",
            Self::Nda => "nda",
            Self::ServiceAgreement => "service_agreement",
            Self::PurchaseAgreement => "purchase_agreement",
            Self::LoanAgreement => "loan_agreement",
            Self::PowerOfAttorney => "power_of_attorney",
            Self::WillTestament => "will_testament",
            Self::PrivacyPolicy => "privacy_policy",
            Self::GeneralLegal => "general_legal",
        }
    }

    /// Human-readable name used inside prompt text.
    pub fn label(&self) -> &'static str {
        match self {
            Self::LeaseAgreement => "lease agreement",
            Self::EmploymentContract => "employment contract",
            Self::Nda => "non-disclosure agreement",
            Self::ServiceAgreement => "service agreement",
            Self::PurchaseAgreement => "purchase agreement",
            Self::LoanAgreement => "loan agreement",
            Self::PowerOfAttorney => "power of attorney",
            Self::WillTestament => "will and testament",
            Self::PrivacyPolicy => "privacy policy",
            Self::GeneralLegal => "legal document",
        }
    }

    /// Accepts either the wire identifier or a free-form hint from a request
    /// body (e.g. `documentType: "lease"`).
    pub fn parse_hint(hint: &str) -> Option<Self> {
        let normalized = hint.trim().to_lowercase().replace([' ', '-'], "_");
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == normalized)
    }

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::LeaseAgreement => &["lease", "rental", "tenant", "landlord", "rent"],
            Self::EmploymentContract => &["employment", "employee", "employer", "salary"],
            Self::Nda => &["nda", "non-disclosure", "confidential", "proprietary information"],
            Self::ServiceAgreement => &["service", "provider", "client", "deliverables"],
            Self::PurchaseAgreement => &["purchase", "sale", "buyer", "seller"],
            Self::LoanAgreement => &["loan", "credit", "borrower", "lender", "interest rate"],
            Self::PowerOfAttorney => &["power of attorney", "attorney-in-fact", "principal"],
            Self::WillTestament => &["last will", "testament", "executor", "beneficiary", "estate"],
            Self::PrivacyPolicy => &["privacy policy", "personal data", "data collection", "cookies"],
            // Catch-all: never scored, only returned when nothing matches.
            Self::GeneralLegal => &[],
        }
    }
}

/// Score the text against every candidate type and pick the best match.
/// Pure and deterministic; total over all inputs.
pub fn classify(text: &str) -> DocumentType {
    let lowered = text.to_lowercase();

    let mut best = DocumentType::GeneralLegal;
    let mut best_score = 0usize;

    for candidate in DocumentType::ALL {
        let score = candidate
            .keywords()
            .iter()
            .filter(|kw| lowered.contains(**kw))
            .count();
        // Strict comparison keeps the first-declared winner on ties.
        if score > best_score {
            best = candidate;
            best_score = score;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lease_keywords_classify_as_lease() {
        let doc = "This LEASE requires the tenant to pay rent monthly to the landlord.";
        assert_eq!(classify(doc), DocumentType::LeaseAgreement);
    }

    #[test]
    fn single_category_keyword_picks_that_category() {
        assert_eq!(classify("the borrower agrees"), DocumentType::LoanAgreement);
        assert_eq!(
            classify("signed power of attorney form"),
            DocumentType::PowerOfAttorney
        );
        assert_eq!(
            classify("our privacy policy covers cookies"),
            DocumentType::PrivacyPolicy
        );
    }

    #[test]
    fn no_keywords_falls_back_to_general_legal() {
        assert_eq!(classify("completely unrelated prose"), DocumentType::GeneralLegal);
        assert_eq!(classify(""), DocumentType::GeneralLegal);
    }

    #[test]
    fn classification_is_deterministic() {
        let doc = "employment agreement between employer and employee covering salary";
        let first = classify(doc);
        for _ in 0..10 {
            assert_eq!(classify(doc), first);
        }
    }

    #[test]
    fn tie_breaks_by_declaration_order() {
        // One keyword each from lease and purchase; lease is declared first.
        let doc = "the tenant signed before the buyer";
        assert_eq!(classify(doc), DocumentType::LeaseAgreement);
    }

    #[test]
    fn hint_parsing_accepts_wire_names_and_spaces() {
        assert_eq!(
            DocumentType::parse_hint("lease_agreement"),
            Some(DocumentType::LeaseAgreement)
        );
        assert_eq!(
            DocumentType::parse_hint("Power of Attorney"),
            Some(DocumentType::PowerOfAttorney)
        );
        assert_eq!(DocumentType::parse_hint("unknown kind"), None);
    }
}
