//! Deterministic canned results served when the model cannot be reached or
//! its reply cannot be parsed.
//!
//! Every entry satisfies the full shape contract for its task, so callers get
//! a well-formed body even with zero connectivity and no credential. The
//! `analyze` task has one entry per document type; the other tasks share a
//! single generic entry each. Same inputs always produce the same output.

use crate::classify::DocumentType;
use crate::schema::{
    AnalysisReport, BenchmarkMetrics, BenchmarkRecommendation, BenchmarkReport, BenchmarkStrength,
    BenchmarkWeakness, ClauseExplanation, ComplianceIssue, ComplianceReport, IndustryComparison,
    KeyTerm, QaAnswer, Recommendation, RequiredAction, RiskAssessment, RiskFactor,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn key_term(term: &str, explanation: &str, importance: &str) -> KeyTerm {
    KeyTerm {
        term: term.to_string(),
        explanation: explanation.to_string(),
        importance: importance.to_string(),
    }
}

fn risk(risk: &str, severity: &str, explanation: &str) -> RiskFactor {
    RiskFactor {
        risk: risk.to_string(),
        severity: severity.to_string(),
        explanation: explanation.to_string(),
    }
}

fn recommend(action: &str, priority: &str, reason: &str) -> Recommendation {
    Recommendation {
        action: action.to_string(),
        priority: priority.to_string(),
        reason: reason.to_string(),
    }
}

/// Canned `analyze` result for a document type.
pub fn analyze(doc: DocumentType) -> AnalysisReport {
    let mut report = match doc {
        DocumentType::LeaseAgreement => AnalysisReport {
            summary: "This is a residential lease agreement with standard rental terms. It sets monthly rent, notice periods, and policies around pets and late payments that tenants should review carefully before signing.".to_string(),
            key_terms: vec![key_term(
                "Late Fees",
                "Extra charges applied when rent is paid after the due date",
                "These can add up quickly and affect your credit if unpaid",
            )],
            your_rights: strings(&[
                "Right to peaceful enjoyment of the property",
                "Right to have major repairs handled by the landlord",
                "Right to get your security deposit back if you meet lease terms",
            ]),
            your_obligations: strings(&[
                "Pay rent on time each month",
                "Provide the required notice before moving out",
                "Keep the property in reasonable condition",
            ]),
            risk_assessment: RiskAssessment {
                overall_risk_score: 6,
                risk_factors: vec![
                    risk(
                        "Lease termination for violations",
                        "high",
                        "Landlords can often terminate with short notice for non-payment or violations, which could leave you scrambling for housing",
                    ),
                    risk(
                        "Late payment fees",
                        "medium",
                        "Fees that start shortly after the due date can add up to significant costs over time",
                    ),
                ],
            },
            red_flags: strings(&[
                "Short notice periods for termination",
                "No grace period for late payments",
            ]),
            recommendations: vec![
                recommend(
                    "Set up automatic rent payments",
                    "high",
                    "Late fees start quickly and the lease can be terminated for non-payment",
                ),
                recommend(
                    "Document existing damages before moving in",
                    "high",
                    "Protect your security deposit by having proof of pre-existing issues",
                ),
            ],
            next_steps: strings(&[
                "Read the lease carefully before signing",
                "Take photos of the property condition",
                "Ask about any unclear terms before signing",
            ]),
            when_to_seek_help: "Consider consulting a tenant's rights lawyer if you're unclear about any terms, if the landlord tries to change terms after signing, or if you face eviction proceedings.".to_string(),
            ..Default::default()
        },

        DocumentType::EmploymentContract => AnalysisReport {
            summary: "This is an employment contract defining compensation, duties, and conditions of termination. Pay particular attention to restrictive covenants and how either side can end the relationship.".to_string(),
            key_terms: vec![key_term(
                "At-Will Employment",
                "Either party can end the employment at any time, for almost any reason",
                "Affects your job security and what notice you are owed",
            )],
            your_rights: strings(&[
                "Right to the agreed compensation and benefits",
                "Right to any notice period stated in the contract",
                "Right to workplace protections under employment law",
            ]),
            your_obligations: strings(&[
                "Perform the duties described in the contract",
                "Comply with confidentiality and company policies",
                "Honor any notice requirements when resigning",
            ]),
            risk_assessment: RiskAssessment {
                overall_risk_score: 5,
                risk_factors: vec![
                    risk(
                        "Non-compete or non-solicitation clauses",
                        "high",
                        "Restrictive covenants can limit where you work next; enforceability varies by jurisdiction",
                    ),
                    risk(
                        "Broad termination-for-cause definitions",
                        "medium",
                        "Vague cause definitions give the employer wide discretion to end the contract without severance",
                    ),
                ],
            },
            red_flags: strings(&[
                "Overly broad restrictive covenants",
                "Unilateral changes to compensation or duties",
            ]),
            recommendations: vec![
                recommend(
                    "Clarify the scope of any non-compete clause",
                    "high",
                    "Narrow restrictions protect your future employment options",
                ),
                recommend(
                    "Get all compensation promises in writing",
                    "medium",
                    "Verbal promises about bonuses or raises are hard to enforce",
                ),
            ],
            next_steps: strings(&[
                "Compare terms against your offer letter",
                "List questions about unclear clauses",
                "Confirm start date, salary, and benefits in writing",
            ]),
            when_to_seek_help: "Consult an employment lawyer before signing if the contract contains non-compete clauses, deferred compensation, or equity arrangements you do not fully understand.".to_string(),
            ..Default::default()
        },

        DocumentType::Nda => AnalysisReport {
            summary: "This is a non-disclosure agreement restricting how confidential information may be used and shared. The definition of confidential information and the duration of the obligations are the terms that matter most.".to_string(),
            key_terms: vec![key_term(
                "Confidential Information",
                "The categories of information you must keep secret",
                "A definition that is too broad can cover things you already knew or that are public",
            )],
            your_rights: strings(&[
                "Right to use information that is publicly available",
                "Right to disclosures required by law",
                "Right to information you developed independently",
            ]),
            your_obligations: strings(&[
                "Keep covered information confidential",
                "Use the information only for the stated purpose",
                "Return or destroy materials when the agreement ends",
            ]),
            risk_assessment: RiskAssessment {
                overall_risk_score: 5,
                risk_factors: vec![
                    risk(
                        "Overbroad definition of confidential information",
                        "high",
                        "If everything counts as confidential, ordinary conversations and future work can create liability",
                    ),
                    risk(
                        "Indefinite confidentiality term",
                        "medium",
                        "Obligations with no end date are burdensome and sometimes unenforceable",
                    ),
                ],
            },
            red_flags: strings(&[
                "No time limit on confidentiality obligations",
                "One-way obligations when both sides share information",
            ]),
            recommendations: vec![
                recommend(
                    "Ask for a defined confidentiality period",
                    "high",
                    "A bounded term (often 2-5 years) limits long-tail liability",
                ),
                recommend(
                    "Confirm standard exclusions are present",
                    "medium",
                    "Public, already-known, and independently developed information should be carved out",
                ),
            ],
            next_steps: strings(&[
                "Identify exactly what information is covered",
                "Check the duration of the obligations",
                "Verify the exclusions section exists",
            ]),
            when_to_seek_help: "Seek legal advice if the NDA has no expiration, covers your general skills and knowledge, or includes non-compete language disguised as confidentiality.".to_string(),
            ..Default::default()
        },

        DocumentType::ServiceAgreement => AnalysisReport {
            summary: "This is a service agreement describing deliverables, payment terms, and responsibilities between a provider and a client. Scope definitions and termination provisions drive most disputes under agreements like this.".to_string(),
            key_terms: vec![key_term(
                "Scope of Work",
                "Exactly what services are and are not included",
                "Vague scope language leads to disagreements about what was promised",
            )],
            your_rights: strings(&[
                "Right to the services or payment described",
                "Right to remedies if the other side fails to perform",
                "Right to terminate under the stated conditions",
            ]),
            your_obligations: strings(&[
                "Meet the payment or delivery schedule",
                "Provide required cooperation and materials",
                "Follow the change-request process for new work",
            ]),
            risk_assessment: RiskAssessment {
                overall_risk_score: 5,
                risk_factors: vec![
                    risk(
                        "Ambiguous deliverable definitions",
                        "medium",
                        "Unclear acceptance criteria make it hard to prove work was completed as agreed",
                    ),
                    risk(
                        "Unlimited liability exposure",
                        "medium",
                        "Without a liability cap, a small engagement can create outsized financial risk",
                    ),
                ],
            },
            red_flags: strings(&[
                "No acceptance criteria for deliverables",
                "Missing or one-sided liability cap",
            ]),
            recommendations: vec![
                recommend(
                    "Define acceptance criteria for each deliverable",
                    "high",
                    "Objective criteria prevent disputes about completion",
                ),
                recommend(
                    "Negotiate a mutual limitation of liability",
                    "medium",
                    "Caps keep risk proportionate to the contract value",
                ),
            ],
            next_steps: strings(&[
                "Map every deliverable to a deadline and fee",
                "Review the termination and refund terms",
                "Confirm who owns the work product",
            ]),
            when_to_seek_help: "Have a lawyer review the agreement if it involves significant fees, intellectual property transfers, or indemnification obligations.".to_string(),
            ..Default::default()
        },

        DocumentType::PurchaseAgreement => AnalysisReport {
            summary: "This is a purchase agreement covering the transfer of goods or property between a buyer and a seller. Focus on the condition disclosures, contingencies, and what happens to deposits if the deal falls through.".to_string(),
            key_terms: vec![key_term(
                "Contingencies",
                "Conditions that must be met before the sale completes",
                "They are your exit routes; losing them can forfeit your deposit",
            )],
            your_rights: strings(&[
                "Right to the goods or property as described",
                "Right to remedies for undisclosed defects",
                "Right to cancel under the stated contingencies",
            ]),
            your_obligations: strings(&[
                "Pay the purchase price per the schedule",
                "Complete inspections within the stated windows",
                "Close the transaction by the agreed date",
            ]),
            risk_assessment: RiskAssessment {
                overall_risk_score: 6,
                risk_factors: vec![
                    risk(
                        "As-is sale language",
                        "high",
                        "Buying as-is shifts the risk of hidden defects entirely onto the buyer",
                    ),
                    risk(
                        "Deposit forfeiture terms",
                        "medium",
                        "Missing a deadline can mean losing the entire deposit even in good faith",
                    ),
                ],
            },
            red_flags: strings(&[
                "As-is clauses with no inspection contingency",
                "Vague description of what is included in the sale",
            ]),
            recommendations: vec![
                recommend(
                    "Keep an inspection contingency in place",
                    "high",
                    "It preserves your ability to walk away from hidden problems",
                ),
                recommend(
                    "List every included item explicitly",
                    "medium",
                    "Prevents disputes over fixtures, accessories, or equipment",
                ),
            ],
            next_steps: strings(&[
                "Verify all deadlines in the agreement",
                "Schedule required inspections promptly",
                "Confirm deposit handling and escrow terms",
            ]),
            when_to_seek_help: "Engage a lawyer for high-value purchases, real estate transactions, or whenever the seller resists standard contingencies.".to_string(),
            ..Default::default()
        },

        DocumentType::LoanAgreement => AnalysisReport {
            summary: "This is a loan agreement defining the amount borrowed, interest, repayment schedule, and what happens on default. The true cost of the loan and the default triggers deserve the closest reading.".to_string(),
            key_terms: vec![key_term(
                "Default",
                "The events that let the lender demand immediate full repayment",
                "Broad default triggers can escalate a single missed payment into the whole balance coming due",
            )],
            your_rights: strings(&[
                "Right to clear disclosure of rates and fees",
                "Right to any cure period before default remedies",
                "Right to prepay if the agreement allows it",
            ]),
            your_obligations: strings(&[
                "Make payments on schedule",
                "Maintain any required collateral or insurance",
                "Notify the lender of material changes if required",
            ]),
            risk_assessment: RiskAssessment {
                overall_risk_score: 7,
                risk_factors: vec![
                    risk(
                        "Acceleration clauses",
                        "high",
                        "A default can make the entire balance immediately due, not just the missed payment",
                    ),
                    risk(
                        "Variable interest rates",
                        "medium",
                        "Payments can grow substantially if rates rise",
                    ),
                    risk(
                        "Prepayment penalties",
                        "medium",
                        "Paying the loan off early may trigger extra fees",
                    ),
                ],
            },
            red_flags: strings(&[
                "Default triggers unrelated to payment",
                "Fees that are not included in the stated rate",
            ]),
            recommendations: vec![
                recommend(
                    "Calculate the total cost of the loan",
                    "high",
                    "The headline rate rarely reflects fees and compounding",
                ),
                recommend(
                    "Ask for a written cure period for missed payments",
                    "medium",
                    "A grace window prevents a single slip from becoming a default",
                ),
            ],
            next_steps: strings(&[
                "Verify the repayment schedule and total interest",
                "Identify every fee in the agreement",
                "Understand exactly what counts as default",
            ]),
            when_to_seek_help: "Consult a lawyer or financial advisor before signing if the loan is secured by your home or business assets, or if any term seems to change unilaterally.".to_string(),
            ..Default::default()
        },

        DocumentType::PowerOfAttorney => AnalysisReport {
            summary: "This is a power of attorney granting someone authority to act on another person's behalf. The breadth of the powers granted and when they take effect are the critical provisions.".to_string(),
            key_terms: vec![key_term(
                "Agent / Attorney-in-Fact",
                "The person being given authority to act for the principal",
                "This person can bind you legally and financially within the granted powers",
            )],
            your_rights: strings(&[
                "Right to revoke the power while competent",
                "Right to limit the powers granted",
                "Right to an accounting of actions taken on your behalf",
            ]),
            your_obligations: strings(&[
                "Choose an agent you trust completely",
                "Notify institutions of the grant or its revocation",
                "Keep the document updated as circumstances change",
            ]),
            risk_assessment: RiskAssessment {
                overall_risk_score: 7,
                risk_factors: vec![
                    risk(
                        "Broad general powers",
                        "high",
                        "A general grant lets the agent act on finances, property, and contracts with little oversight",
                    ),
                    risk(
                        "Immediate effectiveness",
                        "medium",
                        "A power effective at signing, rather than upon incapacity, is usable right away",
                    ),
                ],
            },
            red_flags: strings(&[
                "No limits or reporting obligations on the agent",
                "Unclear conditions for when the power activates",
            ]),
            recommendations: vec![
                recommend(
                    "Limit powers to what is actually needed",
                    "high",
                    "Narrow grants reduce the opportunity for misuse",
                ),
                recommend(
                    "Name a successor agent",
                    "medium",
                    "Avoids a gap if the primary agent is unavailable",
                ),
            ],
            next_steps: strings(&[
                "Confirm the scope and duration of the powers",
                "Check the revocation procedure",
                "Verify witnessing and notarization requirements",
            ]),
            when_to_seek_help: "Have an estate planning attorney review the document, especially for durable powers that survive incapacity or grants covering real estate and banking.".to_string(),
            ..Default::default()
        },

        DocumentType::WillTestament => AnalysisReport {
            summary: "This is a will directing how an estate is to be distributed and who administers it. Validity formalities and clear beneficiary designations determine whether the document actually works when needed.".to_string(),
            key_terms: vec![key_term(
                "Executor",
                "The person responsible for carrying out the will's instructions",
                "They control the estate through probate; pick someone capable and willing",
            )],
            your_rights: strings(&[
                "Right to amend or revoke the will while competent",
                "Right to choose your beneficiaries and executor",
                "Right to set conditions on bequests within legal limits",
            ]),
            your_obligations: strings(&[
                "Execute the will with the required witnesses",
                "Keep the document where the executor can find it",
                "Update it after major life events",
            ]),
            risk_assessment: RiskAssessment {
                overall_risk_score: 5,
                risk_factors: vec![
                    risk(
                        "Improper execution formalities",
                        "high",
                        "Missing witness or signature requirements can invalidate the entire will",
                    ),
                    risk(
                        "Outdated beneficiary designations",
                        "medium",
                        "Accounts with their own beneficiary forms override the will and may contradict it",
                    ),
                ],
            },
            red_flags: strings(&[
                "Ambiguous descriptions of assets or beneficiaries",
                "No residuary clause covering unlisted property",
            ]),
            recommendations: vec![
                recommend(
                    "Verify the execution requirements for your jurisdiction",
                    "high",
                    "Witnessing rules vary and mistakes surface only after it is too late to fix them",
                ),
                recommend(
                    "Align beneficiary forms with the will",
                    "medium",
                    "Retirement and insurance designations pass outside the will",
                ),
            ],
            next_steps: strings(&[
                "List all significant assets and debts",
                "Confirm the executor is willing to serve",
                "Store the signed original safely",
            ]),
            when_to_seek_help: "Use an estate attorney if the estate is large, includes a business, spans jurisdictions, or if you expect the will to be contested.".to_string(),
            ..Default::default()
        },

        DocumentType::PrivacyPolicy => AnalysisReport {
            summary: "This is a privacy policy describing what personal data is collected, how it is used, and with whom it is shared. The data-sharing and retention sections reveal the practical privacy impact.".to_string(),
            key_terms: vec![key_term(
                "Third-Party Sharing",
                "Which outside companies receive your data and why",
                "Sharing clauses determine how far your information travels beyond this service",
            )],
            your_rights: strings(&[
                "Right to know what data is collected about you",
                "Right to request access or deletion where law provides",
                "Right to opt out of certain uses such as marketing",
            ]),
            your_obligations: strings(&[
                "Provide accurate information where required",
                "Review policy updates you are notified about",
            ]),
            risk_assessment: RiskAssessment {
                overall_risk_score: 4,
                risk_factors: vec![
                    risk(
                        "Broad data-sharing permissions",
                        "medium",
                        "Language like 'partners and affiliates' can cover a very wide set of recipients",
                    ),
                    risk(
                        "Indefinite data retention",
                        "medium",
                        "Data kept forever is exposed to every future breach",
                    ),
                ],
            },
            red_flags: strings(&[
                "No stated retention or deletion timeline",
                "Policy changes effective without notice",
            ]),
            recommendations: vec![
                recommend(
                    "Check the opt-out and deletion procedures",
                    "medium",
                    "Knowing the exit path matters more than the collection list",
                ),
                recommend(
                    "Limit optional data you provide",
                    "low",
                    "Data never collected cannot be leaked or sold",
                ),
            ],
            next_steps: strings(&[
                "Locate the data-sharing section",
                "Check whether the policy covers your region's privacy law",
                "Note how policy changes are communicated",
            ]),
            when_to_seek_help: "Consult a privacy professional if you are subject to the policy as a business, or if sensitive data (health, financial, biometric) is involved.".to_string(),
            ..Default::default()
        },

        DocumentType::GeneralLegal => AnalysisReport {
            summary: "This is a legal document containing terms that create rights and obligations for the parties. A careful read of the obligations, termination, and dispute-resolution sections is recommended before relying on it.".to_string(),
            key_terms: vec![key_term(
                "Governing Law",
                "Which jurisdiction's law applies to the document",
                "Determines where and under what rules any dispute is resolved",
            )],
            your_rights: strings(&[
                "Right to understand terms before agreeing",
                "Right to negotiate provisions before signing",
                "Right to remedies the document or law provides",
            ]),
            your_obligations: strings(&[
                "Perform the duties the document assigns to you",
                "Meet any stated deadlines and notice requirements",
            ]),
            risk_assessment: RiskAssessment {
                overall_risk_score: 5,
                risk_factors: vec![risk(
                    "Unreviewed obligations",
                    "medium",
                    "Signing without understanding each obligation can create commitments you did not intend",
                )],
            },
            red_flags: strings(&[
                "Terms you cannot explain in your own words",
                "Blanks or placeholders left in the signed version",
            ]),
            recommendations: vec![recommend(
                "Have the document professionally reviewed",
                "high",
                "A qualified review catches issues automated analysis cannot",
            )],
            next_steps: strings(&[
                "Identify every party and their obligations",
                "Note all dates and deadlines",
                "List questions for a legal professional",
            ]),
            when_to_seek_help: "Consult a lawyer whenever significant money, property, or long-term obligations are involved, or when any term remains unclear.".to_string(),
            ..Default::default()
        },
    };

    report.document_type = doc.as_str().to_string();
    report
}

/// Canned clause explanation, shared by every document type.
pub fn explain_clause() -> ClauseExplanation {
    ClauseExplanation {
        plain_english: "This clause contains legal language that defines specific terms, conditions, or obligations in the document.".to_string(),
        implications: "This affects your rights, responsibilities, or how the agreement works in practice.".to_string(),
        risks: "Legal clauses can create obligations or limit your options. Review carefully to understand what you're agreeing to.".to_string(),
        benefits: "Some clauses provide protections or clarify important terms that work in your favor.".to_string(),
        red_flags: "AI service unavailable - please review this clause carefully with a legal professional.".to_string(),
        common_scenarios: "This type of clause typically comes into play during specific situations outlined in the agreement.".to_string(),
        ..Default::default()
    }
}

/// Canned question answer, shared by every document type.
pub fn qa() -> QaAnswer {
    QaAnswer {
        answer: "This appears to relate to standard legal provisions. The specific answer depends on the context within your document.".to_string(),
        explanation: "Detailed AI-powered answers are unavailable right now. Please ensure your question is specific to the content of the uploaded document.".to_string(),
        relevant_clauses: "Multiple sections of the document may contain relevant information".to_string(),
        additional_considerations: "Always consult with a qualified attorney for legal advice specific to your situation".to_string(),
        follow_up_questions: strings(&[
            "What are the main risks in this document?",
            "What are my key obligations?",
            "Are there any red flags I should know about?",
            "What should I do before signing this document?",
        ]),
        ..Default::default()
    }
}

/// Canned compliance report.
pub fn compliance(doc: DocumentType) -> ComplianceReport {
    ComplianceReport {
        compliance_score: 6,
        overall_status: "needs-review".to_string(),
        jurisdiction: "US".to_string(),
        document_type: doc.as_str().to_string(),
        compliance_issues: vec![ComplianceIssue {
            issue: "Automated compliance analysis unavailable".to_string(),
            severity: "medium".to_string(),
            requirement: "Professional legal review recommended".to_string(),
            recommendation: "Have the document reviewed by a qualified attorney".to_string(),
            consequence: "Cannot verify compliance without professional review".to_string(),
        }],
        strengths: strings(&["Document appears to contain standard legal provisions"]),
        required_actions: vec![RequiredAction {
            action: "Professional compliance review".to_string(),
            priority: "high".to_string(),
            deadline: "Before signing or implementation".to_string(),
            legal_basis: "General legal compliance best practices".to_string(),
        }],
        recommendations: strings(&[
            "Consult with an attorney familiar with the applicable jurisdiction",
            "Review the document against current legal requirements",
            "Ensure all required disclosures are included",
        ]),
        next_steps: strings(&[
            "Schedule consultation with a legal professional",
            "Research current compliance requirements",
            "Document any concerns for legal review",
        ]),
        disclaimer: Some(
            "This analysis is for informational purposes only and does not constitute legal advice"
                .to_string(),
        ),
        ..Default::default()
    }
}

/// Canned benchmark report.
pub fn benchmark(doc: DocumentType) -> BenchmarkReport {
    BenchmarkReport {
        overall_score: 6,
        industry_rating: "average".to_string(),
        document_type: doc.as_str().to_string(),
        industry: "general".to_string(),
        strengths: vec![BenchmarkStrength {
            area: "Document Structure".to_string(),
            description: "Document appears to follow standard legal formatting".to_string(),
            industry_comparison: "Meets basic industry formatting standards".to_string(),
        }],
        weaknesses: vec![BenchmarkWeakness {
            area: "Benchmarking Analysis".to_string(),
            description: "Detailed industry comparison requires the AI service".to_string(),
            industry_standard: "Comprehensive analysis against industry benchmarks".to_string(),
            improvement: "Enable AI analysis or obtain a professional legal review".to_string(),
        }],
        benchmark_metrics: BenchmarkMetrics {
            clarity: 6,
            completeness: 6,
            enforceability: 6,
            protection: 6,
            fairness: 6,
        },
        industry_comparison: IndustryComparison {
            better_than: "Unable to determine without AI analysis".to_string(),
            common_practices: strings(&["Standard legal terminology", "Basic contract provisions"]),
            missing_elements: strings(&["Detailed industry comparison not available"]),
        },
        recommendations: vec![BenchmarkRecommendation {
            priority: "high".to_string(),
            improvement: "Professional benchmarking review".to_string(),
            justification: "Industry comparison requires specialized analysis".to_string(),
            industry_trend: "Increasing use of standardized legal frameworks".to_string(),
        }],
        modernization: strings(&[
            "Consider professional review against current industry standards",
            "Evaluate the document against recent legal developments",
        ]),
        disclaimer: Some(
            "Benchmarking analysis is for informational purposes and should be supplemented with professional legal review".to_string(),
        ),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_fallback_is_deterministic_and_shape_complete() {
        for doc in DocumentType::ALL {
            let a = analyze(doc);
            let b = analyze(doc);
            assert_eq!(
                serde_json::to_value(&a).unwrap(),
                serde_json::to_value(&b).unwrap()
            );
            assert_eq!(a.document_type, doc.as_str());
            assert!(!a.summary.is_empty());
            assert!(!a.your_rights.is_empty());
            assert!(!a.next_steps.is_empty());
            assert!(!a.when_to_seek_help.is_empty());
            assert!((1..=10).contains(&a.risk_assessment.overall_risk_score));
            assert!(!a.risk_assessment.risk_factors.is_empty());
            for factor in &a.risk_assessment.risk_factors {
                assert!(matches!(
                    factor.severity.as_str(),
                    "low" | "medium" | "high"
                ));
            }
        }
    }

    #[test]
    fn explain_fallback_has_all_six_fields() {
        let e = explain_clause();
        for field in [
            &e.plain_english,
            &e.implications,
            &e.risks,
            &e.benefits,
            &e.red_flags,
            &e.common_scenarios,
        ] {
            assert!(!field.is_empty());
        }
    }

    #[test]
    fn qa_fallback_suggests_follow_ups() {
        assert!(!qa().follow_up_questions.is_empty());
    }

    #[test]
    fn compliance_and_benchmark_echo_document_type() {
        assert_eq!(compliance(DocumentType::Nda).document_type, "nda");
        assert_eq!(
            benchmark(DocumentType::LeaseAgreement).document_type,
            "lease_agreement"
        );
    }
}
