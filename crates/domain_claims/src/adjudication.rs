//! Claim adjudication
//!
//! The terminal step: turns the enriched record into an approve/reject
//! decision and the response returned to the caller.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use tracing::info;

use crate::claim::ClaimRecord;

/// Scores at or above this are too risky to approve
const FRAUD_SCORE_CEILING: Decimal = dec!(0.5);

const UNKNOWN_CLAIMANT: &str = "Unknown";

/// Adjudication decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AdjudicationDecision {
    Approved,
    Rejected,
}

impl AdjudicationDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdjudicationDecision::Approved => "Approved",
            AdjudicationDecision::Rejected => "Rejected",
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, AdjudicationDecision::Approved)
    }
}

/// The pipeline's response for one claim
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Decision {
    pub decision: AdjudicationDecision,
    pub summary: String,
    /// The fully enriched record. `fraud_score`, `policy_matched` and
    /// `documents_verified` are always present here.
    pub details: ClaimRecord,
}

impl Decision {
    pub fn fraud_score(&self) -> Decimal {
        self.details.derived().fraud_score().unwrap_or_default()
    }

    pub fn policy_matched(&self) -> bool {
        self.details.derived().policy_matched().unwrap_or_default()
    }

    pub fn documents_verified(&self) -> bool {
        self.details.derived().documents_verified().unwrap_or_default()
    }
}

/// Approves a claim iff its fraud score is below 0.5 and the incident
/// falls inside the policy window.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionSummarizer;

impl DecisionSummarizer {
    pub const NAME: &'static str = "decision_summarizer";

    pub fn summarize(&self, mut record: ClaimRecord) -> Decision {
        let derived = record.derived_mut();
        let fraud_score = *derived.fraud_score.get_or_insert(Decimal::ZERO);
        let policy_matched = *derived.policy_matched.get_or_insert(false);
        derived.documents_verified.get_or_insert(false);

        let decision = if fraud_score < FRAUD_SCORE_CEILING && policy_matched {
            AdjudicationDecision::Approved
        } else {
            AdjudicationDecision::Rejected
        };

        let claimant = record.claimant_name().unwrap_or(UNKNOWN_CLAIMANT);
        let summary = format!(
            "Claim for {} has been {}.",
            claimant,
            decision.as_str().to_lowercase()
        );

        info!(
            stage = Self::NAME,
            decision = decision.as_str(),
            %fraud_score,
            policy_matched,
            "Claim adjudicated"
        );

        Decision {
            decision,
            summary,
            details: record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claim::{ClaimField, ClaimFields};
    use serde_json::json;

    fn scored(score: Decimal, matched: bool) -> ClaimRecord {
        let mut record = ClaimRecord::default();
        record.record_fraud_score(score);
        record.record_policy_match(matched);
        record
    }

    #[test]
    fn test_low_score_and_match_is_approved() {
        let decision = DecisionSummarizer.summarize(scored(dec!(0.4), true));
        assert_eq!(decision.decision, AdjudicationDecision::Approved);
        assert_eq!(decision.summary, "Claim for Unknown has been approved.");
    }

    #[test]
    fn test_score_at_ceiling_is_rejected() {
        let decision = DecisionSummarizer.summarize(scored(dec!(0.5), true));
        assert_eq!(decision.decision, AdjudicationDecision::Rejected);
    }

    #[test]
    fn test_policy_mismatch_is_rejected() {
        let decision = DecisionSummarizer.summarize(scored(Decimal::ZERO, false));
        assert_eq!(decision.decision, AdjudicationDecision::Rejected);
    }

    #[test]
    fn test_missing_facts_default_and_reject() {
        let decision = DecisionSummarizer.summarize(ClaimRecord::default());

        assert_eq!(decision.decision, AdjudicationDecision::Rejected);
        assert_eq!(decision.fraud_score(), Decimal::ZERO);
        assert!(!decision.policy_matched());
        assert!(!decision.documents_verified());
    }

    #[test]
    fn test_summary_names_claimant() {
        let mut fields = ClaimFields::default();
        fields.set(ClaimField::ClaimantName, "Asha");
        let decision = DecisionSummarizer.summarize(ClaimRecord::new(fields));

        assert_eq!(decision.summary, "Claim for Asha has been rejected.");
    }

    #[test]
    fn test_details_always_carry_decision_facts() {
        let decision = DecisionSummarizer.summarize(ClaimRecord::default());
        let json = serde_json::to_value(&decision).unwrap();

        assert_eq!(json["decision"], "Rejected");
        assert_eq!(json["details"]["fraud_score"], json!(0.0));
        assert_eq!(json["details"]["policy_matched"], json!(false));
        assert_eq!(json["details"]["documents_verified"], json!(false));
    }
}
