//! Custom Test Assertions
//!
//! Assertion helpers for decisions that give more meaningful failure
//! messages than comparing serialized JSON.

use domain_claims::{AdjudicationDecision, Decision};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Asserts that the claim was approved
pub fn assert_approved(decision: &Decision) {
    assert_eq!(
        decision.decision,
        AdjudicationDecision::Approved,
        "Expected approval, got {:?} (fraud_score={}, policy_matched={})",
        decision.decision,
        decision.fraud_score(),
        decision.policy_matched()
    );
}

/// Asserts that the claim was rejected
pub fn assert_rejected(decision: &Decision) {
    assert_eq!(
        decision.decision,
        AdjudicationDecision::Rejected,
        "Expected rejection, got {:?} (fraud_score={}, policy_matched={})",
        decision.decision,
        decision.fraud_score(),
        decision.policy_matched()
    );
}

/// Asserts the fraud score lies in [0, 1]
pub fn assert_fraud_score_bounded(decision: &Decision) {
    let score = decision.fraud_score();
    assert!(
        score >= Decimal::ZERO && score <= Decimal::ONE,
        "Fraud score out of bounds: {}",
        score
    );
}

/// Asserts the payout is exactly 90% of the estimated damage
pub fn assert_payout_ratio(decision: &Decision) {
    let damage = decision
        .details
        .derived()
        .damage()
        .expect("Decision has no damage estimate");

    assert_eq!(
        damage.estimated_payout,
        damage.estimated_damage * dec!(0.9),
        "Payout {} is not 90% of damage {}",
        damage.estimated_payout,
        damage.estimated_damage
    );
}

/// Asserts every derived fact is at its fallback value.
///
/// With every field missing only the missing-documents signal fires, so
/// the fraud score is 0.3.
pub fn assert_all_defaults(decision: &Decision) {
    assert_rejected(decision);
    assert_eq!(decision.fraud_score(), dec!(0.3), "fraud_score should be the missing-documents weight");
    assert!(!decision.documents_verified(), "documents_verified should default to false");
    assert!(!decision.policy_matched(), "policy_matched should default to false");

    let damage = decision
        .details
        .derived()
        .damage()
        .expect("Decision has no damage estimate");
    assert!(damage.estimated_damage.is_zero(), "estimated_damage = {}", damage.estimated_damage);
    assert!(damage.estimated_payout.is_zero(), "estimated_payout = {}", damage.estimated_payout);
}
