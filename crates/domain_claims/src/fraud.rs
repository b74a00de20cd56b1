//! Fraud scoring stage
//!
//! A small additive heuristic over three signals:
//!
//! | Signal                          | Contribution |
//! |---------------------------------|--------------|
//! | 3 or more previous claims       | 0.4          |
//! | 1-2 previous claims             | 0.1          |
//! | claim amount ≥ 500,000          | 0.4          |
//! | no supporting documents         | 0.3          |
//!
//! The total is capped at 1.0. A signal whose field is missing or
//! unparseable contributes nothing.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use tracing::debug;

use core_kernel::{parse_amount, parse_count};

use crate::claim::{ClaimField, ClaimRecord, Precedence};
use crate::parsed::Parsed;
use crate::stage::{documents_missing, Stage};

const REPEAT_CLAIMANT_MIN: i64 = 3;
const REPEAT_CLAIMANT_WEIGHT: Decimal = dec!(0.4);
const PRIOR_CLAIMANT_MIN: i64 = 1;
const PRIOR_CLAIMANT_WEIGHT: Decimal = dec!(0.1);
const HIGH_VALUE_THRESHOLD: Decimal = dec!(500000);
const HIGH_VALUE_WEIGHT: Decimal = dec!(0.4);
const MISSING_DOCUMENTS_WEIGHT: Decimal = dec!(0.3);

/// One signal's share of the fraud score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FraudFactor {
    pub rule: &'static str,
    pub contribution: Decimal,
    pub detail: String,
}

/// Breakdown of a fraud score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FraudAssessment {
    pub factors: Vec<FraudFactor>,
    pub score: Decimal,
}

impl FraudAssessment {
    fn from_factors(factors: Vec<FraudFactor>) -> Self {
        let raw_total: Decimal = factors.iter().map(|f| f.contribution).sum();
        let score = raw_total.min(Decimal::ONE).max(Decimal::ZERO);
        Self { factors, score }
    }
}

/// Scores a claim's fraud likelihood in [0, 1]. Higher is more suspicious.
///
/// The documents signal is re-derived from the raw field rather than read
/// from the document verifier's output, so this stage can run on its own.
#[derive(Debug, Clone, Copy, Default)]
pub struct FraudScorer;

impl FraudScorer {
    pub const NAME: &'static str = "fraud_scorer";

    pub fn assess(&self, record: &ClaimRecord) -> FraudAssessment {
        FraudAssessment::from_factors(vec![
            claim_history(record),
            claim_value(record),
            document_presence(record),
        ])
    }
}

impl Stage for FraudScorer {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn apply(&self, mut record: ClaimRecord) -> ClaimRecord {
        let assessment = self.assess(&record);
        for factor in &assessment.factors {
            debug!(
                stage = Self::NAME,
                rule = factor.rule,
                contribution = %factor.contribution,
                detail = %factor.detail,
                "Fraud factor"
            );
        }
        debug!(stage = Self::NAME, fraud_score = %assessment.score, "Fraud score computed");
        record.record_fraud_score(assessment.score);
        record
    }
}

fn claim_history(record: &ClaimRecord) -> FraudFactor {
    let previous = Parsed::field(
        record.field(ClaimField::PreviousClaims, Precedence::FlatFirst),
        ClaimField::PreviousClaims,
        0,
        parse_count,
    );

    let count = *previous.value();
    let contribution = if count >= REPEAT_CLAIMANT_MIN {
        REPEAT_CLAIMANT_WEIGHT
    } else if count >= PRIOR_CLAIMANT_MIN {
        PRIOR_CLAIMANT_WEIGHT
    } else {
        Decimal::ZERO
    };

    FraudFactor {
        rule: "claim_history",
        contribution,
        detail: describe(&previous, |n| format!("previous_claims={}", n)),
    }
}

fn claim_value(record: &ClaimRecord) -> FraudFactor {
    let amount = Parsed::field(
        record.field(ClaimField::ClaimAmount, Precedence::FlatFirst),
        ClaimField::ClaimAmount,
        None,
        |raw| parse_amount(raw).map(Some),
    );

    let contribution = match amount.value() {
        Some(value) if *value >= HIGH_VALUE_THRESHOLD => HIGH_VALUE_WEIGHT,
        _ => Decimal::ZERO,
    };

    FraudFactor {
        rule: "claim_value",
        contribution,
        detail: describe(&amount, |a| match a {
            Some(value) => format!("claim_amount={}", value),
            None => "claim_amount=unknown".to_string(),
        }),
    }
}

fn document_presence(record: &ClaimRecord) -> FraudFactor {
    let missing = documents_missing(
        record.field(ClaimField::SupportingDocuments, Precedence::FlatFirst),
    );

    FraudFactor {
        rule: "document_presence",
        contribution: if missing { MISSING_DOCUMENTS_WEIGHT } else { Decimal::ZERO },
        detail: format!("documents_missing={}", missing),
    }
}

fn describe<T>(parsed: &Parsed<T>, render: impl Fn(&T) -> String) -> String {
    match parsed.reason() {
        None => render(parsed.value()),
        Some(reason) => format!("{} (defaulted: {})", render(parsed.value()), reason),
    }
}
