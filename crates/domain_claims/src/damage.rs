//! Damage estimation stage

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use tracing::{debug, warn};

use core_kernel::{Money, Rate};

use crate::claim::{ClaimField, ClaimRecord, Precedence};
use crate::parsed::Parsed;
use crate::stage::Stage;

/// Share of the estimated damage paid out; the rest is held back
const PAYOUT_PERCENTAGE: Decimal = dec!(90);

/// Amount assumed when the claim carries no amount at all
const DEFAULT_CLAIM_AMOUNT: &str = "₹0";

pub const UNABLE_TO_ESTIMATE: &str = "Unable to estimate damage.";

/// Estimated damage and payout for a claim
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DamageEstimate {
    #[serde(with = "rust_decimal::serde::float")]
    pub estimated_damage: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub estimated_payout: Decimal,
    pub damage_summary: String,
}

impl DamageEstimate {
    /// Builds the estimate for a successfully parsed claim amount
    pub fn from_claimed(amount: Money) -> Self {
        let payout = Rate::from_percentage(PAYOUT_PERCENTAGE).apply(&amount);
        Self {
            estimated_damage: amount.amount(),
            estimated_payout: payout.amount(),
            damage_summary: format!("Estimated damage: {}", amount.format_whole()),
        }
    }

    /// The zeroed estimate used when the amount cannot be parsed
    pub fn unavailable() -> Self {
        Self {
            estimated_damage: Decimal::ZERO,
            estimated_payout: Decimal::ZERO,
            damage_summary: UNABLE_TO_ESTIMATE.to_string(),
        }
    }
}

/// Turns the claimed amount into an estimated damage and payout.
///
/// This stage reads `Claim Amount` from `claim_details` whenever that
/// object is present, even if the top-level record also carries it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DamageEstimator;

impl DamageEstimator {
    pub const NAME: &'static str = "damage_estimator";

    pub fn estimate(&self, record: &ClaimRecord) -> Parsed<DamageEstimate> {
        let raw = record
            .field(ClaimField::ClaimAmount, Precedence::NestedFirst)
            .unwrap_or(DEFAULT_CLAIM_AMOUNT);

        Parsed::field(Some(raw), ClaimField::ClaimAmount, DamageEstimate::unavailable(), |raw| {
            Money::parse(raw).map(DamageEstimate::from_claimed)
        })
    }
}

impl Stage for DamageEstimator {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn apply(&self, mut record: ClaimRecord) -> ClaimRecord {
        let outcome = self.estimate(&record);
        match outcome.reason() {
            Some(reason) => warn!(stage = Self::NAME, reason = %reason, "Damage could not be estimated"),
            None => debug!(
                stage = Self::NAME,
                estimated_damage = %outcome.value().estimated_damage,
                estimated_payout = %outcome.value().estimated_payout,
                "Damage estimated"
            ),
        }
        record.record_damage(outcome.into_value());
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claim::ClaimFields;

    fn with_amount(amount: &str) -> ClaimRecord {
        let mut fields = ClaimFields::default();
        fields.set(ClaimField::ClaimAmount, amount);
        ClaimRecord::new(fields)
    }

    #[test]
    fn test_rupee_amount() {
        let estimate = DamageEstimator.estimate(&with_amount("₹600,000")).into_value();

        assert_eq!(estimate.estimated_damage, dec!(600000));
        assert_eq!(estimate.estimated_payout, dec!(540000));
        assert_eq!(estimate.damage_summary, "Estimated damage: ₹600,000");
    }

    #[test]
    fn test_dollar_amount_keeps_symbol() {
        let estimate = DamageEstimator.estimate(&with_amount("$1,200")).into_value();

        assert_eq!(estimate.estimated_payout, dec!(1080));
        assert_eq!(estimate.damage_summary, "Estimated damage: $1,200");
    }

    #[test]
    fn test_fractional_amount_summary_has_no_decimals() {
        let estimate = DamageEstimator.estimate(&with_amount("1234.56")).into_value();

        assert_eq!(estimate.estimated_damage, dec!(1234.56));
        assert_eq!(estimate.estimated_payout, dec!(1111.104));
        assert_eq!(estimate.damage_summary, "Estimated damage: ₹1,235");
    }

    #[test]
    fn test_payout_is_not_rounded() {
        let estimate = DamageEstimator.estimate(&with_amount("₹1.2345")).into_value();

        assert_eq!(estimate.estimated_damage, dec!(1.2345));
        assert_eq!(estimate.estimated_payout, dec!(1.11105));
    }

    #[test]
    fn test_tiny_amount_is_kept() {
        let outcome = DamageEstimator.estimate(&with_amount("₹0.00001"));

        assert!(!outcome.is_default());
        assert_eq!(outcome.value().estimated_damage, dec!(0.00001));
        assert_eq!(outcome.value().estimated_payout, dec!(0.000009));
        assert_eq!(outcome.value().damage_summary, "Estimated damage: ₹0");
    }

    #[test]
    fn test_unparseable_amount() {
        let outcome = DamageEstimator.estimate(&with_amount("ten thousand"));

        assert!(outcome.is_default());
        assert_eq!(outcome.into_value(), DamageEstimate::unavailable());
    }

    #[test]
    fn test_blank_amount_is_unparseable() {
        let outcome = DamageEstimator.estimate(&with_amount("  "));
        assert_eq!(outcome.value().damage_summary, UNABLE_TO_ESTIMATE);
    }

    #[test]
    fn test_missing_amount_defaults_to_zero_rupees() {
        let outcome = DamageEstimator.estimate(&ClaimRecord::default());

        assert!(!outcome.is_default());
        assert_eq!(outcome.value().estimated_damage, Decimal::ZERO);
        assert_eq!(outcome.value().damage_summary, "Estimated damage: ₹0");
    }

    #[test]
    fn test_prefers_nested_amount() {
        let mut nested = ClaimFields::default();
        nested.set(ClaimField::ClaimAmount, "₹2,000");
        let record = with_amount("₹1,000").with_claim_details(nested);

        let estimate = DamageEstimator.estimate(&record).into_value();
        assert_eq!(estimate.estimated_damage, dec!(2000));
    }

    #[test]
    fn test_nested_details_without_amount_ignore_top_level() {
        let record = with_amount("₹1,000").with_claim_details(ClaimFields::default());

        let estimate = DamageEstimator.estimate(&record).into_value();
        assert_eq!(estimate.estimated_damage, Decimal::ZERO);
        assert_eq!(estimate.damage_summary, "Estimated damage: ₹0");
    }

    #[test]
    fn test_stage_records_estimate() {
        let record = DamageEstimator.apply(with_amount("₹1,000"));
        let damage = record.derived().damage().unwrap();

        assert_eq!(damage.estimated_damage, dec!(1000));
        assert_eq!(damage.estimated_payout, dec!(900));
    }

    #[test]
    fn test_estimate_serializes_as_numbers() {
        let json = serde_json::to_value(DamageEstimate::from_claimed(Money::parse("₹1,000").unwrap())).unwrap();

        assert_eq!(json["estimated_damage"], serde_json::json!(1000.0));
        assert_eq!(json["estimated_payout"], serde_json::json!(900.0));
    }
}
