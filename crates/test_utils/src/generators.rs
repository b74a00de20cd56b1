//! Property-Based Test Generators
//!
//! Provides proptest strategies for claim field text, both well-formed
//! and hostile, and for whole claim inputs built from them.

use chrono::{Duration, NaiveDate};
use core_kernel::group_thousands;
use proptest::prelude::*;
use rust_decimal::Decimal;
use serde_json::{Map, Value};

/// Strategy for non-negative amounts with up to eight decimal places
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000_000i64, 0u32..9u32).prop_map(|(units, scale)| Decimal::new(units, scale))
}

/// Groups the integer part of a non-negative decimal into thousands
fn with_thousands(amount: Decimal) -> String {
    let text = amount.to_string();
    match text.split_once('.') {
        Some((int_part, frac_part)) => format!("{}.{}", group_thousands(int_part), frac_part),
        None => group_thousands(&text),
    }
}

/// Strategy for amount text as people type it, paired with its value
pub fn amount_text_strategy() -> impl Strategy<Value = (String, Decimal)> {
    (amount_strategy(), 0usize..4usize).prop_map(|(amount, style)| {
        let text = match style {
            0 => format!("₹{}", with_thousands(amount)),
            1 => format!("${}", with_thousands(amount)),
            2 => amount.to_string(),
            _ => format!("  ₹ {}  ", amount),
        };
        (text, amount)
    })
}

/// Strategy for prior-claim counts rendered as text
pub fn previous_claims_text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (0i64..20i64).prop_map(|n| n.to_string()),
        (0i64..20i64).prop_map(|n| format!(" {} ", n)),
        Just(String::new()),
        Just("many".to_string()),
        Just("2.5".to_string()),
    ]
}

/// Strategy for text the document check reads as "nothing attached"
pub fn missing_documents_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(""),
        Just("none"),
        Just("no"),
        Just("false"),
        Just("None"),
        Just("NO"),
        Just("  False  "),
        Just("   "),
    ]
    .prop_map(str::to_string)
}

/// Strategy for text the document check reads as "documents attached"
pub fn present_documents_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,12}(\\.(jpg|pdf))?"
        .prop_filter("not a negative marker", |text| {
            !matches!(text.as_str(), "none" | "no" | "false")
        })
}

/// Strategy for arbitrary text, including control and non-ASCII characters
pub fn adversarial_text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "\\PC{0,24}",
        "[0-9,₹$. -]{0,16}",
        "[0-9]{4}-[0-9]{2}-[0-9]{2}( to [0-9]{4}-[0-9]{2}-[0-9]{2})?",
    ]
}

/// Strategy for a date within a few years of 2023
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..1500i64).prop_map(|days| {
        NaiveDate::from_ymd_opt(2021, 1, 1).unwrap_or_default() + Duration::days(days)
    })
}

/// Strategy for an ordered policy window
pub fn policy_window_strategy() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (date_strategy(), 0i64..730i64).prop_map(|(start, length)| (start, start + Duration::days(length)))
}

/// Strategy for a claim object whose recognized fields hold arbitrary text
pub fn adversarial_claim_strategy() -> impl Strategy<Value = Value> {
    let field = || proptest::option::of(adversarial_text_strategy());
    (field(), field(), field(), field(), field(), field())
        .prop_map(|(name, amount, previous, documents, validity, incident)| {
            let mut map = Map::new();
            let slots = [
                ("Claimant Name", name),
                ("Claim Amount", amount),
                ("Previous Claims", previous),
                ("Supporting Documents", documents),
                ("Policy Validity", validity),
                ("Incident Date", incident),
            ];
            for (key, value) in slots {
                if let Some(text) = value {
                    map.insert(key.to_string(), Value::String(text));
                }
            }
            Value::Object(map)
        })
}
