//! Claim intake
//!
//! Accepts a claim either as a JSON object or as free text made of
//! `key: value` lines and produces the [`ClaimRecord`] the stages work on.
//! Intake never fails: input it cannot read becomes an empty record.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::claim::ClaimRecord;

/// Raw claim input as received from a caller
#[derive(Debug, Clone, PartialEq)]
pub enum ClaimInput {
    /// An already-structured record
    Structured(Map<String, Value>),
    /// `key: value` lines, one field per line
    FreeText(String),
}

impl ClaimInput {
    fn kind(&self) -> &'static str {
        match self {
            ClaimInput::Structured(_) => "structured",
            ClaimInput::FreeText(_) => "free_text",
        }
    }
}

impl From<Value> for ClaimInput {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => ClaimInput::Structured(map),
            Value::String(text) => ClaimInput::FreeText(text),
            other => {
                warn!(value = %other, "Claim input is neither an object nor text, treating as empty");
                ClaimInput::Structured(Map::new())
            }
        }
    }
}

impl From<Map<String, Value>> for ClaimInput {
    fn from(map: Map<String, Value>) -> Self {
        ClaimInput::Structured(map)
    }
}

impl From<String> for ClaimInput {
    fn from(text: String) -> Self {
        ClaimInput::FreeText(text)
    }
}

impl From<&str> for ClaimInput {
    fn from(text: &str) -> Self {
        ClaimInput::FreeText(text.to_string())
    }
}

impl From<ClaimRecord> for ClaimInput {
    fn from(record: ClaimRecord) -> Self {
        match serde_json::to_value(record) {
            Ok(value) => ClaimInput::from(value),
            Err(err) => {
                warn!(error = %err, "Claim record could not be re-read, treating as empty");
                ClaimInput::Structured(Map::new())
            }
        }
    }
}

/// Normalizes raw input into a claim record
#[derive(Debug, Clone, Copy, Default)]
pub struct IntakeNormalizer;

impl IntakeNormalizer {
    pub const NAME: &'static str = "intake_normalizer";

    pub fn normalize(&self, input: ClaimInput) -> ClaimRecord {
        let kind = input.kind();
        let map = match input {
            ClaimInput::Structured(map) => map,
            ClaimInput::FreeText(text) => parse_free_text(&text),
        };
        let keys = map.len();

        let record = match serde_json::from_value(Value::Object(map)) {
            Ok(record) => record,
            Err(err) => {
                warn!(stage = Self::NAME, error = %err, "Claim input could not be read, treating as empty");
                ClaimRecord::default()
            }
        };

        debug!(stage = Self::NAME, input = kind, keys, "Claim normalized");
        record
    }
}

/// Parses `key: value` lines.
///
/// Lines without a `:` are skipped. Each line is split on its first `:`
/// only, so values may themselves contain colons. Keys and values are
/// trimmed, and a repeated key keeps its last value.
pub fn parse_free_text(text: &str) -> Map<String, Value> {
    let mut fields = Map::new();
    for line in text.lines() {
        if let Some((key, value)) = line.split_once(':') {
            fields.insert(key.trim().to_string(), Value::String(value.trim().to_string()));
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claim::ClaimField;
    use serde_json::json;

    #[test]
    fn test_free_text_two_fields() {
        let fields = parse_free_text("Claim Amount: ₹1,000\nSupporting Documents: yes");

        assert_eq!(fields.len(), 2);
        assert_eq!(fields["Claim Amount"], json!("₹1,000"));
        assert_eq!(fields["Supporting Documents"], json!("yes"));
    }

    #[test]
    fn test_free_text_skips_lines_without_separator() {
        let fields = parse_free_text("hello\n\nClaimant Name:  Asha  \n---");

        assert_eq!(fields.len(), 1);
        assert_eq!(fields["Claimant Name"], json!("Asha"));
    }

    #[test]
    fn test_free_text_splits_on_first_colon_only() {
        let fields = parse_free_text("Incident Time: 10:45 PM");
        assert_eq!(fields["Incident Time"], json!("10:45 PM"));
    }

    #[test]
    fn test_free_text_last_duplicate_wins() {
        let fields = parse_free_text("Previous Claims: 1\nPrevious Claims: 3");
        assert_eq!(fields["Previous Claims"], json!("3"));
    }

    #[test]
    fn test_free_text_handles_crlf() {
        let fields = parse_free_text("Claimant Name: Ravi\r\nPrevious Claims: 2\r\n");

        assert_eq!(fields["Claimant Name"], json!("Ravi"));
        assert_eq!(fields["Previous Claims"], json!("2"));
    }

    #[test]
    fn test_empty_text_is_empty_record() {
        let record = IntakeNormalizer.normalize(ClaimInput::from(""));
        assert_eq!(record, ClaimRecord::default());
    }

    #[test]
    fn test_structured_input_is_kept() {
        let record = IntakeNormalizer.normalize(ClaimInput::from(json!({
            "Claimant Name": "Asha",
            "Policy Number": "P-77",
        })));

        assert_eq!(record.fields.get(ClaimField::ClaimantName), Some("Asha"));
        assert_eq!(record.fields.extras["Policy Number"], json!("P-77"));
    }

    #[test]
    fn test_free_text_fields_are_recognized() {
        let record = IntakeNormalizer.normalize(ClaimInput::from(
            "Claim Amount: ₹1,000\nSupporting Documents: yes",
        ));

        assert_eq!(record.fields.get(ClaimField::ClaimAmount), Some("₹1,000"));
        assert_eq!(record.fields.get(ClaimField::SupportingDocuments), Some("yes"));
        assert_eq!(record.fields.len(), 2);
    }

    #[test]
    fn test_non_object_json_is_empty_record() {
        for value in [json!(null), json!(42), json!([1, 2]), json!(true)] {
            let record = IntakeNormalizer.normalize(ClaimInput::from(value));
            assert_eq!(record, ClaimRecord::default());
        }
    }
}
