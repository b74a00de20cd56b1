//! Claim record
//!
//! The working record threaded through the pipeline. Recognized fields are
//! typed slots holding the raw text the claimant supplied; anything else is
//! carried verbatim in `extras`. Stage outputs live in [`DerivedFacts`],
//! whose slots can be written once and never overwritten.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::damage::DamageEstimate;

/// Key under which a client may nest the claim fields one level deep
pub const CLAIM_DETAILS_KEY: &str = "claim_details";

/// Keys written by the pipeline itself. Incoming values under these keys
/// are dropped at intake so they are always re-derived.
pub const DERIVED_KEYS: [&str; 6] = [
    "documents_verified",
    "fraud_score",
    "policy_matched",
    "estimated_damage",
    "estimated_payout",
    "damage_summary",
];

/// Claim fields read by at least one stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClaimField {
    ClaimantName,
    ClaimAmount,
    PreviousClaims,
    SupportingDocuments,
    PolicyValidity,
    IncidentDate,
}

impl ClaimField {
    pub const ALL: [ClaimField; 6] = [
        ClaimField::ClaimantName,
        ClaimField::ClaimAmount,
        ClaimField::PreviousClaims,
        ClaimField::SupportingDocuments,
        ClaimField::PolicyValidity,
        ClaimField::IncidentDate,
    ];

    /// The human-readable key used on the wire
    pub fn label(&self) -> &'static str {
        match self {
            ClaimField::ClaimantName => "Claimant Name",
            ClaimField::ClaimAmount => "Claim Amount",
            ClaimField::PreviousClaims => "Previous Claims",
            ClaimField::SupportingDocuments => "Supporting Documents",
            ClaimField::PolicyValidity => "Policy Validity",
            ClaimField::IncidentDate => "Incident Date",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.label() == label)
    }
}

impl fmt::Display for ClaimField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a stage looks first when a claim carries both top-level fields
/// and a nested `claim_details` object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precedence {
    /// Top-level value, falling back to `claim_details` when absent
    FlatFirst,
    /// `claim_details` is the sole source whenever it is present
    NestedFirst,
}

/// The claimant-supplied fields of a claim
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClaimFields {
    #[serde(rename = "Claimant Name", default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub claimant_name: Option<String>,

    #[serde(rename = "Claim Amount", default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub claim_amount: Option<String>,

    #[serde(rename = "Previous Claims", default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub previous_claims: Option<String>,

    #[serde(rename = "Supporting Documents", default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub supporting_documents: Option<String>,

    #[serde(rename = "Policy Validity", default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub policy_validity: Option<String>,

    #[serde(rename = "Incident Date", default, deserialize_with = "lenient_text", skip_serializing_if = "Option::is_none")]
    pub incident_date: Option<String>,

    /// Unrecognized keys, passed through untouched
    #[serde(flatten)]
    pub extras: BTreeMap<String, Value>,
}

impl ClaimFields {
    pub fn get(&self, field: ClaimField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn set(&mut self, field: ClaimField, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    fn slot(&self, field: ClaimField) -> &Option<String> {
        match field {
            ClaimField::ClaimantName => &self.claimant_name,
            ClaimField::ClaimAmount => &self.claim_amount,
            ClaimField::PreviousClaims => &self.previous_claims,
            ClaimField::SupportingDocuments => &self.supporting_documents,
            ClaimField::PolicyValidity => &self.policy_validity,
            ClaimField::IncidentDate => &self.incident_date,
        }
    }

    fn slot_mut(&mut self, field: ClaimField) -> &mut Option<String> {
        match field {
            ClaimField::ClaimantName => &mut self.claimant_name,
            ClaimField::ClaimAmount => &mut self.claim_amount,
            ClaimField::PreviousClaims => &mut self.previous_claims,
            ClaimField::SupportingDocuments => &mut self.supporting_documents,
            ClaimField::PolicyValidity => &mut self.policy_validity,
            ClaimField::IncidentDate => &mut self.incident_date,
        }
    }

    /// Number of keys this set of fields carries
    pub fn len(&self) -> usize {
        ClaimField::ALL.iter().filter(|f| self.get(**f).is_some()).count() + self.extras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Facts derived by the pipeline stages
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DerivedFacts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) documents_verified: Option<bool>,

    #[serde(with = "rust_decimal::serde::float_option", skip_serializing_if = "Option::is_none")]
    pub(crate) fraud_score: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) policy_matched: Option<bool>,

    #[serde(flatten)]
    pub(crate) damage: Option<DamageEstimate>,
}

impl DerivedFacts {
    pub fn documents_verified(&self) -> Option<bool> {
        self.documents_verified
    }

    pub fn fraud_score(&self) -> Option<Decimal> {
        self.fraud_score
    }

    pub fn policy_matched(&self) -> Option<bool> {
        self.policy_matched
    }

    pub fn damage(&self) -> Option<&DamageEstimate> {
        self.damage.as_ref()
    }
}

/// One insurance claim as it moves through the pipeline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawClaimRecord")]
pub struct ClaimRecord {
    #[serde(flatten)]
    pub fields: ClaimFields,

    #[serde(rename = "claim_details", skip_serializing_if = "Option::is_none")]
    pub claim_details: Option<ClaimFields>,

    #[serde(flatten)]
    derived: DerivedFacts,
}

impl ClaimRecord {
    pub fn new(fields: ClaimFields) -> Self {
        Self {
            fields,
            claim_details: None,
            derived: DerivedFacts::default(),
        }
    }

    /// Nests `details` under `claim_details`
    pub fn with_claim_details(mut self, details: ClaimFields) -> Self {
        self.claim_details = Some(details);
        self
    }

    /// Looks up a recognized field using the given precedence
    pub fn field(&self, field: ClaimField, precedence: Precedence) -> Option<&str> {
        let top = self.fields.get(field);
        match (precedence, &self.claim_details) {
            (Precedence::FlatFirst, Some(details)) => top.or_else(|| details.get(field)),
            (Precedence::NestedFirst, Some(details)) => details.get(field),
            (_, None) => top,
        }
    }

    pub fn claimant_name(&self) -> Option<&str> {
        self.field(ClaimField::ClaimantName, Precedence::FlatFirst)
    }

    pub fn derived(&self) -> &DerivedFacts {
        &self.derived
    }

    pub(crate) fn derived_mut(&mut self) -> &mut DerivedFacts {
        &mut self.derived
    }

    /// Records the document check. Returns false if it was already set.
    pub fn record_documents_verified(&mut self, verified: bool) -> bool {
        set_once(&mut self.derived.documents_verified, verified, "documents_verified")
    }

    /// Records the fraud score. Returns false if it was already set.
    pub fn record_fraud_score(&mut self, score: Decimal) -> bool {
        set_once(&mut self.derived.fraud_score, score, "fraud_score")
    }

    /// Records the policy match. Returns false if it was already set.
    pub fn record_policy_match(&mut self, matched: bool) -> bool {
        set_once(&mut self.derived.policy_matched, matched, "policy_matched")
    }

    /// Records the damage estimate. Returns false if it was already set.
    pub fn record_damage(&mut self, estimate: DamageEstimate) -> bool {
        set_once(&mut self.derived.damage, estimate, "estimated_damage")
    }
}

fn set_once<T: fmt::Debug>(slot: &mut Option<T>, value: T, key: &'static str) -> bool {
    if let Some(existing) = slot {
        warn!(
            field = key,
            existing = ?existing,
            rejected = ?value,
            "Derived field already set, keeping the first value"
        );
        return false;
    }
    *slot = Some(value);
    true
}

/// Wire shape of an incoming record, before derived keys are dropped
#[derive(Deserialize)]
struct RawClaimRecord {
    #[serde(flatten)]
    fields: ClaimFields,

    #[serde(rename = "claim_details", default, deserialize_with = "nested_fields")]
    claim_details: Option<ClaimFields>,
}

impl From<RawClaimRecord> for ClaimRecord {
    fn from(raw: RawClaimRecord) -> Self {
        let mut fields = raw.fields;
        for key in DERIVED_KEYS {
            if fields.extras.remove(key).is_some() {
                debug!(field = key, "Dropping incoming derived field, it will be recomputed");
            }
        }

        Self {
            fields,
            claim_details: raw.claim_details,
            derived: DerivedFacts::default(),
        }
    }
}

/// Accepts any JSON scalar for a recognized field and keeps its text.
/// `null`, arrays and objects are treated as absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?))
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn nested_fields<'de, D>(deserializer: D) -> Result<Option<ClaimFields>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        value @ Value::Object(_) => match serde_json::from_value(value) {
            Ok(details) => Ok(Some(details)),
            Err(err) => {
                warn!(error = %err, "Ignoring unreadable claim_details");
                Ok(None)
            }
        },
        other => {
            warn!(value = %other, "Ignoring claim_details that is not an object");
            Ok(None)
        }
    }
}
