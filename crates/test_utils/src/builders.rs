//! Test Data Builders
//!
//! Provides a builder for claim inputs with sensible defaults. Tests set
//! only the fields they care about and pick the shape the pipeline should
//! see: a flat JSON object, an object nested under `claim_details`, or
//! free-text `key: value` lines.

use chrono::NaiveDate;
use domain_claims::claim::CLAIM_DETAILS_KEY;
use domain_claims::ClaimField;
use serde_json::{Map, Value};

use crate::fixtures::TemporalFixtures;

/// Builder for constructing claim inputs
#[derive(Debug, Clone)]
pub struct ClaimInputBuilder {
    fields: Map<String, Value>,
}

impl Default for ClaimInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimInputBuilder {
    /// Creates a builder for an unremarkable, approvable claim
    pub fn new() -> Self {
        Self::empty()
            .claimant_name("Test Claimant")
            .claim_amount("₹25,000")
            .previous_claims("0")
            .supporting_documents("photo.jpg, repair estimate")
            .policy_window(TemporalFixtures::policy_start(), TemporalFixtures::policy_end())
            .incident_date(TemporalFixtures::mid_policy().format("%Y-%m-%d").to_string())
    }

    /// Creates a builder with no fields at all
    pub fn empty() -> Self {
        Self { fields: Map::new() }
    }

    /// Sets a recognized field
    pub fn with(mut self, field: ClaimField, value: impl Into<String>) -> Self {
        self.fields.insert(field.label().to_string(), Value::String(value.into()));
        self
    }

    /// Sets an arbitrary key to any JSON value
    pub fn raw(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Removes a recognized field
    pub fn without(mut self, field: ClaimField) -> Self {
        self.fields.remove(field.label());
        self
    }

    pub fn claimant_name(self, value: impl Into<String>) -> Self {
        self.with(ClaimField::ClaimantName, value)
    }

    pub fn claim_amount(self, value: impl Into<String>) -> Self {
        self.with(ClaimField::ClaimAmount, value)
    }

    pub fn previous_claims(self, value: impl Into<String>) -> Self {
        self.with(ClaimField::PreviousClaims, value)
    }

    pub fn supporting_documents(self, value: impl Into<String>) -> Self {
        self.with(ClaimField::SupportingDocuments, value)
    }

    pub fn policy_validity(self, value: impl Into<String>) -> Self {
        self.with(ClaimField::PolicyValidity, value)
    }

    /// Sets the policy window from two dates
    pub fn policy_window(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.policy_validity(format!("{} to {}", start.format("%Y-%m-%d"), end.format("%Y-%m-%d")))
    }

    pub fn incident_date(self, value: impl Into<String>) -> Self {
        self.with(ClaimField::IncidentDate, value)
    }

    /// Builds a flat JSON object
    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }

    /// Builds `{"claim_details": {...}}`
    pub fn build_nested(self) -> Value {
        let mut outer = Map::new();
        outer.insert(CLAIM_DETAILS_KEY.to_string(), Value::Object(self.fields));
        Value::Object(outer)
    }

    /// Builds free-text `key: value` lines
    pub fn build_text(self) -> String {
        self.fields
            .iter()
            .map(|(key, value)| match value {
                Value::String(text) => format!("{}: {}", key, text),
                other => format!("{}: {}", key, other),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
