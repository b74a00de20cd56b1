//! Policy matching stage

use chrono::NaiveDate;
use core_kernel::{parse_date, CoreError, DateRange};
use tracing::{info, warn};

use crate::claim::{ClaimField, ClaimRecord, Precedence};
use crate::error::FieldError;
use crate::parsed::Parsed;
use crate::stage::Stage;

/// Checks that the incident date falls inside the policy validity window.
///
/// Both ends of the window are inclusive. Any missing, blank, or malformed
/// date yields no match.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyMatcher;

impl PolicyMatcher {
    pub const NAME: &'static str = "policy_matcher";

    pub fn evaluate(&self, record: &ClaimRecord) -> Parsed<bool> {
        let window = match required(record, ClaimField::PolicyValidity, DateRange::parse) {
            Ok(window) => window,
            Err(reason) => return Parsed::Default(false, reason),
        };
        let incident = match required(record, ClaimField::IncidentDate, parse_date) {
            Ok(date) => date,
            Err(reason) => return Parsed::Default(false, reason),
        };

        let matched = window.contains(incident);
        log_outcome(&window, incident, matched);
        Parsed::Ok(matched)
    }
}

impl Stage for PolicyMatcher {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn apply(&self, mut record: ClaimRecord) -> ClaimRecord {
        let outcome = self.evaluate(&record);
        if let Some(reason) = outcome.reason() {
            warn!(stage = Self::NAME, reason = %reason, "Policy window could not be checked");
        }
        record.record_policy_match(outcome.into_value());
        record
    }
}

fn required<T, E>(
    record: &ClaimRecord,
    field: ClaimField,
    parse: impl FnOnce(&str) -> Result<T, E>,
) -> Result<T, FieldError>
where
    E: Into<CoreError>,
{
    match record.field(field, Precedence::FlatFirst).map(str::trim) {
        None | Some("") => Err(FieldError::Missing(field)),
        Some(text) => parse(text).map_err(|err| FieldError::malformed(field, err)),
    }
}

fn log_outcome(window: &DateRange, incident: NaiveDate, matched: bool) {
    if matched {
        info!(
            stage = PolicyMatcher::NAME,
            %incident,
            start = %window.start,
            end = %window.end,
            "Incident is within the policy window"
        );
    } else {
        info!(
            stage = PolicyMatcher::NAME,
            %incident,
            start = %window.start,
            end = %window.end,
            "Incident is outside the policy window"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claim::ClaimFields;

    fn claim(validity: Option<&str>, incident: Option<&str>) -> ClaimRecord {
        let mut fields = ClaimFields::default();
        if let Some(v) = validity {
            fields.set(ClaimField::PolicyValidity, v);
        }
        if let Some(v) = incident {
            fields.set(ClaimField::IncidentDate, v);
        }
        ClaimRecord::new(fields)
    }

    #[test]
    fn test_incident_inside_window() {
        let outcome = PolicyMatcher.evaluate(&claim(Some("2023-01-01 to 2023-12-31"), Some("2023-06-15")));
        assert_eq!(outcome, Parsed::Ok(true));
    }

    #[test]
    fn test_incident_after_window() {
        let outcome = PolicyMatcher.evaluate(&claim(Some("2022-01-01 to 2022-06-30"), Some("2022-07-01")));
        assert_eq!(outcome, Parsed::Ok(false));
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let start = PolicyMatcher.evaluate(&claim(Some("2023-01-01 to 2023-12-31"), Some("2023-01-01")));
        let end = PolicyMatcher.evaluate(&claim(Some("2023-01-01 to 2023-12-31"), Some("2023-12-31")));

        assert_eq!(start, Parsed::Ok(true));
        assert_eq!(end, Parsed::Ok(true));
    }

    #[test]
    fn test_missing_incident_date() {
        let outcome = PolicyMatcher.evaluate(&claim(Some("2023-01-01 to 2023-12-31"), None));
        assert_eq!(
            outcome,
            Parsed::Default(false, FieldError::Missing(ClaimField::IncidentDate))
        );
    }

    #[test]
    fn test_blank_validity_counts_as_missing() {
        let outcome = PolicyMatcher.evaluate(&claim(Some("   "), Some("2023-06-15")));
        assert_eq!(
            outcome,
            Parsed::Default(false, FieldError::Missing(ClaimField::PolicyValidity))
        );
    }

    #[test]
    fn test_half_open_window_does_not_match() {
        let outcome = PolicyMatcher.evaluate(&claim(Some("2023-01-01 to"), Some("2023-06-15")));
        assert!(outcome.is_default());
        assert!(!outcome.into_value());
    }

    #[test]
    fn test_wrong_date_format_does_not_match() {
        let outcome = PolicyMatcher.evaluate(&claim(Some("2023-01-01 to 2023-12-31"), Some("15/06/2023")));
        assert!(matches!(
            outcome,
            Parsed::Default(false, FieldError::Malformed { field: ClaimField::IncidentDate, .. })
        ));
    }

    #[test]
    fn test_inverted_window_does_not_match() {
        let outcome = PolicyMatcher.evaluate(&claim(Some("2023-12-31 to 2023-01-01"), Some("2023-06-15")));
        assert!(outcome.is_default());
    }

    #[test]
    fn test_stage_records_match() {
        let record = PolicyMatcher.apply(claim(Some("2023-01-01 to 2023-12-31"), Some("2023-06-15")));
        assert_eq!(record.derived().policy_matched(), Some(true));

        let record = PolicyMatcher.apply(claim(None, None));
        assert_eq!(record.derived().policy_matched(), Some(false));
    }
}
