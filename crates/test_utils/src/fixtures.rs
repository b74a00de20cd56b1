//! Pre-built Test Fixtures
//!
//! Ready-to-use claims for the reference scenarios. These are designed to
//! be consistent and predictable across unit and API tests.

use chrono::NaiveDate;
use serde_json::{json, Value};

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard policy start date (Jan 1, 2023)
    pub fn policy_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
    }

    /// Standard policy end date (Dec 31, 2023)
    pub fn policy_end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()
    }

    /// A date well inside the standard policy window
    pub fn mid_policy() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 6, 15).unwrap()
    }
}

/// Fixture for claim inputs
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// Repeat claimant, high value, no documents: fraud score caps at 1.0
    /// while the incident is inside the window.
    pub fn high_risk() -> Value {
        json!({
            "Claimant Name": "Asha",
            "Claim Amount": "₹600,000",
            "Previous Claims": "4",
            "Supporting Documents": "none",
            "Policy Validity": "2023-01-01 to 2023-12-31",
            "Incident Date": "2023-06-15",
        })
    }

    /// Clean claim whose incident happened the day after the policy lapsed
    pub fn late_incident() -> Value {
        json!({
            "Claim Amount": "$1,200",
            "Previous Claims": "0",
            "Supporting Documents": "photo.jpg",
            "Policy Validity": "2022-01-01 to 2022-06-30",
            "Incident Date": "2022-07-01",
        })
    }

    /// Clean claim inside the window
    pub fn approvable() -> Value {
        json!({
            "Claimant Name": "Meera",
            "Claim Amount": "₹45,000",
            "Previous Claims": "1",
            "Supporting Documents": "photo.jpg, police report",
            "Policy Validity": "2023-01-01 to 2023-12-31",
            "Incident Date": "2023-09-10",
            "Vehicle Make": "Tata",
        })
    }

    /// Minimal free-text claim
    pub fn free_text() -> &'static str {
        "Claim Amount: ₹1,000\nSupporting Documents: yes"
    }

    /// The line-oriented format a web form submits
    pub fn form_text() -> &'static str {
        "Policy Number: POL-2023-0042\n\
         Claimant Name: Ravi Kumar\n\
         Incident Date: 2023-04-02\n\
         Incident Time: 18:30\n\
         Claim Amount: ₹85,000\n\
         Supporting Documents: photos, police report\n\
         Police Report Filed: yes\n\
         Previous Claims: 0\n\
         Policy Validity: 2023-01-01 to 2023-12-31"
    }
}
