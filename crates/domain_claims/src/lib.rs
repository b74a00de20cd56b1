//! Claims Triage Domain
//!
//! This crate evaluates a single insurance claim by moving it through a
//! fixed sequence of stages, each adding one derived fact, and then
//! adjudicating the enriched record.
//!
//! # Pipeline
//!
//! ```text
//! Intake -> Documents -> Fraud -> Policy window -> Damage -> Decision
//! ```
//!
//! Every field read is recoverable: a missing or malformed value falls
//! back to a stage-local default, so [`process`] always returns a
//! [`Decision`].
//!
//! # Example
//!
//! ```
//! use domain_claims::{process, AdjudicationDecision};
//! use serde_json::json;
//!
//! let decision = process(json!({
//!     "Claimant Name": "Asha",
//!     "Claim Amount": "₹600,000",
//!     "Previous Claims": "4",
//!     "Supporting Documents": "none",
//!     "Policy Validity": "2023-01-01 to 2023-12-31",
//!     "Incident Date": "2023-06-15",
//! }));
//!
//! assert_eq!(decision.decision, AdjudicationDecision::Rejected);
//! assert!(decision.policy_matched());
//! ```

pub mod claim;
pub mod intake;
pub mod stage;
pub mod documents;
pub mod fraud;
pub mod policy_match;
pub mod damage;
pub mod adjudication;
pub mod pipeline;
pub mod parsed;
pub mod error;

pub use claim::{ClaimField, ClaimFields, ClaimRecord, DerivedFacts, Precedence};
pub use intake::{ClaimInput, IntakeNormalizer};
pub use stage::Stage;
pub use documents::DocumentVerifier;
pub use fraud::{FraudAssessment, FraudFactor, FraudScorer};
pub use policy_match::PolicyMatcher;
pub use damage::{DamageEstimate, DamageEstimator};
pub use adjudication::{AdjudicationDecision, Decision, DecisionSummarizer};
pub use pipeline::{process, Pipeline};
pub use parsed::Parsed;
pub use error::FieldError;
