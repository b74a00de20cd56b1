//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claim triage test suite.
//!
//! # Modules
//!
//! - `fixtures`: Ready-made claims for the reference scenarios
//! - `builders`: Builder for claim inputs in structured, nested, or free-text form
//! - `assertions`: Assertion helpers for decisions and derived facts
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
