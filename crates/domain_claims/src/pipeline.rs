//! The triage pipeline driver
//!
//! ```text
//! intake -> document_verifier -> fraud_scorer -> policy_matcher -> damage_estimator -> decision
//! ```
//!
//! The stage list is data: [`Pipeline::standard`] builds the order above,
//! [`Pipeline::with_stages`] accepts any other order or subset.

use std::fmt;

use tracing::{debug, info_span};

use crate::adjudication::{Decision, DecisionSummarizer};
use crate::claim::ClaimRecord;
use crate::damage::DamageEstimator;
use crate::documents::DocumentVerifier;
use crate::fraud::FraudScorer;
use crate::intake::{ClaimInput, IntakeNormalizer};
use crate::policy_match::PolicyMatcher;
use crate::stage::Stage;

/// Runs a claim through intake, an ordered list of stages, and adjudication
pub struct Pipeline {
    intake: IntakeNormalizer,
    stages: Vec<Box<dyn Stage>>,
    summarizer: DecisionSummarizer,
}

impl Pipeline {
    /// The canonical stage order
    pub fn standard() -> Self {
        Self::with_stages(vec![
            Box::new(DocumentVerifier),
            Box::new(FraudScorer),
            Box::new(PolicyMatcher),
            Box::new(DamageEstimator),
        ])
    }

    pub fn with_stages(stages: Vec<Box<dyn Stage>>) -> Self {
        Self {
            intake: IntakeNormalizer,
            stages,
            summarizer: DecisionSummarizer,
        }
    }

    /// Names of every step in execution order, intake and adjudication included
    pub fn stage_names(&self) -> Vec<&'static str> {
        let mut names = Vec::with_capacity(self.stages.len() + 2);
        names.push(IntakeNormalizer::NAME);
        names.extend(self.stages.iter().map(|stage| stage.name()));
        names.push(DecisionSummarizer::NAME);
        names
    }

    /// Folds a record through the configured stages without adjudicating it
    pub fn run_stages(&self, record: ClaimRecord) -> ClaimRecord {
        self.stages.iter().fold(record, |record, stage| {
            debug!(stage = stage.name(), "Running stage");
            stage.apply(record)
        })
    }

    /// Processes one claim end to end. Always returns a decision.
    pub fn process(&self, input: impl Into<ClaimInput>) -> Decision {
        let span = info_span!("claim_pipeline");
        let _guard = span.enter();

        let record = self.intake.normalize(input.into());
        let record = self.run_stages(record);
        self.summarizer.summarize(record)
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stage_names())
            .finish()
    }
}

/// Processes a claim with the standard pipeline
pub fn process(input: impl Into<ClaimInput>) -> Decision {
    Pipeline::standard().process(input)
}
