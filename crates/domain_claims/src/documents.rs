//! Document verification stage

use tracing::debug;

use crate::claim::{ClaimField, ClaimRecord, Precedence};
use crate::stage::{documents_missing, Stage};

/// Marks a claim as document-verified when the claimant listed anything
/// other than an explicit "no documents" value. The listed documents are
/// not inspected further.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentVerifier;

impl DocumentVerifier {
    pub const NAME: &'static str = "document_verifier";

    pub fn verify(&self, record: &ClaimRecord) -> bool {
        !documents_missing(record.field(ClaimField::SupportingDocuments, Precedence::FlatFirst))
    }
}

impl Stage for DocumentVerifier {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn apply(&self, mut record: ClaimRecord) -> ClaimRecord {
        let verified = self.verify(&record);
        debug!(stage = Self::NAME, documents_verified = verified, "Documents checked");
        record.record_documents_verified(verified);
        record
    }
}
