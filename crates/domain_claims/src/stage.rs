//! The pipeline stage seam

use crate::claim::ClaimRecord;

/// One enrichment step of the triage pipeline.
///
/// A stage takes ownership of the working record, adds its derived facts,
/// and hands the record back. Stages keep no state between claims.
pub trait Stage: Send + Sync {
    /// Stable identifier used in logs and diagnostics
    fn name(&self) -> &'static str;

    fn apply(&self, record: ClaimRecord) -> ClaimRecord;
}

/// Supporting-document values that count as "nothing supplied"
const NO_DOCUMENTS: [&str; 4] = ["", "none", "no", "false"];

/// True when a `Supporting Documents` value means no documents were given.
///
/// Shared by the document verifier and the fraud scorer so both stages
/// normalize the field identically.
pub fn documents_missing(raw: Option<&str>) -> bool {
    let normalized = raw.unwrap_or_default().trim().to_lowercase();
    NO_DOCUMENTS.contains(&normalized.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documents_missing_values() {
        assert!(documents_missing(None));
        assert!(documents_missing(Some("")));
        assert!(documents_missing(Some("   ")));
        assert!(documents_missing(Some("None")));
        assert!(documents_missing(Some(" NO ")));
        assert!(documents_missing(Some("False")));
    }

    #[test]
    fn test_documents_present_values() {
        assert!(!documents_missing(Some("photo.jpg")));
        assert!(!documents_missing(Some("yes")));
        assert!(!documents_missing(Some("n/a")));
        assert!(!documents_missing(Some("none, pending")));
    }
}
