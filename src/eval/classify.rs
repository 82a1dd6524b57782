//! True/false positive and false negative counts for one annotation run.
use std::path::Path;

use ahash::AHashSet;

use crate::error::{AnnostatError, Result};
use crate::eval::report::reference_mrna_count;
use crate::io::count_lines;
use crate::io::identity::IdentityRecord;

/// Predicted transcripts that were not matched to any reference transcript.
///
/// Every identity line stems from exactly one accepted tracking line, so the
/// difference of the two line counts is the number of unmatched predictions.
pub fn false_positives(tracking: &Path, identity: &Path) -> Result<usize> {
    let tracking_lines = count_lines(tracking)?;
    let identity_lines = count_lines(identity)?;
    tracking_lines.checked_sub(identity_lines).ok_or_else(|| AnnostatError::CountMismatch {
        path: identity.to_path_buf(),
        message: format!(
            "{} lines but {} has only {}",
            identity_lines,
            tracking.display(),
            tracking_lines
        ),
    })
}

/// Distinct reference transcripts hit by at least one prediction.
/// Partial and full matches to the same reference collapse into one.
pub fn true_positives(records: &[IdentityRecord]) -> usize {
    records
        .iter()
        .map(|r| r.ref_id.as_str())
        .collect::<AHashSet<_>>()
        .len()
}

/// Reference transcripts that no prediction was matched to. The total
/// comes from the `# Reference mRNAs` line of the `.stats` report.
pub fn false_negatives(stats: &Path, true_positives: usize) -> Result<usize> {
    let reference_total = reference_mrna_count(stats)?;
    reference_total.checked_sub(true_positives).ok_or_else(|| AnnostatError::CountMismatch {
        path: stats.to_path_buf(),
        message: format!(
            "{} distinct reference hits exceed the {} reference mRNAs",
            true_positives, reference_total
        ),
    })
}
