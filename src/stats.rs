use std::path::Path;

use serde::Serialize;
use statrs::statistics::Statistics;

use crate::error::{AnnostatError, Result};
use crate::io::identity::{read_identity_file, IdentityRecord};

/// Summary of the identity percentages of one run.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct IdentityStats {
    pub mean: f64,
    pub median: f64,
    /// Number of alignments with exactly 100% identity
    pub perfect_hits: usize,
}

/// Mean, median and perfect-hit count of an identity file.
pub fn calculate_identity_stats(path: &Path) -> Result<IdentityStats> {
    let records = read_identity_file(path)?;
    identity_stats(&records).ok_or_else(|| AnnostatError::EmptyInput {
        path: path.to_path_buf(),
    })
}

/// Returns `None` for an empty slice, which has no mean or median.
pub fn identity_stats(records: &[IdentityRecord]) -> Option<IdentityStats> {
    if records.is_empty() {
        return None;
    }

    let values: Vec<f64> = records.iter().map(|r| r.identity).collect();
    let perfect_hits = values.iter().filter(|&&v| v == 100.0).count();

    Some(IdentityStats {
        mean: values.iter().mean(),
        median: median(values),
        perfect_hits,
    })
}

// statrs interpolates quantiles, this keeps the textbook middle value.
fn median(mut values: Vec<f64>) -> f64 {
    values.sort_unstable_by(|a, b| a.total_cmp(b));
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}
