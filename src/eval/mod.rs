//! Evaluation module - cuffcompare and BUSCO derived metrics

pub mod classify;
pub mod completeness;
pub mod report;

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::io::identity::IdentityRecord;
use classify::{false_negatives, false_positives, true_positives};
use completeness::{parse_busco_summary, relative_completeness, BuscoCounts};

/// Metrics only the extended summary carries.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ExtendedMetrics {
    pub false_positives: usize,
    pub false_negatives: usize,
    pub single_copy_ratio: f64,
    pub duplicated_ratio: f64,
}

/// Files describing one run for the extended evaluation.
#[derive(Debug, Clone, Copy)]
pub struct RunFiles<'a> {
    pub stats: &'a Path,
    pub tracking: &'a Path,
    pub identity: &'a Path,
    pub busco_summary: &'a Path,
    pub reference_summary: &'a Path,
}

/// Compute FP, FN and relative BUSCO completeness for one run
pub fn evaluate_run(
    files: RunFiles<'_>,
    identity_records: &[IdentityRecord],
    reference_busco: &BuscoCounts,
) -> Result<ExtendedMetrics> {
    let fp = false_positives(files.tracking, files.identity)?;

    let tp = true_positives(identity_records);
    let fn_ = false_negatives(files.stats, tp)?;
    debug!("{}: TP={} FP={} FN={}", files.stats.display(), tp, fp, fn_);

    let predicted_busco = parse_busco_summary(files.busco_summary)?;
    let completeness = relative_completeness(&predicted_busco, reference_busco, files.reference_summary)?;

    Ok(ExtendedMetrics {
        false_positives: fp,
        false_negatives: fn_,
        single_copy_ratio: completeness.single_copy,
        duplicated_ratio: completeness.duplicated,
    })
}
