use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::config::{
    CompletenessConfig, RunName, SummarizeConfig, IDENTITY_SUFFIX, STATS_SUFFIX, TRACKING_SUFFIX,
};
use crate::error::{AnnostatError, Result};
use crate::eval::completeness::{parse_busco_summary, BuscoCounts};
use crate::eval::report::parse_report;
use crate::eval::{evaluate_run, RunFiles};
use crate::io::identity::read_identity_file;
use crate::io::summary::{write_summary, RunSummary};
use crate::stats::identity_stats;

/// A cuffcompare report found in the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFile {
    pub path: PathBuf,
    pub run: RunName,
}

/// List the `.stats` reports of a directory, sorted by file name.
pub fn find_reports(work_dir: &Path) -> Result<Vec<ReportFile>> {
    let entries = fs::read_dir(work_dir).map_err(|e| AnnostatError::io(work_dir, e))?;
    let mut names = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| AnnostatError::io(work_dir, e))?;
        let file_name = entry.file_name();
        match file_name.to_str() {
            Some(name) if name.ends_with(STATS_SUFFIX) => names.push(name.to_string()),
            Some(_) => {}
            None => warn!("Skipping non UTF-8 file name {:?}", file_name),
        }
    }
    names.sort();

    names
        .into_iter()
        .map(|name| {
            let path = work_dir.join(&name);
            let run = RunName::from_file_name(&name).ok_or_else(|| AnnostatError::MissingField {
                path: path.clone(),
                field: "gene count token".to_string(),
            })?;
            Ok(ReportFile { path, run })
        })
        .collect()
}

/// Build the summary row of one run.
pub fn summarize_run(
    work_dir: &Path,
    report: &ReportFile,
    completeness: Option<(&CompletenessConfig, &BuscoCounts)>,
) -> Result<RunSummary> {
    let comparison = parse_report(&report.path)?;

    let identity_path = report.run.sibling(work_dir, IDENTITY_SUFFIX);
    let identity_records = read_identity_file(&identity_path)?;
    let identity = identity_stats(&identity_records).ok_or_else(|| AnnostatError::EmptyInput {
        path: identity_path.clone(),
    })?;

    let extended = match completeness {
        Some((config, reference_busco)) => {
            let tracking_path = report.run.sibling(work_dir, TRACKING_SUFFIX);
            let busco_path = config.run_summary(&report.run.base_name);
            let files = RunFiles {
                stats: &report.path,
                tracking: &tracking_path,
                identity: &identity_path,
                busco_summary: &busco_path,
                reference_summary: &config.reference_summary,
            };
            Some(evaluate_run(files, &identity_records, reference_busco)?)
        }
        None => None,
    };

    Ok(RunSummary {
        run: report.run.base_name.clone(),
        n_genes: report.run.n_genes.clone(),
        report: comparison,
        identity,
        extended,
    })
}

/// Where the summary table goes.
///
/// `--run-id` wins. Otherwise the basic table is `summary.<ext>` and the
/// extended one is named after the trailing tokens of the first report.
pub fn output_path(config: &SummarizeConfig, reports: &[ReportFile]) -> Result<PathBuf> {
    let ext = config.format.extension();
    if let Some(run_id) = &config.run_id {
        return Ok(config.work_dir.join(format!("{}.{}", run_id, ext)));
    }
    if !config.is_extended() {
        return Ok(config.work_dir.join(format!("summary.{}", ext)));
    }

    let first = reports.first().ok_or_else(|| AnnostatError::EmptyInput {
        path: config.work_dir.clone(),
    })?;
    let stem = first.run.output_stem().ok_or_else(|| AnnostatError::MissingField {
        path: first.path.clone(),
        field: "output name tokens (pass --run-id)".to_string(),
    })?;
    Ok(config.work_dir.join(format!("{}.{}", stem, ext)))
}

/// Outcome of a `summarize` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryOutcome {
    pub output: PathBuf,
    pub rows: usize,
}

/// Collapse every run in the working directory into one table.
///
/// All rows are computed before the output file is created, so a failing
/// run leaves no partial table behind.
pub fn run_summarize(config: &SummarizeConfig) -> Result<SummaryOutcome> {
    let start_time = Instant::now();
    let reports = find_reports(&config.work_dir)?;
    info!("Found {} reports in {}", reports.len(), config.work_dir.display());
    if reports.is_empty() {
        warn!("No {} files in {}", STATS_SUFFIX, config.work_dir.display());
    }

    let reference_busco = match &config.completeness {
        Some(completeness) => {
            let counts = parse_busco_summary(&completeness.reference_summary)?;
            info!(
                "Reference BUSCO: {} single-copy, {} duplicated",
                counts.single_copy, counts.duplicated
            );
            Some((completeness, counts))
        }
        None => None,
    };

    let mut rows = Vec::with_capacity(reports.len());
    for report in &reports {
        debug!("Summarizing {}", report.path.display());
        let completeness = reference_busco.as_ref().map(|(config, counts)| (*config, counts));
        rows.push(summarize_run(&config.work_dir, report, completeness)?);
    }

    let output = output_path(config, &reports)?;
    write_summary(&rows, config.is_extended(), config.format, &output)?;

    info!(
        "Wrote {} rows to {} in {:.2}s",
        rows.len(),
        output.display(),
        start_time.elapsed().as_secs_f32()
    );
    Ok(SummaryOutcome {
        output,
        rows: rows.len(),
    })
}
