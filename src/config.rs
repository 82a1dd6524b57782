//! Explicit run configuration, built from the command line.
use std::path::{Path, PathBuf};

use clap::ValueEnum;

pub const DEFAULT_LINEAGE: &str = "eutheria_odb10";
pub const STATS_SUFFIX: &str = ".stats";
pub const IDENTITY_SUFFIX: &str = ".identity";
pub const TRACKING_SUFFIX: &str = ".tracking";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Tsv,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Tsv => "tsv",
            OutputFormat::Json => "json",
        }
    }
}

/// Inputs of the pairwise identity generator.
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    pub tracking: PathBuf,
    pub query_fasta: PathBuf,
    pub reference_fasta: PathBuf,
    pub output: PathBuf,
}

/// BUSCO inputs that switch `summarize` to the extended table.
#[derive(Debug, Clone)]
pub struct CompletenessConfig {
    /// Directory holding one BUSCO output directory per run
    pub busco_dir: PathBuf,
    /// `short_summary` of BUSCO run on the reference proteome
    pub reference_summary: PathBuf,
    pub lineage: String,
}

impl CompletenessConfig {
    /// `<busco_dir>/<base_name>/run_<lineage>/short_summary.txt`
    pub fn run_summary(&self, base_name: &str) -> PathBuf {
        self.busco_dir
            .join(base_name)
            .join(format!("run_{}", self.lineage))
            .join("short_summary.txt")
    }
}

#[derive(Debug, Clone)]
pub struct SummarizeConfig {
    pub work_dir: PathBuf,
    pub completeness: Option<CompletenessConfig>,
    /// Overrides the output name derived from the report file names
    pub run_id: Option<String>,
    pub format: OutputFormat,
}

impl SummarizeConfig {
    pub fn basic(work_dir: &Path) -> Self {
        SummarizeConfig {
            work_dir: work_dir.to_path_buf(),
            completeness: None,
            run_id: None,
            format: OutputFormat::Tsv,
        }
    }

    pub fn is_extended(&self) -> bool {
        self.completeness.is_some()
    }
}

/// Run metadata encoded in a report file name such as `run_500_ont_1000.stats`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunName {
    /// File name up to the first `.`
    pub base_name: String,
    /// Second `_` token of the base name
    pub n_genes: String,
}

impl RunName {
    pub fn from_file_name(file_name: &str) -> Option<RunName> {
        let base_name = file_name.split('.').next()?;
        let n_genes = base_name.split('_').nth(1).filter(|t| !t.is_empty())?;
        Some(RunName {
            base_name: base_name.to_string(),
            n_genes: n_genes.to_string(),
        })
    }

    /// `<last>_<second last>` of the `_` tokens, e.g. flank length and technology.
    pub fn output_stem(&self) -> Option<String> {
        let tokens: Vec<&str> = self.base_name.split('_').collect();
        if tokens.len() < 2 {
            return None;
        }
        Some(format!("{}_{}", tokens[tokens.len() - 1], tokens[tokens.len() - 2]))
    }

    pub fn sibling(&self, work_dir: &Path, suffix: &str) -> PathBuf {
        work_dir.join(format!("{}{}", self.base_name, suffix))
    }
}
