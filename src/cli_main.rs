use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{CompletenessConfig, IdentityConfig, OutputFormat, SummarizeConfig, DEFAULT_LINEAGE};

#[derive(Parser, Debug)]
#[command(name = "annostat", version, about = "Collapse gene annotation QC statistics into per-run summaries", long_about = None)]
pub struct Cli {
    /// Log debug messages
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Align matched protein pairs from a cuffcompare tracking file and report % identity
    Identity {
        /// cuffcompare .tracking file
        tracking: PathBuf,

        /// Query (predicted) protein FASTA(.gz)
        query: PathBuf,

        /// Reference protein FASTA(.gz)
        reference: PathBuf,

        /// Output .identity file
        output: PathBuf,
    },

    /// Collapse the .stats/.identity files of a directory into one table
    Summarize {
        /// Directory with <run>.stats, <run>.identity and <run>.tracking files
        work_dir: PathBuf,

        /// Directory with one BUSCO output directory per run (enables FP/FN/SC/DU)
        #[arg(requires = "ref_busco")]
        busco_dir: Option<PathBuf>,

        /// BUSCO short_summary of the reference proteome
        #[arg(requires = "busco_dir")]
        ref_busco: Option<PathBuf>,

        /// BUSCO lineage dataset the runs used
        #[arg(long, default_value = DEFAULT_LINEAGE)]
        lineage: String,

        /// Name of the output table instead of deriving it from the report names
        #[arg(long)]
        run_id: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Tsv)]
        format: OutputFormat,
    },
}

impl Commands {
    pub fn identity_config(tracking: PathBuf, query: PathBuf, reference: PathBuf, output: PathBuf) -> IdentityConfig {
        IdentityConfig {
            tracking,
            query_fasta: query,
            reference_fasta: reference,
            output,
        }
    }

    pub fn summarize_config(
        work_dir: PathBuf,
        busco_dir: Option<PathBuf>,
        ref_busco: Option<PathBuf>,
        lineage: String,
        run_id: Option<String>,
        format: OutputFormat,
    ) -> SummarizeConfig {
        let completeness = match (busco_dir, ref_busco) {
            (Some(busco_dir), Some(reference_summary)) => Some(CompletenessConfig {
                busco_dir,
                reference_summary,
                lineage,
            }),
            _ => None,
        };
        SummarizeConfig {
            work_dir,
            completeness,
            run_id,
            format,
        }
    }
}
