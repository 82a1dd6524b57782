use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::config::OutputFormat;
use crate::error::{AnnostatError, Result};
use crate::eval::report::ComparisonReport;
use crate::eval::ExtendedMetrics;
use crate::io::format_float;
use crate::stats::IdentityStats;

pub const BASIC_HEADER: &str =
    "N_genes\tnt_sn\tnt_sp\texon_sn\texon_sp\tgene_sn\tgene_sp\tmean_identity\tmedian_identity\tPH";
pub const EXTENDED_COLUMNS: &str = "FP\tFN\tSC\tDU";

/// One row of the summary table: a single annotation run.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub run: String,
    pub n_genes: String,
    pub report: ComparisonReport,
    pub identity: IdentityStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended: Option<ExtendedMetrics>,
}

impl RunSummary {
    pub fn to_tsv_row(&self) -> String {
        let mut fields: Vec<String> = Vec::with_capacity(14);
        fields.push(self.n_genes.clone());
        fields.extend(self.report.values().iter().map(|v| v.to_string()));
        fields.push(format_float(self.identity.mean));
        fields.push(format_float(self.identity.median));
        fields.push(self.identity.perfect_hits.to_string());

        if let Some(ext) = &self.extended {
            fields.push(ext.false_positives.to_string());
            fields.push(ext.false_negatives.to_string());
            fields.push(format_float(ext.single_copy_ratio));
            fields.push(format_float(ext.duplicated_ratio));
        }

        fields.join("\t")
    }
}

pub fn header(extended: bool) -> String {
    if extended {
        format!("{}\t{}", BASIC_HEADER, EXTENDED_COLUMNS)
    } else {
        BASIC_HEADER.to_string()
    }
}

/// Write the summary table. Rows must all be complete before this is called.
pub fn write_summary(rows: &[RunSummary], extended: bool, format: OutputFormat, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| AnnostatError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    match format {
        OutputFormat::Tsv => {
            writeln!(writer, "{}", header(extended)).map_err(|e| AnnostatError::io(path, e))?;
            for row in rows {
                writeln!(writer, "{}", row.to_tsv_row()).map_err(|e| AnnostatError::io(path, e))?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, rows)?;
            writeln!(writer).map_err(|e| AnnostatError::io(path, e))?;
        }
    }

    writer.flush().map_err(|e| AnnostatError::io(path, e))?;
    Ok(())
}
