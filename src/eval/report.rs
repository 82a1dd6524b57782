//! Parsing of cuffcompare `.stats` reports.
use std::io::BufRead;
use std::path::Path;

use serde::Serialize;
use tracing::warn;

use crate::error::{AnnostatError, Result};
use crate::io::open_text;

const REFERENCE_MRNAS_PREFIX: &str = "# Reference mRNAs";

/// Comparison level reported by cuffcompare
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Base,
    Exon,
    Transcript,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Base, Level::Exon, Level::Transcript];

    fn from_token(token: &str) -> Option<Level> {
        match token {
            "Base" => Some(Level::Base),
            "Exon" => Some(Level::Exon),
            "Transcript" => Some(Level::Transcript),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Level::Base => 0,
            Level::Exon => 1,
            Level::Transcript => 2,
        }
    }
}

/// Sensitivity and precision as written in the report.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LevelStats {
    pub sensitivity: String,
    pub precision: String,
}

impl Default for LevelStats {
    fn default() -> Self {
        LevelStats {
            sensitivity: "0".to_string(),
            precision: "0".to_string(),
        }
    }
}

/// Sn/Pr at base, exon and transcript level.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonReport {
    pub base: LevelStats,
    pub exon: LevelStats,
    pub transcript: LevelStats,
}

impl ComparisonReport {
    fn level_mut(&mut self, level: Level) -> &mut LevelStats {
        match level {
            Level::Base => &mut self.base,
            Level::Exon => &mut self.exon,
            Level::Transcript => &mut self.transcript,
        }
    }

    /// `[base_sn, base_pr, exon_sn, exon_pr, transcript_sn, transcript_pr]`
    pub fn values(&self) -> [&str; 6] {
        [
            &self.base.sensitivity,
            &self.base.precision,
            &self.exon.sensitivity,
            &self.exon.precision,
            &self.transcript.sensitivity,
            &self.transcript.precision,
        ]
    }
}

/// Parse the Sn/Pr rows of a cuffcompare stats file.
///
/// Only the first row of each level counts. Levels that never appear keep
/// the value `0`.
pub fn parse_report(path: &Path) -> Result<ComparisonReport> {
    let reader = open_text(path)?;
    let mut report = ComparisonReport::default();
    let mut seen = [false; 3];

    for (idx, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(|e| AnnostatError::io(path, e))?;
        if line.starts_with('#') || line.trim().is_empty() {
            continue;
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let level = match Level::from_token(tokens[0]) {
            Some(level) => level,
            None => continue,
        };
        if tokens.len() < 4 {
            return Err(AnnostatError::parse(
                path,
                idx + 1,
                format!("{:?} row has {} fields, expected at least 4", level, tokens.len()),
            ));
        }
        if seen[level.index()] {
            continue;
        }
        seen[level.index()] = true;

        let stats = report.level_mut(level);
        stats.sensitivity = tokens[2].to_string();
        stats.precision = tokens[3].to_string();

        if seen.iter().all(|&s| s) {
            break;
        }
    }

    for level in Level::ALL {
        if !seen[level.index()] {
            warn!("{}: no {:?} row, reporting 0", path.display(), level);
        }
    }

    Ok(report)
}

/// Total reference transcripts from the `# Reference mRNAs : N ...` line.
pub fn reference_mrna_count(path: &Path) -> Result<usize> {
    let reader = open_text(path)?;

    for (idx, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(|e| AnnostatError::io(path, e))?;
        if !line.starts_with(REFERENCE_MRNAS_PREFIX) {
            continue;
        }

        let token = line.split_whitespace().nth(4).ok_or_else(|| {
            AnnostatError::parse(path, idx + 1, "reference mRNA line has no count")
        })?;
        return token.parse::<usize>().map_err(|_| {
            AnnostatError::parse(path, idx + 1, format!("invalid reference mRNA count `{}`", token))
        });
    }

    Err(AnnostatError::MissingField {
        path: path.to_path_buf(),
        field: REFERENCE_MRNAS_PREFIX.trim_start_matches("# ").to_string(),
    })
}
