//! BUSCO completeness of a predicted proteome relative to the reference one.
use std::io::BufRead;
use std::path::Path;

use crate::error::{AnnostatError, Result};
use crate::io::open_text;

const SINGLE_MARKER: &str = "(S)";
const DUPLICATED_MARKER: &str = "(D)";

/// Complete single-copy and complete duplicated BUSCO counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuscoCounts {
    pub single_copy: usize,
    pub duplicated: usize,
}

/// Predicted counts divided by reference counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelativeCompleteness {
    pub single_copy: f64,
    pub duplicated: f64,
}

/// Read the `(S)` and `(D)` counts from a BUSCO `short_summary` file.
///
/// ```text
///     4104    Complete BUSCOs (C)
///     4047    Complete and single-copy BUSCOs (S)
///     57      Complete and duplicated BUSCOs (D)
/// ```
pub fn parse_busco_summary(path: &Path) -> Result<BuscoCounts> {
    let reader = open_text(path)?;
    let mut single_copy = None;
    let mut duplicated = None;

    for (idx, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(|e| AnnostatError::io(path, e))?;
        if line.contains(SINGLE_MARKER) {
            single_copy = Some(leading_count(path, idx + 1, &line)?);
        }
        if line.contains(DUPLICATED_MARKER) {
            duplicated = Some(leading_count(path, idx + 1, &line)?);
            break;
        }
    }

    let missing = |marker: &str| AnnostatError::MissingField {
        path: path.to_path_buf(),
        field: marker.to_string(),
    };
    Ok(BuscoCounts {
        single_copy: single_copy.ok_or_else(|| missing(SINGLE_MARKER))?,
        duplicated: duplicated.ok_or_else(|| missing(DUPLICATED_MARKER))?,
    })
}

fn leading_count(path: &Path, line_no: usize, line: &str) -> Result<usize> {
    let token = line.split_whitespace().next().unwrap_or_default();
    token.parse::<usize>().map_err(|_| {
        AnnostatError::parse(path, line_no, format!("expected a BUSCO count, found `{}`", token))
    })
}

/// Ratios of predicted to reference counts. `reference_summary` is the file
/// the reference counts were read from.
pub fn relative_completeness(
    predicted: &BuscoCounts,
    reference: &BuscoCounts,
    reference_summary: &Path,
) -> Result<RelativeCompleteness> {
    let ratio = |predicted: usize, reference: usize, category: &str| {
        if reference == 0 {
            return Err(AnnostatError::ZeroReference {
                path: reference_summary.to_path_buf(),
                category: category.to_string(),
            });
        }
        Ok(predicted as f64 / reference as f64)
    };
    Ok(RelativeCompleteness {
        single_copy: ratio(predicted.single_copy, reference.single_copy, "single-copy")?,
        duplicated: ratio(predicted.duplicated, reference.duplicated, "duplicated")?,
    })
}
