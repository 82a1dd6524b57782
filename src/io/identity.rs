use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

use crate::error::{AnnostatError, Result};
use crate::io::{format_float, open_text};

/// One aligned reference/query pair and its identity percentage.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityRecord {
    pub ref_id: String,
    pub query_id: String,
    pub identity: f64,
}

/// Read a `.identity` file: `<ref_id> <query_id> <identity%>` per line.
pub fn read_identity_file(path: &Path) -> Result<Vec<IdentityRecord>> {
    let reader = open_text(path)?;
    let mut records = Vec::new();

    for (idx, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(|e| AnnostatError::io(path, e))?;
        if line.trim().is_empty() {
            continue;
        }

        let cols: Vec<&str> = line.split_whitespace().collect();
        if cols.len() < 3 {
            return Err(AnnostatError::parse(
                path,
                idx + 1,
                format!("expected 3 columns, found {}", cols.len()),
            ));
        }
        let identity = cols[2].parse::<f64>().map_err(|_| {
            AnnostatError::parse(path, idx + 1, format!("invalid identity value `{}`", cols[2]))
        })?;
        if !identity.is_finite() {
            return Err(AnnostatError::parse(path, idx + 1, "identity must be a finite number"));
        }

        records.push(IdentityRecord {
            ref_id: cols[0].to_string(),
            query_id: cols[1].to_string(),
            identity,
        });
    }

    Ok(records)
}

/// Write identity records as tab-separated lines, no header.
pub fn write_identity_file(records: &[IdentityRecord], path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| AnnostatError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    for record in records {
        writeln!(
            writer,
            "{}\t{}\t{}",
            record.ref_id,
            record.query_id,
            format_float(record.identity)
        )
        .map_err(|e| AnnostatError::io(path, e))?;
    }
    writer.flush().map_err(|e| AnnostatError::io(path, e))?;

    Ok(())
}
