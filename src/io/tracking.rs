use std::io::BufRead;
use std::path::Path;

use crate::error::{AnnostatError, Result};
use crate::io::open_text;

/// Class codes that relate a predicted transcript to a real reference match.
/// Every other code is counted as a false positive.
pub const ACCEPTED_CLASS_CODES: [&str; 3] = ["=", "c", "j"];

/// One line of a cuffcompare `.tracking` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingRecord {
    pub class_code: String,
    pub ref_compound: String,
    pub query_compound: String,
}

impl TrackingRecord {
    /// Parse a whitespace-delimited tracking line.
    pub fn parse(line: &str) -> std::result::Result<Self, String> {
        let cols: Vec<&str> = line.split_whitespace().collect();
        if cols.len() < 5 {
            return Err(format!("expected at least 5 columns, found {}", cols.len()));
        }
        Ok(TrackingRecord {
            ref_compound: cols[2].to_string(),
            class_code: cols[3].to_string(),
            query_compound: cols[4].to_string(),
        })
    }

    pub fn is_match(&self) -> bool {
        ACCEPTED_CLASS_CODES.contains(&self.class_code.as_str())
    }

    pub fn ref_id(&self) -> std::result::Result<&str, String> {
        compound_id(&self.ref_compound)
    }

    pub fn query_id(&self) -> std::result::Result<&str, String> {
        compound_id(&self.query_compound)
    }
}

/// Second `|`-delimited field of a compound id such as `q1:gene|transcript|...`.
fn compound_id(compound: &str) -> std::result::Result<&str, String> {
    compound
        .split('|')
        .nth(1)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| format!("compound id `{}` has no second `|` field", compound))
}

/// A tracking record with its resolved ids and source line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedPair {
    pub line: usize,
    pub ref_id: String,
    pub query_id: String,
}

/// Read a tracking file and return the pairs whose class code is accepted.
pub fn read_matched_pairs(path: &Path) -> Result<Vec<MatchedPair>> {
    let reader = open_text(path)?;
    let mut pairs = Vec::new();

    for (idx, line_result) in reader.lines().enumerate() {
        let line = line_result.map_err(|e| AnnostatError::io(path, e))?;
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let record = TrackingRecord::parse(&line).map_err(|msg| AnnostatError::parse(path, line_no, msg))?;
        if !record.is_match() {
            continue;
        }

        let ref_id = record.ref_id().map_err(|msg| AnnostatError::parse(path, line_no, msg))?;
        let query_id = record.query_id().map_err(|msg| AnnostatError::parse(path, line_no, msg))?;
        pairs.push(MatchedPair {
            line: line_no,
            ref_id: ref_id.to_string(),
            query_id: query_id.to_string(),
        });
    }

    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const LINE: &str = "TCONS_00000001\tXLOC_000001\tGENE1|ENST0001\t=\tq1:GENE1.g|ENSP0001.p1|1|0.000000|0.000000|0.000000|1200";

    #[test]
    fn test_parse_tracking_line() {
        let record = TrackingRecord::parse(LINE).unwrap();
        assert_eq!(record.class_code, "=");
        assert!(record.is_match());
        assert_eq!(record.ref_id().unwrap(), "ENST0001");
        assert_eq!(record.query_id().unwrap(), "ENSP0001.p1");
    }

    #[test]
    fn test_unaccepted_codes_are_not_matches() {
        for code in ["u", "x", "i", "p", "o", "e", "s", "r", "."] {
            let line = format!("T1 X1 G|R1 {} q1:G|Q1|1", code);
            assert!(!TrackingRecord::parse(&line).unwrap().is_match(), "code {}", code);
        }
    }

    #[test]
    fn test_read_matched_pairs_skips_unmatched() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "T1\tX1\tG1|R1\t=\tq1:G1|Q1|1").unwrap();
        writeln!(file, "T2\tX2\t-\tu\tq1:G2|Q2|1").unwrap();
        writeln!(file, "T3\tX3\tG3|R3\tj\tq1:G3|Q3|1").unwrap();

        let pairs = read_matched_pairs(file.path()).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].ref_id, "R1");
        assert_eq!(pairs[1].query_id, "Q3");
        assert_eq!(pairs[1].line, 3);
    }

    #[test]
    fn test_short_line_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "T1\tX1\tG1|R1").unwrap();
        match read_matched_pairs(file.path()) {
            Err(AnnostatError::Parse { line, .. }) => assert_eq!(line, 1),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_accepted_code_without_compound_field_is_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "T1\tX1\t-\tc\tq1:G1|Q1|1").unwrap();
        match read_matched_pairs(file.path()) {
            Err(AnnostatError::Parse { line, message, .. }) => {
                assert_eq!(line, 1);
                assert_eq!(message, "compound id `-` has no second `|` field");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
