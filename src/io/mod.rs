//! Readers and writers for the files exchanged with cuffcompare, BUSCO and
//! the summary consumers.

pub mod fasta;
pub mod identity;
pub mod summary;
pub mod tracking;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::error::{AnnostatError, Result};

/// Open a text file for line-oriented reading, handles gzipped files automatically
pub fn open_text(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path).map_err(|e| AnnostatError::io(path, e))?;
    if path.extension().map_or(false, |ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Number of lines in a file, a trailing line without a newline included.
pub fn count_lines(path: &Path) -> Result<usize> {
    let reader = open_text(path)?;
    let mut count = 0;
    for line in reader.lines() {
        line.map_err(|e| AnnostatError::io(path, e))?;
        count += 1;
    }
    Ok(count)
}

/// Shortest round-trip text for a float, integral values keep a `.0` suffix.
pub fn format_float(value: f64) -> String {
    format!("{:?}", value)
}
