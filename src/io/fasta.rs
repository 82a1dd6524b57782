// src/io/fasta.rs
use std::path::{Path, PathBuf};

use ahash::AHashMap;
use bio::io::fasta;
use tracing::debug;

use crate::error::{AnnostatError, Result};
use crate::io::open_text;

/// Protein sequences keyed by FASTA record id (first word of the header).
#[derive(Debug, Default)]
pub struct SequenceTable {
    name: String,
    source: PathBuf,
    sequences: AHashMap<String, Vec<u8>>,
}

impl SequenceTable {
    pub fn new(name: &str, source: &Path) -> Self {
        SequenceTable {
            name: name.to_string(),
            source: source.to_path_buf(),
            sequences: AHashMap::new(),
        }
    }

    /// Load every record of a FASTA(.gz) file. Residues are uppercased.
    pub fn from_fasta(path: &Path, name: &str) -> Result<Self> {
        let reader = fasta::Reader::new(open_text(path)?);
        let mut table = SequenceTable::new(name, path);

        for (idx, result) in reader.records().enumerate() {
            let record = result.map_err(|e| AnnostatError::io(path, e))?;
            let seq = record.seq().to_ascii_uppercase();
            if let Some(bad) = seq.iter().find(|&&b| !(b.is_ascii_uppercase() || b == b'*')) {
                return Err(AnnostatError::parse(
                    path,
                    idx + 1,
                    format!("record `{}` contains invalid residue `{}`", record.id(), *bad as char),
                ));
            }
            if table.sequences.contains_key(record.id()) {
                return Err(AnnostatError::parse(
                    path,
                    idx + 1,
                    format!("duplicate sequence id `{}`", record.id()),
                ));
            }
            table.insert(record.id(), seq);
        }

        debug!("Loaded {} {} sequences from {}", table.len(), name, path.display());
        Ok(table)
    }

    pub fn insert(&mut self, id: &str, sequence: Vec<u8>) {
        self.sequences.insert(id.to_string(), sequence);
    }

    pub fn get(&self, id: &str) -> Option<&[u8]> {
        self.sequences.get(id).map(Vec::as_slice)
    }

    /// Look up an id cited at `line` of `tracking`, failing with `KeyNotFound`
    /// when the FASTA file has no such record.
    pub fn resolve(&self, id: &str, tracking: &Path, line: usize) -> Result<&[u8]> {
        self.get(id).ok_or_else(|| AnnostatError::KeyNotFound {
            path: tracking.to_path_buf(),
            line,
            id: id.to_string(),
            table: self.name.clone(),
            fasta: self.source.clone(),
        })
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }
}
