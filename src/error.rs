//! Error type shared by every parser, aggregator and pipeline in the crate.
use std::io;
use std::path::{Path, PathBuf};

/// Errors that abort an `identity` or `summarize` run.
#[derive(thiserror::Error, Debug)]
pub enum AnnostatError {
    /// Opening, reading or writing a file failed (includes missing inputs).
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A line did not have the expected shape.
    #[error("{}:{line}: {message}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },
    /// A file that must contain records was empty.
    #[error("{}: no records found", .path.display())]
    EmptyInput { path: PathBuf },
    /// An annotation line the computation depends on is absent.
    #[error("{}: missing field `{field}`", .path.display())]
    MissingField { path: PathBuf, field: String },
    /// A reference BUSCO count used as a denominator is zero.
    #[error("{}: reference BUSCO count for `{category}` is zero", .path.display())]
    ZeroReference { path: PathBuf, category: String },
    /// A sequence id cited by a tracking line is absent from a FASTA file.
    #[error(
        "{}:{line}: sequence `{id}` not found in {table} sequences ({})",
        .path.display(),
        .fasta.display()
    )]
    KeyNotFound {
        path: PathBuf,
        line: usize,
        id: String,
        table: String,
        fasta: PathBuf,
    },
    /// Two files that must agree line-for-line do not.
    #[error("{}: inconsistent counts: {message}", .path.display())]
    CountMismatch { path: PathBuf, message: String },
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AnnostatError>;

impl AnnostatError {
    pub fn io(path: &Path, source: io::Error) -> Self {
        AnnostatError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn parse(path: &Path, line: usize, message: impl Into<String>) -> Self {
        AnnostatError::Parse {
            path: path.to_path_buf(),
            line,
            message: message.into(),
        }
    }
}
