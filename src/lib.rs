//! Quality statistics for gene annotation runs.
//!
//! The crate turns the outputs of cuffcompare (`.stats`, `.tracking`),
//! BUSCO (`short_summary.txt`) and a BLOSUM62 global protein alignment into
//! one summary row per annotation run.

pub mod align;
pub mod cli_main;
pub mod config;
pub mod error;
pub mod eval;
pub mod io;
pub mod pipeline;
pub mod stats;

pub use error::{AnnostatError, Result};
