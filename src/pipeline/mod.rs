//! Pipeline module - the two end-to-end runs exposed on the command line

pub mod identity;
pub mod summarize;

pub use identity::run_identity;
pub use summarize::run_summarize;
