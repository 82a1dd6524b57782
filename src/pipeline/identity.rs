use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

use crate::align::IdentityAligner;
use crate::config::IdentityConfig;
use crate::error::Result;
use crate::io::fasta::SequenceTable;
use crate::io::identity::{write_identity_file, IdentityRecord};
use crate::io::tracking::{read_matched_pairs, MatchedPair};

/// Align every accepted tracking pair.
///
/// Output order follows the tracking file. A pair whose id is missing from
/// either table aborts the whole computation, naming the tracking line.
pub fn compute_identities(
    tracking: &Path,
    pairs: &[MatchedPair],
    query: &SequenceTable,
    reference: &SequenceTable,
) -> Result<Vec<IdentityRecord>> {
    let mut aligner = IdentityAligner::new();
    let mut records = Vec::with_capacity(pairs.len());

    for (i, pair) in pairs.iter().enumerate() {
        let ref_seq = reference.resolve(&pair.ref_id, tracking, pair.line)?;
        let query_seq = query.resolve(&pair.query_id, tracking, pair.line)?;

        let result = aligner.align(ref_seq, query_seq);
        debug!(
            "line {}: {} vs {}: {} identical, score {}, identity {:.2}%",
            pair.line, pair.ref_id, pair.query_id, result.matches, result.score, result.identity
        );
        records.push(IdentityRecord {
            ref_id: pair.ref_id.clone(),
            query_id: pair.query_id.clone(),
            identity: result.identity,
        });

        if (i + 1) % 1_000 == 0 {
            info!("Aligned {} of {} pairs...", i + 1, pairs.len());
        }
    }

    Ok(records)
}

/// Run the pairwise identity generator end to end.
pub fn run_identity(config: &IdentityConfig) -> Result<usize> {
    let start_time = Instant::now();

    let query = SequenceTable::from_fasta(&config.query_fasta, "query")?;
    info!("Query length: {}", query.len());
    let reference = SequenceTable::from_fasta(&config.reference_fasta, "reference")?;
    info!("Reference length: {}", reference.len());

    let pairs = read_matched_pairs(&config.tracking)?;
    info!("{} tracking records with an accepted class code", pairs.len());

    let records = compute_identities(&config.tracking, &pairs, &query, &reference)?;
    write_identity_file(&records, &config.output)?;

    info!(
        "Wrote {} identity records to {} in {:.2}s",
        records.len(),
        config.output.display(),
        start_time.elapsed().as_secs_f32()
    );
    Ok(records.len())
}
