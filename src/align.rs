//! Global protein alignment used to score predicted against reference proteins.
use bio::alignment::pairwise::Aligner;
use bio::alignment::AlignmentOperation;
use bio::scores::blosum62;

/// All scores are doubled so the half-point gap extension stays integral.
const SCALE: i32 = 2;
/// Cost of the first gap residue (-10 before scaling).
const GAP_FIRST: i32 = -10 * SCALE;
/// Cost of each further gap residue (-0.5 before scaling).
const GAP_EXTEND: i32 = -1;
// bio charges gap_open + len * gap_extend for a gap of length len.
const GAP_OPEN: i32 = GAP_FIRST - GAP_EXTEND;

type ScoreFn = fn(u8, u8) -> i32;

fn scaled_blosum62(a: u8, b: u8) -> i32 {
    blosum62(a, b) * SCALE
}

/// Outcome of aligning one reference/query protein pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairIdentity {
    /// Identical aligned residue pairs
    pub matches: usize,
    /// Alignment score in BLOSUM62 units
    pub score: f64,
    /// `matches` over the longer sequence length, 0-100
    pub identity: f64,
}

/// Reusable BLOSUM62 global aligner (gap open -10, gap extend -0.5).
pub struct IdentityAligner {
    aligner: Aligner<ScoreFn>,
}

impl Default for IdentityAligner {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityAligner {
    pub fn new() -> Self {
        IdentityAligner {
            aligner: Aligner::with_capacity(1024, 1024, GAP_OPEN, GAP_EXTEND, scaled_blosum62 as ScoreFn),
        }
    }

    /// Align two uppercase protein sequences globally.
    ///
    /// An empty sequence has no identical residues and yields identity 0.
    pub fn align(&mut self, reference: &[u8], query: &[u8]) -> PairIdentity {
        let longest = reference.len().max(query.len());
        if reference.is_empty() || query.is_empty() {
            return PairIdentity {
                matches: 0,
                score: 0.0,
                identity: 0.0,
            };
        }

        let alignment = self.aligner.global(reference, query);
        let matches = alignment
            .operations
            .iter()
            .filter(|op| matches!(op, AlignmentOperation::Match))
            .count();

        PairIdentity {
            matches,
            score: alignment.score as f64 / SCALE as f64,
            identity: matches as f64 / longest as f64 * 100.0,
        }
    }
}
