use crate::signature::round4;
use crate::types::{Signature, UniquenessStats};

/// Average, minimum and maximum uniqueness score, each rounded to 4 places.
///
/// The sum runs left to right in corpus order. An empty corpus yields all
/// zeros.
pub fn uniqueness_stats(signatures: &[Signature]) -> UniquenessStats {
    let Some(first) = signatures.first() else {
        return UniquenessStats::default();
    };

    let mut sum = 0.0;
    let mut min = first.uniqueness_score;
    let mut max = first.uniqueness_score;

    for sig in signatures {
        let score = sig.uniqueness_score;
        sum += score;
        if score < min {
            min = score;
        }
        if score > max {
            max = score;
        }
    }

    UniquenessStats {
        avg: round4(sum / signatures.len() as f64),
        min: round4(min),
        max: round4(max),
    }
}
