use serde::{Deserialize, Serialize};

use super::record::RecordId;

/// Per-record fingerprint and lexical diversity summary.
/// Field order is part of the serialized contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    pub id: Option<RecordId>,
    pub title_norm: String,
    /// Coarse phonetic reduction, at most 12 characters.
    pub phonetic: String,
    pub trigram_count: usize,
    /// Distinct trigrams; never exceeds `trigram_count`.
    pub trigram_uniques: usize,
    /// Normalized Shannon entropy in `[0, 1]`, rounded to 4 decimals.
    pub uniqueness_score: f64,
    /// Base-36 fingerprint, at most 12 characters of `[0-9a-z]`.
    pub signature: String,
}
