use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::signature::Signature;

/// Repository-wide aggregate over a full corpus snapshot.
///
/// Downstream tooling keys off these exact field names:
/// - `n_tasks`
/// - `uniqueness.avg` / `uniqueness.min` / `uniqueness.max`
/// - `top_signatures[].sig` / `top_signatures[].count`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusProfile {
    pub repo_fingerprint: Option<Value>,
    pub n_tasks: usize,
    pub uniqueness: UniquenessStats,
    pub top_signatures: Vec<SignatureCount>,
    /// Positional prefix of the corpus, in input order.
    pub sample_signatures: Vec<Signature>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UniquenessStats {
    pub avg: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureCount {
    pub sig: String,
    pub count: usize,
}
