use serde::{Deserialize, Serialize};

// Serializable, comparable, explicit defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilerConfig {
    /// Length cap of `top_signatures`.
    pub top_signatures: usize,
    /// Length cap of `sample_signatures`.
    pub sample_signatures: usize,
    /// Allow the per-record map to run on the rayon pool.
    pub parallel: bool,
    /// Corpora smaller than this are always mapped sequentially.
    pub parallel_threshold: usize,
}

impl ProfilerConfig {
    pub fn v0() -> Self {
        Self {
            top_signatures: 8,
            sample_signatures: 10,
            parallel: true,
            parallel_threshold: 256,
        }
    }

    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::v0()
        }
    }

    pub(crate) fn runs_parallel(&self, n: usize) -> bool {
        self.parallel && n >= self.parallel_threshold
    }
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        Self::v0()
    }
}
