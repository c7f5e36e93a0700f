pub mod config;
pub mod ranking;
pub mod stats;

use std::time::Instant;

use rayon::prelude::*;
use tracing::{info, Level};

use crate::signature::build_signature;
use crate::types::{CorpusProfile, RepoMetadata, Signature, TaskRecord};
pub use config::ProfilerConfig;
pub use ranking::{signature_frequencies, top_signatures};
pub use stats::uniqueness_stats;

/// Maps [`build_signature`] over a corpus and reduces the result.
#[derive(Debug, Clone, Default)]
pub struct CorpusProfiler {
    config: ProfilerConfig,
}

impl CorpusProfiler {
    pub fn new(config: ProfilerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProfilerConfig {
        &self.config
    }

    /// Signatures for every record, in corpus order.
    ///
    /// The parallel path uses an indexed iterator, so `collect` restores
    /// input order regardless of scheduling.
    pub fn signatures(&self, tasks: &[TaskRecord]) -> Vec<Signature> {
        if self.config.runs_parallel(tasks.len()) {
            tasks.par_iter().map(build_signature).collect()
        } else {
            tasks.iter().map(build_signature).collect()
        }
    }

    pub fn profile(&self, tasks: &[TaskRecord], metadata: Option<&RepoMetadata>) -> CorpusProfile {
        let start = Instant::now();
        let parallel = self.config.runs_parallel(tasks.len());

        let span = tracing::span!(Level::INFO, "profile.corpus", n_tasks = tasks.len());
        let _guard = span.enter();

        // 1. Map
        let sigs = self.signatures(tasks);

        // 2. Reduce (sequential over the ordered result)
        let uniqueness = uniqueness_stats(&sigs);
        let top = top_signatures(&sigs, self.config.top_signatures);
        let distinct_signatures = signature_frequencies(&sigs).len();

        let repo_fingerprint = metadata.and_then(|m| m.fingerprint.clone());

        let n_tasks = sigs.len();
        let mut sample = sigs;
        sample.truncate(self.config.sample_signatures);

        info!(
            n_tasks,
            distinct_signatures,
            parallel,
            elapsed_micros = start.elapsed().as_micros(),
            "profile_success"
        );

        CorpusProfile {
            repo_fingerprint,
            n_tasks,
            uniqueness,
            top_signatures: top,
            sample_signatures: sample,
        }
    }
}

/// Profile a corpus with [`ProfilerConfig::v0`].
pub fn profile(tasks: &[TaskRecord], metadata: Option<&RepoMetadata>) -> CorpusProfile {
    CorpusProfiler::default().profile(tasks, metadata)
}
