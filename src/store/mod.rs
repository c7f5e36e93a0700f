//! File boundary around the profiler.
//!
//! The core never touches the filesystem; this module feeds it a corpus and
//! persists what it returns. Reads are best-effort, writes are atomic.

pub mod config;
pub mod corpus;
pub mod writer;

pub use config::ProfilePaths;
pub use corpus::{load_corpus, load_metadata, load_tasks, CorpusDigest, LoadedCorpus};
pub use writer::{
    generate_profile, render_summary, write_profile, ProfileManifest, ProfileRun, StoreError,
    PROFILE_FORMAT_VERSION,
};
