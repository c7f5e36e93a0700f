//! Deterministic task fingerprinting and corpus profiling.
//!
//! `task-provenance` derives a short, reproducible signature for every task
//! title (FNV-1a over padded trigrams and a coarse phonetic code, plus a
//! normalized-entropy uniqueness score) and aggregates a whole corpus into a
//! profile: summary statistics, a frequency ranking of fingerprints, and a
//! positional sample. All operations are deterministic. Identical inputs
//! always produce identical outputs, byte-for-byte.
//!
//! The core ([`text`], [`hash`], [`signature`], [`profile`]) is pure and
//! total. [`store`] is the file boundary that feeds it.
//!
//! ```
//! use task_provenance::profile::profile;
//! use task_provenance::types::TaskRecord;
//!
//! let tasks = vec![TaskRecord::new("x1", "Study AI")];
//! let p = profile(&tasks, None);
//!
//! assert_eq!(p.n_tasks, 1);
//! assert_eq!(p.sample_signatures[0].title_norm, "Study AI");
//! ```

pub mod hash;
pub mod profile;
pub mod signature;
pub mod store;
pub mod text;
pub mod types;
