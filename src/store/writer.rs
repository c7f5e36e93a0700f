use std::fmt::Write as _;
use std::fs;
use std::io::Write as _;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use super::config::ProfilePaths;
use super::corpus::{load_corpus, load_metadata, CorpusDigest};
use crate::profile::CorpusProfiler;
use crate::types::CorpusProfile;

/// Bumped when the layout of the written artifacts changes.
pub const PROFILE_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Describes one profile run. Written last, after both artifacts are in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileManifest {
    pub profile_version: u32,
    pub corpus_digest: CorpusDigest,
    pub generated_at: DateTime<Utc>, // informational only
    pub n_tasks: usize,
    pub profile_file: String,
    pub summary_file: String,
}

#[derive(Debug, Clone)]
pub struct ProfileRun {
    pub profile: CorpusProfile,
    pub manifest: ProfileManifest,
}

/// Plain-text digest of a profile, one fact per line.
///
/// ```text
/// tasks: 3
/// uniqueness avg/min/max: 0.6667/0.0/1.0
/// 2vrhh3yn1czk: 2
/// ```
pub fn render_summary(profile: &CorpusProfile) -> String {
    let u = &profile.uniqueness;
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "tasks: {}", profile.n_tasks);
    let _ = writeln!(
        out,
        "uniqueness avg/min/max: {}/{}/{}",
        fmt_score(u.avg),
        fmt_score(u.min),
        fmt_score(u.max)
    );
    for entry in &profile.top_signatures {
        let _ = writeln!(out, "{}: {}", entry.sig, entry.count);
    }
    out
}

// Debug keeps the trailing ".0" on whole numbers.
fn fmt_score(x: f64) -> String {
    format!("{x:?}")
}

/// Write `profile.json`, the summary and the manifest.
///
/// Each file is written to a sibling temp file, synced, then renamed over
/// the target, so readers never observe a partial artifact.
pub fn write_profile(
    profile: &CorpusProfile,
    paths: &ProfilePaths,
    corpus_digest: CorpusDigest,
) -> Result<ProfileManifest, StoreError> {
    let mut profile_json = serde_json::to_vec_pretty(profile)?;
    profile_json.push(b'\n');
    write_atomic(&paths.profile, &profile_json)?;

    let summary = render_summary(profile);
    write_atomic(&paths.summary, summary.as_bytes())?;

    let manifest = ProfileManifest {
        profile_version: PROFILE_FORMAT_VERSION,
        corpus_digest,
        generated_at: Utc::now(),
        n_tasks: profile.n_tasks,
        profile_file: paths.profile.display().to_string(),
        summary_file: paths.summary.display().to_string(),
    };

    let manifest_json = serde_json::to_vec_pretty(&manifest)?;
    write_atomic(&paths.manifest, &manifest_json)?;

    info!(
        profile = %paths.profile.display(),
        n_tasks = profile.n_tasks,
        corpus_digest = manifest.corpus_digest.as_str(),
        "profile_written"
    );

    Ok(manifest)
}

/// Load, profile and persist in one call.
pub fn generate_profile(
    paths: &ProfilePaths,
    profiler: &CorpusProfiler,
) -> Result<ProfileRun, StoreError> {
    let corpus = load_corpus(&paths.tasks);
    let metadata = load_metadata(&paths.metadata);

    let profile = profiler.profile(&corpus.tasks, metadata.as_ref());
    let manifest = write_profile(&profile, paths, corpus.digest)?;

    Ok(ProfileRun { profile, manifest })
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    let result = (|| -> std::io::Result<()> {
        let mut f = fs::File::create(&temp_path)?;
        f.write_all(bytes)?;
        f.sync_all()?;
        drop(f);
        fs::rename(&temp_path, path)
    })();

    if let Err(err) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(err.into());
    }
    Ok(())
}
