use std::path::{Path, PathBuf};

pub const TASKS_FILE: &str = "tasks.json";
pub const METADATA_FILE: &str = "metadata.json";
pub const PROFILE_FILE: &str = "profile.json";
pub const SUMMARY_FILE: &str = "profile_summary.txt";
pub const MANIFEST_FILE: &str = "profile_manifest.json";

/// Every file the profile run touches. Nothing is resolved implicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilePaths {
    pub tasks: PathBuf,
    pub metadata: PathBuf,
    pub profile: PathBuf,
    pub summary: PathBuf,
    pub manifest: PathBuf,
}

impl ProfilePaths {
    /// Conventional file names under a single data directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            tasks: dir.join(TASKS_FILE),
            metadata: dir.join(METADATA_FILE),
            profile: dir.join(PROFILE_FILE),
            summary: dir.join(SUMMARY_FILE),
            manifest: dir.join(MANIFEST_FILE),
        }
    }
}
