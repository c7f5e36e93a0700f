// Read side of the store. Every failure degrades to "no data" and is logged;
// nothing here returns an error.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::types::{RepoMetadata, TaskRecord};

/// Content hash of the raw tasks file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorpusDigest(String);

impl CorpusDigest {
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        CorpusDigest(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Tasks plus the digest of the bytes they were parsed from.
#[derive(Debug, Clone)]
pub struct LoadedCorpus {
    pub tasks: Vec<TaskRecord>,
    pub digest: CorpusDigest,
}

/// Best-effort load of a JSON array of tasks.
///
/// A missing or unreadable file, invalid JSON, or a non-array document all
/// yield an empty corpus. The digest covers whatever bytes were read (none
/// for a missing file).
pub fn load_corpus(path: &Path) -> LoadedCorpus {
    let bytes = match read_optional(path) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            debug!(path = %path.display(), "corpus_missing");
            Vec::new()
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "corpus_read_degraded");
            Vec::new()
        }
    };

    let digest = CorpusDigest::from_content(&bytes);
    let tasks = if bytes.is_empty() {
        Vec::new()
    } else {
        parse_tasks(path, &bytes)
    };

    LoadedCorpus { tasks, digest }
}

/// [`load_corpus`] without the digest.
pub fn load_tasks(path: &Path) -> Vec<TaskRecord> {
    load_corpus(path).tasks
}

fn parse_tasks(path: &Path, bytes: &[u8]) -> Vec<TaskRecord> {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Array(items)) => items.iter().map(TaskRecord::from_json).collect(),
        Ok(other) => {
            warn!(
                path = %path.display(),
                found = json_kind(&other),
                reason = "top level is not an array",
                "corpus_read_degraded"
            );
            Vec::new()
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "corpus_read_degraded");
            Vec::new()
        }
    }
}

/// Best-effort load of the metadata document.
pub fn load_metadata(path: &Path) -> Option<RepoMetadata> {
    let bytes = match read_optional(path) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return None,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "metadata_read_degraded");
            return None;
        }
    };

    match serde_json::from_slice::<Value>(&bytes) {
        Ok(value) => Some(RepoMetadata::from_json(&value)),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "metadata_read_degraded");
            None
        }
    }
}

fn read_optional(path: &Path) -> std::io::Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
