use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifier carried through from the source record untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    String(String),
    Number(serde_json::Number),
    Other(Value),
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::String(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        RecordId::String(value)
    }
}

/// A task as supplied by the external collaborator.
///
/// Only `id` and `title` are read; every other field of the stored task is
/// ignored. Both are optional so that partial records still profile.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaskRecord {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub title: Option<String>,
}

impl TaskRecord {
    pub fn new(id: impl Into<RecordId>, title: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            title: Some(title.into()),
        }
    }

    /// Lenient conversion from an arbitrary JSON element.
    ///
    /// Non-object elements become an empty record, a non-string `title` is
    /// dropped, and a `null` id counts as absent. Any other `id` value is kept
    /// as-is.
    pub fn from_json(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            return Self::default();
        };

        let id = match map.get("id") {
            Some(Value::String(s)) => Some(RecordId::String(s.clone())),
            Some(Value::Number(n)) => Some(RecordId::Number(n.clone())),
            None | Some(Value::Null) => None,
            Some(other) => Some(RecordId::Other(other.clone())),
        };

        let title = map
            .get("title")
            .and_then(Value::as_str)
            .map(str::to_string);

        Self { id, title }
    }

    /// The title with the empty-string default applied.
    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }
}

/// Optional repository metadata. Only `fingerprint` is consulted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RepoMetadata {
    #[serde(default)]
    pub fingerprint: Option<Value>,
}

impl RepoMetadata {
    pub fn with_fingerprint(fingerprint: impl Into<Value>) -> Self {
        Self {
            fingerprint: Some(fingerprint.into()),
        }
    }

    /// Reads `fingerprint` from a JSON object; any other document yields
    /// metadata without a fingerprint.
    pub fn from_json(value: &Value) -> Self {
        let fingerprint = value
            .as_object()
            .and_then(|map| map.get("fingerprint"))
            .cloned();

        Self { fingerprint }
    }
}
