pub mod profile;
pub mod record;
pub mod signature;

pub use profile::{CorpusProfile, SignatureCount, UniquenessStats};
pub use record::{RecordId, RepoMetadata, TaskRecord};
pub use signature::Signature;
