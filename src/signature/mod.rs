pub mod entropy;

use tracing::trace;

use crate::hash::{fnv1a64, to_base36};
use crate::text::{normalize, phonetic, trigrams};
use crate::types::{Signature, TaskRecord};
pub use entropy::{round4, shannon_entropy, trigram_frequencies, uniqueness_score};

/// Maximum length of the base-36 fingerprint.
pub const FINGERPRINT_LEN: usize = 12;

/// The 64-bit intermediates behind a fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureParts {
    pub phonetic_hash: u64,
    pub trigram_hash: u64,
    /// `phonetic_hash ^ trigram_hash`
    pub combined: u64,
}

/// XOR-fold of the FNV-1a hash of every trigram, left to right, from 0.
///
/// Duplicates are NOT removed: a trigram that occurs an even number of times
/// cancels out of the result.
pub fn trigram_hash<S: AsRef<str>>(trigrams: &[S]) -> u64 {
    trigrams
        .iter()
        .fold(0u64, |acc, trigram| acc ^ fnv1a64(trigram.as_ref()))
}

/// First [`FINGERPRINT_LEN`] base-36 digits of `combined`, unpadded.
pub fn fingerprint(combined: u64) -> String {
    let mut encoded = to_base36(combined);
    encoded.truncate(FINGERPRINT_LEN);
    encoded
}

/// Hash intermediates for a record, without building the full signature.
pub fn signature_parts(record: &TaskRecord) -> SignatureParts {
    let title_norm = normalize(record.title_or_empty());
    let trigs = trigrams(&title_norm);
    let phon = phonetic(&title_norm);
    parts_of(&phon, &trigs)
}

fn parts_of(phon: &str, trigs: &[String]) -> SignatureParts {
    let phonetic_hash = fnv1a64(phon);
    let trigram_hash = trigram_hash(trigs);
    SignatureParts {
        phonetic_hash,
        trigram_hash,
        combined: phonetic_hash ^ trigram_hash,
    }
}

/// Derive the signature of one record.
///
/// Total: a missing or non-string title is profiled as the empty string.
pub fn build_signature(record: &TaskRecord) -> Signature {
    let title_norm = normalize(record.title_or_empty());
    let trigs = trigrams(&title_norm);
    // phonetic() re-normalizes; harmless on already-normalized text.
    let phon = phonetic(&title_norm);

    let parts = parts_of(&phon, &trigs);
    let signature = fingerprint(parts.combined);

    let frequencies = trigram_frequencies(&trigs);
    let trigram_uniques = frequencies.len();
    let uniqueness_score = entropy::score_from_frequencies(&frequencies, trigs.len());

    trace!(id = ?record.id, signature = %signature, uniqueness_score, "signature_built");

    Signature {
        id: record.id.clone(),
        title_norm,
        phonetic: phon,
        trigram_count: trigs.len(),
        trigram_uniques,
        uniqueness_score,
        signature,
    }
}
