use std::collections::BTreeMap;

use crate::types::{Signature, SignatureCount};

/// Occurrences per fingerprint. BTreeMap keeps keys in ascending order.
pub fn signature_frequencies(signatures: &[Signature]) -> BTreeMap<&str, usize> {
    let mut freq = BTreeMap::new();
    for sig in signatures {
        *freq.entry(sig.signature.as_str()).or_insert(0) += 1;
    }
    freq
}

/// The `limit` most frequent fingerprints, ordered by (count desc, sig asc).
pub fn top_signatures(signatures: &[Signature], limit: usize) -> Vec<SignatureCount> {
    let mut ranked: Vec<SignatureCount> = signature_frequencies(signatures)
        .into_iter()
        .map(|(sig, count)| SignatureCount {
            sig: sig.to_string(),
            count,
        })
        .collect();

    // Stable sort over ascending keys leaves equal counts in lexical order.
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);

    debug_assert!(ranked.windows(2).all(|w| {
        let a = &w[0];
        let b = &w[1];
        a.count > b.count || (a.count == b.count && a.sig < b.sig)
    }));

    ranked
}
