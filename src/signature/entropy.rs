use std::collections::HashMap;

use crate::hash::FnvBuildHasher;

/// Occurrence counts per distinct trigram, in first-occurrence order.
///
/// The order fixes the summation order of the entropy, which keeps the score
/// bit-stable across runs.
pub fn trigram_frequencies<S: AsRef<str>>(trigrams: &[S]) -> Vec<(&str, usize)> {
    let mut index: HashMap<&str, usize, FnvBuildHasher> = HashMap::default();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for trigram in trigrams {
        let key = trigram.as_ref();
        match index.get(key) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                index.insert(key, counts.len());
                counts.push((key, 1));
            }
        }
    }
    counts
}

/// Shannon entropy in bits of a frequency distribution summing to `total`.
pub fn shannon_entropy(counts: impl IntoIterator<Item = usize>, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    let mut h = 0.0;
    for count in counts {
        let p = count as f64 / total;
        h -= p * p.log2();
    }
    h
}

/// Entropy of the trigram distribution divided by its maximum for the sample
/// size, rounded with [`round4`].
///
/// A single trigram is measured against `Hmax = 1.0`; an empty sequence
/// scores `0.0`.
pub fn uniqueness_score<S: AsRef<str>>(trigrams: &[S]) -> f64 {
    let frequencies = trigram_frequencies(trigrams);
    score_from_frequencies(&frequencies, trigrams.len())
}

pub(crate) fn score_from_frequencies(frequencies: &[(&str, usize)], total: usize) -> f64 {
    let h = shannon_entropy(frequencies.iter().map(|(_, count)| *count), total);
    let h_max = if total > 1 { (total as f64).log2() } else { 1.0 };
    let ratio = if h_max > 0.0 { h / h_max } else { 0.0 };

    let score = round4(ratio);
    debug_assert!((0.0..=1.0).contains(&score), "score {score} out of range [0.0, 1.0]");
    score
}

/// Round to 4 decimal places, ties to even.
///
/// `round4(0.03125) == 0.0312` and `round4(0.09375) == 0.0938`.
pub fn round4(x: f64) -> f64 {
    (x * 10_000.0).round_ties_even() / 10_000.0
}
