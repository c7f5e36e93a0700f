/// Padding added on both sides before windowing, so word edges form trigrams.
pub const TRIGRAM_PAD: &str = "  ";

/// Sliding 3-character windows over the padded text, duplicates included.
///
/// Windows are taken over Unicode scalar values, not bytes. For non-empty
/// input the result has exactly `s.chars().count() + 2` entries; the order is
/// significant to the signature fold and must be kept.
pub fn trigrams(normalized: &str) -> Vec<String> {
    if normalized.is_empty() {
        return Vec::new();
    }

    let padded: Vec<char> = TRIGRAM_PAD
        .chars()
        .chain(normalized.chars())
        .chain(TRIGRAM_PAD.chars())
        .collect();

    padded
        .windows(3)
        .map(|window| window.iter().collect())
        .collect()
}
