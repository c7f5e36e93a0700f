use super::normalize::normalize;

pub const PHONETIC_MAX_LEN: usize = 12;

/// Replacement for every character outside `[a-z0-9]`.
pub const PHONETIC_SEPARATOR: char = '-';

/// Coarse reduction of a title to lowercase ASCII alphanumerics.
///
/// Anything that is not `a-z` or `0-9` after lowercasing (punctuation,
/// spaces, accented and non-Latin letters alike) becomes `-`, adjacent `-`
/// collapse into one, and the result is cut at [`PHONETIC_MAX_LEN`]
/// characters. Titles in non-Latin scripts therefore reduce to `"-"`; the
/// trigram component still tells them apart.
pub fn phonetic(raw: &str) -> String {
    let lowered = normalize(&raw.to_lowercase());

    let mut code = String::with_capacity(PHONETIC_MAX_LEN);
    let mut prev: Option<char> = None;

    for ch in lowered.chars() {
        let mapped = if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            ch
        } else {
            PHONETIC_SEPARATOR
        };

        if mapped == PHONETIC_SEPARATOR && prev == Some(PHONETIC_SEPARATOR) {
            continue;
        }

        // Output is pure ASCII, so byte length equals char count.
        code.push(mapped);
        prev = Some(mapped);

        if code.len() == PHONETIC_MAX_LEN {
            break;
        }
    }

    code
}
