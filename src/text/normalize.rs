use unicode_normalization::UnicodeNormalization;

/// Characters treated as a generic word separator.
///
/// Unicode `White_Space` plus the C0 information separators (U+001C..=U+001F),
/// which task files exported from other tools occasionally carry.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// NFC-compose, trim, and collapse every separator run into one ASCII space.
///
/// Idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(text: &str) -> String {
    let composed: String = text.nfc().collect();

    let mut normalized = String::with_capacity(composed.len());
    for segment in composed.split(is_separator).filter(|s| !s.is_empty()) {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}

/// Absent text normalizes to the empty string.
pub fn normalize_opt(text: Option<&str>) -> String {
    text.map(normalize).unwrap_or_default()
}
