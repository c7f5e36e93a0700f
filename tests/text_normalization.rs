use task_provenance::text::{is_separator, normalize, normalize_opt, phonetic, trigrams};

#[test]
fn normalize_trims_and_collapses_whitespace() {
    assert_eq!(normalize("  Buy   milk \t\n now  "), "Buy milk now");
    assert_eq!(normalize("\u{3000}wide\u{00a0}space\u{2003}"), "wide space");
    assert_eq!(normalize(""), "");
    assert_eq!(normalize(" \t\r\n "), "");
}

#[test]
fn normalize_treats_information_separators_as_whitespace() {
    assert!(is_separator('\u{1c}'));
    assert!(is_separator('\u{1f}'));
    assert!(!is_separator('-'));
    assert_eq!(normalize("a\u{1e}\u{1f}b"), "a b");
}

#[test]
fn normalize_composes_to_nfc() {
    // "e" + COMBINING ACUTE ACCENT composes to U+00E9.
    let decomposed = "Cafe\u{0301}";
    let composed = normalize(decomposed);
    assert_eq!(composed, "Caf\u{00e9}");
    assert_eq!(composed.chars().count(), 4);
}

#[test]
fn normalize_is_idempotent() {
    let inputs = [
        "  Study   AI  ",
        "Cafe\u{0301}\tau  lait",
        "日本語 の\u{3000}タスク",
        "x\u{1c} \u{0301}",
        "",
        "Review PR #42",
    ];
    for input in inputs {
        let once = normalize(input);
        assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
    }
}

#[test]
fn absent_text_normalizes_to_empty() {
    assert_eq!(normalize_opt(None), "");
    assert_eq!(normalize_opt(Some("  a  b ")), "a b");
}

#[test]
fn trigrams_of_empty_is_empty() {
    assert!(trigrams("").is_empty());
}

#[test]
fn trigrams_are_padded_sliding_windows_with_duplicates() {
    assert_eq!(
        trigrams("ab ab"),
        vec!["  a", " ab", "ab ", "b a", " ab", "ab ", "b  "]
    );
    assert_eq!(trigrams("x"), vec!["  x", " x ", "x  "]);
}

#[test]
fn trigram_count_is_char_count_plus_two() {
    for s in ["x", "Study AI", "Study AI 📚", "日本語のタスク", "Café au lait"] {
        assert_eq!(trigrams(s).len(), s.chars().count() + 2, "for {s:?}");
    }
    assert_eq!(trigrams("Study AI").len(), "  Study AI  ".chars().count() - 2);
}

#[test]
fn trigrams_window_over_chars_not_bytes() {
    let t = trigrams("é");
    assert_eq!(t, vec!["  é", " é ", "é  "]);
    assert!(t.iter().all(|g| g.chars().count() == 3));
}

#[test]
fn phonetic_maps_non_alphanumerics_to_separator() {
    assert_eq!(phonetic("Study AI"), "study-ai");
    assert_eq!(phonetic("Study AI 📚"), "study-ai-");
    assert_eq!(phonetic("Café au lait"), "caf-au-lait");
}

#[test]
fn phonetic_collapses_only_adjacent_separators() {
    assert_eq!(phonetic("a -- b"), "a-b");
    assert_eq!(phonetic("a-b-c"), "a-b-c");
    assert_eq!(phonetic("!!!"), "-");
}

#[test]
fn phonetic_reduces_non_latin_scripts_to_hyphens() {
    assert_eq!(phonetic("日本語のタスク"), "-");
    assert_eq!(phonetic("Задача 7"), "-7");
}

#[test]
fn phonetic_truncates_to_twelve_characters() {
    assert_eq!(phonetic("Review PR #42"), "review-pr-42");
    assert_eq!(phonetic("abcdefghijklmnopqrstuvwxyz"), "abcdefghijkl");
    assert!(phonetic("a b c d e f g h i j k l m n").len() <= 12);
}

#[test]
fn phonetic_of_empty_is_empty() {
    assert_eq!(phonetic(""), "");
    assert_eq!(phonetic("   "), "");
}
