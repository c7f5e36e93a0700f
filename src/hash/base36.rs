/// Digit alphabet, `0-9` then `a-z`.
pub const BASE36_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Positional base-36 rendering, most significant digit first, no padding.
///
/// `to_base36(0) == "0"`; `u64::MAX` takes 13 digits.
pub fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::with_capacity(13);
    while n > 0 {
        digits.push(BASE36_ALPHABET[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();

    // Alphabet is ASCII, so every byte is a valid char.
    digits.into_iter().map(char::from).collect()
}
