use std::hash::{BuildHasherDefault, Hasher};

/// FNV-1a 64-bit offset basis.
pub const FNV1A64_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a 64-bit prime.
pub const FNV1A64_PRIME: u64 = 0x100000001b3;

/// FNV-1a over the UTF-8 bytes of `s`.
///
/// `fnv1a64("") == FNV1A64_OFFSET`.
pub fn fnv1a64(s: &str) -> u64 {
    let mut hasher = Fnv1a64::new();
    hasher.write(s.as_bytes());
    hasher.finish()
}

/// Incremental FNV-1a state.
///
/// Feeding the same bytes through any split of `write` calls gives the same
/// result as [`fnv1a64`]. Note that `Hash for str` appends a `0xff` marker,
/// so hashing a `&str` via `Hash::hash` does not match `fnv1a64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fnv1a64 {
    state: u64,
}

impl Fnv1a64 {
    pub const fn new() -> Self {
        Self {
            state: FNV1A64_OFFSET,
        }
    }
}

impl Default for Fnv1a64 {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for Fnv1a64 {
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.state ^= u64::from(byte);
            self.state = self.state.wrapping_mul(FNV1A64_PRIME);
        }
    }

    fn finish(&self) -> u64 {
        self.state
    }
}

/// Deterministic `BuildHasher` for maps keyed by short strings.
pub type FnvBuildHasher = BuildHasherDefault<Fnv1a64>;
