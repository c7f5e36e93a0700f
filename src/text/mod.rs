//! Text canonicalization shared by every signature component.
//!
//! Everything here is a pure function of its input: no configuration, no
//! locale, no allocation beyond the returned value.

pub mod normalize;
pub mod phonetic;
pub mod trigrams;

pub use normalize::{is_separator, normalize, normalize_opt};
pub use phonetic::{phonetic, PHONETIC_MAX_LEN, PHONETIC_SEPARATOR};
pub use trigrams::{trigrams, TRIGRAM_PAD};
