//! Non-cryptographic hashing primitives.
//!
//! FNV-1a is used for its stable, documented output: the same bytes hash to
//! the same value on every platform and in every run. It offers no
//! resistance to crafted collisions.

pub mod base36;
pub mod fnv;

pub use base36::{to_base36, BASE36_ALPHABET};
pub use fnv::{fnv1a64, Fnv1a64, FnvBuildHasher, FNV1A64_OFFSET, FNV1A64_PRIME};
