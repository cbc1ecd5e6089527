//! Stable sub-seed derivation.
//!
//! Every field of every record draws from its own RNG, seeded by a value
//! derived from the user seed, the record index, and a per-field tag.
//! Distinct tags and distinct indices decorrelate the random streams, so
//! re-rolling one field of one record never perturbs any other.
//!
//! The derivation is FNV-1a 64-bit over a canonical byte encoding of the
//! inputs: integers as fixed-width little-endian bytes, the tag as a u32
//! length prefix followed by its UTF-8 bytes. `std::hash` is deliberately
//! not used here - its output is not guaranteed stable across releases or
//! processes, and sub-seeds must be.

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash = FNV_OFFSET;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Derive the sub-seed for one field of one record.
///
/// Pure and stable: identical inputs always yield the identical sub-seed,
/// across processes, platforms, and runs.
pub fn field_seed(user_seed: i64, record_index: u64, tag: &str) -> u64 {
    let mut buf = Vec::with_capacity(20 + tag.len());
    buf.extend_from_slice(&user_seed.to_le_bytes());
    buf.extend_from_slice(&record_index.to_le_bytes());
    buf.extend_from_slice(&(tag.len() as u32).to_le_bytes());
    buf.extend_from_slice(tag.as_bytes());
    fnv1a(&buf)
}

/// Derive a further sub-seed below a field seed, for per-element streams
/// (one author, one review).
///
/// Nesting per element index means adding or removing one element never
/// changes the values generated for its siblings.
pub fn nested_seed(parent_seed: u64, sub_index: u64) -> u64 {
    let mut buf = [0u8; 16];
    buf[..8].copy_from_slice(&parent_seed.to_le_bytes());
    buf[8..].copy_from_slice(&sub_index.to_le_bytes());
    fnv1a(&buf)
}
