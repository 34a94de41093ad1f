//! Hash-bucket assignment for categorical values outside the vocabulary.

use twox_hash::XxHash64;

/// Seed shared with the training side.
const SEED: u64 = 0;

/// 64-bit XXH64 hash of a string's UTF-8 bytes.
#[inline]
pub fn hash_str(value: &str) -> u64 {
    XxHash64::oneshot(SEED, value.as_bytes())
}

/// Bucket of `value` among `n_buckets`, or `None` when there are no buckets.
///
/// The hash is reduced as an unsigned 64-bit integer. Reading the same bits
/// as a signed integer gives a different bucket for roughly half of all
/// inputs and breaks compatibility with trained weights.
#[inline]
pub fn bucket_hash(value: &str, n_buckets: u32) -> Option<usize> {
    if n_buckets == 0 {
        return None;
    }
    Some((hash_str(value) % u64::from(n_buckets)) as usize)
}
