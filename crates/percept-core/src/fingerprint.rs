//! Content fingerprint for captured frames.
//!
//! The key derivation is a rolling 31-multiplier hash over the raw bytes,
//! truncated to 32-bit signed range after every step. It is intentionally
//! weak: keys are cheap to compute and stable across platforms, and a
//! collision merely serves a stale classification from the cache. It must
//! never be treated as an integrity or security check.

/// Hashes `bytes` to the 32-bit signed fingerprint used for cache keys.
///
/// Each step computes `h = (h << 5) - h + byte` (i.e. `h * 31 + byte`) with
/// wrapping arithmetic, so the value stays within `i32` and overflow is part
/// of the function, not an error. The empty input hashes to 0.
pub fn fingerprint(bytes: &[u8]) -> i32 {
    let mut h: i32 = 0;
    for &b in bytes {
        h = h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(b));
    }
    h
}

/// Decimal string form of [`fingerprint`]; this exact string is the cache
/// key, negative sign included.
pub fn cache_key(bytes: &[u8]) -> String {
    fingerprint(bytes).to_string()
}
