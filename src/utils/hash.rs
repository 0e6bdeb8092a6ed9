//! Content hashing with blake3.
//!
//! ```ignore
//! let fp = hash::fingerprint(b"body { }"); // -> "a1b2c3d4"
//! ```

/// 8-char hex fingerprint, used for cache-busting filenames
/// (e.g. `catalog.a1b2c3d4.js`).
#[inline]
pub fn fingerprint<T: AsRef<[u8]> + ?Sized>(data: &T) -> String {
    let hash = blake3::hash(data.as_ref());
    hex::encode(&hash.as_bytes()[..4])
}
