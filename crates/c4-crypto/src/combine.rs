use std::cmp::Ordering;

use sha2::{Digest as _, Sha512};

use c4_types::Digest;

/// Combine two digests into the digest identifying the pair.
///
/// The 64-byte halves are concatenated smaller-first and hashed in one
/// SHA-512 invocation, so the result depends only on the pair, not on
/// argument order: `sum(l, r) == sum(r, l)`. Byte-equal digests combine to
/// themselves without hashing; downstream identifiers depend on this exact
/// behavior. Pairwise only — no associativity is claimed.
pub fn sum(left: &Digest, right: &Digest) -> Digest {
    let (lesser, greater) = match left.cmp(right) {
        Ordering::Equal => return *left,
        Ordering::Less => (left, right),
        Ordering::Greater => (right, left),
    };

    let mut hasher = Sha512::new();
    hasher.update(lesser.as_bytes());
    hasher.update(greater.as_bytes());
    let mut out = [0u8; Digest::BYTES];
    out.copy_from_slice(&hasher.finalize());
    Digest::from_bytes(out)
}
