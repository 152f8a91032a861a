//! SHA-512 primitives for C4 identification.
//!
//! Provides the streaming [`Encoder`] that accumulates a hash over chunked
//! input with non-destructive snapshots, commutative digest combination
//! via [`sum`], and one-shot identification via [`identify`].
//!
//! All hashing wraps the RustCrypto `sha2` implementation — no custom
//! cryptography.

pub mod combine;
pub mod encoder;

pub use combine::sum;
pub use encoder::{identify, Encoder};
