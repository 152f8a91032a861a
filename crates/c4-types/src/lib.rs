//! Foundation types for C4 identification.
//!
//! C4 IDs (SMPTE ST 2114) name arbitrary data by its SHA-512 hash,
//! re-encoded as a fixed 90-character base-58 string. This crate provides
//! the value types and the textual codec; hashing lives in `c4-crypto`.
//!
//! # Key Types
//!
//! - [`Digest`] — A 64-byte big-endian SHA-512 hash value
//! - [`Id`] — The same 512-bit value in its naming role, rendered as a
//!   90-character `c4…` string
//! - [`C4Error`] — Closed error taxonomy for codec and conversion failures
//!
//! `Digest` and `Id` are bit-identical values under different roles;
//! converting between them reinterprets bytes and never hashes.

pub mod base58;
pub mod digest;
pub mod error;
pub mod id;

pub use digest::Digest;
pub use error::C4Error;
pub use id::{Id, ID_LENGTH};
