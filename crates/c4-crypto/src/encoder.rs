use std::io;

use sha2::{Digest as _, Sha512};

use c4_types::{Digest, Id};

/// Streaming SHA-512 accumulator producing C4 digests and identifiers.
///
/// Bytes may be written in any number of chunks; only the byte sequence
/// matters, never the chunk boundaries. Snapshots ([`digest`], [`id`])
/// finalize a clone of the hash state, so the live state is untouched and
/// the encoder accepts further writes afterward.
///
/// Single writer per instance. Independent encoders on independent threads
/// need no coordination.
///
/// [`digest`]: Encoder::digest
/// [`id`]: Encoder::id
#[derive(Clone, Default)]
pub struct Encoder {
    hasher: Sha512,
}

impl Encoder {
    /// Create an encoder with fresh hash state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append bytes to the accumulated stream.
    pub fn write(&mut self, data: &[u8]) {
        self.hasher.update(data);
    }

    /// The digest of everything written so far.
    ///
    /// Non-destructive: finalizes a clone of the hash state, leaving the
    /// encoder usable.
    pub fn digest(&self) -> Digest {
        let mut out = [0u8; Digest::BYTES];
        out.copy_from_slice(&self.hasher.clone().finalize());
        Digest::from_bytes(out)
    }

    /// The identifier of everything written so far.
    pub fn id(&self) -> Id {
        self.digest().id()
    }

    /// Discard accumulated state and start identifying a new stream.
    pub fn reset(&mut self) {
        self.hasher = Sha512::new();
    }
}

impl io::Write for Encoder {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.hasher.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Identify a complete byte slice in one call.
pub fn identify(data: &[u8]) -> Id {
    let mut encoder = Encoder::new();
    encoder.write(data);
    encoder.id()
}
