use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::base58;
use crate::digest::Digest;
use crate::error::C4Error;

/// Textual length of a C4 identifier, prefix included.
pub const ID_LENGTH: usize = 90;

const PREFIX: &[u8; 2] = b"c4";
const PAYLOAD_START: usize = PREFIX.len();

/// A C4 identifier: a 512-bit value that names a piece of data.
///
/// Rendered as a fixed 90-character string: the prefix `c4` followed by 88
/// base-58 digits, most significant first, leading zero symbols explicit.
/// The textual form is canonical — every value has exactly one string and
/// every accepted string decodes to exactly one value.
///
/// Identifiers compare in numeric order, not lexicographic string order,
/// and an absent identifier sorts before any present one (`Option<Id>`'s
/// derived ordering).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(BigUint);

impl Id {
    /// Parse a 90-character C4 identifier string.
    ///
    /// The length must be exactly 90 bytes and the prefix `c4`; every
    /// payload byte must be in the base-58 alphabet. Errors report the
    /// byte position of the first offending character, counted from the
    /// start of the string.
    pub fn parse(src: &str) -> Result<Self, C4Error> {
        let bytes = src.as_bytes();
        if bytes.len() != ID_LENGTH {
            return Err(C4Error::InvalidLength {
                expected: ID_LENGTH,
                actual: bytes.len(),
            });
        }
        for (position, &expected) in PREFIX.iter().enumerate() {
            if bytes[position] != expected {
                return Err(C4Error::InvalidCharacter {
                    position,
                    byte: bytes[position],
                });
            }
        }
        let value = base58::decode(&bytes[PAYLOAD_START..], PAYLOAD_START)?;
        Ok(Self(value))
    }

    /// The digest form of this identifier.
    ///
    /// A byte reinterpretation, never a hash. Fails only for values at or
    /// above 2^512, which are reachable by parsing (88 base-58 digits can
    /// exceed 512 bits) but never produced from a real hash.
    pub fn digest(&self) -> Result<Digest, C4Error> {
        Digest::new(&self.0.to_bytes_be())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = [0u8; ID_LENGTH];
        out[..PAYLOAD_START].copy_from_slice(PREFIX);
        base58::encode(&self.0, &mut out[PAYLOAD_START..]);
        // output bytes are drawn from the ASCII alphabet
        f.write_str(std::str::from_utf8(&out).map_err(|_| fmt::Error)?)
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let full = self.to_string();
        write!(f, "Id({}..)", &full[..10])
    }
}

impl FromStr for Id {
    type Err = C4Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Digest> for Id {
    fn from(digest: Digest) -> Self {
        Self(BigUint::from_bytes_be(digest.as_bytes()))
    }
}

impl From<&Digest> for Id {
    fn from(digest: &Digest) -> Self {
        Self::from(*digest)
    }
}

impl TryFrom<&Id> for Digest {
    type Error = C4Error;

    fn try_from(id: &Id) -> Result<Self, Self::Error> {
        id.digest()
    }
}

impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const ID_ALL_ZERO: &str =
        "c41111111111111111111111111111111111111111111111111111111111111111111111111111111111111111";
    const ID_ALL_FF: &str =
        "c467rpwLCuS5DGA8KGZXKsVQ7dnPb9goRLoKfgGbLfQg9WoLUgNY77E2jT11fem3coV9nAkguBACzrU1iyZM4B8roQ";

    #[test]
    fn all_zero_digest_encodes_to_zero_symbols() {
        let id = Digest::from_bytes([0u8; 64]).id();
        assert_eq!(id.to_string(), ID_ALL_ZERO);
    }

    #[test]
    fn all_zero_string_parses_to_zero_digest() {
        let id = Id::parse(ID_ALL_ZERO).unwrap();
        assert_eq!(id.digest().unwrap(), Digest::from_bytes([0u8; 64]));
    }

    #[test]
    fn all_ff_digest_encodes_to_known_string() {
        let id = Digest::from_bytes([0xff; 64]).id();
        assert_eq!(id.to_string(), ID_ALL_FF);
    }

    #[test]
    fn all_ff_string_parses_to_ff_digest() {
        let id = Id::parse(ID_ALL_FF).unwrap();
        assert_eq!(id.digest().unwrap(), Digest::from_bytes([0xff; 64]));
    }

    #[test]
    fn low_order_increments_change_only_trailing_symbols() {
        // 58, 58^2, 58^3, 58^4 as trailing big-endian bytes
        let tails: [&[u8]; 4] = [
            &[58],
            &[0x0d, 0x24],
            &[0x02, 0xfa, 0x28],
            &[0xac, 0xad, 0x10],
        ];
        let expected = [
            "c41111111111111111111111111111111111111111111111111111111111111111111111111111111111111121",
            "c41111111111111111111111111111111111111111111111111111111111111111111111111111111111111211",
            "c41111111111111111111111111111111111111111111111111111111111111111111111111111111111112111",
            "c41111111111111111111111111111111111111111111111111111111111111111111111111111111111121111",
        ];
        for (tail, want) in tails.iter().zip(expected) {
            let digest = Digest::new(tail).unwrap();
            assert_eq!(digest.id().to_string(), want);
            assert_eq!(Id::parse(want).unwrap().digest().unwrap(), digest);
        }
    }

    #[test]
    fn output_is_always_90_chars_with_prefix() {
        for digest in [
            Digest::from_bytes([0u8; 64]),
            Digest::from_bytes([0xff; 64]),
            Digest::new(&[1]).unwrap(),
        ] {
            let s = digest.id().to_string();
            assert_eq!(s.len(), ID_LENGTH);
            assert!(s.starts_with("c4"));
        }
    }

    #[test]
    fn wrong_length_is_rejected() {
        let err = Id::parse("c4tooshort").unwrap_err();
        assert_eq!(
            err,
            C4Error::InvalidLength {
                expected: 90,
                actual: 10
            }
        );
    }

    #[test]
    fn wrong_prefix_reports_position() {
        let bad = format!("x4{}", "1".repeat(88));
        assert_eq!(
            Id::parse(&bad).unwrap_err(),
            C4Error::InvalidCharacter {
                position: 0,
                byte: b'x'
            }
        );
        let bad = format!("cX{}", "1".repeat(88));
        assert_eq!(
            Id::parse(&bad).unwrap_err(),
            C4Error::InvalidCharacter {
                position: 1,
                byte: b'X'
            }
        );
    }

    #[test]
    fn invalid_payload_character_reports_exact_position() {
        // '0' is outside the alphabet; place it at payload position 50
        let mut bad = ID_ALL_ZERO.to_string().into_bytes();
        bad[50] = b'0';
        let err = Id::parse(std::str::from_utf8(&bad).unwrap()).unwrap_err();
        assert_eq!(
            err,
            C4Error::InvalidCharacter {
                position: 50,
                byte: b'0'
            }
        );
    }

    #[test]
    fn values_above_512_bits_parse_but_do_not_fit_a_digest() {
        let s = format!("c4{}", "z".repeat(88));
        let id = Id::parse(&s).unwrap();
        assert_eq!(id.to_string(), s);
        let err = id.digest().unwrap_err();
        assert!(matches!(err, C4Error::InvalidLength { expected: 64, .. }));
    }

    #[test]
    fn ids_order_numerically() {
        let small = Digest::new(&[1]).unwrap().id();
        let large = Digest::new(&[2, 0]).unwrap().id();
        assert!(small < large);
    }

    #[test]
    fn absent_sorts_before_present() {
        let id = Digest::from_bytes([0u8; 64]).id();
        assert!(None < Some(id.clone()));
        assert!(Some(id) > None);
    }

    #[test]
    fn from_str_round_trip() {
        let id: Id = ID_ALL_FF.parse().unwrap();
        assert_eq!(id.to_string(), ID_ALL_FF);
    }

    #[test]
    fn serde_uses_canonical_string() {
        let id = Digest::from_bytes([0xff; 64]).id();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{ID_ALL_FF}\""));
        let parsed: Id = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    proptest! {
        #[test]
        fn digest_round_trips_through_text(bytes in prop::collection::vec(any::<u8>(), 64)) {
            let digest = Digest::new(&bytes).unwrap();
            let s = digest.id().to_string();
            prop_assert_eq!(s.len(), ID_LENGTH);
            let parsed = Id::parse(&s).unwrap();
            prop_assert_eq!(parsed.digest().unwrap(), digest);
        }

        #[test]
        fn valid_strings_round_trip_through_value(digits in prop::collection::vec(0usize..58, 88)) {
            let mut s = String::from("c4");
            for d in digits {
                s.push(base58::ALPHABET[d] as char);
            }
            let id = Id::parse(&s).unwrap();
            prop_assert_eq!(id.to_string(), s);
        }
    }
}
