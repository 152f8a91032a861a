use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use crate::error::C4Error;

/// The 58-symbol C4 alphabet: digits and letters excluding the visually
/// ambiguous `0`, `O`, `I`, and `l`.
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// The symbol for digit value zero.
pub(crate) const ZERO_SYMBOL: u8 = b'1';

const INVALID: u8 = 0xFF;

/// Inverse lookup: ASCII byte to digit value, `0xFF` for bytes outside the
/// alphabet.
const DIGIT_VALUES: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Decode a base-58 payload into a big integer, most-significant digit
/// first.
///
/// Every byte is significant, including leading zero symbols, so the
/// decoded value is in bijection with fixed-width payloads. The first
/// invalid byte aborts decoding; `position_offset` is added to its index
/// so the error reports a position within the surrounding string rather
/// than within the payload slice.
pub(crate) fn decode(payload: &[u8], position_offset: usize) -> Result<BigUint, C4Error> {
    let mut value = BigUint::zero();
    for (i, &byte) in payload.iter().enumerate() {
        let digit = DIGIT_VALUES[byte as usize];
        if digit == INVALID {
            return Err(C4Error::InvalidCharacter {
                position: position_offset + i,
                byte,
            });
        }
        value = value * 58u32 + u32::from(digit);
    }
    Ok(value)
}

/// Encode a big integer into `out` as base-58 digits, least-significant
/// digit in the last position.
///
/// Works on a copy; the input is never mutated. Once the value reaches
/// zero, every remaining more-significant position is filled with the zero
/// symbol, so the output width is fixed and leading zeros are explicit.
pub(crate) fn encode(value: &BigUint, out: &mut [u8]) {
    let base = BigUint::from(58u32);
    let mut n = value.clone();
    for slot in out.iter_mut().rev() {
        if n.is_zero() {
            *slot = ZERO_SYMBOL;
            continue;
        }
        let (quotient, remainder) = n.div_rem(&base);
        let digit = remainder.iter_u64_digits().next().unwrap_or(0) as usize;
        *slot = ALPHABET[digit];
        n = quotient;
    }
}
