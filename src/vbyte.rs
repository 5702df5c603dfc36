//! Variable-byte (VB) encoding.
//!
//! Each number is split into 7-bit groups written most-significant first.
//! Every byte except the last one of a number carries the continuation bit
//! (0x80); the final byte has it clear and terminates the number.
//!
//! ```text
//!   127 -> 7F
//!   128 -> 81 00
//!   300 -> 82 2C      (300 = 2 * 128 + 44)
//! ```
//!
//! Note this is the reverse group order of LEB128, which writes the low
//! group first.

use tracing::{trace, warn};

use crate::error::{CompressionError, Result};

/// Continuation flag set on every byte but the last of a number.
pub const CONTINUATION_BIT: u8 = 0x80;

/// Mask for the 7 payload bits of a byte.
pub const PAYLOAD_MASK: u8 = 0x7F;

/// Longest encoding of a `u32` (ceil(32 / 7)).
pub const MAX_ENCODED_LEN: usize = 5;

/// Append the VB encoding of `value` to `out`.
#[inline]
pub fn encode_into(value: u32, out: &mut Vec<u8>) {
    let mut buf = [0u8; MAX_ENCODED_LEN];
    let mut pos = MAX_ENCODED_LEN;
    let mut n = value;

    // Low group first; it ends up last and stays unflagged.
    pos -= 1;
    buf[pos] = (n as u8) & PAYLOAD_MASK;
    n >>= 7;

    while n != 0 {
        pos -= 1;
        buf[pos] = ((n as u8) & PAYLOAD_MASK) | CONTINUATION_BIT;
        n >>= 7;
    }

    out.extend_from_slice(&buf[pos..]);
}

/// Encode a sequence of numbers into one concatenated byte stream.
pub fn encode(numbers: &[u32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(numbers.len());
    for &n in numbers {
        encode_into(n, &mut bytes);
    }
    trace!(numbers = numbers.len(), bytes = bytes.len(), "vb encoded");
    bytes
}

/// Number of bytes `encode_into` writes for `value`.
pub fn encoded_len(value: u32) -> usize {
    let mut value = value;
    let mut size = 1;
    while value >= 0x80 {
        size += 1;
        value >>= 7;
    }
    size
}

/// Decode a VB byte stream.
///
/// A stream that ends on a flagged byte leaves an unfinished number behind;
/// it is dropped without error. Bits pushed past bit 31 are discarded. Use
/// [`decode_strict`] to have both conditions reported.
pub fn decode(bytes: &[u8]) -> Vec<u32> {
    let mut numbers = Vec::with_capacity(bytes.len());
    let mut acc = 0u32;
    let mut pending = 0usize;

    for &byte in bytes {
        acc = (acc << 7) | u32::from(byte & PAYLOAD_MASK);
        if byte & CONTINUATION_BIT == 0 {
            numbers.push(acc);
            acc = 0;
            pending = 0;
        } else {
            pending += 1;
        }
    }

    if pending > 0 {
        warn!(pending, "dropping unterminated number at end of vb stream");
    }
    trace!(bytes = bytes.len(), numbers = numbers.len(), "vb decoded");
    numbers
}

/// Decode a VB byte stream, rejecting truncated or oversized numbers.
pub fn decode_strict(bytes: &[u8]) -> Result<Vec<u32>> {
    let mut numbers = Vec::with_capacity(bytes.len());
    let mut acc = 0u32;
    let mut pending = 0usize;

    for &byte in bytes {
        if acc > (u32::MAX >> 7) {
            return Err(CompressionError::Overflow);
        }
        acc = (acc << 7) | u32::from(byte & PAYLOAD_MASK);
        if byte & CONTINUATION_BIT == 0 {
            numbers.push(acc);
            acc = 0;
            pending = 0;
        } else {
            pending += 1;
        }
    }

    if pending > 0 {
        return Err(CompressionError::TruncatedStream { pending });
    }
    Ok(numbers)
}

/// Render bytes as space separated uppercase hex, e.g. `05 04 0B`.
pub fn to_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| format!("{byte:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}
