//! Hex string and variable-length integer helpers.
//!
//! Multi-byte integers and hashes are little endian on the wire while the
//! API hands hashes around in display (big-endian) order; conversion
//! between the two happens at this layer by reversing two-character byte
//! chunks.

use crate::error::{Error, Result};

/// Returns true when `input` is an even-length string of hex digits.
///
/// The empty string represents zero bytes and is always valid hex.
pub fn is_hex(input: &str) -> bool {
    input.len() % 2 == 0 && input.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Validates that `input` is an even-length hex string.
pub fn ensure_hex(input: &str) -> Result<()> {
    if is_hex(input) {
        Ok(())
    } else {
        Err(Error::InvalidHex(input.to_string()))
    }
}

/// Reverses the byte order of a hex string, treating two chars as one byte.
///
/// `reverse_hex("abcdef") == "efcdab"`. Applying it twice returns the
/// input unchanged.
pub fn reverse_hex(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    chars.chunks(2).rev().flatten().collect()
}

/// Encodes a non-negative integer as a fixed-width, left-zero-padded,
/// lowercase hex string of `size` bytes, optionally byte-reversed to
/// little endian.
///
/// Fails with [`Error::InvalidArgument`] when `num` is negative, `size` is
/// zero, or the value does not fit in `size` bytes.
pub fn num_to_hex_string(num: i64, size: usize, little_endian: bool) -> Result<String> {
    if num < 0 {
        return Err(Error::InvalidArgument(format!(
            "num should be unsigned (>= 0), got {num}"
        )));
    }
    if size == 0 {
        return Err(Error::InvalidArgument(
            "size must be at least one byte".to_string(),
        ));
    }

    let unsigned = num as u64;
    if size < 8 && unsigned >> (size * 8) != 0 {
        return Err(Error::InvalidArgument(format!(
            "{num} does not fit in {size} byte(s)"
        )));
    }

    let out = format!("{unsigned:0width$x}", width = size * 2);
    Ok(if little_endian { reverse_hex(&out) } else { out })
}

/// Encodes `num` with the four-tier variable-length integer scheme used
/// for array length headers.
///
/// Values below `0xfd` take a single byte; larger values are prefixed
/// with a marker byte (`fd`, `fe`, `ff`) followed by the value as a 2-,
/// 4- or 8-byte little-endian quantity.
pub fn num_to_var_int(num: u64) -> String {
    if num < 0xFD {
        format!("{num:02x}")
    } else if num <= 0xFFFF {
        format!("fd{}", reverse_hex(&format!("{num:04x}")))
    } else if num <= 0xFFFF_FFFF {
        format!("fe{}", reverse_hex(&format!("{num:08x}")))
    } else {
        format!("ff{}", reverse_hex(&format!("{num:016x}")))
    }
}
