//! Address and script hash conversions.

use sha2::{Digest, Sha256};

use crate::encoding::codec::{ensure_hex, reverse_hex};
use crate::error::{Error, Result};

/// Version byte of mainnet addresses.
pub const ADDRESS_VERSION: u8 = 0x17;

/// Encodes `data` as base58 with a 4-byte double-sha256 checksum suffix.
pub(crate) fn base58check_encode(data: &[u8]) -> String {
    let checksum = Sha256::digest(Sha256::digest(data));
    let mut buf = Vec::with_capacity(data.len() + 4);
    buf.extend_from_slice(data);
    buf.extend_from_slice(&checksum[..4]);
    bs58::encode(buf).into_string()
}

/// Decodes base58check data, returning `None` on malformed base58 or a
/// checksum mismatch.
pub(crate) fn base58check_decode(encoded: &str) -> Option<Vec<u8>> {
    let data = bs58::decode(encoded).into_vec().ok()?;
    if data.len() < 5 {
        return None;
    }
    let (payload, checksum) = data.split_at(data.len() - 4);
    let expected = Sha256::digest(Sha256::digest(payload));
    if checksum != &expected[..4] {
        return None;
    }
    Some(payload.to_vec())
}

/// Converts a base58 address to the little-endian hex script hash used in
/// transaction attributes and outputs.
pub fn script_hash_from_address(address: &str) -> Result<String> {
    let payload = base58check_decode(address)
        .ok_or_else(|| Error::InvalidAddress(format!("{address} is not valid base58check")))?;
    if payload.len() != 21 || payload[0] != ADDRESS_VERSION {
        return Err(Error::InvalidAddress(format!(
            "{address} does not carry the {ADDRESS_VERSION:#04x} version byte"
        )));
    }
    Ok(reverse_hex(&hex::encode(&payload[1..])))
}

/// Converts a 20-byte little-endian hex script hash back to its base58
/// address.
pub fn address_from_script_hash(script_hash: &str) -> Result<String> {
    ensure_hex(script_hash)?;
    let bytes = hex::decode(reverse_hex(&script_hash.to_ascii_lowercase()))
        .map_err(|_| Error::InvalidHex(script_hash.to_string()))?;
    if bytes.len() != 20 {
        return Err(Error::InvalidArgument(format!(
            "script hash must be 20 bytes, got {}",
            bytes.len()
        )));
    }
    let mut payload = Vec::with_capacity(21);
    payload.push(ADDRESS_VERSION);
    payload.extend_from_slice(&bytes);
    Ok(base58check_encode(&payload))
}
