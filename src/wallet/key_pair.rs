//! Private/public key pairs backing the signing capability.

use std::fmt;

use p256::ecdsa::signature::Signer as _;
use p256::ecdsa::{Signature, SigningKey};
use p256::SecretKey;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

use crate::encoding::codec::reverse_hex;
use crate::error::{Error, Result};
use crate::transaction::signing::Signer;

use super::address::{base58check_decode, base58check_encode, ADDRESS_VERSION};

/// A P-256 key pair able to act as the signing capability for
/// transactions and API payloads.
#[derive(Clone)]
pub struct KeyPair {
    signing_key: SigningKey,
}

impl KeyPair {
    /// Builds a key pair from a raw 32-byte private key.
    pub fn from_private_key(private_key: &[u8]) -> Result<Self> {
        let secret_key = SecretKey::from_slice(private_key)
            .map_err(|e| Error::InvalidKey(format!("invalid private key: {e}")))?;
        Ok(Self {
            signing_key: SigningKey::from(secret_key),
        })
    }

    /// Imports a key pair from WIF: base58check wrapping `0x80`, the
    /// 32-byte key and the trailing `0x01` compressed-key marker.
    pub fn from_wif(wif: &str) -> Result<Self> {
        let payload = base58check_decode(wif)
            .ok_or_else(|| Error::InvalidKey("WIF is not valid base58check".to_string()))?;
        if payload.len() != 34 || payload[0] != 0x80 || payload[33] != 0x01 {
            return Err(Error::InvalidKey(
                "WIF must wrap a compressed 32-byte private key".to_string(),
            ));
        }
        Self::from_private_key(&payload[1..33])
    }

    /// Exports the private key in WIF format.
    pub fn to_wif(&self) -> String {
        let mut data = [0u8; 34];
        data[0] = 0x80;
        data[1..33].copy_from_slice(&self.signing_key.to_bytes());
        data[33] = 0x01;
        base58check_encode(&data)
    }

    /// Compressed SEC1 encoding of the public key (33 bytes).
    pub fn public_key(&self) -> Vec<u8> {
        self.signing_key
            .verifying_key()
            .to_encoded_point(true)
            .as_bytes()
            .to_vec()
    }

    /// The single-signature verification script for this key.
    pub fn verification_script(&self) -> String {
        hex::encode(self.verification_script_bytes())
    }

    /// Little-endian hex of ripemd160(sha256(verification script)), the
    /// form script hashes take in attributes and outputs.
    pub fn script_hash(&self) -> String {
        reverse_hex(&hex::encode(self.hash160()))
    }

    /// Base58check address for this key's verification script.
    pub fn address(&self) -> String {
        let mut payload = Vec::with_capacity(21);
        payload.push(ADDRESS_VERSION);
        payload.extend_from_slice(&self.hash160());
        base58check_encode(&payload)
    }

    // PUSHBYTES33 <public key> CHECKSIG
    fn verification_script_bytes(&self) -> Vec<u8> {
        let mut script = Vec::with_capacity(35);
        script.push(0x21);
        script.extend_from_slice(&self.public_key());
        script.push(0xAC);
        script
    }

    fn hash160(&self) -> [u8; 20] {
        Ripemd160::digest(Sha256::digest(self.verification_script_bytes())).into()
    }
}

impl Signer for KeyPair {
    /// Deterministic (RFC 6979) ECDSA over SHA-256, returned in the
    /// fixed-size 64-byte `r || s` form.
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        let signature: Signature = self.signing_key.sign(message);
        Ok(signature.to_bytes().to_vec())
    }
}

// Shows the public key only; the private key must never reach logs.
impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public_key", &hex::encode(self.public_key()))
            .finish()
    }
}

impl PartialEq for KeyPair {
    fn eq(&self, other: &Self) -> bool {
        self.public_key() == other.public_key()
    }
}

impl Eq for KeyPair {}

impl fmt::Display for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.public_key()))
    }
}
