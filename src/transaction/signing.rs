//! Feeds assembled transaction bytes to a signing capability.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

use super::serialization::serialize_transaction;
use super::types::Transaction;

/// An opaque signing capability: raw message bytes in, signature bytes
/// out.
///
/// The adapter never transforms the signature; whatever encoding the
/// capability produces is what the caller gets back, hex-encoded.
/// Implementations must be callable from several threads at once.
pub trait Signer: Sync {
    /// Signs `message` and returns the signature's byte encoding.
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>>;
}

/// Signs a hex-encoded message, returning the signature as lowercase hex.
pub fn sign_message(message: &str, signer: &dyn Signer) -> Result<String> {
    let bytes = hex::decode(message).map_err(|_| Error::InvalidHex(message.to_string()))?;
    let signature = signer.sign(&bytes)?;
    Ok(hex::encode(signature))
}

/// Serializes `tx` without its witness section and signs the resulting
/// bytes.
pub fn sign_transaction(tx: &Transaction, signer: &dyn Signer) -> Result<String> {
    let serialized = serialize_transaction(tx, false)?;
    debug!(bytes = serialized.len() / 2, "signing transaction");
    sign_message(&serialized, signer)
}

/// One entry of a batch signing request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignItem {
    /// Identifier the resulting signature is keyed by.
    pub id: String,
    /// The transaction to sign.
    pub txn: Transaction,
}

/// Signs every transaction in `items` independently and returns the
/// signatures keyed by item id.
///
/// A duplicate id keeps the signature of the item seen last.
pub fn sign_array(items: &[SignItem], signer: &dyn Signer) -> Result<HashMap<String, String>> {
    let mut signed = HashMap::with_capacity(items.len());
    for item in items {
        signed.insert(item.id.clone(), sign_transaction(&item.txn, signer)?);
    }
    Ok(signed)
}

/// Wraps a UTF-8 API payload in the fixed envelope the exchange expects
/// signatures over: a constant prefix, the unpadded hex byte length, the
/// payload as hex and a two-byte suffix.
pub fn encode_message(msg: &str) -> String {
    let encoded = hex::encode(msg.as_bytes());
    format!("010001f0{:x}{}0000", encoded.len() / 2, encoded)
}
