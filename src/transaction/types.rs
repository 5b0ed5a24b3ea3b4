//! The serializable record types a transaction is assembled from.
//!
//! All fields mirror the JSON shapes handed back by the exchange API, so
//! every type derives `Deserialize` with the API's camelCase names. The
//! records are immutable once constructed; serialization never mutates
//! its input.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::encoding::codec::{ensure_hex, num_to_hex_string, num_to_var_int, reverse_hex};
use crate::encoding::fixed8::Fixed8;
use crate::error::{Error, Result};

/// Maximum byte length of a single attribute's data field.
pub const MAX_TRANSACTION_ATTRIBUTE_SIZE: usize = 65535;

/// The transaction kinds this client can serialize.
///
/// Serialization dispatches on this sum type with an exhaustive match, so
/// adding a kind is a compile-time-checked extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TxType {
    /// GAS claim transaction.
    Claim = 0x02,
    /// Asset transfer transaction.
    Contract = 0x80,
    /// Smart contract invocation transaction.
    Invocation = 0xD1,
}

impl TxType {
    /// Maps a raw type byte to a known transaction kind.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x02 => Some(TxType::Claim),
            0x80 => Some(TxType::Contract),
            0xD1 => Some(TxType::Invocation),
            _ => None,
        }
    }
}

/// An attribute attached to a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionAttribute {
    /// Usage byte selecting how the data field is interpreted.
    pub usage: u8,
    /// Attribute payload as a hex string.
    pub data: String,
}

impl TransactionAttribute {
    /// Serializes the attribute: usage byte, length prefix where the usage
    /// demands one, then the data.
    ///
    /// Usage `0x81` carries a single length byte, `0x90` and `0xf0..=0xff`
    /// a varint. Usages `0x02` and `0x03` emit only the 31-byte window of
    /// a compressed public key without its prefix byte.
    pub fn serialize(&self) -> Result<String> {
        ensure_hex(&self.data)?;
        let data = self.data.to_ascii_lowercase();
        let byte_len = data.len() / 2;
        if byte_len > MAX_TRANSACTION_ATTRIBUTE_SIZE {
            return Err(Error::AttributeTooLarge {
                size: byte_len,
                max: MAX_TRANSACTION_ATTRIBUTE_SIZE,
            });
        }

        let mut out = num_to_hex_string(self.usage as i64, 1, false)?;
        if self.usage == 0x81 {
            out.push_str(&num_to_hex_string(byte_len as i64, 1, false)?);
        } else if self.usage == 0x90 || self.usage >= 0xF0 {
            out.push_str(&num_to_var_int(byte_len as u64));
        }

        if self.usage == 0x02 || self.usage == 0x03 {
            let window = data.get(2..64).ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "usage {:#04x} requires at least 32 bytes of data",
                    self.usage
                ))
            })?;
            out.push_str(window);
        } else {
            out.push_str(&data);
        }
        Ok(out)
    }
}

/// A reference to a prior transaction's output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInput {
    /// Hash of the referenced transaction, display (big-endian) order.
    #[serde(rename = "prevHash")]
    pub prev_hash: String,
    /// Index of the output within that transaction.
    #[serde(rename = "prevIndex")]
    pub prev_index: u16,
}

impl TransactionInput {
    /// Serializes the reference; hash and index are both stored little
    /// endian.
    pub fn serialize(&self) -> Result<String> {
        ensure_hex(&self.prev_hash)?;
        Ok(format!(
            "{}{}",
            reverse_hex(&self.prev_hash.to_ascii_lowercase()),
            num_to_hex_string(self.prev_index as i64, 2, true)?,
        ))
    }
}

/// A spendable output created by a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionOutput {
    /// Identifier of the asset being transferred, display order.
    #[serde(rename = "assetId")]
    pub asset_id: String,
    /// Amount transferred, quantized to eight decimal places on the wire.
    pub value: Decimal,
    /// Script hash of the receiving address, display order.
    #[serde(rename = "scriptHash")]
    pub script_hash: String,
}

impl TransactionOutput {
    /// Serializes the output as asset id, Fixed8 value and script hash,
    /// all little endian.
    pub fn serialize(&self) -> Result<String> {
        ensure_hex(&self.asset_id)?;
        ensure_hex(&self.script_hash)?;
        Ok(format!(
            "{}{}{}",
            reverse_hex(&self.asset_id.to_ascii_lowercase()),
            Fixed8::from_decimal(self.value)?.to_reverse_hex(),
            reverse_hex(&self.script_hash.to_ascii_lowercase()),
        ))
    }
}

/// The invocation/verification script pair authorizing a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Witness {
    /// Raw script bytes as hex, stored on the wire as-is.
    #[serde(rename = "invocationScript")]
    pub invocation_script: String,
    /// Raw script bytes as hex, stored on the wire as-is.
    #[serde(rename = "verificationScript")]
    pub verification_script: String,
}

impl Witness {
    /// Serializes the witness; each script is prefixed by its own varint
    /// byte length and never reversed.
    pub fn serialize(&self) -> Result<String> {
        ensure_hex(&self.invocation_script)?;
        ensure_hex(&self.verification_script)?;
        let invocation = self.invocation_script.to_ascii_lowercase();
        let verification = self.verification_script.to_ascii_lowercase();
        Ok(format!(
            "{}{}{}{}",
            num_to_var_int((invocation.len() / 2) as u64),
            invocation,
            num_to_var_int((verification.len() / 2) as u64),
            verification,
        ))
    }
}

/// A transaction as handed back by the exchange API.
///
/// A transaction object exists only for the duration of a single
/// serialize-and-sign operation; nothing at this layer owns long-lived
/// transaction state. Unknown JSON fields (`hash`, `sha256`, ...) are
/// ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Raw type byte, see [`TxType`] for the known values.
    #[serde(rename = "type")]
    pub tx_type: u8,
    /// Format version; version 1 invocations carry a gas amount.
    pub version: u8,
    /// Attributes, serialized in input order.
    #[serde(default)]
    pub attributes: Vec<TransactionAttribute>,
    /// Inputs, serialized in input order.
    #[serde(default)]
    pub inputs: Vec<TransactionInput>,
    /// Outputs, serialized in input order.
    #[serde(default)]
    pub outputs: Vec<TransactionOutput>,
    /// Witnesses, present only once the transaction has been signed.
    #[serde(default)]
    pub scripts: Vec<Witness>,
    /// Invocation script, present on invocation transactions only.
    #[serde(default)]
    pub script: Option<String>,
    /// GAS attached to an invocation, required from version 1 on.
    #[serde(default)]
    pub gas: Option<Decimal>,
}
