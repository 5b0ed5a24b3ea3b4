//! The "exclusive" portion of the wire format, the part that differs per
//! transaction kind.

use crate::encoding::codec::{ensure_hex, num_to_var_int};
use crate::encoding::fixed8::Fixed8;
use crate::error::{Error, Result};

use super::types::{Transaction, TxType};

/// Serializes the type-specific payload of `tx`, dispatching on its kind.
///
/// Fails with [`Error::UnsupportedType`] when the type byte names no known
/// kind.
pub fn serialize_exclusive(tx: &Transaction) -> Result<String> {
    let kind = TxType::from_byte(tx.tx_type).ok_or(Error::UnsupportedType(tx.tx_type))?;
    match kind {
        // Claim and contract transactions carry no exclusive data.
        TxType::Claim | TxType::Contract => Ok(String::new()),
        TxType::Invocation => serialize_invocation_exclusive(tx),
    }
}

/// Serializes the invocation payload: varint script byte length, the
/// script verbatim, and from version 1 on the attached GAS amount as a
/// Fixed8.
pub fn serialize_invocation_exclusive(tx: &Transaction) -> Result<String> {
    if tx.tx_type != TxType::Invocation as u8 {
        return Err(Error::TypeMismatch {
            expected: TxType::Invocation as u8,
            found: tx.tx_type,
        });
    }

    let script = tx.script.as_deref().ok_or_else(|| {
        Error::InvalidArgument("invocation transaction carries no script".to_string())
    })?;
    ensure_hex(script)?;
    let script = script.to_ascii_lowercase();

    let mut out = num_to_var_int((script.len() / 2) as u64);
    out.push_str(&script);
    if tx.version >= 1 {
        let gas = tx.gas.ok_or_else(|| {
            Error::InvalidArgument("invocation transaction carries no gas amount".to_string())
        })?;
        out.push_str(&Fixed8::num_to_fixed8(gas, 8)?);
    }
    Ok(out)
}
