//! Assembles a whole transaction into its canonical byte sequence.

use tracing::debug;

use crate::encoding::codec::{num_to_hex_string, num_to_var_int};
use crate::error::Result;

use super::exclusive::serialize_exclusive;
use super::types::Transaction;

/// Serializes `tx` into its canonical lowercase hex form.
///
/// The field order is a fixed wire contract: type byte, version byte, the
/// type-specific exclusive payload, then the attribute, input and output
/// groups, each preceded by a varint count. With `signed == false` the
/// trailing witness group is omitted, which is the form a signature is
/// produced over; `signed == true` yields the broadcast-ready encoding.
///
/// Serialization is a pure function of its input: serializing the same
/// transaction twice yields identical bytes.
pub fn serialize_transaction(tx: &Transaction, signed: bool) -> Result<String> {
    let mut out = String::new();
    out.push_str(&num_to_hex_string(tx.tx_type as i64, 1, false)?);
    out.push_str(&num_to_hex_string(tx.version as i64, 1, false)?);
    out.push_str(&serialize_exclusive(tx)?);

    out.push_str(&num_to_var_int(tx.attributes.len() as u64));
    for attribute in &tx.attributes {
        out.push_str(&attribute.serialize()?);
    }

    out.push_str(&num_to_var_int(tx.inputs.len() as u64));
    for input in &tx.inputs {
        out.push_str(&input.serialize()?);
    }

    out.push_str(&num_to_var_int(tx.outputs.len() as u64));
    for output in &tx.outputs {
        out.push_str(&output.serialize()?);
    }

    if signed && !tx.scripts.is_empty() {
        out.push_str(&num_to_var_int(tx.scripts.len() as u64));
        for witness in &tx.scripts {
            out.push_str(&witness.serialize()?);
        }
    }

    debug!(bytes = out.len() / 2, signed, "serialized transaction");
    Ok(out)
}
