//! Transaction records, wire assembly and signing.

pub mod exclusive;
pub mod serialization;
pub mod signing;
pub mod types;

pub use exclusive::{serialize_exclusive, serialize_invocation_exclusive};
pub use serialization::serialize_transaction;
pub use signing::{
    encode_message, sign_array, sign_message, sign_transaction, SignItem, Signer,
};
pub use types::{
    Transaction, TransactionAttribute, TransactionInput, TransactionOutput, TxType, Witness,
    MAX_TRANSACTION_ATTRIBUTE_SIZE,
};
