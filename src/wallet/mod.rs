//! Keys, addresses and script hash derivation.

pub mod address;
pub mod key_pair;

pub use address::{address_from_script_hash, script_hash_from_address, ADDRESS_VERSION};
pub use key_pair::KeyPair;
