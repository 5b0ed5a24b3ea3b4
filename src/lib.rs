//! Client-side transaction serialization and signing for NEO-based
//! decentralized exchanges.
//!
//! The exchange API returns transactions as JSON; before they can be
//! executed they must be encoded into the blockchain's canonical binary
//! wire format and signed. This crate covers exactly that path: the
//! hex/varint codec and Fixed8 amount encoding, the serializable record
//! types (attributes, inputs, outputs, witnesses), the per-type exclusive
//! payloads, the transaction assembler and the signing adapter. Networking
//! and request orchestration live with the caller.
//!
//! ```
//! use neo_dex::transaction::{serialize_transaction, sign_transaction, Transaction};
//! use neo_dex::wallet::KeyPair;
//!
//! # fn main() -> neo_dex::Result<()> {
//! let tx: Transaction = serde_json::from_str(
//!     r#"{"type": 2, "version": 0, "attributes": [], "inputs": [],
//!         "outputs": [], "scripts": []}"#,
//! ).expect("valid transaction JSON");
//!
//! assert_eq!(serialize_transaction(&tx, false)?, "0200000000");
//!
//! let key = KeyPair::from_private_key(&[0x11; 32])?;
//! let signature = sign_transaction(&tx, &key)?;
//! assert_eq!(signature.len(), 128);
//! # Ok(())
//! # }
//! ```
//!
//! Every operation is a synchronous pure function of its arguments; no
//! shared state is kept between calls, so independent serialize-and-sign
//! calls may run concurrently without coordination.

pub mod encoding;
pub mod error;
pub mod transaction;
pub mod wallet;

pub use encoding::Fixed8;
pub use error::{Error, Result};
pub use transaction::{serialize_transaction, sign_transaction, Signer, Transaction};
pub use wallet::KeyPair;
