//! Low-level wire encodings: hex/varint helpers and fixed-point amounts.

pub mod codec;
pub mod fixed8;

pub use codec::{ensure_hex, is_hex, num_to_hex_string, num_to_var_int, reverse_hex};
pub use fixed8::Fixed8;
