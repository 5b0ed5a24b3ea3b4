//! Fixed-point representation of asset amounts.

use std::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::encoding::codec::reverse_hex;
use crate::error::{Error, Result};

/// Number of fractional decimal digits carried by a [`Fixed8`].
pub const DECIMALS: u32 = 8;

const SCALE: i64 = 100_000_000;

/// A signed decimal amount with exactly eight fractional digits, stored as
/// the scaled 64-bit integer that goes on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fixed8(i64);

impl Fixed8 {
    /// Quantizes `value` to eight decimal places and scales it to the raw
    /// wire integer.
    ///
    /// Quantization uses banker's rounding (round half to even), so no
    /// further rounding error is introduced downstream.
    pub fn from_decimal(value: Decimal) -> Result<Self> {
        value
            .round_dp(DECIMALS)
            .checked_mul(Decimal::from(SCALE))
            .and_then(|scaled| scaled.to_i64())
            .map(Fixed8)
            .ok_or_else(|| {
                Error::InvalidArgument(format!("amount {value} is out of the Fixed8 range"))
            })
    }

    /// Wraps an already scaled raw value.
    pub const fn from_raw(raw: i64) -> Self {
        Fixed8(raw)
    }

    /// The raw scaled value (`decimal value * 10^8`).
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// The decimal value this amount represents.
    pub fn to_decimal(self) -> Decimal {
        Decimal::new(self.0, DECIMALS)
    }

    /// Big-endian hex of the raw value, 16 chars, two's complement.
    pub fn to_hex(self) -> String {
        format!("{:016x}", self.0 as u64)
    }

    /// Little-endian (wire order) hex of the raw value.
    pub fn to_reverse_hex(self) -> String {
        reverse_hex(&self.to_hex())
    }

    /// Converts `value` to its little-endian hex form truncated to `size`
    /// bytes from the left.
    ///
    /// Fails with [`Error::InvalidArgument`] when `size` is zero or larger
    /// than the eight bytes a Fixed8 occupies.
    pub fn num_to_fixed8(value: Decimal, size: usize) -> Result<String> {
        if size == 0 || size > 8 {
            return Err(Error::InvalidArgument(format!(
                "size must be between 1 and 8 bytes, got {size}"
            )));
        }
        Ok(Self::from_decimal(value)?.to_reverse_hex()[..size * 2].to_string())
    }
}

impl fmt::Display for Fixed8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::FromPrimitive;

    #[test]
    fn test_num_to_fixed8() {
        for (num, want) in [
            (30, "005ed0b200000000"),
            (100, "00e40b5402000000"),
            (2, "00c2eb0b00000000"),
            (10, "00ca9a3b00000000"),
            (4_000_000, "0000e941cc6b0100"),
        ] {
            let got = Fixed8::num_to_fixed8(Decimal::from(num), 8).unwrap();
            assert_eq!(got, want, "input {num}");
        }
    }

    #[test]
    fn test_num_to_fixed8_truncates() {
        assert_eq!(
            Fixed8::num_to_fixed8(Decimal::from(30), 4).unwrap(),
            "005ed0b2"
        );
    }

    #[test]
    fn test_num_to_fixed8_rejects_bad_size() {
        assert!(matches!(
            Fixed8::num_to_fixed8(Decimal::ONE, 0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Fixed8::num_to_fixed8(Decimal::ONE, 9),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_from_decimal_scales_exactly() {
        let small = Decimal::from_f64(1e-8).unwrap();
        assert_eq!(Fixed8::from_decimal(small).unwrap().raw(), 1);
        assert_eq!(Fixed8::from_decimal(Decimal::ONE).unwrap().raw(), SCALE);
    }

    #[test]
    fn test_from_decimal_rejects_out_of_range_amounts() {
        // Scaling these by 10^8 overflows; the caller gets a typed error,
        // never a panic.
        assert!(matches!(
            Fixed8::from_decimal(Decimal::MAX),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Fixed8::from_decimal(Decimal::MIN),
            Err(Error::InvalidArgument(_))
        ));
        // Fits a Decimal after scaling but not an i64.
        assert!(matches!(
            Fixed8::from_decimal(Decimal::from(i64::MAX)),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_from_decimal_quantizes_half_to_even() {
        // 0.000000015 sits halfway between 1 and 2 raw units, 0.000000025
        // halfway between 2 and 3; both settle on the even neighbour.
        assert_eq!(Fixed8::from_decimal(Decimal::new(15, 9)).unwrap().raw(), 2);
        assert_eq!(Fixed8::from_decimal(Decimal::new(25, 9)).unwrap().raw(), 2);
    }

    #[test]
    fn test_negative_amounts_use_twos_complement() {
        assert_eq!(Fixed8::from_raw(-1).to_hex(), "ffffffffffffffff");
    }

    #[test]
    fn test_to_hex_is_reverse_of_wire_form() {
        let amount = Fixed8::from_decimal(Decimal::from(30)).unwrap();
        assert_eq!(amount.to_hex(), "00000000b2d05e00");
        assert_eq!(amount.to_reverse_hex(), "005ed0b200000000");
    }

    #[test]
    fn test_to_decimal_reverses_the_scaling() {
        let amount = Fixed8::from_raw(150_000_000);
        assert_eq!(amount.to_decimal(), Decimal::new(15, 1));
        assert_eq!(amount.to_string(), "1.50000000");
    }
}
