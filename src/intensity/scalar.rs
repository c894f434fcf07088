use std::fmt;

use rust_decimal::Decimal;
use serde::{
    Serialize,
    Serializer,
    ser::Error
};
use serde_json::value::RawValue;

/// Numeric domain shared by breakpoint positions and intensities.
pub trait Scalar: Copy + PartialOrd + fmt::Display + fmt::Debug {
    fn zero() -> Self;

    /// Intensity after adding `amount`.
    fn accumulate(self, amount: Self) -> Self;

    /// Writes the value in its natural decimal form, as it appears on the wire.
    fn fmt_json(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Serde counterpart of `fmt_json`, emitting exactly the same number text.
    fn serialize_json<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer {
        let raw = RawValue::from_string(JsonScalar(self).to_string()).map_err(S::Error::custom)?;
        raw.serialize(serializer)
    }

    /// Equality used for merging neighbours; NaN matches NaN.
    fn same_intensity(&self, other: &Self) -> bool {
        self == other || (self.partial_cmp(self).is_none() && other.partial_cmp(other).is_none())
    }
}

/// Shortest round-trip digits laid out the way `Number#toString` does:
/// plain decimals for magnitudes in `[1e-6, 1e21)`, `d.ddde±x` otherwise.
fn write_js_number(value: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific.split_once('e').ok_or(fmt::Error)?;
    let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let n = exponent + 1;

    if value < 0.0 {
        f.write_str("-")?;
    }
    if k <= n && n <= 21 {
        write!(f, "{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (whole, fraction) = digits.split_at(n as usize);
        write!(f, "{}.{}", whole, fraction)
    } else if -6 < n && n <= 0 {
        write!(f, "0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let (lead, rest) = digits.split_at(1);
        let sign = if n - 1 >= 0 { '+' } else { '-' };
        if rest.is_empty() {
            write!(f, "{}e{}{}", lead, sign, (n - 1).abs())
        } else {
            write!(f, "{}.{}e{}{}", lead, rest, sign, (n - 1).abs())
        }
    }
}

impl Scalar for f64 {
    fn zero() -> f64 {
        0.0
    }

    fn accumulate(self, amount: f64) -> f64 {
        self + amount
    }

    fn fmt_json(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_finite() {
            f.write_str("null")
        } else if *self == 0.0 {
            // -0.0 included
            f.write_str("0")
        } else {
            write_js_number(*self, f)
        }
    }
}

impl Scalar for i64 {
    fn zero() -> i64 {
        0
    }

    fn accumulate(self, amount: i64) -> i64 {
        self.saturating_add(amount)
    }

    fn fmt_json(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }

    fn serialize_json<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer {
        serializer.serialize_i64(*self)
    }
}

impl Scalar for Decimal {
    fn zero() -> Decimal {
        Decimal::ZERO
    }

    fn accumulate(self, amount: Decimal) -> Decimal {
        self.saturating_add(amount)
    }

    fn fmt_json(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.normalize())
    }
}

/// Adapter giving any `Scalar` its wire rendering through `Display` and `Serialize`.
pub struct JsonScalar<'a, T: Scalar>(pub &'a T);

impl <'a, T> fmt::Display for JsonScalar<'a, T> where
    T: Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_json(f)
    }
}

impl <'a, T> Serialize for JsonScalar<'a, T> where
    T: Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where S: Serializer {
        self.0.serialize_json(serializer)
    }
}
