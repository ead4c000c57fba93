use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{TypeError, TypeResult};

/// A decimal number held in its textual form.
///
/// The store transmits numbers as strings so that no precision is lost in
/// transit. `Number` keeps that text as-is; converting to a Rust numeric type
/// is an explicit, fallible step.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Number(String);

impl Number {
    /// Parse and validate a decimal string (`-12`, `3.25`, `1e-7`).
    pub fn parse(text: &str) -> TypeResult<Self> {
        if is_decimal(text) {
            Ok(Self(text.to_string()))
        } else {
            Err(TypeError::InvalidNumber(text.to_string()))
        }
    }

    /// Convert a finite `f64`. NaN and infinities have no decimal form.
    pub fn from_f64(value: f64) -> TypeResult<Self> {
        if value.is_finite() {
            Ok(Self(value.to_string()))
        } else {
            Err(TypeError::InvalidNumber(value.to_string()))
        }
    }

    /// Convert a finite `f32`, keeping its shortest round-trip form.
    pub fn from_f32(value: f32) -> TypeResult<Self> {
        if value.is_finite() {
            Ok(Self(value.to_string()))
        } else {
            Err(TypeError::InvalidNumber(value.to_string()))
        }
    }

    /// The decimal text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The same value in canonical plain-decimal text.
    ///
    /// Equality and hashing of `Number` compare the text, so `5`, `5.0` and
    /// `5e0` are distinct until normalized; all three normalize to `5`.
    /// Values whose exponent would expand beyond [`MAX_PLAIN_DIGITS`] are
    /// returned unchanged.
    pub fn normalized(&self) -> Self {
        normalize(&self.0).map_or_else(|| self.clone(), Self)
    }

    /// Parse the decimal text into a concrete numeric type.
    ///
    /// Integer targets accept any spelling of an integral value (`5.0`,
    /// `5e0`) by falling back to the normalized text.
    pub fn to<T: FromStr>(&self) -> TypeResult<T> {
        self.0
            .parse::<T>()
            .or_else(|_| self.normalized().0.parse::<T>())
            .map_err(|_| TypeError::OutOfRange {
                target: std::any::type_name::<T>(),
                value: self.0.clone(),
            })
    }
}

/// Longest plain-decimal expansion [`Number::normalized`] will produce.
pub const MAX_PLAIN_DIGITS: i64 = 256;

fn normalize(text: &str) -> Option<String> {
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(at) => (&body[..at], body[at + 1..].parse::<i64>().ok()?),
        None => (body, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let digits = format!("{int_part}{frac_part}");
    let leading = digits.len() - digits.trim_start_matches('0').len();
    let digits = digits.trim_start_matches('0').trim_end_matches('0');
    if digits.is_empty() {
        return Some("0".to_string());
    }

    // Position of the decimal point relative to the first significant digit.
    let point = (int_part.len() as i64 - leading as i64).checked_add(exponent)?;
    let len = digits.len() as i64;
    if point.abs() > MAX_PLAIN_DIGITS || len > MAX_PLAIN_DIGITS {
        return None;
    }

    let mut out = String::with_capacity(digits.len() + point.unsigned_abs() as usize + 3);
    if negative {
        out.push('-');
    }
    if point <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat('0').take(point.unsigned_abs() as usize));
        out.push_str(digits);
    } else if point >= len {
        out.push_str(digits);
        out.extend(std::iter::repeat('0').take((point - len) as usize));
    } else {
        out.push_str(&digits[..point as usize]);
        out.push('.');
        out.push_str(&digits[point as usize..]);
    }
    Some(out)
}

fn is_decimal(text: &str) -> bool {
    let body = text.strip_prefix('-').unwrap_or(text);
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(at) => (&body[..at], Some(&body[at + 1..])),
        None => (body, None),
    };
    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (mantissa, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    if !all_digits(int_part) {
        return false;
    }
    if let Some(frac) = frac_part {
        if !all_digits(frac) {
            return false;
        }
    }
    match exponent {
        Some(exp) => all_digits(exp.strip_prefix(['+', '-']).unwrap_or(exp)),
        None => true,
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Number({})", self.0)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Number {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Number {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_decimal(&value) {
            Ok(Self(value))
        } else {
            Err(TypeError::InvalidNumber(value))
        }
    }
}

impl From<Number> for String {
    fn from(number: Number) -> Self {
        number.0
    }
}

macro_rules! number_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

number_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, isize, usize);
