//! Conversion layer (component D): native integers, strings, `f64`.

use crate::bigint::{BigInt, Sign};
use crate::error::{ParseBigIntError, ParseErrorKind, TryFromBigIntError};
use crate::limb::{DoubleLimb, Limb, LIMB_BITS};
use std::str::FromStr;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn limbs_from_u64(mut v: u64) -> Vec<Limb> {
    let mut limbs = Vec::new();
    while v != 0 {
        limbs.push(v as Limb);
        v >>= LIMB_BITS;
    }
    limbs
}

impl BigInt {
    // ---- from native integers --------------------------------------

    pub fn from_u64(v: u64) -> BigInt {
        BigInt::from_raw(Sign::NonNegative, limbs_from_u64(v))
    }

    pub fn from_u32(v: u32) -> BigInt {
        BigInt::from_u64(v as u64)
    }

    /// Built via `unsigned_abs()` so `i64::MIN` (whose magnitude doesn't fit
    /// in an `i64`) converts correctly, mirroring the source header's
    /// `|INT_MIN| == INT_MAX + 1` handling.
    pub fn from_i64(v: i64) -> BigInt {
        let sign = if v < 0 { Sign::Negative } else { Sign::NonNegative };
        BigInt::from_raw(sign, limbs_from_u64(v.unsigned_abs()))
    }

    pub fn from_i32(v: i32) -> BigInt {
        BigInt::from_i64(v as i64)
    }

    // ---- to native integers ------------------------------------------

    fn to_u64_magnitude(&self) -> Option<u64> {
        let limbs = self.magnitude();
        if limbs.len() as u64 * LIMB_BITS as u64 > 64 {
            return None;
        }
        let mut v: u64 = 0;
        for (i, &limb) in limbs.iter().enumerate() {
            v |= (limb as u64) << (i as u32 * LIMB_BITS);
        }
        Some(v)
    }

    pub fn to_u64(&self) -> Option<u64> {
        if self.is_negative() {
            return None;
        }
        self.to_u64_magnitude()
    }

    pub fn to_u32(&self) -> Option<u32> {
        self.to_u64().and_then(|v| u32::try_from(v).ok())
    }

    pub fn to_i64(&self) -> Option<i64> {
        let mag = self.to_u64_magnitude()?;
        if self.is_negative() {
            if mag > i64::MIN.unsigned_abs() {
                None
            } else if mag == i64::MIN.unsigned_abs() {
                Some(i64::MIN)
            } else {
                Some(-(mag as i64))
            }
        } else if mag > i64::MAX as u64 {
            None
        } else {
            Some(mag as i64)
        }
    }

    pub fn to_i32(&self) -> Option<i32> {
        self.to_i64().and_then(|v| i32::try_from(v).ok())
    }

    /// Horner evaluation of the limbs, most significant first.
    pub fn to_f64(&self) -> f64 {
        let mut v = 0.0f64;
        let radix = (1u64 << LIMB_BITS) as f64;
        for &limb in self.magnitude().iter().rev() {
            v = v * radix + limb as f64;
        }
        if self.is_negative() {
            -v
        } else {
            v
        }
    }

    // ---- strings -------------------------------------------------------

    /// Parse a `BigInt` from a string of digits in the given radix
    /// (2..=36), with an optional leading `+` or `-`. Scans valid digits
    /// strtol-style and stops at the first character that isn't one;
    /// failure is reserved for radixes out of range, an empty string, or a
    /// prefix with no digits at all (e.g. `"12x4"` parses as `12`).
    pub fn from_str_radix(s: &str, radix: u32) -> Result<BigInt, ParseBigIntError> {
        if !(2..=36).contains(&radix) {
            return Err(ParseBigIntError { kind: ParseErrorKind::InvalidRadix });
        }
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseBigIntError { kind: ParseErrorKind::Empty });
        }
        let (sign, digits) = match s.as_bytes()[0] {
            b'-' => (Sign::Negative, &s[1..]),
            b'+' => (Sign::NonNegative, &s[1..]),
            _ => (Sign::NonNegative, s),
        };

        let mut magnitude = BigInt::zero();
        let base = BigInt::from_u32(radix);
        let mut consumed = 0;
        for c in digits.chars() {
            let Some(d) = c.to_digit(radix) else { break };
            magnitude = magnitude.mul(&base).add(&BigInt::from_u32(d));
            consumed += 1;
        }
        if consumed == 0 {
            return Err(ParseBigIntError { kind: ParseErrorKind::NoDigits });
        }
        Ok(BigInt::from_raw(sign, magnitude.magnitude().to_vec()))
    }

    /// Render in the given radix (2..=36), with a leading `-` for negative
    /// values. Zero always renders as `"0"`.
    pub fn to_str_radix(&self, radix: u32) -> String {
        assert!((2..=36).contains(&radix), "radix must be between 2 and 36");
        if self.is_zero() {
            return "0".to_string();
        }
        let mut limbs = self.magnitude().to_vec();
        let mut digits = Vec::new();
        while !limbs.is_empty() {
            let mut rem: DoubleLimb = 0;
            for limb in limbs.iter_mut().rev() {
                let cur = (rem << LIMB_BITS) | *limb as DoubleLimb;
                *limb = (cur / radix as DoubleLimb) as Limb;
                rem = cur % radix as DoubleLimb;
            }
            while matches!(limbs.last(), Some(&0)) {
                limbs.pop();
            }
            digits.push(DIGITS[rem as usize]);
        }
        if self.is_negative() {
            digits.push(b'-');
        }
        digits.reverse();
        String::from_utf8(digits).expect("digit table is ASCII")
    }
}

impl FromStr for BigInt {
    type Err = ParseBigIntError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigInt::from_str_radix(s, 10)
    }
}

macro_rules! impl_try_from {
    ($t:ty, $to:ident, $name:literal) => {
        impl TryFrom<&BigInt> for $t {
            type Error = TryFromBigIntError;
            fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
                value.$to().map(|v| v as $t).ok_or(TryFromBigIntError { target: $name })
            }
        }
        impl TryFrom<BigInt> for $t {
            type Error = TryFromBigIntError;
            fn try_from(value: BigInt) -> Result<Self, Self::Error> {
                <$t>::try_from(&value)
            }
        }
    };
}

impl_try_from!(i32, to_i32, "i32");
impl_try_from!(i64, to_i64, "i64");
impl_try_from!(u32, to_u32, "u32");
impl_try_from!(u64, to_u64, "u64");

impl From<i32> for BigInt {
    fn from(v: i32) -> BigInt {
        BigInt::from_i32(v)
    }
}
impl From<i64> for BigInt {
    fn from(v: i64) -> BigInt {
        BigInt::from_i64(v)
    }
}
impl From<u32> for BigInt {
    fn from(v: u32) -> BigInt {
        BigInt::from_u32(v)
    }
}
impl From<u64> for BigInt {
    fn from(v: u64) -> BigInt {
        BigInt::from_u64(v)
    }
}
