//! Bitwise layer (component E). All operations act on the magnitude; see
//! the module-level note on [`BigInt::not`] for the one deliberate
//! deviation from two's-complement semantics.

use crate::bigint::{BigInt, Sign};
use crate::magnitude;

impl BigInt {
    pub fn and(&self, other: &BigInt) -> BigInt {
        BigInt::from_raw(Sign::NonNegative, magnitude::bitand(self.magnitude(), other.magnitude()))
    }

    pub fn or(&self, other: &BigInt) -> BigInt {
        BigInt::from_raw(Sign::NonNegative, magnitude::bitor(self.magnitude(), other.magnitude()))
    }

    pub fn xor(&self, other: &BigInt) -> BigInt {
        BigInt::from_raw(Sign::NonNegative, magnitude::bitxor(self.magnitude(), other.magnitude()))
    }

    /// Bitwise complement of the magnitude, extended by one limb of all
    /// ones. Unlike a two's-complement `!a` (which would be `-a-1`), this
    /// always yields a finite nonnegative value, there is no sign bit to
    /// flip in a sign-magnitude representation.
    pub fn not(&self) -> BigInt {
        BigInt::from_raw(Sign::NonNegative, magnitude::bitnot(self.magnitude()))
    }

    pub fn shift_left(&self, bits: u32) -> BigInt {
        if self.is_zero() {
            return BigInt::zero();
        }
        BigInt::from_raw(self.sign(), magnitude::shl(self.magnitude(), bits))
    }

    pub fn shift_right(&self, bits: u32) -> BigInt {
        if self.is_zero() {
            return BigInt::zero();
        }
        BigInt::from_raw(self.sign(), magnitude::shr(self.magnitude(), bits))
    }
}

impl std::ops::BitAnd<&BigInt> for &BigInt {
    type Output = BigInt;
    fn bitand(self, rhs: &BigInt) -> BigInt {
        BigInt::and(self, rhs)
    }
}

impl std::ops::BitOr<&BigInt> for &BigInt {
    type Output = BigInt;
    fn bitor(self, rhs: &BigInt) -> BigInt {
        BigInt::or(self, rhs)
    }
}

impl std::ops::BitXor<&BigInt> for &BigInt {
    type Output = BigInt;
    fn bitxor(self, rhs: &BigInt) -> BigInt {
        BigInt::xor(self, rhs)
    }
}

impl std::ops::Not for &BigInt {
    type Output = BigInt;
    fn not(self) -> BigInt {
        BigInt::not(self)
    }
}

impl std::ops::Shl<u32> for &BigInt {
    type Output = BigInt;
    fn shl(self, bits: u32) -> BigInt {
        BigInt::shift_left(self, bits)
    }
}

impl std::ops::Shr<u32> for &BigInt {
    type Output = BigInt;
    fn shr(self, bits: u32) -> BigInt {
        BigInt::shift_right(self, bits)
    }
}

macro_rules! impl_owned_bitop {
    ($trait:ident, $method:ident) => {
        impl std::ops::$trait<BigInt> for BigInt {
            type Output = BigInt;
            fn $method(self, rhs: BigInt) -> BigInt {
                std::ops::$trait::$method(&self, &rhs)
            }
        }
    };
}

impl_owned_bitop!(BitAnd, bitand);
impl_owned_bitop!(BitOr, bitor);
impl_owned_bitop!(BitXor, bitxor);

impl std::ops::Not for BigInt {
    type Output = BigInt;
    fn not(self) -> BigInt {
        BigInt::not(&self)
    }
}

impl std::ops::Shl<u32> for BigInt {
    type Output = BigInt;
    fn shl(self, bits: u32) -> BigInt {
        BigInt::shift_left(&self, bits)
    }
}

impl std::ops::Shr<u32> for BigInt {
    type Output = BigInt;
    fn shr(self, bits: u32) -> BigInt {
        BigInt::shift_right(&self, bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn and_or_xor_zero_extend() {
        let a = BigInt::from_u64(0b1010);
        let b = BigInt::from_u64(0b1100_0000_0000_0000_0000_0000_0000_0000_0000);
        assert_eq!((&a & &b).to_u64(), Some(0));
        assert!((&a | &b).to_u64().unwrap() > 0);
    }

    #[test]
    fn shift_left_then_right_is_identity() {
        let a = BigInt::from_i64(-123456789);
        let shifted = a.shift_left(40).shift_right(40);
        assert_eq!(shifted, a);
    }

    #[test]
    fn not_is_nonnegative_and_finite() {
        let a = BigInt::from_i64(-5);
        let n = a.not();
        assert!(!n.is_negative());
    }
}
