//! Storage & lifetime (component A) and the signed wrapper layer
//! (component C) built on top of [`crate::magnitude`].

use crate::error::BigIntError;
use crate::limb::Limb;
use crate::magnitude;
use std::cmp::Ordering;
use std::fmt;

#[cfg(not(feature = "sync"))]
use std::rc::Rc as Handle;
#[cfg(feature = "sync")]
use std::sync::Arc as Handle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sign {
    NonNegative,
    Negative,
}

#[derive(Debug)]
pub(crate) struct BigIntData {
    pub(crate) sign: Sign,
    pub(crate) limbs: Vec<Limb>,
}

/// An arbitrary-precision signed integer.
///
/// Values are immutable once constructed; every operation borrows its
/// operands and returns a freshly allocated result. `BigInt` is a thin,
/// `Clone`-cheap handle (an [`Rc`](std::rc::Rc), or an
/// [`Arc`](std::sync::Arc) under the `sync` feature) around the shared
/// representation; [`BigInt::retain`] and [`BigInt::release`] are the
/// explicitly named counterparts of `Clone::clone`/`Drop::drop` for callers
/// porting code written against the reference-counted C API this crate is
/// modeled on.
#[derive(Clone)]
pub struct BigInt(pub(crate) Handle<BigIntData>);

impl BigInt {
    pub(crate) fn from_raw(sign: Sign, mut limbs: Vec<Limb>) -> BigInt {
        magnitude::normalize(&mut limbs);
        let sign = if limbs.is_empty() { Sign::NonNegative } else { sign };
        BigInt(Handle::new(BigIntData { sign, limbs }))
    }

    /// The additive identity.
    pub fn zero() -> BigInt {
        BigInt::from_raw(Sign::NonNegative, Vec::new())
    }

    /// The multiplicative identity.
    pub fn one() -> BigInt {
        BigInt::from_raw(Sign::NonNegative, vec![1])
    }

    /// Zero, pre-allocated with room for `capacity` limbs. Useful when a
    /// caller knows roughly how large a result will grow and wants to
    /// avoid repeated reallocation while building it up.
    pub fn with_capacity(capacity: usize) -> BigInt {
        BigInt(Handle::new(BigIntData {
            sign: Sign::NonNegative,
            limbs: Vec::with_capacity(capacity),
        }))
    }

    pub(crate) fn sign(&self) -> Sign {
        self.0.sign
    }

    pub(crate) fn magnitude(&self) -> &[Limb] {
        &self.0.limbs
    }

    /// A structurally independent copy: a fresh allocation with the same
    /// value, distinct from [`BigInt::retain`] (which shares the
    /// allocation and just bumps the reference count).
    pub fn copy(&self) -> BigInt {
        BigInt(Handle::new(BigIntData {
            sign: self.0.sign,
            limbs: self.0.limbs.clone(),
        }))
    }

    /// Retain a handle to this value (increments the reference count).
    /// Equivalent to [`Clone::clone`].
    pub fn retain(&self) -> BigInt {
        self.clone()
    }

    /// Release this handle (decrements the reference count, freeing the
    /// value once it reaches zero). Equivalent to dropping the value; the
    /// explicit method exists so callers porting retain/release-style code
    /// have a direct counterpart to call.
    pub fn release(self) {
        drop(self);
    }

    /// The current reference count for this value's storage.
    pub fn ref_count(&self) -> usize {
        Handle::strong_count(&self.0)
    }

    pub fn is_zero(&self) -> bool {
        self.0.limbs.is_empty()
    }

    pub fn is_negative(&self) -> bool {
        self.0.sign == Sign::Negative && !self.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.0.sign == Sign::NonNegative && !self.is_zero()
    }

    /// Number of bits needed to represent the magnitude (0 for zero).
    pub fn bit_length(&self) -> u64 {
        magnitude::bit_length(self.magnitude()) as u64
    }

    /// Number of limbs in the canonical representation (0 for zero).
    pub fn limb_count(&self) -> usize {
        self.0.limbs.len()
    }

    fn with_sign_if_nonzero(sign: Sign, limbs: Vec<Limb>) -> BigInt {
        BigInt::from_raw(sign, limbs)
    }

    // ------------------------------------------------------------------
    // Signed wrapper layer (component C)
    // ------------------------------------------------------------------

    pub fn add(&self, other: &BigInt) -> BigInt {
        if self.sign() == other.sign() {
            let limbs = magnitude::add(self.magnitude(), other.magnitude());
            return BigInt::with_sign_if_nonzero(self.sign(), limbs);
        }
        match magnitude::compare(self.magnitude(), other.magnitude()) {
            Ordering::Equal => BigInt::zero(),
            Ordering::Greater => {
                let limbs = magnitude::sub(self.magnitude(), other.magnitude());
                BigInt::with_sign_if_nonzero(self.sign(), limbs)
            }
            Ordering::Less => {
                let limbs = magnitude::sub(other.magnitude(), self.magnitude());
                BigInt::with_sign_if_nonzero(other.sign(), limbs)
            }
        }
    }

    pub fn sub(&self, other: &BigInt) -> BigInt {
        self.add(&other.negate())
    }

    pub fn mul(&self, other: &BigInt) -> BigInt {
        if self.is_zero() || other.is_zero() {
            return BigInt::zero();
        }
        let sign = if self.sign() != other.sign() {
            Sign::Negative
        } else {
            Sign::NonNegative
        };
        let limbs = magnitude::mul(self.magnitude(), other.magnitude());
        BigInt::with_sign_if_nonzero(sign, limbs)
    }

    /// Truncating division (toward zero). `None` only in the sense that the
    /// caller must check for a zero divisor first; see
    /// [`BigInt::checked_div`] for the fallible form and `Div`/`Rem` for the
    /// panicking operator form.
    pub fn checked_div(&self, other: &BigInt) -> Result<BigInt, BigIntError> {
        if other.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        let (q, _) = magnitude::divrem(self.magnitude(), other.magnitude());
        if q.is_empty() {
            return Ok(BigInt::zero());
        }
        let sign = if self.sign() != other.sign() {
            Sign::Negative
        } else {
            Sign::NonNegative
        };
        Ok(BigInt::with_sign_if_nonzero(sign, q))
    }

    /// Truncating remainder; the result takes the sign of `self` (the
    /// dividend), matching `a == (a/b)*b + (a%b)`.
    pub fn checked_rem(&self, other: &BigInt) -> Result<BigInt, BigIntError> {
        if other.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        let (_, r) = magnitude::divrem(self.magnitude(), other.magnitude());
        Ok(BigInt::with_sign_if_nonzero(self.sign(), r))
    }

    /// Euclidean division: the remainder is always nonnegative. Provided
    /// alongside the truncating `div`/`mod` contract for callers who want
    /// floored semantics; does not change what `/` and `%` mean.
    pub fn div_euclid(&self, other: &BigInt) -> Result<BigInt, BigIntError> {
        let q = self.checked_div(other)?;
        let r = self.checked_rem(other)?;
        if r.is_negative() {
            if other.is_positive() {
                Ok(q.sub(&BigInt::one()))
            } else {
                Ok(q.add(&BigInt::one()))
            }
        } else {
            Ok(q)
        }
    }

    pub fn rem_euclid(&self, other: &BigInt) -> Result<BigInt, BigIntError> {
        let r = self.checked_rem(other)?;
        if r.is_negative() {
            Ok(r.add(&other.abs()))
        } else {
            Ok(r)
        }
    }

    pub fn negate(&self) -> BigInt {
        if self.is_zero() {
            return self.clone();
        }
        let sign = match self.sign() {
            Sign::NonNegative => Sign::Negative,
            Sign::Negative => Sign::NonNegative,
        };
        BigInt::from_raw(sign, self.0.limbs.clone())
    }

    pub fn abs(&self) -> BigInt {
        BigInt::from_raw(Sign::NonNegative, self.0.limbs.clone())
    }

    /// `self^exp` by square-and-multiply over the magnitude; sign is
    /// negative iff `self` is negative and `exp` is odd.
    pub fn pow(&self, exp: u32) -> BigInt {
        if exp == 0 {
            return BigInt::one();
        }
        if self.is_zero() {
            return BigInt::zero();
        }
        let mut result = BigInt::one();
        let mut base = self.abs();
        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = result.mul(&base);
            }
            base = base.mul(&base);
            e >>= 1;
        }
        if self.is_negative() && exp % 2 == 1 {
            result.negate()
        } else {
            result
        }
    }

    pub fn add_i32(&self, other: i32) -> BigInt {
        self.add(&BigInt::from_i32(other))
    }

    pub fn sub_i32(&self, other: i32) -> BigInt {
        self.sub(&BigInt::from_i32(other))
    }

    pub fn mul_i32(&self, other: i32) -> BigInt {
        self.mul(&BigInt::from_i32(other))
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

// ==========================================================================
// Operator trait impls (Add/Sub/Mul/Div/Rem/Neg)
// ==========================================================================

macro_rules! forward_binop {
    ($trait:ident, $method:ident, $inherent:ident) => {
        impl std::ops::$trait<&BigInt> for &BigInt {
            type Output = BigInt;
            fn $method(self, rhs: &BigInt) -> BigInt {
                BigInt::$inherent(self, rhs)
            }
        }
        impl std::ops::$trait<BigInt> for BigInt {
            type Output = BigInt;
            fn $method(self, rhs: BigInt) -> BigInt {
                BigInt::$inherent(&self, &rhs)
            }
        }
        impl std::ops::$trait<&BigInt> for BigInt {
            type Output = BigInt;
            fn $method(self, rhs: &BigInt) -> BigInt {
                BigInt::$inherent(&self, rhs)
            }
        }
        impl std::ops::$trait<BigInt> for &BigInt {
            type Output = BigInt;
            fn $method(self, rhs: BigInt) -> BigInt {
                BigInt::$inherent(self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add, add);
forward_binop!(Sub, sub, sub);
forward_binop!(Mul, mul, mul);

impl std::ops::Div<&BigInt> for &BigInt {
    type Output = BigInt;
    /// Truncating division. Panics on a zero divisor, matching native
    /// integer division (and the teacher's `Int256::div`).
    fn div(self, rhs: &BigInt) -> BigInt {
        self.checked_div(rhs).expect("attempt to divide by zero")
    }
}

impl std::ops::Rem<&BigInt> for &BigInt {
    type Output = BigInt;
    /// Truncating remainder. Panics on a zero divisor.
    fn rem(self, rhs: &BigInt) -> BigInt {
        self.checked_rem(rhs)
            .expect("attempt to calculate the remainder with a divisor of zero")
    }
}

impl std::ops::Div<BigInt> for BigInt {
    type Output = BigInt;
    fn div(self, rhs: BigInt) -> BigInt {
        &self / &rhs
    }
}

impl std::ops::Rem<BigInt> for BigInt {
    type Output = BigInt;
    fn rem(self, rhs: BigInt) -> BigInt {
        &self % &rhs
    }
}

impl std::ops::Neg for &BigInt {
    type Output = BigInt;
    fn neg(self) -> BigInt {
        self.negate()
    }
}

impl std::ops::Neg for BigInt {
    type Output = BigInt;
    fn neg(self) -> BigInt {
        self.negate()
    }
}

// ==========================================================================
// Comparison (component F)
// ==========================================================================

impl BigInt {
    pub fn compare(&self, other: &BigInt) -> Ordering {
        match (self.sign(), other.sign()) {
            (Sign::Negative, Sign::NonNegative) => Ordering::Less,
            (Sign::NonNegative, Sign::Negative) => Ordering::Greater,
            (Sign::NonNegative, Sign::NonNegative) => {
                magnitude::compare(self.magnitude(), other.magnitude())
            }
            (Sign::Negative, Sign::Negative) => {
                magnitude::compare(self.magnitude(), other.magnitude()).reverse()
            }
        }
    }

    pub fn equal(&self, other: &BigInt) -> bool {
        self.compare(other) == Ordering::Equal
    }

    pub fn less(&self, other: &BigInt) -> bool {
        self.compare(other) == Ordering::Less
    }

    pub fn less_equal(&self, other: &BigInt) -> bool {
        self.compare(other) != Ordering::Greater
    }

    pub fn greater(&self, other: &BigInt) -> bool {
        self.compare(other) == Ordering::Greater
    }

    pub fn greater_equal(&self, other: &BigInt) -> bool {
        self.compare(other) != Ordering::Less
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl std::hash::Hash for BigInt {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.sign().eq(&Sign::Negative).hash(state);
        self.magnitude().hash(state);
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str_radix(10))
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_str_radix(10))
    }
}
