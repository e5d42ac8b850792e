//! Arbitrary-precision signed integers, stored sign-magnitude over a
//! little-endian limb vector and shared via reference counting.
//!
//! The magnitude arithmetic lives in [`magnitude`]; [`BigInt`] (in
//! [`bigint`]) is the signed wrapper built on top of it, with conversions,
//! bitwise operations, and number theory split into their own modules.

mod bigint;
mod bitops;
mod convert;
mod error;
mod limb;
mod magnitude;
mod numtheory;
mod overflow;
mod random;

#[cfg(test)]
mod tests;

pub use bigint::BigInt;
pub use error::{BigIntError, ParseBigIntError, TryFromBigIntError};
pub use limb::{Limb, LIMB_BITS};
pub use overflow::{
    checked_add_i32, checked_add_i64, checked_mul_i32, checked_mul_i64, checked_sub_i32,
    checked_sub_i64,
};
pub use random::{RandSource, Xoshiro256StarStar};
