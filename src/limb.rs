//! Limb width configuration.
//!
//! The magnitude of a [`BigInt`](crate::BigInt) is stored as a little-endian
//! sequence of `Limb`s. The width is a compile-time choice between 32 bits
//! (the default) and 16 bits, selected with the `limb16` Cargo feature,
//! the same role the teacher's `#[cfg(target_endian = ...)]` switches play
//! for per-platform layout, here used for a per-build width choice instead.

#[cfg(not(feature = "limb16"))]
mod width {
    pub type Limb = u32;
    pub type DoubleLimb = u64;
    pub type SignedDoubleLimb = i64;
    pub const LIMB_BITS: u32 = 32;
}

#[cfg(feature = "limb16")]
mod width {
    pub type Limb = u16;
    pub type DoubleLimb = u32;
    pub type SignedDoubleLimb = i32;
    pub const LIMB_BITS: u32 = 16;
}

pub use width::{DoubleLimb, Limb, SignedDoubleLimb, LIMB_BITS};

/// `2^LIMB_BITS`, represented in the double-width type since it overflows `Limb`.
pub const LIMB_RADIX: DoubleLimb = 1 << LIMB_BITS;
