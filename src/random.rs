//! Random layer (component I). Entropy is abstracted behind [`RandSource`]
//! so callers can plug in a cryptographic generator; the bundled
//! [`Xoshiro256StarStar`] is explicitly non-cryptographic, matching the
//! source header's own disclosed reliance on a user-supplied RNG.

use crate::bigint::{BigInt, Sign};
use crate::error::BigIntError;
use crate::limb::{Limb, LIMB_BITS};
use std::cell::Cell;
use std::time::{SystemTime, UNIX_EPOCH};

/// A source of random bytes. Implementations are not required to be
/// cryptographically secure; [`BigInt::is_prime`] and friends document
/// where that matters.
pub trait RandSource {
    fn fill_bytes(&mut self, buf: &mut [u8]);

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_le_bytes(buf)
    }
}

/// xoshiro256** (Blackman & Vigna), a fast non-cryptographic PRNG. Used as
/// the crate's default [`RandSource`] when the caller has no reason to
/// bring their own.
pub struct Xoshiro256StarStar {
    s: [u64; 4],
}

thread_local! {
    static SEED_COUNTER: Cell<u64> = const { Cell::new(0) };
}

impl Xoshiro256StarStar {
    pub fn seed_from_u64(seed: u64) -> Self {
        // SplitMix64 to spread a single u64 seed across the 256-bit state.
        let mut z = seed;
        let mut s = [0u64; 4];
        for slot in &mut s {
            z = z.wrapping_add(0x9E3779B97F4A7C15);
            let mut x = z;
            x = (x ^ (x >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
            x = (x ^ (x >> 27)).wrapping_mul(0x94D049BB133111EB);
            *slot = x ^ (x >> 31);
        }
        Xoshiro256StarStar { s }
    }

    /// Seed from the system clock mixed with a process-local counter, so
    /// two generators created in quick succession still diverge.
    pub fn from_entropy() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        let counter = SEED_COUNTER.with(|c| {
            let v = c.get();
            c.set(v.wrapping_add(1));
            v
        });
        Xoshiro256StarStar::seed_from_u64(nanos ^ counter.wrapping_mul(0x2545F4914F6CDD1D))
    }

    fn next_u64_impl(&mut self) -> u64 {
        let result = (self.s[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.s[1] << 17;
        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];
        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);
        result
    }
}

impl Default for Xoshiro256StarStar {
    fn default() -> Self {
        Xoshiro256StarStar::from_entropy()
    }
}

impl RandSource for Xoshiro256StarStar {
    fn fill_bytes(&mut self, buf: &mut [u8]) {
        let mut chunks = buf.chunks_exact_mut(8);
        for chunk in &mut chunks {
            chunk.copy_from_slice(&self.next_u64_impl().to_le_bytes());
        }
        let rem = chunks.into_remainder();
        if !rem.is_empty() {
            let tail = self.next_u64_impl().to_le_bytes();
            rem.copy_from_slice(&tail[..rem.len()]);
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.next_u64_impl()
    }
}

const RANDOM_RANGE_RETRY_BUDGET: u32 = 1024;

impl BigInt {
    /// A uniformly random nonnegative value in `[0, 2^bits)`.
    pub fn random(bits: u32, rng: &mut impl RandSource) -> BigInt {
        BigInt::random_below_bits(bits, rng)
    }

    /// A uniformly random value in `[lo, hi)`, by rejection sampling over
    /// the smallest bit width that covers the range. Gives up after
    /// [`RANDOM_RANGE_RETRY_BUDGET`] attempts.
    pub fn random_range(
        lo: &BigInt,
        hi: &BigInt,
        rng: &mut impl RandSource,
    ) -> Result<BigInt, BigIntError> {
        if lo.greater_equal(hi) {
            return Err(BigIntError::InvalidRange);
        }
        let span = hi.sub(lo);
        let bits = span.bit_length() as u32;

        for _ in 0..RANDOM_RANGE_RETRY_BUDGET {
            let candidate = BigInt::random_below_bits(bits, rng);
            if candidate.less(&span) {
                return Ok(lo.add(&candidate));
            }
        }
        Err(BigIntError::SamplingExhausted)
    }

    /// A uniformly random value in `[0, 2^bits)`: fill `bits` worth of
    /// limbs with random bytes, then mask the top limb down to exactly
    /// `bits % LIMB_BITS` high bits.
    fn random_below_bits(bits: u32, rng: &mut impl RandSource) -> BigInt {
        if bits == 0 {
            return BigInt::zero();
        }
        let limb_count = bits.div_ceil(LIMB_BITS) as usize;
        let byte_width = (LIMB_BITS as usize / 8).max(1);
        let mut bytes = vec![0u8; limb_count * byte_width];
        rng.fill_bytes(&mut bytes);

        let mut limbs = vec![0 as Limb; limb_count];
        for (i, limb) in limbs.iter_mut().enumerate() {
            let mut v: Limb = 0;
            for b in 0..byte_width {
                let idx = i * byte_width + b;
                if idx < bytes.len() {
                    v |= (bytes[idx] as Limb) << (8 * b);
                }
            }
            *limb = v;
        }

        let top_bits = bits - (limb_count as u32 - 1) * LIMB_BITS;
        if top_bits < LIMB_BITS {
            let mask: Limb = (1 as Limb).checked_shl(top_bits).map(|v| v - 1).unwrap_or(Limb::MAX);
            limbs[limb_count - 1] &= mask;
        }

        BigInt::from_raw(Sign::NonNegative, limbs)
    }
}
