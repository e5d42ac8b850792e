//! Number-theoretic layer (component G): gcd/lcm, modular exponentiation,
//! integer square root, factorial, and Miller-Rabin primality.

use crate::bigint::BigInt;
use crate::error::BigIntError;
use crate::random::RandSource;

/// Witnesses sufficient for a deterministic Miller-Rabin verdict below
/// 3,317,044,064,679,887,385,961,981 (Sorenson & Webster, 2015).
const DETERMINISTIC_WITNESSES: &[u32] = &[2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

impl BigInt {
    pub fn gcd(&self, other: &BigInt) -> BigInt {
        let mut a = self.abs();
        let mut b = other.abs();
        while !b.is_zero() {
            let r = a.checked_rem(&b).expect("b checked nonzero by loop condition");
            a = b;
            b = r;
        }
        a
    }

    pub fn lcm(&self, other: &BigInt) -> BigInt {
        if self.is_zero() || other.is_zero() {
            return BigInt::zero();
        }
        let g = self.gcd(other);
        self.checked_div(&g)
            .expect("gcd of nonzero inputs is nonzero")
            .mul(other)
            .abs()
    }

    /// Extended Euclidean algorithm: returns `(g, x, y)` with
    /// `g == self*x + other*y` and `g == gcd(self, other)`.
    ///
    /// The recurrence runs on `|self|`/`|other|` (it would otherwise hand
    /// back a negative `g`) and the coefficients are corrected for the
    /// original signs afterward.
    pub fn extended_gcd(&self, other: &BigInt) -> (BigInt, BigInt, BigInt) {
        let (mut old_r, mut r) = (self.abs(), other.abs());
        let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
        let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

        while !r.is_zero() {
            let q = old_r.checked_div(&r).expect("r checked nonzero by loop condition");
            let new_r = old_r.sub(&q.mul(&r));
            old_r = std::mem::replace(&mut r, new_r);
            let new_s = old_s.sub(&q.mul(&s));
            old_s = std::mem::replace(&mut s, new_s);
            let new_t = old_t.sub(&q.mul(&t));
            old_t = std::mem::replace(&mut t, new_t);
        }
        let x = if self.is_negative() { old_s.negate() } else { old_s };
        let y = if other.is_negative() { old_t.negate() } else { old_t };
        (old_r, x, y)
    }

    /// `self^exp mod m` by square-and-multiply. `m == 0` or `exp < 0` is a
    /// domain error.
    pub fn mod_pow(&self, exp: &BigInt, m: &BigInt) -> Result<BigInt, BigIntError> {
        if m.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        if exp.is_negative() {
            return Err(BigIntError::Domain("mod_pow exponent must be nonnegative"));
        }
        if m.abs() == BigInt::one() {
            return Ok(BigInt::zero());
        }

        let mut result = BigInt::one();
        let mut base = self.checked_rem(m)?;
        if base.is_negative() {
            base = base.add(&m.abs());
        }
        let mut e = exp.clone();
        let two = BigInt::from_u32(2);
        while !e.is_zero() {
            if e.checked_rem(&two)?.equal(&BigInt::one()) {
                result = result.mul(&base).checked_rem(m)?;
            }
            base = base.mul(&base).checked_rem(m)?;
            e = e.checked_div(&two)?;
        }
        Ok(result)
    }

    /// Integer square root via Newton's method; converges in `O(log n)`
    /// iterations bounded by the bit length of `self`. Negative inputs are
    /// a domain error.
    pub fn isqrt(&self) -> Result<BigInt, BigIntError> {
        if self.is_negative() {
            return Err(BigIntError::Domain("isqrt argument must be nonnegative"));
        }
        if self.is_zero() {
            return Ok(BigInt::zero());
        }
        let two = BigInt::from_u32(2);
        let mut x = BigInt::one().shift_left((self.bit_length() as u32 + 1) / 2 + 1);
        let bound = self.bit_length() + 2;
        for _ in 0..=bound {
            let next = x.add(&self.checked_div(&x).expect("x starts positive and stays positive"));
            let next = next.checked_div(&two).expect("two is nonzero");
            if next.greater_equal(&x) {
                break;
            }
            x = next;
        }
        while x.mul(&x).greater(self) {
            x = x.sub(&BigInt::one());
        }
        Ok(x)
    }

    /// `n!` for `n >= 0`.
    pub fn factorial(n: u32) -> BigInt {
        let mut result = BigInt::one();
        for i in 2..=n {
            result = result.mul(&BigInt::from_u32(i));
        }
        result
    }

    /// Miller-Rabin primality test. `certainty` is the number of random
    /// witness rounds to run in addition to the deterministic witness set
    /// (which alone is conclusive below ~3.3e24).
    pub fn is_prime(&self, certainty: u32, rng: &mut impl RandSource) -> bool {
        let n = self.abs();
        if n.less(&BigInt::from_u32(2)) {
            return false;
        }
        for &small in &[2u32, 3, 5, 7, 11, 13] {
            let p = BigInt::from_u32(small);
            if n.equal(&p) {
                return true;
            }
            if n.checked_rem(&p).expect("nonzero divisor").is_zero() {
                return false;
            }
        }

        let n_minus_one = n.sub(&BigInt::one());
        let mut d = n_minus_one.clone();
        let mut r: u32 = 0;
        let two = BigInt::from_u32(2);
        while d.checked_rem(&two).expect("nonzero divisor").is_zero() {
            d = d.checked_div(&two).expect("nonzero divisor");
            r += 1;
        }

        let deterministic_bound = BigInt::from_str_radix("3317044064679887385961981", 10)
            .expect("literal is well-formed");
        let witness_count = if n.less(&deterministic_bound) {
            0
        } else {
            certainty.max(1)
        };

        for &w in DETERMINISTIC_WITNESSES {
            let a = BigInt::from_u32(w);
            if a.greater_equal(&n) {
                continue;
            }
            if !Self::miller_rabin_round(&a, &d, r, &n, &n_minus_one) {
                return false;
            }
        }

        for _ in 0..witness_count {
            let a = BigInt::random_range(&BigInt::from_u32(2), &n_minus_one, rng)
                .unwrap_or_else(|_| BigInt::from_u32(2));
            if !Self::miller_rabin_round(&a, &d, r, &n, &n_minus_one) {
                return false;
            }
        }
        true
    }

    fn miller_rabin_round(a: &BigInt, d: &BigInt, r: u32, n: &BigInt, n_minus_one: &BigInt) -> bool {
        let mut x = a.mod_pow(d, n).expect("n checked nonzero and d nonnegative");
        if x.equal(&BigInt::one()) || x.equal(n_minus_one) {
            return true;
        }
        for _ in 1..r {
            x = x.mul(&x).checked_rem(n).expect("n checked nonzero");
            if x.equal(n_minus_one) {
                return true;
            }
        }
        false
    }

    /// The smallest prime strictly greater than `self.abs()`.
    pub fn next_prime(&self, rng: &mut impl RandSource) -> BigInt {
        let mut candidate = self.abs();
        if candidate.less(&BigInt::from_u32(2)) {
            return BigInt::from_u32(2);
        }
        candidate = candidate.add(&BigInt::one());
        if candidate.checked_rem(&BigInt::from_u32(2)).expect("nonzero divisor").is_zero() {
            candidate = candidate.add(&BigInt::one());
        }
        loop {
            if candidate.is_prime(25, rng) {
                return candidate;
            }
            candidate = candidate.add(&BigInt::from_u32(2));
        }
    }
}
