//! Property and regression tests for [`crate::BigInt`].

use crate::bigint::Sign;
use crate::limb::Limb;
use crate::{BigInt, RandSource, Xoshiro256StarStar};
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

impl Arbitrary for BigInt {
    fn arbitrary(g: &mut Gen) -> BigInt {
        let len = usize::arbitrary(g) % 5;
        let limbs: Vec<Limb> = (0..len).map(|_| Limb::arbitrary(g)).collect();
        let sign = if bool::arbitrary(g) { Sign::Negative } else { Sign::NonNegative };
        BigInt::from_raw(sign, limbs)
    }
}

fn rng() -> Xoshiro256StarStar {
    Xoshiro256StarStar::seed_from_u64(0xC0FFEE)
}

// ============================================================================
// Addition
// ============================================================================

#[quickcheck]
fn add_commutative(a: BigInt, b: BigInt) -> bool {
    a.add(&b) == b.add(&a)
}

#[quickcheck]
fn add_associative(a: BigInt, b: BigInt, c: BigInt) -> bool {
    a.add(&b).add(&c) == a.add(&b.add(&c))
}

#[quickcheck]
fn add_zero_identity(a: BigInt) -> bool {
    a.add(&BigInt::zero()) == a
}

#[quickcheck]
fn add_then_sub_roundtrips(a: BigInt, b: BigInt) -> bool {
    a.add(&b).sub(&b) == a
}

// ============================================================================
// Multiplication
// ============================================================================

#[quickcheck]
fn mul_commutative(a: BigInt, b: BigInt) -> bool {
    a.mul(&b) == b.mul(&a)
}

#[quickcheck]
fn mul_associative(a: BigInt, b: BigInt, c: BigInt) -> bool {
    a.mul(&b).mul(&c) == a.mul(&b.mul(&c))
}

#[quickcheck]
fn mul_distributes_over_add(a: BigInt, b: BigInt, c: BigInt) -> bool {
    a.mul(&b.add(&c)) == a.mul(&b).add(&a.mul(&c))
}

#[quickcheck]
fn mul_one_identity(a: BigInt) -> bool {
    a.mul(&BigInt::one()) == a
}

#[quickcheck]
fn mul_zero_annihilates(a: BigInt) -> bool {
    a.mul(&BigInt::zero()).is_zero()
}

// ============================================================================
// Division / modulo
// ============================================================================

#[quickcheck]
fn division_identity_holds(a: BigInt, b: BigInt) -> bool {
    if b.is_zero() {
        return true;
    }
    let q = a.checked_div(&b).unwrap();
    let r = a.checked_rem(&b).unwrap();
    q.mul(&b).add(&r) == a
}

#[quickcheck]
fn remainder_takes_dividend_sign(a: BigInt, b: BigInt) -> bool {
    if b.is_zero() {
        return true;
    }
    let r = a.checked_rem(&b).unwrap();
    r.is_zero() || r.is_negative() == a.is_negative()
}

#[quickcheck]
fn rem_euclid_is_never_negative(a: BigInt, b: BigInt) -> bool {
    if b.is_zero() {
        return true;
    }
    !a.rem_euclid(&b).unwrap().is_negative()
}

// ============================================================================
// Sign / negation
// ============================================================================

#[quickcheck]
fn double_negation_is_identity(a: BigInt) -> bool {
    a.negate().negate() == a
}

#[quickcheck]
fn abs_is_never_negative(a: BigInt) -> bool {
    !a.abs().is_negative()
}

// ============================================================================
// Comparison
// ============================================================================

#[quickcheck]
fn compare_is_reflexive(a: BigInt) -> bool {
    a.equal(&a)
}

#[quickcheck]
fn compare_is_antisymmetric(a: BigInt, b: BigInt) -> bool {
    !(a.less(&b) && b.less(&a))
}

#[quickcheck]
fn compare_is_total(a: BigInt, b: BigInt) -> bool {
    a.less(&b) || a.equal(&b) || a.greater(&b)
}

// ============================================================================
// Bitwise
// ============================================================================

#[quickcheck]
fn and_with_self_is_identity(a: BigInt) -> bool {
    a.abs().and(&a.abs()) == a.abs()
}

#[quickcheck]
fn or_with_self_is_identity(a: BigInt) -> bool {
    a.abs().or(&a.abs()) == a.abs()
}

#[quickcheck]
fn xor_with_self_is_zero(a: BigInt) -> bool {
    a.abs().xor(&a.abs()).is_zero()
}

#[quickcheck]
fn shift_left_then_right_roundtrips(a: BigInt) -> bool {
    a.shift_left(37).shift_right(37) == a
}

// ============================================================================
// Conversion / strings
// ============================================================================

#[quickcheck]
fn decimal_string_roundtrips(a: BigInt) -> bool {
    BigInt::from_str_radix(&a.to_str_radix(10), 10).unwrap() == a
}

#[quickcheck]
fn hex_string_roundtrips(a: BigInt) -> bool {
    BigInt::from_str_radix(&a.to_str_radix(16), 16).unwrap() == a
}

#[quickcheck]
fn i64_roundtrips_through_bigint(n: i64) -> bool {
    BigInt::from_i64(n).to_i64() == Some(n)
}

// ============================================================================
// Reference counting
// ============================================================================

#[test]
fn retain_increments_and_drop_decrements_ref_count() {
    let a = BigInt::from_i64(42);
    assert_eq!(a.ref_count(), 1);
    let b = a.retain();
    assert_eq!(a.ref_count(), 2);
    assert_eq!(b.ref_count(), 2);
    b.release();
    assert_eq!(a.ref_count(), 1);
}

#[test]
fn copy_is_independent_of_original_allocation() {
    let a = BigInt::from_i64(42);
    let b = a.copy();
    assert_eq!(a.ref_count(), 1);
    assert_eq!(b.ref_count(), 1);
    assert_eq!(a, b);
}

// ============================================================================
// Number theory identities
// ============================================================================

#[quickcheck]
fn gcd_lcm_product_identity(a: i32, b: i32) -> bool {
    let (a, b) = (BigInt::from_i32(a), BigInt::from_i32(b));
    if a.is_zero() || b.is_zero() {
        return true;
    }
    a.gcd(&b).mul(&a.lcm(&b)) == a.mul(&b).abs()
}

#[quickcheck]
fn extended_gcd_satisfies_bezout(a: i32, b: i32) -> bool {
    let (a, b) = (BigInt::from_i32(a), BigInt::from_i32(b));
    if a.is_zero() && b.is_zero() {
        return true;
    }
    let (g, x, y) = a.extended_gcd(&b);
    a.mul(&x).add(&b.mul(&y)) == g
}

#[quickcheck]
fn isqrt_bounds_the_input(n: u16) -> bool {
    let n = BigInt::from_u32(n as u32);
    let r = n.isqrt().unwrap();
    r.mul(&r).less_equal(&n) && r.add(&BigInt::one()).mul(&r.add(&BigInt::one())).greater(&n)
}

// ============================================================================
// Regression tests: concrete worked examples
// ============================================================================

#[test]
fn factorial_thirty_and_forty() {
    assert_eq!(
        BigInt::factorial(30).to_str_radix(10),
        "265252859812191058636308480000000"
    );
    assert_eq!(
        BigInt::factorial(40).to_str_radix(10),
        "815915283247897734345611269596115894272000000000"
    );
}

#[test]
fn large_multiplication_worked_example() {
    let a = BigInt::from_str_radix("99999999999999999999", 10).unwrap();
    let product = a.mul(&a);
    assert_eq!(
        product.to_str_radix(10),
        "9999999999999999999800000000000000000001"
    );
}

#[test]
fn large_division_worked_example() {
    let dividend = BigInt::factorial(20);
    let divisor = BigInt::factorial(10);
    let quotient = dividend.checked_div(&divisor).unwrap();
    let remainder = dividend.checked_rem(&divisor).unwrap();
    assert_eq!(quotient.to_str_radix(10), "670442572800");
    assert!(remainder.is_zero());
}

#[test]
fn large_modulo_worked_example() {
    let dividend = BigInt::factorial(20).add(&BigInt::one());
    let divisor = BigInt::factorial(10);
    let quotient = dividend.checked_div(&divisor).unwrap();
    let remainder = dividend.checked_rem(&divisor).unwrap();
    assert_eq!(quotient.to_str_radix(10), "670442572800");
    assert_eq!(remainder, BigInt::one());
}

#[test]
fn mod_pow_worked_examples() {
    let base = BigInt::from_i32(2);
    let exp = BigInt::from_i32(8);
    let m = BigInt::from_i32(100);
    assert_eq!(base.mod_pow(&exp, &m).unwrap(), BigInt::from_i32(56));

    for b in -5..5 {
        let base = BigInt::from_i32(b);
        assert_eq!(
            base.mod_pow(&BigInt::zero(), &BigInt::from_i32(7)).unwrap(),
            BigInt::one()
        );
    }
}

#[test]
fn gcd_lcm_extended_gcd_worked_examples() {
    let a = BigInt::from_i32(48);
    let b = BigInt::from_i32(18);
    assert_eq!(a.gcd(&b), BigInt::from_i32(6));
    assert_eq!(a.lcm(&b), BigInt::from_i32(36));

    let a = BigInt::from_i32(35);
    let b = BigInt::from_i32(15);
    let (g, x, y) = a.extended_gcd(&b);
    assert_eq!(g, BigInt::from_i32(5));
    assert_eq!(a.mul(&x).add(&b.mul(&y)), g);
}

#[test]
fn isqrt_primality_worked_examples() {
    let mut r = rng();
    assert_eq!(BigInt::from_i32(144).isqrt().unwrap(), BigInt::from_i32(12));
    assert_eq!(BigInt::from_i32(10).isqrt().unwrap(), BigInt::from_i32(3));
    assert!(BigInt::from_i32(7).is_prime(25, &mut r));
    assert!(!BigInt::from_i32(9).is_prime(25, &mut r));
    assert_eq!(BigInt::from_i32(10).next_prime(&mut r), BigInt::from_i32(11));
}

#[test]
fn overflow_helper_worked_examples() {
    assert_eq!(crate::checked_add_i32(i32::MAX, 1), None);
    assert_eq!(crate::checked_sub_i64(i64::MIN, 1), None);
    assert_eq!(crate::checked_mul_i32(1000, 1000), Some(1_000_000));
}
