//! Overflow-checked native arithmetic (component H).
//!
//! The source header implements these with a rearranged-inequality trick
//! to avoid signed overflow in the check itself (e.g. for addition:
//! `if (b > 0 && a > MAX - b) return false;`). The standard library's own
//! `checked_add`/`checked_sub`/`checked_mul` satisfy the exact same
//! contract, so we delegate to them rather than re-deriving the inequality
//! by hand.

pub fn checked_add_i32(a: i32, b: i32) -> Option<i32> {
    a.checked_add(b)
}

pub fn checked_add_i64(a: i64, b: i64) -> Option<i64> {
    a.checked_add(b)
}

pub fn checked_sub_i32(a: i32, b: i32) -> Option<i32> {
    a.checked_sub(b)
}

pub fn checked_sub_i64(a: i64, b: i64) -> Option<i64> {
    a.checked_sub(b)
}

pub fn checked_mul_i32(a: i32, b: i32) -> Option<i32> {
    a.checked_mul(b)
}

pub fn checked_mul_i64(a: i64, b: i64) -> Option<i64> {
    a.checked_mul(b)
}
