//! Limb-sized carry/borrow primitives (C1).
//!
//! These mirror the way the teacher crate exposes carry/borrow as plain
//! values extracted from `overflowing_add`/`overflowing_sub` rather than
//! hiding them inside a bigger abstraction: one function per named quantity
//! in spec.md §4.1, operating on a signed accumulator wide enough to hold
//! `2*(base-1)` on the add side and `-(base-1)` on the sub side.
//!
//! The reciprocal-multiply-by-fixed-divisor trick spec.md §4.1 mentions is a
//! hot-path optimisation the spec explicitly allows implementers to skip in
//! favour of the compiler's native division ("Implementers may use the
//! compiler's native div if it measures equivalent"); this crate takes that
//! option and divides directly. What digit indexing (C9) actually depends on
//! is a fast `/`/`%` by a power of ten, which `POW10` below provides without
//! a magic-number multiply.

/// Radix of an R9 limb: each limb holds nine decimal digits.
pub const R9_BASE: u64 = 1_000_000_000;

/// Powers of ten up to `10^9`, used to pick apart a single R9 limb digit by
/// digit without formatting it to a string first.
pub const POW10: [u32; 10] = [
    1,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
];

/// `a >= base ? 1 : 0`
#[inline]
pub fn add_carry(a: i64, base: i64) -> i64 {
    if a >= base { 1 } else { 0 }
}

/// `a >= base ? a - base : a`
#[inline]
pub fn add_value(a: i64, base: i64) -> i64 {
    if a >= base { a - base } else { a }
}

/// `a < 0 ? -1 : 0`
#[inline]
pub fn sub_carry(a: i64) -> i64 {
    if a < 0 { -1 } else { 0 }
}

/// `a < 0 ? a + base : a`
#[inline]
pub fn sub_value(a: i64, base: i64) -> i64 {
    if a < 0 { a + base } else { a }
}

/// `a > 0 ? 1 : 0`, used by the small-minus-large path before sign flip.
#[inline]
pub fn sub_complement_carry(a: i64) -> i64 {
    if a > 0 { 1 } else { 0 }
}

/// `base - (a > 0 ? a : a + base)`, tens-complement digit before sign flip.
#[inline]
pub fn sub_complement_value(a: i64, base: i64) -> i64 {
    base - if a > 0 { a } else { a + base }
}
