//! Signed addition/subtraction engine (C5).
//!
//! The sign dispatch follows the four-quadrant table in spec.md §4.5.
//! Magnitude add/sub walk both operands aligned at the least-significant
//! limb (`offset_from_end` below), honouring suffix elision on the shorter
//! operand by substituting `0` past its stored limbs.

use std::cmp::Ordering;

use crate::limb::{self, R9_BASE};
use crate::storage::BigNum;

/// Reads `other`'s limb aligned `offset_from_end` positions from its own
/// least-significant limb, or `0` if that position is outside `other`
/// entirely (not suffix elision, genuinely shorter operand).
#[inline]
fn aligned(other: &BigNum, other_len: usize, offset_from_end: usize) -> i64 {
    if offset_from_end < other_len {
        other.get(other_len - 1 - offset_from_end) as i64
    } else {
        0
    }
}

/// `target += other` (magnitudes only; sign untouched).
pub(crate) fn add_magnitude_in_place(target: &mut BigNum, other: &BigNum) {
    if other.window_len > target.window_len {
        let grow = other.window_len - target.window_len;
        target.ensure_prefix_headroom(grow + 1);
        target.offset -= grow;
        target.window_len += grow;
    } else {
        target.ensure_prefix_headroom(1);
    }
    target.materialise_full_window();
    let n = target.window_len;
    let other_len = other.window_len;
    let mut carry: i64 = 0;
    for i in (0..n).rev() {
        let a = target.get(i) as i64;
        let b = aligned(other, other_len, n - 1 - i);
        let s = a + b + carry;
        carry = limb::add_carry(s, R9_BASE as i64);
        target.set(i, limb::add_value(s, R9_BASE as i64) as u32);
    }
    if carry > 0 {
        target.ensure_prefix_headroom(1);
        target.offset -= 1;
        target.window_len += 1;
        target.set(0, carry as u32);
    }
    target.canonicalise();
}

/// `target -= other` assuming `|target| >= |other|`; no final borrow can
/// remain (precondition).
pub(crate) fn sub_magnitude_greater_smaller_in_place(target: &mut BigNum, other: &BigNum) {
    target.materialise_full_window();
    let n = target.window_len;
    let other_len = other.window_len;
    let mut borrow: i64 = 0;
    for i in (0..n).rev() {
        let a = target.get(i) as i64;
        let b = aligned(other, other_len, n - 1 - i);
        let d = a - b + borrow;
        borrow = limb::sub_carry(d);
        target.set(i, limb::sub_value(d, R9_BASE as i64) as u32);
    }
    debug_assert_eq!(borrow, 0, "|target| >= |other| precondition violated");
    target.canonicalise();
}

/// `target := other - target` in place, flipping `target`'s sign, for the
/// case `|target| < |other|`. Uses the tens-complement helpers from C1 so
/// the result is produced in one pass over `target`'s own storage.
pub(crate) fn sub_magnitude_smaller_greater_in_place(target: &mut BigNum, other: &BigNum) {
    if other.window_len > target.window_len {
        let grow = other.window_len - target.window_len;
        target.ensure_prefix_headroom(grow);
        target.offset -= grow;
        target.window_len += grow;
    }
    target.materialise_full_window();
    let n = target.window_len;
    let other_len = other.window_len;
    let mut carry: i64 = 0;
    for i in (0..n).rev() {
        let a = target.get(i) as i64;
        let b = aligned(other, other_len, n - 1 - i);
        let d = carry + a - b;
        carry = limb::sub_complement_carry(d);
        target.set(i, limb::sub_complement_value(d, R9_BASE as i64) as u32);
    }
    debug_assert_eq!(carry, 0, "|target| < |other| precondition violated");
    target.negative = !target.negative;
    target.canonicalise();
}

impl BigNum {
    pub fn add_in_place(&mut self, other: &BigNum) {
        if self.negative == other.negative {
            add_magnitude_in_place(self, other);
        } else {
            match self.compare_abs(other) {
                Ordering::Less => sub_magnitude_smaller_greater_in_place(self, other),
                Ordering::Equal | Ordering::Greater => {
                    sub_magnitude_greater_smaller_in_place(self, other)
                }
            }
        }
    }

    pub fn add_in_place_i64(&mut self, other: i64) {
        self.add_in_place(&BigNum::from_i64(other));
    }

    pub fn sub_in_place(&mut self, other: &BigNum) {
        if self.negative != other.negative {
            add_magnitude_in_place(self, other);
        } else {
            match self.compare_abs(other) {
                Ordering::Less => sub_magnitude_smaller_greater_in_place(self, other),
                Ordering::Equal | Ordering::Greater => {
                    sub_magnitude_greater_smaller_in_place(self, other)
                }
            }
        }
    }

    pub fn sub_in_place_i64(&mut self, other: i64) {
        self.sub_in_place(&BigNum::from_i64(other));
    }

    /// Functional addition: allocates a fresh result, following the same
    /// walk as [`add_in_place`](Self::add_in_place) over a copy.
    pub fn add(&self, other: &BigNum) -> BigNum {
        let mut result = self.copy();
        result.add_in_place(other);
        result
    }

    /// Functional subtraction, see [`add`](Self::add).
    pub fn sub(&self, other: &BigNum) -> BigNum {
        let mut result = self.copy();
        result.sub_in_place(other);
        result
    }
}
