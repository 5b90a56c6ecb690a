//! In-place operations against a single machine-word operand (C4).

use crate::error::BigNumError;
use crate::limb::R9_BASE;
use crate::storage::BigNum;

impl BigNum {
    /// Multiplies in place by a signed 64-bit scalar.
    pub fn mul_in_place(&mut self, s: i64) {
        if s == i64::MIN {
            // Can't negate MIN; route the whole thing through the general
            // BigNum path and let the sign XOR below apply.
            let mag = BigNum::from_i64(i64::MIN);
            self.mul_in_place_magnitude(&mag);
            self.negative ^= true;
            self.canonicalise();
            return;
        }
        if s == 0 {
            self.clear();
            return;
        }
        let mag = s.unsigned_abs();
        if mag < R9_BASE {
            self.mul_in_place_small(mag as u32);
        } else {
            let tmp = BigNum::from_i64(mag as i64);
            self.mul_in_place_magnitude(&tmp);
        }
        self.negative ^= s < 0;
        self.canonicalise();
    }

    fn mul_in_place_small(&mut self, m: u32) {
        self.materialise_full_window();
        let mut carry: u64 = 0;
        for i in (0..self.window_len).rev() {
            let p = carry + (self.get(i) as u64) * (m as u64);
            self.set(i, (p % R9_BASE) as u32);
            carry = p / R9_BASE;
        }
        if carry > 0 {
            debug_assert!(carry < R9_BASE);
            self.ensure_prefix_headroom(1);
            self.offset -= 1;
            self.window_len += 1;
            self.set(0, carry as u32);
        }
    }

    /// Multiplies the magnitude by `other`'s magnitude (1-3 limbs per the
    /// scalar-multiply fallback in spec.md §4.4.1), leaving `self.negative`
    /// untouched for the caller to XOR in.
    fn mul_in_place_magnitude(&mut self, other: &BigNum) {
        let product = crate::mul_schoolbook::multiply_magnitude(self, other);
        self.limbs = product.limbs;
        self.offset = product.offset;
        self.window_len = product.window_len;
        self.first_digit_length.store(0, std::sync::atomic::Ordering::Relaxed);
    }

    /// Divides in place by a signed 32-bit divisor, returning the remainder
    /// (truncation toward zero; remainder's sign matches the dividend's).
    pub fn div_in_place(&mut self, d: i32) -> Result<i32, BigNumError> {
        if d == 0 {
            return Err(BigNumError::DivisionByZero);
        }
        if d == 1 || self.is_zero() {
            return Ok(0);
        }
        self.materialise_full_window();
        let dividend_negative = self.negative;
        let mag = d.unsigned_abs() as u64;
        let mut r: u64 = 0;
        for i in 0..self.window_len {
            let v = r * R9_BASE + self.get(i) as u64;
            let q = v / mag;
            debug_assert!(q < R9_BASE);
            self.set(i, q as u32);
            r = v % mag;
        }
        self.negative ^= d < 0;
        self.canonicalise();
        let remainder = r as i32;
        Ok(if dividend_negative { -remainder } else { remainder })
    }

    /// Halves in place (floor division by two); returns `true` iff the
    /// original value was odd.
    pub fn halve_in_place(&mut self) -> bool {
        self.materialise_full_window();
        let half_base = (R9_BASE / 2) as u32;
        let mut carry: u32 = 0;
        let mut last_odd = false;
        for i in 0..self.window_len {
            let x = self.get(i);
            let odd = x % 2 == 1;
            self.set(i, x / 2 + carry);
            carry = if odd { half_base } else { 0 };
            last_odd = odd;
        }
        self.canonicalise();
        last_odd
    }

    /// Doubles in place.
    pub fn double_in_place(&mut self) {
        self.materialise_full_window();
        let base = R9_BASE as u32;
        let mut carry: u32 = 0;
        for i in (0..self.window_len).rev() {
            let v = self.get(i) * 2 + carry;
            if v >= base {
                self.set(i, v - base);
                carry = 1;
            } else {
                self.set(i, v);
                carry = 0;
            }
        }
        if carry > 0 {
            self.ensure_prefix_headroom(1);
            self.offset -= 1;
            self.window_len += 1;
            self.set(0, carry);
        }
    }

    fn is_magnitude_one(&self) -> bool {
        self.window_len == 1 && self.get(0) == 1
    }

    fn add_magnitude_one_in_place(&mut self) {
        self.materialise_full_window();
        let last = self.window_len - 1;
        let x = self.get(last);
        if x + 1 < R9_BASE as u32 {
            self.set(last, x + 1);
        } else {
            crate::addsub::add_magnitude_in_place(self, &BigNum::from_i64(1));
        }
    }

    fn sub_magnitude_one_in_place(&mut self) {
        self.materialise_full_window();
        let last = self.window_len - 1;
        let x = self.get(last);
        if x > 0 {
            self.set(last, x - 1);
            self.canonicalise();
        } else {
            crate::addsub::sub_magnitude_greater_smaller_in_place(self, &BigNum::from_i64(1));
        }
    }

    /// Fast in-place increment: avoids the full add engine unless a carry
    /// would cross a limb boundary, or the value crosses zero (`-1 -> 0`).
    pub fn increment_in_place(&mut self) {
        if self.negative {
            if self.is_magnitude_one() {
                self.clear();
            } else {
                self.sub_magnitude_one_in_place();
            }
        } else {
            self.add_magnitude_one_in_place();
        }
    }

    /// Fast in-place decrement: the zero-crossing case (`0 -> -1`) is
    /// handled explicitly.
    pub fn decrement_in_place(&mut self) {
        if self.negative {
            self.add_magnitude_one_in_place();
        } else if self.is_zero() {
            *self = BigNum::from_i64(-1);
        } else {
            self.sub_magnitude_one_in_place();
        }
    }
}
