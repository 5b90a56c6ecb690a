//! Random-access decimal digit indexing over an R9 magnitude (C9), without
//! ever materialising a string.
//!
//! `i` is zero-based from the most significant position and includes the
//! sign slot: for a negative value, `digit_at(0)` is `b'-'` and every
//! magnitude digit shifts right by one. This matches `length()`'s own
//! accounting (`(negative ? 1 : 0) + digit_count()`), so `i` ranges over
//! `0..length()`.

use crate::digit::div_pow10;
use crate::error::BigNumError;
use crate::storage::BigNum;

impl BigNum {
    /// Returns the decimal digit at position `i`, or `b'-'` at `i == 0`
    /// when the value is negative.
    pub fn digit_at(&self, i: usize) -> Result<u8, BigNumError> {
        let total = self.length();
        if i >= total {
            return Err(BigNumError::OffsetOutOfRange {
                offset: i,
                len: total,
            });
        }
        let i = if self.is_negative() {
            if i == 0 {
                return Ok(b'-');
            }
            i - 1
        } else {
            i
        };
        let top_len = self.top_digit_count() as usize;
        if i < top_len {
            let pos_from_right = (top_len - 1 - i) as u8;
            Ok((div_pow10(self.get(0), pos_from_right) % 10) as u8)
        } else {
            let rem = i - top_len;
            let limb_index = 1 + rem / 9;
            let pos_in_limb = (rem % 9) as u8;
            let pos_from_right = 8 - pos_in_limb;
            Ok((div_pow10(self.get(limb_index), pos_from_right) % 10) as u8)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_at_matches_decimal_string() {
        let n = BigNum::from_decimal_string(b"1234567890123").unwrap();
        let s = "1234567890123";
        for (i, c) in s.bytes().enumerate() {
            assert_eq!(n.digit_at(i).unwrap(), c - b'0');
        }
        assert!(n.digit_at(s.len()).is_err());
    }

    #[test]
    fn digit_at_zero() {
        let z = BigNum::zero();
        assert_eq!(z.digit_at(0).unwrap(), 0);
        assert!(z.digit_at(1).is_err());
    }

    #[test]
    fn digit_at_negative_exposes_sign_slot() {
        let n = BigNum::from_decimal_string(b"-42").unwrap();
        assert_eq!(n.digit_at(0).unwrap(), b'-');
        assert_eq!(n.digit_at(1).unwrap(), 4);
        assert_eq!(n.digit_at(2).unwrap(), 2);
        assert!(n.digit_at(3).is_err());
    }
}
