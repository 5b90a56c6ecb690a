//! RA representation: configurable-base digit storage for fast I/O, and the
//! R9↔RA bridges (C2's base-B half, plus the bridges named in spec.md §6).
//!
//! RA shares R9's sliding-window/suffix-elision storage shape but stores one
//! digit per limb (`u8`) instead of nine decimal digits packed into a `u32`,
//! and carries no sign: sign handling stays in R9, per spec.md §3.

use std::cmp::Ordering;
use std::rc::Rc;

use crate::error::BigNumError;
use crate::storage::BigNum;

/// Immutable, shareable description of a base B∈[2,256] encoding.
pub struct BaseTable {
    base: u16,
    zero_byte: u8,
    decode: [u8; 256],
    encode: Vec<u8>,
}

impl BaseTable {
    /// Builds a table for `base` digits, encoded through `alphabet`
    /// (`alphabet[d]` is the byte denoting digit `d`; `alphabet.len()` must
    /// equal `base`, and every byte must be ASCII-printable so
    /// [`BigNumA::to_hex_string`] can always render it). Bytes outside
    /// `alphabet` decode as digit `0` (lossy decoding of illegal input is
    /// deliberate, not an error, per spec.md §4.2).
    pub fn new(base: u16, alphabet: &[u8]) -> Result<Rc<BaseTable>, BigNumError> {
        if !(2..=256).contains(&base) || alphabet.len() != base as usize {
            return Err(BigNumError::RequestedArraySizeExceedsMaximum);
        }
        if let Some(&bad) = alphabet.iter().find(|b| !b.is_ascii_graphic()) {
            return Err(BigNumError::InvalidCharacter {
                index: alphabet.iter().position(|&b| b == bad).unwrap(),
                found: bad,
            });
        }
        let mut decode = [0u8; 256];
        for (digit, &byte) in alphabet.iter().enumerate() {
            decode[byte as usize] = digit as u8;
        }
        Ok(Rc::new(BaseTable {
            base,
            zero_byte: alphabet[0],
            decode,
            encode: alphabet.to_vec(),
        }))
    }

    pub fn base(&self) -> u16 {
        self.base
    }

    fn decode_byte(&self, b: u8) -> u8 {
        self.decode[b as usize]
    }

    fn encode_digit(&self, d: u8) -> u8 {
        self.encode[d as usize]
    }
}

/// A non-negative integer stored as one digit per `u8` limb in a
/// caller-chosen base, most-significant limb first.
pub struct BigNumA {
    limbs: Vec<u8>,
    offset: usize,
    window_len: usize,
    table: Rc<BaseTable>,
}

impl BigNumA {
    fn get(&self, i: usize) -> u8 {
        let idx = self.offset + i;
        if idx < self.limbs.len() {
            self.limbs[idx]
        } else {
            0
        }
    }

    fn canonicalise(&mut self) {
        while self.window_len > 1 && self.get(0) == 0 {
            self.offset += 1;
            self.window_len -= 1;
        }
    }

    /// The zero value in `table`'s base.
    pub fn zero(table: Rc<BaseTable>) -> BigNumA {
        BigNumA {
            limbs: vec![0u8],
            offset: 0,
            window_len: 1,
            table,
        }
    }

    /// Parses a byte string of encoded digits, most significant first.
    /// Bytes absent from the table's alphabet decode as digit `0`
    /// (spec.md §4.2's lossy-decode rule), so this never fails.
    pub fn from_bytes(table: Rc<BaseTable>, src: &[u8]) -> BigNumA {
        if src.is_empty() {
            return BigNumA::zero(table);
        }
        let limbs: Vec<u8> = src.iter().map(|&b| table.decode_byte(b)).collect();
        let window_len = limbs.len();
        let mut n = BigNumA {
            limbs,
            offset: 0,
            window_len,
            table,
        };
        n.canonicalise();
        n
    }

    pub fn is_zero(&self) -> bool {
        self.window_len == 1 && self.get(0) == 0
    }

    pub fn base(&self) -> u16 {
        self.table.base()
    }

    pub fn digit_count(&self) -> usize {
        self.window_len
    }

    /// Renders the digit sequence through the table's encode alphabet. The
    /// name follows spec.md §6 ("to_hex_string"); the table need not
    /// actually be base 16.
    pub fn to_hex_string(&self) -> String {
        let bytes: Vec<u8> = (0..self.window_len)
            .map(|i| self.table.encode_digit(self.get(i)))
            .collect();
        String::from_utf8(bytes).expect("BaseTable alphabets are required to be ASCII-printable")
    }

    /// Compares two RA values; fails if they were built against different
    /// `BaseTable`s (same base, same alphabet) rather than silently
    /// comparing incompatible digit streams.
    pub fn compare(&self, other: &BigNumA) -> Result<Ordering, BigNumError> {
        if !Rc::ptr_eq(&self.table, &other.table) && self.table.base != other.table.base {
            return Err(BigNumError::IncompatibleBases {
                lhs: self.table.base,
                rhs: other.table.base,
            });
        }
        if self.window_len != other.window_len {
            return Ok(self.window_len.cmp(&other.window_len));
        }
        for i in 0..self.window_len {
            match self.get(i).cmp(&other.get(i)) {
                Ordering::Equal => continue,
                ord => return Ok(ord),
            }
        }
        Ok(Ordering::Equal)
    }

    /// Converts to R9 via Horner's method: `value = ((d0)*base + d1)*base +
    /// d2 ...`, riding on R9's own scalar multiply/add rather than
    /// reimplementing the accumulation.
    pub fn to_r9(&self) -> BigNum {
        let base = self.table.base() as i64;
        let mut acc = BigNum::zero();
        for i in 0..self.window_len {
            acc.mul_in_place(base);
            acc.add_in_place_i64(self.get(i) as i64);
        }
        acc
    }

    /// Converts an R9 magnitude into RA by repeated division, collecting
    /// remainders least-significant first (sign is dropped: RA is
    /// unsigned).
    pub fn from_r9(table: Rc<BaseTable>, value: &BigNum) -> BigNumA {
        if value.is_zero() {
            return BigNumA::zero(table);
        }
        let base = table.base() as i32;
        let mut work = value.copy();
        work.negate_to_positive();
        let mut digits_lsb_first = Vec::new();
        while !work.is_zero() {
            let r = work
                .div_in_place(base)
                .expect("base is in 2..=256, never zero");
            digits_lsb_first.push(r as u8);
        }
        digits_lsb_first.reverse();
        let window_len = digits_lsb_first.len();
        let mut n = BigNumA {
            limbs: digits_lsb_first,
            offset: 0,
            window_len,
            table,
        };
        n.canonicalise();
        n
    }
}

impl BigNum {
    /// Forces the sign non-negative without touching the magnitude; used by
    /// [`BigNumA::from_r9`], which only ever consumes a magnitude.
    pub(crate) fn negate_to_positive(&mut self) {
        self.negative = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decimal_table() -> Rc<BaseTable> {
        BaseTable::new(10, b"0123456789").unwrap()
    }

    fn hex_table() -> Rc<BaseTable> {
        BaseTable::new(16, b"0123456789abcdef").unwrap()
    }

    #[test]
    fn decimal_round_trip_through_r9() {
        let table = decimal_table();
        let n = BigNumA::from_bytes(table.clone(), b"1234567890123456789");
        let r9 = n.to_r9();
        let back = BigNumA::from_r9(table, &r9);
        assert_eq!(n.to_hex_string(), back.to_hex_string());
    }

    #[test]
    fn hex_round_trip() {
        let table = hex_table();
        let r9 = BigNum::from_decimal_string(b"255").unwrap();
        let hex = BigNumA::from_r9(table.clone(), &r9);
        assert_eq!(hex.to_hex_string(), "ff");
        assert_eq!(hex.to_r9(), r9);
    }

    #[test]
    fn incompatible_bases_rejected() {
        let a = BigNumA::from_bytes(decimal_table(), b"5");
        let b = BigNumA::from_bytes(hex_table(), b"5");
        assert!(matches!(
            a.compare(&b),
            Err(BigNumError::IncompatibleBases { .. })
        ));
    }

    #[test]
    fn non_printable_alphabet_byte_rejected() {
        let mut alphabet = vec![0u8; 256];
        for (d, b) in alphabet.iter_mut().enumerate() {
            *b = d as u8;
        }
        assert!(matches!(
            BaseTable::new(256, &alphabet),
            Err(BigNumError::InvalidCharacter { .. })
        ));
    }
}
