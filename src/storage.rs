//! The signed, mutable R9 big number and its sliding-window storage (C3).
//!
//! `BigNum` owns its limb buffer exclusively (move-only value semantics per
//! spec.md §9: every returned instance is freshly owned, never an aliased
//! shared constant). The window `limbs[offset .. offset+window_len]` holds
//! the active value, most-significant limb first; `offset + window_len` is
//! allowed to run past `limbs.len()` ("suffix elision"), with the missing
//! high-index (least-significant, trailing) positions read back as zero.

use std::cmp::Ordering;
use std::sync::atomic::{AtomicU8, Ordering as AtomicOrdering};

use crate::error::BigNumError;
use crate::limb::R9_BASE;

/// Signed arbitrary-precision integer in radix `10^9`.
pub struct BigNum {
    pub(crate) negative: bool,
    pub(crate) limbs: Vec<u32>,
    pub(crate) offset: usize,
    pub(crate) window_len: usize,
    /// Cached decimal digit count of `limbs[offset]`; `0` means uncached.
    pub(crate) first_digit_length: AtomicU8,
}

impl Clone for BigNum {
    fn clone(&self) -> Self {
        BigNum {
            negative: self.negative,
            limbs: self.limbs.clone(),
            offset: self.offset,
            window_len: self.window_len,
            first_digit_length: AtomicU8::new(
                self.first_digit_length.load(AtomicOrdering::Relaxed),
            ),
        }
    }
}

impl BigNum {
    // ---------------------------------------------------------------
    // Window discipline
    // ---------------------------------------------------------------

    /// `limbs[offset+i]` if physically stored, else `0` (suffix elision).
    #[inline]
    pub(crate) fn get(&self, i: usize) -> u32 {
        debug_assert!(i < self.window_len, "digit index out of window");
        let phys = self.offset + i;
        if phys < self.limbs.len() {
            self.limbs[phys]
        } else {
            0
        }
    }

    /// Writes `limbs[offset+i]`. Callers must have called
    /// [`materialise_full_window`](Self::materialise_full_window) first if
    /// the window might extend past physical storage.
    #[inline]
    pub(crate) fn set(&mut self, i: usize, v: u32) {
        debug_assert!(i < self.window_len, "digit index out of window");
        let phys = self.offset + i;
        debug_assert!(
            phys < self.limbs.len(),
            "set() past physical storage; call materialise_full_window first"
        );
        self.limbs[phys] = v;
    }

    /// Copies the window into a fresh buffer of exactly `window_len` limbs
    /// if and only if suffix elision is currently active.
    pub(crate) fn materialise_full_window(&mut self) {
        if self.offset + self.window_len <= self.limbs.len() {
            return;
        }
        let mut fresh = vec![0u32; self.window_len];
        for (i, slot) in fresh.iter_mut().enumerate() {
            *slot = self.get(i);
        }
        self.limbs = fresh;
        self.offset = 0;
    }

    /// Guarantees `offset >= k`, growing the buffer by exactly `k` limbs if
    /// needed (one-shot growth: new capacity = old capacity + k) and moving
    /// the active window to the new offset.
    pub(crate) fn ensure_prefix_headroom(&mut self, k: usize) {
        if self.offset >= k {
            return;
        }
        let old_len = self.limbs.len();
        let mut fresh = vec![0u32; old_len + k];
        fresh[self.offset + k..old_len + k].copy_from_slice(&self.limbs[self.offset..old_len]);
        self.limbs = fresh;
        self.offset += k;
    }

    /// Skips leading zero limbs (advancing `offset`, shrinking `window_len`)
    /// until either `window_len == 1` or the leading limb is non-zero; clears
    /// `negative` if the result is zero; invalidates the digit-count cache.
    pub(crate) fn canonicalise(&mut self) {
        while self.window_len > 1 && self.limbs[self.offset] == 0 {
            self.offset += 1;
            self.window_len -= 1;
        }
        if self.window_len == 1 && self.limbs[self.offset] == 0 {
            self.negative = false;
        }
        self.first_digit_length.store(0, AtomicOrdering::Relaxed);
    }

    /// Resets to the single-limb value `0` at the rightmost position of the
    /// current buffer, leaving all space to the left available for
    /// subsequent in-place growth.
    pub fn clear(&mut self) {
        if self.limbs.is_empty() {
            self.limbs.push(0);
            self.offset = 0;
        } else {
            self.offset = self.limbs.len() - 1;
            self.limbs[self.offset] = 0;
        }
        self.window_len = 1;
        self.negative = false;
        self.first_digit_length.store(0, AtomicOrdering::Relaxed);
    }

    // ---------------------------------------------------------------
    // Allocation policies
    // ---------------------------------------------------------------

    /// Reserves enough limbs for `ceil(d/9)` decimal digits plus one
    /// additional prefix slot, so an in-place add that carries out of the
    /// top does not need to allocate. The returned value is `0`.
    pub fn allocate_for_digits(d: usize) -> Self {
        let limb_count = d.div_ceil(9).max(1);
        let total = limb_count + 1;
        let limbs = vec![0u32; total];
        let offset = total - 1;
        BigNum {
            negative: false,
            limbs,
            offset,
            window_len: 1,
            first_digit_length: AtomicU8::new(0),
        }
    }

    /// Duplicates only the active window, preserving suffix elision.
    pub fn copy(&self) -> Self {
        let phys_end = (self.offset + self.window_len).min(self.limbs.len());
        let slice = self.limbs[self.offset..phys_end].to_vec();
        BigNum {
            negative: self.negative,
            limbs: slice,
            offset: 0,
            window_len: self.window_len,
            first_digit_length: AtomicU8::new(self.first_digit_length.load(AtomicOrdering::Relaxed)),
        }
    }

    /// Materialises the window into exactly `window_len` physical limbs
    /// (internal: scratch buffer for the Russian-peasant reference path).
    pub(crate) fn copy_full_size(&self) -> Self {
        let mut limbs = vec![0u32; self.window_len];
        for (i, slot) in limbs.iter_mut().enumerate() {
            *slot = self.get(i);
        }
        BigNum {
            negative: self.negative,
            limbs,
            offset: 0,
            window_len: self.window_len,
            first_digit_length: AtomicU8::new(0),
        }
    }

    /// Materialises the window with `window_len` limbs of prefix headroom
    /// (internal: scratch buffer for repeated doubling in the
    /// Russian-peasant reference path).
    pub(crate) fn copy_double_size(&self) -> Self {
        let mut limbs = vec![0u32; self.window_len * 2];
        for i in 0..self.window_len {
            limbs[self.window_len + i] = self.get(i);
        }
        BigNum {
            negative: self.negative,
            limbs,
            offset: self.window_len,
            window_len: self.window_len,
            first_digit_length: AtomicU8::new(0),
        }
    }

    // ---------------------------------------------------------------
    // Construction
    // ---------------------------------------------------------------

    /// The value `0`.
    pub fn zero() -> Self {
        BigNum {
            negative: false,
            limbs: vec![0u32],
            offset: 0,
            window_len: 1,
            first_digit_length: AtomicU8::new(0),
        }
    }

    pub fn from_i32(v: i32) -> Self {
        Self::from_i64(v as i64)
    }

    pub fn from_i64(v: i64) -> Self {
        let negative = v < 0;
        let mag: u128 = if v == i64::MIN {
            (i64::MAX as u128) + 1
        } else {
            v.unsigned_abs() as u128
        };
        Self::from_u128_magnitude(mag, negative)
    }

    fn from_u128_magnitude(mut mag: u128, negative: bool) -> Self {
        if mag == 0 {
            return Self::zero();
        }
        let mut rev = Vec::new();
        while mag > 0 {
            rev.push((mag % R9_BASE as u128) as u32);
            mag /= R9_BASE as u128;
        }
        rev.reverse();
        let window_len = rev.len();
        BigNum {
            negative,
            limbs: rev,
            offset: 0,
            window_len,
            first_digit_length: AtomicU8::new(0),
        }
    }

    /// Parses `src[from..to]` as `[sign] digits`.
    pub fn from_decimal_string_range(
        src: &[u8],
        from: usize,
        to: usize,
    ) -> Result<Self, BigNumError> {
        if from > to || to > src.len() {
            return Err(BigNumError::OffsetOutOfRange {
                offset: from,
                len: src.len(),
            });
        }
        if from == to {
            return Err(BigNumError::EmptyInput);
        }
        let mut i = from;
        let negative = match src[i] {
            b'-' => {
                i += 1;
                true
            }
            b'+' => {
                i += 1;
                false
            }
            _ => false,
        };
        if i >= to {
            return Err(BigNumError::EmptyInput);
        }
        let digits = &src[i..to];
        let total_digits = digits.len();
        let window_len = total_digits.div_ceil(9);
        let mut limbs = vec![0u32; window_len];
        let first_chunk_len = total_digits - (window_len - 1) * 9;
        let mut pos = 0usize;
        for (limb_idx, limb) in limbs.iter_mut().enumerate() {
            let chunk_len = if limb_idx == 0 { first_chunk_len } else { 9 };
            let chunk = &digits[pos..pos + chunk_len];
            *limb = crate::digit::parse_limb(chunk, i + pos)?;
            pos += chunk_len;
        }
        let mut num = BigNum {
            negative,
            limbs,
            offset: 0,
            window_len,
            first_digit_length: AtomicU8::new(0),
        };
        num.canonicalise();
        Ok(num)
    }

    pub fn from_decimal_string(src: &[u8]) -> Result<Self, BigNumError> {
        Self::from_decimal_string_range(src, 0, src.len())
    }

    // ---------------------------------------------------------------
    // Mutation
    // ---------------------------------------------------------------

    pub fn set_value(&mut self, other: &BigNum) {
        *self = other.copy();
    }

    pub fn set_value_i64(&mut self, v: i64) {
        *self = BigNum::from_i64(v);
    }

    pub fn negate(&mut self) {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
    }

    // ---------------------------------------------------------------
    // Views
    // ---------------------------------------------------------------

    pub fn is_zero(&self) -> bool {
        self.window_len == 1 && self.get(0) == 0
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn is_even(&self) -> bool {
        self.get(self.window_len - 1) % 2 == 0
    }

    /// Number of limbs in the active window (distinct from [`BigNum::length`],
    /// which counts decimal digits).
    pub(crate) fn limb_len(&self) -> usize {
        self.window_len
    }

    pub(crate) fn top_digit_count(&self) -> u8 {
        let cached = self.first_digit_length.load(AtomicOrdering::Relaxed);
        if cached != 0 {
            return cached;
        }
        let d = crate::digit::limb_digit_count(self.get(0));
        self.first_digit_length.store(d, AtomicOrdering::Relaxed);
        d
    }

    /// Total decimal digits of the magnitude (no sign slot).
    pub fn digit_count(&self) -> usize {
        self.top_digit_count() as usize + 9 * (self.window_len - 1)
    }

    /// `(negative ? 1 : 0) + digit_count()`.
    pub fn length(&self) -> usize {
        (if self.negative { 1 } else { 0 }) + self.digit_count()
    }

    /// Signed magnitude as an `i128`, wide enough to hold any value whose
    /// window fits in three R9 limbs (up to ~10^27) without overflow.
    fn signed_value_i128(&self) -> i128 {
        let mut mag: i128 = 0;
        for i in 0..self.window_len {
            mag = mag * R9_BASE as i128 + self.get(i) as i128;
        }
        if self.negative { -mag } else { mag }
    }

    pub fn is_long(&self) -> bool {
        if self.window_len > 3 {
            return false;
        }
        let v = self.signed_value_i128();
        v >= i64::MIN as i128 && v <= i64::MAX as i128
    }

    pub fn is_int(&self) -> bool {
        if self.window_len > 3 {
            return false;
        }
        let v = self.signed_value_i128();
        v >= i32::MIN as i128 && v <= i32::MAX as i128
    }

    pub fn to_i32(&self) -> i32 {
        if self.is_int() {
            self.signed_value_i128() as i32
        } else {
            i32::MIN
        }
    }

    pub fn to_i64(&self) -> i64 {
        if self.is_long() {
            self.signed_value_i128() as i64
        } else {
            i64::MIN
        }
    }

    pub fn compare_abs(&self, other: &BigNum) -> Ordering {
        if self.window_len != other.window_len {
            return self.window_len.cmp(&other.window_len);
        }
        for i in 0..self.window_len {
            let (a, b) = (self.get(i), other.get(i));
            if a != b {
                return a.cmp(&b);
            }
        }
        Ordering::Equal
    }

    pub fn compare(&self, other: &BigNum) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.compare_abs(other),
            (true, true) => self.compare_abs(other).reverse(),
        }
    }

    pub fn compare_i64(&self, other: i64) -> Ordering {
        self.compare(&BigNum::from_i64(other))
    }

    /// Streams the canonical decimal representation (sign, then digits,
    /// most significant first) through `sink` one R9-limb-sized chunk at a
    /// time, stopping early if `sink` returns `false`.
    pub fn stream(&self, mut sink: impl FnMut(&[u8]) -> bool) {
        if self.negative && !sink(b"-") {
            return;
        }
        let mut buf = [0u8; 9];
        let top_width = self.top_digit_count() as usize;
        crate::digit::format_limb(&mut buf[9 - top_width..], self.get(0));
        if !sink(&buf[9 - top_width..]) {
            return;
        }
        for i in 1..self.window_len {
            crate::digit::format_limb(&mut buf, self.get(i));
            if !sink(&buf) {
                return;
            }
        }
    }

    pub fn to_byte_array(&self, include_sign: bool) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.length());
        self.stream(|chunk| {
            if include_sign || chunk != b"-" {
                out.extend_from_slice(chunk);
            }
            true
        });
        out
    }
}

impl std::fmt::Debug for BigNum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bytes = self.to_byte_array(true);
        write!(f, "{}", String::from_utf8_lossy(&bytes))
    }
}

impl std::fmt::Display for BigNum {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bytes = self.to_byte_array(true);
        write!(f, "{}", String::from_utf8_lossy(&bytes))
    }
}

impl PartialEq for BigNum {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for BigNum {}

impl PartialOrd for BigNum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl Ord for BigNum {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}
