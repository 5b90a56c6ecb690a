//! Quadratic schoolbook multiply over limb arrays (C6).
//!
//! [`schoolbook_mul`] is the "pure-data" routine spec.md §4.6 calls for: it
//! takes nothing but limb slices and a destination slice, so a systems
//! implementation is free to inline, vectorise, or otherwise specialise it
//! without touching anything above this module.

use crate::limb::R9_BASE;
use crate::storage::BigNum;

/// Computes `A * B` into `out`, where `A` and `B` are limb slices
/// (most-significant limb first) of lengths `m` and `n`.
///
/// `shift` lets a caller whose operands carry suffix-elided trailing zero
/// limbs beyond `A`/`B` pass a destination of only `m + n - shift` limbs:
/// the guaranteed-zero least-significant `shift` limbs of the true
/// `m + n`-limb product are simply not written. With `shift == 0`,
/// `out.len()` must be exactly `m + n`.
pub fn schoolbook_mul(a: &[u32], b: &[u32], out: &mut [u32], shift: usize) {
    let m = a.len();
    let n = b.len();
    debug_assert_eq!(out.len() + shift, m + n);
    if shift == 0 {
        schoolbook_mul_full(a, b, out);
        return;
    }
    let mut full = vec![0u32; m + n];
    schoolbook_mul_full(a, b, &mut full);
    debug_assert!(
        full[m + n - shift..].iter().all(|&x| x == 0),
        "shift beyond the product's actual trailing zeros"
    );
    out.copy_from_slice(&full[..m + n - shift]);
}

/// Full, unshifted schoolbook multiply: `out.len() == a.len() + b.len()`.
///
/// The outer loop walks the shorter operand; callers that care about that
/// ordering for cache behaviour should pass the shorter slice as `b`.
fn schoolbook_mul_full(a: &[u32], b: &[u32], out: &mut [u32]) {
    let m = a.len();
    let n = b.len();
    debug_assert_eq!(out.len(), m + n);
    for slot in out.iter_mut() {
        *slot = 0;
    }
    for i in 0..n {
        let bi = b[n - 1 - i] as u64;
        if bi == 0 {
            continue;
        }
        let mut carry: u64 = 0;
        for j in 0..m {
            let aj = a[m - 1 - j] as u64;
            let idx = m + n - 1 - (i + j);
            let p = carry + aj * bi + out[idx] as u64;
            out[idx] = (p % R9_BASE) as u32;
            carry = p / R9_BASE;
        }
        let mut pos = i + m;
        while carry > 0 {
            let idx = m + n - 1 - pos;
            let p = carry + out[idx] as u64;
            out[idx] = (p % R9_BASE) as u32;
            carry = p / R9_BASE;
            pos += 1;
        }
    }
}

/// Multiplies two magnitudes (sign ignored on input, always non-negative on
/// output), materialising both windows first so the caller's suffix
/// elision never has to be threaded through the inner loop.
pub(crate) fn multiply_magnitude(a: &BigNum, b: &BigNum) -> BigNum {
    let a_full = a.copy_full_size();
    let b_full = b.copy_full_size();
    let m = a_full.limbs.len();
    let n = b_full.limbs.len();
    let mut out = vec![0u32; m + n];
    schoolbook_mul(&a_full.limbs, &b_full.limbs, &mut out, 0);
    let window_len = out.len();
    let mut result = BigNum {
        negative: false,
        limbs: out,
        offset: 0,
        window_len,
        first_digit_length: std::sync::atomic::AtomicU8::new(0),
    };
    result.canonicalise();
    result
}

/// Public entry point: schoolbook multiplication, sign-aware (C6's
/// externally visible operation, `multiply_simple` in spec.md §6).
pub fn multiply_simple(a: &BigNum, b: &BigNum) -> BigNum {
    let mut result = multiply_magnitude(a, b);
    result.negative = a.negative ^ b.negative;
    result.canonicalise();
    result
}
