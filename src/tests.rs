//! Property-based tests using quickcheck.
//!
//! Properties compare `BigNum` against native `i64`/`i128` arithmetic where
//! the values stay representable, and against independent reference paths
//! (Russian-peasant multiply, the schoolbook/Karatsuba agreement) where they
//! don't.

use quickcheck_macros::quickcheck;

use crate::karatsuba::karatsuba;
use crate::mul_schoolbook::multiply_simple;
use crate::russian_peasant::russian_peasant;
use crate::BigNum;

// ============================================================================
// Round-trip and sign
// ============================================================================

#[quickcheck]
fn roundtrip_i64(v: i64) -> bool {
    BigNum::from_i64(v).to_i64() == v
}

#[quickcheck]
fn roundtrip_decimal_string(v: i64) -> bool {
    let n = BigNum::from_i64(v);
    let s = n.to_byte_array(true);
    BigNum::from_decimal_string(&s).unwrap() == n
}

#[quickcheck]
fn negation_involution(v: i64) -> bool {
    let mut n = BigNum::from_i64(v);
    n.negate();
    n.negate();
    n == BigNum::from_i64(v)
}

#[quickcheck]
fn negation_sums_to_zero(v: i64) -> bool {
    let n = BigNum::from_i64(v);
    let mut neg = n.copy();
    neg.negate();
    let sum = n.add(&neg);
    sum.is_zero() && !sum.is_negative()
}

// ============================================================================
// Add/sub
// ============================================================================

#[quickcheck]
fn add_commutative(a: i64, b: i64) -> bool {
    BigNum::from_i64(a).add(&BigNum::from_i64(b)) == BigNum::from_i64(b).add(&BigNum::from_i64(a))
}

#[quickcheck]
fn add_associative(a: i32, b: i32, c: i32) -> bool {
    let (a, b, c) = (
        BigNum::from_i32(a),
        BigNum::from_i32(b),
        BigNum::from_i32(c),
    );
    a.add(&b).add(&c) == a.add(&b.add(&c))
}

#[quickcheck]
fn add_matches_native_via_i128(a: i64, b: i64) -> bool {
    let expected = a as i128 + b as i128;
    let result = BigNum::from_i64(a).add(&BigNum::from_i64(b));
    result == BigNum::from_decimal_string(expected.to_string().as_bytes()).unwrap()
}

#[quickcheck]
fn sub_matches_native_via_i128(a: i64, b: i64) -> bool {
    let expected = a as i128 - b as i128;
    let result = BigNum::from_i64(a).sub(&BigNum::from_i64(b));
    result == BigNum::from_decimal_string(expected.to_string().as_bytes()).unwrap()
}

#[quickcheck]
fn sub_self_is_zero(a: i64) -> bool {
    let n = BigNum::from_i64(a);
    let zero = n.sub(&n);
    zero.is_zero() && !zero.is_negative()
}

// ============================================================================
// Multiplication
// ============================================================================

#[quickcheck]
fn distributivity(a: i32, b: i32, c: i32) -> bool {
    let (a, b, c) = (
        BigNum::from_i32(a),
        BigNum::from_i32(b),
        BigNum::from_i32(c),
    );
    let lhs = multiply_simple(&a, &b.add(&c));
    let rhs = multiply_simple(&a, &b).add(&multiply_simple(&a, &c));
    lhs == rhs
}

#[quickcheck]
fn multiplication_agreement(a: i64, b: i64) -> bool {
    let (a, b) = (BigNum::from_i64(a), BigNum::from_i64(b));
    let simple = multiply_simple(&a, &b);
    let kara1 = karatsuba(&a, &b, 1);
    let peasant = russian_peasant(&a, &b);
    simple == kara1 && kara1 == peasant
}

#[cfg(feature = "parallel")]
#[quickcheck]
fn parallel_multiplication_agrees_sequentially(a: i64, b: i64) -> bool {
    let (a, b) = (BigNum::from_i64(a), BigNum::from_i64(b));
    let sequential = karatsuba(&a, &b, 1);
    let parallel_no_pool = crate::karatsuba::parallel_karatsuba(&a, &b, 1, 8, None);
    sequential == parallel_no_pool
}

#[quickcheck]
fn mul_matches_native_via_i128(a: i32, b: i32) -> bool {
    let expected = a as i128 * b as i128;
    let result = multiply_simple(&BigNum::from_i32(a), &BigNum::from_i32(b));
    result == BigNum::from_decimal_string(expected.to_string().as_bytes()).unwrap()
}

// ============================================================================
// Scalar ops
// ============================================================================

#[quickcheck]
fn division_multiplication_relation(a: i32, d: i32) -> bool {
    if d == 0 {
        return true;
    }
    let mut n = multiply_simple(&BigNum::from_i32(a), &BigNum::from_i32(d));
    let remainder = n.div_in_place(d).unwrap();
    remainder == 0 && n == BigNum::from_i32(a)
}

#[quickcheck]
fn halve_double_duality(v: u32) -> bool {
    let original = BigNum::from_i64(v as i64);
    let mut n = original.copy();
    let was_odd = n.halve_in_place();
    n.double_in_place();
    let mut expected = original.copy();
    if was_odd {
        expected.decrement_in_place();
    }
    n == expected
}

#[quickcheck]
fn increment_decrement_are_inverses(v: i64) -> bool {
    let mut n = BigNum::from_i64(v);
    n.increment_in_place();
    n.decrement_in_place();
    n == BigNum::from_i64(v)
}

// ============================================================================
// Digit access
// ============================================================================

#[quickcheck]
fn digit_indexing_matches_decimal_string(v: i64) -> bool {
    let n = BigNum::from_i64(v);
    let s = n.to_byte_array(true);
    (0..s.len()).all(|i| {
        let expected = if s[i] == b'-' { b'-' } else { s[i] - b'0' };
        n.digit_at(i).unwrap() == expected
    })
}

// ============================================================================
// Scientific notation
// ============================================================================

#[quickcheck]
fn scientific_roundtrip_unbounded(v: i64) -> bool {
    let n = BigNum::from_i64(v);
    let s = n.to_scientific(i32::MIN);
    BigNum::from_scientific(s.as_bytes()).unwrap() == n
}

// ============================================================================
// Boundary cases
// ============================================================================

#[test]
fn min_i64_round_trips() {
    let n = BigNum::from_i64(i64::MIN);
    assert_eq!(n.to_i64(), i64::MIN);
    assert!(n.is_negative());
}

#[test]
fn min_i32_round_trips() {
    let n = BigNum::from_i32(i32::MIN);
    assert_eq!(n.to_i32(), i32::MIN);
}

#[test]
fn carry_cascade_all_nines() {
    let all_nines = BigNum::from_decimal_string(b"999999999999999999999999999").unwrap();
    let mut n = all_nines.copy();
    n.increment_in_place();
    assert_eq!(
        n,
        BigNum::from_decimal_string(b"1000000000000000000000000000").unwrap()
    );
}

#[test]
fn zero_crossing_subtraction_flips_sign() {
    let a = BigNum::from_i64(5);
    let b = BigNum::from_i64(12);
    let result = a.sub(&b);
    assert_eq!(result, BigNum::from_i64(-7));
    assert!(result.is_negative());
}

#[test]
fn karatsuba_threshold_one_matches_schoolbook() {
    let a = BigNum::from_decimal_string(&b"7".repeat(200)).unwrap();
    let b = BigNum::from_decimal_string(&b"8".repeat(150)).unwrap();
    assert_eq!(multiply_simple(&a, &b), karatsuba(&a, &b, 1));
}
