//! Literal seed scenarios (spec.md §8), one per reproducible example.

use decibig::{karatsuba, multiply_simple, BigNum};

#[test]
fn scenario_1_string_repeat_times_scalar() {
    let a = BigNum::from_decimal_string(&b"5".repeat(1000)).unwrap();
    let product = multiply_simple(&a, &BigNum::from_i32(33));
    let digits = product.digit_count();
    assert!(digits == 1001 || digits == 1002);
    let s = product.to_byte_array(true);
    assert!(s.starts_with(b"1833"));
    assert!(s.ends_with(b"3315"));

    let small = BigNum::from_decimal_string(b"555").unwrap();
    let small_product = multiply_simple(&small, &BigNum::from_i32(33));
    assert_eq!(small_product, BigNum::from_i64(18315));
}

#[test]
fn scenario_2_carry_past_limb_boundary() {
    let mut n = BigNum::from_i64(999_999_999_999_999_999);
    n.increment_in_place();
    assert_eq!(n, BigNum::from_i64(1_000_000_000_000_000_000));
}

#[test]
fn scenario_3_negative_one_plus_one_is_nonnegative_zero() {
    let mut n = BigNum::from_decimal_string(b"-1").unwrap();
    n.increment_in_place();
    assert!(n.is_zero());
    assert!(!n.is_negative());
}

#[test]
fn scenario_4_scientific_plain_exponent() {
    let n = BigNum::from_scientific(b"1E100").unwrap();
    assert_eq!(n.digit_count(), 101);
    assert_eq!(n.digit_at(0).unwrap(), 1);
    for k in 1..=100 {
        assert_eq!(n.digit_at(k).unwrap(), 0);
    }
}

#[test]
fn scenario_5_scientific_periodic_tail() {
    let n = BigNum::from_scientific(b"1E50P5").unwrap();
    assert_eq!(n.digit_at(0).unwrap(), 1);
    for k in 1..=50 {
        assert_eq!(n.digit_at(k).unwrap(), 5);
    }
}

#[test]
fn scenario_6_karatsuba_agrees_with_schoolbook_and_parallel() {
    let a = BigNum::from_decimal_string(&b"7".repeat(100_000)).unwrap();
    let b = BigNum::from_decimal_string(&b"8".repeat(5_000)).unwrap();

    let schoolbook = multiply_simple(&a, &b);
    let sequential_karatsuba = karatsuba(&a, &b, 75);
    assert_eq!(schoolbook, sequential_karatsuba);

    let pool = decibig::rayon::ThreadPoolBuilder::new()
        .num_threads(4)
        .build()
        .unwrap();
    let parallel = decibig::parallel_karatsuba(&a, &b, 75, decibig::default_max_depth(4), Some(&pool));
    assert_eq!(schoolbook, parallel);
}
