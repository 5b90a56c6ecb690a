//! Russian-peasant multiplication: a structurally independent reference
//! implementation (repeated doubling/halving rather than limb-array
//! convolution) used only by the property tests in §8 to check agreement
//! with [`crate::mul_schoolbook::multiply_simple`]/
//! [`crate::karatsuba::karatsuba`].
//!
//! `copy_double_size`/`copy_full_size` exist on [`BigNum`] specifically for
//! this path: the multiplicand is repeatedly doubled, so starting it in a
//! buffer with a full window of prefix headroom avoids reallocating on every
//! `double_in_place` call.

use crate::storage::BigNum;

fn russian_peasant_magnitude(a: &BigNum, b: &BigNum) -> BigNum {
    let mut multiplier = a.copy_double_size();
    let mut counter = b.copy_full_size();
    let mut result = BigNum::zero();
    while !counter.is_zero() {
        let odd = !counter.is_even();
        if odd {
            crate::addsub::add_magnitude_in_place(&mut result, &multiplier);
        }
        counter.halve_in_place();
        if !counter.is_zero() {
            multiplier.double_in_place();
        }
    }
    result
}

/// Sign-aware Russian-peasant multiply.
pub fn russian_peasant(a: &BigNum, b: &BigNum) -> BigNum {
    let mut result = russian_peasant_magnitude(a, b);
    result.negative = a.negative ^ b.negative;
    result.canonicalise();
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agrees_with_schoolbook() {
        let a = BigNum::from_decimal_string(b"123456789012345").unwrap();
        let b = BigNum::from_decimal_string(b"998877665544332211").unwrap();
        assert_eq!(russian_peasant(&a, &b), crate::mul_schoolbook::multiply_simple(&a, &b));
    }

    #[test]
    fn zero_operand() {
        let a = BigNum::zero();
        let b = BigNum::from_decimal_string(b"12345").unwrap();
        assert!(russian_peasant(&a, &b).is_zero());
    }

    #[test]
    fn negative_signs() {
        let a = BigNum::from_i64(-7);
        let b = BigNum::from_i64(6);
        assert_eq!(russian_peasant(&a, &b), BigNum::from_i64(-42));
    }
}
