//! Left-to-right square-and-multiply exponentiation (C8), riding on
//! Karatsuba for the underlying multiplies the same way the schoolbook
//! fallback rides on `multiply_magnitude`.

use crate::karatsuba::karatsuba;
use crate::storage::BigNum;

/// Repeated-squaring exponentiation to a non-negative `exp`, using
/// Karatsuba multiply with the given crossover `threshold`.
pub fn pow(base: &BigNum, exp: u64, threshold: usize) -> BigNum {
    if exp == 0 {
        return BigNum::from_i64(1);
    }
    let mut result: Option<BigNum> = None;
    let mut b = base.copy();
    let mut e = exp;
    while e > 0 {
        if e & 1 == 1 {
            result = Some(match result {
                None => b.copy(),
                Some(r) => karatsuba(&r, &b, threshold),
            });
        }
        e >>= 1;
        if e > 0 {
            b = karatsuba(&b, &b, threshold);
        }
    }
    result.unwrap()
}

impl BigNum {
    /// Exponentiation with the default Karatsuba crossover.
    pub fn pow(&self, exp: u64) -> BigNum {
        pow(self, exp, BigNum::DEFAULT_KARATSUBA_THRESHOLD)
    }

    /// Exponentiation with an explicit Karatsuba crossover threshold.
    pub fn pow_with_threshold(&self, exp: u64, threshold: usize) -> BigNum {
        pow(self, exp, threshold)
    }
}

#[cfg(feature = "parallel")]
mod parallel {
    use super::*;
    use crate::karatsuba::parallel_karatsuba;

    /// Repeated-squaring exponentiation using the fork-join Karatsuba
    /// multiply for each squaring/multiply step. A `None` pool makes every
    /// step sequential, so this is bit-identical to [`super::pow`] in that
    /// case.
    pub fn parallel_pow(
        base: &BigNum,
        exp: u64,
        threshold: usize,
        max_depth: usize,
        pool: Option<&rayon::ThreadPool>,
    ) -> BigNum {
        if exp == 0 {
            return BigNum::from_i64(1);
        }
        let mut result: Option<BigNum> = None;
        let mut b = base.copy();
        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = Some(match result {
                    None => b.copy(),
                    Some(r) => parallel_karatsuba(&r, &b, threshold, max_depth, pool),
                });
            }
            e >>= 1;
            if e > 0 {
                b = parallel_karatsuba(&b, &b, threshold, max_depth, pool);
            }
        }
        result.unwrap()
    }

    impl BigNum {
        /// Fork-join exponentiation riding on
        /// [`parallel_multiply_karatsuba`](Self::parallel_multiply_karatsuba).
        pub fn parallel_pow(
            &self,
            exp: u64,
            threshold: usize,
            max_depth: usize,
            pool: Option<&rayon::ThreadPool>,
        ) -> BigNum {
            parallel_pow(self, exp, threshold, max_depth, pool)
        }
    }
}

#[cfg(feature = "parallel")]
pub use parallel::parallel_pow;
