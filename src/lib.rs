//! Decimal-radix arbitrary-precision integer arithmetic.
//!
//! Two representations share one algorithmic skeleton: [`BigNum`] (R9,
//! `u32` limbs in radix 10^9, the fast arithmetic form) and [`ra::BigNumA`]
//! (RA, `u8` limbs in a configurable base through a [`ra::BaseTable`], the
//! fast-I/O form). See each module for the component it implements.

mod addsub;
mod digit;
mod digit_access;
mod error;
mod karatsuba;
mod limb;
mod mul_schoolbook;
mod pow;
mod ra;
mod russian_peasant;
mod scalar;
mod scientific;
mod storage;

#[cfg(feature = "parallel")]
mod pool;

#[cfg(test)]
mod tests;

pub use error::{BigNumError, BigNumResult};
pub use karatsuba::karatsuba;
pub use mul_schoolbook::{multiply_simple, schoolbook_mul};
pub use pow::pow;
pub use ra::{BaseTable, BigNumA};
pub use russian_peasant::russian_peasant;
pub use storage::BigNum;

#[cfg(feature = "parallel")]
pub use karatsuba::{default_max_depth, parallel_karatsuba};
#[cfg(feature = "parallel")]
pub use pool::{clear_pool, set_pool, with_global_pool};
#[cfg(feature = "parallel")]
pub use pow::parallel_pow;

/// Re-exported so callers building a pool for
/// [`set_pool`]/[`parallel_karatsuba`] don't need a direct `rayon`
/// dependency of their own.
#[cfg(feature = "parallel")]
pub use rayon;
