//! Scientific-notation front end (C10): `[sign] digits ['.' digits]
//! ('e'|'E') [sign] digits [('p'|'P') [sign] digits]`.
//!
//! The exponent clause is mandatory; only its sign is optional. A trailing
//! `P` clause marks the *rest* of the digit sequence as a repeating tail
//! cycled from its own digit string (defaulting to a single `'0'` tail when
//! absent), so `from_scientific` never has to materialise more than the
//! parsed digits plus one period cycle before handing a finished decimal
//! string to [`crate::storage::BigNum::from_decimal_string`].

use crate::error::BigNumError;
use crate::storage::BigNum;

const MAX_EXPONENT_MAGNITUDE: i64 = 999_999_999;

struct Parsed {
    negative: bool,
    /// Significand digit bytes, integer part followed by fractional part,
    /// decimal point removed.
    significand: Vec<u8>,
    /// Total digit count of the final integer (`significand.len()` plus the
    /// zero/period fill implied by the exponent).
    total_length: usize,
    /// Cycled tail content past `significand`; `b"0"` when no `P` clause was
    /// present.
    period: Vec<u8>,
}

impl Parsed {
    fn digit_at(&self, i: usize) -> u8 {
        if i < self.significand.len() {
            self.significand[i]
        } else {
            let j = (i - self.significand.len()) % self.period.len();
            self.period[j]
        }
    }

    fn into_bignum(self) -> Result<BigNum, BigNumError> {
        let mut s = Vec::with_capacity(self.total_length + 1);
        if self.negative {
            s.push(b'-');
        }
        for i in 0..self.total_length {
            s.push(self.digit_at(i));
        }
        BigNum::from_decimal_string(&s)
    }
}

fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Parses `src` per the grammar above.
fn parse(src: &[u8]) -> Result<Parsed, BigNumError> {
    if src.is_empty() {
        return Err(BigNumError::EmptyInput);
    }

    let mut i = 0usize;
    let negative = match src[0] {
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
    if i == src.len() {
        return Err(BigNumError::EmptyInput);
    }

    let mut int_digits = Vec::new();
    while i < src.len() && is_digit(src[i]) {
        int_digits.push(src[i]);
        i += 1;
    }
    if int_digits.is_empty() {
        if i < src.len() && (src[i] == b'.' || src[i] == b'e' || src[i] == b'E') {
            return Err(BigNumError::EmptyInput);
        }
        return Err(BigNumError::InvalidCharacter {
            index: i,
            found: *src.get(i).unwrap_or(&b'\0'),
        });
    }
    let mut last_was_digit = true;

    let mut frac_digits = Vec::new();
    if i < src.len() && src[i] == b'.' {
        i += 1;
        while i < src.len() && is_digit(src[i]) {
            frac_digits.push(src[i]);
            i += 1;
        }
        last_was_digit = !frac_digits.is_empty();
        if i < src.len() && src[i] == b'.' {
            return Err(BigNumError::RepeatedDot { index: i });
        }
    }

    if i < src.len() && (src[i] == b'+' || src[i] == b'-') {
        return Err(BigNumError::InvalidSign {
            index: i,
            found: src[i],
        });
    }
    if i < src.len() && (src[i] == b'p' || src[i] == b'P') {
        return Err(BigNumError::PeriodWithoutExponent { index: i });
    }
    if i >= src.len() || !(src[i] == b'e' || src[i] == b'E') {
        return Err(BigNumError::InvalidCharacter {
            index: i.min(src.len().saturating_sub(1)),
            found: *src.get(i).unwrap_or(&b'\0'),
        });
    }
    if !last_was_digit {
        return Err(BigNumError::ExponentAfterNonDigit { index: i });
    }
    i += 1;

    let exp_negative = match src.get(i) {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };
    let exp_digits_start = i;
    while i < src.len() && is_digit(src[i]) {
        i += 1;
    }
    if i == exp_digits_start {
        if i == src.len() {
            return Err(BigNumError::EndsWithNonDigit);
        }
        return Err(BigNumError::InvalidCharacter {
            index: i,
            found: src[i],
        });
    }
    let exp_magnitude: i64 = std::str::from_utf8(&src[exp_digits_start..i])
        .unwrap()
        .parse()
        .map_err(|_| BigNumError::ExponentOverflow)?;
    if exp_magnitude > MAX_EXPONENT_MAGNITUDE {
        return Err(BigNumError::ExponentOverflow);
    }
    let exp = if exp_negative {
        -exp_magnitude
    } else {
        exp_magnitude
    };
    last_was_digit = true;

    let mut period = Vec::new();
    if i < src.len() && (src[i] == b'p' || src[i] == b'P') {
        if !last_was_digit {
            return Err(BigNumError::PeriodAfterNonDigit { index: i });
        }
        i += 1;
        match src.get(i) {
            Some(b'-') | Some(b'+') => {
                i += 1;
            }
            _ => {}
        }
        while i < src.len() && is_digit(src[i]) {
            period.push(src[i]);
            i += 1;
        }
        if period.is_empty() {
            return Err(BigNumError::EmptyPeriod);
        }
    } else if i < src.len() && src[i] == b'.' {
        return Err(BigNumError::DotAfterExponent { index: i });
    }

    if i < src.len() {
        if src[i] == b'e' || src[i] == b'E' {
            return Err(BigNumError::RepeatedExponent { index: i });
        }
        if src[i] == b'p' || src[i] == b'P' {
            return Err(BigNumError::RepeatedPeriod { index: i });
        }
        if src[i] == b'.' {
            return Err(BigNumError::DotAfterPeriod { index: i });
        }
        return Err(BigNumError::InvalidCharacter {
            index: i,
            found: src[i],
        });
    }
    if !is_digit(*src.last().unwrap()) {
        return Err(BigNumError::EndsWithNonDigit);
    }

    let frac_len = frac_digits.len() as i64;
    let k = exp - frac_len;
    if k < 0 {
        return Err(BigNumError::PrecisionLoss);
    }

    let mut significand = int_digits;
    significand.extend(frac_digits);
    let total_length = significand.len() + k as usize;
    let period = if period.is_empty() { vec![b'0'] } else { period };

    Ok(Parsed {
        negative,
        significand,
        total_length,
        period,
    })
}

impl BigNum {
    /// Parses scientific notation into a fully materialised decimal integer.
    pub fn from_scientific(src: &[u8]) -> Result<BigNum, BigNumError> {
        parse(src)?.into_bignum()
    }

    /// Formats as `[-]d[.fff]Eexp`. `precision >= 0` pads/truncates the
    /// fractional part to exactly that many digits; `precision < 0` shows up
    /// to `-precision` fractional digits with trailing zeros trimmed;
    /// `i32::MIN` shows the full, untrimmed fractional part (the exact
    /// round-trippable form).
    pub fn to_scientific(&self, precision: i32) -> String {
        if self.is_zero() {
            return "0E0".to_string();
        }
        let digits = self.to_byte_array(false);
        let n = digits.len();
        let exp = n - 1;
        let frac_full = &digits[1..];

        let frac_shown: Vec<u8> = if precision == i32::MIN {
            frac_full.to_vec()
        } else if precision >= 0 {
            let want = precision as usize;
            let mut v = frac_full.to_vec();
            if v.len() < want {
                v.extend(std::iter::repeat(b'0').take(want - v.len()));
            } else {
                v.truncate(want);
            }
            v
        } else {
            let want = (-precision) as usize;
            let mut v = frac_full.to_vec();
            if v.len() > want {
                v.truncate(want);
            }
            while v.last() == Some(&b'0') {
                v.pop();
            }
            v
        };

        let mut out = String::new();
        if self.negative {
            out.push('-');
        }
        out.push(digits[0] as char);
        if !frac_shown.is_empty() {
            out.push('.');
            out.push_str(std::str::from_utf8(&frac_shown).unwrap());
        }
        out.push('E');
        out.push_str(&exp.to_string());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_exponent() {
        let n = BigNum::from_scientific(b"1E100").unwrap();
        assert_eq!(n.digit_count(), 101);
        assert_eq!(n.digit_at(0).unwrap(), 1);
        for i in 1..=100 {
            assert_eq!(n.digit_at(i).unwrap(), 0);
        }
    }

    #[test]
    fn periodic_tail() {
        let n = BigNum::from_scientific(b"1E50P5").unwrap();
        assert_eq!(n.digit_count(), 51);
        assert_eq!(n.digit_at(0).unwrap(), 1);
        for i in 1..=50 {
            assert_eq!(n.digit_at(i).unwrap(), 5);
        }
    }

    #[test]
    fn fraction_with_exponent() {
        // 1.25E4 = 12500
        let n = BigNum::from_scientific(b"1.25E4").unwrap();
        assert_eq!(n, BigNum::from_decimal_string(b"12500").unwrap());
    }

    #[test]
    fn precision_loss_when_exponent_too_small() {
        assert!(matches!(
            BigNum::from_scientific(b"1.25E1"),
            Err(BigNumError::PrecisionLoss)
        ));
    }

    #[test]
    fn missing_exponent_marker_is_rejected() {
        assert!(BigNum::from_scientific(b"123").is_err());
    }

    #[test]
    fn round_trip_unbounded_precision() {
        let n = BigNum::from_decimal_string(b"-1234567890123").unwrap();
        let s = n.to_scientific(i32::MIN);
        let back = BigNum::from_scientific(s.as_bytes()).unwrap();
        assert_eq!(n, back);
    }
}
