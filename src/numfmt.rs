//! Numeric text formatting for parameters sent in text format.
//!
//! Output follows C `printf` for the patterns the server literal syntax needs:
//! the integer conversions (`%hhd`, `%hhu`, `%hu`, `%u`, `%lu`, `%lld`,
//! `%llu`) all print plain decimal, and `%.<P>Lg` prints the general float
//! format with `P` significant digits.

/// Significant digits used for [`LongDouble`](crate::LongDouble) text, as in `%.21Lg`.
pub const LONG_DOUBLE_DIGITS: usize = 21;

/// Plain decimal, as any of the `printf` integer conversions.
#[inline]
pub fn integer<I: itoa::Integer>(value: I) -> String {
    let mut buf = itoa::Buffer::new();
    buf.format(value).to_owned()
}

/// Float literal as the server parses it: `%.<digits>Lg` for finite values,
/// `NAN`, `INF` or `-INF` otherwise.
pub fn float(value: f64, digits: usize) -> String {
    if value.is_finite() {
        general(value, digits)
    } else if value.is_nan() {
        "NAN".to_owned()
    } else if value < 0.0 {
        "-INF".to_owned()
    } else {
        "INF".to_owned()
    }
}

/// `%.<digits>g` for a finite value.
///
/// Rounds to `digits` significant digits, then picks fixed notation when the
/// decimal exponent `x` satisfies `-4 <= x < digits` and scientific otherwise.
/// Trailing zeros and a dangling decimal point are dropped.
pub fn general(value: f64, digits: usize) -> String {
    let digits = digits.max(1);

    // Exact, correctly rounded scientific rendering: "-d.ddde-x"
    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let (negative, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, mantissa),
    };
    let significand: String = mantissa.chars().filter(|c| *c != '.').collect();

    let mut out = String::with_capacity(digits + 8);
    if negative {
        out.push('-');
    }

    if exponent < -4 || exponent >= digits as i32 {
        out.push_str(&significand[..1]);
        push_fraction(&mut out, &significand[1..]);
        out.push('e');
        out.push(if exponent < 0 { '-' } else { '+' });
        let magnitude = exponent.unsigned_abs();
        if magnitude < 10 {
            out.push('0');
        }
        out.push_str(itoa::Buffer::new().format(magnitude));
    } else if exponent >= 0 {
        let split = exponent as usize + 1;
        out.push_str(&significand[..split]);
        push_fraction(&mut out, &significand[split..]);
    } else {
        out.push_str("0.");
        for _ in 0..(-exponent - 1) {
            out.push('0');
        }
        out.push_str(significand.trim_end_matches('0'));
    }

    out
}

fn push_fraction(out: &mut String, fraction: &str) {
    let fraction = fraction.trim_end_matches('0');
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_patterns() {
        assert_eq!(integer(-128i8), "-128");
        assert_eq!(integer(255u8), "255");
        assert_eq!(integer(u16::MAX), "65535");
        assert_eq!(integer(u32::MAX), "4294967295");
        assert_eq!(integer(u64::MAX), "18446744073709551615");
        assert_eq!(integer(i64::MIN), "-9223372036854775808");
    }

    #[test]
    fn test_general_fixed_notation() {
        assert_eq!(general(1.5, LONG_DOUBLE_DIGITS), "1.5");
        assert_eq!(general(100.0, LONG_DOUBLE_DIGITS), "100");
        assert_eq!(general(-42.25, LONG_DOUBLE_DIGITS), "-42.25");
        assert_eq!(general(0.0625, LONG_DOUBLE_DIGITS), "0.0625");
        assert_eq!(general(0.1, LONG_DOUBLE_DIGITS), "0.100000000000000005551");
    }

    #[test]
    fn test_general_zero() {
        assert_eq!(general(0.0, LONG_DOUBLE_DIGITS), "0");
        assert_eq!(general(-0.0, LONG_DOUBLE_DIGITS), "-0");
    }

    #[test]
    fn test_general_scientific_notation() {
        // 2^-20
        assert_eq!(general(9.5367431640625e-7, LONG_DOUBLE_DIGITS), "9.5367431640625e-07");
        // 2^70 has 22 digits, one more than fits
        assert_eq!(
            general(1180591620717411303424.0, LONG_DOUBLE_DIGITS),
            "1.18059162071741130342e+21"
        );
        assert_eq!(general(1e300, 6), "1e+300");
    }

    #[test]
    fn test_general_short_precision() {
        assert_eq!(general(123456.0, 6), "123456");
        assert_eq!(general(1234567.0, 6), "1.23457e+06");
        assert_eq!(general(0.0001, 6), "0.0001");
        assert_eq!(general(0.00001, 6), "1e-05");
    }

    #[test]
    fn test_float_special_values() {
        assert_eq!(float(f64::NAN, LONG_DOUBLE_DIGITS), "NAN");
        assert_eq!(float(f64::INFINITY, LONG_DOUBLE_DIGITS), "INF");
        assert_eq!(float(f64::NEG_INFINITY, LONG_DOUBLE_DIGITS), "-INF");
    }

    #[test]
    fn test_float_round_trips() {
        let samples = [
            0.1,
            1.0 / 3.0,
            -2.718281828459045,
            f64::MAX,
            f64::MIN_POSITIVE,
            5e-324,
            123456789012345680000.0,
        ];
        for value in samples {
            let text = float(value, LONG_DOUBLE_DIGITS);
            assert_eq!(text.parse::<f64>().unwrap(), value, "{text}");
        }
    }
}
