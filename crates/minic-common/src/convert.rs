//! Numeric-to-text conversion.

/// Format an unsigned integer in base 10.
/// No sign, no leading zeros, no grouping separators.
pub fn int2str(num: u64) -> String {
    num.to_string()
}

/// Format a float using the shortest text that parses back to the same value.
///
/// Never uses exponent notation, so `1e10` renders as `"10000000000"`.
/// Negative zero keeps its sign (`"-0"`); non-finite values render as
/// `inf`, `-inf` and `NaN`, all of which `str::parse::<f64>` accepts.
pub fn double2str(num: f64) -> String {
    format!("{}", num)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int2str() {
        assert_eq!(int2str(0), "0");
        assert_eq!(int2str(7), "7");
        assert_eq!(int2str(10), "10");
        assert_eq!(int2str(1_000_000), "1000000");
        assert_eq!(int2str(u64::MAX), "18446744073709551615");
    }

    #[test]
    fn test_int2str_parses_back() {
        let mut n: u64 = 1;
        while n < u64::MAX / 3 {
            for value in [n - 1, n, n + 1] {
                let s = int2str(value);
                assert_eq!(s.parse::<u64>().unwrap(), value);
                // Only "0" itself may start with a zero
                assert!(s == "0" || !s.starts_with('0'), "leading zero in {}", s);
                assert!(s.bytes().all(|b| b.is_ascii_digit()));
            }
            n *= 3;
        }
    }

    #[test]
    fn test_double2str_round_trip() {
        for value in [0.0, -0.0, 3.14, -2.5, 1e10, 1e300, f64::MIN_POSITIVE, f64::MAX] {
            let s = double2str(value);
            let back: f64 = s.parse().unwrap();
            assert_eq!(back, value, "{} did not round-trip", s);
            assert_eq!(back.is_sign_negative(), value.is_sign_negative());
        }
    }

    #[test]
    fn test_double2str_format() {
        assert_eq!(double2str(0.0), "0");
        assert_eq!(double2str(-0.0), "-0");
        assert_eq!(double2str(3.14), "3.14");
        assert_eq!(double2str(-2.5), "-2.5");
        assert_eq!(double2str(1e10), "10000000000");
    }

    #[test]
    fn test_double2str_non_finite() {
        assert_eq!(double2str(f64::INFINITY), "inf");
        assert_eq!(double2str(f64::NEG_INFINITY), "-inf");
        assert_eq!(double2str(f64::NAN), "NaN");
        assert!(double2str(f64::NAN).parse::<f64>().unwrap().is_nan());
    }
}
