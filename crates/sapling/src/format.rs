//! `%g`-style number rendering for `print`

/// Render `value` like C's `%W.Pg` with `W = width` and `P = precision`.
///
/// The value is rounded to `precision` significant digits. Scientific
/// notation is used when the decimal exponent is below -4 or at least
/// `precision`; otherwise fixed notation. Trailing zeros of the fraction
/// are removed. The result is right-aligned to `width` characters.
///
/// ```
/// use sapling::format::format_general;
///
/// assert_eq!(format_general(3.14159, 4, 4), "3.142");
/// assert_eq!(format_general(5.0, 4, 4), "   5");
/// assert_eq!(format_general(123456.0, 4, 4), "1.235e+05");
/// ```
pub fn format_general(value: f64, precision: usize, width: usize) -> String {
    let body = general(value, precision.max(1));
    format!("{body:>width$}")
}

fn general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return if value.is_sign_negative() { "-nan" } else { "nan" }.to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Let the scientific rendering do the rounding; its exponent decides the style.
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific
        .split_once('e')
        .and_then(|(m, e)| e.parse::<i32>().ok().map(|e| (m, e)))
    else {
        return scientific;
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g4(value: f64) -> String {
        format_general(value, 4, 0)
    }

    #[test]
    fn test_fixed_notation() {
        assert_eq!(g4(3.14159), "3.142");
        assert_eq!(g4(120.0), "120");
        assert_eq!(g4(-2.5), "-2.5");
        assert_eq!(g4(0.0001234), "0.0001234");
        assert_eq!(g4(1234.0), "1234");
    }

    #[test]
    fn test_rounding_carries_into_exponent() {
        assert_eq!(g4(9.9996), "10");
        assert_eq!(g4(9999.6), "1e+04");
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(g4(12346.0), "1.235e+04");
        assert_eq!(g4(0.00001234), "1.234e-05");
        assert_eq!(g4(1e100), "1e+100");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(g4(0.0), "0");
        assert_eq!(g4(-0.0), "-0");
        assert_eq!(g4(f64::INFINITY), "inf");
        assert_eq!(g4(f64::NEG_INFINITY), "-inf");
        assert_eq!(g4(f64::NAN), "nan");
    }

    #[test]
    fn test_width_pads_left() {
        assert_eq!(format_general(5.0, 4, 4), "   5");
        assert_eq!(format_general(-1.0, 4, 4), "  -1");
        assert_eq!(format_general(3.14159, 4, 4), "3.142");
    }

    #[test]
    fn test_precision_is_configurable() {
        assert_eq!(format_general(3.14159265, 6, 0), "3.14159");
        assert_eq!(format_general(2.0 / 3.0, 1, 0), "0.7");
    }
}
