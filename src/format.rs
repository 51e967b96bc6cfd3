/// Number of decimal places used when none is configured.
pub const DEFAULT_DECIMAL_PRECISION: usize = 10;

/// Largest precision the formatter supports. Larger requests are capped.
pub const MAX_DECIMAL_PRECISION: usize = u16::MAX as usize;

/// Formats `seconds` with a fixed number of `decimals`, grouping the integer
/// part in thousands and optionally appending the `s` unit.
///
/// ```
/// assert_eq!(chronos::format_seconds(1234.5, 2, true), "1,234.50s");
/// assert_eq!(chronos::format_seconds(0.25, 0, false), "0");
/// ```
pub fn format_seconds(seconds: f64, decimals: usize, with_unit: bool) -> String {
    let decimals = decimals.min(MAX_DECIMAL_PRECISION);
    let fixed = format!("{:.*}", decimals, seconds.abs());
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + integer.len() / 3 + 2);
    // "-0.00" is not worth a sign.
    if seconds.is_sign_negative() && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    if integer.bytes().all(|b| b.is_ascii_digit()) {
        for (idx, digit) in integer.chars().enumerate() {
            if idx > 0 && (integer.len() - idx) % 3 == 0 {
                out.push(',');
            }
            out.push(digit);
        }
    } else {
        // inf or NaN
        out.push_str(integer);
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    if with_unit {
        out.push('s');
    }
    out
}
