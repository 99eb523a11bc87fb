use crate::core::constants::BASE25;
use crate::error::OpenPostcodeError;

/// Renders `value` as an upper-case numeral in `radix` (2-25).
///
/// Zero renders as `"0"`; no other padding is applied.
pub fn to_radix_string(mut value: u64, radix: u32) -> String {
    debug_assert!((2..=25).contains(&radix));
    let digits = BASE25.as_bytes();
    let radix = u64::from(radix);

    let mut out = Vec::new();
    loop {
        out.push(digits[(value % radix) as usize]);
        value /= radix;
        if value == 0 {
            break;
        }
    }
    out.reverse();
    out.into_iter().map(char::from).collect()
}

/// Parses a numeral in `radix`, accepting either letter case.
///
/// Fails with [`OpenPostcodeError::InvalidLength`] for empty or overflowing input.
pub fn parse_radix(digits: &str, radix: u32) -> Result<u64, OpenPostcodeError> {
    u64::from_str_radix(digits, radix).map_err(|_| OpenPostcodeError::InvalidLength(digits.len()))
}

/// Combines two cell indices into the base-25 "common" postcode.
///
/// Each index is rendered in base 5 and the digits are re-read as base 25,
/// which spreads them onto every other base-5 position. `x` lands on the odd
/// powers and `y` on the even ones. The result is left-padded with `0` to
/// `precision` digits.
pub fn interleave(x: u64, y: u64, precision: u8) -> Result<String, OpenPostcodeError> {
    let x_base5 = to_radix_string(x, 5);
    let y_base5 = to_radix_string(y, 5);
    let x_base = parse_radix(&x_base5, 25)?;
    let y_base = parse_radix(&y_base5, 25)?;

    let combined = x_base
        .checked_mul(5)
        .and_then(|v| v.checked_add(y_base))
        .ok_or(OpenPostcodeError::InvalidPrecision(precision))?;
    let common = to_radix_string(combined, 25);

    log::trace!("interleave x={x_base5} y={y_base5} -> {common}");
    Ok(format!("{common:0>width$}", width = precision as usize))
}

/// Splits a base-25 "common" postcode back into its two cell indices.
///
/// The base-5 rendering is left-padded to `2 * common.len()` digits before
/// splitting, so leading zero digits of either index are not lost.
pub fn deinterleave(common: &str) -> Result<(u64, u64), OpenPostcodeError> {
    let combined = parse_radix(common, 25)?;
    let base5 = format!(
        "{:0>width$}",
        to_radix_string(combined, 5),
        width = 2 * common.len()
    );

    let mut x_digits = String::with_capacity(common.len());
    let mut y_digits = String::with_capacity(common.len());
    for (i, digit) in base5.chars().enumerate() {
        if i % 2 == 0 {
            x_digits.push(digit);
        } else {
            y_digits.push(digit);
        }
    }
    log::trace!("deinterleave {common} -> x={x_digits} y={y_digits}");

    Ok((parse_radix(&x_digits, 5)?, parse_radix(&y_digits, 5)?))
}
