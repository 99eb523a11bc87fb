use crate::core::constants::CHECKSUM_MODULUS;
use crate::error::OpenPostcodeError;

/// Computes the checksum of a base-25 "common" postcode.
///
/// Each digit value is weighted by its 1-based position and the sum is
/// reduced modulo [`CHECKSUM_MODULUS`]. The result is in `0..31` for input
/// of any length; the sum is reduced after every digit.
pub fn calculate_checksum(common: &str) -> Result<u8, OpenPostcodeError> {
    let modulus = CHECKSUM_MODULUS as usize;
    let mut sum: u32 = 0;
    for (index, c) in common.chars().enumerate() {
        let value = c
            .to_digit(25)
            .ok_or(OpenPostcodeError::MalformedCharacter(c))?;
        let weight = (index % modulus) as u32 + 1;
        sum = (sum + value * weight) % CHECKSUM_MODULUS;
    }
    Ok(sum as u8)
}

/// Splits `code` at the first `/` into the postcode and its checksum.
///
/// An empty checksum segment counts as no checksum.
pub fn split_checksum(code: &str) -> Result<(&str, Option<u32>), OpenPostcodeError> {
    match code.split_once('/') {
        Some((postcode, "")) => Ok((postcode, None)),
        Some((postcode, segment)) => {
            let checksum =
                segment
                    .parse::<u32>()
                    .map_err(|source| OpenPostcodeError::MalformedChecksum {
                        segment: segment.to_string(),
                        source,
                    })?;
            Ok((postcode, Some(checksum)))
        }
        None => Ok((code, None)),
    }
}
