use crate::core::constants::{ALPHABET, BASE25};
use crate::error::OpenPostcodeError;

/// Maps a base-25 digit string onto the address alphabet.
///
/// Digit value `n` becomes the `n`th character of [`ALPHABET`].
pub fn translate(common: &str) -> Result<String, OpenPostcodeError> {
    common
        .chars()
        .map(|c| {
            let value = c
                .to_digit(25)
                .ok_or(OpenPostcodeError::MalformedCharacter(c))?;
            Ok(char::from(ALPHABET.as_bytes()[value as usize]))
        })
        .collect()
}

/// Maps an address-alphabet string back onto base-25 digits.
///
/// Lookup is case-insensitive. Characters outside [`ALPHABET`] are rejected.
pub fn translate_to_common(postcode: &str) -> Result<String, OpenPostcodeError> {
    postcode
        .chars()
        .map(|c| {
            let index = ALPHABET
                .find(c.to_ascii_uppercase())
                .ok_or(OpenPostcodeError::MalformedCharacter(c))?;
            Ok(char::from(BASE25.as_bytes()[index]))
        })
        .collect()
}

/// Returns true if `c` (either case) belongs to the address alphabet.
pub fn is_address_char(c: char) -> bool {
    c.is_ascii() && ALPHABET.contains(c.to_ascii_uppercase())
}
