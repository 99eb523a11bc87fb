use crate::core::alphabet::{is_address_char, translate_to_common};
use crate::core::checksum::{calculate_checksum, split_checksum};
use crate::core::constants::MAX_PRECISION;
use crate::core::identifier::decode_postcode;
use crate::error::OpenPostcodeError;
use geo_types::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A normalised open postcode with an optional checksum.
///
/// The code is stored upper-case without `-` separators. Parsing checks the
/// characters and length but does not verify the checksum; see
/// [`Postcode::verify`].
///
/// # Example
///
/// ```
/// use open_postcode_rs::Postcode;
///
/// # fn main() -> Result<(), open_postcode_rs::OpenPostcodeError> {
/// let postcode: Postcode = "kfp-xwt/22".parse()?;
/// assert_eq!(postcode.code(), "KFPXWT");
/// assert_eq!(postcode.checksum(), Some(22));
/// assert_eq!(postcode.to_string(), "KFPXWT/22");
/// postcode.verify()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Postcode {
    code: String,
    checksum: Option<u32>,
}

impl Postcode {
    pub(crate) fn new(code: String, checksum: Option<u32>) -> Self {
        Self { code, checksum }
    }

    /// Returns the address-alphabet characters without separators or checksum.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the checksum carried by this postcode, if any.
    pub fn checksum(&self) -> Option<u32> {
        self.checksum
    }

    /// Returns the precision, which is the number of code characters.
    pub fn precision(&self) -> u8 {
        self.code.len() as u8
    }

    /// Returns the base-25 digit form the checksum is computed over.
    pub fn common_form(&self) -> Result<String, OpenPostcodeError> {
        translate_to_common(&self.code)
    }

    /// Computes the checksum this postcode should carry.
    pub fn expected_checksum(&self) -> Result<u8, OpenPostcodeError> {
        calculate_checksum(&self.common_form()?)
    }

    /// Checks the carried checksum, if there is one.
    ///
    /// A postcode without a checksum always passes.
    pub fn verify(&self) -> Result<(), OpenPostcodeError> {
        let Some(actual) = self.checksum else {
            return Ok(());
        };
        let expected = self.expected_checksum()?;
        if actual != u32::from(expected) {
            log::debug!("checksum mismatch for {}: expected {expected}, got {actual}", self.code);
            return Err(OpenPostcodeError::ChecksumMismatch { expected, actual });
        }
        Ok(())
    }

    /// Returns this postcode carrying its computed checksum.
    pub fn with_checksum(self) -> Result<Self, OpenPostcodeError> {
        let checksum = self.expected_checksum()?;
        Ok(Self {
            checksum: Some(u32::from(checksum)),
            ..self
        })
    }

    /// Returns this postcode with any checksum dropped.
    pub fn without_checksum(self) -> Self {
        Self {
            checksum: None,
            ..self
        }
    }

    /// Formats the code with a `-` between every `size` characters.
    ///
    /// The separators are cosmetic; the result parses back to the same postcode.
    ///
    /// ```
    /// use open_postcode_rs::Postcode;
    ///
    /// let postcode: Postcode = "KFPXWT/22".parse().unwrap();
    /// assert_eq!(postcode.grouped(3), "KFP-XWT/22");
    /// ```
    pub fn grouped(&self, size: usize) -> String {
        let mut out = String::with_capacity(self.code.len() * 2 + 3);
        for (i, c) in self.code.chars().enumerate() {
            if size > 0 && i > 0 && i % size == 0 {
                out.push('-');
            }
            out.push(c);
        }
        if let Some(checksum) = self.checksum {
            out.push('/');
            out.push_str(&checksum.to_string());
        }
        out
    }

    /// Decodes the postcode to its cell centre (`x = longitude`, `y = latitude`).
    ///
    /// The checksum is not consulted.
    pub fn center(&self) -> Result<Point<f64>, OpenPostcodeError> {
        decode_postcode(&self.code).map(|(center, _)| center)
    }
}

impl FromStr for Postcode {
    type Err = OpenPostcodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned: String = s.trim().chars().filter(|&c| c != '-').collect();
        let (code, checksum) = split_checksum(&cleaned)?;

        let length = code.chars().count();
        if length == 0 || length > MAX_PRECISION as usize {
            return Err(OpenPostcodeError::InvalidLength(length));
        }
        if let Some(c) = code.chars().find(|&c| !is_address_char(c)) {
            return Err(OpenPostcodeError::MalformedCharacter(c));
        }

        Ok(Self::new(code.to_ascii_uppercase(), checksum))
    }
}

impl TryFrom<String> for Postcode {
    type Error = OpenPostcodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Postcode> for String {
    fn from(value: Postcode) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Postcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.checksum {
            Some(checksum) => write!(f, "{}/{}", self.code, checksum),
            None => f.write_str(&self.code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() -> Result<(), OpenPostcodeError> {
        let postcode: Postcode = "KFPXWT".parse()?;
        assert_eq!(postcode.code(), "KFPXWT");
        assert_eq!(postcode.checksum(), None);
        assert_eq!(postcode.precision(), 6);
        Ok(())
    }

    #[test]
    fn test_parse_normalises_separators_and_case() -> Result<(), OpenPostcodeError> {
        let with: Postcode = " kf-px-wt/22 ".parse()?;
        let without: Postcode = "KFPXWT/22".parse()?;
        assert_eq!(with, without);
        Ok(())
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "".parse::<Postcode>(),
            Err(OpenPostcodeError::InvalidLength(0))
        );
        assert_eq!(
            "/12".parse::<Postcode>(),
            Err(OpenPostcodeError::InvalidLength(0))
        );
        assert_eq!(
            "KFPXWTKFPXWTKF".parse::<Postcode>(),
            Err(OpenPostcodeError::InvalidLength(14))
        );
        assert_eq!(
            "KFPIWT".parse::<Postcode>(),
            Err(OpenPostcodeError::MalformedCharacter('I'))
        );
        assert!(matches!(
            "KFPXWT/abc".parse::<Postcode>(),
            Err(OpenPostcodeError::MalformedChecksum { .. })
        ));
    }

    #[test]
    fn test_verify() -> Result<(), OpenPostcodeError> {
        "KFPXWT/22".parse::<Postcode>()?.verify()?;
        "KFPXWT".parse::<Postcode>()?.verify()?;

        let result = "KFPXWT/21".parse::<Postcode>()?.verify();
        assert_eq!(
            result,
            Err(OpenPostcodeError::ChecksumMismatch {
                expected: 22,
                actual: 21
            })
        );
        Ok(())
    }

    #[test]
    fn test_with_and_without_checksum() -> Result<(), OpenPostcodeError> {
        let postcode: Postcode = "KFPXWT".parse()?;
        let checked = postcode.clone().with_checksum()?;
        assert_eq!(checked.to_string(), "KFPXWT/22");
        assert_eq!(checked.without_checksum(), postcode);
        Ok(())
    }

    #[test]
    fn test_grouped_round_trip() -> Result<(), OpenPostcodeError> {
        let postcode: Postcode = "V7H5TMF/10".parse()?;
        assert_eq!(postcode.grouped(3), "V7H-5TM-F/10");
        assert_eq!(postcode.grouped(0), "V7H5TMF/10");
        assert_eq!(postcode.grouped(3).parse::<Postcode>()?, postcode);
        Ok(())
    }

    #[test]
    fn test_center() -> Result<(), OpenPostcodeError> {
        let center = "KFPXWT".parse::<Postcode>()?.center()?;
        assert!((center.y() - 53.3497344).abs() < 1e-9);
        assert!((center.x() - -6.2601376).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_serde_as_string() -> Result<(), Box<dyn std::error::Error>> {
        let postcode: Postcode = "KFPXWT/22".parse()?;
        let json = serde_json::to_string(&postcode)?;
        assert_eq!(json, "\"KFPXWT/22\"");

        let back: Postcode = serde_json::from_str("\"kfp-xwt/22\"")?;
        assert_eq!(back, postcode);

        assert!(serde_json::from_str::<Postcode>("\"KFP0WT\"").is_err());
        Ok(())
    }
}
