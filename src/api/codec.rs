use crate::api::cell::PostcodeCell;
use crate::api::postcode::Postcode;
use crate::core::checksum::calculate_checksum;
use crate::core::grid::check_precision;
use crate::core::identifier::generate_postcode;
use crate::error::OpenPostcodeError;
use crate::util::coord::Coordinate;
use serde::{Deserialize, Serialize};

/// Encodes a WGS84 coordinate as an open postcode.
///
/// Points outside Ireland give [`OpenPostcodeError::OutOfRegion`], which
/// displays as the legacy `"OUTSIDE ROI."` sentinel.
///
/// # Example
/// ```
/// use open_postcode_rs::{encode, OUTSIDE_ROI};
///
/// let postcode = encode(53.3498, -6.2603, 6, true).unwrap();
/// assert_eq!(postcode.to_string(), "KFPXWT/22");
///
/// let outside = encode(0.0, 0.0, 6, false).unwrap_err();
/// assert_eq!(outside.to_string(), OUTSIDE_ROI);
/// ```
pub fn encode(
    latitude: f64,
    longitude: f64,
    precision: u8,
    add_checksum: bool,
) -> Result<Postcode, OpenPostcodeError> {
    let (code, common) = generate_postcode(latitude, longitude, precision)?;
    let checksum = if add_checksum {
        Some(u32::from(calculate_checksum(&common)?))
    } else {
        None
    };
    Ok(Postcode::new(code, checksum))
}

/// Decodes a postcode to the `[latitude, longitude]` of its cell centre.
///
/// `-` separators are ignored. A `/checksum` suffix is optional, but when
/// present it must match.
///
/// # Example
/// ```
/// use open_postcode_rs::decode;
///
/// let [latitude, longitude] = decode("KFP-XWT/22").unwrap();
/// assert!((latitude - 53.3498).abs() < 0.001);
/// assert!((longitude - -6.2603).abs() < 0.001);
/// ```
///
/// # Errors
///
/// - [`OpenPostcodeError::ChecksumMismatch`] - Checksum present but wrong
/// - [`OpenPostcodeError::MalformedChecksum`] - Checksum is not an integer
/// - [`OpenPostcodeError::MalformedCharacter`] - Character outside the address alphabet
/// - [`OpenPostcodeError::InvalidLength`] - Empty or over-long postcode
pub fn decode(postcode: &str) -> Result<[f64; 2], OpenPostcodeError> {
    let postcode: Postcode = postcode.parse()?;
    postcode.verify()?;
    let center = postcode.center()?;
    Ok([center.y(), center.x()])
}

/// Validates the checksum of a postcode.
///
/// Unlike [`decode`], the `/checksum` suffix is required. Returns `Ok(true)`
/// on success; every failure is an error, never `Ok(false)`.
///
/// # Example
/// ```
/// use open_postcode_rs::{validate, OpenPostcodeError};
///
/// assert_eq!(validate("KFP-XWT/22"), Ok(true));
/// assert_eq!(validate("KFPXWT"), Err(OpenPostcodeError::MissingChecksum));
/// ```
pub fn validate(postcode: &str) -> Result<bool, OpenPostcodeError> {
    let postcode: Postcode = postcode.parse()?;
    if postcode.checksum().is_none() {
        return Err(OpenPostcodeError::MissingChecksum);
    }
    postcode.verify()?;
    Ok(true)
}

/// Serialisable settings for a [`PostcodeCodec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    pub precision: u8,
    #[serde(default)]
    pub checksum: bool,
}

/// An encoder with a fixed precision and checksum setting.
///
/// The precision is validated once, on construction.
///
/// # Example
/// ```
/// use open_postcode_rs::PostcodeCodec;
///
/// # fn main() -> Result<(), open_postcode_rs::OpenPostcodeError> {
/// let codec = PostcodeCodec::new(7)?.with_checksum(true);
/// let postcode = codec.encode(51.8985, -8.4756)?;
/// assert_eq!(postcode.to_string(), "V7H5TMF/10");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CodecConfig", into = "CodecConfig")]
pub struct PostcodeCodec {
    precision: u8,
    checksum: bool,
}

impl PostcodeCodec {
    pub fn new(precision: u8) -> Result<Self, OpenPostcodeError> {
        check_precision(precision)?;
        Ok(Self {
            precision,
            checksum: false,
        })
    }

    pub fn from_config(config: CodecConfig) -> Result<Self, OpenPostcodeError> {
        Ok(Self::new(config.precision)?.with_checksum(config.checksum))
    }

    pub fn with_checksum(mut self, checksum: bool) -> Self {
        self.checksum = checksum;
        self
    }

    pub fn precision(&self) -> u8 {
        self.precision
    }

    pub fn checksum(&self) -> bool {
        self.checksum
    }

    pub fn encode(&self, latitude: f64, longitude: f64) -> Result<Postcode, OpenPostcodeError> {
        encode(latitude, longitude, self.precision, self.checksum)
    }

    /// Encodes a `(longitude, latitude)` tuple or `Point`.
    pub fn encode_point(&self, coord: &impl Coordinate) -> Result<Postcode, OpenPostcodeError> {
        self.encode(coord.y(), coord.x())
    }

    /// Returns the cell containing `coord`, centre and postcode together.
    pub fn locate(&self, coord: &impl Coordinate) -> Result<PostcodeCell, OpenPostcodeError> {
        PostcodeCell::from_wgs84(coord, self.precision, self.checksum)
    }
}

impl TryFrom<CodecConfig> for PostcodeCodec {
    type Error = OpenPostcodeError;

    fn try_from(config: CodecConfig) -> Result<Self, Self::Error> {
        Self::from_config(config)
    }
}

impl From<PostcodeCodec> for CodecConfig {
    fn from(codec: PostcodeCodec) -> Self {
        Self {
            precision: codec.precision,
            checksum: codec.checksum,
        }
    }
}
