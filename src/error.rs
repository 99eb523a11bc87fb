use std::num::ParseIntError;
use thiserror::Error;

/// Error type for open-postcode-rs operations.
#[derive(Debug, Error, PartialEq)]
pub enum OpenPostcodeError {
    /// The coordinate lies outside Ireland or outside the encoding grid.
    ///
    /// Displays as the legacy `"OUTSIDE ROI."` sentinel.
    #[error("OUTSIDE ROI.")]
    OutOfRegion { latitude: f64, longitude: f64 },
    /// Validation was requested for a postcode without a `/checksum` segment.
    #[error("No checksum. Validation failed")]
    MissingChecksum,
    /// The supplied checksum differs from the one computed over the postcode.
    #[error("Checksum error: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: u8, actual: u32 },
    /// The checksum segment is not a decimal integer.
    #[error("Malformed checksum {segment:?}: {source}")]
    MalformedChecksum {
        segment: String,
        #[source]
        source: ParseIntError,
    },
    /// The postcode contains a character outside the address alphabet.
    #[error("Invalid postcode character: {0:?}")]
    MalformedCharacter(char),
    /// The precision is outside the supported range (1-13).
    #[error("Invalid precision: {0}")]
    InvalidPrecision(u8),
    /// The postcode has no characters or more than the maximum precision allows.
    #[error("Invalid postcode length: {0}")]
    InvalidLength(usize),
}
