use crate::core::alphabet::{translate, translate_to_common};
use crate::core::constants::MAX_PRECISION;
use crate::core::grid::{cell_to_point, point_to_cell};
use crate::core::radix::{deinterleave, interleave};
use crate::error::OpenPostcodeError;
use geo_types::Point;

/// Generates the postcode of the grid cell containing a WGS84 coordinate.
///
/// # Process
///
/// 1. Locates the cell `(x, y)` at `precision`, rejecting points outside Ireland
/// 2. Renders both indices in base 5 and re-reads those digits in base 25
/// 3. Combines them as `x * 5 + y` and renders the result in base 25,
///    left-padded to `precision` digits (the "common" form, `0-9A-O`)
/// 4. Substitutes every digit through the address alphabet
///
/// # Returns
///
/// A tuple of `(postcode, common)`; the checksum is computed over `common`.
///
/// # Example
/// ```
/// use open_postcode_rs::generate_postcode;
///
/// let (postcode, common) = generate_postcode(53.3498, -6.2603, 6).unwrap();
/// assert_eq!(postcode, "KFPXWT");
/// assert_eq!(common, "EAIONL");
/// ```
pub fn generate_postcode(
    latitude: f64,
    longitude: f64,
    precision: u8,
) -> Result<(String, String), OpenPostcodeError> {
    let (x, y) = point_to_cell(&(longitude, latitude), precision)?;
    let (postcode, common) = encode_cell(x, y, precision)?;

    log::debug!("encoded ({latitude}, {longitude}) at precision {precision} as {postcode}");
    Ok((postcode, common))
}

/// Renders located cell indices as `(postcode, common)`.
pub(crate) fn encode_cell(
    x: u64,
    y: u64,
    precision: u8,
) -> Result<(String, String), OpenPostcodeError> {
    let common = interleave(x, y, precision)?;
    let postcode = translate(&common)?;
    Ok((postcode, common))
}

/// Decodes a bare postcode (no separators or checksum) to its cell centre.
///
/// The precision is the postcode length. The returned point has
/// `x = longitude` and `y = latitude`.
///
/// # Errors
///
/// - [`OpenPostcodeError::InvalidLength`] - Empty, or longer than 13 characters
/// - [`OpenPostcodeError::MalformedCharacter`] - Character outside the address alphabet
pub fn decode_postcode(postcode: &str) -> Result<(Point<f64>, u8), OpenPostcodeError> {
    let length = postcode.chars().count();
    if length == 0 || length > MAX_PRECISION as usize {
        return Err(OpenPostcodeError::InvalidLength(length));
    }
    let precision = length as u8;

    let common = translate_to_common(postcode)?;
    let (x, y) = deinterleave(&common)?;
    let center = cell_to_point(x, y, precision)?;

    log::debug!(
        "decoded {postcode} to ({}, {}) at precision {precision}",
        center.y(),
        center.x()
    );
    Ok((center, precision))
}
