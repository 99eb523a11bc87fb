//! # open-postcode-rs
//!
//! Open postcodes address a grid laid over Ireland. Each character narrows
//! the cell by a factor of five in both directions, and an optional
//! `/checksum` suffix catches transcription errors.
//!
//! There are currently three main entry points.
//!
//! ### 1. `encode` / `decode` / `validate` - String Operations
//!
//! ```
//! use open_postcode_rs::{decode, encode, validate};
//!
//! # fn main() -> Result<(), open_postcode_rs::OpenPostcodeError> {
//! let postcode = encode(53.3498, -6.2603, 6, true)?;
//! assert_eq!(postcode.to_string(), "KFPXWT/22");
//!
//! let [latitude, longitude] = decode("KFP-XWT/22")?;
//! assert!(validate("KFP-XWT/22")?);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `PostcodeCell` - Single Cell Operations
//!
//! ```
//! use open_postcode_rs::PostcodeCell;
//!
//! # fn main() -> Result<(), open_postcode_rs::OpenPostcodeError> {
//! let cell = PostcodeCell::from_wgs84(&(-6.2603, 53.3498), 6, true)?;
//! println!("{}", cell.postcode);
//! let polygon = cell.to_polygon()?;
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `PostcodeCodec` - Fixed Settings
//!
//! ```
//! use open_postcode_rs::PostcodeCodec;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let codec: PostcodeCodec = serde_json::from_str(r#"{"precision": 8, "checksum": true}"#)?;
//! let postcode = codec.encode(51.8985, -8.4756)?;
//! # Ok(())
//! # }
//! ```
//!
//! Points outside Ireland are reported as [`OpenPostcodeError::OutOfRegion`],
//! whose display text is the legacy [`OUTSIDE_ROI`] sentinel.

pub mod api;
pub mod core;
pub mod error;
pub mod util;

pub use crate::api::{CodecConfig, Postcode, PostcodeCell, PostcodeCodec, decode, encode, validate};
pub use crate::core::{
    ALPHABET, BASE25, HIGH, IRELAND_BOUNDS, MAX_PRECISION, NORTH, OUTSIDE_ROI, WEST, WIDE,
    calculate_checksum, cell_size, cell_to_point, decode_postcode, generate_postcode,
    in_boundary, point_to_cell,
};
pub use error::OpenPostcodeError;
pub use util::Coordinate;

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::point;

    #[test]
    fn test_end_to_end_workflow() -> Result<(), OpenPostcodeError> {
        let postcode = encode(53.3498, -6.2603, 8, true)?;
        assert_eq!(postcode.precision(), 8);
        assert!(validate(&postcode.grouped(4))?);

        let [latitude, longitude] = decode(&postcode.grouped(4))?;
        let (height, width) = cell_size(8)?;
        assert!((latitude - 53.3498).abs() <= height);
        assert!((longitude - -6.2603).abs() <= width);

        let cell = PostcodeCell::from_postcode(&postcode.to_string())?;
        assert_eq!(cell.latitude(), latitude);
        assert_eq!(cell.longitude(), longitude);
        Ok(())
    }

    #[test]
    fn test_using_geo_types_macros() -> Result<(), OpenPostcodeError> {
        let pt = point! { x: -8.4756, y: 51.8985 };
        let cell = PostcodeCodec::new(7)?.with_checksum(true).locate(&pt)?;
        assert_eq!(cell.postcode.to_string(), "V7H5TMF/10");

        let bounds = cell.bounds()?;
        assert!(bounds.min().x <= pt.x() && pt.x() <= bounds.max().x);
        assert!(bounds.min().y <= pt.y() && pt.y() <= bounds.max().y);
        Ok(())
    }

    #[test]
    fn test_boundary_inclusive_at_edges() {
        let [min_lon, min_lat, max_lon, max_lat] = IRELAND_BOUNDS;
        assert!(in_boundary(min_lon, min_lat));
        assert!(in_boundary(max_lon, max_lat));
        assert!(in_boundary(-8.0, 48.13));
        assert!(!in_boundary(-8.0, 48.1299));
    }

    #[test]
    fn test_outside_sentinel() {
        let text = match encode(0.0, 0.0, 6, false) {
            Ok(postcode) => postcode.to_string(),
            Err(err) => err.to_string(),
        };
        assert_eq!(text, "OUTSIDE ROI.");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            OpenPostcodeError::MissingChecksum.to_string(),
            "No checksum. Validation failed"
        );
        assert_eq!(
            OpenPostcodeError::ChecksumMismatch {
                expected: 22,
                actual: 21
            }
            .to_string(),
            "Checksum error: expected 22, got 21"
        );
        assert_eq!(
            OpenPostcodeError::MalformedCharacter('A').to_string(),
            "Invalid postcode character: 'A'"
        );
    }

    #[test]
    fn test_grid_constants_cover_ireland() -> Result<(), OpenPostcodeError> {
        // Malin Head, Mizen Head, Dunmore Head and Burr Point
        let extremes = [
            (55.3817, -7.3736),
            (51.4500, -9.8183),
            (52.1092, -10.4800),
            (54.4831, -5.4333),
        ];
        for (latitude, longitude) in extremes {
            assert!(in_boundary(longitude, latitude));
            let postcode = encode(latitude, longitude, 10, true)?;
            assert!(validate(&postcode.to_string())?);
        }
        assert!(NORTH - HIGH < 51.45 && WEST > 10.48);
        assert!(WEST - WIDE < 5.4333);
        Ok(())
    }
}
