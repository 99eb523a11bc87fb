use crate::api::postcode::Postcode;
use crate::core::checksum::calculate_checksum;
use crate::core::geometry::{cell_bounds, create_cell_polygon};
use crate::core::grid::{cell_to_point, point_to_cell};
use crate::core::identifier::{decode_postcode, encode_cell, generate_postcode};
use crate::error::OpenPostcodeError;
use crate::util::coord::Coordinate;
use geo_types::{Point, Polygon, Rect};
use serde::{Deserialize, Serialize};

/// A single grid cell addressed by an open postcode.
///
/// Each `PostcodeCell` pairs a postcode with the WGS84 centre of the cell it
/// addresses and the precision it was encoded at.
///
/// With serde a cell is written as its postcode string and rebuilt from it,
/// so the centre and precision always agree with the postcode.
///
/// # Example
///
/// ```
/// use open_postcode_rs::PostcodeCell;
///
/// # fn main() -> Result<(), open_postcode_rs::OpenPostcodeError> {
/// // Create from (longitude, latitude)
/// let cell = PostcodeCell::from_wgs84(&(-6.2603, 53.3498), 6, true)?;
/// assert_eq!(cell.postcode.to_string(), "KFPXWT/22");
///
/// // Convert to polygon for GIS operations
/// let polygon = cell.to_polygon()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Postcode", into = "Postcode")]
pub struct PostcodeCell {
    /// The postcode addressing this cell
    pub postcode: Postcode,
    /// Cell centre in WGS84 (`x` = longitude, `y` = latitude)
    pub center: Point<f64>,
    /// Precision (1-13), where higher values mean smaller cells
    pub precision: u8,
}

impl PostcodeCell {
    /// Create a PostcodeCell from WGS84 (lon/lat) coordinates
    ///
    /// # Example
    /// ```
    /// use open_postcode_rs::PostcodeCell;
    /// use geo_types::Point;
    ///
    /// # fn main() -> Result<(), open_postcode_rs::OpenPostcodeError> {
    /// // From tuple
    /// let cell = PostcodeCell::from_wgs84(&(-8.4756, 51.8985), 7, false)?;
    /// // From Point
    /// let cell = PostcodeCell::from_wgs84(&Point::new(-8.4756, 51.8985), 7, false)?;
    /// assert_eq!(cell.postcode.code(), "V7H5TMF");
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_wgs84(
        coord: &impl Coordinate,
        precision: u8,
        add_checksum: bool,
    ) -> Result<Self, OpenPostcodeError> {
        let (x, y) = point_to_cell(coord, precision)?;
        let (postcode, common) = encode_cell(x, y, precision)?;
        let checksum = if add_checksum {
            Some(u32::from(calculate_checksum(&common)?))
        } else {
            None
        };
        let center = cell_to_point(x, y, precision)?;

        Ok(Self {
            postcode: Postcode::new(postcode, checksum),
            center,
            precision,
        })
    }

    /// Create a PostcodeCell from a postcode string.
    ///
    /// Separators are ignored and a checksum, when present, must match.
    ///
    /// # Example
    /// ```
    /// use open_postcode_rs::PostcodeCell;
    ///
    /// # fn main() -> Result<(), open_postcode_rs::OpenPostcodeError> {
    /// let cell = PostcodeCell::from_wgs84(&(-6.2603, 53.3498), 6, true)?;
    /// let restored = PostcodeCell::from_postcode(&cell.postcode.to_string())?;
    /// assert_eq!(cell, restored);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_postcode(postcode: &str) -> Result<Self, OpenPostcodeError> {
        Self::try_from(postcode.parse::<Postcode>()?)
    }

    /// Returns the latitude of the cell centre.
    pub fn latitude(&self) -> f64 {
        self.center.y()
    }

    /// Returns the longitude of the cell centre.
    pub fn longitude(&self) -> f64 {
        self.center.x()
    }

    /// Returns the rectangle covered by this cell.
    pub fn bounds(&self) -> Result<Rect<f64>, OpenPostcodeError> {
        cell_bounds(&self.center, self.precision)
    }

    /// Converts this cell to a rectangular polygon.
    ///
    /// Returns a `geo_types::Polygon` of the cell boundary, suitable for
    /// spatial operations or GeoJSON export.
    pub fn to_polygon(&self) -> Result<Polygon<f64>, OpenPostcodeError> {
        create_cell_polygon(&self.center, self.precision)
    }

    /// Returns true if the coordinate encodes to this cell.
    pub fn contains(&self, coord: &impl Coordinate) -> bool {
        generate_postcode(coord.y(), coord.x(), self.precision)
            .map(|(postcode, _)| postcode == self.postcode.code())
            .unwrap_or(false)
    }
}

impl TryFrom<Postcode> for PostcodeCell {
    type Error = OpenPostcodeError;

    fn try_from(postcode: Postcode) -> Result<Self, Self::Error> {
        postcode.verify()?;
        let (center, precision) = decode_postcode(postcode.code())?;

        Ok(Self {
            postcode,
            center,
            precision,
        })
    }
}

impl From<PostcodeCell> for Postcode {
    fn from(cell: PostcodeCell) -> Self {
        cell.postcode
    }
}
