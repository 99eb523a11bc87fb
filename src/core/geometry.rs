use crate::core::grid::cell_size;
use crate::error::OpenPostcodeError;
use geo_types::{Coord, Point, Polygon, Rect};

/// Returns the rectangle covered by the cell centred on `center`.
pub fn cell_bounds(center: &Point<f64>, precision: u8) -> Result<Rect<f64>, OpenPostcodeError> {
    let (height, width) = cell_size(precision)?;
    let half = Coord {
        x: width / 2.0,
        y: height / 2.0,
    };
    Ok(Rect::new(center.0 - half, center.0 + half))
}

/// Builds the closed polygon of the cell centred on `center`.
pub fn create_cell_polygon(
    center: &Point<f64>,
    precision: u8,
) -> Result<Polygon<f64>, OpenPostcodeError> {
    Ok(cell_bounds(center, precision)?.to_polygon())
}
