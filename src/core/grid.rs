use crate::core::constants::{HIGH, IRELAND_BOUNDS, MAX_PRECISION, NORTH, WEST, WIDE};
use crate::error::OpenPostcodeError;
use crate::util::coord::Coordinate;
use geo_types::Point;

/// Returns true if the point lies inside the Ireland rectangle, edges included.
pub fn in_boundary(longitude: f64, latitude: f64) -> bool {
    let [min_lon, min_lat, max_lon, max_lat] = IRELAND_BOUNDS;
    longitude >= min_lon && longitude <= max_lon && latitude >= min_lat && latitude <= max_lat
}

pub(crate) fn check_precision(precision: u8) -> Result<(), OpenPostcodeError> {
    if precision == 0 || precision > MAX_PRECISION {
        return Err(OpenPostcodeError::InvalidPrecision(precision));
    }
    Ok(())
}

/// Number of cells along each grid axis at `precision`.
pub(crate) fn scale(precision: u8) -> f64 {
    5f64.powi(i32::from(precision))
}

/// Converts a WGS84 (lon/lat) coordinate to grid cell indices.
///
/// Returns `(x, y)`, where `x` counts cells south of [`NORTH`] and `y` counts
/// cells east of [`WEST`]. Points outside the Ireland rectangle, or inside it
/// but beyond the encoding grid, are [`OpenPostcodeError::OutOfRegion`].
pub fn point_to_cell<C: Coordinate>(
    coord: &C,
    precision: u8,
) -> Result<(u64, u64), OpenPostcodeError> {
    check_precision(precision)?;

    let (longitude, latitude) = (coord.x(), coord.y());
    let out_of_region = OpenPostcodeError::OutOfRegion {
        latitude,
        longitude,
    };
    if !in_boundary(longitude, latitude) {
        return Err(out_of_region);
    }

    let scale = scale(precision);
    let x = ((NORTH - latitude.abs()) / HIGH) * scale;
    let y = ((WEST - longitude.abs()) / WIDE) * scale;

    if !(0.0..scale).contains(&x) || !(0.0..scale).contains(&y) {
        return Err(out_of_region);
    }

    Ok((x.floor() as u64, y.floor() as u64))
}

/// Converts grid cell indices to the WGS84 centre point of the cell.
///
/// The returned point has `x = longitude` and `y = latitude`.
pub fn cell_to_point(x: u64, y: u64, precision: u8) -> Result<Point<f64>, OpenPostcodeError> {
    check_precision(precision)?;

    let scale = scale(precision);
    let latitude = NORTH - (x as f64 + 0.5) / scale * HIGH;
    let longitude = (y as f64 + 0.5) / scale * WIDE - WEST;

    Ok(Point::new(longitude, latitude))
}

/// Returns the `(height, width)` of one cell in degrees at `precision`.
pub fn cell_size(precision: u8) -> Result<(f64, f64), OpenPostcodeError> {
    check_precision(precision)?;
    let scale = scale(precision);
    Ok((HIGH / scale, WIDE / scale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::point;

    #[test]
    fn test_point_to_cell_and_back() -> Result<(), OpenPostcodeError> {
        let (x, y) = point_to_cell(&(-6.2603, 53.3498), 6)?;
        assert_eq!((x, y), (7999, 12991));

        let center = cell_to_point(x, y, 6)?;
        assert!((center.y() - 53.3497344).abs() < 1e-9);
        assert!((center.x() - -6.2601376).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_point_to_cell_with_point() -> Result<(), OpenPostcodeError> {
        let pt = point! { x: -6.2603, y: 53.3498 };
        assert_eq!(point_to_cell(&pt, 6)?, (7999, 12991));
        Ok(())
    }

    #[test]
    fn test_grid_corner_is_cell_zero() -> Result<(), OpenPostcodeError> {
        assert_eq!(point_to_cell(&(-10.75, 55.5), 3)?, (0, 0));
        Ok(())
    }

    #[test]
    fn test_in_boundary_inclusive() {
        assert!(in_boundary(-8.0, 48.13));
        assert!(in_boundary(-8.0, 56.72));
        assert!(in_boundary(-13.42, 53.0));
        assert!(in_boundary(-5.20, 53.0));
        assert!(in_boundary(-6.2603, 53.3498));

        assert!(!in_boundary(0.0, 0.0));
        assert!(!in_boundary(-8.0, 48.12));
        assert!(!in_boundary(-5.19, 53.0));
        // Arguments are (longitude, latitude)
        assert!(!in_boundary(53.3498, -6.2603));
        assert!(!in_boundary(f64::NAN, 53.0));
    }

    #[test]
    fn test_outside_rectangle() {
        let result = point_to_cell(&(0.0, 0.0), 6);
        assert_eq!(
            result,
            Err(OpenPostcodeError::OutOfRegion {
                latitude: 0.0,
                longitude: 0.0
            })
        );
    }

    #[test]
    fn test_inside_rectangle_outside_grid() {
        // South of the grid's lower edge at 51.3
        assert!(matches!(
            point_to_cell(&(-8.0, 48.13), 6),
            Err(OpenPostcodeError::OutOfRegion { .. })
        ));
        // North of NORTH gives a negative row
        assert!(matches!(
            point_to_cell(&(-8.0, 56.0), 6),
            Err(OpenPostcodeError::OutOfRegion { .. })
        ));
        // West of WEST gives a negative column
        assert!(matches!(
            point_to_cell(&(-13.0, 53.0), 6),
            Err(OpenPostcodeError::OutOfRegion { .. })
        ));
        // Lower grid edge is exclusive
        assert!(matches!(
            point_to_cell(&(-8.0, 51.3), 3),
            Err(OpenPostcodeError::OutOfRegion { .. })
        ));
    }

    #[test]
    fn test_invalid_precision() {
        assert_eq!(
            point_to_cell(&(-6.26, 53.35), 0),
            Err(OpenPostcodeError::InvalidPrecision(0))
        );
        assert_eq!(
            cell_to_point(0, 0, 14),
            Err(OpenPostcodeError::InvalidPrecision(14))
        );
    }

    #[test]
    fn test_cell_size() -> Result<(), OpenPostcodeError> {
        let (height, width) = cell_size(1)?;
        assert!((height - 0.84).abs() < 1e-12);
        assert!((width - 1.08).abs() < 1e-12);

        let (height, width) = cell_size(6)?;
        assert!((height - 4.2 / 15625.0).abs() < 1e-15);
        assert!((width - 5.4 / 15625.0).abs() < 1e-15);
        Ok(())
    }
}
