/// Latitude of the northern edge of the encoding grid
pub const NORTH: f64 = 55.5;

/// Absolute longitude of the western edge of the encoding grid
pub const WEST: f64 = 10.75;

/// Grid height in degrees of latitude
pub const HIGH: f64 = 4.2;

/// Grid width in degrees of longitude
pub const WIDE: f64 = 5.4;

/// Address alphabet, one character per base-25 digit
pub const ALPHABET: &str = "23456789CDFGHJKLMNPQRTVWX";

/// Base-25 digits in the same positional order as [`ALPHABET`]
pub const BASE25: &str = "0123456789ABCDEFGHIJKLMNO";

/// Region of Ireland accepted for encoding [min_lon, min_lat, max_lon, max_lat]
pub const IRELAND_BOUNDS: [f64; 4] = [-13.42, 48.13, -5.20, 56.72];

/// Modulus of the weighted positional checksum
pub const CHECKSUM_MODULUS: u32 = 31;

/// Maximum precision; 25^13 is the largest power of 25 below `u64::MAX`
pub const MAX_PRECISION: u8 = 13;

/// Legacy result of encoding a point outside the region
pub const OUTSIDE_ROI: &str = "OUTSIDE ROI.";
