pub mod alphabet;
pub mod checksum;
pub mod constants;
pub mod geometry;
pub mod grid;
pub mod identifier;
pub mod radix;

pub use alphabet::{translate, translate_to_common};
pub use checksum::calculate_checksum;
pub use constants::{
    ALPHABET, BASE25, CHECKSUM_MODULUS, HIGH, IRELAND_BOUNDS, MAX_PRECISION, NORTH, OUTSIDE_ROI,
    WEST, WIDE,
};
pub use geometry::{cell_bounds, create_cell_polygon};
pub use grid::{cell_size, cell_to_point, in_boundary, point_to_cell};
pub use identifier::{decode_postcode, generate_postcode};
