//! Various unsorted geometrical and logical operators.

pub use self::center::center;
pub use self::dedup::{dedup_points, dedup_points_stable};
pub use self::point_in_poly2d::{
    distance_to_poly2d_boundary, point_in_poly2d, point_in_poly2d_with_tolerance,
    points_in_poly2d_with_tolerance,
};
pub use self::spade::{sanitize_spade_coord, sanitize_spade_point};

mod center;
mod dedup;
mod point_in_poly2d;
mod spade;
