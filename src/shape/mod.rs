//! Shapes supported by gridmesh2d.

pub use self::polygon::{Polygon, PolygonError};
pub use self::segment::Segment;
pub use self::triangle::Triangle;

mod polygon;
mod segment;
mod triangle;
