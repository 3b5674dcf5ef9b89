pub mod containment;
pub mod distance;

pub use containment::{point_in_polygonal, point_in_ring};
pub use distance::{aim_offset_deg, bearing, distance_yards, offset_point};
