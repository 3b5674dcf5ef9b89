pub mod classifier;
pub mod loader;
pub mod pebble;

pub use classifier::{classify, is_out_of_bounds};
pub use loader::{load_course, parse_course, parse_course_str};

use crate::domain::{GeoPoint, SurfaceSet};
use crate::geometry::distance_yards;

/// A single playable hole
#[derive(Debug, Clone)]
pub struct Hole {
    pub number: Option<u32>,
    pub par: Option<u32>,
    /// Card length in yards
    pub yards: Option<u32>,
    pub tee: GeoPoint,
    pub pin: GeoPoint,
    pub surfaces: SurfaceSet,
}

impl Hole {
    /// Straight-line tee to pin distance in yards
    pub fn straight_yards(&self) -> f64 {
        distance_yards(self.tee, self.pin)
    }
}
