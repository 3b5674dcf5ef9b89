//! Pebble Beach hole 8, bundled so the simulator runs without course files

use super::Hole;
use super::loader::parse_course_str;
use crate::error::Result;

const PEBBLE_BEACH_8: &str = include_str!("data/pebble_beach_8.geojson");

/// Par 4, 428 yards, played over the cliffs to a green above the ocean
pub fn pebble_beach_8() -> Result<Hole> {
    parse_course_str(PEBBLE_BEACH_8, Some(8))
}
