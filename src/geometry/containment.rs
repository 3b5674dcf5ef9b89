//! Point containment against course polygons
//!
//! Even-odd ray casting toward +longitude. Only exterior rings take part:
//! interior rings (holes) are carried in the data but never subtracted.

use crate::domain::{GeoPoint, Polygonal};
use geo::LineString;

/// Even-odd test of `point` against an implicitly closed ring
///
/// Edges use the half-open rule `(yi > y) != (yj > y)`, so a vertex shared
/// by two edges is counted once and horizontal edges never count.
pub fn point_in_ring(point: GeoPoint, ring: &LineString<f64>) -> bool {
    let coords = &ring.0;
    if coords.len() < 3 {
        return false;
    }

    let x = point.longitude;
    let y = point.latitude;
    let mut inside = false;

    let mut j = coords.len() - 1;
    for i in 0..coords.len() {
        let (xi, yi) = (coords[i].x, coords[i].y);
        let (xj, yj) = (coords[j].x, coords[j].y);

        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Whether any exterior ring of `geometry` contains `point`; absent geometry contains nothing
pub fn point_in_polygonal(point: GeoPoint, geometry: Option<&Polygonal>) -> bool {
    match geometry {
        None => false,
        Some(Polygonal::Polygon(polygon)) => point_in_ring(point, polygon.exterior()),
        Some(Polygonal::MultiPolygon(multi)) => multi
            .iter()
            .any(|polygon| point_in_ring(point, polygon.exterior())),
    }
}

impl Polygonal {
    pub fn contains_point(&self, point: GeoPoint) -> bool {
        point_in_polygonal(point, Some(self))
    }
}
