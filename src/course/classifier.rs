use crate::domain::{GeoPoint, SurfaceLabel, SurfaceSet};

/// Surfaces checked in priority order; the first containing region wins
///
/// Regions overlap on real courses (out-of-bounds cliffs cut across the
/// green complex), so this order decides outcomes and must not change.
pub const PRIORITY: [SurfaceLabel; 5] = [
    SurfaceLabel::Ob,
    SurfaceLabel::Green,
    SurfaceLabel::Bunker,
    SurfaceLabel::Water,
    SurfaceLabel::Fairway,
];

/// Label the surface under `point`, falling back to rough
pub fn classify(point: GeoPoint, surfaces: &SurfaceSet) -> SurfaceLabel {
    PRIORITY
        .into_iter()
        .find(|&label| in_surface(point, surfaces, label))
        .unwrap_or(SurfaceLabel::Rough)
}

pub fn is_out_of_bounds(point: GeoPoint, surfaces: &SurfaceSet) -> bool {
    in_surface(point, surfaces, SurfaceLabel::Ob)
}

fn in_surface(point: GeoPoint, surfaces: &SurfaceSet, label: SurfaceLabel) -> bool {
    surfaces
        .regions(label)
        .iter()
        .any(|region| region.contains_point(point))
}
