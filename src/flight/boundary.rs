use crate::domain::GeoPoint;

/// Number of equal steps the chord is split into
pub const BOUNDARY_SAMPLES: u32 = 50;

/// Find where the straight chord `start -> end` first enters a region
///
/// Samples the chord at [`BOUNDARY_SAMPLES`] equal steps in latitude and
/// longitude. On the first sample inside the region, returns the midpoint
/// between it and the previous sample. If no sample is inside, `end` is
/// returned unchanged: callers must not assume a crossing exists.
pub fn find_boundary_entry<F>(start: GeoPoint, end: GeoPoint, is_in_region: F) -> GeoPoint
where
    F: Fn(GeoPoint) -> bool,
{
    let steps = BOUNDARY_SAMPLES as f64;
    let lat_inc = (end.latitude - start.latitude) / steps;
    let lon_inc = (end.longitude - start.longitude) / steps;

    let mut prev = start;
    for i in 1..=BOUNDARY_SAMPLES {
        let i = i as f64;
        let sample = GeoPoint::new(start.latitude + lat_inc * i, start.longitude + lon_inc * i);
        if is_in_region(sample) {
            return GeoPoint::new(
                prev.latitude + lat_inc * 0.5,
                prev.longitude + lon_inc * 0.5,
            );
        }
        prev = sample;
    }

    end
}
