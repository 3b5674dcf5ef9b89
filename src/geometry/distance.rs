//! Distances and directions between course positions
//!
//! Everything here works at the scale of a single hole (a few hundred
//! yards), which is what makes the planar shortcuts below acceptable.

use crate::domain::GeoPoint;
use std::f64::consts::PI;

/// Mean Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

pub const YARDS_PER_METER: f64 = 1.09361;

/// Degrees of latitude/longitude per yard (or per meter, for the simulator)
pub const DEGREES_PER_YARD: f64 = 0.000009;

/// Haversine great-circle distance in yards
///
/// A malformed point yields 0 and a warning instead of an error.
pub fn distance_yards(a: GeoPoint, b: GeoPoint) -> f64 {
    if !a.is_valid() || !b.is_valid() {
        tracing::warn!(%a, %b, "distance requested between malformed points");
        return 0.0;
    }

    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let s = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * s.sqrt().atan2((1.0 - s).sqrt());

    EARTH_RADIUS_M * c * YARDS_PER_METER
}

/// Planar bearing from `a` to `b` in radians
///
/// `atan2(Δlat, Δlon)`: 0 points east, π/2 north. Not a geodesic initial
/// bearing; aim offsets and shot targets are composed with this same angle.
pub fn bearing(a: GeoPoint, b: GeoPoint) -> f64 {
    (b.latitude - a.latitude).atan2(b.longitude - a.longitude)
}

/// Point `yards` away from `from` along a planar bearing
pub fn offset_point(from: GeoPoint, bearing_rad: f64, yards: f64) -> GeoPoint {
    GeoPoint::new(
        from.latitude + yards * DEGREES_PER_YARD * bearing_rad.sin(),
        from.longitude + yards * DEGREES_PER_YARD * bearing_rad.cos(),
    )
}

/// Aim offset in degrees for aiming from `ball` at `toward`, relative to the pin line
///
/// Normalized to (-180, 180].
pub fn aim_offset_deg(ball: GeoPoint, pin: GeoPoint, toward: GeoPoint) -> f64 {
    let mut offset = (bearing(ball, toward) - bearing(ball, pin)) * 180.0 / PI;
    while offset > 180.0 {
        offset -= 360.0;
    }
    while offset <= -180.0 {
        offset += 360.0;
    }
    offset
}
