use serde::{Deserialize, Serialize};
use std::fmt;

/// A WGS84 position in degrees
///
/// Non-finite coordinates mark a malformed point. Geometry functions treat
/// such points as a recoverable data-quality problem rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Placeholder for a point whose coordinates were missing upstream
    pub fn missing() -> Self {
        Self::new(f64::NAN, f64::NAN)
    }

    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Coordinate in the (x = longitude, y = latitude) order used by rings
    pub fn to_coord(self) -> geo::Coord<f64> {
        geo::coord! { x: self.longitude, y: self.latitude }
    }
}

impl From<geo::Coord<f64>> for GeoPoint {
    fn from(c: geo::Coord<f64>) -> Self {
        Self::new(c.y, c.x)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.7}, {:.7})", self.latitude, self.longitude)
    }
}

/// A simulated ball position; altitude is meters above the launch plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

impl FlightPoint {
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }

    pub fn ground(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

impl From<FlightPoint> for GeoPoint {
    fn from(p: FlightPoint) -> Self {
        p.ground()
    }
}
