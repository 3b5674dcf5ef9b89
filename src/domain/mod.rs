pub mod ball;
pub mod club;
pub mod point;
pub mod surface;

pub use ball::{BallState, Lie};
pub use club::Club;
pub use point::{FlightPoint, GeoPoint};
pub use surface::{Polygonal, SurfaceLabel, SurfaceSet, SurfaceSetBuilder};
