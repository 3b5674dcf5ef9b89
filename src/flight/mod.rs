pub mod boundary;
pub mod simulator;

pub use boundary::{BOUNDARY_SAMPLES, find_boundary_entry};
pub use simulator::{FlightPath, LaunchParams, simulate};
