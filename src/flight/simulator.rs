//! Time-stepped ball flight
//!
//! Forward Euler with a fixed step. Horizontal position is kept in degrees
//! (x = longitude, y = latitude) and advanced with the same degree-per-unit
//! factor used for shot targeting; altitude is meters.

use crate::config::PhysicsConfig;
use crate::domain::{FlightPoint, GeoPoint};
use crate::error::{HoleError, Result};
use crate::geometry::distance::DEGREES_PER_YARD;
use crate::geometry::{bearing, distance_yards};
use serde::Serialize;

pub const MPH_TO_MPS: f64 = 0.44704;

/// How the ball leaves the club
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchParams {
    /// Fraction of full swing speed, 0..1
    pub power: f64,
    pub launch_angle_deg: f64,
    pub wind_speed_mph: f64,
    /// Direction the wind blows toward, measured like [`bearing`]
    pub wind_dir_deg: f64,
}

/// Every simulated position after launch, in order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FlightPath {
    points: Vec<FlightPoint>,
}

impl FlightPath {
    pub fn points(&self) -> &[FlightPoint] {
        &self.points
    }

    /// Where the flight ended
    pub fn landing(&self) -> Option<&FlightPoint> {
        self.points.last()
    }

    /// Highest point of the flight
    pub fn apex(&self) -> Option<&FlightPoint> {
        self.points
            .iter()
            .max_by(|a, b| a.altitude.total_cmp(&b.altitude))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Fly a ball from `start` toward `target`
///
/// Runs while the ball is at or above the ground and more than
/// `arrival_radius_yards` from the target. Each step adds wind to the
/// horizontal velocity, damps all three components by `1 - drag * dt`, then
/// subtracts `g * dt` from the vertical one.
///
/// # Errors
/// `SimulationBoundsExceeded` when the flight would need more than
/// `physics.max_steps` steps.
pub fn simulate(
    start: GeoPoint,
    target: GeoPoint,
    params: &LaunchParams,
    physics: &PhysicsConfig,
) -> Result<FlightPath> {
    let dt = physics.time_step_s;
    let damping = 1.0 - physics.drag * dt;

    let speed = physics.max_speed_mph * params.power * MPH_TO_MPS;
    let heading = bearing(start, target);
    let launch = params.launch_angle_deg.to_radians();
    let horizontal = speed * launch.cos();

    let mut vx = horizontal * heading.cos();
    let mut vy = horizontal * heading.sin();
    let mut vz = speed * launch.sin();

    let wind = params.wind_speed_mph * MPH_TO_MPS;
    let wind_dir = params.wind_dir_deg.to_radians();
    let (wx, wy) = (wind * wind_dir.cos(), wind * wind_dir.sin());

    let mut x = start.longitude;
    let mut y = start.latitude;
    let mut z = 0.0;

    let mut points = Vec::new();

    while z >= 0.0 && distance_yards(GeoPoint::new(y, x), target) > physics.arrival_radius_yards {
        if points.len() >= physics.max_steps {
            tracing::warn!(
                %start,
                %target,
                steps = physics.max_steps,
                "ball flight exceeded step bound"
            );
            return Err(HoleError::SimulationBoundsExceeded {
                steps: physics.max_steps,
            });
        }

        vx += wx * dt;
        vy += wy * dt;

        vx *= damping;
        vy *= damping;
        vz *= damping;
        vz -= physics.gravity_mps2 * dt;

        x += vx * dt * DEGREES_PER_YARD;
        y += vy * dt * DEGREES_PER_YARD;
        z += vz * dt;

        points.push(FlightPoint::new(y, x, z));
    }

    tracing::debug!(
        steps = points.len(),
        airtime_s = points.len() as f64 * dt,
        "flight simulated"
    );

    Ok(FlightPath { points })
}
