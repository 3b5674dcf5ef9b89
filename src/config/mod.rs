use serde::Deserialize;
use std::path::PathBuf;

/// Default physics constants for ball flight.
///
/// Units: seconds, meters, yards and mph as named. The simulator moves the
/// ball across the map with the same 0.000009 degree-per-unit factor the
/// shot targeting uses, so flights and targets stay on one scale.
pub mod physics {
    pub const TIME_STEP_S: f64 = 0.05;
    pub const DRAG: f64 = 0.1;
    pub const GRAVITY_MPS2: f64 = 9.81;
    pub const MAX_SPEED_MPH: f64 = 160.0;
    pub const ARRIVAL_RADIUS_YARDS: f64 = 5.0;
    /// 100 seconds of flight at the default step
    pub const MAX_STEPS: usize = 2000;
}

fn default_wind_speed() -> f64 {
    0.0
}
fn default_wind_dir() -> f64 {
    0.0
}
fn default_verbose() -> bool {
    false
}

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    /// GeoJSON course file; the built-in hole is used when absent
    #[serde(default)]
    pub course: Option<PathBuf>,
    /// Hole number to pick out of a multi-hole course file
    #[serde(default)]
    pub hole: Option<u32>,
    #[serde(default = "default_wind_speed")]
    pub wind_speed_mph: f64,
    #[serde(default = "default_wind_dir")]
    pub wind_dir_deg: f64,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
    #[serde(default)]
    pub json: bool,
    #[serde(default)]
    pub physics: Option<PhysicsConfig>,
}

fn default_time_step() -> f64 {
    physics::TIME_STEP_S
}
fn default_drag() -> f64 {
    physics::DRAG
}
fn default_gravity() -> f64 {
    physics::GRAVITY_MPS2
}
fn default_max_speed() -> f64 {
    physics::MAX_SPEED_MPH
}
fn default_arrival_radius() -> f64 {
    physics::ARRIVAL_RADIUS_YARDS
}
fn default_max_steps() -> usize {
    physics::MAX_STEPS
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PhysicsConfig {
    #[serde(default = "default_time_step")]
    pub time_step_s: f64,
    #[serde(default = "default_drag")]
    pub drag: f64,
    #[serde(default = "default_gravity")]
    pub gravity_mps2: f64,
    /// Ball speed at full power
    #[serde(default = "default_max_speed")]
    pub max_speed_mph: f64,
    /// Flight ends once the ball is this close to its target
    #[serde(default = "default_arrival_radius")]
    pub arrival_radius_yards: f64,
    /// Hard cap on integration steps for a single flight
    #[serde(default = "default_max_steps")]
    pub max_steps: usize,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            time_step_s: default_time_step(),
            drag: default_drag(),
            gravity_mps2: default_gravity(),
            max_speed_mph: default_max_speed(),
            arrival_radius_yards: default_arrival_radius(),
            max_steps: default_max_steps(),
        }
    }
}

impl FileConfig {
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => {
                        tracing::debug!(?path, "loaded config");
                        return Some(config);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("holesim.toml"));
    paths.push(PathBuf::from(".holesim.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("holesim").join("config.toml"));
        paths.push(config_dir.join("holesim.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".holesim.toml"));
        paths.push(home.join(".config").join("holesim").join("config.toml"));
    }

    paths
}
