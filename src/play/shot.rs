use crate::domain::{BallState, Club, GeoPoint, Lie, SurfaceLabel};
use crate::flight::FlightPath;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    pub speed_mph: f64,
    /// Direction the wind blows toward, planar degrees (0 = east, 90 = north)
    pub direction_deg: f64,
}

impl Wind {
    pub fn new(speed_mph: f64, direction_deg: f64) -> Self {
        Self {
            speed_mph,
            direction_deg,
        }
    }
}

/// What the player asked for
#[derive(Debug, Clone, PartialEq)]
pub struct ShotIntent {
    pub club: Club,
    /// Aim relative to the pin line, degrees
    pub aim_offset_deg: f64,
    pub wind: Wind,
    /// Free text for whoever turns the intent into numbers; unused here
    pub description: String,
}

impl ShotIntent {
    pub fn new(club: Club) -> Self {
        Self {
            club,
            aim_offset_deg: 0.0,
            wind: Wind::default(),
            description: String::new(),
        }
    }

    pub fn with_wind(mut self, wind: Wind) -> Self {
        self.wind = wind;
        self
    }

    pub fn with_aim(mut self, aim_offset_deg: f64) -> Self {
        self.aim_offset_deg = aim_offset_deg;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Everything known about a shot before its outcome parameters arrive
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShotContext {
    /// Stroke number this shot will be
    pub stroke: u32,
    pub origin: GeoPoint,
    pub lie: Lie,
    pub club: Club,
    /// Club distance after the lie penalty, whole yards; resolution recomputes it
    pub max_distance_yards: f64,
    pub distance_to_pin_yards: f64,
    pub aim_offset_deg: f64,
    pub wind: Wind,
    pub description: String,
    /// Phases passed so far
    pub phases: Vec<ShotPhase>,
}

/// Distance and direction of a shot as decided outside the simulator
///
/// Direction is degrees relative to the pin line. Values are not checked
/// for plausibility: a negative distance sends the ball backwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ShotParameters {
    #[serde(default)]
    pub distance: f64,
    #[serde(default)]
    pub direction: f64,
}

impl ShotParameters {
    pub fn new(distance: f64, direction: f64) -> Self {
        Self {
            distance,
            direction,
        }
    }

    /// Pull the first `{ ... }` JSON object out of a free-form reply
    pub fn from_reply(reply: &str) -> Option<Self> {
        let start = reply.find('{')?;
        let end = reply.rfind('}')?;
        if end < start {
            return None;
        }
        serde_json::from_str(&reply[start..=end]).ok()
    }
}

/// Steps a shot passes through; `BoundaryCorrected` only after an out-of-bounds landing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotPhase {
    AwaitingInput,
    LieDetermined,
    FlightComputed,
    OutcomeResolved,
    BoundaryCorrected,
    Done,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShotReport {
    pub stroke: u32,
    pub club: Club,
    pub played_from: Lie,
    pub outcome: SurfaceLabel,
    pub target: GeoPoint,
    pub flight: FlightPath,
    pub landing: GeoPoint,
    /// Drop point when the ball went out of bounds
    pub boundary_entry: Option<GeoPoint>,
    pub penalty_strokes: u32,
    pub ball: BallState,
    pub distance_to_pin_yards: f64,
    pub hole_finished: bool,
    pub phases: Vec<ShotPhase>,
}
