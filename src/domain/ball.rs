use super::{GeoPoint, SurfaceLabel};
use serde::{Deserialize, Serialize};

/// Surface the ball is played from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lie {
    Tee,
    Fairway,
    Rough,
    Bunker,
    Green,
    Water,
}

impl Lie {
    /// Lie for a ball resting on a classified surface
    ///
    /// A ball is never played from out of bounds; a drop that still
    /// classifies as `ob` is treated as rough.
    pub fn from_surface(label: SurfaceLabel) -> Lie {
        match label {
            SurfaceLabel::Fairway => Lie::Fairway,
            SurfaceLabel::Green => Lie::Green,
            SurfaceLabel::Bunker => Lie::Bunker,
            SurfaceLabel::Water => Lie::Water,
            SurfaceLabel::Ob | SurfaceLabel::Rough => Lie::Rough,
        }
    }

    /// Fraction of a club's base distance available from this lie
    pub fn distance_multiplier(&self) -> f64 {
        match self {
            Lie::Tee => 1.0,
            Lie::Fairway => 0.95,
            Lie::Rough => 0.80,
            Lie::Bunker => 0.50,
            Lie::Green | Lie::Water => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallState {
    pub position: GeoPoint,
    pub lie: Lie,
    pub stroke_count: u32,
}

impl BallState {
    pub fn on_tee(tee: GeoPoint) -> Self {
        Self {
            position: tee,
            lie: Lie::Tee,
            stroke_count: 0,
        }
    }
}
