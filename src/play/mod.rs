pub mod session;
pub mod shot;

pub use session::{GameSession, ShotParameterSource};
pub use shot::{ShotContext, ShotIntent, ShotParameters, ShotPhase, ShotReport, Wind};
