use thiserror::Error;

#[derive(Error, Debug)]
pub enum HoleError {
    #[error("Ball flight did not settle within {steps} integration steps")]
    SimulationBoundsExceeded { steps: usize },

    #[error("Hole is already finished; restart to play again")]
    HoleFinished,

    #[error("Shot context was prepared for another ball position; prepare the shot again")]
    StaleShotContext,

    #[error("Shot parameters unavailable: {0}")]
    ShotSource(String),

    #[error("Invalid course data: {0}")]
    InvalidCourse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Course JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HoleError>;
