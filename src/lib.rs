//! holesim - Simulate golf shots over a single hole: surface classification and ball flight

pub mod config;
pub mod course;
pub mod domain;
pub mod error;
pub mod flight;
pub mod geometry;
pub mod play;
