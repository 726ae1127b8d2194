pub mod calculator;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod physics;

pub use calculator::KinematicsCalculator;
pub use errors::{Constraint, KinematicsError};
pub use models::{FlightParameters, TrajectoryReport};
