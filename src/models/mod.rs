pub mod parameters;
pub mod units;

pub use parameters::{FlightParameters, TrajectoryReport};
