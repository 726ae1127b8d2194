use super::units::{
    Kilograms, KilogramsPerSecond, Kilometers, KilometersPerHour, MetersPerSecondSquared, Seconds,
};
use std::fmt;

/// Inputs of one computation pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightParameters {
    pub initial_velocity: KilometersPerHour,
    pub acceleration: MetersPerSecondSquared,
    pub elapsed_time: Seconds,
    pub initial_distance: Kilometers,
    pub fuel_mass: Kilograms,
    pub fuel_burn_rate: KilogramsPerSecond,
}

/// Outputs of one computation pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryReport {
    pub new_velocity: KilometersPerHour,
    pub new_distance: Kilometers,
    pub remaining_fuel: Kilograms,
}

impl fmt::Display for TrajectoryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Corrected New Velocity: {}", self.new_velocity)?;
        writeln!(f, "Corrected New Distance: {}", self.new_distance)?;
        write!(f, "Corrected Remaining Fuel: {}", self.remaining_fuel)
    }
}
