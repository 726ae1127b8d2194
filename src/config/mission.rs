use crate::models::units::{
    Kilograms, KilogramsPerSecond, Kilometers, KilometersPerHour, MetersPerSecondSquared, Seconds,
};
use crate::models::FlightParameters;

/// One hour of constant thrust from cruise speed.
pub struct ReferenceMission;

impl ReferenceMission {
    pub const INITIAL_VELOCITY: f64 = 10_000.0; // km/h
    pub const ACCELERATION: f64 = 3.0; // m/s²
    pub const ELAPSED_TIME: f64 = 3_600.0; // s
    pub const INITIAL_DISTANCE: f64 = 0.0; // km
    pub const FUEL_MASS: f64 = 5_000.0; // kg
    pub const FUEL_BURN_RATE: f64 = 0.5; // kg/s

    pub fn parameters() -> FlightParameters {
        FlightParameters {
            initial_velocity: KilometersPerHour(Self::INITIAL_VELOCITY),
            acceleration: MetersPerSecondSquared(Self::ACCELERATION),
            elapsed_time: Seconds(Self::ELAPSED_TIME),
            initial_distance: Kilometers(Self::INITIAL_DISTANCE),
            fuel_mass: Kilograms(Self::FUEL_MASS),
            fuel_burn_rate: KilogramsPerSecond(Self::FUEL_BURN_RATE),
        }
    }
}

impl Default for FlightParameters {
    fn default() -> Self {
        ReferenceMission::parameters()
    }
}
