// Unit conversion factors
pub const SECONDS_PER_HOUR: f64 = 3_600.0; // s/h
pub const METERS_PER_KILOMETER: f64 = 1_000.0; // m/km
pub const MPS_TO_KMH: f64 = 3.6; // (km/h) per (m/s)

// Tolerated relative gap between the constant-velocity distance and the
// accelerated distance before it is reported as a warning.
pub const DISTANCE_APPROXIMATION_TOLERANCE: f64 = 0.01;
