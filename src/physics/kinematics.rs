use super::validation::{require_finite, require_finite_result, require_non_negative};
use crate::errors::KinematicsError;
use crate::models::units::{Kilometers, KilometersPerHour, MetersPerSecondSquared, Seconds};

/// New velocity after accelerating for `time`.
///
/// `v = v0 + a·t`, with `a·t` converted from m/s to km/h.
///
/// The result is not clamped: a deceleration longer than it takes to stop
/// returns a negative velocity, i.e. motion in the opposite direction.
pub fn compute_new_velocity(
    initial_velocity: KilometersPerHour,
    acceleration: MetersPerSecondSquared,
    time: Seconds,
) -> Result<KilometersPerHour, KinematicsError> {
    require_non_negative("initial_velocity_kmh", initial_velocity.value())?;
    require_finite("acceleration_ms2", acceleration.value())?;
    require_non_negative("time_s", time.value())?;

    let delta_v = (acceleration * time).to_kilometers_per_hour();
    let new_velocity = initial_velocity + delta_v;
    require_finite_result("new_velocity_kmh", new_velocity.value())?;
    Ok(new_velocity)
}

/// Distance after travelling at `initial_velocity` for `time`.
///
/// Constant-velocity approximation: acceleration within the interval is
/// ignored. See [`compute_distance_under_acceleration`] for the exact figure.
pub fn compute_new_distance(
    initial_distance: Kilometers,
    initial_velocity: KilometersPerHour,
    time: Seconds,
) -> Result<Kilometers, KinematicsError> {
    require_finite("initial_distance_km", initial_distance.value())?;
    require_non_negative("initial_velocity_kmh", initial_velocity.value())?;
    require_non_negative("time_s", time.value())?;

    let new_distance = initial_distance + initial_velocity * time.to_hours();
    require_finite_result("new_distance_km", new_distance.value())?;
    Ok(new_distance)
}

/// Distance after `time` under constant acceleration: `d0 + v0·t + ½·a·t²`.
pub fn compute_distance_under_acceleration(
    initial_distance: Kilometers,
    initial_velocity: KilometersPerHour,
    acceleration: MetersPerSecondSquared,
    time: Seconds,
) -> Result<Kilometers, KinematicsError> {
    require_finite("initial_distance_km", initial_distance.value())?;
    require_non_negative("initial_velocity_kmh", initial_velocity.value())?;
    require_finite("acceleration_ms2", acceleration.value())?;
    require_non_negative("time_s", time.value())?;

    // ½·a·t² = ½·(a·t)·t
    let thrust_leg = (acceleration * time * 0.5) * time;
    let distance =
        initial_distance + initial_velocity * time.to_hours() + thrust_leg.to_kilometers();
    require_finite_result("accelerated_distance_km", distance.value())?;
    Ok(distance)
}
