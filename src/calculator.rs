use crate::constants::DISTANCE_APPROXIMATION_TOLERANCE;
use crate::errors::KinematicsError;
use crate::models::{FlightParameters, TrajectoryReport};
use crate::physics::{
    compute_distance_under_acceleration, compute_new_distance, compute_new_velocity,
    compute_remaining_fuel,
};
use tracing::{debug, warn};

pub struct KinematicsCalculator;

impl KinematicsCalculator {
    /// Runs velocity, distance and fuel in that order and stops at the first
    /// invalid input. No partial report is returned.
    pub fn compute(params: &FlightParameters) -> Result<TrajectoryReport, KinematicsError> {
        let new_velocity = compute_new_velocity(
            params.initial_velocity,
            params.acceleration,
            params.elapsed_time,
        )?;
        debug!(%new_velocity, "velocity computed");

        let new_distance = compute_new_distance(
            params.initial_distance,
            params.initial_velocity,
            params.elapsed_time,
        )?;
        debug!(%new_distance, "distance computed");
        Self::check_distance_approximation(params, new_distance.value());

        let remaining_fuel =
            compute_remaining_fuel(params.fuel_mass, params.fuel_burn_rate, params.elapsed_time)?;
        debug!(%remaining_fuel, "remaining fuel computed");

        Ok(TrajectoryReport {
            new_velocity,
            new_distance,
            remaining_fuel,
        })
    }

    fn check_distance_approximation(params: &FlightParameters, reported_km: f64) {
        let accelerated = match compute_distance_under_acceleration(
            params.initial_distance,
            params.initial_velocity,
            params.acceleration,
            params.elapsed_time,
        ) {
            Ok(accelerated) => accelerated,
            Err(e) => {
                debug!(error = %e, "accelerated distance unavailable");
                return;
            }
        };
        debug!(%accelerated, "distance under constant acceleration");

        if approximation_gap_exceeds(
            params.initial_distance.value(),
            reported_km,
            accelerated.value(),
        ) {
            warn!(
                reported_km,
                accelerated_km = accelerated.value(),
                "constant-velocity distance ignores acceleration over the interval"
            );
        }
    }
}

/// True when the reported distance is off from the accelerated one by more
/// than the tolerated share of the distance actually travelled.
fn approximation_gap_exceeds(initial_km: f64, reported_km: f64, accelerated_km: f64) -> bool {
    let travelled = (accelerated_km - initial_km).abs();
    let gap = (accelerated_km - reported_km).abs();
    travelled > 0.0 && gap / travelled > DISTANCE_APPROXIMATION_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::mission::ReferenceMission;
    use crate::errors::Constraint;
    use crate::models::units::{Kilograms, KilogramsPerSecond, MetersPerSecondSquared, Seconds};
    use test_case::test_case;

    #[test]
    fn test_reference_mission() {
        let report = KinematicsCalculator::compute(&ReferenceMission::parameters()).unwrap();

        assert_eq!(report.new_velocity.value(), 48_880.0);
        assert_eq!(report.new_distance.value(), 10_000.0);
        assert_eq!(report.remaining_fuel.value(), 3_200.0);
    }

    #[test]
    fn test_zero_time_leaves_inputs_unchanged() {
        let params = FlightParameters {
            elapsed_time: Seconds(0.0),
            ..FlightParameters::default()
        };
        let report = KinematicsCalculator::compute(&params).unwrap();

        assert_eq!(report.new_velocity, params.initial_velocity);
        assert_eq!(report.new_distance, params.initial_distance);
        assert_eq!(report.remaining_fuel, params.fuel_mass);
    }

    #[test]
    fn test_negative_time_rejected() {
        let params = FlightParameters {
            elapsed_time: Seconds(-1.0),
            ..FlightParameters::default()
        };

        assert_eq!(
            KinematicsCalculator::compute(&params),
            Err(KinematicsError::invalid("time_s", -1.0, Constraint::NonNegative))
        );
    }

    #[test]
    fn test_fuel_exhaustion_aborts_run() {
        let params = FlightParameters {
            fuel_mass: Kilograms(100.0),
            fuel_burn_rate: KilogramsPerSecond(1.0),
            ..FlightParameters::default()
        };

        assert!(matches!(
            KinematicsCalculator::compute(&params),
            Err(KinematicsError::FuelExhausted { .. })
        ));
    }

    #[test]
    fn test_idempotent() {
        let params = ReferenceMission::parameters();
        assert_eq!(
            KinematicsCalculator::compute(&params),
            KinematicsCalculator::compute(&params)
        );
    }

    #[test_case(0.0, 10_000.0, 29_440.0 => true; "reference mission")]
    #[test_case(0.0, 100.0, 100.0 => false; "no acceleration")]
    #[test_case(0.0, 100.0, 101.0 => false; "within tolerance")]
    #[test_case(0.0, 100.0, 102.0 => true; "just above tolerance")]
    #[test_case(50.0, 149.5, 150.0 => false; "offset start within tolerance")]
    #[test_case(50.0, 50.0, 50.0 => false; "nothing travelled")]
    #[test_case(0.0, 5.0, 0.0 => false; "accelerated back to the start")]
    fn test_approximation_gap_exceeds(initial_km: f64, reported_km: f64, accelerated_km: f64) -> bool {
        approximation_gap_exceeds(initial_km, reported_km, accelerated_km)
    }

    #[test]
    fn test_accelerated_overflow_does_not_abort_run() {
        // a·t stays finite, ½·a·t² does not
        let params = FlightParameters {
            acceleration: MetersPerSecondSquared(1.0),
            elapsed_time: Seconds(1e200),
            fuel_burn_rate: KilogramsPerSecond(0.0),
            ..FlightParameters::default()
        };

        let report = KinematicsCalculator::compute(&params).unwrap();
        assert!(report.new_velocity.value().is_finite());
        assert!(report.new_distance.value().is_finite());
        assert_eq!(report.remaining_fuel, params.fuel_mass);
    }
}
