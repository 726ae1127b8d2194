use super::validation::require_non_negative;
use crate::errors::KinematicsError;
use crate::models::units::{Kilograms, KilogramsPerSecond, Seconds};

/// Fuel left after burning at `burn_rate` for `time`.
///
/// Burning more than `fuel_mass` is an error, never a negative mass. Burning
/// exactly all of it leaves `0 kg`.
pub fn compute_remaining_fuel(
    fuel_mass: Kilograms,
    burn_rate: KilogramsPerSecond,
    time: Seconds,
) -> Result<Kilograms, KinematicsError> {
    require_non_negative("fuel_mass_kg", fuel_mass.value())?;
    require_non_negative("burn_rate_kg_per_s", burn_rate.value())?;
    require_non_negative("time_s", time.value())?;

    let burnt = burn_rate * time;
    let remaining = fuel_mass - burnt;
    if remaining.value() < 0.0 {
        return Err(KinematicsError::FuelExhausted {
            available_kg: fuel_mass.value(),
            required_kg: burnt.value(),
        });
    }
    Ok(remaining)
}
