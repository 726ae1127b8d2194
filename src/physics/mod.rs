pub mod fuel;
pub mod kinematics;
pub mod validation;

pub use fuel::compute_remaining_fuel;
pub use kinematics::{
    compute_distance_under_acceleration, compute_new_distance, compute_new_velocity,
};
