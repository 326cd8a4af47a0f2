use crate::utils::{self, Real};

/// Kinetic energy `½Σv²` of unit-mass particles
pub fn kinetic_energy<T: Real>(velocities: &[[T; 3]]) -> T {
    T::lit(0.5) * utils::sum_squares(velocities)
}
