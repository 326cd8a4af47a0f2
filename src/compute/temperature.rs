use crate::utils::{self, Real};

/// Instantaneous temperature `Σv²/(3N)` of unit-mass particles
pub fn temperature<T: Real>(velocities: &[[T; 3]]) -> T {
    utils::sum_squares(velocities) / (T::lit(3.0) * T::count(velocities.len()))
}
