mod kinetic_energy;
mod temperature;

pub use kinetic_energy::kinetic_energy;
pub use temperature::temperature;

use crate::utils::Real;

/// Thermodynamic scalars of the current state, refreshed every step
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Thermo<T: Real> {
    pub potential_energy: T,
    pub kinetic_energy: T,
    pub temperature: T,
    pub pressure: T,
}
impl<T: Real> Thermo<T> {
    pub fn total_energy(&self) -> T {
        self.potential_energy + self.kinetic_energy
    }
    /// Refresh kinetic energy and temperature from a single pass over `velocities`
    pub fn set_kinetic(&mut self, velocities: &[[T; 3]]) {
        let sumv2 = crate::utils::sum_squares(velocities);
        self.kinetic_energy = T::lit(0.5) * sumv2;
        self.temperature = sumv2 / (T::lit(3.0) * T::count(velocities.len()));
    }
}
