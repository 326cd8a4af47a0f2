use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::utils::Real;

/// Particle positions and velocities during a simulation, not including forces
#[derive(Clone, Debug)]
pub struct Atoms<T: Real> {
    pub positions: Vec<[T; 3]>,
    pub velocities: Vec<[T; 3]>,
}
impl<T: Real> Atoms<T> {
    /// `num_atoms` particles at rest at the origin
    pub fn new(num_atoms: usize) -> Self {
        Atoms {
            positions: vec![[T::zero(); 3]; num_atoms],
            velocities: vec![[T::zero(); 3]; num_atoms],
        }
    }
    pub fn num_atoms(&self) -> usize {
        self.positions.len()
    }
    pub fn positions(&self) -> &[[T; 3]] {
        &self.positions
    }
    pub fn velocities(&self) -> &[[T; 3]] {
        &self.velocities
    }
    /// Mean velocity over all particles
    pub fn mean_velocity(&self) -> [T; 3] {
        let n = T::count(self.num_atoms());
        let mut sum = [T::zero(); 3];
        for v in &self.velocities {
            sum[0] += v[0];
            sum[1] += v[1];
            sum[2] += v[2];
        }
        [sum[0] / n, sum[1] / n, sum[2] / n]
    }
    /// Draw thermalised velocities; see [`init_vel`]
    pub fn set_temperature<R: Rng + ?Sized>(&mut self, temperature: T, rng: &mut R) -> (T, T) {
        init_vel(&mut self.velocities, temperature, rng)
    }
    /// Multiply every velocity component by `factor`
    pub fn scale_velocities(&mut self, factor: T) {
        self.velocities
            .iter_mut()
            .for_each(|v| v.iter_mut().for_each(|c| *c *= factor));
    }
}

/// Assign random velocities with zero net momentum at temperature `t0`.
///
/// Components are drawn from `U[-0.5, 0.5)` particle by particle in x, y, z
/// order. The centre-of-mass velocity is removed and every component is
/// scaled by `sqrt(t0 / T_raw)`, where `T_raw = Σv²/(3N)` is measured on the
/// raw draws.
///
/// Returns `(T_raw, ½Σv²)` of the raw draws, not of the rescaled velocities.
/// Callers that print the initial temperature rely on this value.
pub fn init_vel<T: Real, R: Rng + ?Sized>(velocities: &mut [[T; 3]], t0: T, rng: &mut R) -> (T, T) {
    let n = T::count(velocities.len());
    let dist = Uniform::new(T::lit(-0.5), T::lit(0.5));

    let mut sumv = [T::zero(); 3];
    let mut sumv2 = T::zero();
    for v in velocities.iter_mut() {
        for (c, s) in v.iter_mut().zip(sumv.iter_mut()) {
            *c = dist.sample(rng);
            *s += *c;
            sumv2 += *c * *c;
        }
    }
    let mean = [sumv[0] / n, sumv[1] / n, sumv[2] / n];

    let temperature = sumv2 / (T::lit(3.0) * n);
    let kinetic_energy = T::lit(0.5) * sumv2;
    let sf = (t0 / temperature).sqrt();

    for v in velocities.iter_mut() {
        for (c, m) in v.iter_mut().zip(mean.iter()) {
            *c = sf * (*c - *m);
        }
    }

    (temperature, kinetic_energy)
}
