use crate::{
    atomic::AtomicPotentialTrait, compute::Thermo, forces::ForceEvaluator, utils::Real, Container,
};

/// Velocity-verlet integrator for unit-mass particles
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Verlet<T: Real> {
    timestep: T,
}

impl<T: Real> Verlet<T> {
    pub fn new(timestep: T) -> Self {
        assert!(
            timestep >= T::zero(),
            "Timestep should not be negative, found {}",
            timestep,
        );
        Self { timestep }
    }
    pub fn timestep(&self) -> T {
        self.timestep
    }

    /// Steps the velocities by half a timestep
    fn increment_velocity_halfstep(&self, velocities: &mut [[T; 3]], forces: &[[T; 3]]) {
        let half_ts = T::lit(0.5) * self.timestep;
        for (v, f) in velocities.iter_mut().zip(forces.iter()) {
            v[0] += f[0] * half_ts;
            v[1] += f[1] * half_ts;
            v[2] += f[2] * half_ts;
        }
    }
    /// Steps the positions forward and wraps them back into the box
    fn increment_positions(
        &self,
        positions: &mut [[T; 3]],
        velocities: &[[T; 3]],
        container: &Container<T>,
    ) {
        let ts = self.timestep;
        for (p, v) in positions.iter_mut().zip(velocities.iter()) {
            p[0] += v[0] * ts;
            p[1] += v[1] * ts;
            p[2] += v[2] * ts;
        }
        container.wrap_positions(positions);
    }

    /// Advance the state by one timestep.
    ///
    /// `forces` must hold the forces of the current positions on entry; on
    /// return it holds those of the new positions. Exactly one force
    /// evaluation is made. The pressure is computed with the temperature
    /// found in `thermo` on entry, then kinetic energy and temperature are
    /// refreshed from the final velocities.
    #[allow(clippy::too_many_arguments)]
    pub fn step<A>(
        &self,
        positions: &mut [[T; 3]],
        velocities: &mut [[T; 3]],
        forces: &mut [[T; 3]],
        thermo: &mut Thermo<T>,
        rho: T,
        container: &Container<T>,
        evaluator: &mut ForceEvaluator<T>,
        potential: &A,
    ) where
        A: AtomicPotentialTrait<T>,
    {
        self.increment_velocity_halfstep(velocities, forces);
        self.increment_positions(positions, velocities, container);

        let summary = evaluator.evaluate(
            positions,
            forces,
            thermo.temperature,
            rho,
            container.volume(),
            container.length(),
            potential,
        );
        thermo.potential_energy = summary.potential_energy;
        thermo.pressure = summary.pressure;

        self.increment_velocity_halfstep(velocities, forces);
        thermo.set_kinetic(velocities);
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::{forces, LJCut};

    struct Pair {
        positions: Vec<[f64; 3]>,
        velocities: Vec<[f64; 3]>,
        forces: Vec<[f64; 3]>,
        thermo: Thermo<f64>,
        container: Container<f64>,
        lj: LJCut<f64>,
    }
    impl Pair {
        fn new() -> Self {
            let container = Container::new(8.0);
            let lj = LJCut::new(2.5);
            let positions = vec![[3.0, 4.0, 4.0], [4.2, 4.0, 4.0]];
            let velocities = vec![[0.3, -0.1, 0.0], [-0.3, 0.1, 0.0]];
            let mut forces = vec![[0.0; 3]; 2];
            let mut thermo = Thermo::default();
            thermo.set_kinetic(&velocities);
            let summary = forces::forces(
                &positions,
                &mut forces,
                thermo.temperature,
                0.1,
                container.volume(),
                container.length(),
                &lj,
            );
            thermo.potential_energy = summary.potential_energy;
            Self {
                positions,
                velocities,
                forces,
                thermo,
                container,
                lj,
            }
        }
        fn step(&mut self, verlet: &Verlet<f64>) {
            let mut evaluator = ForceEvaluator::serial();
            verlet.step(
                &mut self.positions,
                &mut self.velocities,
                &mut self.forces,
                &mut self.thermo,
                0.1,
                &self.container,
                &mut evaluator,
                &self.lj,
            );
        }
    }

    #[test]
    fn zero_timestep_leaves_state_unchanged() {
        let mut pair = Pair::new();
        let (positions, velocities) = (pair.positions.clone(), pair.velocities.clone());
        pair.step(&Verlet::new(0.0));
        assert_eq!(pair.positions, positions);
        assert_eq!(pair.velocities, velocities);
    }

    #[test]
    fn positions_stay_in_box() {
        let mut pair = Pair::new();
        pair.velocities = vec![[-40.0, 0.0, 90.0], [40.0, 0.0, -90.0]];
        pair.step(&Verlet::new(0.05));
        for p in &pair.positions {
            for &x in p {
                assert!((0.0..8.0).contains(&x));
            }
        }
    }

    #[test]
    fn pair_conserves_energy_and_momentum() {
        let mut pair = Pair::new();
        let verlet = Verlet::new(0.001);
        let e0 = pair.thermo.total_energy();
        for _ in 0..2000 {
            pair.step(&verlet);
        }
        assert_relative_eq!(pair.thermo.total_energy(), e0, max_relative = 1e-4);
        for axis in 0..3 {
            let p = pair.velocities[0][axis] + pair.velocities[1][axis];
            assert!(p.abs() < 1e-12);
        }
    }

    #[test]
    fn pressure_uses_entry_temperature() {
        let mut pair = Pair::new();
        let t_entry = pair.thermo.temperature;
        pair.step(&Verlet::new(0.002));

        let mut f = vec![[0.0; 3]; 2];
        let expected = forces::forces(
            &pair.positions,
            &mut f,
            t_entry,
            0.1,
            pair.container.volume(),
            pair.container.length(),
            &pair.lj,
        );
        assert_relative_eq!(pair.thermo.pressure, expected.pressure, max_relative = 1e-12);
        assert_eq!(f, pair.forces);
    }

    #[test]
    #[should_panic]
    fn rejects_negative_timestep() {
        Verlet::new(-0.001_f64);
    }
}
