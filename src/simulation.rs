use rand::Rng;

use crate::{
    atomic::AtomicPotentialTrait,
    compute::{self, Thermo},
    error::Result,
    forces::ForceEvaluator,
    lattice::{self, Fcc, Lattice},
    parameters::Parameters,
    utils::Real,
    Atoms, Container, LJCut, Verlet,
};

/// The complete state of one simulation.
///
/// Owns the particle arrays, the box, the potential, the integrator and the
/// force evaluator with its scratch buffers. The particle count is fixed at
/// construction.
pub struct Simulation<T: Real> {
    pub atoms: Atoms<T>,
    container: Container<T>,
    atomic_potential: LJCut<T>,
    integrator: Verlet<T>,
    evaluator: ForceEvaluator<T>,
    forces: Vec<[T; 3]>,
    rho: T,
    thermo: Thermo<T>,
    initial_temperature: T,
    step: usize,
}
impl<T: Real> Simulation<T> {
    /// Create a new simulation: FCC crystal, thermalised velocities and the
    /// forces of the initial configuration.
    pub fn new<R: Rng + ?Sized>(params: &Parameters<T>, rng: &mut R) -> Result<Self> {
        params.validate()?;
        if !params.fills_lattice() {
            tracing::warn!(
                num_atoms = params.num_atoms,
                "Particle count is not 4·m³, the FCC lattice will be partially filled"
            );
        }

        let num_atoms = params.num_atoms;
        let container = Container::from_density(num_atoms, params.rho);
        let mut atoms = Atoms::new(num_atoms);
        lattice::init_pos(&mut atoms.positions, params.rho);
        let (temperature, kinetic_energy) = atoms.set_temperature(params.temperature, rng);

        let evaluator = ForceEvaluator::new(num_atoms, params.execution())?;
        tracing::info!(
            num_atoms,
            length = container.length().as_f64(),
            volume = container.volume().as_f64(),
            lattice_constant = Fcc::from_density(params.rho).cell_length().as_f64(),
            threads = evaluator.execution().num_threads(),
            "Created simulation"
        );

        let mut sim = Self {
            atoms,
            container,
            atomic_potential: LJCut::new(params.rcut),
            integrator: Verlet::new(params.timestep),
            evaluator,
            forces: vec![[T::zero(); 3]; num_atoms],
            rho: params.rho,
            thermo: Thermo {
                kinetic_energy,
                temperature,
                ..Default::default()
            },
            initial_temperature: temperature,
            step: 0,
        };
        sim.compute_forces();
        Ok(sim)
    }

    // Getters
    pub fn num_atoms(&self) -> usize {
        self.atoms.num_atoms()
    }
    pub fn container(&self) -> &Container<T> {
        &self.container
    }
    pub fn atomic_potential(&self) -> &LJCut<T> {
        &self.atomic_potential
    }
    pub fn integrator(&self) -> &Verlet<T> {
        &self.integrator
    }
    pub fn density(&self) -> T {
        self.rho
    }
    pub fn forces(&self) -> &[[T; 3]] {
        &self.forces
    }
    pub fn thermo(&self) -> &Thermo<T> {
        &self.thermo
    }
    /// Temperature reported by the velocity initializer, measured before
    /// momentum removal and rescaling
    pub fn initial_temperature(&self) -> T {
        self.initial_temperature
    }
    /// Number of integration steps taken so far
    pub fn step_count(&self) -> usize {
        self.step
    }
    /// Mutable velocities, for thermostats applied by the driver between steps
    pub fn velocities_mut(&mut self) -> &mut [[T; 3]] {
        &mut self.atoms.velocities
    }

    // Setters
    pub fn set_timestep(&mut self, timestep: T) {
        self.integrator = Verlet::new(timestep);
    }

    /// Change the density by scaling positions with the ratio of box lengths,
    /// then recompute the forces.
    pub fn set_density(&mut self, rho: T) {
        let old_length = self.container.length();
        self.container = Container::from_density(self.num_atoms(), rho);
        self.rho = rho;

        let ratio = self.container.length() / old_length;
        self.atoms
            .positions
            .iter_mut()
            .for_each(|p| p.iter_mut().for_each(|x| *x *= ratio));
        self.container.wrap_positions(&mut self.atoms.positions);
        if self.atomic_potential.cutoff_distance() >= self.container.max_cutoff() {
            tracing::warn!(
                rho = rho.as_f64(),
                length = self.container.length().as_f64(),
                "Cutoff exceeds half the box length, pairs may be missed"
            );
        }
        tracing::debug!(
            rho = rho.as_f64(),
            length = self.container.length().as_f64(),
            "Rescaled box"
        );
        self.compute_forces();
    }

    /// Scale all velocities so the instantaneous temperature equals `target`.
    /// Returns the applied factor.
    pub fn rescale_to(&mut self, target: T) -> T {
        let current = compute::temperature(self.atoms.velocities());
        let factor = (target / current).sqrt();
        self.atoms.scale_velocities(factor);
        self.thermo.set_kinetic(self.atoms.velocities());
        factor
    }

    /// Advance by one velocity-verlet step
    pub fn step(&mut self) -> &Thermo<T> {
        self.integrator.step(
            &mut self.atoms.positions,
            &mut self.atoms.velocities,
            &mut self.forces,
            &mut self.thermo,
            self.rho,
            &self.container,
            &mut self.evaluator,
            &self.atomic_potential,
        );
        self.step += 1;
        tracing::trace!(
            step = self.step,
            potential_energy = self.thermo.potential_energy.as_f64(),
            kinetic_energy = self.thermo.kinetic_energy.as_f64(),
            temperature = self.thermo.temperature.as_f64(),
            pressure = self.thermo.pressure.as_f64(),
            "Step"
        );
        &self.thermo
    }

    /// Advance by `num_steps` steps
    pub fn run(&mut self, num_steps: usize) -> &Thermo<T> {
        for _ in 0..num_steps {
            self.step();
        }
        &self.thermo
    }

    fn compute_forces(&mut self) {
        let summary = self.evaluator.evaluate(
            &self.atoms.positions,
            &mut self.forces,
            self.thermo.temperature,
            self.rho,
            self.container.volume(),
            self.container.length(),
            &self.atomic_potential,
        );
        self.thermo.potential_energy = summary.potential_energy;
        self.thermo.pressure = summary.pressure;
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::Error;

    fn small(threads: usize) -> Simulation<f64> {
        // L ≈ 5.13 leaves room for the 2.5 cutoff
        let params = Parameters::default()
            .with_num_atoms(108)
            .with_density(0.8)
            .with_threads(threads);
        let mut rng = StdRng::seed_from_u64(42);
        Simulation::new(&params, &mut rng).unwrap()
    }

    #[test]
    fn initial_state() {
        let sim = small(1);
        assert_eq!(sim.num_atoms(), 108);
        assert_eq!(sim.step_count(), 0);
        assert_relative_eq!(sim.container().length(), (108.0_f64 / 0.8).cbrt());
        assert_relative_eq!(compute::temperature(sim.atoms.velocities()), 2.0, max_relative = 3e-2);
        // reported value is that of the raw uniform draws
        assert!(sim.thermo().temperature < 0.2);
        assert_eq!(sim.initial_temperature(), sim.thermo().temperature);
        // perfect crystal: every particle is at a force balance
        for f in sim.forces() {
            for c in f {
                assert!(c.abs() < 1e-9);
            }
        }
        assert!(sim.thermo().potential_energy < 0.0);
    }

    #[test]
    fn step_refreshes_thermo() {
        let mut sim = small(1);
        let thermo = *sim.step();
        assert_eq!(sim.step_count(), 1);
        assert_relative_eq!(thermo.temperature, compute::temperature(sim.atoms.velocities()));
        assert_relative_eq!(thermo.kinetic_energy, compute::kinetic_energy(sim.atoms.velocities()));
        assert_relative_eq!(thermo.kinetic_energy, 1.5 * 108.0 * thermo.temperature, max_relative = 1e-12);
    }

    #[test]
    fn threaded_run_tracks_serial_run() {
        let mut serial = small(1);
        let mut threaded = small(3);
        serial.run(20);
        threaded.run(20);
        assert_relative_eq!(
            threaded.thermo().total_energy(),
            serial.thermo().total_energy(),
            max_relative = 1e-9
        );
    }

    #[test]
    fn rescale_hits_target() {
        let mut sim = small(1);
        sim.run(5);
        let factor = sim.rescale_to(1.0);
        assert!(factor > 0.0);
        assert_relative_eq!(sim.thermo().temperature, 1.0, max_relative = 1e-12);
        assert_relative_eq!(compute::temperature(sim.atoms.velocities()), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn density_change_rescales_positions() {
        let mut sim = small(1);
        sim.set_density(0.7);
        let length = sim.container().length();
        assert_relative_eq!(length, (108.0_f64 / 0.7).cbrt());
        assert_relative_eq!(sim.density(), 0.7);
        for p in sim.atoms.positions() {
            for &x in p {
                assert!(x >= 0.0 && x < length);
            }
        }
        // lattice constant follows the box
        assert_relative_eq!(
            sim.atoms.positions()[1][0],
            0.5 * (4.0_f64 / 0.7).cbrt(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn invalid_parameters_are_reported() {
        let params = Parameters::<f64>::default().with_density(-1.0);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            Simulation::new(&params, &mut rng),
            Err(Error::InvalidParameter { name: "rho", .. })
        ));
    }
}
