use crate::{
    container::Container,
    error::{Error, Result},
    lattice::{Fcc, Lattice},
    parallel::Execution,
    utils::Real,
};

/// Run parameters, owned by the driver and read-only to the kernel.
///
/// Defaults reproduce the classic argon-like setup in reduced units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parameters<T: Real> {
    /// Particle count; `4·m³` fills the FCC lattice exactly
    pub num_atoms: usize,
    /// Initial number density
    pub rho: T,
    /// Target temperature of the velocity initializer
    pub temperature: T,
    /// Cutoff radius of the pair potential
    pub rcut: T,
    pub timestep: T,
    /// Worker threads for force evaluation; 1 runs serially
    pub threads: usize,
}
impl<T: Real> Default for Parameters<T> {
    fn default() -> Self {
        Self {
            num_atoms: 256,
            rho: T::lit(1.2),
            temperature: T::lit(2.0),
            rcut: T::lit(2.5),
            timestep: T::lit(0.005),
            threads: 1,
        }
    }
}
impl<T: Real> Parameters<T> {
    pub fn with_num_atoms(mut self, num_atoms: usize) -> Self {
        self.num_atoms = num_atoms;
        self
    }
    pub fn with_density(mut self, rho: T) -> Self {
        self.rho = rho;
        self
    }
    pub fn with_temperature(mut self, temperature: T) -> Self {
        self.temperature = temperature;
        self
    }
    pub fn with_cutoff(mut self, rcut: T) -> Self {
        self.rcut = rcut;
        self
    }
    pub fn with_timestep(mut self, timestep: T) -> Self {
        self.timestep = timestep;
        self
    }
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn execution(&self) -> Execution {
        Execution::from_threads(self.threads)
    }

    /// Whether `num_atoms` is `4·m³` for some integer `m`
    pub fn fills_lattice(&self) -> bool {
        // cell count does not depend on the lattice constant
        let lattice = Fcc::new(T::one());
        let m = lattice.cells_for(self.num_atoms);
        lattice.basis_size() * m * m * m == self.num_atoms
    }

    /// Check the preconditions the kernel relies on
    pub fn validate(&self) -> Result<()> {
        fn invalid<T: Real>(name: &'static str, value: T, reason: &'static str) -> Error {
            Error::InvalidParameter {
                name,
                value: value.as_f64(),
                reason,
            }
        }

        if self.num_atoms == 0 {
            return Err(invalid("num_atoms", T::zero(), "at least one particle is required"));
        }
        if !(self.rho > T::zero() && self.rho.is_finite()) {
            return Err(invalid("rho", self.rho, "density must be positive"));
        }
        if !(self.temperature > T::zero() && self.temperature.is_finite()) {
            return Err(invalid("temperature", self.temperature, "temperature must be positive"));
        }
        if !(self.rcut > T::zero() && self.rcut.is_finite()) {
            return Err(invalid("rcut", self.rcut, "cutoff radius must be positive"));
        }
        if !(self.timestep >= T::zero() && self.timestep.is_finite()) {
            return Err(invalid("timestep", self.timestep, "timestep must not be negative"));
        }
        if self.threads == 0 {
            return Err(invalid("threads", T::zero(), "at least one worker thread is required"));
        }

        let container = Container::from_density(self.num_atoms, self.rho);
        if self.rcut >= container.max_cutoff() {
            return Err(Error::CutoffTooLarge {
                rcut: self.rcut.as_f64(),
                length: container.length().as_f64(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let params: Parameters<f64> = Parameters::default();
        assert!(params.validate().is_ok());
        assert!(params.fills_lattice());
        assert_eq!(params.execution(), Execution::Serial);
        assert_eq!(params.with_threads(4).execution(), Execution::Threads(4));
    }

    #[test]
    fn rejects_bad_values() {
        let params: Parameters<f32> = Parameters::default();
        assert!(matches!(
            params.with_density(0.0).validate(),
            Err(Error::InvalidParameter { name: "rho", .. })
        ));
        assert!(matches!(
            params.with_num_atoms(0).validate(),
            Err(Error::InvalidParameter { name: "num_atoms", .. })
        ));
        assert!(matches!(
            params.with_timestep(-0.1).validate(),
            Err(Error::InvalidParameter { name: "timestep", .. })
        ));
        assert!(matches!(
            params.with_threads(0).validate(),
            Err(Error::InvalidParameter { name: "threads", .. })
        ));
        assert!(params.with_timestep(0.0).validate().is_ok());
    }

    #[test]
    fn cutoff_must_fit_half_box() {
        // L = (32 / 1.2)^(1/3) ≈ 2.99
        let params: Parameters<f64> = Parameters::default().with_num_atoms(32);
        let err = params.validate().unwrap_err();
        assert!(matches!(err, Error::CutoffTooLarge { .. }));
        assert!(err.to_string().contains("half the box length"));

        assert!(params.with_cutoff(1.2).validate().is_ok());
    }

    #[test]
    fn lattice_fill() {
        let params: Parameters<f64> = Parameters::default();
        assert!(params.with_num_atoms(4).fills_lattice());
        assert!(params.with_num_atoms(108).fills_lattice());
        assert!(params.with_num_atoms(500).fills_lattice());
        assert!(!params.with_num_atoms(100).fills_lattice());
        assert!(!params.with_num_atoms(257).fills_lattice());
        // independent of the density the run starts at
        assert!(params.with_density(-1.0).with_num_atoms(32).fills_lattice());
    }
}
