pub use super::atomic::{AtomicPotentialTrait, LJCut};
pub use super::compute::Thermo;
pub use super::container::Container;
pub use super::lattice::{Fcc, Lattice};
pub use super::parallel::Execution;
pub use super::parameters::Parameters;
pub use super::simulation::Simulation;
pub use super::utils::Real;
