pub mod atomic;
pub mod atoms;
pub mod compute;
pub mod container;
pub mod error;
pub mod forces;
pub mod integrators;
pub mod lattice;
pub mod parallel;
pub mod parameters;
pub mod prelude;
pub mod simulation;
pub mod utils;

pub use atomic::*;
pub use atoms::{init_vel, Atoms};
pub use compute::Thermo;
pub use container::Container;
pub use error::{Error, Result};
pub use forces::{forces, ForceEvaluator, ForceSummary};
pub use integrators::*;
pub use lattice::init_pos;
pub use parallel::Execution;
pub use parameters::Parameters;
pub use simulation::Simulation;
