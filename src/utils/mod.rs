/// Periodic-boundary geometry
pub mod computations;
mod types;

pub use computations::*;
pub use types::{Real, Vec3};
