use thiserror::Error;

/// Errors raised while setting up a simulation.
///
/// The numerical kernel itself never fails; these cover configuration only.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Cutoff radius {rcut} must be below half the box length {length}")]
    CutoffTooLarge { rcut: f64, length: f64 },

    #[error("Failed to build force worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, Error>;
