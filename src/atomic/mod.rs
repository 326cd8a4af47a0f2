pub mod ljcut;

pub use ljcut::LJCut;

use crate::utils::Real;

/// Trait for pairwise atomic potentials
pub trait AtomicPotentialTrait<T: Real>: Send + Sync {
    /// Get the maximum distance for effective interaction
    fn cutoff_distance(&self) -> T;

    /// Interaction of one pair at squared separation `r2`.
    ///
    /// Returns `(f, u)` where `f·d` is the force on the first particle for a
    /// displacement `d = r_i - r_j` and `u` is the pair energy, or `None`
    /// when the pair lies beyond the cutoff.
    fn pair(&self, r2: T) -> Option<(T, T)>;
}
