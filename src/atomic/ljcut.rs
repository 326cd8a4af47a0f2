use super::AtomicPotentialTrait;
use crate::utils::Real;

/// Lennard-Jones 12-6 potential in reduced units, truncated at `rcut` and
/// shifted so the energy vanishes there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LJCut<T: Real> {
    rcut: T,
    rcut2: T,
    ecut: T, // = 4 (rcut^-12 - rcut^-6)
}
impl<T: Real> LJCut<T> {
    pub fn new(rcut: T) -> Self {
        assert!(
            rcut > T::zero(),
            "Cutoff radius should be positive, found {}",
            rcut
        );
        let four = T::lit(4.0);
        Self {
            rcut,
            rcut2: rcut * rcut,
            ecut: four * (rcut.powi(-12) - rcut.powi(-6)),
        }
    }
    pub fn rcut(&self) -> T {
        self.rcut
    }
    pub fn rcut2(&self) -> T {
        self.rcut2
    }
    /// Energy shift applied to every interacting pair
    pub fn ecut(&self) -> T {
        self.ecut
    }
}

impl<T: Real> AtomicPotentialTrait<T> for LJCut<T> {
    fn cutoff_distance(&self) -> T {
        self.rcut
    }

    #[inline]
    fn pair(&self, r2: T) -> Option<(T, T)> {
        if r2 > self.rcut2 {
            return None;
        }
        // U(r) = 4 (r^-12 - r^-6) - ECUT
        // f(r) / r = 24 r^-8 (2 r^-6 - 1), so F_i = f * (r_i - r_j)
        let r2inv = T::one() / r2;
        let r6inv = r2inv * r2inv * r2inv;
        let f = T::lit(24.0) * r2inv * r6inv * (T::lit(2.0) * r6inv - T::one());
        let energy = T::lit(4.0) * r6inv * (r6inv - T::one()) - self.ecut;
        Some((f, energy))
    }
}
