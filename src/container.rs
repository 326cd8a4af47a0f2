use crate::utils::{self, Real};

/// Fully periodic cubic simulation box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Container<T: Real> {
    length: T,
}
impl<T: Real> Container<T> {
    // Creation

    /// Create a box with the given edge length
    pub fn new(length: T) -> Self {
        assert!(
            length > T::zero(),
            "Box length should be positive, found {}",
            length
        );
        Self { length }
    }
    /// Create the box holding `num_atoms` particles at number density `rho`
    pub fn from_density(num_atoms: usize, rho: T) -> Self {
        Self::new((T::count(num_atoms) / rho).cbrt())
    }

    // Getters
    pub fn length(&self) -> T {
        self.length
    }
    pub fn volume(&self) -> T {
        self.length * self.length * self.length
    }
    /// Number density of `num_atoms` particles in this box
    pub fn density(&self, num_atoms: usize) -> T {
        T::count(num_atoms) / self.volume()
    }
    /// Largest cutoff radius the single-image convention supports
    pub fn max_cutoff(&self) -> T {
        T::lit(0.5) * self.length
    }

    /// Wrap every coordinate of every position into `[0, L)`
    pub fn wrap_positions(&self, positions: &mut [[T; 3]]) {
        positions.iter_mut().for_each(|p| {
            p.iter_mut()
                .for_each(|x| *x = utils::wrap_into_box(*x, self.length))
        });
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn box_from_density() {
        let container = Container::from_density(256, 1.2_f64);
        assert_relative_eq!(container.length(), (256.0_f64 / 1.2).cbrt());
        assert_relative_eq!(container.volume(), 256.0 / 1.2, max_relative = 1e-12);
        assert_relative_eq!(container.density(256), 1.2, max_relative = 1e-12);
    }

    #[test]
    fn wraps_all_coordinates() {
        let container = Container::new(4.0_f64);
        let mut positions = vec![[-1.0, 4.5, 2.0], [8.25, -0.25, 0.0]];
        container.wrap_positions(&mut positions);
        assert_eq!(positions, vec![[3.0, 0.5, 2.0], [0.25, 3.75, 0.0]]);
    }

    #[test]
    #[should_panic]
    fn rejects_non_positive_length() {
        Container::new(0.0_f32);
    }
}
