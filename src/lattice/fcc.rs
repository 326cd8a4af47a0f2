use super::Lattice;
use crate::utils::Real;

/// Face-centred cubic lattice, four basis points per unit cell
#[derive(Debug)]
pub struct Fcc<T: Real> {
    a: T,
}
impl<T: Real> Fcc<T> {
    pub fn new(a: T) -> Self {
        let s = Self { a };
        s.assert_positive();
        s
    }
    /// Lattice constant `a = (4/rho)^(1/3)` for a number density `rho`
    pub fn from_density(rho: T) -> Self {
        let s = Self {
            a: (T::lit(4.0) / rho).cbrt(),
        };
        s.assert_positive();
        s
    }
    fn assert_positive(&self) {
        assert!(
            self.a > T::zero(),
            "Lattice constant should be positive, found {}",
            self.a
        );
    }
}
impl<T: Real> Lattice<T> for Fcc<T> {
    fn cell_length(&self) -> T {
        self.a
    }
    fn basis_size(&self) -> usize {
        4
    }
    fn coords(&self, cells: usize) -> Vec<[T; 3]> {
        let a = self.a;
        let half = T::lit(0.5);
        let mut coords: Vec<[T; 3]> = Vec::with_capacity(4 * cells * cells * cells);

        for i in 0..cells {
            let x = T::count(i);
            for j in 0..cells {
                let y = T::count(j);
                for k in 0..cells {
                    let z = T::count(k);
                    coords.push([x * a, y * a, z * a]);
                    coords.push([(x + half) * a, (y + half) * a, z * a]);
                    coords.push([(x + half) * a, y * a, (z + half) * a]);
                    coords.push([x * a, (y + half) * a, (z + half) * a]);
                }
            }
        }
        coords
    }
}

/// Fill `positions` with an FCC crystal at density `rho`.
///
/// The lattice holds `4·m³` sites with `m = ceil((N/4)^(1/3))`; the first
/// `N = positions.len()` of them are kept.
pub fn init_pos<T: Real>(positions: &mut [[T; 3]], rho: T) {
    let lattice = Fcc::from_density(rho);
    let cells = lattice.cells_for(positions.len());
    let coords = lattice.coords(cells);
    positions
        .iter_mut()
        .zip(coords)
        .for_each(|(p, coord)| *p = coord);
}
