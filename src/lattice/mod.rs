mod fcc;

pub use fcc::{init_pos, Fcc};

use crate::utils::Real;

/// A crystal lattice that can fill a cube of unit cells
pub trait Lattice<T: Real> {
    /// Edge length of the cubic unit cell
    fn cell_length(&self) -> T;
    /// Number of basis points in one unit cell
    fn basis_size(&self) -> usize;
    /// Positions of `cells`³ unit cells, cell by cell, with `i` outermost
    fn coords(&self, cells: usize) -> Vec<[T; 3]>;

    /// Smallest number of cells per axis holding at least `num_atoms` points,
    /// i.e. `ceil((N/basis)^(1/3))` without the rounding of a float cube root
    fn cells_for(&self, num_atoms: usize) -> usize {
        let mut cells = 0;
        while self.basis_size() * cells * cells * cells < num_atoms {
            cells += 1;
        }
        cells
    }
}
