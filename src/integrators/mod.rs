mod verlet;
pub use verlet::Verlet;
