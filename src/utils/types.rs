use std::{
    fmt::{Debug, Display},
    iter::Sum,
    ops::{AddAssign, MulAssign, SubAssign},
};

use num_traits::Float;
use rand::distributions::uniform::SampleUniform;

/// Floating-point precision the kernel is generic over (`f32` or `f64`).
pub trait Real:
    Float
    + AddAssign
    + SubAssign
    + MulAssign
    + Sum
    + SampleUniform
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + 'static
{
    /// Convert a double-precision literal into this precision.
    fn lit(value: f64) -> Self;

    /// Convert a particle or cell count into this precision.
    fn count(n: usize) -> Self;

    /// Widen to double precision, for reporting.
    fn as_f64(self) -> f64;
}

impl Real for f32 {
    #[inline]
    fn lit(value: f64) -> Self {
        value as f32
    }
    #[inline]
    fn count(n: usize) -> Self {
        n as f32
    }
    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }
}

impl Real for f64 {
    #[inline]
    fn lit(value: f64) -> Self {
        value
    }
    #[inline]
    fn count(n: usize) -> Self {
        n as f64
    }
    #[inline]
    fn as_f64(self) -> f64 {
        self
    }
}

/// A three-component vector, one per particle in the state arrays.
pub type Vec3<T> = [T; 3];
