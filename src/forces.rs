use crate::{
    atomic::AtomicPotentialTrait,
    error::Result,
    parallel::{self, Execution, PairSums, WorkerPool},
    utils::Real,
};

/// Scalars produced by one force evaluation
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ForceSummary<T: Real> {
    pub potential_energy: T,
    /// Sum of `f·r²` over interacting pairs
    pub virial: T,
    pub pressure: T,
}
impl<T: Real> ForceSummary<T> {
    /// Pressure `T·rho + W/(3V)` from the pair sums
    fn from_sums(sums: PairSums<T>, temperature: T, rho: T, volume: T) -> Self {
        Self {
            potential_energy: sums.potential_energy,
            virial: sums.virial,
            pressure: temperature * rho + sums.virial / (T::lit(3.0) * volume),
        }
    }
}

/// Compute pair forces, potential energy and pressure on one thread.
///
/// `forces` is overwritten; every unordered pair `i < j` within the cutoff of
/// `potential` contributes, using the minimum image in a cubic box of edge
/// `length`. The cutoff must be below `length / 2`.
pub fn forces<T, A>(
    positions: &[[T; 3]],
    forces: &mut [[T; 3]],
    temperature: T,
    rho: T,
    volume: T,
    length: T,
    potential: &A,
) -> ForceSummary<T>
where
    T: Real,
    A: AtomicPotentialTrait<T>,
{
    forces.fill([T::zero(); 3]);
    let mut sums = PairSums::default();
    for i in 0..positions.len().saturating_sub(1) {
        parallel::accumulate_row(i, positions, length, potential, forces, &mut sums);
    }
    ForceSummary::from_sums(sums, temperature, rho, volume)
}

/// Force evaluation with a swappable execution strategy.
///
/// Scratch space (the per-worker buffers of a threaded evaluator) is sized
/// once at construction and reused by every call.
pub struct ForceEvaluator<T: Real> {
    workers: Option<WorkerPool<T>>,
}
impl<T: Real> ForceEvaluator<T> {
    pub fn new(num_atoms: usize, execution: Execution) -> Result<Self> {
        let workers = match execution {
            Execution::Serial => None,
            Execution::Threads(n) => Some(WorkerPool::new(num_atoms, n)?),
        };
        Ok(Self { workers })
    }
    pub fn serial() -> Self {
        Self { workers: None }
    }
    pub fn execution(&self) -> Execution {
        match &self.workers {
            Some(pool) => pool.execution(),
            None => Execution::Serial,
        }
    }

    /// Same contract as [`forces()`]
    #[allow(clippy::too_many_arguments)]
    pub fn evaluate<A>(
        &mut self,
        positions: &[[T; 3]],
        forces: &mut [[T; 3]],
        temperature: T,
        rho: T,
        volume: T,
        length: T,
        potential: &A,
    ) -> ForceSummary<T>
    where
        A: AtomicPotentialTrait<T>,
    {
        match self.workers.as_mut() {
            None => self::forces(positions, forces, temperature, rho, volume, length, potential),
            Some(pool) => {
                let sums = pool.evaluate(positions, length, potential, forces);
                ForceSummary::from_sums(sums, temperature, rho, volume)
            }
        }
    }
}
