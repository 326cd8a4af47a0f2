use rayon::prelude::*;

use super::Execution;
use crate::{
    atomic::AtomicPotentialTrait,
    error::{Error, Result},
    utils::{self, Real},
};

/// Running totals of one pass over a set of pairs
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PairSums<T: Real> {
    pub potential_energy: T,
    pub virial: T,
}
impl<T: Real> PairSums<T> {
    fn add(&mut self, other: &Self) {
        self.potential_energy += other.potential_energy;
        self.virial += other.virial;
    }
}

/// Accumulate every pair `(i, j)` with `j > i` into `forces` and `sums`.
#[inline]
pub(crate) fn accumulate_row<T, A>(
    i: usize,
    positions: &[[T; 3]],
    length: T,
    potential: &A,
    forces: &mut [[T; 3]],
    sums: &mut PairSums<T>,
) where
    T: Real,
    A: AtomicPotentialTrait<T>,
{
    let posi = positions[i];
    for j in i + 1..positions.len() {
        let (d, r2) = utils::displacement(&posi, &positions[j], length);
        let Some((f, energy)) = potential.pair(r2) else {
            continue;
        };

        for axis in 0..3 {
            let fd = f * d[axis];
            forces[i][axis] += fd;
            forces[j][axis] -= fd;
        }
        sums.potential_energy += energy;
        sums.virial += f * r2;
    }
}

/// Private accumulation space for one worker thread
#[derive(Debug)]
struct WorkerBuffer<T: Real> {
    forces: Vec<[T; 3]>,
    sums: PairSums<T>,
}
impl<T: Real> WorkerBuffer<T> {
    fn new(num_atoms: usize) -> Self {
        Self {
            forces: vec![[T::zero(); 3]; num_atoms],
            sums: PairSums::default(),
        }
    }
    fn reset(&mut self) {
        self.forces.fill([T::zero(); 3]);
        self.sums = PairSums::default();
    }
}

/// Fixed pool of force workers.
///
/// Each worker scatters its share of rows into its own full-length force
/// buffer; [`WorkerPool::evaluate`] then reduces the buffers sequentially, in
/// worker order, into the shared force array. No locks are taken.
pub struct WorkerPool<T: Real> {
    pool: rayon::ThreadPool,
    buffers: Vec<WorkerBuffer<T>>,
}
impl<T: Real> WorkerPool<T> {
    pub fn new(num_atoms: usize, num_threads: usize) -> Result<Self> {
        if num_threads == 0 {
            return Err(Error::InvalidParameter {
                name: "threads",
                value: 0.0,
                reason: "at least one worker thread is required",
            });
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|idx| format!("force-worker-{idx}"))
            .build()?;
        let buffers = (0..num_threads)
            .map(|_| WorkerBuffer::new(num_atoms))
            .collect();
        tracing::debug!(num_threads, num_atoms, "Built force worker pool");
        Ok(Self { pool, buffers })
    }
    pub fn num_threads(&self) -> usize {
        self.buffers.len()
    }
    pub fn execution(&self) -> Execution {
        Execution::Threads(self.num_threads())
    }

    /// Overwrite `forces` with the pair forces of `positions` and return the
    /// summed energy and virial.
    pub fn evaluate<A>(
        &mut self,
        positions: &[[T; 3]],
        length: T,
        potential: &A,
        forces: &mut [[T; 3]],
    ) -> PairSums<T>
    where
        A: AtomicPotentialTrait<T>,
    {
        let num_atoms = positions.len();
        let stride = self.buffers.len();
        for buffer in self.buffers.iter_mut() {
            if buffer.forces.len() != num_atoms {
                buffer.forces.resize(num_atoms, [T::zero(); 3]);
            }
        }

        // Scatter: rows dealt cyclically so each worker gets a mix of long and short rows
        let buffers = &mut self.buffers;
        self.pool.install(|| {
            buffers
                .par_iter_mut()
                .enumerate()
                .for_each(|(worker, buffer)| {
                    buffer.reset();
                    for i in (worker..num_atoms.saturating_sub(1)).step_by(stride) {
                        accumulate_row(
                            i,
                            positions,
                            length,
                            potential,
                            &mut buffer.forces,
                            &mut buffer.sums,
                        );
                    }
                });
        });

        // Reduce
        forces.fill([T::zero(); 3]);
        let mut sums = PairSums::default();
        for buffer in self.buffers.iter() {
            for (f, partial) in forces.iter_mut().zip(buffer.forces.iter()) {
                f[0] += partial[0];
                f[1] += partial[1];
                f[2] += partial[2];
            }
            sums.add(&buffer.sums);
        }
        sums
    }
}
