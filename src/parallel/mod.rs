mod worker;

pub use worker::{PairSums, WorkerPool};

pub(crate) use worker::accumulate_row;

/// How the pair loop of a force evaluation is executed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Execution {
    /// One thread walks every pair
    #[default]
    Serial,
    /// Rows are shared among a fixed pool of this many worker threads
    Threads(usize),
}
impl Execution {
    /// Serial for a single thread, a worker pool otherwise
    pub fn from_threads(num_threads: usize) -> Self {
        if num_threads == 1 {
            Execution::Serial
        } else {
            Execution::Threads(num_threads)
        }
    }
    pub fn num_threads(&self) -> usize {
        match self {
            Execution::Serial => 1,
            Execution::Threads(n) => *n,
        }
    }
}
