//! Karmarkar-Karp differencing.

use tracing::debug;

use super::heap::MaxHeap;
use crate::partition::Instance;

/// Executes the Karmarkar-Karp differencing heuristic.
pub struct KkRunner;

impl KkRunner {
    /// Returns the residue reached by repeatedly replacing the two
    /// largest remaining values with their difference.
    ///
    /// Values are inserted as magnitudes in instance order, so the result
    /// is deterministic for a given instance.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_partition::kk::KkRunner;
    /// use u_partition::partition::Instance;
    ///
    /// let instance = Instance::new(vec![10, 8, 7, 6, 5]).unwrap();
    /// assert_eq!(KkRunner::run(&instance), 2);
    /// ```
    pub fn run(instance: &Instance) -> u64 {
        let mut heap = MaxHeap::with_capacity(instance.len());
        for &value in instance.values() {
            heap.insert(value.unsigned_abs()).expect("heap sized to instance");
        }

        let mut steps = 0usize;
        while heap.len() >= 2 {
            let a = heap.delete_max();
            let b = heap.delete_max();
            heap.insert(a.abs_diff(b)).expect("two removed before one inserted");
            steps += 1;
        }

        let residue = heap.delete_max();
        debug!(algorithm = "karmarkar-karp", steps, residue, "run complete");
        residue
    }
}
