//! Common utilities used across the crate.

use rayon::prelude::*;

// =============================================================================
// Numeric Helpers
// =============================================================================

/// Bound applied to a margin before the logistic function.
///
/// `sigmoid(35)` already rounds to within one ulp of 1.0 in double
/// precision, and the exponential cannot overflow inside the bound.
pub const MARGIN_BOUND: f64 = 35.0;

/// Logistic function of a margin clamped to `[-MARGIN_BOUND, MARGIN_BOUND]`.
///
/// The result is strictly inside `(0, 1)` for every input, including
/// infinities. NaN propagates.
#[inline]
pub fn sigmoid(margin: f64) -> f64 {
    let t = margin.clamp(-MARGIN_BOUND, MARGIN_BOUND);
    1.0 / (1.0 + (-t).exp())
}

// =============================================================================
// Parallelism Configuration
// =============================================================================

/// Whether batch operations may run on the `rayon` thread pool.
///
/// Single predictions never spawn work; this only affects the `*_batch`
/// helpers of the scorers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Parallelism {
    #[default]
    Sequential,
    Parallel,
}

impl Parallelism {
    /// Create from thread count semantics.
    ///
    /// - 0 = auto (parallel if rayon pool has multiple threads, sequential otherwise)
    /// - 1 = sequential
    /// - >1 = parallel
    #[inline]
    pub fn from_threads(n_threads: usize) -> Self {
        if n_threads == 1 || (n_threads == 0 && rayon::current_num_threads() == 1) {
            Parallelism::Sequential
        } else {
            Parallelism::Parallel
        }
    }

    /// Returns `true` if parallel execution is allowed.
    #[inline]
    pub fn is_parallel(self) -> bool {
        matches!(self, Parallelism::Parallel)
    }

    /// Map every item, preserving input order.
    pub fn map_collect<T, R, F>(self, items: &[T], f: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync + Send,
    {
        if self.is_parallel() {
            items.par_iter().map(f).collect()
        } else {
            items.iter().map(f).collect()
        }
    }
}
