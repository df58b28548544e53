use rayon::prelude::*;

/// Controls how row-wise operations are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Use the global Rayon thread pool to process rows in parallel.
    #[default]
    ParallelRows,

    /// Run sequentially on the current thread.
    ///
    /// Useful for small images, debugging, or when the overhead of parallelization
    /// outweighs the benefits.
    Serial,
}

/// Apply a function to every row of a destination buffer.
///
/// The closure receives the row index and the mutable samples of that row.
/// Rows are disjoint, so no synchronization is needed beyond the final join.
///
/// # Arguments
///
/// * `dst` - The destination samples, a whole number of rows.
/// * `row_stride` - The number of samples in one row (width * channels).
/// * `strategy` - The execution strategy.
/// * `f` - The operation to perform on each row.
pub fn for_each_row_mut<F>(dst: &mut [u8], row_stride: usize, strategy: ExecutionStrategy, f: F)
where
    F: Fn(usize, &mut [u8]) + Send + Sync,
{
    debug_assert!(row_stride > 0 && dst.len() % row_stride == 0);

    match strategy {
        ExecutionStrategy::Serial => {
            dst.chunks_exact_mut(row_stride)
                .enumerate()
                .for_each(|(y, row)| f(y, row));
        }
        ExecutionStrategy::ParallelRows => {
            dst.par_chunks_exact_mut(row_stride)
                .enumerate()
                .for_each(|(y, row)| f(y, row));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_rows(strategy: ExecutionStrategy) -> Vec<u8> {
        let mut dst = vec![0u8; 12];
        for_each_row_mut(&mut dst, 4, strategy, |y, row| {
            row.iter_mut()
                .enumerate()
                .for_each(|(x, v)| *v = (y * 10 + x) as u8);
        });
        dst
    }

    #[test]
    fn test_rows_serial() {
        assert_eq!(
            fill_rows(ExecutionStrategy::Serial),
            vec![0, 1, 2, 3, 10, 11, 12, 13, 20, 21, 22, 23]
        );
    }

    #[test]
    fn test_rows_parallel() {
        assert_eq!(
            fill_rows(ExecutionStrategy::ParallelRows),
            fill_rows(ExecutionStrategy::Serial)
        );
    }
}
