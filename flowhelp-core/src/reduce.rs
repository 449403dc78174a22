//! Chunked reduction

use crate::chunk::ChunkSize;

/// Fold `f` over `items` one chunk at a time, left to right.
///
/// `f` receives the running accumulator and the next chunk. With no chunk
/// size the whole slice is a single chunk, so `f` runs exactly once. An empty
/// slice returns `initial` without calling `f`.
///
/// ```
/// use flowhelp_core::{reduce_in_chunks, ChunkSize};
///
/// let sum_of_products = reduce_in_chunks(
///     |acc: i32, pair: &[i32]| acc + pair[0] * pair[1],
///     &[1, 2, 3, 4],
///     0,
///     Some(ChunkSize::new(2)?),
/// );
/// assert_eq!(sum_of_products, 14);
/// # Ok::<(), flowhelp_core::HelperError>(())
/// ```
pub fn reduce_in_chunks<T, A, F>(f: F, items: &[T], initial: A, chunk_size: Option<ChunkSize>) -> A
where
    F: FnMut(A, &[T]) -> A,
{
    if items.is_empty() {
        return initial;
    }
    let size = chunk_size.map_or(items.len(), ChunkSize::get);
    tracing::trace!(len = items.len(), size, "reducing in chunks");
    items.chunks(size).fold(initial, f)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_chunks(mut acc: Vec<Vec<i32>>, chunk: &[i32]) -> Vec<Vec<i32>> {
        acc.push(chunk.to_vec());
        acc
    }

    #[test]
    fn test_reduce_without_chunk_size() {
        let result = reduce_in_chunks(collect_chunks, &[1, 2, 3, 4, 5], Vec::new(), None);
        assert_eq!(result, vec![vec![1, 2, 3, 4, 5]]);
    }

    #[test]
    fn test_reduce_with_chunk_size() {
        let size = ChunkSize::new(2).unwrap();
        let result = reduce_in_chunks(collect_chunks, &[1, 2, 3, 4, 5], Vec::new(), Some(size));
        assert_eq!(result, vec![vec![1, 2], vec![3, 4], vec![5]]);
    }

    #[test]
    fn test_reduce_threads_accumulator() {
        let size = ChunkSize::new(2).unwrap();
        let result = reduce_in_chunks(|acc: i32, c: &[i32]| acc + c[0] * c[1], &[1, 2, 3, 4], 0, Some(size));
        assert_eq!(result, 14);
    }

    #[test]
    fn test_reduce_empty_returns_initial() {
        let mut calls = 0;
        let result = reduce_in_chunks(
            |acc: i32, _: &[i32]| {
                calls += 1;
                acc
            },
            &[],
            42,
            None,
        );
        assert_eq!(result, 42);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_oversized_chunk_is_single_chunk() {
        let size = ChunkSize::new(100).unwrap();
        let result = reduce_in_chunks(collect_chunks, &[1, 2, 3], Vec::new(), Some(size));
        assert_eq!(result, vec![vec![1, 2, 3]]);
    }
}
