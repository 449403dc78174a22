//! Sequence chunking
//!
//! Chunk sizes are validated when the iterator is built, so an invalid size
//! fails before any chunk is produced.

use std::num::NonZeroUsize;

use crate::error::{HelperError, Result};

/// A validated, strictly positive chunk size
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChunkSize(NonZeroUsize);

impl ChunkSize {
    /// Create a chunk size, rejecting zero
    pub fn new(size: usize) -> Result<Self> {
        NonZeroUsize::new(size)
            .map(ChunkSize)
            .ok_or(HelperError::InvalidChunkSize(0))
    }

    /// Number of elements per chunk
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl From<NonZeroUsize> for ChunkSize {
    fn from(size: NonZeroUsize) -> Self {
        ChunkSize(size)
    }
}

macro_rules! chunk_size_from_signed {
    ($($t:ty),*) => {$(
        impl TryFrom<$t> for ChunkSize {
            type Error = HelperError;

            fn try_from(size: $t) -> Result<Self> {
                if size <= 0 {
                    return Err(HelperError::InvalidChunkSize(size as i128));
                }
                // Sizes beyond the address space behave like "everything in one chunk".
                ChunkSize::new(usize::try_from(size).unwrap_or(usize::MAX))
            }
        }
    )*};
}

macro_rules! chunk_size_from_unsigned {
    ($($t:ty),*) => {$(
        impl TryFrom<$t> for ChunkSize {
            type Error = HelperError;

            fn try_from(size: $t) -> Result<Self> {
                ChunkSize::new(usize::try_from(size).unwrap_or(usize::MAX))
            }
        }
    )*};
}

chunk_size_from_signed!(i8, i16, i32, i64, i128, isize);
chunk_size_from_unsigned!(u8, u16, u32, u64, u128, usize);

/// Split a slice into consecutive chunks of `size` elements.
///
/// The last chunk holds the remainder and may be shorter. An empty slice
/// yields no chunks.
///
/// # Errors
///
/// Returns [`HelperError::InvalidChunkSize`] if `size` is zero or negative.
pub fn chunks<T, S>(items: &[T], size: S) -> Result<std::slice::Chunks<'_, T>>
where
    S: TryInto<ChunkSize>,
    HelperError: From<S::Error>,
{
    let size = size.try_into()?;
    tracing::trace!(len = items.len(), size = size.get(), "chunking slice");
    Ok(items.chunks(size.get()))
}

/// Split any iterable into owned chunks of `size` elements.
///
/// The source is consumed lazily, one chunk at a time.
pub fn chunks_of<I, S>(items: I, size: S) -> Result<IterChunks<I::IntoIter>>
where
    I: IntoIterator,
    S: TryInto<ChunkSize>,
    HelperError: From<S::Error>,
{
    let size = size.try_into()?;
    Ok(IterChunks {
        iter: items.into_iter(),
        size: size.get(),
    })
}

/// Iterator returned by [`chunks_of`]
#[derive(Debug, Clone)]
pub struct IterChunks<I> {
    iter: I,
    size: usize,
}

impl<I: Iterator> Iterator for IterChunks<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk: Vec<I::Item> = self.iter.by_ref().take(self.size).collect();
        if chunk.is_empty() {
            None
        } else {
            Some(chunk)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        (
            lower.div_ceil(self.size),
            upper.map(|upper| upper.div_ceil(self.size)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_chunks_rejects_non_positive_sizes() {
        let err = chunks(&[1, 2, 3], 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err = chunks(&[1, 2, 3], -3).unwrap_err();
        assert_eq!(err, HelperError::InvalidChunkSize(-3));
    }

    #[test]
    fn test_chunks_basic() {
        let empty: [i32; 0] = [];
        assert_eq!(chunks(&empty, 5).unwrap().count(), 0);

        let single: Vec<&[i32]> = chunks(&[1], 1).unwrap().collect();
        assert_eq!(single, vec![&[1][..]]);

        let split: Vec<&[i32]> = chunks(&[1, 2, 3], 2).unwrap().collect();
        assert_eq!(split, vec![&[1, 2][..], &[3][..]]);
    }

    #[test]
    fn test_chunks_accepts_chunk_size() {
        let size = ChunkSize::new(2).unwrap();
        assert_eq!(chunks(&[1, 2, 3, 4], size).unwrap().count(), 2);
    }

    #[test]
    fn test_chunks_accepts_non_zero_usize() {
        let size = NonZeroUsize::new(3).unwrap();
        assert_eq!(ChunkSize::from(size).get(), 3);

        let split: Vec<&[i32]> = chunks(&[1, 2, 3, 4], size).unwrap().collect();
        assert_eq!(split, vec![&[1, 2, 3][..], &[4][..]]);
    }

    #[test]
    fn test_chunk_size_conversions() {
        assert_eq!(ChunkSize::try_from(3u8).unwrap().get(), 3);
        assert_eq!(ChunkSize::try_from(7i64).unwrap().get(), 7);
        assert!(ChunkSize::try_from(0usize).is_err());
        assert_eq!(
            ChunkSize::try_from(i64::MIN).unwrap_err(),
            HelperError::InvalidChunkSize(i64::MIN as i128)
        );
        assert_eq!(ChunkSize::try_from(u128::MAX).unwrap().get(), usize::MAX);
    }

    #[test]
    fn test_chunks_of_iterator() {
        let chunked: Vec<Vec<u32>> = chunks_of(1..=7u32, 3).unwrap().collect();
        assert_eq!(chunked, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);

        assert!(chunks_of(Vec::<u8>::new(), 4).unwrap().next().is_none());
        assert!(chunks_of(vec![1, 2], 0).is_err());
    }

    #[test]
    fn test_chunks_of_is_lazy() {
        let mut pulled = 0;
        let source = (0..).inspect(|_| pulled += 1);
        let first = chunks_of(source, 4).unwrap().next().unwrap();
        assert_eq!(first, vec![0, 1, 2, 3]);
        assert_eq!(pulled, 4);
    }

    #[test]
    fn test_chunks_of_size_hint() {
        let iter = chunks_of(0..10, 4).unwrap();
        assert_eq!(iter.size_hint(), (3, Some(3)));
    }
}
