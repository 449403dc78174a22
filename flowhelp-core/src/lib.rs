//! flowhelp core - Stateless helpers for workflow orchestration
//!
//! This crate provides small, pure utilities shared by orchestration code,
//! with no I/O and no shared state. It includes:
//!
//! - Sequence chunking (slices and arbitrary iterators)
//! - Chunked reduction
//! - Container classification and tuple normalization
//! - Camel-case to snake-case conversion
//! - Recursive right-biased mapping merge
//! - Key and group key validation
//! - Flattening, partitioning, cardinality checks and pruning
//! - Error types
//! - Key length limits

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod case;
pub mod chunk;
pub mod collections;
pub mod container;
pub mod error;
pub mod key;
pub mod limits;
pub mod merge;
pub mod reduce;
pub mod types;

// Re-export commonly used types
pub use case::convert_camel_to_snake;
pub use chunk::{chunks, chunks_of, ChunkSize, IterChunks};
pub use collections::{
    as_flattened_list, at_most_one, exactly_one, partition, prune_dict, PruneMode, Truthy,
};
pub use container::{as_tuple, is_container, is_truthy};
pub use error::{ErrorKind, HelperError, Result};
pub use key::{validate_group_key, validate_group_key_value, validate_key, validate_key_value};
pub use limits::{KeyLimits, DEFAULT_GROUP_KEY_MAX_LENGTH, DEFAULT_KEY_MAX_LENGTH};
pub use merge::{merge_dicts, merge_values};
pub use reduce::reduce_in_chunks;
pub use types::ValueKind;
