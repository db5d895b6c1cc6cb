pub mod hash_functions;
pub mod hash_map;
pub mod protocol;

/// Bucket count used when the caller does not pick one
pub const DEFAULT_CAPACITY: usize = 16;

pub use hash_map::{HashFunction, HashMap};
