//! Hash collections for infinipage.

/// `HashMap` keyed with AHash.
pub use ahash::AHashMap as HashMap;
