//! Infinipage Core
//!
//! Shared plumbing for the infinipage crates: math types, viewport geometry,
//! logging setup, profiling scopes and hash collections.

pub mod alloc;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
