//! Tessel Core
//!
//! Shared utilities for the Tessel quad batching engine: logging setup,
//! profiling scopes, math re-exports and integer rectangle geometry.

pub mod alloc;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
