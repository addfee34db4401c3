//! Shared utilities for dirsweep
//!
//! Tracing setup, XDG path resolution, display helpers and the exclusive
//! directory lock used by the cache crate.

pub mod byte_count;
pub mod directory_lock;
pub mod tracing;
pub mod xdg;

pub use byte_count::*;
pub use directory_lock::*;
pub use xdg::*;
