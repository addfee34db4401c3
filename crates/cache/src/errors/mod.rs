//! Error handling for the cache sweep
//!
//! Only phase-level failures are represented here. A failed removal of a
//! single entry is logged and counted, never turned into a [`CacheError`].

mod conversions;
mod recovery;
mod types;

pub use types::*;
