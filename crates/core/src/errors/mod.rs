//! Error types for dirsweep operations

mod builders;
mod display;
mod types;

pub use types::{Error, Result};
