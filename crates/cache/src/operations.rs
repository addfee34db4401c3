//! Named, timed units of work for diagnostics
//!
//! The sweep wraps each phase in an [`OperationRunner::call`]. Runners only
//! observe; they never change ordering or results.

use std::fmt;
use std::time::Instant;

/// A phase of the cleanup sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// The whole sweep
    Cleanup,
    Scan,
    Plan,
    Delete,
}

impl Phase {
    pub const fn as_str(self) -> &'static str {
        match self {
            Phase::Cleanup => "cleanup",
            Phase::Scan => "scan",
            Phase::Plan => "plan",
            Phase::Delete => "delete",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Describes one unit of work
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDescriptor {
    pub phase: Phase,
    pub display_name: String,
}

impl OperationDescriptor {
    pub fn new(phase: Phase, display_name: impl Into<String>) -> Self {
        Self {
            phase,
            display_name: display_name.into(),
        }
    }
}

/// Executes units of work on behalf of the sweep
pub trait OperationRunner {
    fn call<T, F>(&self, descriptor: OperationDescriptor, f: F) -> T
    where
        F: FnOnce() -> T;
}

/// Runs each unit inside a tracing span and logs its duration
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingOperations;

impl OperationRunner for TracingOperations {
    fn call<T, F>(&self, descriptor: OperationDescriptor, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        let span = tracing::info_span!(
            "cache_operation",
            phase = descriptor.phase.as_str(),
            description = %descriptor.display_name
        );
        let _entered = span.enter();

        let start_time = Instant::now();
        let output = f();
        tracing::debug!(
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "{} finished",
            descriptor.display_name
        );

        output
    }
}

/// Runs each unit directly
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopOperations;

impl OperationRunner for NoopOperations {
    fn call<T, F>(&self, _descriptor: OperationDescriptor, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        f()
    }
}
