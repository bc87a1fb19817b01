//! Navigation-subsystem error type.

use thiserror::Error;

use rv_core::GridPos;

/// Errors produced by `rv-nav`.
#[derive(Debug, Error)]
pub enum NavError {
    /// The search exhausted every reachable cell without satisfying the
    /// goal.  Recoverable: callers fall back to another goal or skip the
    /// move and retry next tick.
    #[error("no path from {from} to the requested goal")]
    NoPath { from: GridPos },
}

pub type NavResult<T> = Result<T, NavError>;
