//! Framework error type.
//!
//! Sub-crates define their own error enums and either convert them into
//! `RvError` via `From` impls or keep them separate.  Both patterns are
//! acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

use crate::{AgentId, GridPos};

/// The top-level error type for `rv-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum RvError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("position {0} is outside the world")]
    OutOfBounds(GridPos),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `rv-*` crates.
pub type RvResult<T> = Result<T, RvError>;
