//! Grid-subsystem error type.

use thiserror::Error;

use rv_core::{AgentId, GridPos};

/// Errors produced by `rv-grid`.
///
/// These indicate violated movement preconditions; the simulation layer
/// treats them as invariant violations, not as recoverable conditions.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("position {0} is outside the world")]
    OutOfBounds(GridPos),

    #[error("cell {0} is an obstacle")]
    Blocked(GridPos),

    #[error("agent {agent} is not at {pos}")]
    AgentNotAt { agent: AgentId, pos: GridPos },
}

pub type GridResult<T> = Result<T, GridError>;
