use rv_core::GridPos;
use rv_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("home cell {0} is not a charger")]
    HomeNotCharger(GridPos),

    #[error("start cell {0} is blocked or out of bounds")]
    StartBlocked(GridPos),

    #[error("start charger {0} is already taken by another agent")]
    StartContested(GridPos),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),
}

pub type SimResult<T> = Result<T, SimError>;
