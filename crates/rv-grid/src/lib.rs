//! `rv-grid` — the grid world: cell contents, occupancy, and a builder.
//!
//! # Crate layout
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`cell`]    | `Cell` — per-cell tags (obstacle / dirt / charger) and occupants |
//! | [`world`]   | `GridWorld`, `Topology` — queries and occupancy mutation |
//! | [`builder`] | `GridWorldBuilder` — walls, manual placement, seeded scatter |
//! | [`error`]   | `GridError`, `GridResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                            |
//! |---------|---------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types. |

pub mod builder;
pub mod cell;
pub mod error;
pub mod world;

#[cfg(test)]
mod tests;

pub use builder::GridWorldBuilder;
pub use cell::Cell;
pub use error::{GridError, GridResult};
pub use world::{GridWorld, Topology};
