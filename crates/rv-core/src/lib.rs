//! `rv-core` — foundational types for the `rust_rv` vacuum-fleet simulator.
//!
//! This crate is a dependency of every other `rv-*` crate.  It intentionally
//! has no `rv-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                      |
//! |----------|-----------------------------------------------|
//! | [`ids`]  | `AgentId`                                     |
//! | [`grid`] | `GridPos`, the `STEPS4` neighbor order        |
//! | [`time`] | `Tick`, `SimConfig`                           |
//! | [`rng`]  | `AgentRng` (per-agent), `SimRng` (global)     |
//! | [`error`]| `RvError`, `RvResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod grid;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{RvError, RvResult};
pub use grid::{GridPos, STEPS4};
pub use ids::AgentId;
pub use rng::{AgentRng, SimRng};
pub use time::{SimConfig, Tick};
