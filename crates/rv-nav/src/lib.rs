//! `rv-nav` — shortest-path search and the exploration heuristic.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`path`]    | `Path` — an ordered, consumable sequence of cells          |
//! | [`finder`]  | `PathFinder` trait, `PathGoal`, `BfsPathFinder`            |
//! | [`explore`] | `ExplorationPolicy` trait, `VisitMap`, `LeastVisitedPolicy`|
//! | [`error`]   | `NavError`, `NavResult<T>`                                 |
//!
//! # Determinism
//!
//! Both the search and the policy are deterministic given a deterministic
//! world and RNG: BFS expands neighbors in the fixed `STEPS4` order (which
//! decides tie-breaks among equal-length paths), and every random choice the
//! policy makes draws from the caller's `AgentRng`.

pub mod error;
pub mod explore;
pub mod finder;
pub mod path;


pub use error::{NavError, NavResult};
pub use explore::{ExplorationPolicy, LeastVisitedPolicy, VisitMap};
pub use finder::{BfsPathFinder, PathFinder, PathGoal};
pub use path::Path;
