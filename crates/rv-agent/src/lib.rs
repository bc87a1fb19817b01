//! `rv-agent` — per-roomba state and fleet storage.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`energy`] | `EnergyParams`, `Battery`                                 |
//! | [`memory`] | `VisitLog`, `ChargerRegistry` — what a roomba remembers   |
//! | [`roomba`] | `Roomba`, `RoombaState`                                   |
//! | [`store`]  | `Fleet` — agents plus their per-agent RNGs                |
//!
//! Everything here is passive data with small invariant-preserving methods;
//! the decision logic that drives it lives in `rv-sim`.

pub mod energy;
pub mod memory;
pub mod roomba;
pub mod store;

#[cfg(test)]
mod tests;

pub use energy::{Battery, EnergyParams};
pub use memory::{ChargerRegistry, VisitLog};
pub use roomba::{Roomba, RoombaState};
pub use store::Fleet;
