//! `rv-sim` — the per-tick decision engine and simulation driver.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① Shuffle  — draw a fresh agent activation order from the seeded
//!                scheduler RNG (outcomes under contention depend on it).
//!   ② Step     — run each agent's full decision procedure to completion,
//!                strictly sequentially (Controller::step_agent).
//!   ③ Observe  — on_tick_end every tick; on_snapshot at the configured
//!                interval.
//! ```
//!
//! # Decision procedure
//!
//! [`Controller::step_agent`] evaluates the priority-ordered rules — clean,
//! depleted, charging, seek charger, post-charge resume, retrace, normal
//! operation — once per agent per tick.  The order is load-bearing; see the
//! module docs in [`controller`].
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rv_core::SimConfig;
//! use rv_grid::GridWorldBuilder;
//! use rv_nav::{BfsPathFinder, LeastVisitedPolicy};
//! use rv_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(config, world, BfsPathFinder, LeastVisitedPolicy)
//!     .agent_at_home(home)
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod controller;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimBuilder;
pub use controller::Controller;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
