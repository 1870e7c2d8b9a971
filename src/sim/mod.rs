//! Deterministic simulation module
//!
//! All ripple logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, injected through `rand::Rng`
//! - Wall-clock time supplied by the caller, never read internally
//! - No rendering or platform dependencies

pub mod field;
pub mod ripple;
pub mod scheduler;
pub mod state;
pub mod tick;

pub use field::PointField;
pub use ripple::{Ripple, RippleSet};
pub use scheduler::{Phase, SpawnScheduler};
pub use state::SimState;
pub use tick::tick;
