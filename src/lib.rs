//! Ripple Field - sonar-style ripple shockwaves on a dot grid
//!
//! Core modules:
//! - `sim`: Deterministic simulation (anchor points, spawn scheduling, ripple physics)
//! - `render`: Grid-sampled intensity field and dot renderer
//!
//! Canvas acquisition, resize wiring, and the animation-frame driver are
//! platform glue and live in the binary. Everything here runs headless with a
//! seeded RNG.

pub mod render;
pub mod sim;

use glam::Vec2;

/// Simulation configuration constants
pub mod consts {
    /// Number of anchor points in the field
    pub const NUM_POINTS: usize = 20;
    /// Minimum pairwise distance between anchor points (best-effort)
    pub const MIN_POINT_DISTANCE: f32 = 100.0;
    /// Placement candidates tried before accepting an unconstrained point
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 100;

    /// Radius at which a ripple expires (alpha reaches 0 exactly here)
    pub const MAX_RIPPLE_RADIUS: f32 = 150.0;
    /// Radius growth per frame tick (not wall-time scaled)
    pub const RIPPLE_SPEED: f32 = 0.1;

    /// Phase-one cadence: one anchor spawned per second until all have fired
    pub const INITIAL_SPAWN_INTERVAL_MS: f64 = 1000.0;
    /// Phase-two cadence for the continuous randomized respawn
    pub const CONTINUOUS_SPAWN_INTERVAL_MS: f64 = 5000.0;

    /// Radial band width around a ripple's current radius that lights cells
    pub const SHOCKWAVE_THICKNESS: f32 = 25.0;
    /// Peak contribution scale applied on top of ripple alpha
    pub const SHOCKWAVE_ALPHA: f32 = 0.8;

    /// Spacing of the sampling grid in canvas units
    pub const GRID_SPACING: f32 = 10.0;
    /// Radius of a rendered grid dot
    pub const DOT_RADIUS: f32 = 1.0;
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}
