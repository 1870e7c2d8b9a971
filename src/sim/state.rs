//! Simulation context
//!
//! All mutable simulation state lives here, owned by the caller and handed
//! into each callback. Nothing is process-global: multiple instances can run
//! side by side, and tests inject a fixed seed for reproducible runs.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::field::PointField;
use super::ripple::RippleSet;
use super::scheduler::SpawnScheduler;
use crate::consts::{MIN_POINT_DISTANCE, NUM_POINTS};

/// Complete simulation state for one canvas
#[derive(Debug, Clone)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Anchor points ripples spawn from
    pub field: PointField,
    /// Live ripples and anchor occupancy
    pub ripples: RippleSet,
    /// Two-phase spawn timing
    pub scheduler: SpawnScheduler,
    /// Injected random source for placement and index selection
    pub rng: Pcg32,
}

impl SimState {
    /// Create a context for a `width` x `height` surface.
    ///
    /// `now_ms` anchors the scheduler's first deadline to the driver's clock.
    pub fn new(seed: u64, width: f32, height: f32, now_ms: f64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let bounds = Vec2::new(width, height);
        let field = PointField::generate(&mut rng, NUM_POINTS, MIN_POINT_DISTANCE, bounds);

        Self {
            seed,
            field,
            ripples: RippleSet::new(),
            scheduler: SpawnScheduler::new(now_ms),
            rng,
        }
    }

    /// React to a surface size change.
    ///
    /// Regenerates the whole field against the new bounds, drops every live
    /// ripple, and restarts the spawn schedule from the staggered burst. The
    /// scheduler reset replaces its deadline, so the old cadence cannot keep
    /// firing alongside the new one.
    pub fn resize(&mut self, width: f32, height: f32, now_ms: f64) {
        let bounds = Vec2::new(width, height);
        self.field = PointField::generate(&mut self.rng, NUM_POINTS, MIN_POINT_DISTANCE, bounds);
        self.ripples.clear();
        self.scheduler.reset(now_ms);
        log::info!("field regenerated for {}x{} surface", width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::scheduler::Phase;

    #[test]
    fn test_new_generates_full_field() {
        let state = SimState::new(123, 800.0, 600.0, 0.0);

        assert_eq!(state.field.len(), NUM_POINTS);
        assert!(state.ripples.is_empty());
        assert_eq!(state.scheduler.phase(), Phase::Initial { next_index: 0 });
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = SimState::new(77, 800.0, 600.0, 0.0);
        let b = SimState::new(77, 800.0, 600.0, 0.0);
        assert_eq!(a.field.points(), b.field.points());
    }

    #[test]
    fn test_resize_restarts_schedule() {
        let mut state = SimState::new(9, 800.0, 600.0, 0.0);

        // Run the burst partway, then resize mid-phase
        let mut now = 0.0;
        for _ in 0..5 {
            now += 1000.0;
            let SimState {
                field,
                ripples,
                scheduler,
                rng,
                ..
            } = &mut state;
            scheduler.poll(now, field, ripples, rng);
        }
        assert_eq!(state.ripples.len(), 5);

        state.resize(1024.0, 768.0, now);

        assert!(state.ripples.is_empty());
        assert_eq!(state.scheduler.phase(), Phase::Initial { next_index: 0 });
        assert_eq!(state.field.len(), NUM_POINTS);
        let bounds = state.field.bounds();
        assert_eq!(bounds, glam::Vec2::new(1024.0, 768.0));
        for p in state.field.points() {
            assert!(p.x >= 0.0 && p.x < 1024.0);
            assert!(p.y >= 0.0 && p.y < 768.0);
        }
    }
}
