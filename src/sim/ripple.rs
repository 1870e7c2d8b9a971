//! Live ripple collection and anchor occupancy
//!
//! A ripple expands by a fixed increment per frame tick and fades linearly:
//! alpha is fully derived from radius and hits 0 exactly at the expiry
//! radius. The set also tracks which anchor indices are occupied by a live
//! ripple so the scheduler never doubles up on an anchor mid-animation.

use fnv::FnvHashSet;
use glam::Vec2;

use crate::consts::{MAX_RIPPLE_RADIUS, RIPPLE_SPEED};

/// An expanding circular shockwave tied to an anchor index
#[derive(Debug, Clone, Copy)]
pub struct Ripple {
    pub pos: Vec2,
    pub radius: f32,
    pub alpha: f32,
    pub point_index: usize,
}

/// All live ripples plus the set of occupied anchor indices
#[derive(Debug, Clone, Default)]
pub struct RippleSet {
    ripples: Vec<Ripple>,
    used: FnvHashSet<usize>,
}

impl RippleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a ripple at `pos` and mark its anchor occupied.
    pub fn spawn(&mut self, pos: Vec2, point_index: usize) {
        self.ripples.push(Ripple {
            pos,
            radius: 0.0,
            alpha: 1.0,
            point_index,
        });
        self.used.insert(point_index);
    }

    /// Grow every live ripple by one tick.
    ///
    /// The increment is per-tick, not wall-time scaled: expansion speed
    /// tracks the frame rate.
    pub fn advance(&mut self) {
        for ripple in &mut self.ripples {
            ripple.radius += RIPPLE_SPEED;
            ripple.alpha = 1.0 - ripple.radius / MAX_RIPPLE_RADIUS;
        }
    }

    /// Remove ripples past the expiry radius, releasing their anchors.
    pub fn prune(&mut self) {
        let used = &mut self.used;
        self.ripples.retain(|ripple| {
            if ripple.radius >= MAX_RIPPLE_RADIUS {
                used.remove(&ripple.point_index);
                false
            } else {
                true
            }
        });
    }

    /// Drop all ripples and release every anchor.
    pub fn clear(&mut self) {
        self.ripples.clear();
        self.used.clear();
    }

    /// Release every anchor without touching live ripples.
    ///
    /// Used by the continuous-phase refresh when no anchor is free.
    pub fn clear_used(&mut self) {
        self.used.clear();
    }

    pub fn is_used(&self, index: usize) -> bool {
        self.used.contains(&index)
    }

    /// Anchor indices in `0..count` not currently occupied.
    pub fn available_indices(&self, count: usize) -> Vec<usize> {
        (0..count).filter(|i| !self.used.contains(i)).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Ripple> {
        self.ripples.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ripples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_spawn_marks_anchor_used() {
        let mut set = RippleSet::new();
        set.spawn(Vec2::new(10.0, 20.0), 4);

        assert_eq!(set.len(), 1);
        assert!(set.is_used(4));
        assert!(!set.is_used(0));

        let ripple = set.iter().next().unwrap();
        assert_eq!(ripple.radius, 0.0);
        assert_eq!(ripple.alpha, 1.0);
    }

    #[test]
    fn test_alpha_is_derived_from_radius() {
        let mut set = RippleSet::new();
        set.spawn(Vec2::ZERO, 0);

        set.advance();
        let ripple = set.iter().next().unwrap();
        assert!((ripple.alpha - (1.0 - ripple.radius / MAX_RIPPLE_RADIUS)).abs() < 1e-6);

        // Half-way out: alpha half gone
        let half_ticks = (MAX_RIPPLE_RADIUS / RIPPLE_SPEED / 2.0) as usize;
        for _ in 1..half_ticks {
            set.advance();
        }
        let ripple = set.iter().next().unwrap();
        assert!((ripple.alpha - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_prune_releases_anchor() {
        let mut set = RippleSet::new();
        set.spawn(Vec2::ZERO, 7);

        // A few extra ticks past the nominal expiry absorb f32 accumulation error
        let ticks_to_expiry = (MAX_RIPPLE_RADIUS / RIPPLE_SPEED).ceil() as usize + 5;
        for _ in 0..ticks_to_expiry {
            set.advance();
        }
        set.prune();

        assert!(set.is_empty());
        assert!(!set.is_used(7));

        // Idempotent
        set.prune();
        assert!(set.is_empty());
    }

    #[test]
    fn test_prune_keeps_live_ripples() {
        let mut set = RippleSet::new();
        set.spawn(Vec2::ZERO, 0);
        set.spawn(Vec2::new(50.0, 50.0), 1);

        // Age the first ripple past expiry while the second stays young:
        // advance both, then respawn the second near the end.
        let ticks_to_expiry = (MAX_RIPPLE_RADIUS / RIPPLE_SPEED).ceil() as usize + 5;
        for _ in 0..ticks_to_expiry {
            set.advance();
        }
        set.spawn(Vec2::new(1.0, 1.0), 2);
        set.prune();

        assert_eq!(set.len(), 1);
        assert!(!set.is_used(0));
        assert!(!set.is_used(1));
        assert!(set.is_used(2));
    }

    #[test]
    fn test_available_indices() {
        let mut set = RippleSet::new();
        set.spawn(Vec2::ZERO, 1);
        set.spawn(Vec2::ZERO, 3);

        assert_eq!(set.available_indices(5), vec![0, 2, 4]);

        set.clear_used();
        assert_eq!(set.available_indices(5), vec![0, 1, 2, 3, 4]);
        // Live ripples survive a used-set refresh
        assert_eq!(set.len(), 2);
    }

    proptest! {
        #[test]
        fn prop_alpha_tracks_radius(ticks in 0usize..2000) {
            let mut set = RippleSet::new();
            set.spawn(Vec2::ZERO, 0);
            for _ in 0..ticks {
                set.advance();
            }
            for ripple in set.iter() {
                let expected = 1.0 - ripple.radius / MAX_RIPPLE_RADIUS;
                prop_assert!((ripple.alpha - expected).abs() < 1e-5);
            }
        }
    }
}
