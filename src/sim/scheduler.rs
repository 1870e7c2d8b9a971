//! Two-phase ripple spawn scheduler
//!
//! Phase one walks the anchor indices in order, one spawn per second, so the
//! field lights up as a staggered burst. Once every anchor has fired the
//! scheduler switches to the continuous phase: every five seconds it picks a
//! free anchor at random, spawns there, and relocates that anchor.
//!
//! The scheduler owns its next-fire deadline and is polled with the driver's
//! wall clock. A reset replaces the deadline outright, so restarting field
//! generation (e.g. on resize) cannot leave a stale spawn cadence running
//! alongside the new one. A poll past-due fires once and reschedules from
//! `now`; missed ticks are not replayed.

use rand::Rng;

use super::field::PointField;
use super::ripple::RippleSet;
use crate::consts::{CONTINUOUS_SPAWN_INTERVAL_MS, INITIAL_SPAWN_INTERVAL_MS};

/// Scheduler phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Staggered burst: anchors spawn once each, in index order
    Initial { next_index: usize },
    /// Randomized respawn at free anchors
    Continuous,
}

/// Timer-driven spawn state machine
#[derive(Debug, Clone)]
pub struct SpawnScheduler {
    phase: Phase,
    next_fire_ms: f64,
}

impl SpawnScheduler {
    pub fn new(now_ms: f64) -> Self {
        Self {
            phase: Phase::Initial { next_index: 0 },
            next_fire_ms: now_ms + INITIAL_SPAWN_INTERVAL_MS,
        }
    }

    /// Re-enter phase one from index 0 with a fresh deadline.
    ///
    /// The caller is responsible for clearing the live ripple set first.
    pub fn reset(&mut self, now_ms: f64) {
        *self = Self::new(now_ms);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Fire the scheduler if its deadline has passed.
    ///
    /// At most one spawn per call. Returns whether a spawn happened.
    pub fn poll<R: Rng>(
        &mut self,
        now_ms: f64,
        field: &mut PointField,
        ripples: &mut RippleSet,
        rng: &mut R,
    ) -> bool {
        if now_ms < self.next_fire_ms || field.is_empty() {
            return false;
        }

        match self.phase {
            Phase::Initial { next_index } => {
                ripples.spawn(field.point(next_index), next_index);

                if next_index + 1 >= field.len() {
                    // Burst complete: the next fire is already on the
                    // continuous cadence
                    self.phase = Phase::Continuous;
                    self.next_fire_ms = now_ms + CONTINUOUS_SPAWN_INTERVAL_MS;
                    log::info!("initial burst complete ({} anchors)", field.len());
                } else {
                    self.phase = Phase::Initial {
                        next_index: next_index + 1,
                    };
                    self.next_fire_ms = now_ms + INITIAL_SPAWN_INTERVAL_MS;
                }
            }

            Phase::Continuous => {
                let mut available = ripples.available_indices(field.len());
                if available.is_empty() {
                    // Every anchor is mid-animation: force a full refresh
                    // rather than stalling the cadence
                    ripples.clear_used();
                    available = (0..field.len()).collect();
                }

                let index = available[rng.random_range(0..available.len())];
                ripples.spawn(field.point(index), index);
                field.regenerate(index, rng);

                self.next_fire_ms = now_ms + CONTINUOUS_SPAWN_INTERVAL_MS;
            }
        }

        true
    }
}
