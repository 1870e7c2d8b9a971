//! Anchor point field with a minimum-separation constraint
//!
//! Points are placed by rejection sampling: up to `MAX_PLACEMENT_ATTEMPTS`
//! uniform candidates, keeping the first one far enough from every point
//! already in the field. If every candidate is rejected the last resort is an
//! unconstrained point - the constraint is best-effort, not guaranteed in
//! dense configurations. Fallbacks are counted and logged, never surfaced as
//! errors.

use glam::Vec2;
use rand::Rng;

use crate::consts::MAX_PLACEMENT_ATTEMPTS;
use crate::distance;

/// Ordered set of anchor points, pairwise `min_distance` apart (best-effort)
#[derive(Debug, Clone)]
pub struct PointField {
    points: Vec<Vec2>,
    bounds: Vec2,
    min_distance: f32,
    fallbacks: u32,
}

impl PointField {
    /// Generate a field of `count` points inside `bounds`.
    ///
    /// Each point is validated against the points already accepted for this
    /// field, never against a previous generation.
    pub fn generate<R: Rng>(rng: &mut R, count: usize, min_distance: f32, bounds: Vec2) -> Self {
        let mut field = Self {
            points: Vec::with_capacity(count),
            bounds,
            min_distance,
            fallbacks: 0,
        };
        for _ in 0..count {
            let point = field.place_point(rng);
            field.points.push(point);
        }
        field
    }

    /// Substitute the point at `index` with a freshly placed one.
    ///
    /// Called after a continuous-phase spawn consumes an anchor, so the
    /// visual origin relocates before its next turn. The candidate is
    /// validated against the current field, including the point being
    /// replaced.
    pub fn regenerate<R: Rng>(&mut self, index: usize, rng: &mut R) {
        let point = self.place_point(rng);
        self.points[index] = point;
    }

    /// Rejection-sample one point against the current field.
    fn place_point<R: Rng>(&mut self, rng: &mut R) -> Vec2 {
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let candidate = self.random_point(rng);
            if self
                .points
                .iter()
                .all(|p| distance(*p, candidate) >= self.min_distance)
            {
                return candidate;
            }
        }

        // Out of attempts: accept an unconstrained point
        self.fallbacks += 1;
        log::debug!(
            "anchor placement fell back after {} attempts",
            MAX_PLACEMENT_ATTEMPTS
        );
        self.random_point(rng)
    }

    fn random_point<R: Rng>(&self, rng: &mut R) -> Vec2 {
        Vec2::new(
            rng.random_range(0.0..self.bounds.x),
            rng.random_range(0.0..self.bounds.y),
        )
    }

    #[inline]
    pub fn point(&self, index: usize) -> Vec2 {
        self.points[index]
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Number of placements that gave up on the separation constraint.
    pub fn fallback_count(&self) -> u32 {
        self.fallbacks
    }
}
