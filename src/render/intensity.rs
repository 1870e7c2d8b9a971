//! Grid-sampled shockwave intensity
//!
//! Each frame the live ripples are resampled onto a fixed-spacing grid. A
//! cell inside a ripple's ring band (within half the shockwave thickness of
//! the current radius) receives a contribution that falls off linearly from
//! the ring centerline and scales with the ripple's remaining alpha.
//! Overlapping ripples add up, saturating at full brightness per cell.
//!
//! Cells are keyed by integer grid coordinates; untouched cells are simply
//! absent (implicitly zero, never rendered).

use fnv::FnvHashMap;
use glam::Vec2;

use crate::consts::{GRID_SPACING, SHOCKWAVE_ALPHA, SHOCKWAVE_THICKNESS};
use crate::distance;
use crate::sim::RippleSet;

/// Per-frame brightness map over the sampling grid
#[derive(Debug, Clone, Default)]
pub struct IntensityField {
    cells: FnvHashMap<(i32, i32), f32>,
}

impl IntensityField {
    /// Accumulate every live ripple's ring band into a fresh field.
    pub fn sample(ripples: &RippleSet) -> Self {
        let mut cells: FnvHashMap<(i32, i32), f32> = FnvHashMap::default();
        let half_thickness = SHOCKWAVE_THICKNESS / 2.0;

        for ripple in ripples.iter() {
            let shockwave_alpha = ripple.alpha * SHOCKWAVE_ALPHA;
            let reach = ripple.radius + SHOCKWAVE_THICKNESS;

            // Bounding box snapped to the grid, floor on the min corner
            let min_gx = ((ripple.pos.x - reach) / GRID_SPACING).floor() as i32;
            let max_gx = ((ripple.pos.x + reach) / GRID_SPACING).floor() as i32;
            let min_gy = ((ripple.pos.y - reach) / GRID_SPACING).floor() as i32;
            let max_gy = ((ripple.pos.y + reach) / GRID_SPACING).floor() as i32;

            for gx in min_gx..=max_gx {
                for gy in min_gy..=max_gy {
                    let cell = Vec2::new(gx as f32 * GRID_SPACING, gy as f32 * GRID_SPACING);
                    let dist_from_ring = (distance(ripple.pos, cell) - ripple.radius).abs();

                    if dist_from_ring <= half_thickness {
                        let contribution =
                            shockwave_alpha * (1.0 - dist_from_ring / half_thickness);
                        let entry = cells.entry((gx, gy)).or_insert(0.0);
                        *entry = (*entry + contribution).min(1.0);
                    }
                }
            }
        }

        Self { cells }
    }

    /// Brightness at a grid cell; absent cells are zero.
    pub fn get(&self, gx: i32, gy: i32) -> f32 {
        self.cells.get(&(gx, gy)).copied().unwrap_or(0.0)
    }

    /// Lit cells as (world position, brightness). Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (Vec2, f32)> + '_ {
        self.cells.iter().map(|(&(gx, gy), &value)| {
            (
                Vec2::new(gx as f32 * GRID_SPACING, gy as f32 * GRID_SPACING),
                value,
            )
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
