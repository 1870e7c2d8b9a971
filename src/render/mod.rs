//! Dot-grid rendering
//!
//! The intensity field is drawn as one small filled circle per lit cell,
//! white on black, with the cell's brightness as the fill opacity. Drawing
//! goes through the `Surface` trait so the core never touches a canvas:
//! the wasm binary implements it over the 2D context, tests over a stub.

pub mod intensity;

pub use intensity::IntensityField;

use glam::Vec2;

use crate::consts::DOT_RADIUS;

/// Minimal drawing seam between the simulation and the platform
pub trait Surface {
    /// Fill the whole surface with opaque black.
    fn clear(&mut self);
    /// Draw a filled circle with the given fill opacity (white).
    fn fill_circle(&mut self, center: Vec2, radius: f32, alpha: f32);
}

/// Draw every lit cell of the field as a dot.
///
/// The driver clears the frame before calling this. Cell order is
/// unspecified; dots never overlap since the grid spacing exceeds the dot
/// diameter.
pub fn draw(field: &IntensityField, surface: &mut impl Surface) {
    for (pos, intensity) in field.iter() {
        surface.fill_circle(pos, DOT_RADIUS, intensity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::RIPPLE_SPEED;
    use crate::sim::RippleSet;

    #[derive(Default)]
    struct RecordingSurface {
        cleared: usize,
        circles: Vec<(Vec2, f32, f32)>,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self) {
            self.cleared += 1;
        }

        fn fill_circle(&mut self, center: Vec2, radius: f32, alpha: f32) {
            self.circles.push((center, radius, alpha));
        }
    }

    #[test]
    fn test_draw_emits_one_dot_per_lit_cell() {
        let mut set = RippleSet::new();
        set.spawn(Vec2::new(200.0, 200.0), 0);
        for _ in 0..((50.0 / RIPPLE_SPEED) as usize) {
            set.advance();
        }
        let field = IntensityField::sample(&set);

        let mut surface = RecordingSurface::default();
        draw(&field, &mut surface);

        assert_eq!(surface.circles.len(), field.len());
        for (_, radius, alpha) in &surface.circles {
            assert_eq!(*radius, DOT_RADIUS);
            assert!((0.0..=1.0).contains(alpha));
        }
    }

    #[test]
    fn test_draw_empty_field_draws_nothing() {
        let field = IntensityField::sample(&RippleSet::new());
        let mut surface = RecordingSurface::default();
        draw(&field, &mut surface);
        assert!(surface.circles.is_empty());
    }
}
