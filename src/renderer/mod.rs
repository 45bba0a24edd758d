//! Rendering module
//!
//! The engine only knows the wheel's rotation. Anything that can draw
//! colored slices implements `RenderSurface`.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod geometry;

pub use geometry::WheelGeometry;

use crate::wheel::SegmentModel;

/// A drawing backend for the wheel
pub trait RenderSurface {
    /// Redraw the wheel at `rotation_degrees` (screen degrees, clockwise)
    fn draw_wheel(&mut self, geometry: &WheelGeometry, segments: &SegmentModel, rotation_degrees: f64);
}
