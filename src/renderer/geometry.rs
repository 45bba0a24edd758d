//! Wheel geometry shared by all rendering backends
//!
//! All positions are relative to the wheel center in screen space (y down).

use glam::DVec2;

use crate::polar_to_cartesian;
use crate::wheel::{SegmentModel, WheelConfig, Winding};

/// Fraction of the radius where labels are anchored
const LABEL_RADIUS_FACTOR: f64 = 0.65;
/// Pointer tip sits just inside the rim
const POINTER_INSET: f64 = 6.0;

/// Wheel layout for one configuration and radius
///
/// A snapshot: hosts build it from `Wheel::config()` when drawing so a
/// `set_config` moves the drawn pointer along with the engine's.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelGeometry {
    pub radius: f64,
    pub pointer_angle: f64,
    pub zero_angle: f64,
    pub winding: Winding,
}

impl WheelGeometry {
    pub fn new(radius: f64, config: &WheelConfig) -> Self {
        Self {
            radius: radius.max(0.0),
            pointer_angle: config.pointer_angle_degrees,
            zero_angle: config.zero_angle_degrees,
            winding: config.winding,
        }
    }

    /// Screen-space start/end angle of a slice at a given rotation (end > start)
    pub fn slice_arc(&self, segments: &SegmentModel, index: usize, rotation: f64) -> (f64, f64) {
        let (start, end) = segments.span(index, self.zero_angle, self.winding);
        (start + rotation, end + rotation)
    }

    /// Where a slice's label is drawn
    pub fn label_anchor(&self, segments: &SegmentModel, index: usize, rotation: f64) -> DVec2 {
        let center = segments.center_angle(index, self.zero_angle, self.winding);
        polar_to_cartesian(self.radius * LABEL_RADIUS_FACTOR, center + rotation)
    }

    /// Text rotation for a slice label so it reads outward along the radius
    pub fn label_angle(&self, segments: &SegmentModel, index: usize, rotation: f64) -> f64 {
        segments.center_angle(index, self.zero_angle, self.winding) + rotation
    }

    /// Tip of the fixed pointer
    pub fn pointer_tip(&self) -> DVec2 {
        polar_to_cartesian((self.radius - POINTER_INSET).max(0.0), self.pointer_angle)
    }
}
