//! Prize Wheel - deterministic spinner for lead-capture landing pages
//!
//! Core modules:
//! - `wheel`: Spin engine (segments, target resolution, rotation controller)
//! - `renderer`: Drawing-surface seam, wheel geometry, Canvas2D backend
//! - `lead`: Lead-capture form boundary (validate, store, notify)
//! - `settings`: Visitor preferences (sound, reduced motion)

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod lead;
pub mod renderer;
pub mod settings;
pub mod wheel;

pub use settings::Settings;
pub use wheel::{SpinRequest, SpinResult, Wheel, WheelConfig, WheelEvent, WheelSnapshot};

use glam::DVec2;

/// Wheel configuration constants
pub mod consts {
    /// A wheel needs at least this many segments before it may spin
    pub const MIN_SPIN_SEGMENTS: usize = 2;

    /// Spin duration defaults and clamp range (milliseconds)
    pub const DEFAULT_SPIN_DURATION_MS: f64 = 3000.0;
    pub const MIN_SPIN_DURATION_MS: f64 = 500.0;
    pub const MAX_SPIN_DURATION_MS: f64 = 10_000.0;

    /// Full rotations added to every spin before the final correction
    pub const DEFAULT_MIN_ROTATIONS: u32 = 3;
    pub const MAX_MIN_ROTATIONS: u32 = 20;

    /// Pointer at the top of the wheel (screen angles, clockwise from 3 o'clock)
    pub const DEFAULT_POINTER_ANGLE: f64 = 270.0;
    /// Segment 0 starts at 3 o'clock
    pub const DEFAULT_ZERO_ANGLE: f64 = 0.0;

    pub const FULL_TURN: f64 = 360.0;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(consts::FULL_TURN);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= consts::FULL_TURN { 0.0 } else { wrapped }
}

/// Convert polar (r, degrees) to cartesian (x, y) in screen space (y down)
#[inline]
pub fn polar_to_cartesian(r: f64, degrees: f64) -> DVec2 {
    let theta = degrees.to_radians();
    DVec2::new(r * theta.cos(), r * theta.sin())
}
