//! Wheel configuration
//!
//! Hosts hand us loose JSON (usually from a `data-wheel-config` attribute).
//! Every field is optional and bad values are corrected, never rejected.

use serde::{Deserialize, Serialize};

use super::easing::Easing;
use super::error::WheelError;
use super::segment::Winding;
use crate::consts::*;
use crate::normalize_degrees;

/// Preset angle conventions for the different wheel skins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WheelSkin {
    /// Segments from 3 o'clock, pointer on top
    #[default]
    Classic,
    /// Segments from 12 o'clock, pointer on top
    TopStart,
    /// Segments from 3 o'clock, pointer on the right
    RightPointer,
}

impl WheelSkin {
    pub fn as_str(&self) -> &'static str {
        match self {
            WheelSkin::Classic => "classic",
            WheelSkin::TopStart => "topStart",
            WheelSkin::RightPointer => "rightPointer",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "classic" => Some(WheelSkin::Classic),
            "topstart" | "top" => Some(WheelSkin::TopStart),
            "rightpointer" | "right" => Some(WheelSkin::RightPointer),
            _ => None,
        }
    }

    /// Zero-reference angle where segment 0 begins
    pub fn zero_angle(&self) -> f64 {
        match self {
            WheelSkin::Classic | WheelSkin::RightPointer => 0.0,
            WheelSkin::TopStart => 270.0,
        }
    }

    pub fn pointer_angle(&self) -> f64 {
        match self {
            WheelSkin::Classic | WheelSkin::TopStart => 270.0,
            WheelSkin::RightPointer => 0.0,
        }
    }
}

/// Validated wheel configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelConfig {
    /// Full rotations added before the final correction (>= 1)
    pub min_rotations: u32,
    /// Animation length in milliseconds
    pub spin_duration_ms: f64,
    pub easing: Easing,
    /// Fixed pointer position, screen degrees clockwise from 3 o'clock
    pub pointer_angle_degrees: f64,
    /// Where segment 0 begins
    pub zero_angle_degrees: f64,
    pub winding: Winding,
    /// Emit `Tick` events as segment boundaries pass the pointer
    pub emit_ticks: bool,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            min_rotations: DEFAULT_MIN_ROTATIONS,
            spin_duration_ms: DEFAULT_SPIN_DURATION_MS,
            easing: Easing::default(),
            pointer_angle_degrees: DEFAULT_POINTER_ANGLE,
            zero_angle_degrees: DEFAULT_ZERO_ANGLE,
            winding: Winding::Clockwise,
            emit_ticks: true,
        }
    }
}

impl WheelConfig {
    /// Create a config from a skin preset (other fields at defaults)
    pub fn from_skin(skin: WheelSkin) -> Self {
        Self {
            pointer_angle_degrees: skin.pointer_angle(),
            zero_angle_degrees: skin.zero_angle(),
            ..Self::default()
        }
    }

    /// Parse and sanitize host JSON. Malformed JSON yields the defaults.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<WheelConfigInput>(json) {
            Ok(input) => input.sanitize(),
            Err(e) => {
                log::warn!(
                    "{}",
                    WheelError::Configuration(format!("unreadable wheel config ({}), using defaults", e))
                );
                Self::default()
            }
        }
    }

    /// Re-apply clamping to a config that may have been edited in place
    pub fn sanitized(&self) -> Self {
        WheelConfigInput::from(self).sanitize()
    }
}

/// Loose, host-facing form of [`WheelConfig`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WheelConfigInput {
    pub skin: Option<String>,
    pub min_rotations: Option<i64>,
    pub spin_duration_ms: Option<f64>,
    pub easing: Option<String>,
    pub pointer_angle_degrees: Option<f64>,
    pub zero_angle_degrees: Option<f64>,
    pub winding: Option<String>,
    pub emit_ticks: Option<bool>,
}

impl From<&WheelConfig> for WheelConfigInput {
    fn from(config: &WheelConfig) -> Self {
        Self {
            skin: None,
            min_rotations: Some(config.min_rotations as i64),
            spin_duration_ms: Some(config.spin_duration_ms),
            easing: Some(config.easing.as_str().to_string()),
            pointer_angle_degrees: Some(config.pointer_angle_degrees),
            zero_angle_degrees: Some(config.zero_angle_degrees),
            winding: Some(
                match config.winding {
                    Winding::Clockwise => "clockwise",
                    Winding::CounterClockwise => "counterClockwise",
                }
                .to_string(),
            ),
            emit_ticks: Some(config.emit_ticks),
        }
    }
}

fn corrected(message: String) {
    log::warn!("{}", WheelError::Configuration(message));
}

impl WheelConfigInput {
    /// Clamp or default every field; logs one warning per correction
    pub fn sanitize(&self) -> WheelConfig {
        let skin = match self.skin.as_deref() {
            None => WheelSkin::default(),
            Some(name) => WheelSkin::from_str(name).unwrap_or_else(|| {
                corrected(format!("unknown skin {:?}, using classic", name));
                WheelSkin::default()
            }),
        };
        let mut config = WheelConfig::from_skin(skin);

        if let Some(rotations) = self.min_rotations {
            let clamped = rotations.clamp(1, MAX_MIN_ROTATIONS as i64);
            if clamped != rotations {
                corrected(format!("minRotations {} clamped to {}", rotations, clamped));
            }
            config.min_rotations = clamped as u32;
        }

        if let Some(duration) = self.spin_duration_ms {
            config.spin_duration_ms = if duration.is_finite() {
                let clamped = duration.clamp(MIN_SPIN_DURATION_MS, MAX_SPIN_DURATION_MS);
                if clamped != duration {
                    corrected(format!("spinDurationMs {} clamped to {}", duration, clamped));
                }
                clamped
            } else {
                corrected(format!("spinDurationMs {} is not a number", duration));
                DEFAULT_SPIN_DURATION_MS
            };
        }

        if let Some(name) = self.easing.as_deref() {
            config.easing = Easing::from_str(name).unwrap_or_else(|| {
                corrected(format!("unknown easing {:?}, using easeOutQuart", name));
                Easing::default()
            });
        }

        if let Some(angle) = self.pointer_angle_degrees {
            config.pointer_angle_degrees = finite_angle("pointerAngleDegrees", angle, skin.pointer_angle());
        }

        if let Some(angle) = self.zero_angle_degrees {
            config.zero_angle_degrees = finite_angle("zeroAngleDegrees", angle, skin.zero_angle());
        }

        if let Some(name) = self.winding.as_deref() {
            config.winding = Winding::from_str(name).unwrap_or_else(|| {
                corrected(format!("unknown winding {:?}, using clockwise", name));
                Winding::Clockwise
            });
        }

        if let Some(ticks) = self.emit_ticks {
            config.emit_ticks = ticks;
        }

        config
    }
}

fn finite_angle(field: &str, angle: f64, fallback: f64) -> f64 {
    if angle.is_finite() {
        normalize_degrees(angle)
    } else {
        corrected(format!("{} {} is not a number", field, angle));
        fallback
    }
}
