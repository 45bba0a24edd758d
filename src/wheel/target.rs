//! Target resolution: turn a spin request into a concrete segment index
//!
//! Priority order:
//! 1. Explicit index (clamped into range)
//! 2. Label, case-insensitive first match
//! 3. Uniform random segment
//!
//! Resolution is pure apart from the RNG draw and never touches wheel state.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::error::WheelError;
use super::segment::SegmentModel;

/// What the host asked the wheel to land on
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpinRequest {
    /// Explicit segment index. Hosts send plain numbers, so fractions are
    /// truncated and out-of-range values clamped. NaN counts as absent.
    #[serde(default)]
    pub target_index: Option<f64>,
    /// Segment label, matched case-insensitively
    #[serde(default)]
    pub target_label: Option<String>,
}

impl SpinRequest {
    /// Land anywhere
    pub fn random() -> Self {
        Self::default()
    }

    pub fn index(index: i64) -> Self {
        Self {
            target_index: Some(index as f64),
            target_label: None,
        }
    }

    pub fn label(label: impl Into<String>) -> Self {
        Self {
            target_index: None,
            target_label: Some(label.into()),
        }
    }
}

/// Resolve a request to a valid index. Returns `None` only for an empty model.
pub fn resolve_target<R: Rng>(
    segments: &SegmentModel,
    request: &SpinRequest,
    rng: &mut R,
) -> Option<usize> {
    let count = segments.len();
    if count == 0 {
        return None;
    }

    if let Some(index) = request.target_index.filter(|i| !i.is_nan()) {
        return Some(index.trunc().clamp(0.0, (count - 1) as f64) as usize);
    }

    if let Some(label) = request.target_label.as_deref() {
        match segments.find_label(label) {
            Some(index) => return Some(index),
            None => log::warn!("{}", WheelError::TargetNotFound(label.to_string())),
        }
    }

    Some(rng.random_range(0..count))
}
