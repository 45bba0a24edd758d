//! Wheel state, results and lifecycle events

use serde::{Deserialize, Serialize};

/// Controller phase. There is no separate "stopped" phase: a finished spin
/// goes straight back to `Idle` with `last_result` filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SpinPhase {
    #[default]
    Idle,
    Spinning,
}

/// Where a completed spin landed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinResult {
    pub index: usize,
    pub label: String,
}

impl SpinResult {
    /// Text for the page's live region
    pub fn announcement(&self) -> String {
        format!("The wheel landed on {}.", self.label)
    }
}

/// State owned by the rotation controller
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WheelState {
    /// Unbounded during a spin, folded back into [0, 360) when it ends
    pub cumulative_rotation: f64,
    pub phase: SpinPhase,
    pub last_result: Option<SpinResult>,
}

impl WheelState {
    #[inline]
    pub fn is_spinning(&self) -> bool {
        self.phase == SpinPhase::Spinning
    }
}

/// Synchronous snapshot for host UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WheelSnapshot {
    pub spinning: bool,
    pub last_result: Option<SpinResult>,
    /// Current rotation in degrees
    pub angle: f64,
}

/// Lifecycle events, in order `SpinStart`, zero or more `Tick`, then
/// `SpinEnd` (or `SpinCancelled`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum WheelEvent {
    #[serde(rename_all = "camelCase")]
    SpinStart {
        generation: u64,
        target_index: usize,
        target_label: String,
    },
    #[serde(rename_all = "camelCase")]
    Tick { segment_index: usize },
    SpinEnd(SpinResult),
    SpinCancelled { generation: u64 },
}
