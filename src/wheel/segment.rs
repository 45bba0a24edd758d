//! Segment model and angular geometry
//!
//! Angles are screen degrees measured clockwise from 3 o'clock. A point at
//! wheel-local angle `a` is drawn at `a + rotation`.

use serde::{Deserialize, Serialize};

use crate::consts::FULL_TURN;
use crate::normalize_degrees;

/// Direction in which segment indices advance around the wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Winding {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Winding {
    /// +1 for clockwise, -1 for counter-clockwise
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Winding::Clockwise => 1.0,
            Winding::CounterClockwise => -1.0,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "clockwise" | "cw" => Some(Winding::Clockwise),
            "counterclockwise" | "counter-clockwise" | "ccw" => Some(Winding::CounterClockwise),
            _ => None,
        }
    }
}

const PALETTE: [&str; 6] = ["#f97316", "#06b6d4", "#8b5cf6", "#ec4899", "#22c55e", "#eab308"];
const DEFAULT_TEXT_COLOR: &str = "#ffffff";

/// One labeled slice of the wheel
///
/// Colors may be omitted in page JSON; empty colors are filled from the
/// palette when the segment joins a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub label: String,
    #[serde(default)]
    pub fill_color: String,
    #[serde(default)]
    pub text_color: String,
}

impl Segment {
    pub fn new(label: impl Into<String>, fill_color: impl Into<String>, text_color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            fill_color: fill_color.into(),
            text_color: text_color.into(),
        }
    }

    /// Segment with the default palette colors for its position
    pub fn labeled(label: impl Into<String>, index: usize) -> Self {
        Self::new(label, PALETTE[index % PALETTE.len()], DEFAULT_TEXT_COLOR)
    }

    /// Fill blank colors with the palette entry for `index`
    fn with_palette_fallback(mut self, index: usize) -> Self {
        if self.fill_color.trim().is_empty() {
            self.fill_color = PALETTE[index % PALETTE.len()].to_string();
        }
        if self.text_color.trim().is_empty() {
            self.text_color = DEFAULT_TEXT_COLOR.to_string();
        }
        self
    }
}

fn with_palette_fallback(segments: Vec<Segment>) -> Vec<Segment> {
    segments
        .into_iter()
        .enumerate()
        .map(|(i, s)| s.with_palette_fallback(i))
        .collect()
}

/// Ordered segment list with equal-width slices
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SegmentModel {
    segments: Vec<Segment>,
}

impl SegmentModel {
    pub fn new(segments: Vec<Segment>) -> Self {
        Self {
            segments: with_palette_fallback(segments),
        }
    }

    /// Build a model from bare labels, coloring from the default palette
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Self {
        Self::new(
            labels
                .iter()
                .enumerate()
                .map(|(i, l)| Segment::labeled(l.as_ref(), i))
                .collect(),
        )
    }

    /// Replace the whole list at once
    pub fn set_segments(&mut self, segments: Vec<Segment>) {
        self.segments = with_palette_fallback(segments);
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Angular width of one segment. The empty model reports a full turn.
    #[inline]
    pub fn segment_angle(&self) -> f64 {
        FULL_TURN / self.len().max(1) as f64
    }

    /// Wheel-local center of a segment, relative to `zero_angle`
    pub fn center_angle(&self, index: usize, zero_angle: f64, winding: Winding) -> f64 {
        let span = self.segment_angle();
        normalize_degrees(zero_angle + winding.sign() * (index as f64 * span + span / 2.0))
    }

    /// Wheel-local start and end of a segment, in drawing order (end > start)
    pub fn span(&self, index: usize, zero_angle: f64, winding: Winding) -> (f64, f64) {
        let span = self.segment_angle();
        let start = match winding {
            Winding::Clockwise => zero_angle + index as f64 * span,
            Winding::CounterClockwise => zero_angle - (index as f64 + 1.0) * span,
        };
        let start = normalize_degrees(start);
        (start, start + span)
    }

    /// Index of the segment sitting under the pointer at a given rotation
    pub fn segment_at_rotation(
        &self,
        rotation: f64,
        pointer_angle: f64,
        zero_angle: f64,
        winding: Winding,
    ) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        let local = normalize_degrees(pointer_angle - rotation - zero_angle);
        let offset = match winding {
            Winding::Clockwise => local,
            Winding::CounterClockwise => normalize_degrees(-local),
        };
        let index = (offset / self.segment_angle()).floor() as usize;
        Some(index.min(self.len() - 1))
    }

    /// First segment whose label matches, ignoring case
    pub fn find_label(&self, label: &str) -> Option<usize> {
        let wanted = label.to_lowercase();
        self.segments
            .iter()
            .position(|s| s.label.to_lowercase() == wanted)
    }
}
