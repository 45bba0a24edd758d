//! Canvas2D backend

use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{RenderSurface, WheelGeometry};
use crate::polar_to_cartesian;
use crate::wheel::SegmentModel;

const RIM_COLOR: &str = "#1a1c2e";
const DIVIDER_COLOR: &str = "rgba(255, 255, 255, 0.8)";
const POINTER_COLOR: &str = "#facc15";
const HUB_COLOR: &str = "#f0f2ff";

/// Draws the wheel on an HTML canvas
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }

    /// Largest wheel radius that fits the canvas with a margin for the rim
    pub fn fit_radius(&self) -> f64 {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        (w.min(h) / 2.0 - 12.0).max(0.0)
    }

    fn center(&self) -> (f64, f64) {
        (self.canvas.width() as f64 / 2.0, self.canvas.height() as f64 / 2.0)
    }

    fn draw_slices(&self, geometry: &WheelGeometry, segments: &SegmentModel, rotation: f64) {
        let ctx = &self.ctx;
        for (i, segment) in segments.segments().iter().enumerate() {
            let (start, end) = geometry.slice_arc(segments, i, rotation);
            ctx.begin_path();
            ctx.set_fill_style_str(&segment.fill_color);
            ctx.move_to(0.0, 0.0);
            let _ = ctx.arc(0.0, 0.0, geometry.radius, start.to_radians(), end.to_radians());
            ctx.close_path();
            ctx.fill();

            // Divider on the leading edge
            let edge = polar_to_cartesian(geometry.radius, start);
            ctx.begin_path();
            ctx.set_stroke_style_str(DIVIDER_COLOR);
            ctx.set_line_width(2.0);
            ctx.move_to(0.0, 0.0);
            ctx.line_to(edge.x, edge.y);
            ctx.stroke();
        }
    }

    fn draw_labels(&self, geometry: &WheelGeometry, segments: &SegmentModel, rotation: f64) {
        let ctx = &self.ctx;
        let font_px = (geometry.radius / 10.0).clamp(10.0, 24.0);
        ctx.set_font(&format!("600 {}px sans-serif", font_px.round()));
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");

        for (i, segment) in segments.segments().iter().enumerate() {
            let anchor = geometry.label_anchor(segments, i, rotation);
            let angle = geometry.label_angle(segments, i, rotation);
            ctx.save();
            let _ = ctx.translate(anchor.x, anchor.y);
            let _ = ctx.rotate(angle.to_radians());
            ctx.set_fill_style_str(&segment.text_color);
            let _ = ctx.fill_text(&segment.label, 0.0, 0.0);
            ctx.restore();
        }
    }

    fn draw_frame(&self, geometry: &WheelGeometry) {
        let ctx = &self.ctx;

        ctx.begin_path();
        ctx.set_stroke_style_str(RIM_COLOR);
        ctx.set_line_width(6.0);
        let _ = ctx.arc(0.0, 0.0, geometry.radius, 0.0, 2.0 * PI);
        ctx.stroke();

        ctx.begin_path();
        ctx.set_fill_style_str(HUB_COLOR);
        let _ = ctx.arc(0.0, 0.0, geometry.radius * 0.12, 0.0, 2.0 * PI);
        ctx.fill();

        // Pointer: triangle from outside the rim pointing at the tip
        let tip = geometry.pointer_tip();
        let base_l = polar_to_cartesian(geometry.radius + 14.0, geometry.pointer_angle - 5.0);
        let base_r = polar_to_cartesian(geometry.radius + 14.0, geometry.pointer_angle + 5.0);
        ctx.begin_path();
        ctx.set_fill_style_str(POINTER_COLOR);
        ctx.move_to(tip.x, tip.y);
        ctx.line_to(base_l.x, base_l.y);
        ctx.line_to(base_r.x, base_r.y);
        ctx.close_path();
        ctx.fill();
    }
}

impl RenderSurface for CanvasSurface {
    fn draw_wheel(&mut self, geometry: &WheelGeometry, segments: &SegmentModel, rotation_degrees: f64) {
        let (cx, cy) = self.center();
        self.ctx.clear_rect(0.0, 0.0, self.canvas.width() as f64, self.canvas.height() as f64);
        self.ctx.save();
        let _ = self.ctx.translate(cx, cy);

        self.draw_slices(geometry, segments, rotation_degrees);
        self.draw_labels(geometry, segments, rotation_degrees);
        self.draw_frame(geometry);

        self.ctx.restore();
    }
}
