//! Prize Wheel entry point
//!
//! Browser: mounts the wheel on `#wheel-canvas` and drives it from
//! animation frames. Native: runs a headless demo spin.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_wheel {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlButtonElement, HtmlCanvasElement};

    use prize_wheel::Settings;
    use prize_wheel::audio::AudioManager;
    use prize_wheel::renderer::canvas::CanvasSurface;
    use prize_wheel::renderer::{RenderSurface, WheelGeometry};
    use prize_wheel::wheel::{Segment, SegmentModel, SpinRequest, Wheel, WheelConfig, WheelEvent};

    const DEFAULT_PRIZES: [&str; 6] = ["Free Tote", "Demo Call", "10% Off", "Coffee", "Booth Audit", "Sticker Pack"];

    /// Page-level wheel instance
    struct Host {
        wheel: Wheel,
        surface: CanvasSurface,
        radius: f64,
        audio: AudioManager,
    }

    impl Host {
        fn redraw(&mut self) {
            let rotation = self.wheel.state().angle;
            let geometry = WheelGeometry::new(self.radius, self.wheel.config());
            self.surface
                .draw_wheel(&geometry, self.wheel.segments(), rotation);
        }

        /// Play cues for everything the wheel emitted since last frame
        fn flush_events(&mut self) {
            for event in self.wheel.drain_events() {
                self.audio.play_event(&event);
                if let WheelEvent::SpinStart { target_label, .. } = &event {
                    log::debug!("Spinning toward {:?}", target_label);
                }
            }
        }
    }

    fn document() -> Option<web_sys::Document> {
        web_sys::window()?.document()
    }

    /// Read `data-wheel-segments` (JSON array of segments) or fall back to defaults
    fn load_segments(canvas: &HtmlCanvasElement) -> Vec<Segment> {
        canvas
            .dataset()
            .get("wheelSegments")
            .and_then(|json| match serde_json::from_str::<Vec<Segment>>(&json) {
                Ok(segments) => Some(segments),
                Err(e) => {
                    log::warn!("Ignoring data-wheel-segments: {}", e);
                    None
                }
            })
            .unwrap_or_else(|| SegmentModel::from_labels(&DEFAULT_PRIZES).segments().to_vec())
    }

    /// Target requested by the button's `data-target-index` / `data-target-label`
    fn button_request(button: &HtmlButtonElement) -> SpinRequest {
        let data = button.dataset();
        SpinRequest {
            target_index: data.get("targetIndex").and_then(|v| v.trim().parse::<f64>().ok()),
            target_label: data.get("targetLabel").filter(|v| !v.is_empty()),
        }
    }

    fn set_status(text: &str) {
        if let Some(el) = document().and_then(|d| d.get_element_by_id("wheel-result")) {
            el.set_text_content(Some(text));
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Prize wheel starting...");

        let Some(document) = document() else {
            log::error!("No document, wheel not mounted");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("wheel-canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::warn!("No #wheel-canvas on this page, wheel not mounted");
            return;
        };

        let mut config = canvas
            .dataset()
            .get("wheelConfig")
            .map(|json| WheelConfig::from_json(&json))
            .unwrap_or_default();
        let settings = Settings::load();
        settings.apply_to(&mut config);

        let Some(surface) = CanvasSurface::new(canvas.clone()) else {
            log::error!("Canvas 2D context unavailable");
            return;
        };

        let mut audio = AudioManager::new();
        audio.set_volume(settings.effective_volume());
        audio.set_muted(!settings.sound_enabled);

        let seed = js_sys::Date::now() as u64;
        let radius = surface.fit_radius();
        let wheel = Wheel::with_segments(config, seed, load_segments(&canvas));
        let host = Rc::new(RefCell::new(Host {
            wheel,
            surface,
            radius,
            audio,
        }));
        host.borrow_mut().redraw();

        setup_spin_button(host.clone());
        setup_unmount(host);

        log::info!("Prize wheel ready (seed {})", seed);
    }

    fn setup_spin_button(host: Rc<RefCell<Host>>) {
        let Some(button) = document()
            .and_then(|d| d.get_element_by_id("spin-btn"))
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
        else {
            log::warn!("No #spin-btn, wheel can only be spun programmatically");
            return;
        };

        let button_clone = button.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            let mut h = host.borrow_mut();
            if h.wheel.is_spinning() {
                return;
            }
            h.audio.resume();

            let completion = h.wheel.spin_async(button_request(&button_clone));
            if !h.wheel.is_spinning() {
                // Rejected (e.g. fewer than two segments)
                return;
            }
            let generation = h.wheel.generation();
            drop(h);

            button_clone.set_disabled(true);
            set_status("Spinning...");
            request_animation_frame(host.clone(), generation);

            let button = button_clone.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match completion.await {
                    Some(result) => set_status(&result.announcement()),
                    None => set_status(""),
                }
                button.set_disabled(false);
            });
        });
        let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Cancel a running spin when the page goes away
    fn setup_unmount(host: Rc<RefCell<Host>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if let Ok(mut h) = host.try_borrow_mut() {
                if h.wheel.cancel() {
                    h.flush_events();
                }
            }
        });
        let _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(host: Rc<RefCell<Host>>, generation: u64) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |time: f64| {
            frame(host, generation, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame(host: Rc<RefCell<Host>>, generation: u64, time: f64) {
        let still_spinning = {
            let mut h = host.borrow_mut();
            let running = h.wheel.advance_generation(generation, time);
            h.flush_events();
            h.redraw();
            running
        };

        if still_spinning {
            request_animation_frame(host, generation);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_wheel::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Prize wheel (native) starting...");
    log::info!("Native mode runs a headless demo - serve the wasm build for the real widget");

    demo_spin();
    demo_lead();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn demo_spin() {
    use prize_wheel::wheel::{SegmentModel, SpinRequest, Wheel, WheelConfig, WheelEvent};

    let segments = SegmentModel::from_labels(&["A", "B", "C", "D", "E", "F"]);
    let mut wheel = Wheel::with_segments(WheelConfig::default(), 2024, segments.segments().to_vec());

    for request in [SpinRequest::index(2), SpinRequest::label("f"), SpinRequest::random()] {
        let ticket = match wheel.spin(request) {
            Ok(ticket) => ticket,
            Err(e) => {
                log::warn!("Demo spin rejected: {}", e);
                continue;
            }
        };
        println!(
            "spin {}: target {} (+{:.0}°)",
            ticket.generation, ticket.plan.target_index, ticket.plan.total_delta
        );

        // Synthetic 60 Hz clock
        let mut now = 0.0;
        while wheel.advance(now) {
            now += 1000.0 / 60.0;
        }

        let ticks = wheel
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, WheelEvent::Tick { .. }))
            .count();
        if let Some(result) = wheel.state().last_result {
            println!(
                "  {} ({} ticks, resting at {:.1}°)",
                result.announcement(),
                ticks,
                wheel.state().angle
            );
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn demo_lead() {
    use prize_wheel::lead::{LeadIntake, LeadSubmission, LogNotifier, MemoryLeadStore};

    let mut intake = LeadIntake::new(MemoryLeadStore::default(), LogNotifier);
    let submission = LeadSubmission {
        name: "Sam Ortiz".into(),
        email: "sam@example.com".into(),
        company: "Ortiz Exhibits".into(),
        next_show: Some("IMEX".into()),
        notes: None,
    };
    match intake.submit(&submission) {
        Ok(receipt) => println!("lead accepted: {:?}", receipt),
        Err(e) => println!("lead rejected: {}", e),
    }
}
