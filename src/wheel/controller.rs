//! Rotation controller
//!
//! Owns the wheel's rotation and drives one spin at a time:
//! `Idle --spin--> Spinning --advance(progress == 1)--> Idle`.
//!
//! Time only enters through `advance(now_ms)`, which the host calls once per
//! frame. Every accepted spin, cancel and reset bumps a generation counter so
//! a frame callback scheduled for an older spin can be told apart and ignored.

use futures::channel::oneshot;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::completion::SpinCompletion;
use super::config::WheelConfig;
use super::easing::Easing;
use super::error::WheelError;
use super::segment::{Segment, SegmentModel};
use super::state::{SpinPhase, SpinResult, WheelEvent, WheelSnapshot, WheelState};
use super::target::{SpinRequest, resolve_target};
use crate::consts::{FULL_TURN, MIN_SPIN_SEGMENTS};
use crate::normalize_degrees;

/// Geometry of one spin, fixed when the spin is accepted
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpinPlan {
    pub target_index: usize,
    /// Rotation (mod 360) that puts the target's center under the pointer
    pub destination_angle: f64,
    /// Forward correction from the current angle, in (0, 360]
    pub delta: f64,
    /// `min_rotations * 360 + delta`
    pub total_delta: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

/// Handle for an accepted spin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinTicket {
    pub generation: u64,
    pub plan: SpinPlan,
}

/// What `set_segments` did with the new list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentUpdate {
    Applied,
    /// Held until the current spin finishes
    Deferred,
}

#[derive(Debug, Clone)]
struct Animation {
    generation: u64,
    plan: SpinPlan,
    target_label: String,
    /// Latched on the first frame after the spin starts
    started_at: Option<f64>,
    /// Furthest rotation already checked for ticks
    ticked_to: f64,
}

/// The wheel spin engine
#[derive(Debug)]
pub struct Wheel {
    config: WheelConfig,
    segments: SegmentModel,
    state: WheelState,
    animation: Option<Animation>,
    generation: u64,
    rng: Pcg32,
    events: Vec<WheelEvent>,
    pending_segments: Option<Vec<Segment>>,
    /// Waiting `spin_async` caller for the running spin
    completion: Option<oneshot::Sender<SpinResult>>,
}

impl Wheel {
    /// Create an idle wheel with no segments
    pub fn new(config: WheelConfig, seed: u64) -> Self {
        Self {
            config: config.sanitized(),
            segments: SegmentModel::default(),
            state: WheelState::default(),
            animation: None,
            generation: 0,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
            pending_segments: None,
            completion: None,
        }
    }

    pub fn with_segments(config: WheelConfig, seed: u64, segments: Vec<Segment>) -> Self {
        let mut wheel = Self::new(config, seed);
        wheel.set_segments(segments);
        wheel
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn segments(&self) -> &SegmentModel {
        &self.segments
    }

    pub fn wheel_state(&self) -> &WheelState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_spinning(&self) -> bool {
        self.state.is_spinning()
    }

    /// Synchronous snapshot for host UI
    pub fn state(&self) -> WheelSnapshot {
        WheelSnapshot {
            spinning: self.state.is_spinning(),
            last_result: self.state.last_result.clone(),
            angle: self.state.cumulative_rotation,
        }
    }

    /// Segment currently under the pointer
    pub fn current_segment(&self) -> Option<usize> {
        self.segment_at(self.state.cumulative_rotation)
    }

    /// Take all events emitted since the last drain
    pub fn drain_events(&mut self) -> Vec<WheelEvent> {
        std::mem::take(&mut self.events)
    }

    /// Replace the configuration. Only allowed between spins.
    pub fn set_config(&mut self, config: WheelConfig) -> Result<(), WheelError> {
        if self.is_spinning() {
            log::warn!("Config change ignored: {}", WheelError::SpinInProgress);
            return Err(WheelError::SpinInProgress);
        }
        self.config = config.sanitized();
        Ok(())
    }

    /// Replace the whole segment list. Deferred while a spin is running.
    pub fn set_segments(&mut self, segments: Vec<Segment>) -> SegmentUpdate {
        if self.is_spinning() {
            log::debug!("Deferring {} segments until the spin ends", segments.len());
            self.pending_segments = Some(segments);
            return SegmentUpdate::Deferred;
        }
        self.load_segments(segments);
        SegmentUpdate::Applied
    }

    fn load_segments(&mut self, segments: Vec<Segment>) {
        if segments.len() < MIN_SPIN_SEGMENTS {
            log::warn!(
                "{}",
                WheelError::Configuration(format!(
                    "{} segment(s) loaded, spins are disabled until at least {} are set",
                    segments.len(),
                    MIN_SPIN_SEGMENTS
                ))
            );
        }
        log::info!("Loaded {} wheel segments", segments.len());
        self.segments.set_segments(segments);
    }

    /// Start a spin. Rejections leave the wheel untouched.
    pub fn spin(&mut self, request: SpinRequest) -> Result<SpinTicket, WheelError> {
        if self.is_spinning() {
            log::warn!("{}", WheelError::ConcurrentSpinRejected);
            return Err(WheelError::ConcurrentSpinRejected);
        }

        let count = self.segments.len();
        if count < MIN_SPIN_SEGMENTS {
            let err = WheelError::NotEnoughSegments { count };
            log::warn!("{}", err);
            return Err(err);
        }

        let Some(target_index) = resolve_target(&self.segments, &request, &mut self.rng) else {
            return Err(WheelError::NotEnoughSegments { count });
        };
        let target_label = self
            .segments
            .get(target_index)
            .map(|s| s.label.clone())
            .unwrap_or_default();

        let plan = self.plan_spin(target_index);
        self.generation += 1;
        self.state.phase = SpinPhase::Spinning;
        self.animation = Some(Animation {
            generation: self.generation,
            plan,
            target_label: target_label.clone(),
            started_at: None,
            ticked_to: plan.start_angle,
        });

        log::info!(
            "Spin {} started: target {} ({:?}), {:.1}° over {} ms",
            self.generation,
            target_index,
            target_label,
            plan.total_delta,
            plan.duration_ms
        );
        self.events.push(WheelEvent::SpinStart {
            generation: self.generation,
            target_index,
            target_label,
        });

        Ok(SpinTicket {
            generation: self.generation,
            plan,
        })
    }

    /// Start a spin and get a future for its result. Resolves to `None`
    /// right away if the spin is rejected.
    pub fn spin_async(&mut self, request: SpinRequest) -> SpinCompletion {
        match self.spin(request) {
            Ok(_) => {
                let (tx, completion) = SpinCompletion::channel();
                self.completion = Some(tx);
                completion
            }
            Err(_) => SpinCompletion::rejected(),
        }
    }

    /// Compute where a spin to `target_index` must end
    fn plan_spin(&self, target_index: usize) -> SpinPlan {
        let config = &self.config;
        let center = self.segments.center_angle(target_index, config.zero_angle_degrees, config.winding);
        let destination_angle = normalize_degrees(config.pointer_angle_degrees - center);

        let current = normalize_degrees(self.state.cumulative_rotation);
        let mut delta = normalize_degrees(destination_angle - current);
        if delta <= 0.0 {
            delta += FULL_TURN;
        }
        let total_delta = config.min_rotations as f64 * FULL_TURN + delta;

        SpinPlan {
            target_index,
            destination_angle,
            delta,
            total_delta,
            start_angle: self.state.cumulative_rotation,
            end_angle: self.state.cumulative_rotation + total_delta,
            duration_ms: config.spin_duration_ms,
            easing: config.easing,
        }
    }

    /// Advance the animation to `now_ms`. Returns `true` while still spinning.
    pub fn advance(&mut self, now_ms: f64) -> bool {
        let Some(animation) = self.animation.as_mut() else {
            return false;
        };

        let started_at = *animation.started_at.get_or_insert(now_ms);
        let plan = animation.plan;
        let elapsed = (now_ms - started_at).max(0.0);
        let progress = (elapsed / plan.duration_ms).clamp(0.0, 1.0);

        let angle = if progress >= 1.0 {
            plan.end_angle
        } else {
            plan.start_angle + (plan.end_angle - plan.start_angle) * plan.easing.apply(progress)
        };
        let previous = animation.ticked_to;
        animation.ticked_to = previous.max(angle);
        self.state.cumulative_rotation = angle;

        if self.config.emit_ticks {
            self.emit_ticks(previous, angle);
        }

        if progress >= 1.0 {
            self.finish_spin();
            return false;
        }
        true
    }

    /// Like `advance`, but a no-op for frame callbacks from an older spin
    pub fn advance_generation(&mut self, generation: u64, now_ms: f64) -> bool {
        if generation != self.generation {
            log::debug!("Dropping stale frame for spin {} (live: {})", generation, self.generation);
            return false;
        }
        self.advance(now_ms)
    }

    /// One `Tick` per segment boundary that passed the pointer
    fn emit_ticks(&mut self, from: f64, to: f64) {
        if to <= from {
            return;
        }
        let span = self.segments.segment_angle();
        let phase = self.config.pointer_angle_degrees - self.config.zero_angle_degrees;
        let boundaries = |rotation: f64| ((rotation - phase) / span).floor() as i64;

        for boundary in (boundaries(from) + 1)..=boundaries(to) {
            // Middle of the segment just entered
            let rotation = phase + boundary as f64 * span + span / 2.0;
            if let Some(segment_index) = self.segment_at(rotation) {
                log::debug!("Tick: segment {}", segment_index);
                self.events.push(WheelEvent::Tick { segment_index });
            }
        }
    }

    fn segment_at(&self, rotation: f64) -> Option<usize> {
        self.segments.segment_at_rotation(
            rotation,
            self.config.pointer_angle_degrees,
            self.config.zero_angle_degrees,
            self.config.winding,
        )
    }

    fn finish_spin(&mut self) {
        let Some(animation) = self.animation.take() else {
            return;
        };

        self.state.phase = SpinPhase::Idle;
        self.state.cumulative_rotation = normalize_degrees(self.state.cumulative_rotation);

        let target_index = animation.plan.target_index;
        let landed = self.current_segment();
        if landed != Some(target_index) {
            log::warn!(
                "Spin {} landed under segment {:?} but targeted {}; reporting the target",
                animation.generation,
                landed,
                target_index
            );
        }

        let result = SpinResult {
            index: target_index,
            label: animation.target_label,
        };
        log::info!(
            "Spin {} finished on {} ({:?}) at {:.2}°",
            animation.generation,
            result.index,
            result.label,
            self.state.cumulative_rotation
        );

        self.state.last_result = Some(result.clone());
        self.events.push(WheelEvent::SpinEnd(result.clone()));
        if let Some(tx) = self.completion.take() {
            if tx.send(result).is_err() {
                log::debug!("Spin {} finished with nobody awaiting it", animation.generation);
            }
        }
        self.apply_pending_segments();
    }

    /// Abort a running spin, leaving the wheel where it is.
    /// Returns `false` if nothing was spinning.
    pub fn cancel(&mut self) -> bool {
        let Some(animation) = self.animation.take() else {
            return false;
        };

        self.generation += 1;
        self.state.phase = SpinPhase::Idle;
        self.state.cumulative_rotation = normalize_degrees(self.state.cumulative_rotation);
        log::info!("Spin {} cancelled at {:.2}°", animation.generation, self.state.cumulative_rotation);

        self.events.push(WheelEvent::SpinCancelled {
            generation: animation.generation,
        });
        // Dropping the sender resolves any waiting caller with `None`
        self.completion = None;
        self.apply_pending_segments();
        true
    }

    /// Return to the initial rotation. Only allowed between spins.
    pub fn reset(&mut self) -> Result<(), WheelError> {
        if self.is_spinning() {
            log::warn!("Reset ignored: {}", WheelError::SpinInProgress);
            return Err(WheelError::SpinInProgress);
        }
        self.generation += 1;
        self.animation = None;
        self.state.cumulative_rotation = 0.0;
        self.state.last_result = None;
        Ok(())
    }

    fn apply_pending_segments(&mut self) {
        if let Some(segments) = self.pending_segments.take() {
            self.load_segments(segments);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel::segment::Winding;
    use proptest::prelude::*;
    use std::future::Future;
    use std::pin::Pin;
    use std::task::{Context, Poll, Waker};

    fn labels(count: usize) -> Vec<Segment> {
        (0..count)
            .map(|i| Segment::labeled(((b'A' + i as u8) as char).to_string(), i))
            .collect()
    }

    fn six_wheel(min_rotations: u32) -> Wheel {
        let config = WheelConfig {
            min_rotations,
            ..WheelConfig::default()
        };
        Wheel::with_segments(config, 12345, labels(6))
    }

    /// Drive a spin to completion with 60 Hz frames starting at `t0`
    fn run_to_end(wheel: &mut Wheel, t0: f64) -> f64 {
        let mut t = t0;
        while wheel.advance(t) {
            t += 1000.0 / 60.0;
        }
        t
    }

    #[test]
    fn test_concrete_scenario_target_c() {
        let mut wheel = six_wheel(3);
        let ticket = wheel.spin(SpinRequest::index(2)).unwrap();

        assert_eq!(ticket.plan.destination_angle, 120.0);
        assert_eq!(ticket.plan.delta, 120.0);
        assert_eq!(ticket.plan.total_delta, 3.0 * 360.0 + 120.0);
        assert_eq!(ticket.plan.start_angle, 0.0);
        assert_eq!(ticket.plan.end_angle, 1200.0);

        run_to_end(&mut wheel, 0.0);

        let state = wheel.state();
        assert!(!state.spinning);
        assert_eq!(state.angle, 120.0);
        assert_eq!(
            state.last_result,
            Some(SpinResult {
                index: 2,
                label: "C".into()
            })
        );
    }

    #[test]
    fn test_repeat_spin_uses_normalized_angle() {
        let mut wheel = six_wheel(3);
        let first = wheel.spin(SpinRequest::index(0)).unwrap();
        assert_eq!(first.plan.delta, 240.0);
        run_to_end(&mut wheel, 0.0);
        assert_eq!(wheel.state().angle, 240.0);

        let second = wheel.spin(SpinRequest::index(0)).unwrap();
        assert_eq!(second.plan.start_angle, 240.0);
        // Already aligned: the zero correction becomes a full extra turn
        assert_eq!(second.plan.delta, 360.0);
        assert_eq!(second.plan.total_delta, 4.0 * 360.0);
        run_to_end(&mut wheel, 10_000.0);

        assert_eq!(wheel.state().angle, 240.0);
        assert_eq!(wheel.state().last_result.map(|r| r.index), Some(0));
    }

    #[test]
    fn test_two_segments_one_rotation() {
        let config = WheelConfig {
            min_rotations: 1,
            ..WheelConfig::default()
        };
        let mut wheel = Wheel::with_segments(config, 1, labels(2));
        for target in [1, 0, 0, 1] {
            let ticket = wheel.spin(SpinRequest::index(target)).unwrap();
            assert!(ticket.plan.total_delta >= 360.0);
            run_to_end(&mut wheel, 0.0);
            assert_eq!(wheel.state().last_result.map(|r| r.index), Some(target as usize));
            assert_eq!(wheel.current_segment(), Some(target as usize));
        }
    }

    #[test]
    fn test_spin_while_spinning_is_rejected() {
        let mut wheel = six_wheel(3);
        wheel.spin(SpinRequest::index(1)).unwrap();
        run_to_end(&mut wheel, 0.0);
        let before = wheel.state().last_result;

        let ticket = wheel.spin(SpinRequest::index(4)).unwrap();
        wheel.advance(0.0);
        wheel.advance(100.0);
        assert_eq!(wheel.spin(SpinRequest::index(5)), Err(WheelError::ConcurrentSpinRejected));
        assert_eq!(wheel.generation(), ticket.generation);
        assert_eq!(wheel.state().last_result, before);

        run_to_end(&mut wheel, 200.0);
        assert_eq!(wheel.state().last_result.map(|r| r.index), Some(4));

        let starts = wheel
            .drain_events()
            .iter()
            .filter(|e| matches!(e, WheelEvent::SpinStart { .. }))
            .count();
        assert_eq!(starts, 2);
    }

    #[test]
    fn test_not_enough_segments() {
        let mut wheel = Wheel::with_segments(WheelConfig::default(), 1, labels(1));
        assert_eq!(
            wheel.spin(SpinRequest::random()),
            Err(WheelError::NotEnoughSegments { count: 1 })
        );
        assert!(!wheel.is_spinning());
        assert!(wheel.drain_events().is_empty());

        let mut empty = Wheel::new(WheelConfig::default(), 1);
        assert_eq!(
            empty.spin(SpinRequest::index(0)),
            Err(WheelError::NotEnoughSegments { count: 0 })
        );
    }

    #[test]
    fn test_event_order_and_ticks() {
        let mut wheel = six_wheel(3);
        wheel.spin(SpinRequest::index(2)).unwrap();
        run_to_end(&mut wheel, 0.0);
        let events = wheel.drain_events();

        assert!(matches!(
            events.first(),
            Some(WheelEvent::SpinStart { target_index: 2, .. })
        ));
        assert!(matches!(events.last(), Some(WheelEvent::SpinEnd(r)) if r.index == 2));

        let ticks: Vec<usize> = events[1..events.len() - 1]
            .iter()
            .map(|e| match e {
                WheelEvent::Tick { segment_index } => *segment_index,
                other => panic!("unexpected event {:?}", other),
            })
            .collect();

        // 0° -> 1200° with boundaries every 60° offset by the 270° pointer
        assert_eq!(ticks.len(), 20);
        assert_eq!(ticks.last(), Some(&2));
        // Clockwise wheel turning forward walks indices downward
        for pair in ticks.windows(2) {
            assert_eq!(pair[1], (pair[0] + 5) % 6);
        }
    }

    #[test]
    fn test_ticks_counter_clockwise_and_moved_origins() {
        use crate::wheel::config::WheelSkin;

        // (skin, target, expected tick count)
        let cases = [(WheelSkin::TopStart, 2, 20), (WheelSkin::RightPointer, 4, 22)];
        for (skin, target, expected) in cases {
            let config = WheelConfig {
                winding: Winding::CounterClockwise,
                ..WheelConfig::from_skin(skin)
            };
            let mut wheel = Wheel::with_segments(config, 9, labels(6));
            wheel.spin(SpinRequest::index(target as i64)).unwrap();
            run_to_end(&mut wheel, 0.0);

            let ticks: Vec<usize> = wheel
                .drain_events()
                .into_iter()
                .filter_map(|e| match e {
                    WheelEvent::Tick { segment_index } => Some(segment_index),
                    _ => None,
                })
                .collect();

            assert_eq!(ticks.len(), expected, "{:?}", skin);
            assert_eq!(ticks.last(), Some(&target), "{:?}", skin);
            // Counter-clockwise wheel turning forward walks indices upward
            for pair in ticks.windows(2) {
                assert_eq!(pair[1], (pair[0] + 1) % 6, "{:?}", skin);
            }
            assert_eq!(wheel.current_segment(), Some(target));
        }
    }

    #[test]
    fn test_ticks_do_not_depend_on_frame_rate() {
        let collect_ticks = |wheel: &mut Wheel| -> Vec<WheelEvent> {
            wheel
                .drain_events()
                .into_iter()
                .filter(|e| matches!(e, WheelEvent::Tick { .. }))
                .collect()
        };

        let mut smooth = six_wheel(4);
        smooth.spin(SpinRequest::index(3)).unwrap();
        run_to_end(&mut smooth, 0.0);

        let mut choppy = six_wheel(4);
        choppy.spin(SpinRequest::index(3)).unwrap();
        choppy.advance(0.0);
        choppy.advance(1234.0);
        choppy.advance(5000.0);

        assert_eq!(collect_ticks(&mut smooth), collect_ticks(&mut choppy));
    }

    #[test]
    fn test_ticks_can_be_disabled() {
        let config = WheelConfig {
            emit_ticks: false,
            ..WheelConfig::default()
        };
        let mut wheel = Wheel::with_segments(config, 1, labels(6));
        wheel.spin(SpinRequest::index(1)).unwrap();
        run_to_end(&mut wheel, 0.0);
        assert_eq!(wheel.drain_events().len(), 2);
    }

    #[test]
    fn test_start_time_latches_on_first_frame() {
        let mut wheel = six_wheel(3);
        let ticket = wheel.spin(SpinRequest::index(2)).unwrap();

        assert!(wheel.advance(50_000.0));
        assert_eq!(wheel.state().angle, 0.0);

        assert!(wheel.advance(51_500.0));
        let mid = wheel.state().angle;
        assert!(mid > 0.0 && mid < ticket.plan.end_angle);

        // Clock going backwards never rewinds past the start
        assert!(wheel.advance(10.0));
        assert_eq!(wheel.state().angle, 0.0);

        assert!(!wheel.advance(53_000.0));
        assert_eq!(wheel.state().angle, 120.0);
    }

    #[test]
    fn test_stale_generation_is_ignored() {
        let mut wheel = six_wheel(3);
        let old = wheel.spin(SpinRequest::index(1)).unwrap();
        wheel.advance(0.0);
        assert!(wheel.cancel());
        let frozen = wheel.state();

        assert!(!wheel.advance_generation(old.generation, 3000.0));
        assert_eq!(wheel.state(), frozen);

        let fresh = wheel.spin(SpinRequest::index(3)).unwrap();
        assert!(!wheel.advance_generation(old.generation, 0.0));
        assert!(wheel.advance_generation(fresh.generation, 0.0));
        assert!(!wheel.advance_generation(fresh.generation, 3000.0));
        assert_eq!(wheel.state().last_result.map(|r| r.index), Some(3));
    }

    #[test]
    fn test_cancel_mid_spin() {
        let mut wheel = six_wheel(3);
        let mut completion = wheel.spin_async(SpinRequest::index(5));
        wheel.advance(0.0);
        wheel.advance(1000.0);
        assert!(wheel.cancel());

        let state = wheel.state();
        assert!(!state.spinning);
        assert!(state.angle >= 0.0 && state.angle < 360.0);
        assert_eq!(state.last_result, None);
        assert!(matches!(
            wheel.drain_events().last(),
            Some(WheelEvent::SpinCancelled { .. })
        ));

        let mut cx = Context::from_waker(Waker::noop());
        assert_eq!(Pin::new(&mut completion).poll(&mut cx), Poll::Ready(None));
        assert!(!wheel.cancel());
    }

    #[test]
    fn test_reset() {
        let mut wheel = six_wheel(3);
        wheel.spin(SpinRequest::index(2)).unwrap();
        assert_eq!(wheel.reset(), Err(WheelError::SpinInProgress));

        run_to_end(&mut wheel, 0.0);
        wheel.drain_events();
        assert_eq!(wheel.reset(), Ok(()));

        let state = wheel.state();
        assert_eq!(state.angle, 0.0);
        assert_eq!(state.last_result, None);
        assert!(wheel.drain_events().is_empty());
    }

    #[test]
    fn test_segments_deferred_while_spinning() {
        let mut wheel = six_wheel(3);
        wheel.spin(SpinRequest::index(2)).unwrap();
        wheel.advance(0.0);

        let replacement = vec![Segment::labeled("Tote", 0), Segment::labeled("Mug", 1)];
        assert_eq!(wheel.set_segments(replacement), SegmentUpdate::Deferred);
        assert_eq!(wheel.segments().len(), 6);

        run_to_end(&mut wheel, 0.0);
        assert_eq!(wheel.state().last_result.map(|r| r.label), Some("C".to_string()));
        assert_eq!(wheel.segments().len(), 2);
        assert_eq!(wheel.set_segments(labels(3)), SegmentUpdate::Applied);
        assert_eq!(wheel.segments().len(), 3);
    }

    #[test]
    fn test_set_config_only_when_idle() {
        let mut wheel = six_wheel(3);
        wheel.spin(SpinRequest::random()).unwrap();
        assert_eq!(wheel.set_config(WheelConfig::default()), Err(WheelError::SpinInProgress));
        run_to_end(&mut wheel, 0.0);

        let config = WheelConfig {
            spin_duration_ms: 50.0,
            ..WheelConfig::default()
        };
        assert_eq!(wheel.set_config(config), Ok(()));
        assert_eq!(wheel.config().spin_duration_ms, 500.0);
    }

    #[test]
    fn test_spin_async_resolves_on_end() {
        let mut wheel = six_wheel(3);
        let mut completion = wheel.spin_async(SpinRequest::label("e"));
        let mut cx = Context::from_waker(Waker::noop());
        assert!(Pin::new(&mut completion).poll(&mut cx).is_pending());

        run_to_end(&mut wheel, 0.0);
        assert_eq!(
            Pin::new(&mut completion).poll(&mut cx),
            Poll::Ready(Some(SpinResult {
                index: 4,
                label: "E".into()
            }))
        );

        // Rejected spins resolve immediately and empty
        let mut lonely = Wheel::with_segments(WheelConfig::default(), 1, labels(1));
        let mut rejected = lonely.spin_async(SpinRequest::random());
        assert_eq!(Pin::new(&mut rejected).poll(&mut cx), Poll::Ready(None));
    }

    #[test]
    fn test_rejected_spin_keeps_running_completion() {
        let mut wheel = six_wheel(3);
        let mut cx = Context::from_waker(Waker::noop());
        let mut first = wheel.spin_async(SpinRequest::index(1));
        let mut second = wheel.spin_async(SpinRequest::index(4));
        assert_eq!(Pin::new(&mut second).poll(&mut cx), Poll::Ready(None));
        assert!(Pin::new(&mut first).poll(&mut cx).is_pending());

        run_to_end(&mut wheel, 0.0);
        assert_eq!(
            Pin::new(&mut first).poll(&mut cx),
            Poll::Ready(Some(SpinResult {
                index: 1,
                label: "B".into()
            }))
        );
    }

    #[test]
    fn test_seeded_random_spins_are_reproducible() {
        let mut a = six_wheel(3);
        let mut b = six_wheel(3);
        for round in 0..10 {
            let ta = a.spin(SpinRequest::random()).unwrap();
            let tb = b.spin(SpinRequest::random()).unwrap();
            assert_eq!(ta.plan, tb.plan, "diverged at round {}", round);
            run_to_end(&mut a, 0.0);
            run_to_end(&mut b, 0.0);
        }
    }

    fn any_winding() -> impl Strategy<Value = Winding> {
        prop_oneof![Just(Winding::Clockwise), Just(Winding::CounterClockwise)]
    }

    proptest! {
        #[test]
        fn prop_lands_on_requested_index(
            count in 2usize..24,
            picks in prop::collection::vec(any::<prop::sample::Index>(), 1..6),
            min_rotations in 1u32..6,
            pointer in 0.0f64..360.0,
            zero in 0.0f64..360.0,
            winding in any_winding(),
        ) {
            let config = WheelConfig {
                min_rotations,
                pointer_angle_degrees: pointer,
                zero_angle_degrees: zero,
                winding,
                ..WheelConfig::default()
            };
            let mut wheel = Wheel::with_segments(config, 9, labels(count));

            for pick in picks {
                let target = pick.index(count);
                let before = wheel.state().angle;
                let ticket = wheel.spin(SpinRequest::index(target as i64)).unwrap();

                prop_assert!(ticket.plan.total_delta >= min_rotations as f64 * 360.0);
                prop_assert!(ticket.plan.delta > 0.0 && ticket.plan.delta <= 360.0);
                prop_assert_eq!(ticket.plan.start_angle, before);

                run_to_end(&mut wheel, 0.0);
                let state = wheel.state();
                prop_assert_eq!(state.last_result.map(|r| r.index), Some(target));
                prop_assert!(state.angle >= 0.0 && state.angle < 360.0);
                prop_assert_eq!(state.angle, normalize_degrees(ticket.plan.end_angle));
                prop_assert_eq!(wheel.current_segment(), Some(target));
            }
        }
    }
}
