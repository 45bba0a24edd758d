//! Wheel spin engine
//!
//! Everything that decides where the wheel lands lives here. This module must
//! stay host-agnostic:
//! - Time only enters through `Wheel::advance`
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod completion;
pub mod config;
pub mod controller;
pub mod easing;
pub mod error;
pub mod segment;
pub mod state;
pub mod target;

pub use completion::SpinCompletion;
pub use config::{WheelConfig, WheelConfigInput, WheelSkin};
pub use controller::{SegmentUpdate, SpinPlan, SpinTicket, Wheel};
pub use easing::Easing;
pub use error::WheelError;
pub use segment::{Segment, SegmentModel, Winding};
pub use state::{SpinPhase, SpinResult, WheelEvent, WheelSnapshot, WheelState};
pub use target::{SpinRequest, resolve_target};
