//! Error taxonomy for the spin engine
//!
//! None of these are fatal. Each one is either corrected in place
//! (configuration) or leaves the wheel untouched (rejections).

/// Recoverable wheel errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WheelError {
    #[error("Configuration corrected: {0}")]
    Configuration(String),

    #[error("Not enough segments to spin: {count} (need at least 2)")]
    NotEnoughSegments { count: usize },

    #[error("Spin rejected: a spin is already in progress")]
    ConcurrentSpinRejected,

    #[error("No segment labeled {0:?}, falling back to a random segment")]
    TargetNotFound(String),

    #[error("Operation not allowed while spinning")]
    SpinInProgress,
}
