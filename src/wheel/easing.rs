//! Easing curves for the spin animation

use serde::{Deserialize, Serialize};

/// Maps linear time progress [0, 1] to display progress [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Easing {
    Linear,
    EaseOutCubic,
    #[default]
    EaseOutQuart,
    EaseOutQuint,
}

impl Easing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOutCubic => "easeOutCubic",
            Easing::EaseOutQuart => "easeOutQuart",
            Easing::EaseOutQuint => "easeOutQuint",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "linear" => Some(Easing::Linear),
            "easeoutcubic" | "cubic" => Some(Easing::EaseOutCubic),
            "easeoutquart" | "quart" => Some(Easing::EaseOutQuart),
            "easeoutquint" | "quint" => Some(Easing::EaseOutQuint),
            _ => None,
        }
    }

    /// Ease-out exponent (1 for linear)
    fn power(&self) -> i32 {
        match self {
            Easing::Linear => 1,
            Easing::EaseOutCubic => 3,
            Easing::EaseOutQuart => 4,
            Easing::EaseOutQuint => 5,
        }
    }

    /// `1 - (1 - t)^n`, with `t` clamped to [0, 1]
    #[inline]
    pub fn apply(&self, progress: f64) -> f64 {
        let t = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
        1.0 - (1.0 - t).powi(self.power())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 4] = [
        Easing::Linear,
        Easing::EaseOutCubic,
        Easing::EaseOutQuart,
        Easing::EaseOutQuint,
    ];

    #[test]
    fn test_endpoints() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
            assert_eq!(easing.apply(-3.0), 0.0);
            assert_eq!(easing.apply(7.0), 1.0);
            assert_eq!(easing.apply(f64::NAN), 0.0);
        }
    }

    #[test]
    fn test_monotonic() {
        for easing in ALL {
            let mut last = 0.0;
            for step in 0..=100 {
                let v = easing.apply(step as f64 / 100.0);
                assert!(v >= last, "{:?} not monotonic at step {}", easing, step);
                last = v;
            }
        }
    }

    #[test]
    fn test_ease_out_is_ahead_of_linear() {
        assert!(Easing::EaseOutQuart.apply(0.5) > Easing::EaseOutCubic.apply(0.5));
        assert!(Easing::EaseOutCubic.apply(0.5) > Easing::Linear.apply(0.5));
        assert_eq!(Easing::EaseOutQuart.apply(0.5), 1.0 - 0.0625);
    }

    #[test]
    fn test_names_round_trip() {
        for easing in ALL {
            assert_eq!(Easing::from_str(easing.as_str()), Some(easing));
        }
        assert_eq!(Easing::from_str("ease-out-quint"), Some(Easing::EaseOutQuint));
        assert_eq!(Easing::from_str("bounce"), None);
    }
}
