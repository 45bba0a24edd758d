//! Visitor preferences
//!
//! Persisted in LocalStorage. Spin outcomes are never stored here.

use serde::{Deserialize, Serialize};

use crate::consts::MIN_SPIN_DURATION_MS;
use crate::wheel::{Easing, WheelConfig};

/// Visitor settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Tick and result sounds
    pub sound_enabled: bool,
    /// Volume (0.0 - 1.0)
    pub volume: f32,

    // === Accessibility ===
    /// Reduced motion (shortest spin, no easing flourish)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            volume: 0.8,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective volume (0 when sound is off)
    pub fn effective_volume(&self) -> f32 {
        if self.sound_enabled {
            self.volume.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Adjust a wheel config for these preferences
    pub fn apply_to(&self, config: &mut WheelConfig) {
        if self.reduced_motion {
            config.spin_duration_ms = MIN_SPIN_DURATION_MS;
            config.easing = Easing::Linear;
            config.min_rotations = 1;
        }
    }

    /// LocalStorage key
    const STORAGE_KEY: &'static str = "prize_wheel_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let Some(storage) = local_storage() else {
            return Self::default();
        };
        match storage.get_item(Self::STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::debug!("Visitor settings restored");
                    settings
                }
                Err(e) => {
                    log::warn!("Discarding stored settings: {}", e);
                    Self::default()
                }
            },
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("Settings read failed: {:?}", e);
                Self::default()
            }
        }
    }

    /// Serialize and hand to `write(key, json)`. Returns whether it stuck.
    pub fn save_with<E: std::fmt::Debug>(&self, write: impl FnOnce(&str, &str) -> Result<(), E>) -> bool {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Settings not serializable: {}", e);
                return false;
            }
        };
        match write(Self::STORAGE_KEY, &json) {
            Ok(()) => {
                log::debug!("Visitor settings saved");
                true
            }
            Err(e) => {
                log::warn!("Settings write failed: {:?}", e);
                false
            }
        }
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let Some(storage) = local_storage() else {
            log::warn!("LocalStorage unavailable, settings not saved");
            return;
        };
        self.save_with(|key, json| storage.set_item(key, json));
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
