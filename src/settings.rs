//! Game settings and preferences
//!
//! Persisted in LocalStorage on the web. Gameplay constants are not
//! configurable; only presentation and run seeding are.

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Silence all sound effects
    pub muted: bool,

    // === HUD ===
    /// Show the speed-up toast
    pub notifications: bool,

    // === Debug ===
    /// Fixed run seed; a fresh seed is used per run when unset
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            notifications: true,
            seed: None,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "block_dodge_settings";

    /// Combined effect volume after mute
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        }
    }

    /// Seed for a new run: the fixed seed if set, otherwise `fresh`
    pub fn run_seed(&self, fresh: u64) -> u64 {
        self.seed.unwrap_or(fresh)
    }

    /// Parse stored JSON, falling back to defaults for anything unreadable
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring invalid settings: {}", e);
                Self::default()
            }
        }
    }

    /// Encode for storage
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    #[cfg(target_arch = "wasm32")]
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    /// Load settings from LocalStorage, or defaults when nothing is stored
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let Some(storage) = Self::storage() else {
            log::warn!("LocalStorage unavailable, using default settings");
            return Self::default();
        };

        match storage.get_item(Self::STORAGE_KEY) {
            Ok(Some(json)) => {
                log::info!("Loaded settings from LocalStorage");
                Self::from_json(&json)
            }
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("Failed to read settings: {:?}", e);
                Self::default()
            }
        }
    }

    /// Persist to LocalStorage; failures are logged and otherwise ignored
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let Some(storage) = Self::storage() else {
            log::warn!("LocalStorage unavailable, settings not saved");
            return;
        };

        let json = match self.to_json() {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to encode settings: {}", e);
                return;
            }
        };

        match storage.set_item(Self::STORAGE_KEY, &json) {
            Ok(()) => log::debug!("Settings saved (muted: {})", self.muted),
            Err(e) => log::warn!("Failed to save settings: {:?}", e),
        }
    }

    /// Native runs have no persistent store
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        log::debug!("Settings are not persisted on native builds");
    }
}
