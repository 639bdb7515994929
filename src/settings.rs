//! Scene tuning and preferences
//!
//! Persisted as a JSON file next to the binary (or wherever the host points).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DRAIN_RATE, FILL_RATE, MAX_EXTRA_PLATFORMS};

/// How charge fill/drain rates are applied each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FillMode {
    /// Flat increment per tick call. Charge speed follows the host frame rate.
    #[default]
    PerTick,
    /// Increment scaled by elapsed time, calibrated so 60 Hz matches `PerTick`
    Realtime,
}

impl FillMode {
    /// Frame rate at which both modes fill at the same speed
    pub const REFERENCE_TICK_RATE: f32 = 60.0;

    pub fn as_str(&self) -> &'static str {
        match self {
            FillMode::PerTick => "PerTick",
            FillMode::Realtime => "Realtime",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pertick" | "per-tick" | "tick" => Some(FillMode::PerTick),
            "realtime" | "real-time" | "time" => Some(FillMode::Realtime),
            _ => None,
        }
    }

    /// Multiplier applied to the configured rate for a tick lasting `dt` seconds
    pub fn step_scale(&self, dt: f32) -> f32 {
        match self {
            FillMode::PerTick => 1.0,
            FillMode::Realtime => dt.max(0.0) * Self::REFERENCE_TICK_RATE,
        }
    }
}

/// Scene settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed for platform placement
    pub seed: u64,

    // === Charge ===
    /// Charge gained per tick while held
    pub fill_rate: f32,
    /// Charge lost per tick while idle
    pub drain_rate: f32,
    /// Rate application mode
    pub fill_mode: FillMode,

    // === Scene ===
    /// Platforms placed in addition to the starting one
    pub extra_platforms: u32,
    /// Host frame size used by the native driver (pixels)
    pub frame_width: f32,
    pub frame_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0x5EED,

            fill_rate: FILL_RATE,
            drain_rate: DRAIN_RATE,
            fill_mode: FillMode::PerTick,

            extra_platforms: 1,
            frame_width: 750.0,
            frame_height: 1334.0,
        }
    }
}

impl Settings {
    /// Settings with the given placement seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Replace rates, frame sizes and counts that would break clamping or placement
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !self.fill_rate.is_finite() || self.fill_rate < 0.0 {
            log::warn!("Invalid fill_rate {}, using {}", self.fill_rate, defaults.fill_rate);
            self.fill_rate = defaults.fill_rate;
        }
        if !self.drain_rate.is_finite() || self.drain_rate < 0.0 {
            log::warn!("Invalid drain_rate {}, using {}", self.drain_rate, defaults.drain_rate);
            self.drain_rate = defaults.drain_rate;
        }
        if !self.frame_width.is_finite() || self.frame_width <= 0.0 {
            log::warn!("Invalid frame_width {}, using {}", self.frame_width, defaults.frame_width);
            self.frame_width = defaults.frame_width;
        }
        if !self.frame_height.is_finite() || self.frame_height <= 0.0 {
            log::warn!(
                "Invalid frame_height {}, using {}",
                self.frame_height,
                defaults.frame_height
            );
            self.frame_height = defaults.frame_height;
        }
        if self.extra_platforms > MAX_EXTRA_PLATFORMS {
            log::warn!(
                "extra_platforms {} too large, using {}",
                self.extra_platforms,
                MAX_EXTRA_PLATFORMS
            );
            self.extra_platforms = MAX_EXTRA_PLATFORMS;
        }
        self
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Malformed settings in {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Could not read {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings as pretty JSON
    pub fn save_to(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }
}
