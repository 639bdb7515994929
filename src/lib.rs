//! Slaper - Blocky bounces between platforms
//!
//! Core modules:
//! - `sim`: Deterministic scene logic (charge controller, platform placement, frame tick)
//! - `settings`: Data-driven tuning loaded from JSON
//!
//! Rendering, textures and collision resolution belong to the host engine.

pub mod settings;
pub mod sim;

pub use settings::{FillMode, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Charge added per tick while the touch is held
    pub const FILL_RATE: f32 = 0.01;
    /// Charge removed per tick while idle
    pub const DRAIN_RATE: f32 = 0.01;
    /// Upper bound of the charge fraction
    pub const MAX_CHARGE: f32 = 1.0;

    /// Aim arrow oscillation: angle = sin(t * AIM_FREQUENCY) * AIM_AMPLITUDE
    pub const AIM_FREQUENCY: f32 = 2.0;
    pub const AIM_AMPLITUDE: f32 = 0.5;

    /// Sprite sizing as fractions of frame width
    pub const PLATFORM_WIDTH_FACTOR: f32 = 250.0 * 0.0013;
    pub const PLAYER_WIDTH_FACTOR: f32 = 14.0 * 0.06;

    /// Fixed arrow sprite size (pixels)
    pub const ARROW_SPRITE_SIZE: (f32, f32) = (75.0, 125.0);

    /// Vertical placement as fractions of frame height
    pub const STARTING_PLATFORM_HEIGHT: f32 = 0.125;
    pub const PLATFORM_HEIGHT: f32 = 0.5;

    /// Upper bound on platforms placed beyond the starting one
    pub const MAX_EXTRA_PLATFORMS: u32 = 64;

    /// Gap between stacked sprites (Blocky on platform, arrow above Blocky)
    pub const SPRITE_GAP: f32 = 10.0;

    /// Host frame rate used by the native driver
    pub const FRAME_DT: f32 = 1.0 / 60.0;
}

/// Axis-aligned rectangle in scene coordinates (y up)
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Rectangle anchored at the origin
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(Vec2::ZERO, Vec2::new(width, height))
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}

/// Cosmetic aim oscillation (radians) at scene time `t` seconds
#[inline]
pub fn aim_angle(t: f32) -> f32 {
    (t * consts::AIM_FREQUENCY).sin() * consts::AIM_AMPLITUDE
}
