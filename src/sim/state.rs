//! Scene state and core simulation types
//!
//! Everything the scene owns between frames lives here. Sprites and physics
//! bodies are owned by the host engine and only described by these types.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::charge::ChargeLaunchController;
use super::placement::place_platform;
use crate::Rect;
use crate::consts::*;
use crate::settings::Settings;

/// Charge controller phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChargePhase {
    /// No touch held
    Idle,
    /// Touch held, charge filling
    Charging,
}

/// Charge held between frames
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChargeState {
    /// True only between a touch start and its touch end
    pub is_charging: bool,
    /// Accumulated launch power, always in [0, 1]
    pub charge_level: f32,
}

impl ChargeState {
    pub fn phase(&self) -> ChargePhase {
        if self.is_charging {
            ChargePhase::Charging
        } else {
            ChargePhase::Idle
        }
    }
}

/// Fired once per release, consumed by the physics applier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaunchCommand {
    pub charge_level: f32,
}

/// A static platform collider handed to the engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformSpec {
    /// Platform center
    pub position: Vec2,
    pub is_starting: bool,
}

/// Sprite sizes derived from the frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneLayout {
    pub frame: Rect,
    /// Collision width used for placement margins
    pub platform_width: f32,
    /// Blocky is square; its body is a circle of radius `player_size / 2`
    pub player_size: f32,
    pub arrow_size: Vec2,
}

impl SceneLayout {
    pub fn for_frame(frame: Rect) -> Self {
        let w = frame.width();
        Self {
            frame,
            platform_width: PLATFORM_WIDTH_FACTOR * w,
            player_size: PLAYER_WIDTH_FACTOR * w,
            arrow_size: Vec2::from(ARROW_SPRITE_SIZE),
        }
    }

    pub fn player_radius(&self) -> f32 {
        self.player_size / 2.0
    }

    /// Blocky resting on top of `platform`
    pub fn player_spawn(&self, platform: &PlatformSpec) -> Vec2 {
        platform.position + Vec2::new(0.0, self.player_size / 2.0 + SPRITE_GAP)
    }

    /// Arrow center hovering above Blocky
    pub fn arrow_anchor(&self, player_pos: Vec2) -> Vec2 {
        player_pos + Vec2::new(0.0, self.player_size + self.arrow_size.y / 2.0 + SPRITE_GAP)
    }
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}

/// Complete scene state
#[derive(Debug, Clone)]
pub struct SceneState {
    /// Placement seed for reproducibility
    pub rng_state: RngState,
    pub layout: SceneLayout,
    /// Charge state machine
    pub controller: ChargeLaunchController,
    /// Starting platform first, then the rest in placement order
    pub platforms: Vec<PlatformSpec>,
    /// Blocky's position as last reported by the engine
    pub player_pos: Vec2,
    /// Frames processed
    pub time_ticks: u64,
    /// Launch commands emitted so far
    pub launches: u32,
}

impl SceneState {
    /// Set up the scene for `frame`
    pub fn new(frame: Rect, settings: &Settings) -> Self {
        let layout = SceneLayout::for_frame(frame);
        let rng_state = RngState::new(settings.seed);
        let mut rng = rng_state.to_rng();

        let extra = settings.extra_platforms.min(MAX_EXTRA_PLATFORMS);
        let mut platforms = Vec::with_capacity(1 + extra as usize);
        platforms.push(place_platform(true, &frame, layout.platform_width, &mut rng));
        for _ in 0..extra {
            platforms.push(place_platform(false, &frame, layout.platform_width, &mut rng));
        }

        let player_pos = layout.player_spawn(&platforms[0]);
        log::info!(
            "Scene ready: {} platforms, Blocky at ({:.1}, {:.1})",
            platforms.len(),
            player_pos.x,
            player_pos.y
        );

        Self {
            rng_state,
            layout,
            controller: ChargeLaunchController::from_settings(settings),
            platforms,
            player_pos,
            time_ticks: 0,
            launches: 0,
        }
    }

    pub fn starting_platform(&self) -> &PlatformSpec {
        &self.platforms[0]
    }

    /// Update Blocky's position after the engine has stepped physics
    pub fn sync_player(&mut self, pos: Vec2) {
        self.player_pos = pos;
    }
}
