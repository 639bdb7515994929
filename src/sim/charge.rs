//! Charge-and-release launch controller
//!
//! Touch start arms the charge, each tick fills it (or drains it while idle),
//! touch end fires a [`LaunchCommand`] with the accumulated charge and resets.

use super::state::{ChargePhase, ChargeState, LaunchCommand};
use crate::aim_angle;
use crate::consts::*;
use crate::settings::{FillMode, Settings};

/// Snap distance to the charge bounds, absorbs f32 drift from repeated increments
const CHARGE_EPSILON: f32 = 1e-4;

/// Values produced by one controller tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutput {
    /// Arrow rotation (radians), in [-0.5, 0.5]
    pub aim_angle: f32,
    /// Charge fraction after this tick, in [0, 1]
    pub charge_level: f32,
}

#[derive(Debug, Clone)]
pub struct ChargeLaunchController {
    state: ChargeState,
    fill_rate: f32,
    drain_rate: f32,
    fill_mode: FillMode,
    /// Time of the previous tick, used by `FillMode::Realtime`
    last_time: Option<f32>,
}

impl Default for ChargeLaunchController {
    fn default() -> Self {
        Self::new(FILL_RATE, DRAIN_RATE, FillMode::PerTick)
    }
}

impl ChargeLaunchController {
    pub fn new(fill_rate: f32, drain_rate: f32, fill_mode: FillMode) -> Self {
        Self {
            state: ChargeState::default(),
            fill_rate,
            drain_rate,
            fill_mode,
            last_time: None,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.fill_rate, settings.drain_rate, settings.fill_mode)
    }

    pub fn state(&self) -> ChargeState {
        self.state
    }

    pub fn phase(&self) -> ChargePhase {
        self.state.phase()
    }

    pub fn charge_level(&self) -> f32 {
        self.state.charge_level
    }

    /// Begin charging. Calling again while charging changes nothing.
    pub fn on_touch_start(&mut self) {
        if self.state.is_charging {
            return;
        }
        self.state.is_charging = true;
        log::debug!("Charge started at {:.2}", self.state.charge_level);
    }

    /// Release the charge. Returns `None` if no charge was in progress.
    pub fn on_touch_end(&mut self) -> Option<LaunchCommand> {
        if !self.state.is_charging {
            log::debug!("Touch end while idle ignored");
            return None;
        }

        let command = LaunchCommand {
            charge_level: self.state.charge_level,
        };
        self.state.is_charging = false;
        self.state.charge_level = 0.0;
        log::debug!("Charge released at {:.2}", command.charge_level);
        Some(command)
    }

    /// Advance one frame at `current_time` seconds since scene start
    pub fn tick(&mut self, current_time: f32) -> FrameOutput {
        let dt = self
            .last_time
            .map(|last| current_time - last)
            .unwrap_or(0.0);
        self.last_time = Some(current_time);
        let scale = self.fill_mode.step_scale(dt);

        let level = self.state.charge_level;
        self.state.charge_level = if self.state.is_charging {
            let next = level + self.fill_rate * scale;
            if next >= MAX_CHARGE - CHARGE_EPSILON {
                MAX_CHARGE
            } else {
                next
            }
        } else {
            let next = level - self.drain_rate * scale;
            if next <= CHARGE_EPSILON { 0.0 } else { next }
        };

        FrameOutput {
            aim_angle: aim_angle(current_time),
            charge_level: self.state.charge_level,
        }
    }
}
