//! Deterministic scene logic
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Time arrives as an explicit argument, never read from a clock
//! - No rendering or platform dependencies

pub mod charge;
pub mod placement;
pub mod state;
pub mod tick;

pub use charge::{ChargeLaunchController, FrameOutput};
pub use placement::place_platform;
pub use state::{
    ChargePhase, ChargeState, LaunchCommand, PlatformSpec, RngState, SceneLayout, SceneState,
};
pub use tick::{ArrowPose, FrameView, LaunchApplier, LogLauncher, TickInput, tick};
