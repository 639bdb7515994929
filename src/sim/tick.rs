//! Per-frame scene update
//!
//! The host engine calls [`tick`] once per frame with the touch events it
//! collected since the previous frame.

use glam::Vec2;

use super::charge::FrameOutput;
use super::state::{LaunchCommand, SceneLayout, SceneState};

/// Input events for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// A touch began this frame
    pub touch_start: bool,
    /// A touch ended this frame
    pub touch_end: bool,
    /// Monotonic seconds since scene start
    pub current_time: f32,
}

/// Turns launch commands into motion on Blocky's body.
///
/// Implemented by the host's physics layer.
pub trait LaunchApplier {
    fn apply_launch(&mut self, command: &LaunchCommand);
}

/// Applier that only records and logs launches
#[derive(Debug, Default)]
pub struct LogLauncher {
    pub launched: Vec<LaunchCommand>,
}

impl LaunchApplier for LogLauncher {
    fn apply_launch(&mut self, command: &LaunchCommand) {
        log::info!("Moving Blocky up! (charge {:.2})", command.charge_level);
        self.launched.push(*command);
    }
}

/// Arrow sprite placement for this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowPose {
    pub position: Vec2,
    /// Rotation about Blocky (radians)
    pub rotation: f32,
    /// Filled portion of the arrow sprite, from its base
    pub fill_height: f32,
}

impl ArrowPose {
    pub fn new(layout: &SceneLayout, player_pos: Vec2, output: &FrameOutput) -> Self {
        Self {
            position: layout.arrow_anchor(player_pos),
            rotation: output.aim_angle,
            fill_height: layout.arrow_size.y * output.charge_level,
        }
    }
}

/// Everything the host needs to draw this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameView {
    pub aim_angle: f32,
    pub charge_level: f32,
    pub arrow: ArrowPose,
    /// Launch fired this frame, already passed to the applier
    pub launch: Option<LaunchCommand>,
}

/// Advance the scene by one frame.
///
/// Touch start is applied before touch end so a tap within one frame still
/// fires (with whatever charge was carried in).
pub fn tick(
    state: &mut SceneState,
    input: &TickInput,
    applier: &mut dyn LaunchApplier,
) -> FrameView {
    if input.touch_start {
        state.controller.on_touch_start();
    }

    let mut launch = None;
    if input.touch_end {
        if let Some(command) = state.controller.on_touch_end() {
            applier.apply_launch(&command);
            state.launches += 1;
            launch = Some(command);
        }
    }

    let output = state.controller.tick(input.current_time);
    state.time_ticks += 1;

    FrameView {
        aim_angle: output.aim_angle,
        charge_level: output.charge_level,
        arrow: ArrowPose::new(&state.layout, state.player_pos, &output),
        launch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rect;
    use crate::consts::FRAME_DT;
    use crate::settings::Settings;
    use crate::sim::state::ChargePhase;

    fn scene() -> SceneState {
        SceneState::new(Rect::from_size(750.0, 1334.0), &Settings::default())
    }

    fn frame(i: u32) -> TickInput {
        TickInput {
            current_time: i as f32 * FRAME_DT,
            ..Default::default()
        }
    }

    #[test]
    fn test_press_hold_release() {
        let mut state = scene();
        let mut launcher = LogLauncher::default();

        let press = TickInput {
            touch_start: true,
            ..frame(0)
        };
        tick(&mut state, &press, &mut launcher);
        for i in 1..50 {
            tick(&mut state, &frame(i), &mut launcher);
        }
        assert_eq!(state.controller.phase(), ChargePhase::Charging);
        assert!((state.controller.charge_level() - 0.5).abs() < 1e-4);

        let release = TickInput {
            touch_end: true,
            ..frame(50)
        };
        let view = tick(&mut state, &release, &mut launcher);

        let launch = view.launch.unwrap();
        assert!((launch.charge_level - 0.5).abs() < 1e-4);
        assert_eq!(launcher.launched, vec![launch]);
        assert_eq!(state.launches, 1);
        assert_eq!(state.controller.phase(), ChargePhase::Idle);
        assert_eq!(view.charge_level, 0.0);
        assert_eq!(state.time_ticks, 51);
    }

    #[test]
    fn test_release_without_press_does_not_launch() {
        let mut state = scene();
        let mut launcher = LogLauncher::default();
        let release = TickInput {
            touch_end: true,
            ..frame(0)
        };
        let view = tick(&mut state, &release, &mut launcher);
        assert!(view.launch.is_none());
        assert!(launcher.launched.is_empty());
    }

    #[test]
    fn test_tap_in_single_frame_fires_empty_charge() {
        let mut state = scene();
        let mut launcher = LogLauncher::default();
        let tap = TickInput {
            touch_start: true,
            touch_end: true,
            ..frame(0)
        };
        let view = tick(&mut state, &tap, &mut launcher);
        assert_eq!(view.launch, Some(LaunchCommand { charge_level: 0.0 }));
        assert_eq!(state.controller.phase(), ChargePhase::Idle);
    }

    #[test]
    fn test_arrow_follows_blocky() {
        let mut state = scene();
        let mut launcher = LogLauncher::default();
        state.sync_player(Vec2::new(100.0, 200.0));
        let view = tick(&mut state, &frame(30), &mut launcher);

        let layout = state.layout;
        assert_eq!(view.arrow.position.x, 100.0);
        let expected = 200.0 + layout.player_size + layout.arrow_size.y / 2.0 + 10.0;
        assert!((view.arrow.position.y - expected).abs() < 1e-3);
        assert_eq!(view.arrow.rotation, view.aim_angle);
    }

    #[test]
    fn test_arrow_fill_tracks_charge() {
        let mut state = scene();
        let mut launcher = LogLauncher::default();
        let press = TickInput {
            touch_start: true,
            ..frame(0)
        };
        let mut view = tick(&mut state, &press, &mut launcher);
        for i in 1..100 {
            view = tick(&mut state, &frame(i), &mut launcher);
        }
        assert_eq!(view.charge_level, 1.0);
        assert_eq!(view.arrow.fill_height, state.layout.arrow_size.y);
    }

    #[test]
    fn test_determinism() {
        let mut a = SceneState::new(Rect::from_size(750.0, 1334.0), &Settings::with_seed(99999));
        let mut b = SceneState::new(Rect::from_size(750.0, 1334.0), &Settings::with_seed(99999));
        let mut la = LogLauncher::default();
        let mut lb = LogLauncher::default();

        let inputs = [
            TickInput {
                touch_start: true,
                ..frame(0)
            },
            frame(1),
            frame(2),
            TickInput {
                touch_end: true,
                ..frame(3)
            },
        ];
        for input in &inputs {
            assert_eq!(tick(&mut a, input, &mut la), tick(&mut b, input, &mut lb));
        }
        assert_eq!(a.platforms, b.platforms);
        assert_eq!(la.launched, lb.launched);
    }
}
