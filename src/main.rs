//! Slaper entry point
//!
//! Native headless driver: sets up the scene and plays a scripted
//! press/hold/release gesture at a fixed frame rate.
//!
//! Usage: `slaper [settings.json] [hold_frames]`

use slaper::Rect;
use slaper::Settings;
use slaper::consts::FRAME_DT;
use slaper::sim::{LogLauncher, SceneState, TickInput, tick};

/// Frames to hold the touch when none is given
const DEFAULT_HOLD_FRAMES: u32 = 50;
/// Idle frames before and after the gesture
const IDLE_FRAMES: u32 = 30;

/// Press frame, release frame and total frame count for a scripted hold
fn gesture_frames(hold_frames: u32) -> (u32, u32, u32) {
    let press_at = IDLE_FRAMES;
    let release_at = press_at.saturating_add(hold_frames);
    (press_at, release_at, release_at.saturating_add(IDLE_FRAMES))
}

fn main() {
    env_logger::init();
    log::info!("Slaper (native) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load_from(path),
        None => Settings::default(),
    };
    let hold_frames = match args.next().map(|s| s.parse::<u32>()) {
        Some(Ok(frames)) => frames,
        Some(Err(e)) => {
            log::warn!("Invalid hold frame count ({}), using {}", e, DEFAULT_HOLD_FRAMES);
            DEFAULT_HOLD_FRAMES
        }
        None => DEFAULT_HOLD_FRAMES,
    };

    let frame = Rect::from_size(settings.frame_width, settings.frame_height);
    let mut state = SceneState::new(frame, &settings);
    let mut launcher = LogLauncher::default();

    for platform in &state.platforms {
        log::info!(
            "Platform at ({:.1}, {:.1}){}",
            platform.position.x,
            platform.position.y,
            if platform.is_starting { " [start]" } else { "" }
        );
    }

    let (press_at, release_at, total_frames) = gesture_frames(hold_frames);
    for frame_index in 0..total_frames {
        let input = TickInput {
            touch_start: frame_index == press_at,
            touch_end: frame_index == release_at,
            current_time: frame_index as f32 * FRAME_DT,
        };
        let view = tick(&mut state, &input, &mut launcher);
        log::debug!(
            "frame {:4} aim {:+.3} charge {:.2} fill {:.1}",
            frame_index,
            view.aim_angle,
            view.charge_level,
            view.arrow.fill_height
        );
    }

    for command in &launcher.launched {
        println!("Launch: charge {:.2}", command.charge_level);
    }
    println!("{} frames, {} launches", state.time_ticks, state.launches);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gesture_frames() {
        assert_eq!(gesture_frames(50), (30, 80, 110));
    }

    #[test]
    fn test_gesture_frames_saturate() {
        let (press_at, release_at, total) = gesture_frames(u32::MAX);
        assert_eq!(press_at, IDLE_FRAMES);
        assert_eq!(release_at, u32::MAX);
        assert_eq!(total, u32::MAX);
    }
}
