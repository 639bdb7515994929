//! Platform placement

use glam::Vec2;
use rand::Rng;

use super::state::PlatformSpec;
use crate::Rect;
use crate::consts::{PLATFORM_HEIGHT, STARTING_PLATFORM_HEIGHT};

/// Place a platform inside `bounds`.
///
/// The starting platform sits at the horizontal center, an eighth of the way
/// up. Other platforms sit at mid-height with x drawn uniformly from
/// `[platform_width / 2, bounds.width - platform_width / 2]`.
///
/// If the platform is at least as wide as the bounds the range is inverted;
/// x collapses to the midpoint of that range instead of panicking.
pub fn place_platform<R: Rng>(
    is_starting: bool,
    bounds: &Rect,
    platform_width: f32,
    rng: &mut R,
) -> PlatformSpec {
    let height = bounds.height();

    let position = if is_starting {
        Vec2::new(
            bounds.center().x,
            bounds.min.y + height * STARTING_PLATFORM_HEIGHT,
        )
    } else {
        let lo = platform_width / 2.0;
        let hi = bounds.width() - platform_width / 2.0;
        let x = if lo < hi {
            rng.random_range(lo..=hi)
        } else {
            log::warn!(
                "Platform width {} does not fit bounds width {}, pinning to center",
                platform_width,
                bounds.width()
            );
            (lo + hi) / 2.0
        };
        Vec2::new(x, bounds.min.y + height * PLATFORM_HEIGHT)
    };

    PlatformSpec {
        position,
        is_starting,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_starting_platform_is_centered() {
        let bounds = Rect::from_size(1000.0, 800.0);
        for seed in 0..50 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let spec = place_platform(true, &bounds, 100.0, &mut rng);
            assert_eq!(spec.position, Vec2::new(500.0, 100.0));
            assert!(spec.is_starting);
        }
    }

    #[test]
    fn test_starting_platform_respects_offset_bounds() {
        let bounds = Rect::new(Vec2::new(-200.0, -400.0), Vec2::new(200.0, 400.0));
        let mut rng = Pcg32::seed_from_u64(1);
        let spec = place_platform(true, &bounds, 50.0, &mut rng);
        assert_eq!(spec.position, Vec2::new(0.0, -300.0));
    }

    #[test]
    fn test_random_platforms_stay_in_range() {
        let bounds = Rect::from_size(1000.0, 600.0);
        let mut rng = Pcg32::seed_from_u64(12345);
        for _ in 0..1000 {
            let spec = place_platform(false, &bounds, 100.0, &mut rng);
            assert!((50.0..=950.0).contains(&spec.position.x));
            assert_eq!(spec.position.y, 300.0);
            assert!(!spec.is_starting);
        }
    }

    #[test]
    fn test_same_seed_same_position() {
        let bounds = Rect::from_size(750.0, 1334.0);
        let mut a = Pcg32::seed_from_u64(7);
        let mut b = Pcg32::seed_from_u64(7);
        assert_eq!(
            place_platform(false, &bounds, 120.0, &mut a),
            place_platform(false, &bounds, 120.0, &mut b)
        );
    }

    #[test]
    fn test_oversized_platform_pins_to_center() {
        let bounds = Rect::from_size(100.0, 100.0);
        let mut rng = Pcg32::seed_from_u64(3);
        let spec = place_platform(false, &bounds, 150.0, &mut rng);
        assert_eq!(spec.position, Vec2::new(50.0, 50.0));

        let spec = place_platform(false, &bounds, 100.0, &mut rng);
        assert_eq!(spec.position.x, 50.0);
    }

    proptest! {
        #[test]
        fn prop_platform_within_margins(seed in any::<u64>(), width in 10.0f32..400.0) {
            let bounds = Rect::from_size(1000.0, 500.0);
            let mut rng = Pcg32::seed_from_u64(seed);
            let spec = place_platform(false, &bounds, width, &mut rng);
            prop_assert!(spec.position.x >= width / 2.0);
            prop_assert!(spec.position.x <= 1000.0 - width / 2.0);
        }
    }
}
