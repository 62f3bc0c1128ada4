//! One simulation tick: movement, then animation.

use std::time::Duration;

use crate::api::config::Tuning;
use crate::assets::sprites::AnimationResolver;
use crate::components::character::Character;
use crate::input::snapshot::InputSnapshot;
use crate::systems::{animation, movement};

/// Run the full per-tick pipeline and return the tick-complete state.
///
/// The frame count for the animation step comes from `resolver`, looked up
/// with the mode and facing the movement step produced.
pub fn step<R: AnimationResolver + ?Sized>(
    prev: &Character,
    input: InputSnapshot,
    dt: Duration,
    tuning: &Tuning,
    resolver: &R,
) -> Character {
    let moved = movement::advance(prev, input, dt, tuning);
    let frames = resolver.frame_count(moved.mode, moved.facing);
    animation::advance_frame(&moved, dt, frames, tuning)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Mode;
    use crate::assets::sprites::SpriteSheet;
    use crate::input::snapshot::Action;

    #[test]
    fn dash_frames_advance_during_dash() {
        let tuning = Tuning::DEFAULT;
        let sheet = SpriteSheet::standard();
        let input = InputSnapshot::NONE.with(Action::Dash, true);

        let mut c = Character::spawn(&tuning);
        c = step(&c, input, Duration::from_millis(20), &tuning, &sheet);
        assert_eq!(c.mode, Mode::Dashing);
        assert_eq!(c.frame, 0);
        assert_eq!(c.frame_time, Duration::from_millis(20));

        c = step(&c, input, Duration::from_millis(20), &tuning, &sheet);
        assert_eq!(c.frame, 1);
        assert_eq!(c.frame_time, Duration::from_millis(4));
    }

    #[test]
    fn mode_change_restarts_animation() {
        let tuning = Tuning::DEFAULT;
        let sheet = SpriteSheet::standard();
        let mut c = Character::spawn(&tuning);
        for _ in 0..4 {
            c = step(&c, InputSnapshot::NONE, Duration::from_millis(50), &tuning, &sheet);
        }
        assert_eq!(c.mode, Mode::Idle);
        assert_eq!(c.frame, 1);

        c = step(
            &c,
            InputSnapshot::NONE.with(Action::Right, true),
            Duration::from_millis(50),
            &tuning,
            &sheet,
        );
        assert_eq!(c.mode, Mode::Running);
        assert_eq!(c.frame, 0);
        assert_eq!(c.frame_time, Duration::from_millis(50));
    }

    #[test]
    fn frame_index_stays_inside_clip() {
        let tuning = Tuning::DEFAULT;
        let sheet = SpriteSheet::standard();
        let mut c = Character::spawn(&tuning);
        for i in 0..400 {
            let input = InputSnapshot {
                right: i % 60 < 30,
                jump: i % 45 == 0,
                dash: i % 70 < 10,
                ..Default::default()
            };
            c = step(&c, input, Duration::from_millis(16), &tuning, &sheet);
            assert!(c.frame < sheet.frame_count(c.mode, c.facing).max(1));
        }
    }
}
