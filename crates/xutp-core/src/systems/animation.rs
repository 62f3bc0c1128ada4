//! Animation system: advances the character's frame cursor.

use std::time::Duration;

use crate::api::config::Tuning;
use crate::components::character::Character;

/// Advance the animation cursor of `prev` by `dt`.
///
/// `total_frames` is the length of the clip currently shown for the
/// character's mode. Clips of zero or one frame are a static pose. At most
/// one frame is advanced per call however long `dt` is; leftover time stays
/// in the accumulator, so a frame-rate hitch slows the animation rather than
/// skipping poses.
pub fn advance_frame(prev: &Character, dt: Duration, total_frames: usize, tuning: &Tuning) -> Character {
    let mut c = prev.clone();

    if total_frames <= 1 {
        c.frame = 0;
        return c;
    }

    let frame_duration = tuning.frame_duration(c.mode);
    c.frame_time += dt;

    if c.frame_time >= frame_duration {
        c.frame = (c.frame + 1) % total_frames;
        c.frame_time -= frame_duration;
    }

    c
}
