use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::api::types::Mode;

/// Tuning table for the character simulation.
///
/// All distances are in logical world units (the stage is 511x384), speeds in
/// units/second, accelerations in units/second². Y grows downward, so the jump
/// impulse is negative and gravity positive.
///
/// Loaded once and never mutated; a partial JSON document only overrides the
/// keys it names. Durations are written as integer milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// World width in game units.
    pub world_width: f32,
    /// World height in game units.
    pub world_height: f32,
    /// Y of the platform line; characters never sink below it.
    pub platform_y: f32,
    /// X where a freshly spawned character stands.
    pub spawn_x: f32,

    pub run_speed: f32,
    pub dash_speed: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub max_fall_speed: f32,
    /// Below this |velocity_x| a grounded character reads as idle.
    pub running_dead_band: f32,

    #[serde(with = "millis")]
    pub dash_duration: Duration,
    #[serde(with = "millis")]
    pub dash_cooldown: Duration,
    /// Maximum number of afterimages kept in the dash trail.
    pub dash_trail_count: usize,
    #[serde(with = "millis")]
    pub trail_fade_duration: Duration,

    #[serde(with = "millis")]
    pub idle_frame_duration: Duration,
    #[serde(with = "millis")]
    pub run_frame_duration: Duration,
    #[serde(with = "millis")]
    pub dash_frame_duration: Duration,

    /// Largest elapsed time a single tick may integrate.
    #[serde(with = "millis")]
    pub max_tick: Duration,
}

impl Tuning {
    pub const DEFAULT: Tuning = Tuning {
        world_width: 511.0,
        world_height: 384.0,
        platform_y: 332.0,
        spawn_x: 400.0,
        run_speed: 80.0,
        dash_speed: 200.0,
        acceleration: 400.0,
        deceleration: 600.0,
        gravity: 900.0,
        jump_impulse: -350.0,
        max_fall_speed: 600.0,
        running_dead_band: 5.0,
        dash_duration: Duration::from_millis(500),
        dash_cooldown: Duration::from_millis(200),
        dash_trail_count: 9,
        trail_fade_duration: Duration::from_millis(200),
        idle_frame_duration: Duration::from_millis(150),
        run_frame_duration: Duration::from_millis(65),
        // 14 dash frames across 500 ms
        dash_frame_duration: Duration::from_millis(36),
        max_tick: Duration::from_millis(50),
    };

    /// Parse a tuning table from JSON. Missing keys keep their default value.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Per-frame animation duration for a mode.
    pub fn frame_duration(&self, mode: Mode) -> Duration {
        match mode {
            Mode::Idle => self.idle_frame_duration,
            Mode::Dashing => self.dash_frame_duration,
            _ => self.run_frame_duration,
        }
    }

    /// Remaining trail fade as a 0..=1 fraction (1 = just ended).
    pub fn fade_progress(&self, remaining: Duration) -> f32 {
        if self.trail_fade_duration.is_zero() {
            return 0.0;
        }
        (remaining.as_secs_f32() / self.trail_fade_duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::DEFAULT
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}
