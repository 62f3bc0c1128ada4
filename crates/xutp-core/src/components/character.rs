//! Character state: the single value the simulation replaces every tick.

use std::time::Duration;

use glam::Vec2;

use crate::api::config::Tuning;
use crate::api::types::{Facing, Mode};

/// Dash timers and the edge-detection latch for the dash button.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashState {
    /// Time left in the active dash. Non-zero exactly while dashing.
    pub time_remaining: Duration,
    /// Time until another dash may start. Decays to zero.
    pub cooldown: Duration,
    /// Set when a dash starts; cleared once the dash button is released.
    pub input_consumed: bool,
}

impl DashState {
    /// A dash is active iff time remains on it.
    pub fn is_dashing(&self) -> bool {
        !self.time_remaining.is_zero()
    }
}

/// Afterimage history left behind by a dash.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashTrail {
    /// Past x positions, most recent first. Bounded by `Tuning::dash_trail_count`.
    pub positions: Vec<f32>,
    /// Countdown after a dash ends; frozen while dashing.
    pub fade_remaining: Duration,
    /// Animation frame at the instant the last dash ended.
    pub last_dash_frame: usize,
    /// Facing at the instant the last dash ended.
    pub last_dash_facing: Facing,
}

impl DashTrail {
    /// Prepend `x`, dropping the oldest entries beyond `max`.
    pub fn record(&mut self, x: f32, max: usize) {
        self.positions.insert(0, x);
        self.positions.truncate(max);
    }

    /// No afterimages left.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Number of recorded afterimages.
    pub fn len(&self) -> usize {
        self.positions.len()
    }
}

/// One actor's complete simulation state.
///
/// Treated as a value: every system takes the previous state by reference
/// and returns a new one, so a renderer holding the last returned value
/// never observes a half-applied tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    /// Position in world units (y grows downward).
    pub pos: Vec2,
    /// Velocity in units/second.
    pub vel: Vec2,
    pub mode: Mode,
    pub facing: Facing,
    pub on_ground: bool,
    /// Current animation frame index within the mode's clip.
    pub frame: usize,
    /// Time accumulated toward the next animation frame.
    pub frame_time: Duration,
    pub dash: DashState,
    pub trail: DashTrail,
}

impl Character {
    /// A character standing still at `pos`.
    pub fn new(pos: Vec2, facing: Facing) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            mode: Mode::Idle,
            facing,
            on_ground: true,
            frame: 0,
            frame_time: Duration::ZERO,
            dash: DashState::default(),
            trail: DashTrail::default(),
        }
    }

    /// The default spawn: on the platform at `spawn_x`, facing left.
    pub fn spawn(tuning: &Tuning) -> Self {
        Self::new(Vec2::new(tuning.spawn_x, tuning.platform_y), Facing::Left)
    }

    /// Builder: set the velocity.
    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    /// Builder: detach from the ground.
    pub fn airborne(mut self) -> Self {
        self.on_ground = false;
        self
    }

    /// Shorthand for `self.dash.is_dashing()`.
    pub fn is_dashing(&self) -> bool {
        self.dash.is_dashing()
    }

    /// Reset the animation cursor to the first frame.
    pub fn reset_animation(&mut self) {
        self.frame = 0;
        self.frame_time = Duration::ZERO;
    }
}

impl Default for Character {
    fn default() -> Self {
        Self::spawn(&Tuning::DEFAULT)
    }
}
