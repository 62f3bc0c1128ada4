//! Movement and dash state machine.
//!
//! `advance` is a pure function of (previous state, input, elapsed time).
//! Stages run in a fixed order and each reads the output of the one before:
//!
//! 1. timer decay (cooldown, trail fade)
//! 2. dash-button edge detection / dash start
//! 3. dash progression or dash end
//! 4. horizontal run control (skipped while dashing)
//! 5. gravity (vertical velocity pinned to zero while dashing)
//! 6. jump
//! 7. integration
//! 8. ground-plane and world-edge collision
//! 9. mode derivation
//!
//! Every derived quantity multiplies by `dt`; nothing divides by it, so a
//! zero-length tick leaves position and timers untouched.

use std::time::Duration;

use crate::api::config::Tuning;
use crate::api::types::{Facing, Mode};
use crate::components::character::Character;
use crate::input::snapshot::InputSnapshot;

/// Advance `prev` by `dt` under `input`.
///
/// Callers are expected to clamp `dt` (see `Tuning::max_tick`); an unclamped
/// stall just integrates one large step.
pub fn advance(prev: &Character, input: InputSnapshot, dt: Duration, tuning: &Tuning) -> Character {
    let mut c = prev.clone();
    let secs = dt.as_secs_f32();

    decay_timers(&mut c, dt);
    handle_dash_input(&mut c, input, tuning);
    progress_dash(&mut c, dt, tuning);

    if !c.is_dashing() {
        run_control(&mut c, input, secs, tuning);
    }

    if c.is_dashing() {
        c.vel.y = 0.0;
    } else {
        c.vel.y = (c.vel.y + tuning.gravity * secs).min(tuning.max_fall_speed);
    }

    // No double jump: `on_ground` is only restored by touching the platform.
    if input.jump && c.on_ground && !c.is_dashing() {
        c.vel.y = tuning.jump_impulse;
        c.on_ground = false;
    }

    c.pos += c.vel * secs;
    resolve_collisions(&mut c, tuning);

    c.mode = derive_mode(&c, tuning);
    if c.mode != prev.mode {
        c.reset_animation();
    }

    c
}

fn decay_timers(c: &mut Character, dt: Duration) {
    c.dash.cooldown = c.dash.cooldown.saturating_sub(dt);

    if !c.is_dashing() {
        c.trail.fade_remaining = c.trail.fade_remaining.saturating_sub(dt);
        if c.trail.fade_remaining.is_zero() {
            c.trail.positions.clear();
        }
    }
}

fn handle_dash_input(c: &mut Character, input: InputSnapshot, tuning: &Tuning) {
    if !input.dash && c.dash.input_consumed {
        c.dash.input_consumed = false;
    }

    let can_start =
        input.dash && !c.dash.input_consumed && c.dash.cooldown.is_zero() && !c.is_dashing();
    if can_start {
        c.dash.time_remaining = tuning.dash_duration;
        c.dash.input_consumed = true;
        c.reset_animation();
    }
}

fn progress_dash(c: &mut Character, dt: Duration, tuning: &Tuning) {
    if !c.is_dashing() {
        return;
    }

    c.dash.time_remaining = c.dash.time_remaining.saturating_sub(dt);
    if c.dash.time_remaining.is_zero() {
        c.dash.cooldown = tuning.dash_cooldown;
        c.vel.x = 0.0;
        c.trail.fade_remaining = tuning.trail_fade_duration;
        c.trail.last_dash_frame = c.frame;
        c.trail.last_dash_facing = c.facing;
        c.reset_animation();
    } else {
        c.vel.x = c.facing.sign() * tuning.dash_speed;
        if !dt.is_zero() {
            c.trail.record(c.pos.x, tuning.dash_trail_count);
        }
    }
}

fn run_control(c: &mut Character, input: InputSnapshot, secs: f32, tuning: &Tuning) {
    let direction = input.horizontal();
    let target = f32::from(direction) * tuning.run_speed;
    let rate = if direction != 0 {
        tuning.acceleration
    } else {
        tuning.deceleration
    };
    c.vel.x = move_towards(c.vel.x, target, rate * secs);

    match direction {
        -1 => c.facing = Facing::Left,
        1 => c.facing = Facing::Right,
        _ => {}
    }
}

fn resolve_collisions(c: &mut Character, tuning: &Tuning) {
    if c.pos.y >= tuning.platform_y {
        c.pos.y = tuning.platform_y;
        c.vel.y = 0.0;
        c.on_ground = true;
    } else {
        c.on_ground = false;
    }
    c.pos.x = c.pos.x.clamp(0.0, tuning.world_width);
}

/// Mode as a pure function of the post-tick kinematics.
pub fn derive_mode(c: &Character, tuning: &Tuning) -> Mode {
    if c.is_dashing() {
        Mode::Dashing
    } else if !c.on_ground && c.vel.y < 0.0 {
        Mode::Jumping
    } else if !c.on_ground {
        Mode::Falling
    } else if c.vel.x.abs() > tuning.running_dead_band {
        Mode::Running
    } else {
        Mode::Idle
    }
}

/// Step `current` toward `target` by at most `max_delta`, never overshooting.
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    if target > current {
        (current + max_delta).min(target)
    } else if target < current {
        (current - max_delta).max(target)
    } else {
        target
    }
}
