//! Builds the per-tick sprite list: dash afterimages, then the character.

use crate::api::config::Tuning;
use crate::api::types::{Facing, Mode};
use crate::assets::sprites::AnimationResolver;
use crate::components::character::Character;
use crate::renderer::instance::{RenderBuffer, SpriteInstance};

/// Opacity ramp for dash afterimages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailStyle {
    /// Alpha of the most recent afterimage.
    pub max_opacity: f32,
    /// Alpha of the oldest afterimage.
    pub min_opacity: f32,
}

impl Default for TrailStyle {
    fn default() -> Self {
        Self {
            max_opacity: 0.6,
            min_opacity: 0.05,
        }
    }
}

impl TrailStyle {
    /// Alpha for afterimage `index` of `total` (0 = most recent).
    pub fn alpha(&self, index: usize, total: usize, fade: f32) -> f32 {
        let progress = if total > 1 {
            index as f32 / (total - 1) as f32
        } else {
            0.0
        };
        let base = self.max_opacity - (self.max_opacity - self.min_opacity) * progress;
        base * fade
    }
}

/// Fade multiplier for the trail: 1 while dashing, the remaining fade fraction after.
pub fn trail_fade(c: &Character, tuning: &Tuning) -> f32 {
    if c.is_dashing() {
        1.0
    } else {
        tuning.fade_progress(c.trail.fade_remaining)
    }
}

fn sprite<R: AnimationResolver + ?Sized>(
    resolver: &R,
    x: f32,
    y: f32,
    mode: Mode,
    facing: Facing,
    frame: usize,
) -> SpriteInstance {
    let clip = resolver.resolve(mode, facing);
    let frame = frame.min(clip.frame_count().saturating_sub(1));
    SpriteInstance {
        x,
        y,
        frame: frame as f32,
        mode: mode.id() as f32,
        facing: facing.sign(),
        mirrored: if clip.mirrored { 1.0 } else { 0.0 },
        alpha: 1.0,
        ghost: 0.0,
    }
}

/// Rebuild `buf` from a tick-complete character.
///
/// While dashing the afterimages copy the live dash frame; during the fade
/// they freeze on the frame and facing captured when the dash ended.
pub fn build_render_buffer<R: AnimationResolver + ?Sized>(
    c: &Character,
    tuning: &Tuning,
    resolver: &R,
    style: &TrailStyle,
    buf: &mut RenderBuffer,
) {
    buf.clear();

    let fade = trail_fade(c, tuning);
    if !c.trail.is_empty() && fade > 0.0 {
        let (frame, facing) = if c.is_dashing() {
            (c.frame, c.facing)
        } else {
            (c.trail.last_dash_frame, c.trail.last_dash_facing)
        };
        let total = c.trail.len();
        // Oldest first so newer afterimages draw on top.
        for (index, &x) in c.trail.positions.iter().enumerate().rev() {
            let mut ghost = sprite(resolver, x, c.pos.y, Mode::Dashing, facing, frame);
            ghost.alpha = style.alpha(index, total, fade);
            ghost.ghost = 1.0;
            buf.push(ghost);
        }
    }

    buf.push(sprite(resolver, c.pos.x, c.pos.y, c.mode, c.facing, c.frame));
}
