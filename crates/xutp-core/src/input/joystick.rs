//! Virtual joystick → horizontal direction.
//!
//! Only the horizontal sectors are read: right within ±67.5° of the +x axis,
//! left within ±67.5° of the -x axis. The vertical wedges between them and
//! the dead zone around the centre produce no direction.

use glam::Vec2;

/// Fraction of the joystick radius treated as neutral.
pub const DEFAULT_DEAD_ZONE: f32 = 0.3;

const RIGHT_SECTOR_DEG: f32 = 67.5;
const LEFT_SECTOR_DEG: f32 = 112.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Joystick {
    /// Outer radius of the pad, in the same units as knob offsets.
    pub radius: f32,
    /// Dead zone as a fraction of `radius`.
    pub dead_zone: f32,
}

impl Joystick {
    /// A pad of `radius` with the default dead zone.
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            dead_zone: DEFAULT_DEAD_ZONE,
        }
    }

    /// Clamp a raw touch offset (from the pad centre) to the pad's rim.
    pub fn clamp_knob(&self, offset: Vec2) -> Vec2 {
        offset.clamp_length_max(self.radius)
    }

    /// `(left, right)` for a knob offset from the pad centre.
    pub fn direction(&self, offset: Vec2) -> (bool, bool) {
        let knob = self.clamp_knob(offset);
        let length = knob.length();
        if length == 0.0 || length <= self.radius * self.dead_zone {
            return (false, false);
        }

        let degrees = knob.y.atan2(knob.x).to_degrees();
        let right = (-RIGHT_SECTOR_DEG..=RIGHT_SECTOR_DEG).contains(&degrees);
        let left = degrees > LEFT_SECTOR_DEG || degrees < -LEFT_SECTOR_DEG;
        (left, right)
    }
}
