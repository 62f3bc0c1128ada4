//! One-shot sound cues derived from consecutive character states.
//!
//! The simulation never calls an audio API. The session compares the state
//! before and after a tick, collects `SoundEvent`s, and hands them to whatever
//! `AudioSink` the host injected.

use crate::components::character::Character;

/// A sound event emitted by the game logic.
/// The numeric value maps to a sound in the host's sound manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct SoundEvent(pub u32);

impl SoundEvent {
    pub const JUMP: SoundEvent = SoundEvent(1);
    pub const LANDING: SoundEvent = SoundEvent(2);
    pub const DASH: SoundEvent = SoundEvent(3);

    /// Audio file backing this cue.
    pub fn file_name(self) -> Option<&'static str> {
        match self {
            SoundEvent::JUMP => Some("jumpZero.wav"),
            SoundEvent::LANDING => Some("landingZero.wav"),
            SoundEvent::DASH => Some("dashZero.wav"),
            _ => None,
        }
    }

    /// Cues triggered by the transition `prev` → `next`.
    ///
    /// Dash: dashing now, not before. Jump: left the ground moving upward.
    /// Landing: airborne before, grounded now.
    pub fn between(prev: &Character, next: &Character) -> Vec<SoundEvent> {
        let mut cues = Vec::new();

        if next.is_dashing() && !prev.is_dashing() {
            cues.push(SoundEvent::DASH);
        }
        if prev.on_ground && !next.on_ground && next.vel.y < 0.0 {
            cues.push(SoundEvent::JUMP);
        }
        if !prev.on_ground && next.on_ground {
            cues.push(SoundEvent::LANDING);
        }

        cues
    }
}

/// Platform audio backend, injected into the session by the host.
pub trait AudioSink {
    /// Play a one-shot sound. Must not block.
    fn play(&mut self, sound: SoundEvent);

    /// Release backend resources. Called once when the session is dropped.
    fn release(&mut self) {}
}
