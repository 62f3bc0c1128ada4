use std::time::Duration;

use crate::api::audio::{AudioSink, SoundEvent};
use crate::api::config::Tuning;
use crate::assets::sprites::{AnimationResolver, SpriteSheet};
use crate::components::character::Character;
use crate::core::sim;
use crate::core::time::FrameClock;
use crate::input::joystick::Joystick;
use crate::input::queue::{InputEvent, InputQueue, KeyBindings};
use crate::input::snapshot::{Action, ActionButton, InputSnapshot};

/// Radius of the virtual joystick, in knob-offset units.
const DEFAULT_JOYSTICK_RADIUS: f32 = 70.0;

/// Owns one character and everything needed to tick it.
///
/// This is the single writer of the character state: input adapters mutate
/// the held-action snapshot, `tick` replaces the character wholesale, and
/// readers only ever see a tick-complete value through `character()`.
pub struct Session<R: AnimationResolver = SpriteSheet> {
    character: Character,
    input: InputSnapshot,
    queue: InputQueue,
    bindings: KeyBindings,
    joystick: Joystick,
    tuning: Tuning,
    resolver: R,
    clock: FrameClock,
    /// Cues emitted by the most recent tick.
    sounds: Vec<SoundEvent>,
    audio: Option<Box<dyn AudioSink>>,
}

impl Session<SpriteSheet> {
    /// Default tuning and the stock sprite sheet.
    pub fn standard() -> Self {
        Self::new(Tuning::default(), SpriteSheet::standard())
    }
}

impl<R: AnimationResolver> Session<R> {
    /// A fresh character at the spawn point, standard bindings, no audio sink.
    pub fn new(tuning: Tuning, resolver: R) -> Self {
        Self {
            character: Character::spawn(&tuning),
            input: InputSnapshot::NONE,
            queue: InputQueue::new(),
            bindings: KeyBindings::standard(),
            joystick: Joystick::new(DEFAULT_JOYSTICK_RADIUS),
            clock: FrameClock::new(tuning.max_tick),
            tuning,
            resolver,
            sounds: Vec::new(),
            audio: None,
        }
    }

    /// Replace the key-code table.
    pub fn with_bindings(mut self, bindings: KeyBindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// Install the platform audio backend, releasing any previous one.
    pub fn set_audio_sink(&mut self, sink: Box<dyn AudioSink>) {
        if let Some(mut old) = self.audio.replace(sink) {
            old.release();
        }
    }

    /// Put the character back at the spawn point with fresh timers.
    pub fn respawn(&mut self) {
        self.character = Character::spawn(&self.tuning);
        self.clock.reset();
        log::debug!("character respawned at {:?}", self.character.pos);
    }

    // -- Input adapters --

    /// Mark `action` held.
    pub fn key_down(&mut self, action: Action) {
        self.input = self.input.with(action, true);
    }

    /// Mark `action` released.
    pub fn key_up(&mut self, action: Action) {
        self.input = self.input.with(action, false);
    }

    /// Horizontal state from the virtual d-pad.
    pub fn dpad(&mut self, left: bool, right: bool) {
        self.input = self.input.with(Action::Left, left).with(Action::Right, right);
    }

    /// On-screen action button; buttons without a mapped action are ignored.
    pub fn action_button(&mut self, button: ActionButton, pressed: bool) {
        if let Some(action) = button.action() {
            self.input = self.input.with(action, pressed);
        }
    }

    /// Queue a raw event; it is folded into the snapshot at the next tick.
    pub fn push_event(&mut self, event: InputEvent) {
        self.queue.push(event);
    }

    // -- Ticking --

    /// Advance the simulation by a host-measured delta, clamped to `Tuning::max_tick`.
    pub fn tick(&mut self, dt: Duration) -> &Character {
        let dt = self.clamped(dt);
        self.run_tick(dt);
        &self.character
    }

    /// Advance the simulation to a presentation-loop timestamp in nanoseconds.
    /// The first call only starts the clock.
    pub fn frame(&mut self, now_nanos: u64) -> &Character {
        let raw = self.clock.measure(now_nanos);
        let dt = self.clamped(raw);
        self.run_tick(dt);
        &self.character
    }

    fn clamped(&self, dt: Duration) -> Duration {
        if self.clock.exceeds(dt) {
            log::warn!(
                "frame delta {:?} clamped to {:?}",
                dt,
                self.clock.max_dt()
            );
        }
        self.clock.clamp(dt)
    }

    fn run_tick(&mut self, dt: Duration) {
        for event in self.queue.drain() {
            self.input = self.bindings.apply(self.input, event, &self.joystick);
        }

        let next = sim::step(&self.character, self.input, dt, &self.tuning, &self.resolver);
        log::trace!(
            "tick dt={:?} pos={:?} vel={:?} mode={:?}",
            dt,
            next.pos,
            next.vel,
            next.mode
        );

        if next.mode != self.character.mode {
            log::debug!("mode {:?} -> {:?}", self.character.mode, next.mode);
        }
        if self.character.is_dashing() && !next.is_dashing() {
            log::debug!("dash ended, cooldown {:?}", next.dash.cooldown);
        }

        self.sounds = SoundEvent::between(&self.character, &next);
        for &sound in &self.sounds {
            log::debug!("sound cue {:?}", sound);
            if let Some(audio) = self.audio.as_mut() {
                audio.play(sound);
            }
        }

        self.character = next;
    }

    // -- Read access --

    /// The state produced by the last completed tick.
    pub fn character(&self) -> &Character {
        &self.character
    }

    /// Actions currently held.
    pub fn input(&self) -> InputSnapshot {
        self.input
    }

    /// Cues emitted by the last tick.
    pub fn sounds(&self) -> &[SoundEvent] {
        &self.sounds
    }

    /// Tuning this session was built with.
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Animation resolver used for frame counts.
    pub fn resolver(&self) -> &R {
        &self.resolver
    }
}

impl<R: AnimationResolver> Drop for Session<R> {
    fn drop(&mut self) {
        if let Some(mut audio) = self.audio.take() {
            audio.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{Facing, Mode};
    use glam::Vec2;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorder {
        played: Vec<SoundEvent>,
        released: bool,
    }

    struct SharedSink(Rc<RefCell<Recorder>>);

    impl AudioSink for SharedSink {
        fn play(&mut self, sound: SoundEvent) {
            self.0.borrow_mut().played.push(sound);
        }

        fn release(&mut self) {
            self.0.borrow_mut().released = true;
        }
    }

    #[test]
    fn spawns_on_platform() {
        let session = Session::standard();
        assert_eq!(session.character().pos, Vec2::new(400.0, 332.0));
        assert_eq!(session.character().facing, Facing::Left);
    }

    #[test]
    fn held_keys_drive_the_character() {
        let mut session = Session::standard();
        session.key_down(Action::Right);
        for _ in 0..5 {
            session.tick(Duration::from_millis(20));
        }
        assert_eq!(session.character().facing, Facing::Right);
        assert_eq!(session.character().mode, Mode::Running);

        session.key_up(Action::Right);
        assert_eq!(session.input(), InputSnapshot::NONE);
    }

    #[test]
    fn oversized_delta_is_clamped() {
        let mut a = Session::standard();
        let mut b = Session::standard();
        a.key_down(Action::Left);
        b.key_down(Action::Left);
        a.tick(Duration::from_secs(3));
        b.tick(Duration::from_millis(50));
        assert_eq!(a.character(), b.character());
    }

    #[test]
    fn queued_events_apply_before_the_tick() {
        let mut session = Session::standard();
        session.push_event(InputEvent::KeyDown { key_code: 32 });
        session.tick(Duration::from_millis(16));
        assert!(session.input().jump);
        assert_eq!(session.character().mode, Mode::Jumping);
        assert_eq!(session.sounds(), &[SoundEvent::JUMP]);
    }

    #[test]
    fn buttons_and_dpad_update_snapshot() {
        let mut session = Session::standard();
        session.dpad(true, false);
        session.action_button(ActionButton::Dash, true);
        session.action_button(ActionButton::Special, true);
        let input = session.input();
        assert!(input.left && !input.right && input.dash);
        assert!(!input.jump);
    }

    #[test]
    fn sounds_reach_the_sink_and_sink_is_released_on_drop() {
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        {
            let mut session = Session::standard();
            session.set_audio_sink(Box::new(SharedSink(recorder.clone())));
            session.key_down(Action::Dash);
            session.tick(Duration::from_millis(16));
            session.key_up(Action::Dash);
            session.tick(Duration::from_millis(16));
            assert_eq!(session.sounds(), &[] as &[SoundEvent]);
        }
        let recorder = recorder.borrow();
        assert_eq!(recorder.played, vec![SoundEvent::DASH]);
        assert!(recorder.released);
    }

    #[test]
    fn frame_timestamps_start_the_clock() {
        let mut session = Session::standard();
        session.key_down(Action::Right);
        let start = session.character().pos;
        session.frame(1_000_000_000);
        assert_eq!(session.character().pos, start);
        session.frame(1_016_000_000);
        assert!(session.character().pos.x > start.x);
    }

    #[test]
    fn frame_stall_is_clamped_like_tick() {
        let mut framed = Session::standard();
        let mut ticked = Session::standard();
        framed.key_down(Action::Left);
        ticked.key_down(Action::Left);
        framed.frame(0);
        framed.frame(3_000_000_000);
        ticked.tick(Duration::from_secs(3));
        assert_eq!(framed.character(), ticked.character());
    }

    #[test]
    fn respawn_resets_state() {
        let mut session = Session::standard();
        session.key_down(Action::Left);
        for _ in 0..10 {
            session.tick(Duration::from_millis(50));
        }
        session.respawn();
        assert_eq!(session.character(), &Character::spawn(session.tuning()));
    }
}
