use std::time::Duration;

use xutp_core::{
    build_render_buffer, ActionButton, InputEvent, KeyBindings, RenderBuffer, Session,
    SpriteSheet, TrailStyle, Tuning,
};

const MAX_HOST_DELTA_MS: f64 = 1000.0;

/// Glue between the browser loop and a `Session`.
///
/// Owns the flat buffers the TypeScript side reads after every tick: sprite
/// instances (see `SpriteInstance`) and the sound cue ids of the last tick.
pub struct WebRunner {
    session: Session<SpriteSheet>,
    render_buffer: RenderBuffer,
    trail_style: TrailStyle,
    /// Flat buffer of sound event ids for shared-memory reads.
    sound_buffer: Vec<u8>,
}

impl WebRunner {
    /// Wrap `session` and fill the buffers for its initial state.
    pub fn new(session: Session<SpriteSheet>) -> Self {
        let mut runner = Self {
            session,
            render_buffer: RenderBuffer::new(),
            trail_style: TrailStyle::default(),
            sound_buffer: Vec::with_capacity(8),
        };
        runner.rebuild_buffers();
        runner
    }

    /// Runner over `Session::standard()`.
    pub fn standard() -> Self {
        Self::new(Session::standard())
    }

    /// Replace the session using JSON tuning/sprite/binding documents.
    /// Any document that fails to parse is logged and its default is used.
    pub fn configure(&mut self, tuning: &str, sprites: &str, bindings: &str) {
        let tuning = parse_or_default("tuning", tuning, Tuning::from_json);
        let sprites = parse_or_default("sprite sheet", sprites, SpriteSheet::from_json);
        let bindings = parse_or_default("key bindings", bindings, KeyBindings::from_json);
        self.session = Session::new(tuning, sprites).with_bindings(bindings);
        self.rebuild_buffers();
    }

    /// Queue a raw input event for the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.session.push_event(event);
    }

    /// On-screen button by numeric id; unknown ids are logged and ignored.
    pub fn button(&mut self, id: u32, pressed: bool) {
        match ActionButton::from_id(id) {
            Some(button) => self.push_input(InputEvent::Button { button, pressed }),
            None => log::warn!("unknown action button id {}", id),
        }
    }

    /// Run one tick from a browser `requestAnimationFrame` delta in milliseconds.
    pub fn tick(&mut self, dt_ms: f64) {
        // The session clamps again to `max_tick`; this only keeps the
        // float-to-Duration conversion in range.
        let dt = if dt_ms.is_finite() && dt_ms > 0.0 {
            Duration::from_secs_f64(dt_ms.min(MAX_HOST_DELTA_MS) / 1000.0)
        } else {
            Duration::ZERO
        };
        self.session.tick(dt);
        self.rebuild_buffers();
    }

    /// Respawn the character and refresh the buffers.
    pub fn respawn(&mut self) {
        self.session.respawn();
        self.rebuild_buffers();
    }

    fn rebuild_buffers(&mut self) {
        build_render_buffer(
            self.session.character(),
            self.session.tuning(),
            self.session.resolver(),
            &self.trail_style,
            &mut self.render_buffer,
        );

        self.sound_buffer.clear();
        for sound in self.session.sounds() {
            self.sound_buffer.push(sound.0 as u8);
        }
    }

    /// The wrapped session.
    pub fn session(&self) -> &Session<SpriteSheet> {
        &self.session
    }

    // ---- Pointer accessors for shared-memory reads ----

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    /// Number of sprite instances behind `instances_ptr`.
    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn sound_events_ptr(&self) -> *const u8 {
        self.sound_buffer.as_ptr()
    }

    /// Number of sound ids behind `sound_events_ptr`.
    pub fn sound_events_len(&self) -> u32 {
        self.sound_buffer.len() as u32
    }

    /// World width in world units.
    pub fn world_width(&self) -> f32 {
        self.session.tuning().world_width
    }

    pub fn world_height(&self) -> f32 {
        self.session.tuning().world_height
    }

    /// Height of the ground plane.
    pub fn platform_y(&self) -> f32 {
        self.session.tuning().platform_y
    }

    /// Trail fade for the host's overlay effects, 0..=1.
    pub fn trail_fade(&self) -> f32 {
        xutp_core::trail_fade(self.session.character(), self.session.tuning())
    }
}

fn parse_or_default<T: Default>(
    what: &str,
    json: &str,
    parse: impl FnOnce(&str) -> Result<T, serde_json::Error>,
) -> T {
    if json.trim().is_empty() {
        return T::default();
    }
    match parse(json) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("invalid {} JSON, using defaults: {}", what, err);
            T::default()
        }
    }
}
