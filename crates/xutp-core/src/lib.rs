//! Character simulation core for a 2D action game.
//!
//! Given the previous character state, the held input actions and an elapsed
//! time slice, `core::sim::step` produces the next state. Nothing here does
//! I/O: rendering, audio and input capture live in the host, which talks to
//! the core through `Session`, `SpriteInstance` buffers and `SoundEvent`s.

pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use glam::Vec2;
pub use api::audio::{AudioSink, SoundEvent};
pub use api::config::Tuning;
pub use api::session::Session;
pub use api::types::{Facing, Mode};
pub use components::character::{Character, DashState, DashTrail};
pub use crate::core::sim::step;
pub use crate::core::time::FrameClock;
pub use systems::animation::advance_frame;
pub use systems::movement::{advance, derive_mode};
pub use input::joystick::Joystick;
pub use input::queue::{InputEvent, InputQueue, KeyBindings};
pub use input::snapshot::{Action, ActionButton, InputSnapshot};
pub use assets::sprites::{AnimationClip, AnimationResolver, ClipDescriptor, SpriteSheet};
pub use renderer::instance::{RenderBuffer, SpriteInstance};
pub use renderer::trail::{build_render_buffer, trail_fade, TrailStyle};
