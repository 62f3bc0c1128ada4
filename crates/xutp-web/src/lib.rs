//! Browser bridge for the character simulation.
//!
//! One `WebRunner` lives in a `thread_local!`; the exported functions below
//! forward input, run ticks and expose pointers into the runner's buffers.
//! The TypeScript side reads `SpriteInstance`s (8 floats each) and sound ids
//! straight out of wasm memory after every `game_tick`.

pub mod runner;

pub use runner::WebRunner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use xutp_core::{InputEvent, Session, Vec2};

thread_local! {
    static RUNNER: RefCell<Option<WebRunner>> = const { RefCell::new(None) };
}

fn with_runner<R>(f: impl FnOnce(&mut WebRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow.get_or_insert_with(|| WebRunner::new(Session::standard()));
        f(runner)
    })
}

#[wasm_bindgen]
pub fn game_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(WebRunner::standard());
    });
    log::info!("xutp: initialized");
}

/// Rebuild the session from JSON documents; empty strings keep defaults.
#[wasm_bindgen]
pub fn game_configure(tuning: &str, sprites: &str, bindings: &str) {
    with_runner(|r| r.configure(tuning, sprites, bindings));
}

#[wasm_bindgen]
pub fn game_tick(dt_ms: f64) {
    with_runner(|r| r.tick(dt_ms));
}

#[wasm_bindgen]
pub fn game_respawn() {
    with_runner(|r| r.respawn());
}

#[wasm_bindgen]
pub fn game_key_down(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyDown { key_code }));
}

#[wasm_bindgen]
pub fn game_key_up(key_code: u32) {
    with_runner(|r| r.push_input(InputEvent::KeyUp { key_code }));
}

/// Knob offset from the joystick centre, in the same units as its radius.
#[wasm_bindgen]
pub fn game_joystick_move(dx: f32, dy: f32) {
    let offset = Vec2::new(dx, dy);
    with_runner(|r| r.push_input(InputEvent::JoystickMove { offset }));
}

#[wasm_bindgen]
pub fn game_joystick_release() {
    with_runner(|r| r.push_input(InputEvent::JoystickRelease));
}

/// Action button ids: 0 jump, 1 dash, 2 attack, 3 special.
#[wasm_bindgen]
pub fn game_button(id: u32, pressed: bool) {
    with_runner(|r| r.button(id, pressed));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_instances_ptr() -> *const f32 {
    with_runner(|r| r.instances_ptr())
}

#[wasm_bindgen]
pub fn get_instance_count() -> u32 {
    with_runner(|r| r.instance_count())
}

#[wasm_bindgen]
pub fn get_sound_events_ptr() -> *const u8 {
    with_runner(|r| r.sound_events_ptr())
}

#[wasm_bindgen]
pub fn get_sound_events_len() -> u32 {
    with_runner(|r| r.sound_events_len())
}

#[wasm_bindgen]
pub fn get_world_width() -> f32 {
    with_runner(|r| r.world_width())
}

#[wasm_bindgen]
pub fn get_world_height() -> f32 {
    with_runner(|r| r.world_height())
}

#[wasm_bindgen]
pub fn get_platform_y() -> f32 {
    with_runner(|r| r.platform_y())
}

#[wasm_bindgen]
pub fn get_trail_fade() -> f32 {
    with_runner(|r| r.trail_fade())
}
