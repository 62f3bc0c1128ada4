use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::input::joystick::Joystick;
use crate::input::snapshot::{Action, ActionButton, InputSnapshot};

/// Raw input events delivered by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A key was pressed (DOM key code).
    KeyDown { key_code: u32 },
    /// A key was released.
    KeyUp { key_code: u32 },
    /// The virtual joystick knob moved to `offset` from the pad centre.
    JoystickMove { offset: Vec2 },
    /// The finger left the virtual joystick.
    JoystickRelease,
    /// An on-screen action button changed state.
    Button { button: ActionButton, pressed: bool },
}

/// Key code → action table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub keys: HashMap<u32, Action>,
}

impl KeyBindings {
    /// Arrows/WASD to move, Space/W/K/Up to jump, J/Shift to dash, S/Down to crouch.
    pub fn standard() -> Self {
        let keys = [
            (37, Action::Left),
            (65, Action::Left),
            (39, Action::Right),
            (68, Action::Right),
            (38, Action::Jump),
            (87, Action::Jump),
            (75, Action::Jump),
            (32, Action::Jump),
            (40, Action::Crouch),
            (83, Action::Crouch),
            (74, Action::Dash),
            (16, Action::Dash),
        ]
        .into_iter()
        .collect();
        Self { keys }
    }

    /// Parse bindings from JSON, e.g. `{"keys": {"37": "left"}}`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Action bound to `key_code`, if any.
    pub fn action(&self, key_code: u32) -> Option<Action> {
        self.keys.get(&key_code).copied()
    }

    /// Fold one event into `input`. Unbound keys leave it unchanged.
    pub fn apply(&self, input: InputSnapshot, event: InputEvent, pad: &Joystick) -> InputSnapshot {
        match event {
            InputEvent::KeyDown { key_code } => match self.action(key_code) {
                Some(action) => input.with(action, true),
                None => input,
            },
            InputEvent::KeyUp { key_code } => match self.action(key_code) {
                Some(action) => input.with(action, false),
                None => input,
            },
            InputEvent::JoystickMove { offset } => {
                let (left, right) = pad.direction(offset);
                input.with(Action::Left, left).with(Action::Right, right)
            }
            InputEvent::JoystickRelease => {
                input.with(Action::Left, false).with(Action::Right, false)
            }
            InputEvent::Button { button, pressed } => match button.action() {
                Some(action) => input.with(action, pressed),
                None => input,
            },
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::standard()
    }
}

/// A queue of input events.
/// The bridge writes events into the queue; the session drains them each tick.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    /// An empty queue.
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Queue an event for the next tick.
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Whether no events are pending.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
