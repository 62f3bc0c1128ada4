use serde::{Deserialize, Serialize};

/// Abstract game actions, independent of the physical source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Left,
    Right,
    Jump,
    Dash,
    Crouch,
}

/// On-screen action buttons. Attack and Special have no simulation effect yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionButton {
    Jump,
    Dash,
    Attack,
    Special,
}

impl ActionButton {
    /// The held action this button drives; `None` for buttons with no movement effect.
    pub fn action(self) -> Option<Action> {
        match self {
            ActionButton::Jump => Some(Action::Jump),
            ActionButton::Dash => Some(Action::Dash),
            ActionButton::Attack | ActionButton::Special => None,
        }
    }

    /// Decode the numeric button id sent by the UI layer.
    pub fn from_id(id: u32) -> Option<Self> {
        match id {
            0 => Some(ActionButton::Jump),
            1 => Some(ActionButton::Dash),
            2 => Some(ActionButton::Attack),
            3 => Some(ActionButton::Special),
            _ => None,
        }
    }
}

/// Which actions are held during a tick.
///
/// Any combination is legal, including left+right together; the movement
/// system resolves contradictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub dash: bool,
    pub crouch: bool,
}

impl InputSnapshot {
    pub const NONE: InputSnapshot = InputSnapshot {
        left: false,
        right: false,
        jump: false,
        dash: false,
        crouch: false,
    };

    /// Copy of this snapshot with one action set.
    pub fn with(mut self, action: Action, held: bool) -> Self {
        match action {
            Action::Left => self.left = held,
            Action::Right => self.right = held,
            Action::Jump => self.jump = held,
            Action::Dash => self.dash = held,
            Action::Crouch => self.crouch = held,
        }
        self
    }

    /// Whether `action` is held.
    pub fn held(&self, action: Action) -> bool {
        match action {
            Action::Left => self.left,
            Action::Right => self.right,
            Action::Jump => self.jump,
            Action::Dash => self.dash,
            Action::Crouch => self.crouch,
        }
    }

    /// -1, 0 or +1 for an exclusive horizontal direction; both or neither is 0.
    pub fn horizontal(&self) -> i8 {
        match (self.left, self.right) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        }
    }
}
