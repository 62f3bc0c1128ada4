use serde::{Deserialize, Serialize};

/// Horizontal facing of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// -1.0 for Left, +1.0 for Right.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Discrete behaviour/animation state of a character.
///
/// Always derived by the movement system at the end of a tick; input never
/// sets it directly. `Crouching` and `Hurt` are carried for the presentation
/// layer's clip table but no movement rule produces them yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Idle,
    Running,
    Jumping,
    Falling,
    Dashing,
    Crouching,
    Hurt,
}

impl Mode {
    /// Every mode, in id order.
    pub const ALL: [Mode; 7] = [
        Mode::Idle,
        Mode::Running,
        Mode::Jumping,
        Mode::Falling,
        Mode::Dashing,
        Mode::Crouching,
        Mode::Hurt,
    ];

    /// Numeric id written into render instances.
    pub fn id(self) -> u32 {
        match self {
            Mode::Idle => 0,
            Mode::Running => 1,
            Mode::Jumping => 2,
            Mode::Falling => 3,
            Mode::Dashing => 4,
            Mode::Crouching => 5,
            Mode::Hurt => 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facing_sign() {
        assert_eq!(Facing::Left.sign(), -1.0);
        assert_eq!(Facing::Right.sign(), 1.0);
    }

    #[test]
    fn mode_ids_are_unique() {
        let mut ids: Vec<u32> = Mode::ALL.iter().map(|m| m.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Mode::ALL.len());
    }

    #[test]
    fn mode_serializes_snake_case() {
        let json = serde_json::to_string(&Mode::Dashing).unwrap();
        assert_eq!(json, "\"dashing\"");
    }
}
