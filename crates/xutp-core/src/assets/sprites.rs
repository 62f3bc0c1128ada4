use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::api::types::{Facing, Mode};

/// Frames to draw for a (mode, facing) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationClip<'a> {
    /// Drawable frame identifiers, in playback order.
    pub frames: &'a [String],
    /// Whether the renderer must mirror the frames horizontally.
    pub mirrored: bool,
}

impl AnimationClip<'_> {
    /// Number of frames in the clip.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Frame id for `index`, clamped into the clip.
    pub fn frame(&self, index: usize) -> Option<&str> {
        let last = self.frames.len().checked_sub(1)?;
        self.frames.get(index.min(last)).map(String::as_str)
    }
}

/// Maps a character's mode and facing to the clip the presentation layer draws.
///
/// The simulation only needs the frame count; frame identifiers are opaque.
pub trait AnimationResolver {
    fn resolve(&self, mode: Mode, facing: Facing) -> AnimationClip<'_>;

    fn frame_count(&self, mode: Mode, facing: Facing) -> usize {
        self.resolve(mode, facing).frame_count()
    }
}

/// Art for one mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipDescriptor {
    /// Canonical frames.
    pub frames: Vec<String>,
    /// Direction the canonical frames are drawn facing.
    pub facing: Facing,
    /// Dedicated frames for the other direction. Absent means mirror `frames`.
    #[serde(default)]
    pub opposite: Option<Vec<String>>,
}

impl ClipDescriptor {
    fn numbered(prefix: &str, count: usize) -> Vec<String> {
        (0..count).map(|i| format!("{prefix}{i}")).collect()
    }

    fn resolve(&self, facing: Facing) -> AnimationClip<'_> {
        if facing == self.facing {
            return AnimationClip { frames: &self.frames, mirrored: false };
        }
        match &self.opposite {
            Some(frames) => AnimationClip { frames, mirrored: false },
            None => AnimationClip { frames: &self.frames, mirrored: true },
        }
    }
}

/// Sprite-sheet manifest: per-mode clips plus a fallback for modes without art.
/// Loaded from a JSON file at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteSheet {
    #[serde(default)]
    pub clips: HashMap<Mode, ClipDescriptor>,
    pub fallback: ClipDescriptor,
}

impl SpriteSheet {
    /// Parse a sprite sheet from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The stock character art: a left-facing idle loop (mirrored for right),
    /// and dedicated left/right art for running and dashing.
    pub fn standard() -> Self {
        let idle = ClipDescriptor {
            frames: ClipDescriptor::numbered("rez", 6),
            facing: Facing::Left,
            opposite: None,
        };
        let run = ClipDescriptor {
            frames: ClipDescriptor::numbered("mrd", 13),
            facing: Facing::Right,
            opposite: Some(ClipDescriptor::numbered("mrzd", 13)),
        };
        let dash = ClipDescriptor {
            frames: ClipDescriptor::numbered("bz", 14),
            facing: Facing::Right,
            opposite: Some(ClipDescriptor::numbered("bzi", 14)),
        };

        let mut clips = HashMap::new();
        clips.insert(Mode::Idle, idle.clone());
        clips.insert(Mode::Running, run);
        clips.insert(Mode::Dashing, dash);
        Self { clips, fallback: idle }
    }
}

impl Default for SpriteSheet {
    fn default() -> Self {
        Self::standard()
    }
}

impl AnimationResolver for SpriteSheet {
    fn resolve(&self, mode: Mode, facing: Facing) -> AnimationClip<'_> {
        self.clips.get(&mode).unwrap_or(&self.fallback).resolve(facing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_is_mirrored_for_right() {
        let sheet = SpriteSheet::standard();
        let left = sheet.resolve(Mode::Idle, Facing::Left);
        assert!(!left.mirrored);
        assert_eq!(left.frame_count(), 6);

        let right = sheet.resolve(Mode::Idle, Facing::Right);
        assert!(right.mirrored);
        assert_eq!(right.frame(0), Some("rez0"));
    }

    #[test]
    fn running_has_dedicated_art_per_direction() {
        let sheet = SpriteSheet::standard();
        let right = sheet.resolve(Mode::Running, Facing::Right);
        let left = sheet.resolve(Mode::Running, Facing::Left);
        assert!(!right.mirrored && !left.mirrored);
        assert_eq!(right.frame(0), Some("mrd0"));
        assert_eq!(left.frame(12), Some("mrzd12"));
        assert_eq!(sheet.frame_count(Mode::Dashing, Facing::Left), 14);
    }

    #[test]
    fn unmapped_modes_use_fallback() {
        let sheet = SpriteSheet::standard();
        assert_eq!(sheet.frame_count(Mode::Jumping, Facing::Right), 6);
        assert_eq!(sheet.frame_count(Mode::Hurt, Facing::Left), 6);
    }

    #[test]
    fn frame_lookup_clamps_index() {
        let sheet = SpriteSheet::standard();
        let clip = sheet.resolve(Mode::Idle, Facing::Left);
        assert_eq!(clip.frame(99), Some("rez5"));
    }

    #[test]
    fn parse_sheet_from_json() {
        let json = r#"{
            "clips": {
                "running": { "frames": ["r0", "r1"], "facing": "left" }
            },
            "fallback": { "frames": ["stand"], "facing": "right" }
        }"#;
        let sheet = SpriteSheet::from_json(json).unwrap();
        let run = sheet.resolve(Mode::Running, Facing::Right);
        assert!(run.mirrored);
        assert_eq!(run.frame_count(), 2);
        assert_eq!(sheet.frame_count(Mode::Falling, Facing::Left), 1);
    }
}
