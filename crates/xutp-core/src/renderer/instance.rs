use bytemuck::{Pod, Zeroable};

/// Per-sprite render data handed to the presentation layer.
/// 8 floats = 32 bytes stride; the host reads the buffer as a flat `Float32Array`.
///
/// `mode` and `facing` let the host resolve the same clip the simulation
/// used; `frame` indexes into that clip and is already clamped to it.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    /// X of the sprite's anchor (horizontal centre) in world units.
    pub x: f32,
    /// Y of the sprite's anchor (feet) in world units.
    pub y: f32,
    /// Frame index within the resolved clip.
    pub frame: f32,
    /// `Mode::id()` of the clip.
    pub mode: f32,
    /// -1.0 facing left, +1.0 facing right.
    pub facing: f32,
    /// 1.0 when the clip must be mirrored horizontally.
    pub mirrored: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
    /// 1.0 for dash afterimages (drawn as a tinted silhouette), 0.0 for the character.
    pub ghost: f32,
}

impl SpriteInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Sprite instances for one tick: afterimages first, the character last.
pub struct RenderBuffer {
    pub instances: Vec<SpriteInstance>,
}

impl RenderBuffer {
    /// An empty buffer.
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(16),
        }
    }

    /// Drop all instances, keeping the allocation.
    pub fn clear(&mut self) {
        self.instances.clear();
    }

    /// Append one sprite.
    pub fn push(&mut self, instance: SpriteInstance) {
        self.instances.push(instance);
    }

    /// Number of sprites in the buffer.
    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// The instances as a flat float slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances[..])
    }

    /// Raw pointer to instance data for shared-memory reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
