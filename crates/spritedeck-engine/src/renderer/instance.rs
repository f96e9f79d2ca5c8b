use bytemuck::{Pod, Zeroable};

use crate::api::types::{Color, TextureHandle};
use crate::core::state::PALETTE;

/// Per-sprite draw record handed to the host compose layer.
/// Flat f32 layout so hosts can upload the buffer directly:
/// 12 floats = 48 bytes stride.
///
/// `dst_x`/`dst_y` position the rotation pivot on the canvas;
/// `origin_x`/`origin_y` give the pivot offset inside the scaled destination
/// rectangle.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct StackInstance {
    /// Source rectangle in sheet pixels.
    pub src_x: f32,
    pub src_y: f32,
    pub src_w: f32,
    pub src_h: f32,
    /// Destination pivot position and scaled size.
    pub dst_x: f32,
    pub dst_y: f32,
    pub dst_w: f32,
    pub dst_h: f32,
    /// Pivot offset within the destination rectangle.
    pub origin_x: f32,
    pub origin_y: f32,
    /// Rotation about the pivot, in degrees.
    pub rotation: f32,
    /// Opacity of the white tint (1.0 = opaque).
    pub alpha: f32,
}

impl StackInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Growable buffer of stack instances in draw order (index 0 drawn first).
pub struct StackBuffer {
    instances: Vec<StackInstance>,
}

impl StackBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(32),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: StackInstance) {
        self.instances.push(instance);
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn instances(&self) -> &[StackInstance] {
        &self.instances
    }

    /// Flat f32 view for direct GPU upload.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for StackBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the host render pipeline needs for one displayed frame:
/// composite the instances into an offscreen target in order, optionally run
/// the pixelation post-process, then present over the cleared background.
pub struct FramePlan {
    /// Canvas clear color.
    pub background: Color,
    /// Readable text color paired with the background.
    pub text_color: Color,
    /// Run the pixelation post-process before presenting.
    pub pixelate: bool,
    /// Sheet texture every instance samples from. None means nothing to draw.
    pub texture: Option<TextureHandle>,
    /// Draw list, ascending stack index.
    pub sprites: StackBuffer,
}

impl FramePlan {
    pub fn new() -> Self {
        Self {
            background: PALETTE[0].background,
            text_color: PALETTE[0].text,
            pixelate: false,
            texture: None,
            sprites: StackBuffer::new(),
        }
    }

    /// Drop the texture binding and all instances; styling flags are
    /// re-derived by the next build.
    pub fn clear(&mut self) {
        self.texture = None;
        self.sprites.clear();
    }
}

impl Default for FramePlan {
    fn default() -> Self {
        Self::new()
    }
}
