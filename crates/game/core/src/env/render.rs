//! Draw calls emitted by `render`.
//!
//! The core produces sprite and outline commands in world space; the host
//! owns the window, camera transform and actual drawing.

use super::TextureHandle;
use crate::math::{Aabb, Vec2};

/// Source rectangle inside a sprite sheet, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// One textured quad centered on `position`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpriteDraw {
    pub texture: TextureHandle,
    pub frame: FrameRect,
    pub position: Vec2,
    pub scale: f32,
    pub flip_x: bool,
}

pub trait RenderSurface {
    fn draw_sprite(&mut self, sprite: &SpriteDraw);

    /// Debug outline; surfaces without debug drawing ignore it.
    fn draw_outline(&mut self, _area: Aabb) {}
}

/// Collects draw calls in order.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    pub sprites: Vec<SpriteDraw>,
    pub outlines: Vec<Aabb>,
}

impl DrawList {
    pub fn clear(&mut self) {
        self.sprites.clear();
        self.outlines.clear();
    }
}

impl RenderSurface for DrawList {
    fn draw_sprite(&mut self, sprite: &SpriteDraw) {
        self.sprites.push(*sprite);
    }

    fn draw_outline(&mut self, area: Aabb) {
        self.outlines.push(area);
    }
}
