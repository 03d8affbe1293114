use crate::coords::Rect;
use crate::paint::{Color, Paint};
use crate::scene::{DrawCmd, DrawList, Layer};
use crate::texture::TextureId;

/// Rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub paint: Paint,
}

impl RectCmd {
    #[inline]
    pub fn new(rect: Rect, paint: Paint) -> Self {
        Self { rect, paint }
    }
}

impl DrawList {
    /// Records a rectangle draw command.
    #[inline]
    pub fn push_rect(&mut self, layer: Layer, rect: Rect, paint: Paint) {
        self.push(layer, DrawCmd::Rect(RectCmd::new(rect, paint)));
    }

    /// Records a solid rectangle draw command.
    #[inline]
    pub fn push_solid_rect(&mut self, layer: Layer, rect: Rect, color: Color) {
        self.push_rect(layer, rect, Paint::Solid(color));
    }

    /// Records a texture stretched to fill `rect`.
    #[inline]
    pub fn push_texture_rect(&mut self, layer: Layer, rect: Rect, texture: TextureId) {
        self.push_rect(layer, rect, Paint::Texture(texture));
    }
}
