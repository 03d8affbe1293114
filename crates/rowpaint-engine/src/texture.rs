//! CPU-side texture registry.
//!
//! Textures are plain `image::RgbaImage` bitmaps addressed by a [`TextureId`].
//! The host uploads them however it likes; draw commands only carry the id.

use image::RgbaImage;

/// Opaque handle into a [`TextureStore`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureId(u32);

impl TextureId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Append-only bitmap storage. Handles stay valid for the store's lifetime.
#[derive(Debug, Default)]
pub struct TextureStore {
    images: Vec<RgbaImage>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, image: RgbaImage) -> TextureId {
        let id = TextureId(self.images.len() as u32);
        self.images.push(image);
        id
    }

    #[inline]
    pub fn get(&self, id: TextureId) -> Option<&RgbaImage> {
        self.images.get(id.index())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
