use std::collections::HashMap;

use image::{Rgba, RgbaImage};

use crate::texture::{TextureId, TextureStore};

use super::Color;

/// Gradient bitmaps keyed by their raw specification string (e.g. `"red-blue"`).
///
/// Each distinct key is synthesized at most once for the lifetime of the cache.
/// Entries are never evicted: the key space is bounded by the distinct gradient
/// specs users have typed into row names, not by frame count.
#[derive(Debug, Default)]
pub struct GradientTextures {
    by_key: HashMap<String, TextureId>,
}

impl GradientTextures {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the texture for `key`, synthesizing it into `store` on first use.
    ///
    /// Only the key identifies an entry; a later call with the same key but
    /// different colors or size returns the bitmap built by the first call.
    pub fn get_or_create(
        &mut self,
        store: &mut TextureStore,
        key: &str,
        width: u32,
        height: u32,
        from: Color,
        to: Color,
    ) -> TextureId {
        if let Some(&id) = self.by_key.get(key) {
            return id;
        }

        let id = store.insert(horizontal_gradient(width, height, from, to));
        log::debug!("gradient texture created: key={key:?} size={width}x{height} id={id:?}");
        self.by_key.insert(key.to_owned(), id);
        id
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<TextureId> {
        self.by_key.get(key).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

/// Interpolates `from` → `to` across the x axis; every row is identical.
fn horizontal_gradient(width: u32, height: u32, from: Color, to: Color) -> RgbaImage {
    let width = width.max(1);
    let height = height.max(1);
    let last = (width - 1).max(1) as f32;

    RgbaImage::from_fn(width, height, |x, _| {
        Rgba(from.lerp(to, x as f32 / last).to_rgba8())
    })
}
