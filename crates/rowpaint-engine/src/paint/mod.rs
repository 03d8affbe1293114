//! Paint model shared between the decorator and the host renderer.
//!
//! Scope:
//! - color representation (straight alpha)
//! - paint sources (solid, texture)
//! - gradient bitmaps cached by their tag specification
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::GradientTextures;

use crate::texture::TextureId;

/// Paint source for filling a rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Solid(Color),
    /// Stretch the referenced texture over the whole rect.
    Texture(TextureId),
}
