//! Rowpaint engine crate.
//!
//! Renderer-agnostic pieces shared by the outliner decorator: geometry,
//! colors, textures, and the recorded draw stream handed to the host.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod text;
pub mod texture;
