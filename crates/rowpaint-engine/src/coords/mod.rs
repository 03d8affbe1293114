//! Coordinate and geometry types.
//!
//! Canonical space is the host panel's local space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
