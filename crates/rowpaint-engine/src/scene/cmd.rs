use crate::scene::shapes::{RectCmd, TextCmd};

/// Renderer-agnostic draw command stream.
///
/// Gradients and icons are rect commands with a texture paint.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    Text(TextCmd),
}

impl DrawCmd {
    #[inline]
    pub fn as_rect(&self) -> Option<&RectCmd> {
        match self {
            DrawCmd::Rect(r) => Some(r),
            DrawCmd::Text(_) => None,
        }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&TextCmd> {
        match self {
            DrawCmd::Text(t) => Some(t),
            DrawCmd::Rect(_) => None,
        }
    }
}
