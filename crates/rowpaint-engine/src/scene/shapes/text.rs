use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, Layer};
use crate::text::{FontStyle, TextAlign};

/// Text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// Layout box; text is vertically centred and aligned per `align`.
    pub rect: Rect,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
    pub style: FontStyle,
    pub align: TextAlign,
    pub word_wrap: bool,
}

impl DrawList {
    /// Records a styled label.
    pub fn push_text(&mut self, layer: Layer, cmd: TextCmd) {
        self.push(layer, DrawCmd::Text(cmd));
    }
}
