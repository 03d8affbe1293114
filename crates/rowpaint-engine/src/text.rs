//! Label styling shared by the resolver and text draw commands.

/// Font weight/slant of a label.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum FontStyle {
    Normal,
    Bold,
    Italic,
    #[default]
    BoldItalic,
}

/// Horizontal alignment of a label inside its rect. Vertical is always middle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}
