use rowpaint_engine::coords::Rect;
use rowpaint_engine::paint::Color;
use rowpaint_engine::text::{FontStyle, TextAlign};

/// Fully resolved paint parameters for one decorated row.
///
/// Built fresh per row per repaint and consumed immediately.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawState {
    /// Full row rect: border ring, label, and icon paint here.
    pub row_rect: Rect,
    /// Where the fill or gradient paints. Inset from `row_rect` when a border is on.
    pub content_rect: Rect,

    pub background_enabled: bool,
    pub background_color: Color,

    pub border_enabled: bool,
    pub border_color: Color,
    pub border_inset: f32,

    pub gradient_enabled: bool,
    pub gradient_colors: (Color, Color),
    /// Raw gradient spec; identifies the cached texture.
    pub gradient_key: String,

    pub text_enabled: bool,
    pub text: String,
    pub text_color: Color,
    pub text_size: f32,
    pub font_style: FontStyle,
    pub text_align: TextAlign,

    pub icon_enabled: bool,
}

/// What paints inside `content_rect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContentFill<'a> {
    Solid(Color),
    Gradient { key: &'a str, from: Color, to: Color },
}

impl DrawState {
    pub const DEFAULT_BACKGROUND: Color = Color::BLACK;
    pub const DEFAULT_BORDER: Color = Color::WHITE;
    pub const DEFAULT_TEXT: Color = Color::RED;
    pub const DEFAULT_GRADIENT: (Color, Color) = (Color::RED, Color::BLUE);
    pub const DEFAULT_BORDER_INSET: f32 = 2.0;
    pub const DEFAULT_TEXT_SIZE: f32 = 12.0;

    /// State of a marked row that carries no tags.
    pub fn new(row_rect: Rect, text: Option<&str>) -> Self {
        Self {
            row_rect,
            content_rect: row_rect,
            background_enabled: true,
            background_color: Self::DEFAULT_BACKGROUND,
            border_enabled: false,
            border_color: Self::DEFAULT_BORDER,
            border_inset: Self::DEFAULT_BORDER_INSET,
            gradient_enabled: false,
            gradient_colors: Self::DEFAULT_GRADIENT,
            gradient_key: String::new(),
            text_enabled: text.is_some(),
            text: text.unwrap_or_default().to_owned(),
            text_color: Self::DEFAULT_TEXT,
            text_size: Self::DEFAULT_TEXT_SIZE,
            font_style: FontStyle::BoldItalic,
            text_align: TextAlign::Center,
            icon_enabled: false,
        }
    }

    /// Gradient and flat fill are exclusive: an enabled gradient replaces the fill.
    ///
    /// With opaque stops this looks the same as painting the fill underneath.
    /// Translucent stops (`gr:rgba:1,0,0,0.5-blue`) show whatever the host
    /// drew below the row, not the background color.
    pub fn content_fill(&self) -> Option<ContentFill<'_>> {
        if self.gradient_enabled {
            let (from, to) = self.gradient_colors;
            Some(ContentFill::Gradient { key: &self.gradient_key, from, to })
        } else if self.background_enabled {
            Some(ContentFill::Solid(self.background_color))
        } else {
            None
        }
    }
}
