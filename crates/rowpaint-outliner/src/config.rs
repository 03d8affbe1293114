use rowpaint_engine::coords::{Rect, Vec2};

/// Decorator settings.
///
/// Geometry values are in the host panel's logical pixels.
#[derive(Debug, Clone)]
pub struct DecoratorConfig {
    /// Row names starting with this are parsed for tags.
    pub marker_prefix: String,
    /// Image asset used for the row icon; looked up once, on first use.
    pub icon_asset: String,
    /// Panel-local x where decoration starts, clear of the foldout arrow.
    pub content_left: f32,
    /// How far decoration extends past the right edge of the selection rect.
    pub content_right_overhang: f32,
    /// Distance from the row's right edge to the icon's left edge.
    pub icon_right_margin: f32,
    pub icon_size: f32,
    /// Pixel size of synthesized gradient bitmaps. They are stretched to fit.
    pub gradient_texture_size: (u32, u32),
}

impl Default for DecoratorConfig {
    fn default() -> Self {
        Self {
            marker_prefix: "//".to_owned(),
            icon_asset: "row_marker_icon".to_owned(),
            content_left: 32.0,
            content_right_overhang: 16.0,
            icon_right_margin: 17.0,
            icon_size: 16.0,
            gradient_texture_size: (4, 4),
        }
    }
}

impl DecoratorConfig {
    #[inline]
    pub fn is_marked(&self, name: &str) -> bool {
        name.starts_with(&self.marker_prefix)
    }

    /// Decoration rect for a row, derived from the host's selection rect.
    ///
    /// The left edge is pinned to `content_left` regardless of indentation.
    pub fn row_rect(&self, selection: Rect) -> Rect {
        let right = selection.max().x + self.content_right_overhang;
        Rect::new(
            self.content_left,
            selection.origin.y,
            right - self.content_left,
            selection.size.y,
        )
    }

    /// Icon square at the right end of `row`, vertically centred.
    pub fn icon_rect(&self, row: Rect) -> Rect {
        let x = row.max().x - self.icon_right_margin;
        let y = row.origin.y + (row.size.y - self.icon_size) * 0.5;
        Rect::from_origin_size(Vec2::new(x, y), Vec2::splat(self.icon_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_prefix_is_exact() {
        let config = DecoratorConfig::default();
        assert!(config.is_marked("//Lights"));
        assert!(!config.is_marked("/Lights"));
        assert!(!config.is_marked(" //Lights"));
    }

    #[test]
    fn row_rect_pins_left_edge_and_overhangs_right() {
        let config = DecoratorConfig::default();
        // Indented row: selection starts at x = 60.
        let row = config.row_rect(Rect::new(60.0, 48.0, 200.0, 16.0));
        assert_eq!(row, Rect::new(32.0, 48.0, 244.0, 16.0));
    }

    #[test]
    fn icon_sits_inside_right_edge() {
        let config = DecoratorConfig::default();
        let icon = config.icon_rect(Rect::new(32.0, 0.0, 200.0, 20.0));
        assert_eq!(icon, Rect::new(215.0, 2.0, 16.0, 16.0));
    }
}
