use rowpaint_engine::coords::Rect;
use rowpaint_engine::paint::Color;
use rowpaint_tags::{Directive, ParsedLabel};

use crate::convert::{color_or, gradient_or, number_or, text_format};
use crate::error::Diagnostics;
use crate::state::DrawState;

/// Border argument meaning "same color as the background".
pub const BORDER_MATCHES_BACKGROUND: &str = "=";

/// Folds parsed directives, in order, into a [`DrawState`] for `row_rect`.
///
/// Malformed arguments fall back to defaults; color failures are reported
/// to `diagnostics`.
pub fn resolve(parsed: &ParsedLabel, row_rect: Rect, diagnostics: &mut Diagnostics) -> DrawState {
    parsed
        .directives
        .iter()
        .fold(DrawState::new(row_rect, parsed.text.as_deref()), |state, directive| {
            apply(state, directive, diagnostics)
        })
}

fn apply(state: DrawState, directive: &Directive, diagnostics: &mut Diagnostics) -> DrawState {
    let row = state.row_rect;

    match directive {
        Directive::Gradient(spec) => DrawState {
            gradient_enabled: true,
            gradient_colors: gradient_or(spec, DrawState::DEFAULT_GRADIENT, diagnostics),
            gradient_key: spec.clone(),
            border_enabled: false,
            content_rect: row,
            ..state
        },
        Directive::Background(arg) => DrawState {
            background_enabled: true,
            background_color: color_or(arg, Color::WHITE, diagnostics),
            ..state
        },
        // A matching border would be invisible; skip it and fill the whole row instead.
        Directive::Border(arg) if arg == BORDER_MATCHES_BACKGROUND => DrawState {
            border_enabled: false,
            content_rect: row,
            ..state
        },
        Directive::Border(arg) => DrawState {
            border_enabled: true,
            border_color: color_or(arg, Color::WHITE, diagnostics),
            content_rect: row.inset(state.border_inset),
            ..state
        },
        Directive::TextColor(arg) => DrawState {
            text_color: color_or(arg, Color::WHITE, diagnostics),
            ..state
        },
        Directive::BorderSize(arg) => {
            let inset = number_or(arg, DrawState::DEFAULT_BORDER_INSET);
            DrawState {
                border_enabled: true,
                border_inset: inset,
                content_rect: row.inset(inset),
                ..state
            }
        }
        Directive::TextSize(arg) => DrawState {
            text_size: number_or(arg, DrawState::DEFAULT_TEXT_SIZE),
            ..state
        },
        Directive::TextFormat(arg) => {
            let (font_style, text_align) = text_format(arg);
            DrawState { font_style, text_align, ..state }
        }
        Directive::Icon => DrawState { icon_enabled: true, ..state },
    }
}
