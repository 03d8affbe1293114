//! Typed conversion of raw tag arguments.
//!
//! Colors and gradients fall back to a caller-supplied default and report to
//! [`Diagnostics`]. Numbers fall back silently.

use rowpaint_engine::paint::Color;
use rowpaint_engine::text::{FontStyle, TextAlign};

use crate::error::{ConvertError, Diagnostics};

/// Case-insensitive substring that selects the component-list color syntax.
///
/// Deliberately loose: stripping the `b:` tag turns `b:rgb:1,0,0` into
/// `rg1,0,0`, which must still parse.
const RGB_MARKER: &str = "rg";

/// Separates the two stops of a gradient spec.
const GRADIENT_SEPARATOR: char = '-';

// ── colors ────────────────────────────────────────────────────────────────

/// Parses one color argument.
///
/// - Anything containing `rg` (any case) is a component list: every digit,
///   comma and period is kept, the rest dropped, and the result split on
///   commas into 3 (RGB) or 4 (RGBA) floats. A component that is not a
///   number becomes `0`.
/// - Everything else is a web color string (`#rgb`, `#rrggbbaa`, `red`, ...).
pub fn parse_color(arg: &str) -> Result<Color, ConvertError> {
    if arg.to_lowercase().contains(RGB_MARKER) {
        return parse_component_list(arg);
    }

    csscolorparser::parse(arg)
        .map(|c| Color::from_rgba8(c.to_rgba8()))
        .map_err(|_| ConvertError::UnknownColor(arg.to_owned()))
}

fn parse_component_list(arg: &str) -> Result<Color, ConvertError> {
    let kept: String = arg
        .chars()
        .filter(|&c| c.is_ascii_digit() || c == ',' || c == '.')
        .collect();
    let channels: Vec<f32> = kept.split(',').map(|c| c.parse().unwrap_or(0.0)).collect();

    match channels[..] {
        [r, g, b] => Ok(Color::rgb(r, g, b)),
        [r, g, b, a] => Ok(Color::rgba(r, g, b, a)),
        _ => Err(ConvertError::ComponentCount {
            input: arg.to_owned(),
            found: channels.len(),
        }),
    }
}

/// [`parse_color`], or `default` with one diagnostic on failure.
pub fn color_or(arg: &str, default: Color, diagnostics: &mut Diagnostics) -> Color {
    parse_color(arg).unwrap_or_else(|err| {
        diagnostics.report(err);
        default
    })
}

/// Parses a `from-to` gradient spec.
///
/// Both stops must parse. Anything else, including a spec with more or fewer
/// than two stops, yields `default` whole with one diagnostic.
pub fn gradient_or(
    arg: &str,
    default: (Color, Color),
    diagnostics: &mut Diagnostics,
) -> (Color, Color) {
    let stops: Vec<&str> = arg.split(GRADIENT_SEPARATOR).collect();
    let [from, to] = stops[..] else {
        diagnostics.report(ConvertError::GradientStops {
            input: arg.to_owned(),
            found: stops.len(),
        });
        return default;
    };

    match (parse_color(from), parse_color(to)) {
        (Ok(from), Ok(to)) => (from, to),
        (Err(err), _) | (_, Err(err)) => {
            diagnostics.report(err);
            default
        }
    }
}

// ── numbers ───────────────────────────────────────────────────────────────

/// Parses a float, or returns `default`. No diagnostic is reported.
pub fn number_or(arg: &str, default: f32) -> f32 {
    arg.trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

// ── text format ───────────────────────────────────────────────────────────

/// Parses a comma-separated list of format codes.
///
/// `n`, `b`, `i`, `bi`/`ib` pick the font style; `l`, `c`, `r` pick the
/// alignment. Later codes win within their category and unknown codes are
/// ignored. Unset categories default to bold-italic and centre.
pub fn text_format(arg: &str) -> (FontStyle, TextAlign) {
    arg.split(',').fold(
        (FontStyle::BoldItalic, TextAlign::Center),
        |(style, align), code| match code {
            "n" => (FontStyle::Normal, align),
            "b" => (FontStyle::Bold, align),
            "i" => (FontStyle::Italic, align),
            "bi" | "ib" => (FontStyle::BoldItalic, align),
            "l" => (style, TextAlign::Left),
            "c" => (style, TextAlign::Center),
            "r" => (style, TextAlign::Right),
            _ => (style, align),
        },
    )
}
