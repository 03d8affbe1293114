use rowpaint_engine::coords::Rect;
use rowpaint_engine::paint::GradientTextures;
use rowpaint_engine::scene::{DrawList, Layer, TextCmd};
use rowpaint_engine::texture::{TextureId, TextureStore};
use rowpaint_tags::parse_label;

use crate::config::DecoratorConfig;
use crate::error::Diagnostics;
use crate::host::{AssetSource, Hierarchy, RowId, RowObject};
use crate::resolve::resolve;
use crate::state::{ContentFill, DrawState};

/// Lazily resolved icon texture.
#[derive(Debug, Copy, Clone, PartialEq)]
enum IconSlot {
    Unresolved,
    Ready(TextureId),
    /// Lookup failed once; icons are skipped from now on.
    Missing,
}

/// Paints tag-styled rows into a [`DrawList`].
///
/// Owns the texture store, the gradient cache, and the memoized icon, so one
/// decorator should live as long as the host panel. Call
/// [`paint_row`](Self::paint_row) from the host's per-row repaint callback.
#[derive(Debug)]
pub struct RowDecorator {
    config: DecoratorConfig,
    textures: TextureStore,
    gradients: GradientTextures,
    icon: IconSlot,
}

impl RowDecorator {
    pub fn new(config: DecoratorConfig) -> Self {
        Self {
            config,
            textures: TextureStore::new(),
            gradients: GradientTextures::new(),
            icon: IconSlot::Unresolved,
        }
    }

    #[inline]
    pub fn config(&self) -> &DecoratorConfig {
        &self.config
    }

    /// Bitmaps referenced by texture paints in emitted commands.
    #[inline]
    pub fn textures(&self) -> &TextureStore {
        &self.textures
    }

    #[inline]
    pub fn gradients(&self) -> &GradientTextures {
        &self.gradients
    }

    /// Records decoration for one row.
    ///
    /// Rows that don't resolve, or whose name lacks the marker prefix and
    /// whose object lacks the marker capability, emit nothing. Returns the
    /// resolved state for marked rows.
    pub fn paint_row<H, A>(
        &mut self,
        host: &H,
        assets: &A,
        row: RowId,
        selection: Rect,
        out: &mut DrawList,
    ) -> Option<DrawState>
    where
        H: Hierarchy + ?Sized,
        A: AssetSource + ?Sized,
    {
        let object = host.object(row)?;
        let row_rect = self.config.row_rect(selection);

        let state = self.config.is_marked(object.name()).then(|| {
            let mut diagnostics = Diagnostics::new();
            let state = resolve(&parse_label(object.name()), row_rect, &mut diagnostics);
            if !diagnostics.is_empty() {
                log::debug!("row {row:?}: {} tag argument(s) defaulted", diagnostics.len());
            }
            state
        });

        if let Some(state) = &state {
            self.paint_state(state, out);
        }

        let wants_icon = state.as_ref().is_some_and(|s| s.icon_enabled) || object.has_marker();
        if wants_icon {
            self.paint_icon(assets, row_rect, out);
        }

        if let Some(state) = &state {
            self.paint_label(state, out);
        }

        state
    }

    fn paint_state(&mut self, state: &DrawState, out: &mut DrawList) {
        if state.border_enabled {
            out.push_solid_rect(Layer::Border, state.row_rect, state.border_color);
        }

        match state.content_fill() {
            Some(ContentFill::Solid(color)) => {
                out.push_solid_rect(Layer::Content, state.content_rect, color);
            }
            Some(ContentFill::Gradient { key, from, to }) => {
                let (w, h) = self.config.gradient_texture_size;
                let texture = self.gradients.get_or_create(&mut self.textures, key, w, h, from, to);
                out.push_texture_rect(Layer::Content, state.content_rect, texture);
            }
            None => {}
        }
    }

    fn paint_icon<A: AssetSource + ?Sized>(&mut self, assets: &A, row_rect: Rect, out: &mut DrawList) {
        if let Some(texture) = self.icon_texture(assets) {
            out.push_texture_rect(Layer::Icon, self.config.icon_rect(row_rect), texture);
        }
    }

    fn paint_label(&self, state: &DrawState, out: &mut DrawList) {
        if !state.text_enabled {
            return;
        }
        out.push_text(Layer::Label, TextCmd {
            text: state.text.clone(),
            rect: state.row_rect,
            size: state.text_size,
            color: state.text_color,
            style: state.font_style,
            align: state.text_align,
            word_wrap: true,
        });
    }

    fn icon_texture<A: AssetSource + ?Sized>(&mut self, assets: &A) -> Option<TextureId> {
        if self.icon == IconSlot::Unresolved {
            self.icon = match assets.find_image(&self.config.icon_asset) {
                Ok(image) => IconSlot::Ready(self.textures.insert(image)),
                Err(err) => {
                    log::error!("row icon unavailable: {err:#}");
                    IconSlot::Missing
                }
            };
        }

        match self.icon {
            IconSlot::Ready(texture) => Some(texture),
            IconSlot::Unresolved | IconSlot::Missing => None,
        }
    }
}
