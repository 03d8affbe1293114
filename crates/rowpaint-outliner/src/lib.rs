//! Rowpaint outliner: tag-styled rows for a host hierarchy panel.
//!
//! A row whose name starts with the marker prefix (`//` by default) is parsed
//! with [`rowpaint_tags`], resolved into a [`DrawState`], and recorded into
//! the engine's [`DrawList`](rowpaint_engine::scene::DrawList) as a border
//! ring, a fill or gradient, an icon, and a styled label.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use rowpaint_outliner::prelude::*;
//!
//! let mut decorator = RowDecorator::new(DecoratorConfig::default());
//! let assets = DirAssetSource::new("Assets/Editor/Icons");
//!
//! // In the host's per-row repaint callback:
//! let mut out = DrawList::new();
//! decorator.paint_row(&hierarchy, &assets, row_id, selection_rect, &mut out);
//! // Replay `out` with the host's drawing calls; texture paints index
//! // into `decorator.textures()`.
//! ```
//!
//! # Tag reference
//!
//! | Tag | Argument | Effect |
//! |-----|----------|--------|
//! | `gr:` | `from-to` | Horizontal gradient fill |
//! | `bg:` | color | Flat fill |
//! | `b:` | color or `=` | Border ring (`=`: no ring, full-size fill) |
//! | `t:` | color | Label color |
//! | `bs:` | number | Border thickness |
//! | `ts:` | number | Label size |
//! | `tf:` | `n`/`b`/`i`/`bi`, `l`/`c`/`r` | Font style and alignment |
//! | `icon:` `icn:` `ic:` | none | Show the row icon |
//!
//! Colors are web strings (`red`, `#ff000080`) or component lists
//! (`rgb:1,0,0`, `rgba:1,0,0,0.5`).

pub mod config;
pub mod convert;
pub mod decorator;
pub mod error;
pub mod host;
pub mod resolve;
pub mod state;

pub use config::DecoratorConfig;
pub use decorator::RowDecorator;
pub use error::{ConvertError, Diagnostics};
pub use resolve::resolve;
pub use state::{ContentFill, DrawState};

/// Everything a host integration needs.
pub mod prelude {
    pub use crate::config::DecoratorConfig;
    pub use crate::decorator::RowDecorator;
    pub use crate::host::{AssetSource, DirAssetSource, Hierarchy, RowId, RowObject};
    pub use crate::state::DrawState;

    pub use rowpaint_engine::coords::Rect;
    pub use rowpaint_engine::logging::{init_logging, LoggingConfig};
    pub use rowpaint_engine::scene::{DrawCmd, DrawList, Layer};
}
