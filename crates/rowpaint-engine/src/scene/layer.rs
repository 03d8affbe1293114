/// Paint layer of a decorated row, back to front.
///
/// A row paints its border ring first, then the fill or gradient on top of it,
/// then the icon, then the label.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Layer {
    Border,
    Content,
    Icon,
    Label,
}

/// Stable sort key for draw items.
///
/// Ordering rules:
/// 1) `layer`: ascending (back-to-front)
/// 2) `order`: ascending (insertion order within a layer)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub layer: Layer,
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(layer: Layer, order: u32) -> Self {
        Self { layer, order }
    }
}
