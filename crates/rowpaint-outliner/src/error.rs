use std::fmt;

/// A tag argument that could not be converted into its typed value.
///
/// Never fatal: the caller substitutes a default and reports the error
/// through [`Diagnostics`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Neither an `rgb`/`rgba` list nor a known hex/named color.
    UnknownColor(String),
    /// An `rgb`/`rgba` list without 3 or 4 components.
    ComponentCount { input: String, found: usize },
    /// A gradient spec that does not split into exactly two colors.
    GradientStops { input: String, found: usize },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::UnknownColor(input) => {
                write!(f, "color {input:?} could not be converted")
            }
            ConvertError::ComponentCount { input, found } => {
                write!(f, "color {input:?} has {found} components, expected 3 or 4")
            }
            ConvertError::GradientStops { input, found } => {
                write!(f, "gradient {input:?} has {found} colors, expected 2")
            }
        }
    }
}

impl std::error::Error for ConvertError {}

/// Sink for non-fatal conversion problems found while resolving a row.
///
/// Every report is logged at `warn` and kept so callers can inspect it.
#[derive(Debug, Default)]
pub struct Diagnostics {
    reports: Vec<ConvertError>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, err: ConvertError) {
        log::warn!("{err}, using default");
        self.reports.push(err);
    }

    #[inline]
    pub fn reports(&self) -> &[ConvertError] {
        &self.reports
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}
