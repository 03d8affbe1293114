use crate::tag::TagRole;

/// One extracted tag occurrence with its raw, unconverted argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Gradient(String),
    Background(String),
    Border(String),
    TextColor(String),
    BorderSize(String),
    TextSize(String),
    TextFormat(String),
    Icon,
}

impl Directive {
    pub(crate) fn new(role: TagRole, argument: String) -> Self {
        match role {
            TagRole::Gradient => Directive::Gradient(argument),
            TagRole::Background => Directive::Background(argument),
            TagRole::Border => Directive::Border(argument),
            TagRole::TextColor => Directive::TextColor(argument),
            TagRole::BorderSize => Directive::BorderSize(argument),
            TagRole::TextSize => Directive::TextSize(argument),
            TagRole::TextFormat => Directive::TextFormat(argument),
            TagRole::Icon => Directive::Icon,
        }
    }

    pub fn role(&self) -> TagRole {
        match self {
            Directive::Gradient(_) => TagRole::Gradient,
            Directive::Background(_) => TagRole::Background,
            Directive::Border(_) => TagRole::Border,
            Directive::TextColor(_) => TagRole::TextColor,
            Directive::BorderSize(_) => TagRole::BorderSize,
            Directive::TextSize(_) => TagRole::TextSize,
            Directive::TextFormat(_) => TagRole::TextFormat,
            Directive::Icon => TagRole::Icon,
        }
    }

    /// Raw argument. Switch directives have none.
    pub fn argument(&self) -> Option<&str> {
        match self {
            Directive::Gradient(a)
            | Directive::Background(a)
            | Directive::Border(a)
            | Directive::TextColor(a)
            | Directive::BorderSize(a)
            | Directive::TextSize(a)
            | Directive::TextFormat(a) => Some(a),
            Directive::Icon => None,
        }
    }
}

/// Result of tokenizing a tagged row name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedLabel {
    /// What is left once tags and separators are stripped. `None` when nothing is left.
    pub text: Option<String>,
    /// Directives in tag-vocabulary order; at most one per tag token.
    pub directives: Vec<Directive>,
}

impl ParsedLabel {
    /// Returns the first directive with `role`, if present.
    pub fn directive(&self, role: TagRole) -> Option<&Directive> {
        self.directives.iter().find(|d| d.role() == role)
    }

    /// Raw argument for `role`. Present switch tags yield `Some("")`.
    pub fn argument(&self, role: TagRole) -> Option<&str> {
        self.directive(role).map(|d| d.argument().unwrap_or(""))
    }

    #[inline]
    pub fn has(&self, role: TagRole) -> bool {
        self.directive(role).is_some()
    }
}
