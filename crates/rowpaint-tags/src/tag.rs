/// Semantic role of a recognized tag token.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TagRole {
    Gradient,
    Background,
    Border,
    TextColor,
    BorderSize,
    TextSize,
    TextFormat,
    Icon,
}

impl TagRole {
    /// Switch tags carry no argument; their presence alone is the directive.
    #[inline]
    pub const fn is_switch(self) -> bool {
        matches!(self, TagRole::Icon)
    }
}

/// A tag token and the role it selects.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TagSpec {
    pub token: &'static str,
    pub role: TagRole,
}

impl TagSpec {
    const fn new(token: &'static str, role: TagRole) -> Self {
        Self { token, role }
    }
}

/// The tag vocabulary, in processing order.
///
/// Order is significant:
/// - `bg:` precedes `b:`, so a border's `=` argument can mean "same as background".
/// - A word holding several tokens is claimed by whichever comes first here.
///   `rgb:` contains `b:`, so `t:rgb:1,1,1` is read as a border.
pub static TAGS: [TagSpec; 10] = [
    TagSpec::new("gr:", TagRole::Gradient),
    TagSpec::new("bg:", TagRole::Background),
    TagSpec::new("b:", TagRole::Border),
    TagSpec::new("t:", TagRole::TextColor),
    TagSpec::new("bs:", TagRole::BorderSize),
    TagSpec::new("ts:", TagRole::TextSize),
    TagSpec::new("tf:", TagRole::TextFormat),
    TagSpec::new("icon:", TagRole::Icon),
    TagSpec::new("icn:", TagRole::Icon),
    TagSpec::new("ic:", TagRole::Icon),
];
