use gridcss::InlineStyle;

use super::Node;

/// Any rendering primitive other than a grid, e.g. `<span>` or `<figure>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Tag or display name, used both for markup and diagnostics.
    pub name: String,
    pub class_name: Option<String>,
    pub style: InlineStyle,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class_name: None,
            style: InlineStyle::default(),
            children: Vec::new(),
        }
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_style(mut self, style: InlineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }
}

/// A plain text value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text(pub String);

impl Text {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

/// An absent child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Empty;

impl Empty {
    pub fn new() -> Self {
        Self
    }
}
