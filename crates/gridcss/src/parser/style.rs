use std::fmt;

use crate::types::{Edges, Scalar};

/// A single inline style declaration such as `margin-left: 8px`.
#[derive(Clone, Debug, PartialEq)]
pub enum Declaration {
    Margin(Edges),
    MarginTop(Scalar),
    MarginRight(Scalar),
    MarginBottom(Scalar),
    MarginLeft(Scalar),
    Padding(Edges),
    PaddingTop(Scalar),
    PaddingRight(Scalar),
    PaddingBottom(Scalar),
    PaddingLeft(Scalar),
    Width(Scalar),
    Height(Scalar),
    MinWidth(Scalar),
    MaxWidth(Scalar),
    MinHeight(Scalar),
    MaxHeight(Scalar),
    /// Any other property, kept verbatim as `(property, value)`.
    Unknown(String, String),
}

impl Declaration {
    /// The CSS property name of this declaration.
    pub fn property(&self) -> &str {
        match self {
            Declaration::Margin(_) => "margin",
            Declaration::MarginTop(_) => "margin-top",
            Declaration::MarginRight(_) => "margin-right",
            Declaration::MarginBottom(_) => "margin-bottom",
            Declaration::MarginLeft(_) => "margin-left",
            Declaration::Padding(_) => "padding",
            Declaration::PaddingTop(_) => "padding-top",
            Declaration::PaddingRight(_) => "padding-right",
            Declaration::PaddingBottom(_) => "padding-bottom",
            Declaration::PaddingLeft(_) => "padding-left",
            Declaration::Width(_) => "width",
            Declaration::Height(_) => "height",
            Declaration::MinWidth(_) => "min-width",
            Declaration::MaxWidth(_) => "max-width",
            Declaration::MinHeight(_) => "min-height",
            Declaration::MaxHeight(_) => "max-height",
            Declaration::Unknown(property, _) => property,
        }
    }

    /// `margin` or any `margin-*` longhand.
    pub fn is_margin(&self) -> bool {
        is_family(self.property(), "margin")
    }

    /// `padding` or any `padding-*` longhand.
    pub fn is_padding(&self) -> bool {
        is_family(self.property(), "padding")
    }
}

fn is_family(property: &str, family: &str) -> bool {
    property
        .strip_prefix(family)
        .is_some_and(|rest| {
            rest.is_empty()
                || rest.starts_with('-')
                || rest.starts_with(|c: char| c.is_ascii_uppercase())
        })
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let property = self.property();
        match self {
            Declaration::Margin(edges) | Declaration::Padding(edges) => {
                write!(f, "{property}: {edges}")
            }
            Declaration::MarginTop(s)
            | Declaration::MarginRight(s)
            | Declaration::MarginBottom(s)
            | Declaration::MarginLeft(s)
            | Declaration::PaddingTop(s)
            | Declaration::PaddingRight(s)
            | Declaration::PaddingBottom(s)
            | Declaration::PaddingLeft(s)
            | Declaration::Width(s)
            | Declaration::Height(s)
            | Declaration::MinWidth(s)
            | Declaration::MaxWidth(s)
            | Declaration::MinHeight(s)
            | Declaration::MaxHeight(s) => write!(f, "{property}: {s}"),
            Declaration::Unknown(_, value) => write!(f, "{property}: {value}"),
        }
    }
}

/// The raw style overrides a caller attached to a node, in source order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InlineStyle {
    pub declarations: Vec<Declaration>,
}

impl InlineStyle {
    pub fn new(declarations: Vec<Declaration>) -> Self {
        Self { declarations }
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    pub fn push(&mut self, declaration: Declaration) {
        self.declarations.push(declaration);
    }

    /// Appends `other` after this style; later declarations win when rendered.
    pub fn merge(&mut self, other: &InlineStyle) {
        self.declarations.extend(other.declarations.iter().cloned());
    }

    /// Whether any margin property is declared, regardless of its value.
    pub fn has_margin(&self) -> bool {
        self.declarations.iter().any(Declaration::is_margin)
    }

    /// Whether any padding property is declared, regardless of its value.
    pub fn has_padding(&self) -> bool {
        self.declarations.iter().any(Declaration::is_padding)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter()
    }
}

impl From<Vec<Declaration>> for InlineStyle {
    fn from(declarations: Vec<Declaration>) -> Self {
        Self::new(declarations)
    }
}

impl fmt::Display for InlineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, declaration) in self.declarations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{declaration}")?;
        }
        Ok(())
    }
}
