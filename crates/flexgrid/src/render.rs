//! Rendering node trees to markup.
//!
//! Rendering a grid always resolves its classes; outside production it
//! also validates the node and hands the diagnostics to a
//! [`DiagnosticSink`]. Diagnostics never change what gets rendered.

use std::fmt;

use crate::class_map::ClassMap;
use crate::config::GridConfig;
use crate::node::{Element, Grid, Node};
use crate::sink::DiagnosticSink;

/// What a render call needs besides the node itself.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub config: &'a GridConfig,
    pub classes: &'a dyn ClassMap,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a GridConfig, classes: &'a dyn ClassMap) -> Self {
        Self { config, classes }
    }
}

/// A rendered tree, printable as HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Element {
        tag: String,
        class: Option<String>,
        style: Option<String>,
        children: Vec<Rendered>,
    },
    Text(String),
}

impl Rendered {
    pub fn class(&self) -> Option<&str> {
        match self {
            Rendered::Element { class, .. } => class.as_deref(),
            Rendered::Text(_) => None,
        }
    }

    pub fn style(&self) -> Option<&str> {
        match self {
            Rendered::Element { style, .. } => style.as_deref(),
            Rendered::Text(_) => None,
        }
    }

    pub fn children(&self) -> &[Rendered] {
        match self {
            Rendered::Element { children, .. } => children,
            Rendered::Text(_) => &[],
        }
    }
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rendered::Text(text) => write_escaped(f, text),
            Rendered::Element {
                tag,
                class,
                style,
                children,
            } => {
                let tag = if is_tag_name(tag) { tag.as_str() } else { "div" };
                write!(f, "<{tag}")?;
                if let Some(class) = class {
                    f.write_str(" class=\"")?;
                    write_escaped(f, class)?;
                    f.write_str("\"")?;
                }
                if let Some(style) = style {
                    f.write_str(" style=\"")?;
                    write_escaped(f, style)?;
                    f.write_str("\"")?;
                }
                f.write_str(">")?;
                for child in children {
                    write!(f, "{child}")?;
                }
                write!(f, "</{tag}>")
            }
        }
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    for c in text.chars() {
        match c {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '"' => f.write_str("&quot;")?,
            '\'' => f.write_str("&#39;")?,
            c => write!(f, "{c}")?,
        }
    }
    Ok(())
}

/// True for names usable as an HTML tag: an ASCII letter followed by ASCII
/// alphanumerics or `-`.
pub(crate) fn is_tag_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

fn checked_tag(name: &str) -> String {
    if is_tag_name(name) {
        name.to_string()
    } else {
        log::warn!("invalid tag name {name:?}, rendering as div");
        "div".to_string()
    }
}

fn join_classes<'a>(names: impl IntoIterator<Item = &'a str>) -> Option<String> {
    let joined = names
        .into_iter()
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    (!joined.is_empty()).then_some(joined)
}

impl Node {
    /// Renders this node; absent nodes render to nothing.
    pub fn render(&self, cx: &RenderContext<'_>, sink: &mut dyn DiagnosticSink) -> Option<Rendered> {
        match self {
            Node::Grid(grid) => Some(grid.render(cx, sink)),
            Node::Element(element) => Some(element.render(cx, sink)),
            Node::Text(text) => Some(Rendered::Text(text.clone())),
            Node::Empty => None,
        }
    }
}

fn render_children(
    children: &[Node],
    cx: &RenderContext<'_>,
    sink: &mut dyn DiagnosticSink,
) -> Vec<Rendered> {
    children
        .iter()
        .filter_map(|child| child.render(cx, sink))
        .collect()
}

impl Grid {
    /// Renders this grid and its subtree.
    pub fn render(&self, cx: &RenderContext<'_>, sink: &mut dyn DiagnosticSink) -> Rendered {
        let keys = self.classes(&cx.config.breakpoints);

        log::trace!(
            "RESOLVE: Grid component={} explicit={:?} -> {}",
            self.props().component,
            self.intent().explicit,
            keys
        );

        let mut names = Vec::with_capacity(keys.len() + 1);
        for key in &keys {
            match cx.classes.lookup(key) {
                Ok(name) => names.push(name),
                Err(e) => log::warn!("{e}"),
            }
        }
        if let Some(class_name) = &self.props().class_name {
            names.push(class_name.as_str());
        }

        let mut style = self.props().style.clone();
        if cx.config.validates() {
            for diagnostic in self.check(cx.config) {
                sink.report(diagnostic);
            }
            style.merge(&cx.config.debug_style);
        }

        Rendered::Element {
            tag: checked_tag(&self.props().component),
            class: join_classes(names),
            style: (!style.is_empty()).then(|| style.to_string()),
            children: render_children(self.children(), cx, sink),
        }
    }
}

impl Element {
    pub fn render(&self, cx: &RenderContext<'_>, sink: &mut dyn DiagnosticSink) -> Rendered {
        Rendered::Element {
            tag: checked_tag(&self.name),
            class: join_classes(self.class_name.as_deref()),
            style: (!self.style.is_empty()).then(|| self.style.to_string()),
            children: render_children(&self.children, cx, sink),
        }
    }
}
