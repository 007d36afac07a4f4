//! Structural validation of grid nodes.
//!
//! Types cannot say "this prop only makes sense when an ancestor set that
//! other prop", so these checks look at a node together with its immediate
//! children and report likely misuse. They are heuristics: every rule is
//! checked, every hit is reported, and nothing here ever changes the
//! resolved classes or stops a render.
//!
//! | Rule | Fires when |
//! |---|---|
//! | [`Rule::ContainerItemOverlap`] | container + item + spacing |
//! | [`Rule::OrphanSpacing`] | item without container + spacing |
//! | [`Rule::MarginWithSpacing`] | container + spacing + margin override |
//! | [`Rule::ChildNotItem`] | container child grid without `item` |
//! | [`Rule::ChildPaddingWithSpacing`] | container spacing + item child with padding override |
//! | [`Rule::ChildNotLayoutNode`] | container child that is not a grid |

use std::fmt;

use gridcss::InlineStyle;

use crate::intent::LayoutIntent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Warning,
}

/// The check that produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    ContainerItemOverlap,
    OrphanSpacing,
    MarginWithSpacing,
    ChildNotItem,
    ChildPaddingWithSpacing,
    ChildNotLayoutNode,
}

/// Points at the child a diagnostic is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildRef {
    /// Position among the node's children, absent ones included.
    pub index: usize,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub rule: Rule,
    pub message: String,
    pub child: Option<ChildRef>,
}

impl Diagnostic {
    fn warning(rule: Rule, message: String) -> Self {
        Self {
            severity: Severity::Warning,
            rule,
            message,
            child: None,
        }
    }

    fn for_child(mut self, index: usize, name: impl Into<String>) -> Self {
        self.child = Some(ChildRef {
            index,
            name: name.into(),
        });
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if let Some(child) = &self.child {
            write!(f, " (child {}: {})", child.index, child.name)?;
        }
        Ok(())
    }
}

/// An immediate child as the validator sees it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChildView<'a> {
    /// Null or otherwise absent; never a violation.
    Absent,
    /// Another grid node.
    Layout { item: bool, style: &'a InlineStyle },
    /// Some other rendering primitive.
    Element { name: &'a str },
    /// A plain value such as text.
    Value { text: &'a str },
}

/// One node and its immediate children, built for a single render.
#[derive(Debug, Clone)]
pub struct ValidationContext<'a> {
    pub intent: &'a LayoutIntent,
    pub style: &'a InlineStyle,
    pub children: Vec<ChildView<'a>>,
}

impl<'a> ValidationContext<'a> {
    pub fn new(intent: &'a LayoutIntent, style: &'a InlineStyle) -> Self {
        Self {
            intent,
            style,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<ChildView<'a>>) -> Self {
        self.children = children;
        self
    }
}

/// Runs every rule against `cx`. Child diagnostics come out in child order.
pub fn validate(cx: &ValidationContext<'_>) -> Vec<Diagnostic> {
    let intent = cx.intent;
    let spacing = intent.spacing;
    let spaced = !spacing.is_zero();
    let mut diagnostics = Vec::new();

    if intent.container && intent.item && spaced {
        diagnostics.push(Diagnostic::warning(
            Rule::ContainerItemOverlap,
            "Grid component has container=true and item=true i.e. <Grid item container>. \
             Expect spacing issues."
                .to_string(),
        ));
    }

    if !intent.container && intent.item && spaced {
        diagnostics.push(Diagnostic::warning(
            Rule::OrphanSpacing,
            format!(
                "Grid component has spacing={spacing} and item=true but does not have \
                 container=true. Is this expected?"
            ),
        ));
    }

    if intent.container && spaced && cx.style.has_margin() {
        diagnostics.push(Diagnostic::warning(
            Rule::MarginWithSpacing,
            format!(
                "Grid component has spacing={spacing} but has style.margin defined. \
                 Please remove margins on this component."
            ),
        ));
    }

    if !intent.container {
        return diagnostics;
    }

    for (index, child) in cx.children.iter().enumerate() {
        match *child {
            ChildView::Absent => {}
            ChildView::Layout { item: false, .. } => {
                diagnostics.push(
                    Diagnostic::warning(
                        Rule::ChildNotItem,
                        "Immediate children of <Grid container> should be marked as \
                         \"item=true\" i.e. <Grid item>"
                            .to_string(),
                    )
                    .for_child(index, "Grid"),
                );
            }
            ChildView::Layout { item: true, style } => {
                if spaced && style.has_padding() {
                    diagnostics.push(
                        Diagnostic::warning(
                            Rule::ChildPaddingWithSpacing,
                            format!(
                                "Grid component's parent has spacing={spacing} but child has \
                                 style.padding defined. Please remove padding on this component."
                            ),
                        )
                        .for_child(index, "Grid"),
                    );
                }
            }
            ChildView::Element { name } => {
                diagnostics.push(
                    Diagnostic::warning(
                        Rule::ChildNotLayoutNode,
                        format!(
                            "Immediate children of <Grid container> should be a <Grid> but \
                             instead found <{name}>"
                        ),
                    )
                    .for_child(index, name),
                );
            }
            ChildView::Value { text } => {
                diagnostics.push(
                    Diagnostic::warning(
                        Rule::ChildNotLayoutNode,
                        format!(
                            "Immediate children of <Grid container> should be a <Grid> but \
                             instead found {text}"
                        ),
                    )
                    .for_child(index, text),
                );
            }
        }
    }

    diagnostics
}
