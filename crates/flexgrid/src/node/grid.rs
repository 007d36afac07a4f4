//! The Grid node.
//!
//! A responsive flexbox primitive in the spirit of the Bootstrap and
//! flexboxgrid grids: a node can be a *container* (establishes a flex
//! context and gutters for its children), an *item* (takes a column span
//! per breakpoint inside a container), or both.
//!
//! ## Props
//!
//! ```text
//! <Grid container spacing={2} justify="center">
//!     <Grid item xs={12} md={6}>...</Grid>
//!     <Grid item xs={12} md="auto">...</Grid>
//! </Grid>
//! ```

use gridcss::parser::{RawProp, parse_inline_style, parse_props};
use gridcss::types::{
    AlignContent, AlignItems, Breakpoint, Direction, GridSize, Justify, PropName, SpacingLevel,
    Wrap,
};
use gridcss::{BreakpointRegistry, GridCssError, InlineStyle};

use crate::config::GridConfig;
use crate::error::Result;
use crate::intent::LayoutIntent;
use crate::macros::impl_intent_setters;
use crate::render::is_tag_name;
use crate::resolver::{ClassSet, resolve};
use crate::validator::{Diagnostic, ValidationContext, validate};

use super::Node;

/// Everything a caller can pass to a grid node.
#[derive(Debug, Clone, PartialEq)]
pub struct GridProps {
    pub intent: LayoutIntent,
    /// Extra classes appended after the resolved ones.
    pub class_name: Option<String>,
    /// Tag rendered for the node.
    pub component: String,
    /// Raw style overrides, passed through to the rendered element.
    pub style: InlineStyle,
}

impl Default for GridProps {
    fn default() -> Self {
        Self {
            intent: LayoutIntent::default(),
            class_name: None,
            component: "div".to_string(),
            style: InlineStyle::default(),
        }
    }
}

impl GridProps {
    /// Interprets raw props, recording each one as explicit.
    ///
    /// A bare prop reads as `true`, so `<Grid item xs>` is `item={true} xs={true}`.
    pub fn from_raw(props: &[RawProp]) -> std::result::Result<GridProps, GridCssError> {
        let mut out = GridProps::default();

        for raw in props {
            let name = PropName::lookup(&raw.name)
                .ok_or_else(|| GridCssError::UnknownProp(raw.name.clone()))?;
            let value = raw.value.as_deref().unwrap_or("true");
            let intent = std::mem::take(&mut out.intent);

            let mut intent = match name {
                PropName::Container => intent.with_container(parse_flag(name, value)?),
                PropName::Item => intent.with_item(parse_flag(name, value)?),
                PropName::Direction => intent.with_direction(value.parse::<Direction>()?),
                PropName::Wrap => intent.with_wrap(value.parse::<Wrap>()?),
                PropName::AlignItems => intent.with_align_items(value.parse::<AlignItems>()?),
                PropName::AlignContent => {
                    intent.with_align_content(value.parse::<AlignContent>()?)
                }
                PropName::Justify => intent.with_justify(value.parse::<Justify>()?),
                PropName::Spacing => intent.with_spacing(value.parse::<SpacingLevel>()?),
                PropName::Span(bp) => intent.with_span(bp, value.parse::<GridSize>()?),
                PropName::ZeroMinWidth => intent.with_zero_min_width(parse_flag(name, value)?),
                PropName::Maximize => intent.with_maximize(parse_flag(name, value)?),
                PropName::Relative => intent.with_relative(parse_flag(name, value)?),
                PropName::ClassName => {
                    out.class_name = Some(value.to_string());
                    intent
                }
                PropName::Component => {
                    if !is_tag_name(value) {
                        return Err(GridCssError::InvalidValue {
                            prop: "component",
                            value: value.to_string(),
                        });
                    }
                    out.component = value.to_string();
                    intent
                }
                PropName::Style => {
                    out.style = parse_inline_style(value)?;
                    intent
                }
            };

            intent.explicit |= name.flag();
            out.intent = intent;
        }

        Ok(out)
    }
}

fn parse_flag(prop: PropName, value: &str) -> std::result::Result<bool, GridCssError> {
    match value.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(GridCssError::InvalidValue {
            prop: prop.as_str(),
            value: other.to_string(),
        }),
    }
}

/// A grid node and its children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Grid {
    props: GridProps,
    children: Vec<Node>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a grid from a JSX-like prop string.
    ///
    /// ```
    /// use flexgrid::Grid;
    ///
    /// let grid = Grid::from_props(r#"container spacing={2} justify="center""#).unwrap();
    /// assert!(grid.intent().container);
    /// assert!(Grid::from_props("spacing={11}").is_err());
    /// ```
    pub fn from_props(source: &str) -> Result<Self> {
        let raw = parse_props(source)?;
        Ok(Self::from(GridProps::from_raw(&raw)?))
    }

    pub fn props(&self) -> &GridProps {
        &self.props
    }

    pub fn intent(&self) -> &LayoutIntent {
        &self.props.intent
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn with_intent(mut self, intent: LayoutIntent) -> Self {
        self.props.intent = intent;
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.props.class_name = Some(class_name.into());
        self
    }

    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.props.component = component.into();
        self
    }

    pub fn with_style(mut self, style: InlineStyle) -> Self {
        self.props.style = style;
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn push_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Class-name keys for this node.
    pub fn classes(&self, breakpoints: &BreakpointRegistry) -> ClassSet {
        resolve(self.intent(), breakpoints)
    }

    /// This node's intent, style and immediate children, as the validator sees them.
    pub fn validation_context(&self) -> ValidationContext<'_> {
        ValidationContext::new(self.intent(), &self.props.style)
            .with_children(self.children.iter().map(Node::view).collect())
    }

    /// Runs the structural validator unless `config` is a production build.
    pub fn check(&self, config: &GridConfig) -> Vec<Diagnostic> {
        if !config.validates() {
            return Vec::new();
        }
        validate(&self.validation_context())
    }
}

impl From<GridProps> for Grid {
    fn from(props: GridProps) -> Self {
        Self {
            props,
            children: Vec::new(),
        }
    }
}

impl_intent_setters!(Grid => props.intent {
    with_container(container: bool),
    with_item(item: bool),
    with_direction(direction: Direction),
    with_wrap(wrap: Wrap),
    with_align_items(align_items: AlignItems),
    with_align_content(align_content: AlignContent),
    with_justify(justify: Justify),
    with_spacing(spacing: SpacingLevel),
    with_xs(size: impl Into<GridSize>),
    with_sm(size: impl Into<GridSize>),
    with_md(size: impl Into<GridSize>),
    with_lg(size: impl Into<GridSize>),
    with_xl(size: impl Into<GridSize>),
    with_zero_min_width(zero_min_width: bool),
    with_maximize(maximize: bool),
    with_relative(relative: bool),
});

impl Grid {
    pub fn with_span(mut self, breakpoint: Breakpoint, size: impl Into<GridSize>) -> Self {
        self.props.intent = self.props.intent.with_span(breakpoint, size);
        self
    }
}
