//! Grid prop names and the set of props a caller supplied explicitly.

use bitflags::bitflags;
use phf::phf_map;

use super::Breakpoint;

/// A prop accepted by a grid node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropName {
    Container,
    Item,
    Direction,
    Wrap,
    AlignItems,
    AlignContent,
    Justify,
    Spacing,
    Span(Breakpoint),
    ZeroMinWidth,
    Maximize,
    Relative,
    ClassName,
    Component,
    Style,
}

/// Accepted spellings, camelCase as written in markup and kebab-case as
/// written in stylesheets.
static PROP_NAMES: phf::Map<&'static str, PropName> = phf_map! {
    "container" => PropName::Container,
    "item" => PropName::Item,
    "direction" => PropName::Direction,
    "wrap" => PropName::Wrap,
    "alignItems" => PropName::AlignItems,
    "align-items" => PropName::AlignItems,
    "alignContent" => PropName::AlignContent,
    "align-content" => PropName::AlignContent,
    "justify" => PropName::Justify,
    "spacing" => PropName::Spacing,
    "xs" => PropName::Span(Breakpoint::Xs),
    "sm" => PropName::Span(Breakpoint::Sm),
    "md" => PropName::Span(Breakpoint::Md),
    "lg" => PropName::Span(Breakpoint::Lg),
    "xl" => PropName::Span(Breakpoint::Xl),
    "zeroMinWidth" => PropName::ZeroMinWidth,
    "zero-min-width" => PropName::ZeroMinWidth,
    "maximize" => PropName::Maximize,
    "relative" => PropName::Relative,
    "className" => PropName::ClassName,
    "class" => PropName::ClassName,
    "component" => PropName::Component,
    "style" => PropName::Style,
};

impl PropName {
    /// Looks up a prop by any of its accepted spellings.
    pub fn lookup(name: &str) -> Option<PropName> {
        PROP_NAMES.get(name).copied()
    }

    /// The canonical camelCase spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropName::Container => "container",
            PropName::Item => "item",
            PropName::Direction => "direction",
            PropName::Wrap => "wrap",
            PropName::AlignItems => "alignItems",
            PropName::AlignContent => "alignContent",
            PropName::Justify => "justify",
            PropName::Spacing => "spacing",
            PropName::Span(bp) => bp.as_str(),
            PropName::ZeroMinWidth => "zeroMinWidth",
            PropName::Maximize => "maximize",
            PropName::Relative => "relative",
            PropName::ClassName => "className",
            PropName::Component => "component",
            PropName::Style => "style",
        }
    }

    /// The explicit-prop bit recorded when this prop is supplied.
    pub fn flag(&self) -> ExplicitProps {
        match self {
            PropName::Container => ExplicitProps::CONTAINER,
            PropName::Item => ExplicitProps::ITEM,
            PropName::Direction => ExplicitProps::DIRECTION,
            PropName::Wrap => ExplicitProps::WRAP,
            PropName::AlignItems => ExplicitProps::ALIGN_ITEMS,
            PropName::AlignContent => ExplicitProps::ALIGN_CONTENT,
            PropName::Justify => ExplicitProps::JUSTIFY,
            PropName::Spacing => ExplicitProps::SPACING,
            PropName::Span(bp) => ExplicitProps::span(*bp),
            PropName::ZeroMinWidth => ExplicitProps::ZERO_MIN_WIDTH,
            PropName::Maximize => ExplicitProps::MAXIMIZE,
            PropName::Relative => ExplicitProps::RELATIVE,
            PropName::ClassName => ExplicitProps::CLASS_NAME,
            PropName::Component => ExplicitProps::COMPONENT,
            PropName::Style => ExplicitProps::STYLE,
        }
    }
}

bitflags! {
    /// Props the caller actually supplied, as opposed to defaulted ones.
    ///
    /// A prop counts as explicit even when its value equals the default:
    /// `direction="row"` still enables the flex context class.
    ///
    /// # Example
    ///
    /// ```
    /// use gridcss::types::ExplicitProps;
    ///
    /// let explicit = ExplicitProps::ITEM | ExplicitProps::JUSTIFY;
    /// assert!(explicit.intersects(ExplicitProps::FLEX_CONTEXT));
    /// assert!(!ExplicitProps::ITEM.intersects(ExplicitProps::FLEX_CONTEXT));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ExplicitProps: u32 {
        const CONTAINER      = 1 << 0;
        const ITEM           = 1 << 1;
        const DIRECTION      = 1 << 2;
        const WRAP           = 1 << 3;
        const ALIGN_ITEMS    = 1 << 4;
        const ALIGN_CONTENT  = 1 << 5;
        const JUSTIFY        = 1 << 6;
        const SPACING        = 1 << 7;
        const XS             = 1 << 8;
        const SM             = 1 << 9;
        const MD             = 1 << 10;
        const LG             = 1 << 11;
        const XL             = 1 << 12;
        const ZERO_MIN_WIDTH = 1 << 13;
        const MAXIMIZE       = 1 << 14;
        const RELATIVE       = 1 << 15;
        const CLASS_NAME     = 1 << 16;
        const COMPONENT      = 1 << 17;
        const STYLE          = 1 << 18;

        /// Any of these makes the node a flex context.
        const FLEX_CONTEXT = Self::DIRECTION.bits()
            | Self::WRAP.bits()
            | Self::ALIGN_ITEMS.bits()
            | Self::ALIGN_CONTENT.bits()
            | Self::JUSTIFY.bits();
    }
}

impl ExplicitProps {
    /// The bit for the column span at `breakpoint`.
    pub fn span(breakpoint: Breakpoint) -> ExplicitProps {
        match breakpoint {
            Breakpoint::Xs => ExplicitProps::XS,
            Breakpoint::Sm => ExplicitProps::SM,
            Breakpoint::Md => ExplicitProps::MD,
            Breakpoint::Lg => ExplicitProps::LG,
            Breakpoint::Xl => ExplicitProps::XL,
        }
    }
}
