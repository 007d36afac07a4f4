//! Class-name keys.
//!
//! A [`ClassKey`] names one precomputed style rule in the grid stylesheet.
//! Its [`Display`](std::fmt::Display) form is the exact lookup key the
//! stylesheet generator registered, e.g. `spacing-xs-3` or `grid-md-auto`.

use std::fmt;

use super::{AlignContent, AlignItems, Breakpoint, Direction, GridSize, Justify, SpacingLevel, Wrap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKey {
    Root,
    Container,
    ContainerRow,
    ContainerColumn,
    Item,
    Maximize,
    Relative,
    ZeroMinWidth,
    /// Grants `display: flex` so alignment classes work on plain items.
    FlexContext,
    Spacing(Breakpoint, SpacingLevel),
    Direction(Breakpoint, Direction),
    Wrap(Breakpoint, Wrap),
    AlignItems(Breakpoint, AlignItems),
    AlignContent(Breakpoint, AlignContent),
    Justify(Breakpoint, Justify),
    Grid(Breakpoint, GridSize),
}

impl ClassKey {
    /// Keys that do not depend on any breakpoint.
    pub const FIXED: [ClassKey; 9] = [
        ClassKey::Root,
        ClassKey::Container,
        ClassKey::ContainerRow,
        ClassKey::ContainerColumn,
        ClassKey::Item,
        ClassKey::Maximize,
        ClassKey::Relative,
        ClassKey::ZeroMinWidth,
        ClassKey::FlexContext,
    ];
}

impl fmt::Display for ClassKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassKey::Root => f.write_str("root"),
            ClassKey::Container => f.write_str("container"),
            ClassKey::ContainerRow => f.write_str("container-row"),
            ClassKey::ContainerColumn => f.write_str("container-column"),
            ClassKey::Item => f.write_str("item"),
            ClassKey::Maximize => f.write_str("maximize"),
            ClassKey::Relative => f.write_str("relative"),
            ClassKey::ZeroMinWidth => f.write_str("zero-min-width"),
            ClassKey::FlexContext => f.write_str("flex-context"),
            ClassKey::Spacing(bp, level) => write!(f, "spacing-{bp}-{level}"),
            ClassKey::Direction(bp, direction) => write!(f, "direction-{bp}-{direction}"),
            ClassKey::Wrap(bp, wrap) => write!(f, "wrap-{bp}-{wrap}"),
            ClassKey::AlignItems(bp, align) => write!(f, "align-items-{bp}-{align}"),
            ClassKey::AlignContent(bp, align) => write!(f, "align-content-{bp}-{align}"),
            ClassKey::Justify(bp, justify) => write!(f, "justify-{bp}-{justify}"),
            ClassKey::Grid(bp, size) => write!(f, "grid-{bp}-{size}"),
        }
    }
}
