//! Flexbox keyword types for grid containers and items.
//!
//! Each type maps one-to-one onto the CSS keyword it stands for:
//!
//! - [`Direction`]: `flex-direction`
//! - [`Wrap`]: `flex-wrap`
//! - [`AlignItems`]: `align-items`
//! - [`AlignContent`]: `align-content`
//! - [`Justify`]: `justify-content`
//!
//! The default variant of each type is the value the base grid styles
//! already apply, so it never needs an override class.
//!
//! ## Prop Syntax
//!
//! ```text
//! <Grid container direction="column" wrap="nowrap" justify="space-between">
//! ```

use std::fmt;
use std::str::FromStr;

use crate::GridCssError;

/// Declares a keyword enum along with its CSS spelling, parser and printer.
macro_rules! keyword_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $prop:literal {
            $(#[default] $default:ident => $default_lit:literal,)?
            $($variant:ident => $lit:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            $(#[default] $default,)?
            $($variant,)*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$default,)? $($name::$variant,)*];

            /// The CSS keyword for this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$default => $default_lit,)?
                    $($name::$variant => $lit,)*
                }
            }

            /// Whether this is the default value.
            pub fn is_default(&self) -> bool {
                *self == $name::default()
            }
        }

        impl FromStr for $name {
            type Err = GridCssError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($default_lit => Ok($name::$default),)?
                    $($lit => Ok($name::$variant),)*
                    other => Err(GridCssError::InvalidValue {
                        prop: $prop,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

keyword_enum! {
    /// Main axis of a flex container.
    Direction, "direction" {
        #[default] Row => "row",
        RowReverse => "row-reverse",
        Column => "column",
        ColumnReverse => "column-reverse",
    }
}

impl Direction {
    /// True for `column` and `column-reverse`.
    pub fn is_column(&self) -> bool {
        matches!(self, Direction::Column | Direction::ColumnReverse)
    }

    /// True for `row` and `row-reverse`.
    pub fn is_row(&self) -> bool {
        !self.is_column()
    }
}

keyword_enum! {
    /// Whether children wrap onto multiple lines.
    Wrap, "wrap" {
        #[default] Wrap => "wrap",
        NoWrap => "nowrap",
        WrapReverse => "wrap-reverse",
    }
}

keyword_enum! {
    /// Cross-axis alignment of children within a line.
    AlignItems, "alignItems" {
        #[default] Stretch => "stretch",
        Center => "center",
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        Baseline => "baseline",
    }
}

keyword_enum! {
    /// Cross-axis distribution of lines when children wrap.
    AlignContent, "alignContent" {
        #[default] Stretch => "stretch",
        Center => "center",
        FlexStart => "flex-start",
        FlexEnd => "flex-end",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
    }
}

keyword_enum! {
    /// Main-axis distribution of children.
    Justify, "justify" {
        #[default] FlexStart => "flex-start",
        Center => "center",
        FlexEnd => "flex-end",
        SpaceBetween => "space-between",
        SpaceAround => "space-around",
        SpaceEvenly => "space-evenly",
    }
}
