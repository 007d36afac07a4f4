//! Layout intent: everything that decides which grid classes a node gets.
//!
//! A [`LayoutIntent`] is built once per node, either through the `with_*`
//! setters or from raw props. Every setter records its prop in
//! [`LayoutIntent::explicit`], so "was this prop written" never has to be
//! guessed from "does the value equal the default".

use gridcss::types::{
    AlignContent, AlignItems, Breakpoint, Direction, ExplicitProps, GridSize, Justify,
    SpacingLevel, Wrap,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct LayoutIntent {
    pub container: bool,
    pub item: bool,
    pub direction: Direction,
    pub wrap: Wrap,
    pub align_items: AlignItems,
    pub align_content: AlignContent,
    pub justify: Justify,
    /// Gutter between children; only meaningful on containers.
    pub spacing: SpacingLevel,
    /// Column span per breakpoint, indexed by [`Breakpoint::index`].
    pub spans: [GridSize; 5],
    pub zero_min_width: bool,
    pub maximize: bool,
    pub relative: bool,
    pub explicit: ExplicitProps,
}

impl LayoutIntent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_container(&self) -> bool {
        self.container
    }

    pub fn is_item(&self) -> bool {
        self.item
    }

    pub fn span(&self, breakpoint: Breakpoint) -> GridSize {
        self.spans[breakpoint.index()]
    }

    pub fn is_explicit(&self, props: ExplicitProps) -> bool {
        self.explicit.intersects(props)
    }

    pub fn with_container(mut self, container: bool) -> Self {
        self.container = container;
        self.explicit |= ExplicitProps::CONTAINER;
        self
    }

    pub fn with_item(mut self, item: bool) -> Self {
        self.item = item;
        self.explicit |= ExplicitProps::ITEM;
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self.explicit |= ExplicitProps::DIRECTION;
        self
    }

    pub fn with_wrap(mut self, wrap: Wrap) -> Self {
        self.wrap = wrap;
        self.explicit |= ExplicitProps::WRAP;
        self
    }

    pub fn with_align_items(mut self, align_items: AlignItems) -> Self {
        self.align_items = align_items;
        self.explicit |= ExplicitProps::ALIGN_ITEMS;
        self
    }

    pub fn with_align_content(mut self, align_content: AlignContent) -> Self {
        self.align_content = align_content;
        self.explicit |= ExplicitProps::ALIGN_CONTENT;
        self
    }

    pub fn with_justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self.explicit |= ExplicitProps::JUSTIFY;
        self
    }

    pub fn with_spacing(mut self, spacing: SpacingLevel) -> Self {
        self.spacing = spacing;
        self.explicit |= ExplicitProps::SPACING;
        self
    }

    pub fn with_span(mut self, breakpoint: Breakpoint, size: impl Into<GridSize>) -> Self {
        self.spans[breakpoint.index()] = size.into();
        self.explicit |= ExplicitProps::span(breakpoint);
        self
    }

    pub fn with_xs(self, size: impl Into<GridSize>) -> Self {
        self.with_span(Breakpoint::Xs, size)
    }

    pub fn with_sm(self, size: impl Into<GridSize>) -> Self {
        self.with_span(Breakpoint::Sm, size)
    }

    pub fn with_md(self, size: impl Into<GridSize>) -> Self {
        self.with_span(Breakpoint::Md, size)
    }

    pub fn with_lg(self, size: impl Into<GridSize>) -> Self {
        self.with_span(Breakpoint::Lg, size)
    }

    pub fn with_xl(self, size: impl Into<GridSize>) -> Self {
        self.with_span(Breakpoint::Xl, size)
    }

    pub fn with_zero_min_width(mut self, zero_min_width: bool) -> Self {
        self.zero_min_width = zero_min_width;
        self.explicit |= ExplicitProps::ZERO_MIN_WIDTH;
        self
    }

    pub fn with_maximize(mut self, maximize: bool) -> Self {
        self.maximize = maximize;
        self.explicit |= ExplicitProps::MAXIMIZE;
        self
    }

    pub fn with_relative(mut self, relative: bool) -> Self {
        self.relative = relative;
        self.explicit |= ExplicitProps::RELATIVE;
        self
    }
}
