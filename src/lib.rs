//! # flexgrid-rs
//!
//! Facade over the flexgrid workspace:
//!
//! - [`gridcss`]: typed layout vocabulary, inline style and prop parsing
//! - [`flexgrid`]: the Grid node, class resolution, structural validation
//!   and rendering
//!
//! The `layout!` and `node!` macros expand to `::flexgrid::...` paths, so
//! crates using them depend on `flexgrid` directly.
//!
//! ```rust
//! use flexgrid_rs::prelude::*;
//!
//! let grid = Grid::new()
//!     .with_item(true)
//!     .with_xs(GridSize::columns(6).unwrap())
//!     .with_md(GridSize::Auto);
//! let classes = grid.classes(&BreakpointRegistry::default());
//! assert_eq!(classes.to_string(), "root item grid-xs-6 grid-md-auto");
//! ```

pub use flexgrid;
pub use gridcss;

pub use flexgrid::{
    BuildMode, ClassMap, ClassRegistry, ClassSet, Diagnostic, DiagnosticSink, Element, Empty,
    Grid, GridConfig, GridError, GridProps, LayoutIntent, LogSink, Node, RenderContext, Rendered,
    Result, Rule, Text, init_logger, layout, node, resolve, validate,
};

pub mod prelude {
    pub use flexgrid::{
        AlignContent, AlignItems, Breakpoint, BreakpointRegistry, BuildMode, ClassMap,
        ClassRegistry, Direction, Element, Empty, Grid, GridConfig, GridSize, Justify, Node,
        RenderContext, SpacingLevel, Text, Wrap, layout, node,
    };
}
