//! # flexgrid - Responsive Flexbox Grid
//!
//! A layout primitive that turns declarative layout intent (container or
//! item role, column span per breakpoint, spacing, alignment, direction)
//! into the precomputed class names that realise it, and that warns about
//! inconsistent combinations outside production builds.
//!
//! ## Quick Start
//!
//! ```rust
//! use flexgrid::{BuildMode, ClassRegistry, GridConfig, RenderContext, layout};
//!
//! let config = GridConfig::new(BuildMode::Development);
//! let classes = ClassRegistry::for_sheet("Grid", &config.breakpoints);
//!
//! let nodes = layout! {
//!     Grid(container: true, spacing: 2) {
//!         Grid(item: true, xs: 12, md: 6) { Text("left") }
//!         Grid(item: true, xs: 12, md: 6) { Text("right") }
//!     }
//! };
//!
//! let mut diagnostics: Vec<flexgrid::Diagnostic> = Vec::new();
//! let rendered = nodes[0]
//!     .render(&RenderContext::new(&config, &classes), &mut diagnostics)
//!     .unwrap();
//! assert!(diagnostics.is_empty());
//! assert_eq!(
//!     rendered.class(),
//!     Some("Grid-root Grid-container Grid-container-row Grid-spacing-xs-2")
//! );
//! ```
//!
//! ## Modules
//!
//! - [`intent`]: Layout intent and explicit prop tracking
//! - [`resolver`]: Intent to class-name key resolution
//! - [`validator`]: Development-only structural checks
//! - [`node`]: Grid, element, text and empty nodes
//! - [`class_map`]: Class-name key lookup
//! - [`render`]: Markup rendering
//! - [`sink`]: Diagnostic sinks
//! - [`config`]: Build mode and render configuration

extern crate self as flexgrid;

pub mod class_map;
pub mod config;
pub mod error;
pub mod intent;
mod log_init;
mod macros;
pub mod node;
pub mod render;
pub mod resolver;
pub mod sink;
pub mod validator;

pub use class_map::{ClassMap, ClassRegistry};
pub use config::{BUILD_MODE_ENV, BuildMode, GridConfig};
pub use error::{GridError, Result};
pub use intent::LayoutIntent;
pub use log_init::init_logger;
pub use node::{Element, Empty, Grid, GridProps, Node, Text};
pub use render::{RenderContext, Rendered};
pub use resolver::{ClassSet, resolve};
pub use sink::{DiagnosticSink, LogSink};
pub use validator::{ChildRef, ChildView, Diagnostic, Rule, Severity, ValidationContext, validate};

// Re-export the log crate so users can use flexgrid::log::info!, etc.
pub use log;
pub use gridcss;
pub use gridcss::types::{
    AlignContent, AlignItems, Breakpoint, BreakpointRegistry, ColumnCount, Direction, GridSize,
    Justify, SpacingLevel, Wrap,
};
pub use flexgrid_macros::{layout, node};
