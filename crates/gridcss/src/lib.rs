//! # gridcss - Grid Layout Vocabulary
//!
//! The typed vocabulary of a responsive 12-column flexbox grid, and the
//! parsers that produce it from the strings callers write.
//!
//! This crate provides:
//!
//! - **Types**: breakpoints, flex keywords, spacing levels, column spans and
//!   the [`ClassKey`](types::ClassKey) names of the precomputed grid classes
//! - **Parsing**: inline `style` overrides and JSX-like prop strings
//! - **Errors**: everything out of range is rejected here, before it can
//!   reach class resolution
//!
//! ## Quick Start
//!
//! ```rust
//! use gridcss::types::{Breakpoint, ClassKey, GridSize};
//!
//! let size: GridSize = "auto".parse().unwrap();
//! assert_eq!(ClassKey::Grid(Breakpoint::Md, size).to_string(), "grid-md-auto");
//!
//! let props = gridcss::parser::parse_props("container spacing={2}").unwrap();
//! assert_eq!(props.len(), 2);
//! ```
//!
//! ## Modules
//!
//! - [`parser`]: Inline style and prop string parsing
//! - [`types`]: Breakpoints, flex keywords, sizes and class keys
//! - [`error`]: Error types for parsing and range failures

pub mod error;
pub mod parser;
pub mod types;

pub use error::GridCssError;
pub use parser::{InlineStyle, RawProp, parse_inline_style, parse_props};
pub use types::{BreakpointRegistry, ClassKey};
