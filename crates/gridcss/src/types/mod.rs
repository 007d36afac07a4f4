pub mod breakpoint;
pub mod class_key;
pub mod flex;
pub mod geometry;
pub mod props;
pub mod size;

pub use breakpoint::{Breakpoint, BreakpointRegistry};
pub use class_key::ClassKey;
pub use flex::{AlignContent, AlignItems, Direction, Justify, Wrap};
pub use geometry::{Edges, Scalar, Unit};
pub use props::{ExplicitProps, PropName};
pub use size::{ColumnCount, GridSize, SpacingLevel};
