//! The node tree a grid renders.
//!
//! A grid's children are arbitrary [`Node`]s: other grids, other elements,
//! plain text, or nothing at all. Only the grid itself carries layout
//! intent; the other kinds exist so the validator can point at children
//! that do not belong inside a container.

pub mod element;
pub mod grid;

pub use element::{Element, Empty, Text};
pub use grid::{Grid, GridProps};

use crate::validator::ChildView;

/// One child in a node tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Grid(Grid),
    Element(Element),
    Text(String),
    /// An absent child, e.g. a conditional that evaluated to nothing.
    Empty,
}

impl Node {
    /// How the structural validator sees this node as a child.
    pub fn view(&self) -> ChildView<'_> {
        match self {
            Node::Grid(grid) => ChildView::Layout {
                item: grid.intent().item,
                style: &grid.props().style,
            },
            Node::Element(element) => ChildView::Element {
                name: &element.name,
            },
            Node::Text(text) => ChildView::Value { text },
            Node::Empty => ChildView::Absent,
        }
    }
}

impl From<Grid> for Node {
    fn from(grid: Grid) -> Self {
        Node::Grid(grid)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<Text> for Node {
    fn from(text: Text) -> Self {
        Node::Text(text.0)
    }
}

impl From<Empty> for Node {
    fn from(_: Empty) -> Self {
        Node::Empty
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(node: Option<T>) -> Self {
        node.map_or(Node::Empty, Into::into)
    }
}
