//! Procedural macros for the flexgrid layout primitive.
//!
//! `layout!` builds a `Vec<Node>` from a declarative tree; `node!` builds one `Node`.

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod codegen;
mod parse;

/// Declarative macro for building grid node trees.
///
/// # Syntax
///
/// ```ignore
/// // Container with children only
/// Grid { child1 child2 }
///
/// // Node with positional arg(s)
/// Text("Hello world")
/// Element("figure")
///
/// // Container with named attributes and children
/// Grid(container: true, spacing: 2) {
///     Grid(item: true, xs: 12, md: "auto") { Text("cell") }
/// }
///
/// // Splat operator for dynamic child lists
/// let cells: Vec<Grid> = build_cells();
/// layout! {
///     Grid(container: true) {
///         Grid(item: true) { Text("Header") }
///         ..cells
///     }
/// }
/// ```
///
/// # Attribute Mapping
///
/// Named attributes are converted to builder method calls:
/// - `container: true` becomes `.with_container(true)`
/// - `direction: Direction::Column` becomes `.with_direction(Direction::Column)`
/// - Any `name: value` becomes `.with_name(value)`
///
/// Integer literals for `spacing` and the breakpoint spans (`xs` to `xl`),
/// and the string literal `"auto"` for spans, are range-checked at compile
/// time and converted to `SpacingLevel` / `GridSize`.
///
/// `Grid`, `Element`, `Text` and `Empty` resolve to the flexgrid types;
/// other names are looked up in the caller's scope and must convert into
/// `flexgrid::Node`.
///
/// # Return Type
///
/// Always returns `Vec<flexgrid::Node>`.
#[proc_macro]
pub fn layout(input: TokenStream) -> TokenStream {
    let forest = parse_macro_input!(input as parse::Forest);
    codegen::expand_forest(forest).into()
}

/// Macro for building a single node.
///
/// Returns `flexgrid::Node` instead of `Vec<flexgrid::Node>`.
///
/// # Example
///
/// ```ignore
/// let cells: Vec<_> = (1..=3)
///     .map(|i| node! { Grid(item: true, xs: 4) { Text(i.to_string()) } })
///     .collect();
///
/// layout! {
///     Grid(container: true) {
///         ..cells
///     }
/// }
/// ```
#[proc_macro]
pub fn node(input: TokenStream) -> TokenStream {
    let node = parse_macro_input!(input as parse::NodeSpec);
    codegen::expand_node(&node).into()
}
