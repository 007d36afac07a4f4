//! Parsing at the type boundary of the grid.
//!
//! This module turns the strings a caller writes into typed values:
//!
//! - [`parse_inline_style`]: `style="margin: 4px; padding-left: 2px"` into an [`InlineStyle`]
//! - [`parse_props`]: `container spacing={2} xs=6` into [`RawProp`] pairs
//!
//! ## Submodules
//!
//! - [`props`]: JSX-like attribute string parsing
//! - [`style`]: Inline style data structures
//! - [`units`]: Numeric value and unit parsing
//! - [`values`]: Identifiers, quoted and braced values
//!
//! ## Example
//!
//! ```rust
//! use gridcss::parser::{parse_inline_style, Declaration};
//! use gridcss::types::Scalar;
//!
//! let style = parse_inline_style("margin-left: 8px; color: red").unwrap();
//! assert_eq!(style.declarations[0], Declaration::MarginLeft(Scalar::px(8.0)));
//! assert!(style.has_margin());
//! ```

pub mod props;
pub mod style;
pub mod units;
pub mod values;

pub use crate::parser::props::{RawProp, parse_props};
pub use crate::parser::style::{Declaration, InlineStyle};

use crate::GridCssError;
use crate::parser::values::{parse_ident, take_until_semicolon};

use crate::types::{Edges, Scalar};

use nom::{
    IResult,
    character::complete::{char, multispace0},
    combinator::{all_consuming, opt},
    multi::many0,
    sequence::tuple,
};

/// Parses the contents of a `style` attribute.
pub fn parse_inline_style(source: &str) -> Result<InlineStyle, GridCssError> {
    let (remaining, declarations) =
        parse_declarations(source).map_err(|e| GridCssError::InvalidSyntax(e.to_string()))?;

    if !remaining.trim().is_empty() {
        return Err(GridCssError::InvalidSyntax(format!(
            "Unexpected tokens in style: {}",
            remaining.trim()
        )));
    }

    Ok(InlineStyle::new(declarations))
}

/// Parses a sequence of `property: value;` declarations.
pub fn parse_declarations(input: &str) -> IResult<&str, Vec<Declaration>> {
    many0(parse_single_declaration)(input)
}

/// Parses one `property: value;` declaration.
///
/// Values that do not fit the property's typed form (`inherit`, `var(..)`,
/// `calc(..)`) are kept verbatim as [`Declaration::Unknown`].
fn parse_single_declaration(input: &str) -> IResult<&str, Declaration> {
    let (input, _) = multispace0(input)?;
    let (input, property) = parse_ident(input)?;
    let (input, _) = tuple((multispace0, char(':'), multispace0))(input)?;
    let (input, raw) = take_until_semicolon(input)?;
    let (input, _) = opt(char(';'))(input)?;

    // !important has no meaning for inline overrides; accept and drop it
    let value = raw.trim();
    let value = value.strip_suffix("!important").unwrap_or(value).trim_end();

    let declaration = typed_declaration(property, value)
        .unwrap_or_else(|| Declaration::Unknown(property.to_string(), value.to_string()));
    Ok((input, declaration))
}

fn typed_declaration(property: &str, value: &str) -> Option<Declaration> {
    let edges = |wrap: fn(Edges) -> Declaration| {
        all_consuming(units::parse_edges)(value)
            .ok()
            .map(|(_, edges)| wrap(edges))
    };
    let scalar = |wrap: fn(Scalar) -> Declaration| {
        all_consuming(units::parse_scalar)(value)
            .ok()
            .map(|(_, scalar)| wrap(scalar))
    };

    match property {
        "margin" => edges(Declaration::Margin),
        "margin-top" => scalar(Declaration::MarginTop),
        "margin-right" => scalar(Declaration::MarginRight),
        "margin-bottom" => scalar(Declaration::MarginBottom),
        "margin-left" => scalar(Declaration::MarginLeft),
        "padding" => edges(Declaration::Padding),
        "padding-top" => scalar(Declaration::PaddingTop),
        "padding-right" => scalar(Declaration::PaddingRight),
        "padding-bottom" => scalar(Declaration::PaddingBottom),
        "padding-left" => scalar(Declaration::PaddingLeft),
        "width" => scalar(Declaration::Width),
        "height" => scalar(Declaration::Height),
        "min-width" => scalar(Declaration::MinWidth),
        "max-width" => scalar(Declaration::MaxWidth),
        "min-height" => scalar(Declaration::MinHeight),
        "max-height" => scalar(Declaration::MaxHeight),
        _ => None,
    }
}
