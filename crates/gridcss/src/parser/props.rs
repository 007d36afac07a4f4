//! JSX-like prop strings.
//!
//! ```text
//! container item direction="column" spacing={3} xs=6 style="margin: 4px"
//! ```
//!
//! A bare name is a boolean prop set to `true`. Values may be double- or
//! single-quoted, wrapped in braces, or written bare up to the next space.

use nom::{
    IResult,
    branch::alt,
    character::complete::{char, multispace0},
    combinator::{map, opt},
    multi::many0,
    sequence::{preceded, tuple},
};

use crate::GridCssError;
use crate::parser::values::{parse_bare, parse_braced, parse_ident, parse_quoted};

/// One prop as written by the caller, before any interpretation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawProp {
    pub name: String,
    /// `None` for a bare boolean prop.
    pub value: Option<String>,
}

impl RawProp {
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Shorthand for a bare boolean prop.
    pub fn flag(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }
}

/// Parses a whole prop string.
pub fn parse_props(source: &str) -> Result<Vec<RawProp>, GridCssError> {
    let (remaining, props) =
        many0(parse_prop)(source).map_err(|e| GridCssError::InvalidSyntax(e.to_string()))?;

    if !remaining.trim().is_empty() {
        return Err(GridCssError::InvalidSyntax(format!(
            "Unexpected tokens in props: {}",
            remaining.trim()
        )));
    }

    Ok(props)
}

fn parse_prop(input: &str) -> IResult<&str, RawProp> {
    let (input, _) = multispace0(input)?;
    let (input, name) = parse_ident(input)?;
    let (input, value) = opt(preceded(
        tuple((multispace0, char('='), multispace0)),
        parse_prop_value,
    ))(input)?;

    Ok((input, RawProp::new(name, value)))
}

fn parse_prop_value(input: &str) -> IResult<&str, String> {
    map(alt((parse_quoted, parse_braced, parse_bare)), str::to_string)(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_prop_forms() {
        let props =
            parse_props(r#"container item direction="column" spacing={3} xs=6 style='margin: 4px'"#)
                .unwrap();
        assert_eq!(
            props,
            vec![
                RawProp::flag("container"),
                RawProp::flag("item"),
                RawProp::new("direction", Some("column".into())),
                RawProp::new("spacing", Some("3".into())),
                RawProp::new("xs", Some("6".into())),
                RawProp::new("style", Some("margin: 4px".into())),
            ]
        );
    }

    #[test]
    fn spaces_around_equals() {
        let props = parse_props("md = auto").unwrap();
        assert_eq!(props, vec![RawProp::new("md", Some("auto".into()))]);
    }

    #[test]
    fn empty_source() {
        assert!(parse_props("").unwrap().is_empty());
    }

    #[test]
    fn dangling_equals_is_an_error() {
        assert!(matches!(
            parse_props("xs="),
            Err(GridCssError::InvalidSyntax(_))
        ));
    }
}
