//! Shared token parsers for inline styles and prop strings.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{take_till, take_while1},
    character::complete::char,
    combinator::map,
    sequence::delimited,
};

/// Parses a CSS identifier (alphanumeric characters, dashes, and underscores).
///
/// Identifiers are used for property names and prop names.
pub fn parse_ident(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_')(input)
}

/// Consumes a raw value up to (not including) the next `;`.
pub fn take_until_semicolon(input: &str) -> IResult<&str, &str> {
    take_till(|c| c == ';')(input)
}

/// Parses a single- or double-quoted string, returning its contents.
pub fn parse_quoted(input: &str) -> IResult<&str, &str> {
    alt((
        delimited(char('"'), take_till(|c| c == '"'), char('"')),
        delimited(char('\''), take_till(|c| c == '\''), char('\'')),
    ))(input)
}

/// Parses a `{...}` expression value. A quoted string inside the braces is
/// unwrapped, so `{"column"}` and `{3}` both yield their literal.
pub fn parse_braced(input: &str) -> IResult<&str, &str> {
    map(
        delimited(char('{'), take_till(|c| c == '}'), char('}')),
        |inner: &str| {
            let inner = inner.trim();
            match parse_quoted(inner) {
                Ok((rest, quoted)) if rest.is_empty() => quoted,
                _ => inner,
            }
        },
    )(input)
}

/// Parses an unquoted value, up to whitespace.
pub fn parse_bare(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace() && c != '"' && c != '\'' && c != '{')(input)
}
