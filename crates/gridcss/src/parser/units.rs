use crate::types::geometry::{Edges, Scalar, Unit};
use nom::{
    IResult,
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit0, digit1, multispace0},
    combinator::{map, map_res, opt, recognize},
    sequence::{pair, preceded, tuple},
};

/// Parse a floating point or integer number (`4`, `-1.5`, `.5`).
fn parse_number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((
            opt(char('-')),
            alt((
                recognize(pair(digit1, opt(pair(char('.'), digit0)))),
                recognize(pair(char('.'), digit1)),
            )),
        ))),
        |s: &str| s.parse::<f64>(),
    )(input)
}

/// Parse the unit suffix (e.g., px, rem, %).
fn parse_unit_suffix(input: &str) -> IResult<&str, Unit> {
    alt((
        map(tag("px"), |_| Unit::Px),
        map(tag("rem"), |_| Unit::Rem),
        map(tag("em"), |_| Unit::Em),
        map(tag("vw"), |_| Unit::ViewWidth),
        map(tag("vh"), |_| Unit::ViewHeight),
        map(char('%'), |_| Unit::Percent),
    ))(input)
}

/// Parse a single Scalar value (e.g., "10px", "50%", "auto").
pub fn parse_scalar(input: &str) -> IResult<&str, Scalar> {
    let input = input.trim_start();

    if let Ok((remaining, _)) = tag::<&str, &str, nom::error::Error<&str>>("auto")(input) {
        return Ok((remaining, Scalar::AUTO));
    }

    let (input, value) = parse_number(input)?;
    let (input, unit) = opt(parse_unit_suffix)(input)?;

    Ok((
        input,
        Scalar {
            value,
            unit: unit.unwrap_or(Unit::Number),
        },
    ))
}

/// Parse CSS box shorthand (margin/padding).
/// Supports 1 value (all), 2 values (v, h), 3 values (t, h, b), or 4 values (t, r, b, l).
pub fn parse_edges(input: &str) -> IResult<&str, Edges> {
    let (input, first) = parse_scalar(input)?;
    let (input, second) = opt(preceded(multispace0, parse_scalar))(input)?;

    let Some(second) = second else {
        return Ok((input, Edges::all(first)));
    };

    let (input, third) = opt(preceded(multispace0, parse_scalar))(input)?;
    let (input, fourth) = opt(preceded(multispace0, parse_scalar))(input)?;

    let edges = match (third, fourth) {
        (Some(bottom), Some(left)) => Edges {
            top: first,
            right: second,
            bottom,
            left,
        },
        (Some(bottom), None) => Edges {
            top: first,
            right: second,
            bottom,
            left: second,
        },
        _ => Edges::vertical_horizontal(first, second),
    };

    Ok((input, edges))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_units() {
        assert_eq!(parse_scalar("8px").unwrap().1, Scalar::px(8.0));
        assert_eq!(parse_scalar("50%").unwrap().1, Scalar::percent(50.0));
        assert_eq!(parse_scalar("1.5rem").unwrap().1.unit, Unit::Rem);
        assert_eq!(parse_scalar("2em").unwrap().1.unit, Unit::Em);
        assert_eq!(parse_scalar("0").unwrap().1, Scalar::ZERO);
        assert!(parse_scalar("auto").unwrap().1.is_auto());
    }

    #[test]
    fn edges_shorthand_forms() {
        let (_, one) = parse_edges("4px").unwrap();
        assert_eq!(one, Edges::all(Scalar::px(4.0)));

        let (_, two) = parse_edges("1px 2px").unwrap();
        assert_eq!(two.top, Scalar::px(1.0));
        assert_eq!(two.left, Scalar::px(2.0));

        let (_, three) = parse_edges("1px 2px 3px").unwrap();
        assert_eq!(three.bottom, Scalar::px(3.0));
        assert_eq!(three.left, Scalar::px(2.0));

        let (_, four) = parse_edges("1px 2px 3px 4px").unwrap();
        assert_eq!(four.left, Scalar::px(4.0));
    }
}
