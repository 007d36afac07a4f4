//! Integration tests for inline style parsing.
//!
//! Inline styles are the `style` overrides a caller attaches to a node:
//! - Box shorthands: `margin`, `padding` with 1 to 4 values
//! - Longhands: `margin-top`, `padding-left`, ...
//! - Sizes: `width`, `max-height`, ...
//! - Anything else is kept verbatim

use gridcss::parse_inline_style;
use gridcss::parser::Declaration;
use gridcss::parser::units::{parse_edges, parse_scalar};
use gridcss::types::{Edges, Scalar, Unit};

// ============================================================================
// SCALARS
// ============================================================================

#[test]
fn test_scalar_units() {
    let cases = [
        ("0", 0.0, Unit::Number),
        ("8px", 8.0, Unit::Px),
        ("1.5rem", 1.5, Unit::Rem),
        ("2em", 2.0, Unit::Em),
        ("50%", 50.0, Unit::Percent),
        ("100vw", 100.0, Unit::ViewWidth),
        ("-4px", -4.0, Unit::Px),
        (".5vh", 0.5, Unit::ViewHeight),
    ];
    for (source, value, unit) in cases {
        let (_, scalar) = parse_scalar(source).unwrap();
        assert_eq!(scalar.value, value, "{source}");
        assert_eq!(scalar.unit, unit, "{source}");
    }
}

#[test]
fn test_scalar_auto() {
    let (_, scalar) = parse_scalar("auto").unwrap();
    assert!(scalar.is_auto());
    assert_eq!(scalar.to_string(), "auto");
}

// ============================================================================
// BOX SHORTHANDS
// ============================================================================

#[test]
fn test_edges_value_counts() {
    let px = Scalar::px;

    let (_, one) = parse_edges("4px").unwrap();
    assert_eq!(one, Edges::all(px(4.0)));

    let (_, two) = parse_edges("1px 2px").unwrap();
    assert_eq!(two, Edges::vertical_horizontal(px(1.0), px(2.0)));

    let (_, three) = parse_edges("1px 2px 3px").unwrap();
    assert_eq!(
        three,
        Edges {
            top: px(1.0),
            right: px(2.0),
            bottom: px(3.0),
            left: px(2.0),
        }
    );

    let (_, four) = parse_edges("1px 2px 3px 4px").unwrap();
    assert_eq!(
        four,
        Edges {
            top: px(1.0),
            right: px(2.0),
            bottom: px(3.0),
            left: px(4.0),
        }
    );
}

// ============================================================================
// DECLARATIONS
// ============================================================================

#[test]
fn test_margin_family() {
    for source in [
        "margin: 0",
        "margin-top: 1px",
        "margin-right: 1px",
        "margin-bottom: 1px",
        "margin-left: auto",
        "margin-inline-start: 4px",
    ] {
        let style = parse_inline_style(source).unwrap();
        assert!(style.has_margin(), "{source}");
        assert!(!style.has_padding(), "{source}");
    }
}

#[test]
fn test_padding_family() {
    for source in ["padding: 0 4px", "padding-top: 0", "padding-left: 2rem"] {
        let style = parse_inline_style(source).unwrap();
        assert!(style.has_padding(), "{source}");
        assert!(!style.has_margin(), "{source}");
    }
}

#[test]
fn test_similar_names_are_not_box_properties() {
    let style = parse_inline_style("marginal: 1; paddingless: 2").unwrap();
    assert!(!style.has_margin());
    assert!(!style.has_padding());
}

#[test]
fn test_source_order_is_kept() {
    let style = parse_inline_style("width: 50%; color: red; max-width: 100%").unwrap();
    let properties: Vec<_> = style.iter().map(Declaration::property).collect();
    assert_eq!(properties, ["width", "color", "max-width"]);
}

#[test]
fn test_display_round_trip_of_unknowns() {
    let source = "display: grid; outline: 1px dashed red";
    let style = parse_inline_style(source).unwrap();
    assert_eq!(style.to_string(), source);
}

#[test]
fn test_merge_appends() {
    let mut style = parse_inline_style("width: 10px").unwrap();
    style.merge(&parse_inline_style("height: 20px").unwrap());
    assert_eq!(style.to_string(), "width: 10px; height: 20px");
}

#[test]
fn test_camel_case_box_properties() {
    let style = parse_inline_style("marginLeft: 4px").unwrap();
    assert!(style.has_margin());
    assert!(!style.has_padding());

    let style = parse_inline_style("paddingTop: 2px; paddingBottom: 2px").unwrap();
    assert!(style.has_padding());
    assert!(!style.has_margin());
}

#[test]
fn test_untyped_values_fall_back_to_unknown() {
    let style = parse_inline_style("margin: inherit").unwrap();
    assert_eq!(
        style.declarations,
        vec![Declaration::Unknown("margin".to_string(), "inherit".to_string())]
    );
    assert!(style.has_margin());

    let style = parse_inline_style("padding: var(--gap)").unwrap();
    assert!(style.has_padding());

    let style = parse_inline_style("margin-left: calc(100% - 8px) !important").unwrap();
    assert_eq!(
        style.declarations,
        vec![Declaration::Unknown("margin-left".to_string(), "calc(100% - 8px)".to_string())]
    );

    let style = parse_inline_style("width: wide").unwrap();
    assert_eq!(
        style.declarations,
        vec![Declaration::Unknown("width".to_string(), "wide".to_string())]
    );
}

#[test]
fn test_invalid_style_is_an_error() {
    assert!(parse_inline_style("width 10px").is_err());
    assert!(parse_inline_style(": 10px").is_err());
}
