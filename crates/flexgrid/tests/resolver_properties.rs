//! Class Resolver Tests
//!
//! Ordering, default suppression and literal fidelity of the resolved
//! class-name keys.

use flexgrid::{
    AlignContent, AlignItems, Breakpoint, BreakpointRegistry, Direction, Grid, GridSize, Justify,
    LayoutIntent, SpacingLevel, Wrap, resolve,
};

fn classes(intent: &LayoutIntent) -> String {
    resolve(intent, &BreakpointRegistry::default()).to_string()
}

fn spacing(level: u8) -> SpacingLevel {
    SpacingLevel::new(level).unwrap()
}

fn cols(n: u8) -> GridSize {
    GridSize::columns(n).unwrap()
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_same_intent_same_classes() {
    let intent = LayoutIntent::new()
        .with_container(true)
        .with_spacing(spacing(4))
        .with_justify(Justify::SpaceBetween)
        .with_md(cols(3));

    let first = resolve(&intent, &BreakpointRegistry::default());
    let second = resolve(&intent.clone(), &BreakpointRegistry::default());
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn test_root_is_always_first() {
    let intents = [
        LayoutIntent::new(),
        LayoutIntent::new().with_item(true),
        LayoutIntent::new().with_container(true).with_spacing(spacing(1)),
        LayoutIntent::new().with_relative(true).with_xl(GridSize::Auto),
    ];
    for intent in &intents {
        let set = resolve(intent, &BreakpointRegistry::default());
        assert_eq!(set.keys()[0].to_string(), "root");
    }
}

// =============================================================================
// Independence of single-field toggles
// =============================================================================

#[test]
fn test_toggling_item_only_adds_item() {
    let base = LayoutIntent::new()
        .with_container(true)
        .with_spacing(spacing(2))
        .with_sm(cols(4));
    let with_item = base.clone().with_item(true);

    let before = resolve(&base, &BreakpointRegistry::default()).to_strings();
    let after = resolve(&with_item, &BreakpointRegistry::default()).to_strings();

    let added: Vec<_> = after.iter().filter(|k| !before.contains(k)).collect();
    assert_eq!(added, ["item"]);
    assert_eq!(after.len(), before.len() + 1);
}

#[test]
fn test_toggling_relative_only_adds_relative() {
    let base = LayoutIntent::new().with_item(true).with_xs(cols(12));
    let before = resolve(&base, &BreakpointRegistry::default()).to_strings();
    let after = resolve(&base.with_relative(true), &BreakpointRegistry::default()).to_strings();

    let added: Vec<_> = after.iter().filter(|k| !before.contains(k)).collect();
    assert_eq!(added, ["relative"]);
}

#[test]
fn test_one_span_does_not_touch_others() {
    let base = LayoutIntent::new().with_item(true).with_xs(cols(12));
    let after = classes(&base.with_lg(cols(4)));
    assert_eq!(after, "root item grid-xs-12 grid-lg-4");
}

// =============================================================================
// Default suppression
// =============================================================================

#[test]
fn test_defaults_emit_no_value_keys() {
    let intent = LayoutIntent::new()
        .with_container(true)
        .with_direction(Direction::Row)
        .with_wrap(Wrap::Wrap)
        .with_align_items(AlignItems::Stretch)
        .with_align_content(AlignContent::Stretch)
        .with_justify(Justify::FlexStart);

    // Explicit but default values still open a flex context
    assert_eq!(classes(&intent), "root container container-row flex-context");
}

#[test]
fn test_zero_spacing_is_suppressed() {
    let intent = LayoutIntent::new()
        .with_container(true)
        .with_spacing(SpacingLevel::ZERO);
    assert_eq!(classes(&intent), "root container container-row");
}

#[test]
fn test_spacing_without_container_is_suppressed() {
    let intent = LayoutIntent::new().with_item(true).with_spacing(spacing(5));
    assert_eq!(classes(&intent), "root item");
}

#[test]
fn test_unset_spans_are_suppressed() {
    let intent = LayoutIntent::new()
        .with_item(true)
        .with_xs(false)
        .with_md(GridSize::Unset);
    assert_eq!(classes(&intent), "root item");
}

#[test]
fn test_explicit_default_intent_is_not_a_flex_context() {
    // Only the five flex-context props count as explicit here
    let intent = LayoutIntent::new()
        .with_item(true)
        .with_spacing(SpacingLevel::ZERO)
        .with_zero_min_width(false);
    assert_eq!(classes(&intent), "root item");
}

// =============================================================================
// Grid literal fidelity
// =============================================================================

#[test]
fn test_auto_and_count_are_distinct() {
    let auto = classes(&LayoutIntent::new().with_md(GridSize::Auto));
    let seven = classes(&LayoutIntent::new().with_md(cols(7)));
    assert_eq!(auto, "root grid-md-auto");
    assert_eq!(seven, "root grid-md-7");
}

#[test]
fn test_fill_renders_true() {
    assert_eq!(classes(&LayoutIntent::new().with_sm(true)), "root grid-sm-true");
}

#[test]
fn test_spans_follow_registry_order() {
    let intent = LayoutIntent::new()
        .with_xl(cols(2))
        .with_xs(cols(12))
        .with_lg(GridSize::Auto)
        .with_sm(true)
        .with_md(cols(6));
    assert_eq!(
        classes(&intent),
        "root grid-xs-12 grid-sm-true grid-md-6 grid-lg-auto grid-xl-2"
    );
}

#[test]
fn test_spans_outside_registry_are_ignored() {
    let registry = BreakpointRegistry::new(vec![Breakpoint::Sm, Breakpoint::Lg]).unwrap();
    let intent = LayoutIntent::new()
        .with_container(true)
        .with_spacing(spacing(1))
        .with_xs(cols(12))
        .with_lg(cols(3));
    assert_eq!(
        resolve(&intent, &registry).to_string(),
        "root container container-row spacing-sm-1 grid-lg-3"
    );
}

// =============================================================================
// Full ordering
// =============================================================================

#[test]
fn test_every_key_in_order() {
    let intent = LayoutIntent::new()
        .with_container(true)
        .with_item(true)
        .with_maximize(true)
        .with_relative(true)
        .with_zero_min_width(true)
        .with_spacing(spacing(10))
        .with_direction(Direction::ColumnReverse)
        .with_wrap(Wrap::NoWrap)
        .with_align_items(AlignItems::Baseline)
        .with_align_content(AlignContent::SpaceAround)
        .with_justify(Justify::SpaceEvenly)
        .with_xs(cols(1))
        .with_xl(GridSize::Auto);

    assert_eq!(
        classes(&intent),
        "root container container-column item maximize relative zero-min-width flex-context \
         spacing-xs-10 direction-xs-column-reverse wrap-xs-nowrap align-items-xs-baseline \
         align-content-xs-space-around justify-xs-space-evenly grid-xs-1 grid-xl-auto"
    );
}

#[test]
fn test_end_to_end_scenario_classes() {
    let grid = Grid::new()
        .with_item(true)
        .with_container(true)
        .with_direction(Direction::Column)
        .with_spacing(spacing(3))
        .with_xs(cols(6));

    assert_eq!(
        grid.classes(&BreakpointRegistry::default()).to_string(),
        "root container container-column item flex-context spacing-xs-3 \
         direction-xs-column grid-xs-6"
    );
}
