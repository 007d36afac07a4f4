//! Render Tests
//!
//! Markup produced from `layout!` trees through a generated class map.

use flexgrid::{
    BuildMode, ClassRegistry, Diagnostic, Grid, GridConfig, GridSize, Justify, Node,
    RenderContext, Rule, Text, layout, node,
};
use gridcss::parse_inline_style;

fn render(nodes: &[Node], config: &GridConfig) -> (String, Vec<Diagnostic>) {
    let classes = ClassRegistry::for_sheet("G", &config.breakpoints);
    let cx = RenderContext::new(config, &classes);
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let markup = nodes
        .iter()
        .filter_map(|node| node.render(&cx, &mut diagnostics))
        .map(|rendered| rendered.to_string())
        .collect();
    (markup, diagnostics)
}

// =============================================================================
// Class attributes
// =============================================================================

#[test]
fn test_two_column_layout() {
    let nodes = layout! {
        Grid(container: true, spacing: 2, justify: Justify::Center) {
            Grid(item: true, xs: 12, md: 6) { Text("a") }
            Grid(item: true, xs: 12, md: "auto") { Text("b & c") }
        }
    };

    let (markup, diagnostics) = render(&nodes, &GridConfig::new(BuildMode::Production));
    assert!(diagnostics.is_empty());
    insta::assert_snapshot!(markup, @r#"<div class="G-root G-container G-container-row G-flex-context G-spacing-xs-2 G-justify-xs-center"><div class="G-root G-item G-grid-xs-12 G-grid-md-6">a</div><div class="G-root G-item G-grid-xs-12 G-grid-md-auto">b &amp; c</div></div>"#);
}

#[test]
fn test_class_name_and_component_pass_through() {
    let nodes = layout! {
        Grid(item: true, xs: true, component: "section", class_name: "hero")
    };

    let (markup, _) = render(&nodes, &GridConfig::new(BuildMode::Production));
    insta::assert_snapshot!(markup, @r#"<section class="G-root G-item G-grid-xs-true hero"></section>"#);
}

#[test]
fn test_inline_style_is_kept() {
    let nodes = layout! {
        Grid(item: true, style: parse_inline_style("width: 50%; min-height: 2rem").unwrap())
    };

    let (markup, _) = render(&nodes, &GridConfig::new(BuildMode::Production));
    insta::assert_snapshot!(markup, @r#"<div class="G-root G-item" style="width: 50%; min-height: 2rem"></div>"#);
}

#[test]
fn test_custom_breakpoints_change_base() {
    let config = GridConfig::new(BuildMode::Production)
        .with_breakpoints(gridcss::BreakpointRegistry::parse("sm md").unwrap());
    let nodes = layout! {
        Grid(container: true, spacing: 1) {
            Grid(item: true, xs: 3, md: 9)
        }
    };

    let (markup, _) = render(&nodes, &config);
    insta::assert_snapshot!(markup, @r#"<div class="G-root G-container G-container-row G-spacing-sm-1"><div class="G-root G-item G-grid-md-9"></div></div>"#);
}

// =============================================================================
// Children
// =============================================================================

#[test]
fn test_splat_children() {
    let cells: Vec<Grid> = (1..=3)
        .map(|n| {
            Grid::new()
                .with_item(true)
                .with_xs(GridSize::columns(4).unwrap())
                .with_children(vec![Text::new(n.to_string()).into()])
        })
        .collect();

    let nodes = layout! {
        Grid(container: true) {
            Grid(item: true, xs: 12) { Text("header") }
            ..cells
        }
    };

    let (markup, diagnostics) = render(&nodes, &GridConfig::new(BuildMode::Development));
    assert!(diagnostics.is_empty());
    insta::assert_snapshot!(markup, @r#"<div class="G-root G-container G-container-row"><div class="G-root G-item G-grid-xs-12">header</div><div class="G-root G-item G-grid-xs-4">1</div><div class="G-root G-item G-grid-xs-4">2</div><div class="G-root G-item G-grid-xs-4">3</div></div>"#);
}

#[test]
fn test_node_macro_builds_single_node() {
    let figure = node! {
        Element("figure", class_name: "card") { Text("caption") }
    };
    let nodes = layout! {
        Grid(container: true) {
            Grid(item: true)
            Empty
        }
    };

    let mut all = nodes;
    all.push(figure);
    let (markup, _) = render(&all, &GridConfig::new(BuildMode::Production));
    insta::assert_snapshot!(markup, @r#"<div class="G-root G-container G-container-row"><div class="G-root G-item"></div></div><figure class="card">caption</figure>"#);
}

// =============================================================================
// Development builds
// =============================================================================

#[test]
fn test_diagnostics_reach_the_sink() {
    let nodes = layout! {
        Grid(container: true, spacing: 3) {
            Grid
            Element("span") { Text("loose") }
            Grid(item: true)
        }
    };

    let (_, diagnostics) = render(&nodes, &GridConfig::new(BuildMode::Development));
    let rules: Vec<_> = diagnostics.iter().map(|d| d.rule).collect();
    assert_eq!(rules, [Rule::ChildNotItem, Rule::ChildNotLayoutNode]);
}

#[test]
fn test_nested_grids_are_validated_too() {
    let nodes = layout! {
        Grid(container: true) {
            Grid(item: true, spacing: 2)
        }
    };

    let (_, diagnostics) = render(&nodes, &GridConfig::new(BuildMode::Test));
    let rules: Vec<_> = diagnostics.iter().map(|d| d.rule).collect();
    assert_eq!(rules, [Rule::OrphanSpacing]);
}

#[test]
fn test_debug_style_and_classes_unaffected_by_diagnostics() {
    let nodes = layout! {
        Grid(container: true, item: true, spacing: 1)
    };
    let debug = parse_inline_style("outline: 1px dashed red").unwrap();

    let dev = GridConfig::new(BuildMode::Development).with_debug_style(debug.clone());
    let (dev_markup, diagnostics) = render(&nodes, &dev);
    assert_eq!(diagnostics.len(), 1);
    insta::assert_snapshot!(dev_markup, @r#"<div class="G-root G-container G-container-row G-item G-spacing-xs-1" style="outline: 1px dashed red"></div>"#);

    let prod = GridConfig::new(BuildMode::Production).with_debug_style(debug);
    let (prod_markup, diagnostics) = render(&nodes, &prod);
    assert!(diagnostics.is_empty());
    insta::assert_snapshot!(prod_markup, @r#"<div class="G-root G-container G-container-row G-item G-spacing-xs-1"></div>"#);
}
