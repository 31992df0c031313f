//! Integration tests for gilt-skin.
//!
//! These exercise the public API from outside the crate: parsing, resolution,
//! the engine and the headless host working together.

use gilt_skin::css::{parse_declarations, parse_value, CssValue, Rgba};
use gilt_skin::engine::{EngineConfig, StyleEngine};
use gilt_skin::geometry::Region;
use gilt_skin::platform::NativeWidget;
use gilt_skin::resolve::color::resolve_color;
use gilt_skin::resolve::font::{merge_font, FontDescriptor, FontStyleBits, PartialFontSpec};
use gilt_skin::resolve::gradient::build_gradient;
use gilt_skin::resolve::system::SystemColor;
use gilt_skin::resolve::ResolveContext;
use gilt_skin::testing::{HeadlessToolkit, HeadlessWidget, MemoryLocator, RecordingCanvas};
use gilt_skin::theme::{escape_id, has_definition_value, normalize_id, ThemeRegistry};
use gilt_skin::widget::{PropertyKind, StyleBits, WidgetTree};
use pretty_assertions::assert_eq;

fn engine() -> StyleEngine<HeadlessToolkit> {
    let mut engine = StyleEngine::new(HeadlessToolkit::new(), EngineConfig::new());
    engine.set_locator(
        MemoryLocator::new()
            .with_file("icons/ok.img", b"IMG-ok".to_vec())
            .with_file("icons/broken.img", b"not an image".to_vec()),
    );
    engine
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

#[test]
fn test_definition_marker_detection() {
    assert!(!has_definition_value("#a0B1c2"));
    assert!(has_definition_value("#abc"));
    assert!(has_definition_value("#org-eclipse-bg"));
    assert!(!has_definition_value("red"));
}

#[test]
fn test_id_escaping_round_trips() {
    assert_eq!(escape_id(&normalize_id("org-eclipse-ui-tab")), "org-eclipse-ui-tab");
    assert_eq!(normalize_id(&escape_id("org.eclipse.ui.tab")), "org.eclipse.ui.tab");
}

#[test]
fn test_color_fallback_chain() {
    let toolkit = HeadlessToolkit::new().with_palette(SystemColor::InfoBackground, Rgba::rgb(255, 255, 225));
    let theme = ThemeRegistry::new().with_color("app.accent", Rgba::rgb(0, 120, 215));
    let ctx = ResolveContext::new(&toolkit).with_theme(&theme);

    let resolve = |text: &str| resolve_color(&parse_value(text).unwrap(), &ctx);
    assert_eq!(resolve("rgb(1, 2, 3)"), Rgba::rgb(1, 2, 3));
    assert_eq!(resolve("#102030"), Rgba::rgb(16, 32, 48));
    assert_eq!(resolve("CornflowerBlue"), Rgba::rgb(100, 149, 237));
    assert_eq!(resolve("#app-accent"), Rgba::rgb(0, 120, 215));
    assert_eq!(resolve("info-background"), Rgba::rgb(255, 255, 225));
    assert_eq!(resolve("#app-missing"), Rgba::BLACK);
    assert_eq!(resolve("not-a-system-color"), Rgba::BLACK);
}

#[test]
fn test_reference_gradient() {
    let toolkit = HeadlessToolkit::new();
    let ctx = ResolveContext::new(&toolkit);
    let value = parse_value("gradient linear rgb(255,0,0) 50% rgb(0,0,255)").unwrap();

    let gradient = build_gradient(&value, &ctx);
    assert!(gradient.linear);
    assert!(gradient.vertical);
    assert_eq!(gradient.stops, vec![Rgba::rgb(255, 0, 0), Rgba::rgb(0, 0, 255)]);
    assert_eq!(gradient.percents(), vec![50]);
}

#[test]
fn test_gradient_default_distribution() {
    let toolkit = HeadlessToolkit::new();
    let ctx = ResolveContext::new(&toolkit);
    let value = parse_value("gradient red orange yellow white 10% 500%").unwrap();
    assert_eq!(build_gradient(&value, &ctx).percents(), vec![33, 67, 100]);
}

#[test]
fn test_font_merge_keeps_existing_bits() {
    let existing = FontDescriptor::new("Sans", 10, FontStyleBits::ITALIC);
    let css = PartialFontSpec::new().with_weight("bold");
    let merged = merge_font(&css, &existing, None);
    assert_eq!(
        merged,
        FontDescriptor::new("Sans", 10, FontStyleBits::ITALIC | FontStyleBits::BOLD)
    );
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

#[test]
fn test_parse_declaration_block() {
    let declarations = parse_declarations(
        "/* header */ color: #ff0000; font: italic 9pt 'Segoe UI', sans-serif; cursor: wait",
    )
    .unwrap();

    let properties: Vec<&str> = declarations.iter().map(|d| d.property.as_str()).collect();
    assert_eq!(properties, vec!["color", "font", "cursor"]);
    assert_eq!(declarations[0].value, CssValue::RgbColor(255, 0, 0));
    assert_eq!(
        declarations[1].value,
        CssValue::ValueList(vec![
            CssValue::ident("italic"),
            CssValue::Dimension(9.0, "pt".into()),
            CssValue::StringLiteral("Segoe UI".into()),
        ])
    );
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

#[test]
fn test_equal_value_is_applied_once() {
    let mut engine = engine();
    let mut tree = WidgetTree::new();
    let id = tree.insert(HeadlessWidget::new());

    engine.parse_and_apply(&mut tree, id, "color: red").unwrap();
    let report = engine.parse_and_apply(&mut tree, id, "color: #ff0000").unwrap();

    assert_eq!(report.mutations, 0);
    assert_eq!(tree.get(id).unwrap().mutation_count(), 1);
    assert_eq!(engine.tracker().capture_count(), 1);
}

#[test]
fn test_restore_after_many_overrides() {
    let mut engine = engine();
    let mut tree = WidgetTree::new();
    let id = tree.insert(HeadlessWidget::new());

    engine.parse_and_apply(&mut tree, id, "cursor: wait").unwrap();
    let baseline = tree.get(id).unwrap().cursor();

    for cursor in ["pointer", "text", "help", "move"] {
        engine
            .parse_and_apply(&mut tree, id, &format!("cursor: {cursor}"))
            .unwrap();
    }
    assert_eq!(engine.retrieve_property(&tree, id, "cursor").as_deref(), Some("move"));

    engine.remove_styles(&mut tree, id);
    // The widget had no cursor before it was first styled.
    assert_ne!(tree.get(id).unwrap().cursor(), baseline);
    assert_eq!(tree.get(id).unwrap().cursor(), None);
}

#[test]
fn test_restore_substitutes_platform_default_for_disposed_handle() {
    let mut engine = engine();
    let mut tree = WidgetTree::new();
    let id = tree.insert(HeadlessWidget::new());

    // Widget starts with an engine-created color so the baseline has a handle.
    engine.parse_and_apply(&mut tree, id, "background-color: navy").unwrap();
    let navy = tree.get(id).unwrap().background().unwrap();
    engine.remove_styles(&mut tree, id);
    engine.widget_disposed(id);
    tree.get_mut(id).unwrap().set_background(Some(navy.clone()));

    engine.parse_and_apply(&mut tree, id, "background-color: white").unwrap();
    engine.toolkit_mut().dispose_out_of_band(navy.handle());
    engine.remove_styles(&mut tree, id);

    let expected = engine.toolkit().palette(SystemColor::WidgetBackground);
    assert_eq!(
        tree.get(id).unwrap().background().map(|c| *c.value()),
        Some(expected)
    );
}

#[test]
fn test_disposed_widget_is_left_alone() {
    let mut engine = engine();
    let mut tree = WidgetTree::new();
    let id = tree.insert(HeadlessWidget::new());
    engine.parse_and_apply(&mut tree, id, "color: red").unwrap();

    tree.get_mut(id).unwrap().dispose();
    engine.parse_and_apply(&mut tree, id, "color: blue").unwrap();
    assert_eq!(engine.remove_styles(&mut tree, id), 0);
    assert_eq!(tree.get(id).unwrap().mutation_count(), 1);
}

#[test]
fn test_bad_image_does_not_block_the_block() {
    let mut engine = engine();
    let mut tree = WidgetTree::new();
    let id = tree.insert(HeadlessWidget::new());

    let report = engine
        .parse_and_apply(
            &mut tree,
            id,
            "background-image: url(icons/broken.img); color: green; cursor: help",
        )
        .unwrap();

    assert_eq!(report.applied, vec!["color", "cursor"]);
    assert_eq!(report.failures.len(), 1);
    insta::assert_snapshot!(
        report.failures[0].message,
        @"cannot decode 'mem:icons/broken.img': unsupported image format"
    );
    assert_eq!(tree.get(id).unwrap().image(), None);
    assert_eq!(
        engine.retrieve_property(&tree, id, "color").as_deref(),
        Some("rgb(0, 128, 0)")
    );
}

#[test]
fn test_broken_image_falls_back_to_next_declaration() {
    let mut engine = engine();
    let mut tree = WidgetTree::new();
    let id = tree.insert(HeadlessWidget::new());

    let report = engine
        .parse_and_apply(
            &mut tree,
            id,
            "background-image: url(icons/broken.img); background-image: url(icons/ok.img)",
        )
        .unwrap();

    assert_eq!(report.applied, vec!["background-image"]);
    assert!(report.skipped.is_empty());
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.mutations, 1);
    assert_eq!(
        engine.retrieve_property(&tree, id, "background-image").as_deref(),
        Some("url(mem:icons/ok.img)")
    );
}

#[test]
fn test_malformed_declaration_keeps_the_rest_of_the_block() {
    let mut engine = engine();
    let mut tree = WidgetTree::new();
    let id = tree.insert(HeadlessWidget::new());

    let report = engine
        .parse_and_apply(&mut tree, id, "color: red; 5px: x; cursor: wait")
        .unwrap();

    assert_eq!(report.applied, vec!["color", "cursor"]);
    assert_eq!(report.mutations, 2);
    assert_eq!(report.malformed.len(), 1);
}

#[test]
fn test_subtree_failures_are_isolated_per_widget() {
    let mut engine = engine();
    let mut tree = WidgetTree::new();
    let root = tree.insert(HeadlessWidget::new());
    let broken = tree.insert_child(root, HeadlessWidget::new());
    let sibling = tree.insert_child(root, HeadlessWidget::new());

    let reports = engine
        .apply_to_subtree(&mut tree, root, |id| {
            let text = if id == broken {
                "background-image: url(icons/missing.img)"
            } else {
                "background-image: url(icons/ok.img)"
            };
            parse_declarations(text).unwrap()
        })
        .unwrap();

    assert_eq!(reports.len(), 3);
    assert!(tree.get(root).unwrap().image().is_some());
    assert!(tree.get(broken).unwrap().image().is_none());
    assert!(tree.get(sibling).unwrap().image().is_some());
    assert_eq!(engine.registry().len(), 1);
}

#[test]
fn test_removed_subtree_state_is_forgotten() {
    let mut engine = engine();
    let mut tree = WidgetTree::new();
    let root = tree.insert(HeadlessWidget::new());
    let panel = tree.insert_child(root, HeadlessWidget::new());
    let label = tree.insert_child(panel, HeadlessWidget::new());

    for id in [root, panel, label] {
        engine.parse_and_apply(&mut tree, id, "color: red").unwrap();
    }
    for id in tree.remove(panel) {
        engine.widget_disposed(id);
    }

    assert!(engine.tracker().has_default(root, PropertyKind::Foreground));
    assert!(!engine.tracker().has_default(panel, PropertyKind::Foreground));
    assert!(!engine.tracker().has_default(label, PropertyKind::Foreground));
    assert_eq!(engine.tracker().tracked_count(), 1);
}

#[test]
fn test_dispose_releases_each_handle_once() {
    let mut engine = engine();
    let mut tree = WidgetTree::new();
    let a = tree.insert(HeadlessWidget::new());
    let b = tree.insert_child(a, HeadlessWidget::new());

    let block = "color: red; background-color: gradient red white; cursor: text; \
                 font-family: Mono; background-image: url(icons/ok.img)";
    engine.parse_and_apply(&mut tree, a, block).unwrap();
    engine.parse_and_apply(&mut tree, b, block).unwrap();

    // red, white, text cursor, Mono font, ok.img
    assert_eq!(engine.registry().len(), 5);
    assert_eq!(engine.dispose(), 5);

    let mut log = engine.toolkit().dispose_log().to_vec();
    log.sort();
    log.dedup();
    assert_eq!(log.len(), 5);
    assert_eq!(engine.toolkit().live_count(), 0);
}

#[test]
fn test_border_paint() {
    let mut engine = engine();
    let mut tree = WidgetTree::new();
    let id = tree.insert(HeadlessWidget::new().with_bounds(Region::new(5, 5, 10, 10)));
    engine.parse_and_apply(&mut tree, id, "border: 2px dashed blue").unwrap();

    let mut canvas = RecordingCanvas::new();
    assert!(engine.paint(&tree, id, &mut canvas));
    insta::assert_snapshot!(canvas.render(), @r"
    width 2
    style Dashed
    color rgb(0, 0, 255)
    line (3, 3) -> (17, 3)
    line (17, 3) -> (17, 17)
    line (3, 17) -> (17, 17)
    line (3, 3) -> (3, 17)
    ");

    engine.remove_styles(&mut tree, id);
    canvas.clear();
    assert!(!engine.paint(&tree, id, &mut canvas));
}

#[test]
fn test_style_bits_description() {
    let widget = HeadlessWidget::new().with_style_bits(StyleBits::BORDER | StyleBits::MULTI | StyleBits::WRAP);
    insta::assert_snapshot!(widget.style_bits().describe(), @"BORDER WRAP MULTI");
}
