use crate::{Error, TreeRenderConfig, VizConfig};
use serde_json::json;

#[test]
fn resolve_defaults_match_the_fixed_canvas() {
    let config = TreeRenderConfig::resolve(&VizConfig::default()).unwrap();
    assert_eq!(config.width, 650.0);
    assert_eq!(config.level_height, 90.0);
    assert_eq!(config.node_radius, 27.0);
    assert_eq!(config.top_offset, 40.0);
    assert_eq!(config.label_prefix_len, 7);
    assert_eq!(config.font_size, 13.0);
    assert_eq!(config.root_font_size_bump, 3.0);
    assert_eq!(config.node_stroke, "#fff");
    assert_eq!(config.hover_stroke, "#ffb200");
    assert_eq!(config.edge_stroke, "#888");
}

#[test]
fn dotted_paths_set_and_get_nested_values() {
    let mut config = VizConfig::default();
    config.set_value("tree.width", json!(800.0));
    config.set_value("tree.nodeStroke", json!("#000"));
    assert_eq!(config.get_f64("tree.width"), Some(800.0));
    assert_eq!(config.get_str("tree.nodeStroke"), Some("#000"));
    assert_eq!(config.get_f64("tree.levelHeight"), None);

    let resolved = TreeRenderConfig::resolve(&config).unwrap();
    assert_eq!(resolved.width, 800.0);
    assert_eq!(resolved.node_stroke, "#000");
    // Untouched values stay at their defaults.
    assert_eq!(resolved.level_height, 90.0);
}

#[test]
fn set_value_coerces_non_object_roots_and_segments() {
    let mut config = VizConfig::from_value(json!("oops"));
    config.set_value("tree.width", json!(500.0));
    assert_eq!(config.get_f64("tree.width"), Some(500.0));

    let mut config = VizConfig::from_value(json!({"tree": 3}));
    config.set_value("tree.width", json!(500.0));
    assert_eq!(config.get_f64("tree.width"), Some(500.0));
}

#[test]
fn deep_merge_overlays_scalars_and_keeps_siblings() {
    let mut config = VizConfig::from_value(json!({
        "tree": {"width": 650.0, "nodeRadius": 27.0}
    }));
    config.deep_merge(&json!({"tree": {"width": 900.0}}));
    assert_eq!(config.get_f64("tree.width"), Some(900.0));
    assert_eq!(config.get_f64("tree.nodeRadius"), Some(27.0));
}

#[test]
fn resolve_rejects_non_positive_dimensions() {
    let mut config = VizConfig::default();
    config.set_value("tree.width", json!(0.0));
    let err = TreeRenderConfig::resolve(&config).unwrap_err();
    assert!(matches!(err, Error::InvalidConfig { ref path, .. } if path == "tree.width"));

    let mut config = VizConfig::default();
    config.set_value("tree.levelHeight", json!(-90.0));
    assert!(TreeRenderConfig::resolve(&config).is_err());
}

#[test]
fn resolve_rejects_fractional_label_lengths() {
    let mut config = VizConfig::default();
    config.set_value("tree.labelPrefixLen", json!(7.5));
    assert!(TreeRenderConfig::resolve(&config).is_err());

    let mut config = VizConfig::default();
    config.set_value("tree.labelPrefixLen", json!(10));
    let resolved = TreeRenderConfig::resolve(&config).unwrap();
    assert_eq!(resolved.label_prefix_len, 10);
}
