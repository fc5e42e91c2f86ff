use std::str::FromStr;

use debuget_core::models::{Category, Frame, Theme, ThemePatch};

#[test]
fn category_display_matches_serialized_tag() {
    for category in Category::ALL {
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, format!("\"{}\"", category));
        assert_eq!(Category::from_str(category.as_str()).unwrap(), category);
    }
}

#[test]
fn category_from_str_rejects_unknown_tag() {
    let err = Category::from_str("quantum").unwrap_err();
    assert!(err.to_string().contains("quantum"));
}

#[test]
fn category_default_is_catch_all() {
    assert_eq!(Category::default(), Category::Default);
}

#[test]
fn theme_defaults() {
    let theme = Theme::default();
    assert!(theme.emoji);
    assert!(theme.colors);
    assert_eq!(theme.stack_depth, 3);
    assert!(theme.show_stack);
}

#[test]
fn theme_patch_merges_only_specified_fields() {
    let mut theme = Theme::default();
    theme.apply(&ThemePatch {
        stack_depth: Some(15),
        show_stack: Some(false),
        ..Default::default()
    });
    assert_eq!(theme.stack_depth, 15);
    assert!(!theme.show_stack);
    assert!(theme.emoji);
    assert!(theme.colors);
}

#[test]
fn theme_patch_deserializes_from_camel_case_json() {
    let patch: ThemePatch =
        serde_json::from_str(r#"{"stackDepth": 15, "showStack": false, "colors": true}"#).unwrap();
    assert_eq!(patch.stack_depth, Some(15));
    assert_eq!(patch.show_stack, Some(false));
    assert_eq!(patch.colors, Some(true));
    assert_eq!(patch.emoji, None);
}

#[test]
fn theme_patch_overlay_prefers_later_fields() {
    let base = ThemePatch {
        emoji: Some(false),
        stack_depth: Some(5),
        ..Default::default()
    };
    let top = ThemePatch {
        stack_depth: Some(8),
        ..Default::default()
    };
    let merged = base.overlay(top);
    assert_eq!(merged.emoji, Some(false));
    assert_eq!(merged.stack_depth, Some(8));
    assert!(ThemePatch::default().is_empty());
    assert!(!merged.is_empty());
}

#[test]
fn frame_falls_back_to_anonymous() {
    let frame = Frame::new(None, Some("/app/index.js".into()), Some(12));
    assert_eq!(frame.display_function(), "<anonymous>");
    assert_eq!(frame.location(), "/app/index.js:12");

    let empty_name = Frame::new(Some(String::new()), None, None);
    assert_eq!(empty_name.display_function(), "<anonymous>");
}

#[test]
fn frame_detects_dependency_paths() {
    let npm = Frame::new(None, Some("/app/node_modules/axios/index.js".into()), Some(1));
    let cargo = Frame::new(
        None,
        Some("/home/me/.cargo/registry/src/index.crates.io-6f17d22bba15001f/tokio-1.38.0/src/lib.rs".into()),
        Some(1),
    );
    let ours = Frame::new(Some("main".into()), Some("/app/src/main.rs".into()), Some(4));
    assert!(npm.is_dependency());
    assert!(cargo.is_dependency());
    assert!(!ours.is_dependency());
    assert!(!Frame::default().is_dependency());
}
