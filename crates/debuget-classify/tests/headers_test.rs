use debuget_classify::{header_for, strip_emoji};
use debuget_core::models::Category;

#[test]
fn every_category_header_has_glyph_then_text() {
    for category in Category::ALL {
        let header = header_for(category);
        let (glyph, text) = header.split_once(' ').expect("header has a space");
        assert!(!glyph.is_empty());
        assert!(!glyph.is_ascii(), "{category}: glyph should be an emoji");
        assert!(text.chars().all(|c| c.is_ascii_uppercase() || c == ' '));
    }
}

#[test]
fn stripped_headers_are_plain_ascii() {
    for category in Category::ALL {
        let stripped = strip_emoji(header_for(category));
        assert!(stripped.is_ascii(), "{category}: {stripped}");
        assert!(!stripped.starts_with(' '));
    }
}

#[test]
fn validation_header() {
    assert_eq!(header_for(Category::Validation), "🛡️ VALIDATION FAILED");
    assert_eq!(strip_emoji(header_for(Category::Validation)), "VALIDATION FAILED");
}
