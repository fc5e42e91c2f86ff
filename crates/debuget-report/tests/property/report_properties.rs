use debuget_classify::{header_for, strip_emoji};
use debuget_core::models::{Category, ErrorDescriptor, Frame, Theme};
use debuget_report::boxing::{display_width, has_ansi};
use debuget_report::composer::journey;
use debuget_report::ReportComposer;
use debuget_report::TextStackResolver;
use proptest::prelude::*;

fn arb_frame() -> impl Strategy<Value = Frame> {
    ("[a-z]{1,8}", prop::bool::ANY, 1u32..500).prop_map(|(name, dep, line)| {
        let file = if dep {
            format!("/app/node_modules/{name}/index.js")
        } else {
            format!("/app/src/{name}.js")
        };
        Frame::new(Some(name), Some(file), Some(line))
    })
}

fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(fut)
}

// ── Journey keeps at most `depth` application frames, in order ─────────────

proptest! {
    #[test]
    fn journey_is_bounded_ordered_and_dependency_free(
        frames in prop::collection::vec(arb_frame(), 0..20),
        depth in 0usize..8,
    ) {
        let app: Vec<Frame> = frames.iter().filter(|f| !f.is_dependency()).cloned().collect();
        let kept = journey(frames, depth);
        prop_assert!(kept.len() <= depth);
        prop_assert!(kept.iter().all(|f| !f.is_dependency()));
        prop_assert_eq!(&kept[..], &app[..kept.len()]);
        prop_assert_eq!(kept.len(), depth.min(app.len()));
    }
}

// ── Emoji off strips the glyph for every category ─────────────────────────

proptest! {
    #[test]
    fn emoji_switch_controls_header_glyph(idx in 0usize..Category::ALL.len(), emoji in prop::bool::ANY) {
        let category = Category::ALL[idx];
        let raw = header_for(category);
        let shown = if emoji { raw } else { strip_emoji(raw) };
        prop_assert_eq!(shown.is_ascii(), !emoji);
    }
}

// ── Plain output carries no escapes and a rectangular box ─────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]
    #[test]
    fn plain_output_is_escape_free_and_rectangular(
        name in "[A-Za-z]{0,12}",
        message in "[ -~]{0,60}",
        code in proptest::option::of("[A-Z_]{1,16}"),
    ) {
        let mut descriptor = ErrorDescriptor::new().named(name).with_message(message);
        descriptor.code = code;
        let theme = Theme { colors: false, ..Theme::default() };

        let text = block_on(ReportComposer::new(TextStackResolver).format(&descriptor, &theme));
        prop_assert!(!has_ansi(&text));

        let rows: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();
        let width = display_width(rows[0]);
        prop_assert!(rows.iter().all(|r| display_width(r) == width));
    }
}
