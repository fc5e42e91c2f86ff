use debuget_classify::{classify, explain};
use debuget_core::models::{Category, ErrorDescriptor};
use proptest::prelude::*;

fn arb_descriptor() -> impl Strategy<Value = ErrorDescriptor> {
    (
        proptest::option::of("[A-Za-z]{0,20}"),
        proptest::option::of("[ -~]{0,40}"),
        proptest::option::of("[A-Z_]{0,24}"),
        proptest::option::of(100u16..700),
        proptest::option::of(100u16..700),
        proptest::option::of(100u16..700),
    )
        .prop_map(|(name, message, code, status, status_code, response)| {
            let mut d = ErrorDescriptor::new();
            d.name = name;
            d.message = message;
            d.code = code;
            d.status = status;
            d.status_code = status_code;
            if let Some(s) = response {
                d = d.with_response_status(s);
            }
            d
        })
}

// ── SyntaxError always classifies as syntax ───────────────────────────────

proptest! {
    #[test]
    fn syntax_error_name_always_wins(mut d in arb_descriptor()) {
        d.name = Some("SyntaxError".to_string());
        prop_assert_eq!(classify(&d), Category::Syntax);
    }
}

// ── ECONNREFUSED without a response is database with a fixed sentence ─────

proptest! {
    #[test]
    fn econnrefused_is_database(message in proptest::option::of("[a-z ]{0,30}")) {
        let mut d = ErrorDescriptor::new().with_code("ECONNREFUSED");
        d.message = message;
        prop_assert_eq!(classify(&d), Category::Database);
        prop_assert_eq!(explain(&d), "Couldn't reach the database. Is it running?");
    }
}

// ── 404 response is http / not found regardless of unknown code ───────────

proptest! {
    #[test]
    fn response_404_is_http_not_found(code in proptest::option::of("X[A-Z]{0,10}")) {
        let mut d = ErrorDescriptor::new().named("AxiosError").with_response_status(404);
        d.code = code;
        prop_assert_eq!(classify(&d), Category::Http);
        prop_assert_eq!(explain(&d), "Not found. The requested resource doesn’t exist.");
    }
}

// ── classify and explain are pure ─────────────────────────────────────────

proptest! {
    #[test]
    fn classify_and_explain_are_idempotent(d in arb_descriptor()) {
        let snapshot = d.clone();
        prop_assert_eq!(classify(&d), classify(&d));
        prop_assert_eq!(explain(&d), explain(&d));
        prop_assert_eq!(d, snapshot);
    }
}
