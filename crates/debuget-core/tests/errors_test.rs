use debuget_core::errors::*;

#[test]
fn config_parse_error_carries_path() {
    let err = ConfigError::ParseError {
        path: "/proj/debuget.toml".into(),
        message: "expected `=`".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("/proj/debuget.toml"));
    assert!(msg.contains("expected `=`"));
}

#[test]
fn resolve_error_converts_to_debuget_error() {
    let err: DebugetError = ResolveError::MissingStack.into();
    assert!(matches!(err, DebugetError::Resolve(_)));
    assert!(err.to_string().contains("no stack"));
}

#[test]
fn render_error_converts_to_debuget_error() {
    let err: DebugetError = RenderError::ContentTooWide {
        width: 300,
        limit: 200,
    }
    .into();
    assert!(matches!(err, DebugetError::Render(_)));
    let msg = err.to_string();
    assert!(msg.contains("300"));
    assert!(msg.contains("200"));
}

#[test]
fn config_error_converts_to_debuget_error() {
    let err: DebugetError = ConfigError::InvalidValue {
        field: "DEBUGET_STACK_DEPTH".into(),
        message: "invalid digit".into(),
    }
    .into();
    assert!(matches!(err, DebugetError::Config(_)));
}
