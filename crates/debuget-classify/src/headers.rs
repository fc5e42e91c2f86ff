use debuget_core::models::Category;

/// Emoji-prefixed header banner for a category.
pub fn header_for(category: Category) -> &'static str {
    match category {
        Category::Database => "🔥 DATABASE MELTDOWN",
        Category::Syntax => "📜 SCRIPT ERROR",
        Category::Network => "🌐 NETWORK FAIL",
        Category::Auth => "🔐 ACCESS DENIED",
        Category::Validation => "🛡️ VALIDATION FAILED",
        Category::Code => "💻 CODE ISSUE",
        Category::Jwt => "🔑 JWT ERROR",
        Category::Fs => "📂 FILE SYSTEM ERROR",
        Category::Abort => "⏹️ ABORTED",
        Category::Aggregate => "🔗 AGGREGATE FAILURE",
        Category::Http => "🌐 HTTP ERROR",
        Category::Dns => "📡 DNS ERROR",
        Category::Tls => "🔒 TLS FAILURE",
        Category::Stream => "🔄 STREAM ERROR",
        Category::Default => "💥 RUNTIME ISSUE",
    }
}

/// Drop the leading glyph: everything up to and including the first space.
/// A header without a space is returned unchanged.
pub fn strip_emoji(header: &str) -> &str {
    match header.find(' ') {
        Some(idx) => &header[idx + 1..],
        None => header,
    }
}
