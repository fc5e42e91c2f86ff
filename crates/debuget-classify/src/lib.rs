//! # debuget-classify
//!
//! Pure decision logic of the reporter:
//! - [`classify`]: runtime error descriptor → one [`Category`](debuget_core::Category),
//!   via an ordered first-match rule cascade.
//! - [`explain`]: descriptor → plain-language sentence, via layered lookup.
//! - [`headers`]: per-category banner text and emoji stripping.
//!
//! Nothing here depends on the theme or on time.

pub mod classifier;
pub mod explanation;
pub mod headers;
pub mod patterns;

pub use classifier::{classify, classify_with_rule, rules, Matcher, Rule};
pub use explanation::{explain, explain_with_layer, ExplanationLayer};
pub use headers::{header_for, strip_emoji};
