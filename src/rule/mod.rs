//! The JUL-to-SLF4J rewrite rule.
//!
//! [`LogRecast`] orchestrates the per-call pipeline: signature match,
//! severity mapping, template rewrite, payload flattening. Each stage
//! that declines leaves the call exactly as written; nothing in here
//! is an error path.

pub mod args;
pub mod errors;
pub mod matcher;
pub mod rewriter;
pub mod severity;
pub mod template;

pub use args::flatten_payload;
pub use errors::MatcherError;
pub use matcher::MethodMatcher;
pub use rewriter::LogRecast;
pub use severity::target_method;
pub use template::rewrite_placeholders;
