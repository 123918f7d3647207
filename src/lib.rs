//! Jul Recast: structural rewrite of parametrized `java.util.logging`
//! calls into SLF4J method calls.
//!
//! # Architecture
//!
//! The crate is one rewrite rule over a typed expression tree. A
//! parsing frontend (external to this crate) produces [`tree`] nodes
//! with resolved call signatures; [`rule::LogRecast`] walks them and
//! replaces each matching `Logger.log(Level, String, Object)` /
//! `Logger.log(Level, String, Object[])` call with the equivalent
//! SLF4J call: the level becomes the method name, `{index}` format
//! placeholders become `{}`, and a literal array payload is spliced
//! into positional arguments. Every unmet precondition is a defined
//! no-op for that call, never an error.
//!
//! # Example
//!
//! ```
//! use jul_recast::{Expr, JavaType, LogRecast, MethodCall, MethodSignature, TypeName};
//!
//! // logger.log(Level.SEVERE, "failed at {0}", ex)
//! let call = Expr::Call(
//!     MethodCall::new(
//!         Some(Expr::ident("logger")),
//!         "log",
//!         vec![
//!             Expr::field_access(Expr::ident("Level"), "SEVERE"),
//!             Expr::string("failed at {0}"),
//!             Expr::ident("ex"),
//!         ],
//!     )
//!     .with_signature(MethodSignature::new(
//!         TypeName::new("java.util.logging.Logger"),
//!         "log",
//!         vec![
//!             JavaType::class("java.util.logging.Level"),
//!             JavaType::class("java.lang.String"),
//!             JavaType::class("java.lang.Object"),
//!         ],
//!     )),
//! );
//!
//! // logger.error("failed at {}", ex)
//! let rewritten = LogRecast::new().rewrite_expr(&call);
//! match rewritten {
//!     Expr::Call(call) => {
//!         assert_eq!(call.name, "error");
//!         assert_eq!(call.arguments[0], Expr::string("failed at {}"));
//!     }
//!     other => panic!("expected a call, got {other:?}"),
//! }
//! ```

pub mod rule;
pub mod tree;

// Re-exports
pub use rule::{
    flatten_payload, rewrite_placeholders, target_method, LogRecast, MatcherError, MethodMatcher,
};
pub use tree::{
    CompilationUnit, Expr, FieldAccess, Ident, JavaType, Literal, LiteralValue, MethodCall,
    MethodSignature, NewArray, TypeName,
};
