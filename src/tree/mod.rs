//! Typed expression tree model shared with the parsing frontend.
//!
//! The frontend parses and type-attributes Java source, then hands the
//! rewrite a tree built from these nodes (directly or via the serde
//! representation). The rewrite only inspects and replaces nodes; it
//! never invents new tree infrastructure.

pub mod expr;
pub mod types;

pub use expr::{CompilationUnit, Expr, FieldAccess, Ident, Literal, LiteralValue, MethodCall, NewArray};
pub use types::{JavaType, MethodSignature, TypeName};
