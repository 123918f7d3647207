use crate::tree::types::{JavaType, MethodSignature};
use serde::{Deserialize, Serialize};

/// Closed set of expression shapes the rewrite distinguishes.
///
/// Anything the frontend parses that is none of these — arithmetic,
/// lambdas, casts — arrives as whatever variant its outermost node
/// happens to be, and the rewrite's exhaustive matches fall through to
/// "leave unchanged". Nodes are immutable; updates go through the
/// `with_*` rebuild helpers, which return a modified copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Expr {
    Call(MethodCall),
    FieldAccess(FieldAccess),
    Literal(Literal),
    NewArray(NewArray),
    Ident(Ident),
}

impl Expr {
    /// Identifier expression.
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(Ident { name: name.into() })
    }

    /// String-typed literal expression.
    pub fn string(text: impl Into<String>) -> Self {
        Expr::Literal(Literal::string(text))
    }

    /// Field access `target.name`.
    pub fn field_access(target: Expr, name: impl Into<String>) -> Self {
        Expr::FieldAccess(FieldAccess {
            target: Some(Box::new(target)),
            name: name.into(),
        })
    }

    /// Array construction, with or without a literal initializer.
    pub fn new_array(element_type: Option<JavaType>, initializer: Option<Vec<Expr>>) -> Self {
        Expr::NewArray(NewArray {
            element_type,
            initializer,
        })
    }
}

/// An invocation expression: optional receiver, callee name, ordered
/// arguments, and the resolved callee signature when the frontend
/// could attribute one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    pub select: Option<Box<Expr>>,
    pub name: String,
    pub arguments: Vec<Expr>,
    pub signature: Option<MethodSignature>,
}

impl MethodCall {
    pub fn new(select: Option<Expr>, name: impl Into<String>, arguments: Vec<Expr>) -> Self {
        Self {
            select: select.map(Box::new),
            name: name.into(),
            arguments,
            signature: None,
        }
    }

    pub fn with_signature(mut self, signature: MethodSignature) -> Self {
        self.signature = Some(signature);
        self
    }

    /// Copy of this call with the callee name replaced.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Copy of this call with the argument list replaced.
    pub fn with_arguments(mut self, arguments: Vec<Expr>) -> Self {
        self.arguments = arguments;
        self
    }
}

/// Field access `target.name`; the target is absent when the frontend
/// saw a bare name it resolved as a field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldAccess {
    pub target: Option<Box<Expr>>,
    pub name: String,
}

/// A literal with its parsed value, raw source text, and static type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Literal {
    pub value: LiteralValue,
    /// Raw token text as written in the source, when known.
    pub source: Option<String>,
    pub ty: JavaType,
}

impl Literal {
    /// String literal carrying `text` as both raw and parsed value.
    pub fn string(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            value: LiteralValue::String(text.clone()),
            source: Some(text),
            ty: JavaType::class("java.lang.String"),
        }
    }

    /// Parsed string value, present only for string-typed literals.
    pub fn as_string(&self) -> Option<&str> {
        match &self.value {
            LiteralValue::String(text) if self.ty.is_string() => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LiteralValue {
    String(String),
    Int(i64),
    Bool(bool),
    Null,
}

/// A bare identifier expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ident {
    pub name: String,
}

/// Array construction expression. `initializer` is `Some` only when
/// the source spelled out an explicit `{...}` element list; `None`
/// means a sized allocation like `new Object[3]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewArray {
    pub element_type: Option<JavaType>,
    pub initializer: Option<Vec<Expr>>,
}

/// One parsed source unit: the expressions the frontend extracted, in
/// source order. The rewrite never reorders or drops entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompilationUnit {
    pub expressions: Vec<Expr>,
}

impl CompilationUnit {
    pub fn new(expressions: Vec<Expr>) -> Self {
        Self { expressions }
    }
}
