use serde::{Deserialize, Serialize};
use std::fmt;

/// Fully qualified name of a Java class, e.g. `java.util.logging.Logger`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeName(String);

impl TypeName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last dot-separated component: `java.lang.String` -> `String`.
    pub fn simple_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Declared (erased) type of an expression or formal parameter.
///
/// Only the distinctions the rewrite needs: a named class type or an
/// array of some element type. Generics are already erased by the
/// frontend that resolves signatures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JavaType {
    Class(TypeName),
    Array(Box<JavaType>),
}

impl JavaType {
    pub fn class(name: impl Into<String>) -> Self {
        JavaType::Class(TypeName::new(name))
    }

    pub fn array(element: JavaType) -> Self {
        JavaType::Array(Box::new(element))
    }

    /// Whether this is exactly `java.lang.String`.
    pub fn is_string(&self) -> bool {
        matches!(self, JavaType::Class(name) if name.as_str() == "java.lang.String")
    }
}

impl fmt::Display for JavaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JavaType::Class(name) => write!(f, "{name}"),
            JavaType::Array(element) => write!(f, "{element}[]"),
        }
    }
}

/// Resolved callee signature a call node exposes.
///
/// Filled in by the frontend's type attribution; `None` on a call node
/// means the callee could not be resolved and the call can never match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSignature {
    pub declaring_type: TypeName,
    pub name: String,
    pub parameter_types: Vec<JavaType>,
}

impl MethodSignature {
    pub fn new(
        declaring_type: TypeName,
        name: impl Into<String>,
        parameter_types: Vec<JavaType>,
    ) -> Self {
        Self {
            declaring_type,
            name: name.into(),
            parameter_types,
        }
    }
}
