use crate::rule::errors::MatcherError;
use crate::tree::{Expr, JavaType, MethodCall, TypeName};
use std::fmt;

/// Matches call nodes against one fully qualified method signature.
///
/// A call matches iff its *resolved* signature names the same declaring
/// type, the same method name, and the same erased formal parameter
/// types, in order. Calls the frontend could not resolve never match,
/// and neither do same-named methods on other types.
///
/// # Pattern Syntax
///
/// [`MethodMatcher::parse`] accepts the textual form
///
/// ```text
/// declaring.Type methodName(param.Type, other.Type[])
/// ```
///
/// where `[]` suffixes denote array parameters and whitespace around
/// commas is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodMatcher {
    declaring_type: TypeName,
    name: String,
    parameter_types: Vec<JavaType>,
}

impl MethodMatcher {
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

    /// Parse a matcher from its textual pattern form.
    pub fn parse(pattern: &str) -> Result<Self, MatcherError> {
        let err_pattern = || pattern.to_string();

        let open = pattern
            .find('(')
            .ok_or_else(|| MatcherError::MissingParameterList {
                pattern: err_pattern(),
            })?;
        let close = pattern
            .rfind(')')
            .filter(|close| *close > open)
            .ok_or_else(|| MatcherError::MissingParameterList {
                pattern: err_pattern(),
            })?;

        let head = pattern[..open].trim();
        let (declaring_type, name) =
            head.rsplit_once(char::is_whitespace)
                .ok_or_else(|| MatcherError::MissingMethodName {
                    pattern: err_pattern(),
                })?;
        let declaring_type = declaring_type.trim();
        if declaring_type.is_empty() {
            return Err(MatcherError::MissingDeclaringType {
                pattern: err_pattern(),
            });
        }
        if name.is_empty() {
            return Err(MatcherError::MissingMethodName {
                pattern: err_pattern(),
            });
        }

        let params = pattern[open + 1..close].trim();
        let parameter_types = if params.is_empty() {
            Vec::new()
        } else {
            params
                .split(',')
                .map(|param| {
                    let param = param.trim();
                    if param.is_empty() {
                        return Err(MatcherError::EmptyParameterType {
                            pattern: err_pattern(),
                        });
                    }
                    Ok(Self::parse_param(param))
                })
                .collect::<Result<_, _>>()?
        };

        Ok(Self::new(TypeName::new(declaring_type), name, parameter_types))
    }

    fn parse_param(param: &str) -> JavaType {
        match param.strip_suffix("[]") {
            Some(element) => JavaType::array(Self::parse_param(element.trim_end())),
            None => JavaType::class(param),
        }
    }

    /// Whether the given call's declared signature matches.
    pub fn matches(&self, call: &MethodCall) -> bool {
        match &call.signature {
            Some(sig) => {
                sig.declaring_type == self.declaring_type
                    && sig.name == self.name
                    && sig.parameter_types == self.parameter_types
            }
            None => false,
        }
    }

    /// Whether the expression is a call node matching this signature.
    pub fn matches_expr(&self, expr: &Expr) -> bool {
        match expr {
            Expr::Call(call) => self.matches(call),
            _ => false,
        }
    }
}

impl fmt::Display for MethodMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}(", self.declaring_type, self.name)?;
        for (i, ty) in self.parameter_types.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{ty}")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::MethodSignature;

    fn logger_log_signature(third: JavaType) -> MethodSignature {
        MethodSignature::new(
            TypeName::new("java.util.logging.Logger"),
            "log",
            vec![
                JavaType::class("java.util.logging.Level"),
                JavaType::class("java.lang.String"),
                third,
            ],
        )
    }

    fn log_call(signature: Option<MethodSignature>) -> MethodCall {
        let mut call = MethodCall::new(
            Some(Expr::ident("logger")),
            "log",
            vec![
                Expr::field_access(Expr::ident("Level"), "INFO"),
                Expr::string("msg"),
                Expr::ident("x"),
            ],
        );
        if let Some(signature) = signature {
            call = call.with_signature(signature);
        }
        call
    }

    #[test]
    fn matches_resolved_signature() {
        let matcher = MethodMatcher::parse(
            "java.util.logging.Logger log(java.util.logging.Level, java.lang.String, java.lang.Object)",
        )
        .unwrap();
        let call = log_call(Some(logger_log_signature(JavaType::class(
            "java.lang.Object",
        ))));

        assert!(matcher.matches(&call));
    }

    #[test]
    fn matches_array_overload() {
        let matcher = MethodMatcher::parse(
            "java.util.logging.Logger log(java.util.logging.Level, java.lang.String, java.lang.Object[])",
        )
        .unwrap();
        let call = log_call(Some(logger_log_signature(JavaType::array(
            JavaType::class("java.lang.Object"),
        ))));

        assert!(matcher.matches(&call));
    }

    #[test]
    fn object_and_object_array_overloads_are_distinct() {
        let single = MethodMatcher::parse(
            "java.util.logging.Logger log(java.util.logging.Level, java.lang.String, java.lang.Object)",
        )
        .unwrap();
        let call = log_call(Some(logger_log_signature(JavaType::array(
            JavaType::class("java.lang.Object"),
        ))));

        assert!(!single.matches(&call));
    }

    #[test]
    fn rejects_same_named_method_on_unrelated_type() {
        let matcher = MethodMatcher::parse(
            "java.util.logging.Logger log(java.util.logging.Level, java.lang.String, java.lang.Object)",
        )
        .unwrap();
        let call = log_call(Some(MethodSignature::new(
            TypeName::new("com.example.MyLogger"),
            "log",
            vec![
                JavaType::class("java.util.logging.Level"),
                JavaType::class("java.lang.String"),
                JavaType::class("java.lang.Object"),
            ],
        )));

        assert!(!matcher.matches(&call));
    }

    #[test]
    fn rejects_unresolved_call() {
        let matcher = MethodMatcher::parse(
            "java.util.logging.Logger log(java.util.logging.Level, java.lang.String, java.lang.Object)",
        )
        .unwrap();
        let call = log_call(None);

        assert!(!matcher.matches(&call));
    }

    #[test]
    fn rejects_non_call_expressions() {
        let matcher =
            MethodMatcher::new(TypeName::new("java.util.logging.Logger"), "log", Vec::new());

        assert!(!matcher.matches_expr(&Expr::ident("log")));
    }

    #[test]
    fn parse_display_round_trip() {
        let pattern =
            "java.util.logging.Logger log(java.util.logging.Level, java.lang.String, java.lang.Object[])";
        let matcher = MethodMatcher::parse(pattern).unwrap();

        assert_eq!(matcher.to_string(), pattern);
    }

    #[test]
    fn parse_accepts_empty_parameter_list() {
        let matcher = MethodMatcher::parse("java.lang.Object toString()").unwrap();
        assert_eq!(matcher.to_string(), "java.lang.Object toString()");
    }

    #[test]
    fn parse_rejects_missing_parens() {
        let result = MethodMatcher::parse("java.util.logging.Logger log");
        assert!(matches!(
            result,
            Err(MatcherError::MissingParameterList { .. })
        ));
    }

    #[test]
    fn parse_rejects_missing_method_name() {
        let result = MethodMatcher::parse("log(java.lang.Object)");
        assert!(matches!(result, Err(MatcherError::MissingMethodName { .. })));
    }

    #[test]
    fn parse_rejects_empty_parameter_type() {
        let result = MethodMatcher::parse("a.B m(java.lang.Object,,java.lang.Object)");
        assert!(matches!(
            result,
            Err(MatcherError::EmptyParameterType { .. })
        ));
    }
}
