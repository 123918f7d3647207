use crate::rule::{args, severity, template};
use crate::rule::matcher::MethodMatcher;
use crate::tree::{CompilationUnit, Expr, FieldAccess, JavaType, MethodCall, NewArray, TypeName};
use tracing::{debug, trace};

const LOGGER_TYPE: &str = "java.util.logging.Logger";
const LEVEL_TYPE: &str = "java.util.logging.Level";
const STRING_TYPE: &str = "java.lang.String";
const OBJECT_TYPE: &str = "java.lang.Object";

/// The rewrite rule: parametrized `Logger.log(Level, String, ...)`
/// calls become the corresponding SLF4J method calls, with the format
/// string and parameter list transformed to match.
///
/// The rule is a stateless value holding its two signature matchers;
/// construct it once and share it by reference across units. Every
/// unmet precondition on a call is a defined no-op for that call, never
/// an error, and never aborts the surrounding traversal.
#[derive(Debug, Clone)]
pub struct LogRecast {
    array_overload: MethodMatcher,
    single_overload: MethodMatcher,
}

impl LogRecast {
    pub fn new() -> Self {
        let common = [JavaType::class(LEVEL_TYPE), JavaType::class(STRING_TYPE)];
        let array_overload = MethodMatcher::new(
            TypeName::new(LOGGER_TYPE),
            "log",
            common
                .iter()
                .cloned()
                .chain([JavaType::array(JavaType::class(OBJECT_TYPE))])
                .collect(),
        );
        let single_overload = MethodMatcher::new(
            TypeName::new(LOGGER_TYPE),
            "log",
            common
                .iter()
                .cloned()
                .chain([JavaType::class(OBJECT_TYPE)])
                .collect(),
        );
        Self {
            array_overload,
            single_overload,
        }
    }

    pub fn display_name(&self) -> &'static str {
        "Replace parametrized JUL level call with corresponding SLF4J method calls"
    }

    pub fn description(&self) -> &'static str {
        "Replace calls to parametrized `Logger.log(Level,String,…)` with the corresponding \
         SLF4J method calls, transforming the format string and parameter lists."
    }

    /// Cheap existence scan: does this unit contain at least one call
    /// to the array-taking overload? Rewriting a unit is gated on this,
    /// so units that cannot be affected are skipped without a rebuild.
    pub fn uses_array_overload(&self, unit: &CompilationUnit) -> bool {
        unit.expressions
            .iter()
            .any(|expr| self.contains_array_overload(expr))
    }

    fn contains_array_overload(&self, expr: &Expr) -> bool {
        match expr {
            Expr::Call(call) => {
                self.array_overload.matches(call)
                    || call
                        .select
                        .as_deref()
                        .is_some_and(|select| self.contains_array_overload(select))
                    || call
                        .arguments
                        .iter()
                        .any(|arg| self.contains_array_overload(arg))
            }
            Expr::FieldAccess(access) => access
                .target
                .as_deref()
                .is_some_and(|target| self.contains_array_overload(target)),
            Expr::NewArray(array) => array
                .initializer
                .iter()
                .flatten()
                .any(|element| self.contains_array_overload(element)),
            Expr::Literal(_) | Expr::Ident(_) => false,
        }
    }

    /// Rewrite one source unit. Runs the existence scan first and
    /// returns the unit unchanged when it cannot contain a match; the
    /// per-node matcher remains the authority on what gets rewritten.
    pub fn run(&self, unit: &CompilationUnit) -> CompilationUnit {
        if !self.uses_array_overload(unit) {
            trace!("unit has no call to the array overload; skipping");
            return unit.clone();
        }
        CompilationUnit::new(
            unit.expressions
                .iter()
                .map(|expr| self.rewrite_expr(expr))
                .collect(),
        )
    }

    /// Top-down rewrite of one expression tree. Matched calls are
    /// replaced in place; everything else is rebuilt with its children
    /// visited, value-equivalent to the input wherever no call matched.
    pub fn rewrite_expr(&self, expr: &Expr) -> Expr {
        match expr {
            Expr::Call(call) => {
                if self.array_overload.matches(call) || self.single_overload.matches(call) {
                    // A matched call either becomes the replacement or
                    // stays exactly as written; its subtree is final
                    // either way.
                    match self.rewrite_call(call) {
                        Some(replacement) => Expr::Call(replacement),
                        None => expr.clone(),
                    }
                } else {
                    Expr::Call(MethodCall {
                        select: call
                            .select
                            .as_deref()
                            .map(|select| Box::new(self.rewrite_expr(select))),
                        name: call.name.clone(),
                        arguments: call
                            .arguments
                            .iter()
                            .map(|arg| self.rewrite_expr(arg))
                            .collect(),
                        signature: call.signature.clone(),
                    })
                }
            }
            Expr::FieldAccess(access) => Expr::FieldAccess(FieldAccess {
                target: access
                    .target
                    .as_deref()
                    .map(|target| Box::new(self.rewrite_expr(target))),
                name: access.name.clone(),
            }),
            Expr::NewArray(array) => Expr::NewArray(NewArray {
                element_type: array.element_type.clone(),
                initializer: array.initializer.as_ref().map(|elements| {
                    elements
                        .iter()
                        .map(|element| self.rewrite_expr(element))
                        .collect()
                }),
            }),
            Expr::Literal(_) | Expr::Ident(_) => expr.clone(),
        }
    }

    /// Per-call state machine; `None` is the no-op outcome leaving the
    /// original call untouched.
    fn rewrite_call(&self, call: &MethodCall) -> Option<MethodCall> {
        // Both overloads take exactly (severity, template, payload).
        let [level, message, payload] = call.arguments.as_slice() else {
            return None;
        };

        let Some(level_name) = severity::level_simple_name(level) else {
            trace!("severity argument is not a qualified field access; leaving call unchanged");
            return None;
        };
        let Some(target) = severity::target_method(level_name) else {
            trace!(level = level_name, "no mapping for severity; leaving call unchanged");
            return None;
        };
        let Some(rewritten) = template::rewrite_template(message) else {
            trace!("message template is not a string literal; leaving call unchanged");
            return None;
        };

        let mut arguments = Vec::with_capacity(call.arguments.len() + 1);
        arguments.push(Expr::Literal(rewritten));
        arguments.extend(args::flatten_payload(payload));

        debug!(level = level_name, method = target, "rewrote parametrized log call");
        Some(call.clone().with_name(target).with_arguments(arguments))
    }
}

impl Default for LogRecast {
    fn default() -> Self {
        Self::new()
    }
}
