use crate::tree::Expr;

/// Map a JUL level enumerant onto the SLF4J method it becomes.
///
/// Total over the six known enumerants, `None` for everything else.
/// `CONFIG` goes to `info` even though it sits below `INFO` in JUL's
/// ordering; this table is deliberate, do not "fix" it.
pub fn target_method(level: &str) -> Option<&'static str> {
    match level {
        "ALL" | "FINEST" | "FINER" => Some("trace"),
        "CONFIG" | "INFO" => Some("info"),
        "WARNING" => Some("warn"),
        "SEVERE" => Some("error"),
        _ => None,
    }
}

/// Extract the enumerant's simple name from the severity argument.
///
/// The expected shape is a qualified field access like `Level.SEVERE`;
/// anything else — a call like `Level.parse("CUSTOM")`, a bare
/// identifier, a field access with no target — yields `None` and the
/// call stays as written.
pub fn level_simple_name(expr: &Expr) -> Option<&str> {
    match expr {
        Expr::FieldAccess(access) if access.target.is_some() => Some(&access.name),
        _ => None,
    }
}
