use crate::tree::{Expr, Literal};

/// Rewrite the message template argument when it is a string literal.
///
/// The check is on the literal's static type, not its textual shape;
/// a `CharSequence`-typed constant or a computed string yields `None`
/// and the call stays as written. On success the result is a fresh
/// string literal carrying the rewritten text as both raw and parsed
/// value.
pub fn rewrite_template(expr: &Expr) -> Option<Literal> {
    match expr {
        Expr::Literal(literal) => literal
            .as_string()
            .map(|text| Literal::string(rewrite_placeholders(text))),
        _ => None,
    }
}

/// Rewrite `{index}` placeholders to the anonymous `{}` form.
///
/// A placeholder is an opening brace, zero or more ASCII digits, and a
/// closing brace. Every other byte is preserved verbatim, including
/// braces that never close and brace pairs wrapping non-digit text, so
/// malformed templates pass through rather than being half-rewritten.
pub fn rewrite_placeholders(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open + 1..];
        let digits = tail
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(tail.len());
        if tail[digits..].starts_with('}') {
            out.push_str("{}");
            rest = &tail[digits + 1..];
        } else {
            out.push('{');
            rest = tail;
        }
    }

    out.push_str(rest);
    out
}
