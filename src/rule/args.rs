use crate::tree::Expr;

/// Flatten the payload argument into the target argument list tail.
///
/// A literal array construction with a non-empty initializer splices
/// its elements in, order preserved, each carried through untouched.
/// Everything else — a sized allocation, an empty initializer, an
/// array-valued variable, a plain expression — passes through as the
/// single payload argument. The decision is purely structural; element
/// values and types are never inspected.
pub fn flatten_payload(expr: &Expr) -> Vec<Expr> {
    match expr {
        Expr::NewArray(array) => match &array.initializer {
            Some(elements) if !elements.is_empty() => elements.clone(),
            _ => vec![expr.clone()],
        },
        _ => vec![expr.clone()],
    }
}
