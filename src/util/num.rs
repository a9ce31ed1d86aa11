/// The only decimal separator accepted in numeric literals.
pub const DECIMAL_POINT: char = '.';

/// Returns `true` if `literal` has the shape `digits ['.' digits*]`.
///
/// The literal must start with an ASCII digit and may contain at most one
/// decimal point. A trailing point (`"2."`) is allowed, a leading one
/// (`".5"`) is not.
///
/// ## Example
/// ```
/// use shunt::util::num::is_decimal_literal;
///
/// assert!(is_decimal_literal("3.14"));
/// assert!(is_decimal_literal("2."));
/// assert!(!is_decimal_literal("1.2.3"));
/// assert!(!is_decimal_literal(".5"));
/// ```
#[must_use]
pub fn is_decimal_literal(literal: &str) -> bool {
    let Some(first) = literal.chars().next() else {
        return false;
    };
    if !first.is_ascii_digit() {
        return false;
    }

    let mut seen_point = false;
    for c in literal.chars() {
        match c {
            '0'..='9' => {},
            DECIMAL_POINT if !seen_point => seen_point = true,
            _ => return false,
        }
    }
    true
}

/// Parses a decimal literal into an `f64`.
///
/// ## Errors
/// Returns the error produced by `error` if the literal is not of the form
/// accepted by [`is_decimal_literal`].
///
/// ## Parameters
/// - `literal`: The literal text.
/// - `error`: Builds the error to return if the literal is rejected.
///
/// ## Returns
/// - `Ok(f64)`: The parsed value, rounded to the nearest double.
/// - `Err(error)`: If the literal is malformed.
///
/// ## Example
/// ```
/// use shunt::util::num::parse_decimal_checked;
///
/// assert_eq!(parse_decimal_checked("2.5", || "bad"), Ok(2.5));
/// assert_eq!(parse_decimal_checked("7.", || "bad"), Ok(7.0));
/// assert_eq!(parse_decimal_checked("1e5", || "bad"), Err("bad"));
/// ```
pub fn parse_decimal_checked<E>(literal: &str, error: impl FnOnce() -> E) -> Result<f64, E> {
    if !is_decimal_literal(literal) {
        return Err(error());
    }
    // The grammar above is a strict subset of what `f64::from_str` accepts.
    literal.parse().map_err(|_| error())
}
