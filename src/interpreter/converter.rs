use tracing::{debug, trace};

use crate::{
    error::{Paren, ParseError, ParseResult},
    interpreter::{
        lexer::{Token, tokenize},
        operator::Operator,
    },
};

/// An entry on the converter's operator stack.
#[derive(Debug, Clone, Copy)]
enum Pending {
    Operator(Operator),
    /// An open parenthesis and its byte offset.
    Group(usize),
}

/// Converts an infix expression to postfix with the shunting-yard algorithm.
///
/// Numbers go straight to the output. Operators wait on a stack until an
/// operator of lower precedence arrives; equal precedence pops first, which
/// makes every operator left-associative. Parentheses act as barriers and
/// never reach the output.
///
/// An empty or whitespace-only expression yields an empty sequence. Whether
/// that sequence is meaningful is left to the evaluator.
///
/// # Parameters
/// - `source`: The infix expression.
///
/// # Returns
/// The postfix sequence: numeric literals as written, operators as single
/// characters.
///
/// # Errors
/// Returns the first `ParseError` found in scan order:
/// - `InvalidCharacter` or `MalformedNumber` from the tokenizer,
/// - `MismatchedParentheses` for a `)` with no open group, or for a `(` still
///   open at the end of input.
///
/// # Example
/// ```
/// use shunt::interpreter::converter::to_postfix;
///
/// assert_eq!(to_postfix("(2+3)*4").unwrap(), ["2", "3", "+", "4", "*"]);
/// ```
pub fn to_postfix(source: &str) -> ParseResult<Vec<String>> {
    let mut output = Vec::new();
    let mut pending: Vec<Pending> = Vec::new();

    for token in tokenize(source) {
        let (token, position) = token.inspect_err(|e| debug!(%e, "tokenizing failed"))?;
        trace!(?token, position, "scanned");

        match token {
            Token::Number(literal) => output.push(literal.to_string()),
            Token::LParen => pending.push(Pending::Group(position)),
            Token::RParen => close_group(&mut pending, &mut output, position)?,
            Token::Plus => push_operator(Operator::Add, &mut pending, &mut output),
            Token::Minus => push_operator(Operator::Sub, &mut pending, &mut output),
            Token::Star => push_operator(Operator::Mul, &mut pending, &mut output),
            Token::Slash => push_operator(Operator::Div, &mut pending, &mut output),
            Token::Ignored => {},
        }
    }

    while let Some(entry) = pending.pop() {
        match entry {
            Pending::Operator(op) => output.push(op.to_string()),
            Pending::Group(position) => {
                let e = ParseError::MismatchedParentheses { unmatched: Paren::Opening,
                                                            position };
                debug!(%e, "unclosed group at end of input");
                return Err(e);
            },
        }
    }

    debug!(?output, "converted to postfix");
    Ok(output)
}

/// Pops operators of higher or equal precedence to the output, then pushes
/// `op`.
fn push_operator(op: Operator, pending: &mut Vec<Pending>, output: &mut Vec<String>) {
    while let Some(&Pending::Operator(top)) = pending.last()
          && top.precedence() >= op.precedence()
    {
        pending.pop();
        output.push(top.to_string());
    }
    pending.push(Pending::Operator(op));
}

/// Pops operators to the output until the innermost open group, which is
/// discarded.
fn close_group(pending: &mut Vec<Pending>,
               output: &mut Vec<String>,
               position: usize)
               -> ParseResult<()> {
    loop {
        match pending.pop() {
            Some(Pending::Operator(op)) => output.push(op.to_string()),
            Some(Pending::Group(_)) => return Ok(()),
            None => {
                let e = ParseError::MismatchedParentheses { unmatched: Paren::Closing,
                                                            position };
                debug!(%e, "no open group to close");
                return Err(e);
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_precedence_is_left_associative() {
        assert_eq!(to_postfix("8-3-2").unwrap(), ["8", "3", "-", "2", "-"]);
        assert_eq!(to_postfix("8/4*2").unwrap(), ["8", "4", "/", "2", "*"]);
    }

    #[test]
    fn groups_override_precedence() {
        assert_eq!(to_postfix("2*(3+4)").unwrap(), ["2", "3", "4", "+", "*"]);
        assert_eq!(to_postfix("((1))").unwrap(), ["1"]);
        assert_eq!(to_postfix("()").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn literals_keep_their_text() {
        assert_eq!(to_postfix("007 + 2.50").unwrap(), ["007", "2.50", "+"]);
    }

    #[test]
    fn unmatched_closing_paren_reports_its_position() {
        assert_eq!(to_postfix("2+3)"),
                   Err(ParseError::MismatchedParentheses { unmatched: Paren::Closing,
                                                           position:  3, }));
    }

    #[test]
    fn unclosed_group_reports_the_innermost_open_paren() {
        assert_eq!(to_postfix("(1 + (2"),
                   Err(ParseError::MismatchedParentheses { unmatched: Paren::Opening,
                                                           position:  5, }));
    }

    #[test]
    fn first_error_in_scan_order_wins() {
        assert!(matches!(to_postfix(")a"),
                         Err(ParseError::MismatchedParentheses { unmatched: Paren::Closing,
                                                                 .. })));
        assert!(matches!(to_postfix("a)"),
                         Err(ParseError::InvalidCharacter { character: 'a', .. })));
    }

    #[test]
    fn blank_input_converts_to_nothing() {
        assert_eq!(to_postfix("").unwrap(), Vec::<String>::new());
        assert_eq!(to_postfix(" \t ").unwrap(), Vec::<String>::new());
    }
}
