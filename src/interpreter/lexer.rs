use logos::Logos;

use crate::{
    error::{ParseError, ParseResult},
    util::num::is_decimal_literal,
};

/// Represents a lexical token in an infix expression.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Numbers borrow their text from the source so the postfix output can echo
/// the literal exactly as written.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token<'s> {
    /// Numeric literal tokens, such as `42`, `3.14` or `2.`.
    ///
    /// The regex is deliberately greedy over digits and points; literals with
    /// more than one point are rejected by [`tokenize`].
    #[regex(r"[0-9][0-9.]*", |lex| lex.slice())]
    Number(&'s str),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,

    /// Spaces, tabs, newlines, carriage returns, vertical tabs and feeds.
    #[regex(r"[ \t\n\r\x0B\x0C]+", logos::skip)]
    Ignored,
}

/// Splits `source` into tokens paired with their byte offset.
///
/// The iterator is lazy: it stops being useful after the first error, and the
/// converter stops pulling from it there, so errors surface in scan order.
///
/// # Errors
/// Yields `ParseError::InvalidCharacter` for any character that does not
/// start a token, and `ParseError::MalformedNumber` for a literal with more
/// than one decimal point.
///
/// # Example
/// ```
/// use shunt::interpreter::lexer::{Token, tokenize};
///
/// let tokens: Vec<_> = tokenize("(1 + 2.5)").collect::<Result<_, _>>().unwrap();
/// assert_eq!(tokens,
///            vec![(Token::LParen, 0),
///                 (Token::Number("1"), 1),
///                 (Token::Plus, 3),
///                 (Token::Number("2.5"), 5),
///                 (Token::RParen, 8)]);
/// ```
pub fn tokenize(source: &str) -> impl Iterator<Item = ParseResult<(Token<'_>, usize)>> + '_ {
    Token::lexer(source).spanned().map(move |(token, span)| {
        let position = span.start;
        match token {
            Ok(Token::Number(literal)) if !is_decimal_literal(literal) => {
                Err(ParseError::MalformedNumber { literal: literal.to_string(),
                                                  position })
            },
            Ok(token) => Ok((token, position)),
            Err(()) => {
                let character = source[position..].chars().next().unwrap_or_default();
                Err(ParseError::InvalidCharacter { character, position })
            },
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> ParseResult<Vec<Token<'_>>> {
        tokenize(source).map(|r| r.map(|(token, _)| token)).collect()
    }

    #[test]
    fn skips_all_ascii_whitespace() {
        assert_eq!(lex(" 1\t+\n2\r*\x0B3\x0C"),
                   Ok(vec![Token::Number("1"),
                           Token::Plus,
                           Token::Number("2"),
                           Token::Star,
                           Token::Number("3")]));
        assert_eq!(lex("   "), Ok(vec![]));
    }

    #[test]
    fn numbers_are_maximal_runs() {
        assert_eq!(lex("12.50/2."),
                   Ok(vec![Token::Number("12.50"), Token::Slash, Token::Number("2.")]));
    }

    #[test]
    fn reports_invalid_characters_with_their_offset() {
        assert_eq!(lex("2+a"),
                   Err(ParseError::InvalidCharacter { character: 'a',
                                                      position:  2, }));
        assert_eq!(lex("1 + .5"),
                   Err(ParseError::InvalidCharacter { character: '.',
                                                      position:  4, }));
        assert_eq!(lex("1+é"),
                   Err(ParseError::InvalidCharacter { character: 'é',
                                                      position:  2, }));
    }

    #[test]
    fn rejects_numbers_with_several_points() {
        assert_eq!(lex("1 + 1.2.3"),
                   Err(ParseError::MalformedNumber { literal:  "1.2.3".to_string(),
                                                     position: 4, }));
    }
}
