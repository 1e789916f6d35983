use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::SyntaxError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a comma-separated sequence of expressions up to a closing `)`.
///
/// This helper is shared by `list` literals and parenthesized argument lists.
/// It repeatedly parses one expression, expecting either a comma to continue
/// or `)` to end the sequence. An immediately encountered `)` produces an
/// empty sequence.
///
/// Grammar (simplified): `arglist := (expr ("," expr)*)? ")"`
///
/// # Parameters
/// - `tokens`: Token iterator positioned just after the opening `(`.
///
/// # Returns
/// The parsed expressions in source order.
///
/// # Errors
/// Returns a [`SyntaxError`] if an element fails to parse, a token other than
/// `,` or `)` follows an element, or the sequence ends before the closing
/// `)`.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I>(tokens: &mut Peekable<I>)
                                                                   -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut items = Vec::new();

    if let Some(Token::ClosingBracket) = tokens.peek() {
        tokens.next();

        return Ok(items);
    }

    loop {
        items.push(parse_expression(tokens)?);
        match tokens.next() {
            Some(Token::Comma) => {},
            Some(Token::ClosingBracket) => break,
            Some(token) => {
                return Err(SyntaxError::ExpectedCommaOrClosingBracket { token:
                                                                            format!("{token:?}") });
            },
            None => return Err(SyntaxError::UnexpectedEndOfInput),
        }
    }

    Ok(items)
}
