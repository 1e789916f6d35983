use std::iter::Peekable;

use crate::{
    ast::Statement,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a single statement.
///
/// A statement is either a function declaration, `name <- expr`, or a plain
/// expression evaluated for its result. The declaration form is identified
/// with one token of lookahead: a function name immediately followed by the
/// arrow. Anything else parses as an expression statement.
///
/// The parser consumes exactly one statement; tokens after it are the
/// caller's responsibility (the shell feeds one line per statement, so there
/// are normally none).
///
/// # Parameters
/// - `tokens`: Token iterator for the current line.
///
/// # Returns
/// A parsed [`Statement`] node.
///
/// # Errors
/// Returns a [`crate::error::SyntaxError`] on the first structural violation;
/// the remaining tokens for the line are discarded.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(Token::FunctionName(_)) = tokens.peek() {
        let mut lookahead = tokens.clone();
        lookahead.next();

        if let Some(Token::Arrow) = lookahead.peek() {
            let name = if let Some(Token::FunctionName(n)) = tokens.next() {
                n.clone()
            } else {
                unreachable!()
            };
            tokens.next();

            let body = parse_expression(tokens)?;
            return Ok(Statement::Declaration { name, body });
        }
    }

    Ok(Statement::Expression(parse_expression(tokens)?))
}
