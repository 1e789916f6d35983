use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::SyntaxError,
    interpreter::{lexer::Token, parser::utils::parse_comma_separated},
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. An expression begins with
/// a number, an argument reference, or a function name; what follows a
/// function name decides between the special forms (`list`, `map`), a
/// parenthesized call, and a bare reference.
///
/// Grammar:
/// ```text
///     expr := NUMBER
///           | ARGUMENT
///           | "list" '(' (expr (',' expr)*)? ')'
///           | "map" expr expr
///           | FUNCTION_NAME '(' (expr (',' expr)*)? ')'
///           | FUNCTION_NAME
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator for the current line.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    match tokens.next() {
        Some(Token::Number(value)) => Ok(Expr::Number(*value)),
        Some(Token::Argument(index)) => Ok(Expr::Argument(*index)),
        Some(Token::FunctionName(name)) => parse_form(name.clone(), tokens),
        Some(token) => Err(SyntaxError::UnexpectedToken { token: format!("{token:?}") }),
        None => Err(SyntaxError::UnexpectedEndOfInput),
    }
}

/// Parses whatever follows a function name and disambiguates the form.
///
/// - `list` demands a parenthesized, possibly empty, element sequence.
/// - `map` takes exactly two immediately following expressions; their shape
///   is validated at evaluation time, not here.
/// - A `(` starts an argument list: one argument parses as a unary
///   application, two as a binary one, three under the reserved name `if` as
///   a conditional, and any other count as an N-ary call.
/// - Anything else leaves a bare reference (a zero-argument call).
///
/// # Errors
/// An arrow here is rejected: declarations exist only at statement level.
fn parse_form<'a, I>(name: String, tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if name == "list" {
        return parse_list(tokens);
    }

    if name == "map" {
        let functor = parse_expression(tokens)?;
        let list = parse_expression(tokens)?;
        return Ok(Expr::Map { functor: Box::new(functor),
                              list:    Box::new(list), });
    }

    match tokens.peek() {
        Some(Token::OpeningBracket) => {
            tokens.next();
            parse_application(name, tokens)
        },
        Some(Token::Arrow) => Err(SyntaxError::UnexpectedToken { token: format!("{:?}",
                                                                                Token::Arrow) }),
        _ => Ok(Expr::Call { name,
                             arguments: Vec::new() }),
    }
}

/// Parses the argument list of `name(...)` and selects the node kind by
/// arity.
fn parse_application<'a, I>(name: String, tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut arguments = parse_comma_separated(tokens)?;

    match arguments.len() {
        1 => {
            let operand = Box::new(arguments.remove(0));
            Ok(Expr::Unary { name, operand })
        },
        2 => {
            let right = Box::new(arguments.remove(1));
            let left = Box::new(arguments.remove(0));
            Ok(Expr::Binary { name, left, right })
        },
        3 if name == "if" => {
            let else_branch = Box::new(arguments.remove(2));
            let then_branch = Box::new(arguments.remove(1));
            let condition = Box::new(arguments.remove(0));
            Ok(Expr::If { condition,
                          then_branch,
                          else_branch })
        },
        // Zero arguments and calls of three or more arguments both resolve
        // against the function registry at evaluation time.
        _ => Ok(Expr::Call { name, arguments }),
    }
}

/// Parses a list literal of the form `list(expr1, expr2, ..., exprN)`.
///
/// Unlike ordinary calls, `list` accepts any number of elements, including
/// none, and preserves their source order.
fn parse_list<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    match tokens.next() {
        Some(Token::OpeningBracket) => {},
        Some(token) => {
            return Err(SyntaxError::ExpectedOpeningBracket { token: Some(format!("{token:?}")) });
        },
        None => return Err(SyntaxError::ExpectedOpeningBracket { token: None }),
    }

    Ok(Expr::List(parse_comma_separated(tokens)?))
}
