use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// A function name: a maximal run of ASCII letters. No digits and no
    /// underscores are permitted.
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    FunctionName(String),
    /// A numeric literal such as `42`, `-3`, or `0.25`. Only one `.` may
    /// appear; a second one is rejected as an illegal character. A trailing
    /// `.` with no fractional digits reads as the integer part (`1.` is `1`).
    #[regex(r"-?[0-9]+(\.[0-9]*)?", scan_number)]
    Number(f64),
    /// An argument reference such as `#0`. The `#` must be followed
    /// immediately by one or more digits, and the index must fit in `usize`.
    #[regex(r"#[0-9]+", scan_argument)]
    Argument(usize),
    /// The declaration arrow `<-`. A `<` followed by anything else is an
    /// illegal character.
    #[token("<-")]
    Arrow,
    /// `(`
    #[token("(")]
    OpeningBracket,
    /// `)`
    #[token(")")]
    ClosingBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// Spaces and tabs between tokens are insignificant.
    #[regex(r"[ \t]+", logos::skip)]
    Ignored,
}

/// Converts one input line into its token sequence.
///
/// Tokenization is all-or-nothing: on the first illegal character every token
/// accumulated so far is discarded and the error carries the offending
/// character together with its 0-based column. Bracket balance is validated
/// during the scan; a `)` with no open `(` fails at its column, and a line
/// that ends with brackets still open fails with [`LexError::UnclosedBracket`].
///
/// # Errors
/// Returns a [`LexError`] for any character the language does not accept or
/// for unbalanced brackets.
///
/// # Examples
/// ```
/// use thisfunc::interpreter::lexer::{Token, scan};
///
/// let tokens = scan("add(3, 4)").unwrap();
/// assert_eq!(tokens[0], Token::FunctionName("add".to_string()));
/// assert_eq!(tokens[2], Token::Number(3.0));
///
/// assert!(scan("add(3, 4) $").is_err());
/// ```
pub fn scan(input: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut depth = 0usize;

    let mut lexer = Token::lexer(input);

    while let Some(item) = lexer.next() {
        match item {
            Ok(Token::OpeningBracket) => {
                depth += 1;
                tokens.push(Token::OpeningBracket);
            },
            Ok(Token::ClosingBracket) => {
                if depth == 0 {
                    return Err(LexError::illegal(input, lexer.span().start));
                }
                depth -= 1;
                tokens.push(Token::ClosingBracket);
            },
            Ok(token) => tokens.push(token),
            Err(()) => return Err(LexError::illegal(input, lexer.span().start)),
        }
    }

    if depth > 0 {
        return Err(LexError::UnclosedBracket);
    }

    Ok(tokens)
}

/// Accumulates a numeric literal from the current token slice.
///
/// The value is built digit by digit (`value * 10 + digit`), divided by the
/// power of ten matching the number of fractional digits, and negated if the
/// literal carries a leading `-`.
fn scan_number(lex: &logos::Lexer<Token>) -> f64 {
    let slice = lex.slice();

    let mut value = 0.0;
    let mut power_10 = 1.0;
    let mut fractional = false;

    for c in slice.chars() {
        match c {
            '-' => {},
            '.' => fractional = true,
            digit => {
                value = value * 10.0 + f64::from(digit as u8 - b'0');
                if fractional {
                    power_10 *= 10.0;
                }
            },
        }
    }

    let value = value / power_10;

    if slice.starts_with('-') { -value } else { value }
}

/// Accumulates an argument index from the digits after the `#`.
///
/// An index that does not fit in `usize` yields `None`, which fails the
/// token and reports the `#` as an illegal character.
fn scan_argument(lex: &logos::Lexer<Token>) -> Option<usize> {
    lex.slice().chars().skip(1).try_fold(0usize, |index, digit| {
                                   index.checked_mul(10)?
                                        .checked_add(usize::from(digit as u8 - b'0'))
                               })
}
