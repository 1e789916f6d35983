#[derive(Debug, PartialEq)]
/// Represents all errors that can occur while parsing a token sequence.
///
/// The parser stops at the first structural violation and reports the
/// offending token in its debug form; the remaining tokens for the line are
/// discarded.
pub enum SyntaxError {
    /// Found a token that cannot start or continue the current construct.
    UnexpectedToken {
        /// Debug rendering of the token encountered.
        token: String,
    },
    /// The token sequence ended where more input was required.
    UnexpectedEndOfInput,
    /// A `(` was required but not found, e.g. after `list`.
    ExpectedOpeningBracket {
        /// Debug rendering of the token found instead, if any.
        token: Option<String>,
    },
    /// Inside a parenthesized argument list, neither `,` nor `)` followed an
    /// argument.
    ExpectedCommaOrClosingBracket {
        /// Debug rendering of the token found instead.
        token: String,
    },
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token } => {
                write!(f, "Illegal Syntax: Unexpected token: {token}")
            },
            Self::UnexpectedEndOfInput => write!(f, "Illegal Syntax: Unexpected end of input"),
            Self::ExpectedOpeningBracket { token } => match token {
                Some(token) => write!(f, "Illegal Syntax: Expected '('. Received: {token}"),
                None => write!(f, "Illegal Syntax: Expected '('"),
            },
            Self::ExpectedCommaOrClosingBracket { token } => {
                write!(f, "Illegal Syntax: Expected ',' or ')'. Received: {token}")
            },
        }
    }
}

impl std::error::Error for SyntaxError {}
