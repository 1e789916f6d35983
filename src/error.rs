/// Lexical errors.
///
/// Defines the errors the lexer can report: illegal characters (with the
/// offending column, so the input line can be echoed with a caret) and
/// unbalanced brackets detected during the scan.
pub mod lex_error;
/// Syntax errors.
///
/// Defines the errors the parser can report: unexpected tokens, premature end
/// of input, and missing separators or brackets. The parser stops at the
/// first violation; no recovery is attempted.
pub mod syntax_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: unknown
/// functions, out-of-range argument references, division by zero, type
/// mismatches, and invalid declarations.
pub mod runtime_error;

pub use lex_error::LexError;
pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;

/// Any error the pipeline can produce, tagged by stage.
///
/// Each stage reports failure explicitly and the driver aborts the statement
/// on the first error; this enum is the unified surface the public entry
/// points return.
#[derive(Debug)]
pub enum Error {
    /// The lexer rejected the input line.
    Lex(LexError),
    /// The token sequence did not match the grammar.
    Syntax(SyntaxError),
    /// Evaluation of a well-formed statement failed.
    Runtime(RuntimeError),
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<SyntaxError> for Error {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {}
