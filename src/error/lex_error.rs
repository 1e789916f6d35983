#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while scanning an input line.
///
/// Lexing is all-or-nothing: any of these errors discards every token
/// accumulated for the line.
pub enum LexError {
    /// A character the language does not accept, including a second `.` in a
    /// number, a `<` without `-`, a `#` without digits, and a `)` with no
    /// matching `(`.
    IllegalCharacter {
        /// The offending character.
        character: char,
        /// Its 0-based column in the input line.
        column:    usize,
        /// The input line, echoed with a caret when the error is displayed.
        input:     String,
    },
    /// The line ended while at least one `(` was still open.
    UnclosedBracket,
}

impl LexError {
    /// Builds an [`LexError::IllegalCharacter`] for the character starting at
    /// byte `column` of `input`.
    pub(crate) fn illegal(input: &str, column: usize) -> Self {
        let character = input[column..].chars().next().unwrap_or(' ');
        Self::IllegalCharacter { character,
                                 column,
                                 input: input.to_string() }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalCharacter { character,
                                     column,
                                     input, } => {
                writeln!(f, "{input}")?;
                for _ in 0..*column {
                    write!(f, " ")?;
                }
                writeln!(f, "^")?;
                write!(f, "Illegal Character: '{character}'")
            },
            Self::UnclosedBracket => write!(f, "Lexical error: Expected ')'"),
        }
    }
}

impl std::error::Error for LexError {}
