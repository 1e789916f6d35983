/// Core expression parsing.
///
/// Contains the recursive-descent entry point for expressions and the
/// disambiguation of the `list`, `map`, and `if` special forms from ordinary
/// calls and bare references.
pub mod core;

/// Statement parsing.
///
/// Distinguishes `name <- body` declarations from plain expression statements
/// using one token of lookahead.
pub mod statement;

/// Utility functions for the parser.
///
/// Provides the comma-separated argument list helper shared by `list` forms
/// and parenthesized calls.
pub mod utils;
