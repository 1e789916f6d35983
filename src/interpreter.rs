/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST, dispatches builtins and user-defined
/// functions, manages the call-frame stack used by recursive functions, and
/// produces a [`crate::interpreter::value::Value`] or a runtime error.
///
/// # Responsibilities
/// - Evaluates every expression form with left-to-right operand order.
/// - Maintains the function registry across statements.
/// - Reports runtime errors such as unknown functions or division by zero.
pub mod evaluator;
/// The lexer module tokenizes one input line for further parsing.
///
/// The lexer reads the raw source text and produces a sequence of tokens:
/// function names, numbers, argument references, the declaration arrow,
/// brackets, and commas. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens, skipping whitespace.
/// - Accumulates numeric and argument literals digit by digit.
/// - Validates bracket balance and reports illegal characters with their
///   column.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token sequence produced by the lexer and
/// constructs one statement per input line, disambiguating the `list`, `map`,
/// and `if` special forms from ordinary calls and declarations.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the grammar, stopping at the first violation.
/// - Distinguishes declarations, calls, bare references and special forms.
pub mod parser;
/// The value module defines the runtime results of evaluation.
///
/// A statement evaluates to either a scalar or a fixed-size list of scalars;
/// this module declares that result type and its textual rendering.
pub mod value;
