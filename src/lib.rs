//! # thisfunc
//!
//! thisfunc is an interactive interpreter for a small prefix-notation
//! expression language. It supports arithmetic, boolean-valued comparisons,
//! conditionals, fixed-size lists, an eager map-over-list construct, and
//! user-defined (including recursive) functions whose parameters are
//! positional argument references (`#0`, `#1`, ...).

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::evaluator::core::Interpreter;

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` types that represent the
/// syntactic structure of one input line as a tree. The AST is built by the
/// parser and walked by the evaluator; every node exclusively owns its
/// children and `clone` is a deep copy.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Provides the shallow head-name accessor used by declaration validation.
/// - Renders a parenthesized prefix form for diagnostics.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors the pipeline can raise. Each stage has its
/// own enum with a fixed display label (`Illegal Character`, `Illegal
/// Syntax`, `Runtime Error`), and a top-level [`error::Error`] unifies them
/// for the public entry points.
///
/// # Responsibilities
/// - Defines error enums for all failure modes of the three stages.
/// - Renders lexical errors with the input line and a caret under the
///   offending column.
/// - Integrates with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together the lexer, parser, evaluator, and value
/// rendering to provide a complete runtime for the language. It exposes the
/// interpreter type driven once per input line.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, values.
/// - Provides entry points for scanning, parsing, and evaluating statements.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Runs a multi-line source text and returns the last rendered result.
///
/// Each line is one statement, fed through the pipeline with a single
/// interpreter so function declarations on earlier lines stay in effect.
/// Lines producing values render to their display form; the last such
/// rendering is returned, or `None` if no line produced a value.
///
/// # Errors
/// Returns the first error any line produces; lines after it are not
/// evaluated.
///
/// # Examples
/// ```
/// use thisfunc::run_source;
///
/// let result = run_source("add(3, 4)").unwrap();
/// assert_eq!(result.as_deref(), Some("7"));
///
/// // A recursive function, declared and then called.
/// let source = "fact<-if(le(#0,1),1,mul(#0,fact(sub(#0,1))))\nfact(5)";
/// assert_eq!(run_source(source).unwrap().as_deref(), Some("120"));
///
/// // Calling an undeclared function is an error.
/// assert!(run_source("missing(1)").is_err());
/// ```
pub fn run_source(source: &str) -> Result<Option<String>, error::Error> {
    let mut interpreter = Interpreter::new();

    let mut result = None;

    for line in source.lines() {
        if let Some(value) = interpreter.eval_line(line)? {
            result = Some(value.to_string());
        }
    }

    Ok(result)
}
