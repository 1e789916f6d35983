use std::collections::HashMap;

use crate::{
    ast::{Expr, Statement},
    error::{Error, RuntimeError},
    interpreter::{
        evaluator::frames::FrameStack,
        lexer::scan,
        parser::statement::parse_statement,
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The maximum number of simultaneously active user-function calls.
///
/// The declaration-time self-reference guard only catches the trivial cycle;
/// deeply or indirectly recursive definitions hit this limit instead of
/// exhausting the native stack.
pub const MAX_CALL_DEPTH: usize = 500;

/// The tree-walking interpreter.
///
/// The only state that persists across statements is the function registry,
/// populated by declarations and consulted after the builtins on every call.
/// The call-frame stack is per-statement and resets before each line.
///
/// ## Usage
///
/// One `Interpreter` is created per session and reused for every line, so
/// functions declared on earlier lines stay callable:
///
/// ```
/// use thisfunc::interpreter::{evaluator::core::Interpreter, value::Value};
///
/// let mut interpreter = Interpreter::new();
///
/// assert_eq!(interpreter.eval_line("double<-mul(#0, 2)").unwrap(), None);
/// assert_eq!(interpreter.eval_line("double(21)").unwrap(), Some(Value::Number(42.0)));
/// ```
pub struct Interpreter {
    /// A mapping from function names to their definition bodies. First
    /// registration wins; redeclaring is a runtime error.
    pub(crate) functions: HashMap<String, Expr>,
    /// Activation records of the currently evaluating calls.
    pub(crate) frames:    FrameStack,
}

#[allow(clippy::new_without_default)]
impl Interpreter {
    /// Creates an interpreter with no registered functions and no active
    /// calls.
    #[must_use]
    pub fn new() -> Self {
        Self { functions: HashMap::new(),
               frames:    FrameStack::new(), }
    }

    /// Feeds one input line through the whole pipeline: scan, parse one
    /// statement, evaluate it.
    ///
    /// Returns `None` for blank lines and declarations, and the produced
    /// [`Value`] otherwise. On any failure the statement aborts as a whole:
    /// call frames are dropped, the registry keeps only what earlier
    /// statements committed, and the error is returned for display.
    ///
    /// # Errors
    /// Returns an [`Error`] from whichever stage rejected the line first.
    pub fn eval_line(&mut self, line: &str) -> Result<Option<Value>, Error> {
        self.frames.clear();

        let tokens = scan(line)?;

        if tokens.is_empty() {
            return Ok(None);
        }

        let mut iter = tokens.iter().peekable();
        let statement = parse_statement(&mut iter)?;

        match self.eval_statement(&statement) {
            Ok(value) => Ok(value),
            Err(e) => {
                self.frames.clear();
                Err(e.into())
            },
        }
    }

    /// Evaluates a single parsed statement.
    ///
    /// Declarations register their body and produce no value; expression
    /// statements produce exactly one [`Value`].
    ///
    /// # Errors
    /// Returns a [`RuntimeError`] if registration is rejected or evaluation
    /// fails at any depth.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Option<Value>> {
        match statement {
            Statement::Declaration { name, body } => {
                self.declare(name, body)?;
                Ok(None)
            },
            Statement::Expression(expr) => Ok(Some(self.eval(expr)?)),
        }
    }

    /// Evaluates an expression node.
    ///
    /// This is the recursive dispatch at the heart of the interpreter; every
    /// node variant has its match arm. Operands always evaluate
    /// left-to-right, and a node produces exactly one value or fails the
    /// whole statement.
    pub(crate) fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Number(value) => Ok(Value::Number(*value)),
            Expr::Argument(index) => self.eval_argument(*index),
            Expr::Unary { name, operand } => self.eval_unary(name, operand),
            Expr::Binary { name, left, right } => self.eval_binary(name, left, right),
            Expr::If { condition,
                       then_branch,
                       else_branch, } => self.eval_if(condition, then_branch, else_branch),
            Expr::List(elements) => self.eval_list(elements),
            Expr::Map { functor, list } => self.eval_map(functor, list),
            Expr::Call { name, arguments } => self.eval_call(name, arguments),
        }
    }

    /// Resolves an argument reference against the active call frame.
    fn eval_argument(&self, index: usize) -> EvalResult<Value> {
        self.frames
            .argument(index)
            .map(Value::Number)
            .ok_or(RuntimeError::MissingArgument { index })
    }

    /// Evaluates a conditional. Only the taken branch is evaluated; a
    /// condition of exactly zero is false, anything else is true.
    fn eval_if(&mut self,
               condition: &Expr,
               then_branch: &Expr,
               else_branch: &Expr)
               -> EvalResult<Value> {
        let condition = self.eval_scalar(condition, "if")?;

        if condition == 0.0 {
            self.eval(else_branch)
        } else {
            self.eval(then_branch)
        }
    }

    /// Evaluates an expression that must produce a scalar.
    ///
    /// `context` names the operation that needed the scalar, for the error
    /// message when a list shows up instead.
    pub(crate) fn eval_scalar(&mut self, expr: &Expr, context: &str) -> EvalResult<f64> {
        match self.eval(expr)? {
            Value::Number(value) => Ok(value),
            Value::List(_) => Err(RuntimeError::ExpectedNumber { context: context.to_string() }),
        }
    }
}
