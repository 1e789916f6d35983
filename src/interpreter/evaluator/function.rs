use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            builtin,
            core::{EvalResult, Interpreter, MAX_CALL_DEPTH},
        },
        value::Value,
    },
};

impl Interpreter {
    /// Evaluates a one-argument application.
    ///
    /// The operand is evaluated first, in the caller's frame. Builtins are
    /// dispatched before the function registry, so a user function sharing a
    /// builtin's name is shadowed at call sites.
    pub(crate) fn eval_unary(&mut self, name: &str, operand: &Expr) -> EvalResult<Value> {
        let value = self.eval_scalar(operand, name)?;

        if let Some(function) = builtin::unary(name) {
            return Ok(Value::Number(function(value)));
        }

        self.call_function(name, vec![value])
    }

    /// Evaluates a two-argument application.
    ///
    /// The left operand is evaluated fully before the right one. `concat` is
    /// the one binary form whose operands are lists; everything else takes
    /// scalars.
    pub(crate) fn eval_binary(&mut self, name: &str, left: &Expr, right: &Expr)
                              -> EvalResult<Value> {
        if name == "concat" {
            return self.eval_concat(left, right);
        }

        let left = self.eval_scalar(left, name)?;
        let right = self.eval_scalar(right, name)?;

        if let Some(function) = builtin::binary(name) {
            return Ok(Value::Number(function(left, right)?));
        }

        self.call_function(name, vec![left, right])
    }

    /// Evaluates a bare reference, a zero-argument call, or an N-ary call.
    ///
    /// A call without arguments runs the definition under the *current*
    /// frame, so a helper referenced from inside a function body still sees
    /// that function's arguments. A call with arguments evaluates them all
    /// left-to-right in the caller's frame and only then opens the callee's
    /// frame.
    pub(crate) fn eval_call(&mut self, name: &str, arguments: &[Expr]) -> EvalResult<Value> {
        if arguments.is_empty() {
            let body = self.lookup(name)?;
            return self.eval(&body);
        }

        let mut values = Vec::with_capacity(arguments.len());
        for argument in arguments {
            values.push(self.eval_scalar(argument, name)?);
        }

        self.call_function(name, values)
    }

    /// Calls a registered function with already-evaluated argument values.
    ///
    /// The values become the callee's own frame; the frame is closed again
    /// whether the body evaluates cleanly or not, so a failing callee cannot
    /// leave its arguments visible to the caller.
    pub(crate) fn call_function(&mut self, name: &str, arguments: Vec<f64>) -> EvalResult<Value> {
        let body = self.lookup(name)?;

        self.push_frame(arguments)?;
        let result = self.eval(&body);
        self.frames.pop();

        result
    }

    /// Fetches a clone of a registered definition by name.
    pub(crate) fn lookup(&self, name: &str) -> EvalResult<Expr> {
        self.functions
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownFunction { name: name.to_string() })
    }

    /// Opens a call frame, enforcing the recursion depth limit.
    pub(crate) fn push_frame(&mut self, arguments: Vec<f64>) -> EvalResult<()> {
        if self.frames.depth() >= MAX_CALL_DEPTH {
            return Err(RuntimeError::RecursionLimit);
        }
        self.frames.push(arguments);
        Ok(())
    }

    /// Registers a function declaration.
    ///
    /// Registration is atomic and rejected when the name already exists or
    /// when the body's head call is literally the name being declared (the
    /// shallow guaranteed-infinite-recursion guard; indirect cycles are not
    /// detected). The body is not evaluated here.
    pub(crate) fn declare(&mut self, name: &str, body: &Expr) -> EvalResult<()> {
        if self.functions.contains_key(name) {
            return Err(RuntimeError::FunctionAlreadyDefined { name: name.to_string() });
        }

        if body.head_name() == Some(name) {
            return Err(RuntimeError::SelfReference { name: name.to_string() });
        }

        self.functions.insert(name.to_string(), body.clone());
        Ok(())
    }
}
