use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        value::Value,
    },
};

impl Interpreter {
    /// Evaluates a list literal: each element left-to-right, each reducing to
    /// one scalar.
    pub(crate) fn eval_list(&mut self, elements: &[Expr]) -> EvalResult<Value> {
        let mut values = Vec::with_capacity(elements.len());
        for element in elements {
            values.push(self.eval_scalar(element, "list")?);
        }

        Ok(Value::List(values))
    }

    /// Evaluates `concat`: the left list's elements followed by copies of the
    /// right list's elements, left-to-right.
    pub(crate) fn eval_concat(&mut self, left: &Expr, right: &Expr) -> EvalResult<Value> {
        let mut elements = self.eval_list_value(left)?;
        let right = self.eval_list_value(right)?;
        elements.extend(right);

        Ok(Value::List(elements))
    }

    /// Evaluates an expression that must produce a list.
    fn eval_list_value(&mut self, expr: &Expr) -> EvalResult<Vec<f64>> {
        match self.eval(expr)? {
            Value::List(elements) => Ok(elements),
            Value::Number(_) => Err(RuntimeError::ExpectedList { context: "concat".to_string() }),
        }
    }

    /// Evaluates the map-over-list form.
    ///
    /// Both operands must be bare function-name references, and both names
    /// must be registered. Whichever definition is a list literal supplies
    /// the elements; the other is the functor. Map is eager: every element is
    /// evaluated and then passed to the functor as a one-element call frame,
    /// in order, and the collected scalars form the result list.
    pub(crate) fn eval_map(&mut self, functor: &Expr, list: &Expr) -> EvalResult<Value> {
        let first = Self::operand_name(functor)?;
        let second = Self::operand_name(list)?;

        let (elements, body) = match (self.lookup(first)?, self.lookup(second)?) {
            (Expr::List(elements), body) => (elements, body),
            (body, Expr::List(elements)) => (elements, body),
            _ => return Err(RuntimeError::MapListNotFound),
        };

        let mut results = Vec::with_capacity(elements.len());
        for element in &elements {
            let value = self.eval_scalar(element, "map")?;

            self.push_frame(vec![value])?;
            let result = self.eval_scalar(&body, "map");
            self.frames.pop();

            results.push(result?);
        }

        Ok(Value::List(results))
    }

    /// Requires a map operand to be a bare function-name reference.
    fn operand_name(expr: &Expr) -> EvalResult<&str> {
        match expr {
            Expr::Call { name, arguments } if arguments.is_empty() => Ok(name),
            _ => Err(RuntimeError::MapOperandNotAName),
        }
    }
}
