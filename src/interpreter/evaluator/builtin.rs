use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// A builtin taking one scalar. None of the unary builtins can fail.
pub type UnaryFn = fn(f64) -> f64;
/// A builtin taking two scalars; division can fail.
pub type BinaryFn = fn(f64, f64) -> EvalResult<f64>;

/// The fixed unary builtins, checked before the function registry.
static UNARY_TABLE: &[(&str, UnaryFn)] =
    &[("sqrt", f64::sqrt), ("sin", f64::sin), ("cos", f64::cos)];

/// The fixed binary builtins, checked before the function registry.
static BINARY_TABLE: &[(&str, BinaryFn)] = &[("add", add),
                                             ("sub", sub),
                                             ("mul", mul),
                                             ("div", div),
                                             ("pow", pow),
                                             ("eq", eq),
                                             ("le", le),
                                             ("nand", nand)];

/// Looks up a unary builtin by name.
pub(crate) fn unary(name: &str) -> Option<UnaryFn> {
    UNARY_TABLE.iter()
               .find(|(builtin, _)| *builtin == name)
               .map(|(_, function)| *function)
}

/// Looks up a binary builtin by name.
pub(crate) fn binary(name: &str) -> Option<BinaryFn> {
    BINARY_TABLE.iter()
                .find(|(builtin, _)| *builtin == name)
                .map(|(_, function)| *function)
}

fn add(left: f64, right: f64) -> EvalResult<f64> {
    Ok(left + right)
}

fn sub(left: f64, right: f64) -> EvalResult<f64> {
    Ok(left - right)
}

fn mul(left: f64, right: f64) -> EvalResult<f64> {
    Ok(left * right)
}

/// Division; a right operand of exactly zero is a runtime error.
fn div(left: f64, right: f64) -> EvalResult<f64> {
    if right == 0.0 {
        return Err(RuntimeError::DivisionByZero);
    }
    Ok(left / right)
}

fn pow(left: f64, right: f64) -> EvalResult<f64> {
    Ok(left.powf(right))
}

/// Equality as a number: `1.0` if the operands are equal, `0.0` otherwise.
fn eq(left: f64, right: f64) -> EvalResult<f64> {
    Ok(if left == right { 1.0 } else { 0.0 })
}

/// Strict less-than as a number.
fn le(left: f64, right: f64) -> EvalResult<f64> {
    Ok(if left < right { 1.0 } else { 0.0 })
}

/// Logical NAND over truthiness: any nonzero operand counts as true.
fn nand(left: f64, right: f64) -> EvalResult<f64> {
    Ok(if left == 0.0 || right == 0.0 { 1.0 } else { 0.0 })
}
