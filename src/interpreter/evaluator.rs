/// Core evaluation logic and interpreter state.
///
/// Contains the [`core::Interpreter`] with its function registry and call
/// frames, the per-statement entry points, and the expression dispatch.
pub mod core;

/// Builtin function tables.
///
/// The fixed set of unary and binary operations resolved before the function
/// registry is consulted.
pub mod builtin;

/// Call-frame bookkeeping for user-defined functions.
///
/// Each active call owns one frame of argument values; recursion pushes and
/// pops whole frames.
pub mod frames;

/// User-defined function evaluation.
///
/// Handles calls of registered functions, the frame push/pop discipline
/// around them, and declaration-time validation and registration.
pub mod function;

/// List-valued evaluation.
///
/// Implements list literals, list concatenation, and the eager map-over-list
/// form.
pub mod list;
