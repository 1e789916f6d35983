use std::fmt;

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// `Expr` covers every expression form the grammar can produce: numeric
/// literals, positional argument references, unary and binary applications,
/// conditionals, list literals, map-over-list, and calls of user-defined
/// functions. Each variant exclusively owns its children, so an `Expr` is
/// always a finite tree and `clone` produces an independent deep copy.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal, e.g. `3.5` or `-12`.
    Number(f64),
    /// A positional reference to the caller-supplied argument at this index,
    /// e.g. `#0`. Indices are zero-based and relative to the active call
    /// frame.
    Argument(usize),
    /// A one-argument application, e.g. `sqrt(16)` or `fact(5)`.
    Unary {
        /// The builtin or user-defined function being applied.
        name:    String,
        /// The single operand.
        operand: Box<Expr>,
    },
    /// A two-argument application, e.g. `add(3, 4)`.
    Binary {
        /// The builtin or user-defined function being applied.
        name:  String,
        /// The left operand, evaluated first.
        left:  Box<Expr>,
        /// The right operand.
        right: Box<Expr>,
    },
    /// A conditional, e.g. `if(eq(#0, 0), 1, 2)`. Only the taken branch is
    /// evaluated.
    If {
        /// The condition; exactly zero selects the else branch.
        condition:   Box<Expr>,
        /// Evaluated when the condition is nonzero.
        then_branch: Box<Expr>,
        /// Evaluated when the condition is exactly zero.
        else_branch: Box<Expr>,
    },
    /// A fixed-arity list literal, e.g. `list(1, 2, 3)`. Element order is
    /// significant and preserved.
    List(Vec<Expr>),
    /// A map-over-list form, e.g. `map squares numbers`. Both operands must
    /// reduce to bare function-name references; they are resolved against the
    /// function registry at evaluation time, not at parse time.
    Map {
        /// First operand as written in the source.
        functor: Box<Expr>,
        /// Second operand as written in the source.
        list:    Box<Expr>,
    },
    /// A call of a user-defined function: a bare reference (`counter`), a
    /// zero-argument call (`counter()`), or an N-ary call with three or more
    /// arguments. One- and two-argument calls parse as `Unary` and `Binary`.
    Call {
        /// The name to resolve in the function registry.
        name:      String,
        /// The call arguments, evaluated left-to-right.
        arguments: Vec<Expr>,
    },
}

impl Expr {
    /// Returns the function name heading this expression, if it has one.
    ///
    /// Used by the declaration-time self-reference guard: a definition whose
    /// head is literally the name being declared is guaranteed infinite
    /// recursion. The check is shallow; it does not see through `if` or into
    /// sub-expressions.
    #[must_use]
    pub fn head_name(&self) -> Option<&str> {
        match self {
            Self::Unary { name, .. } | Self::Binary { name, .. } | Self::Call { name, .. } => {
                Some(name)
            },
            Self::Number(_)
            | Self::Argument(_)
            | Self::If { .. }
            | Self::List(_)
            | Self::Map { .. } => None,
        }
    }
}

/// A top-level statement: one per input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A function declaration, `name <- body`. Registers `body` under `name`;
    /// the body is not evaluated until the function is called.
    Declaration {
        /// The name being declared.
        name: String,
        /// The definition evaluated on every call.
        body: Expr,
    },
    /// A standalone expression evaluated for its result.
    Expression(Expr),
}

// The parenthesized prefix rendering below is a diagnostic aid (the driver's
// --ast flag); it is not part of the evaluation contract.

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Argument(index) => write!(f, "#{index}"),
            Self::Unary { name, operand } => write!(f, "({name} {operand})"),
            Self::Binary { name, left, right } => write!(f, "({name} {left} {right})"),
            Self::If { condition,
                       then_branch,
                       else_branch, } => {
                write!(f, "(if {condition} {then_branch} {else_branch})")
            },
            Self::List(elements) => {
                write!(f, "(list")?;
                for element in elements {
                    write!(f, " {element}")?;
                }
                write!(f, ")")
            },
            Self::Map { functor, list } => write!(f, "(map {functor} {list})"),
            Self::Call { name, arguments } => {
                if arguments.is_empty() {
                    return write!(f, "{name}");
                }
                write!(f, "({name}")?;
                for argument in arguments {
                    write!(f, " {argument}")?;
                }
                write!(f, ")")
            },
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declaration { name, body } => write!(f, "(<- {name} {body})"),
            Self::Expression(expr) => write!(f, "{expr}"),
        }
    }
}
