use std::fmt;

/// The result of evaluating one statement's expression.
///
/// Every value-producing node yields exactly one scalar; `list`, `concat`,
/// and `map` yield a fixed-size sequence of scalars. Declarations produce no
/// value at all.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A scalar, double-precision result.
    Number(f64),
    /// A fixed-size list of scalars, in source order.
    List(Vec<f64>),
}

impl fmt::Display for Value {
    /// Renders a scalar with its natural decimal representation and a list as
    /// `[e1, e2, ..., en]`.
    ///
    /// # Examples
    /// ```
    /// use thisfunc::interpreter::value::Value;
    ///
    /// assert_eq!(Value::Number(120.0).to_string(), "120");
    /// assert_eq!(Value::List(vec![1.0, 2.5, 3.0]).to_string(), "[1, 2.5, 3]");
    /// assert_eq!(Value::List(Vec::new()).to_string(), "[]");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::List(elements) => {
                write!(f, "[")?;
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{element}")?;
                }
                write!(f, "]")
            },
        }
    }
}
