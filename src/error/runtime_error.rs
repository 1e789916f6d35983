#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Called a name that is neither a builtin of the right arity nor a
    /// registered user function.
    UnknownFunction {
        /// The name that failed to resolve.
        name: String,
    },
    /// An argument reference's index is out of range for the active call
    /// frame, or no frame is active at all.
    MissingArgument {
        /// The index that was requested.
        index: usize,
    },
    /// Attempted division with an exactly-zero right operand.
    DivisionByZero,
    /// A scalar was required but the operand produced a list.
    ExpectedNumber {
        /// The operation that needed a scalar.
        context: String,
    },
    /// A list was required but the operand produced a scalar.
    ExpectedList {
        /// The operation that needed a list.
        context: String,
    },
    /// Attempted to declare a function name that is already registered.
    FunctionAlreadyDefined {
        /// The name of the function.
        name: String,
    },
    /// A declaration's body starts with a call of the name being declared,
    /// which is guaranteed infinite recursion.
    SelfReference {
        /// The name of the function.
        name: String,
    },
    /// A `map` operand is not a bare function-name reference.
    MapOperandNotAName,
    /// Neither `map` operand resolved to a list-valued definition.
    MapListNotFound,
    /// Active call frames exceeded the interpreter's depth limit.
    RecursionLimit,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownFunction { name } => {
                write!(f, "Runtime Error: No matching function definition found: '{name}'")
            },
            Self::MissingArgument { index } => {
                write!(f, "Runtime Error: Too few arguments in function call (missing #{index})")
            },
            Self::DivisionByZero => write!(f, "Runtime Error: Division by 0"),
            Self::ExpectedNumber { context } => {
                write!(f, "Runtime Error: Expected a number in {context}")
            },
            Self::ExpectedList { context } => {
                write!(f, "Runtime Error: Expected a list in {context}")
            },
            Self::FunctionAlreadyDefined { name } => write!(f,
                                                            "Runtime Error: A function with the name '{name}' already exists"),
            Self::SelfReference { name } => write!(f,
                                                   "Runtime Error: Function '{name}' will cause stack overflow and hence will not be created"),
            Self::MapOperandNotAName => {
                write!(f, "Runtime Error: Function could not be deduced from map operand")
            },
            Self::MapListNotFound => {
                write!(f, "Runtime Error: No list-valued function found for map")
            },
            Self::RecursionLimit => write!(f, "Runtime Error: Recursion limit exceeded"),
        }
    }
}

impl std::error::Error for RuntimeError {}
