#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
///
/// A tree produced by the parser never triggers these: the parser resolves
/// every name against the symbol tables and fixes every call's argument
/// count. They define behavior for hand-built trees, or for trees evaluated
/// against symbol tables other than the ones they were parsed with.
/// Arithmetic never fails; division by zero and friends follow IEEE 754.
pub enum EvalError {
    /// Referenced a variable the environment does not bind.
    UnknownVariable {
        /// The name of the variable.
        name:     String,
        /// The source column where the error occurred.
        position: usize,
    },
    /// Referenced a constant missing from the symbol tables.
    UnknownConstant {
        /// The name of the constant.
        name:     String,
        /// The source column where the error occurred.
        position: usize,
    },
    /// Called a function missing from the symbol tables.
    UnknownFunction {
        /// The name of the function.
        name:     String,
        /// The source column where the error occurred.
        position: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// The function's registered arity.
        expected: usize,
        /// The number of arguments found in the tree.
        found:    usize,
        /// The source column where the error occurred.
        position: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, position } => {
                write!(f, "Error at column {position}: Unknown variable '{name}'.")
            },
            Self::UnknownConstant { name, position } => {
                write!(f, "Error at column {position}: Unknown constant '{name}'.")
            },
            Self::UnknownFunction { name, position } => {
                write!(f, "Error at column {position}: Unknown function '{name}'.")
            },
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          position, } => write!(f,
                                                                "Error at column {position}: Function '{name}' takes {expected} argument(s), found {found}."),
        }
    }
}

impl std::error::Error for EvalError {}
