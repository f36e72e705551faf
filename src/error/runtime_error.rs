use crate::interpreter::token::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// An identifier has no variable binding anywhere in the scope chain.
    UndefinedName {
        /// The name that was looked up.
        name:     String,
        /// Where the identifier appears.
        position: Position,
    },
    /// A user function was called with a different number of arguments than
    /// it declares parameters.
    ArityMismatch {
        /// The name of the function.
        name:     String,
        /// Number of declared parameters.
        expected: usize,
        /// Number of arguments supplied.
        found:    usize,
        /// Where the call appears.
        position: Position,
    },
    /// The callee is neither a user function nor a native one.
    UnknownFunction {
        /// The name of the function.
        name:     String,
        /// Where the call appears.
        position: Position,
    },
    /// A native function could not write to the program output.
    Output {
        /// Description of the underlying I/O failure.
        details:  String,
        /// Where the call appears.
        position: Position,
    },
}

impl RuntimeError {
    /// Source position the error refers to.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UndefinedName { position, .. }
            | Self::ArityMismatch { position, .. }
            | Self::UnknownFunction { position, .. }
            | Self::Output { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedName { name, position } => {
                write!(f, "Error on {position}: Undefined name '{name}'.")
            },
            Self::ArityMismatch { name,
                                  expected,
                                  found,
                                  position, } => write!(f,
                                                        "Error on {position}: Function '{name}' expects {expected} argument(s), but {found} were given."),
            Self::UnknownFunction { name, position } => {
                write!(f, "Error on {position}: Unknown function '{name}'.")
            },
            Self::Output { details, position } => {
                write!(f, "Error on {position}: Failed to write output: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
