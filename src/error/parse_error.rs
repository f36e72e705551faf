use crate::interpreter::token::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token stream.
pub enum ParseError {
    /// Found a token where a different construct was required.
    UnexpectedToken {
        /// Text (or kind, for tokens without text) of the token encountered.
        found:    String,
        /// Description of what the grammar required at this point.
        expected: &'static str,
        /// Position of the token encountered.
        position: Position,
    },
    /// The tokens ran out in the middle of a construct.
    UnexpectedEndOfInput {
        /// Description of what the grammar required at this point.
        expected: &'static str,
        /// Position of the last token read.
        position: Position,
    },
    /// A function body was opened but its closing quote mark never came.
    UnterminatedBlock {
        /// Position of the function keyword that opened the body.
        position: Position,
    },
}

impl ParseError {
    /// Source position the error refers to.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position, .. }
            | Self::UnterminatedBlock { position } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { found,
                                    expected,
                                    position, } => {
                write!(f, "Error on {position}: Expected {expected}, found {found}.")
            },
            Self::UnexpectedEndOfInput { expected, position } => {
                write!(f, "Error on {position}: Unexpected end of input, expected {expected}.")
            },
            Self::UnterminatedBlock { position } => write!(f,
                                                           "Error on {position}: Function body is never closed with '»'."),
        }
    }
}

impl std::error::Error for ParseError {}
