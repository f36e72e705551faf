/// Lexing errors.
///
/// Raised while turning source characters into tokens: characters outside the
/// language's alphabet and comments or quotes that never close.
pub mod lex_error;
/// Parsing errors.
///
/// Raised when the token stream does not fit the grammar, for example a
/// parameter list without the function keyword or a definition without a name.
pub mod parse_error;
/// Runtime errors.
///
/// Raised during evaluation: unbound names, unknown functions, arity
/// mismatches and failures to write program output.
pub mod runtime_error;

use std::fmt;

use crate::interpreter::token::Position;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure of a complete run, tagged with the stage that produced it.
#[derive(Debug)]
pub enum Error {
    /// The source could not be tokenized.
    Lex(LexError),
    /// The tokens could not be parsed.
    Parse(ParseError),
    /// Execution stopped on an error.
    Runtime(RuntimeError),
    /// Writing the debug dump failed.
    Output(std::io::Error),
}

impl Error {
    /// Source position of the failure. Output failures have none.
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        match self {
            Self::Lex(e) => Some(e.position()),
            Self::Parse(e) => Some(e.position()),
            Self::Runtime(e) => Some(e.position()),
            Self::Output(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "Lexing failed. {e}"),
            Self::Parse(e) => write!(f, "Parsing failed. {e}"),
            Self::Runtime(e) => write!(f, "Execution failed. {e}"),
            Self::Output(e) => write!(f, "Could not write output: {e}."),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
            Self::Output(e) => Some(e),
        }
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Output(e)
    }
}
