use crate::interpreter::token::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing source text.
pub enum LexError {
    /// A character that starts no token: anything outside the alphabet,
    /// digits, delimiters, spaces and newlines.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Where the character appears.
        position:  Position,
    },
    /// A comment was opened but never closed.
    UnterminatedComment {
        /// Position of the opening delimiter.
        position: Position,
    },
    /// A quoted text literal was opened but never closed.
    UnterminatedQuote {
        /// Position of the opening quote mark.
        position: Position,
    },
}

impl LexError {
    /// Source position the error refers to.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::UnexpectedCharacter { position, .. }
            | Self::UnterminatedComment { position }
            | Self::UnterminatedQuote { position } => *position,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { character, position } => {
                write!(f, "Error on {position}: Unexpected character {character:?}.")
            },
            Self::UnterminatedComment { position } => {
                write!(f, "Error on {position}: Comment is never closed.")
            },
            Self::UnterminatedQuote { position } => {
                write!(f, "Error on {position}: Quoted text is never closed.")
            },
        }
    }
}

impl std::error::Error for LexError {}
