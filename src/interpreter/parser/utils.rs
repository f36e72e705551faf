use crate::{
    error::ParseError,
    interpreter::{
        cursor::Cursor,
        parser::core::ParseResult,
        token::{Position, Token, TokenKind},
    },
};

/// Consumes the next token if it has the given kind.
pub(in crate::interpreter::parser) fn scan<'t>(tokens: &mut Cursor<'t, Token>,
                                               kind: TokenKind)
                                               -> Option<&'t Token> {
    tokens.next_if(|token| token.kind == kind)
}

/// Consumes the next token, which must have the given kind.
///
/// # Errors
/// `UnexpectedToken` naming `expected` if another token follows, or
/// `UnexpectedEndOfInput` if none does.
pub(in crate::interpreter::parser) fn expect<'t>(tokens: &mut Cursor<'t, Token>,
                                                 kind: TokenKind,
                                                 expected: &'static str)
                                                 -> ParseResult<&'t Token> {
    if let Some(token) = scan(tokens, kind) {
        return Ok(token);
    }
    Err(mismatch(tokens, expected))
}

/// Builds the error for a missing construct at the cursor.
pub(in crate::interpreter::parser) fn mismatch(tokens: &Cursor<'_, Token>,
                                               expected: &'static str)
                                               -> ParseError {
    match tokens.peek() {
        Some(token) => ParseError::UnexpectedToken { found: token.describe(),
                                                     expected,
                                                     position: token.position },
        None => ParseError::UnexpectedEndOfInput { expected,
                                                   position: last_position(tokens) },
    }
}

/// Position of the last consumed token, for errors at the end of input.
pub(in crate::interpreter::parser) fn last_position(tokens: &Cursor<'_, Token>) -> Position {
    tokens.previous().map_or_else(Position::default, |token| token.position)
}
