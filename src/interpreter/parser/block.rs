use crate::{
    ast::Block,
    error::ParseError,
    interpreter::{
        cursor::Cursor,
        parser::{core::ParseResult, statement::parse_statement, utils::mismatch},
        token::{Position, Token, TokenKind},
    },
};

/// Parses the top-level program.
///
/// The program ends only at the end of the token sequence. A `»` here has no
/// body to close and is rejected rather than silently ending the program.
///
/// Grammar: `program := statement*`
pub fn parse_program(tokens: &mut Cursor<'_, Token>) -> ParseResult<Block> {
    let mut statements = Vec::new();

    while let Some(token) = tokens.peek() {
        if token.kind == TokenKind::EndFunction {
            return Err(mismatch(tokens, "a statement"));
        }
        statements.push(parse_statement(tokens)?);
    }

    Ok(statements)
}

/// Parses a function body.
///
/// The body's opening `«` is consumed by the lexer, so parsing starts at the
/// first statement. The closing `»` is consumed and is not part of the block.
///
/// Grammar: `body := statement* "»"`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the function keyword.
/// - `opened_at`: Position of the function keyword, for error reporting.
///
/// # Errors
/// `UnterminatedBlock` if the tokens run out before the closing `»`.
pub fn parse_block(tokens: &mut Cursor<'_, Token>, opened_at: Position) -> ParseResult<Block> {
    let mut statements = Vec::new();

    loop {
        match tokens.peek() {
            None => return Err(ParseError::UnterminatedBlock { position: opened_at }),
            Some(token) if token.kind == TokenKind::EndFunction => {
                tokens.advance();
                return Ok(statements);
            },
            Some(_) => statements.push(parse_statement(tokens)?),
        }
    }
}
