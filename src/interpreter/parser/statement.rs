use crate::{
    ast::Statement,
    interpreter::{
        cursor::Cursor,
        parser::{
            core::ParseResult,
            expression::scan_expression,
            utils::{expect, scan},
        },
        token::{Token, TokenKind},
    },
};

/// Parses a single statement.
///
/// A statement is an expression, optionally followed by `որպես <name>`,
/// which turns it into a definition of `name`.
///
/// Grammar: `statement := expression ("որպես" identifier)?`
///
/// # Errors
/// Propagates expression errors, and reports a missing identifier after
/// `որպես`.
pub fn parse_statement(tokens: &mut Cursor<'_, Token>) -> ParseResult<Statement> {
    let expr = scan_expression(tokens)?;

    if scan(tokens, TokenKind::As).is_none() {
        return Ok(Statement::Expression(expr));
    }

    let name = expect(tokens, TokenKind::Identifier, "a name after 'որպես'")?;
    Ok(Statement::Definition { expr,
                               name: name.text.clone(),
                               position: name.position })
}
