use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        cursor::Cursor,
        parser::{
            block::parse_block,
            core::ParseResult,
            utils::{expect, mismatch, scan},
        },
        token::{Token, TokenKind},
    },
};

/// A value token together with whether a case marker followed it.
#[derive(Debug, Clone, Copy)]
struct FullValue<'t> {
    token:  &'t Token,
    marked: bool,
}

/// Consumes a value token and the case marker after it, if any.
fn scan_full_value<'t>(tokens: &mut Cursor<'t, Token>) -> Option<FullValue<'t>> {
    let token = tokens.next_if(|token| token.kind.is_value())?;
    let marked = scan(tokens, TokenKind::CaseEnding).is_some();

    Some(FullValue { token, marked })
}

/// Like [`scan_full_value`], but a missing value is an error.
fn expect_full_value<'t>(tokens: &mut Cursor<'t, Token>,
                         expected: &'static str)
                         -> ParseResult<FullValue<'t>> {
    scan_full_value(tokens).ok_or_else(|| mismatch(tokens, expected))
}

/// Consumes `և <value>` pairs for as long as they continue, appending each
/// value to `values`.
fn scan_separated(tokens: &mut Cursor<'_, Token>, values: &mut Vec<Token>) -> ParseResult<()> {
    while scan(tokens, TokenKind::Separator).is_some() {
        let value = expect_full_value(tokens, "a value after 'և'")?;
        values.push(value.token.clone());
    }
    Ok(())
}

/// Parses one expression.
///
/// Every expression opens with a value, optionally followed by more values
/// joined with `և`. What the expression is depends on the first value:
///
/// - With a case marker (`սովածը տպիր`), the value is the object of the call
///   named by the identifier that follows. The joined values come first in
///   the argument list and the marked value last. Without a following
///   identifier the expression is the bare value.
/// - Without a marker and followed by `չափոցով`, the values are parameter
///   names of a function literal: `չափոցով գործառույթ « body »`.
/// - Without a marker and followed by another value (`տպիր սոված`), the
///   first value names the callee and the rest are its arguments.
/// - Otherwise the expression is the bare first value.
///
/// Grammar (simplified):
/// ```text
/// expression := full_value ("և" full_value)* tail
/// tail       := identifier                                  (marked)
///             | "չափոցով" "գործառույթ" body                  (unmarked)
///             | full_value ("և" full_value)*                 (unmarked)
///             | ε
/// ```
///
/// # Errors
/// - A missing value at the start of the expression or after `և`.
/// - A missing function keyword after `չափոցով`.
/// - A parameter that is not an identifier.
/// - Errors from the function body.
pub fn scan_expression(tokens: &mut Cursor<'_, Token>) -> ParseResult<Expr> {
    let first = expect_full_value(tokens, "a value")?;

    let mut values = Vec::new();
    scan_separated(tokens, &mut values)?;

    if first.marked {
        if let Some(callee) = scan(tokens, TokenKind::Identifier) {
            values.push(first.token.clone());
            return Ok(Expr::Call { callee:   callee.text.clone(),
                                   position: callee.position,
                                   args:     values, });
        }
        return Ok(Expr::Value(first.token.clone()));
    }

    if scan(tokens, TokenKind::Parameter).is_some() {
        let keyword = expect(tokens, TokenKind::Function, "'գործառույթ' after 'չափոցով'")?;
        let params = parameter_names(first.token, &values)?;
        let body = parse_block(tokens, keyword.position)?;
        return Ok(Expr::Function { params, body });
    }

    if let Some(next) = scan_full_value(tokens) {
        values.push(next.token.clone());
        scan_separated(tokens, &mut values)?;
        return Ok(Expr::Call { callee:   first.token.text.clone(),
                               position: first.token.position,
                               args:     values, });
    }

    Ok(Expr::Value(first.token.clone()))
}

/// Collects parameter names. The leading value takes the last slot, the
/// same way a marked value becomes the last argument of a call. Only
/// identifiers can name parameters.
fn parameter_names(first: &Token, rest: &[Token]) -> ParseResult<Vec<String>> {
    rest.iter()
        .chain(std::iter::once(first))
        .map(|token| match token.kind {
            TokenKind::Identifier => Ok(token.text.clone()),
            _ => Err(ParseError::UnexpectedToken { found:    token.describe(),
                                                   expected: "a parameter name",
                                                   position: token.position, }),
        })
        .collect()
}
