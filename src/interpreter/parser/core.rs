use crate::{
    ast::Block,
    error::ParseError,
    interpreter::{cursor::Cursor, parser::block::parse_program, token::Token},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token sequence into the program block.
///
/// This is the entry point for parsing. The program runs to the end of the
/// token sequence; function bodies inside it must each be closed by `»`.
///
/// # Errors
/// Returns the first [`ParseError`]; there is no recovery and no partial
/// program.
///
/// # Examples
/// ```
/// use ban::{
///     ast::{Expr, Statement},
///     interpreter::{lexer::tokenize, parser::parse},
/// };
///
/// let tokens = tokenize("5ն տպիր").unwrap();
/// let program = parse(&tokens).unwrap();
///
/// match &program[..] {
///     [Statement::Expression(Expr::Call { callee, args, .. })] => {
///         assert_eq!(callee, "տպիր");
///         assert_eq!(args[0].text, "5");
///     },
///     other => panic!("unexpected program {other:?}"),
/// }
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Block> {
    let mut cursor = Cursor::new(tokens);
    parse_program(&mut cursor)
}
