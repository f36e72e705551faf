/// Forward-only reader over a slice with one-item lookahead.
///
/// The parser walks the token sequence through a [`cursor::Cursor`]; the
/// lexer gets the same service from `logos` over characters.
pub mod cursor;
/// Renders tokens and statements for the debug dump.
pub mod debug;
/// The evaluator module executes parsed statements.
///
/// # Responsibilities
/// - Binds values and functions in the innermost environment.
/// - Resolves names upward through the environment chain.
/// - Dispatches calls to user functions or to the native table.
pub mod evaluator;
pub mod keywords;
/// The lexer module tokenizes source code for further parsing.
///
/// # Responsibilities
/// - Skips whitespace and comments.
/// - Produces quoted text, number, identifier and keyword tokens with their
///   source positions.
/// - Splits a trailing case marker off an identifier into its own token.
pub mod lexer;
/// The parser module builds statements from tokens.
///
/// # Responsibilities
/// - Disambiguates bare values, calls and function literals, which all start
///   the same way, using one token of lookahead and the case marker.
/// - Collects definitions and expression statements into blocks.
pub mod parser;
/// Tokens and source positions shared by every stage.
pub mod token;
/// The value module defines the runtime data types for evaluation.
pub mod value;
