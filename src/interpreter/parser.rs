/// Parser entry point and result type.
pub mod core;

/// Block parsing.
///
/// Collects statements until end of input (the program) or until the closing
/// quote mark of a function body.
pub mod block;

/// Statement parsing: definitions and expression statements.
pub mod statement;

/// Expression parsing and the value / call / function disambiguation.
pub mod expression;

/// Token-matching helpers shared by the parsing routines.
pub mod utils;

pub use self::core::{ParseResult, parse};
