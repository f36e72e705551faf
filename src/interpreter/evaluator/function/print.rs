use std::io::{self, Write};

use crate::interpreter::value::Value;

/// Separator placed between printed arguments.
pub const ARGUMENT_SEPARATOR: &str = ", ";

/// Writes every argument on one line, separated by `", "`.
///
/// Booleans are written as the language's literal words, numbers as their
/// decimal value and text verbatim.
///
/// # Examples
/// ```
/// use ban::interpreter::{evaluator::function::print::print, value::Value};
///
/// let mut out = Vec::new();
/// print(&[Value::Number(5.0), Value::Bool(true)], &mut out).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "5, ճշմարիտ\n");
/// ```
pub fn print(args: &[Value], out: &mut dyn Write) -> io::Result<()> {
    let line = args.iter().map(ToString::to_string).collect::<Vec<_>>().join(ARGUMENT_SEPARATOR);
    writeln!(out, "{line}")
}
