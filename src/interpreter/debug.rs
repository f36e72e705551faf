//! Human-readable dumps of the pipeline's intermediate results.
//!
//! Used when [`crate::Config::debug`] is set. The dumps go to the same writer
//! as program output, before execution starts.

use std::io::{self, Write};

use crate::{
    ast::{Expr, Statement},
    interpreter::token::Token,
};

const INDENT: &str = "  ";

/// Writes one line per token: kind, text and position.
///
/// # Examples
/// ```
/// use ban::interpreter::{debug::dump_tokens, lexer::tokenize};
///
/// let tokens = tokenize("5ն տպիր").unwrap();
/// let mut out = Vec::new();
/// dump_tokens(&mut out, &tokens).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(),
///            "Number \"5\" 1:1\nCaseEnding \"\" 1:2\nIdentifier \"տպիր\" 1:4\n");
/// ```
pub fn dump_tokens(out: &mut impl Write, tokens: &[Token]) -> io::Result<()> {
    for token in tokens {
        writeln!(out,
                 "{} {:?} {}:{}",
                 token.kind, token.text, token.position.line, token.position.column)?;
    }
    Ok(())
}

/// Writes the statements of a block, one per line, with function bodies
/// indented under their definition.
pub fn dump_statements(out: &mut impl Write, statements: &[Statement]) -> io::Result<()> {
    dump_block(out, statements, 0)
}

fn dump_block(out: &mut impl Write, statements: &[Statement], depth: usize) -> io::Result<()> {
    for statement in statements {
        let indent = INDENT.repeat(depth);
        match statement {
            Statement::Definition { expr, name, .. } => {
                write!(out, "{indent}Definition {name} = ")?;
                dump_expr(out, expr, depth)?;
            },
            Statement::Expression(expr) => {
                write!(out, "{indent}Expression ")?;
                dump_expr(out, expr, depth)?;
            },
        }
    }
    Ok(())
}

fn dump_expr(out: &mut impl Write, expr: &Expr, depth: usize) -> io::Result<()> {
    match expr {
        Expr::Value(token) => writeln!(out, "Value({} {:?})", token.kind, token.text),
        Expr::Call { callee, args, .. } => {
            let args = args.iter().map(|arg| format!("{:?}", arg.text)).collect::<Vec<_>>();
            writeln!(out, "Call {callee}({})", args.join(", "))
        },
        Expr::Function { params, body } => {
            writeln!(out, "Function({})", params.join(", "))?;
            dump_block(out, body, depth + 1)
        },
    }
}
