//! # ban
//!
//! ban is an interpreter for a small scripting language whose keywords are
//! Armenian words. Instead of symbolic call syntax, the language marks the
//! object of a call with a trailing case letter (`ն` or `ը`), so
//! `սովածը տպիր` and `տպիր սովածը` both print the value bound to `սոված`.
//!
//! Source text runs through three stages: lexing, parsing and tree-walking
//! evaluation. Nothing is compiled or persisted.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, Write};

use tracing::debug;

use crate::interpreter::{
    debug::{dump_statements, dump_tokens},
    evaluator::{Environment, Interpreter},
    lexer::tokenize,
    parser::parse,
};

pub use crate::{config::Config, error::Error};

/// Defines the structure of parsed code.
///
/// The parser produces a [`ast::Block`] of [`ast::Statement`]s; each statement
/// wraps one [`ast::Expr`]. Nodes are immutable once built and are borrowed by
/// the evaluator for the whole run.
pub mod ast;
/// Run-time configuration handed to the pipeline by the entry point.
pub mod config;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// Every error is fatal and carries the source position of the offending
/// character or token so that the entry point can print a one-line
/// diagnostic.
pub mod error;
/// Orchestrates lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Turns source text into typed tokens.
/// - Disambiguates values, calls and function literals into statements.
/// - Executes statements against a chain of environments.
pub mod interpreter;

/// Runs a program and writes its output to standard output.
///
/// # Errors
/// Returns the first lexing, parsing, or runtime error encountered.
///
/// # Examples
/// ```
/// use ban::{run, Config};
///
/// let source = "ճշմարիտ որպես սոված\nտպիր սովածը";
/// assert!(run(source, &Config::default()).is_ok());
///
/// // `անհայտ` is neither a user function nor a native one.
/// assert!(run("անհայտ 5", &Config::default()).is_err());
/// ```
pub fn run(source: &str, config: &Config) -> Result<(), Error> {
    let stdout = io::stdout();
    run_with_output(source, config, stdout.lock())?;
    Ok(())
}

/// Runs a program and writes everything it prints into `out`.
///
/// When `config.debug` is set, the token stream and the statement list are
/// written to `out` before execution starts.
///
/// The writer is handed back so that callers can inspect captured output.
///
/// # Errors
/// Returns the first lexing, parsing, or runtime error encountered. Nothing
/// is executed if lexing or parsing fails.
///
/// # Examples
/// ```
/// use ban::{run_with_output, Config};
///
/// let source = "5 որպես թիվ\nճշմարիտ որպես դրոշ\nտպիր թիվ և դրոշ";
/// let out = run_with_output(source, &Config::default(), Vec::new()).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "5, ճշմարիտ\n");
/// ```
pub fn run_with_output<W: Write>(source: &str, config: &Config, mut out: W) -> Result<W, Error> {
    let tokens = tokenize(source)?;
    debug!(count = tokens.len(), "tokenized source");
    if config.debug {
        dump_tokens(&mut out, &tokens)?;
    }

    let program = parse(&tokens)?;
    debug!(statements = program.len(), "parsed program");
    if config.debug {
        dump_statements(&mut out, &program)?;
    }

    let mut environment = Environment::new();
    let mut interpreter = Interpreter::new(out);
    interpreter.execute(&mut environment, &program)?;

    Ok(interpreter.into_output())
}
