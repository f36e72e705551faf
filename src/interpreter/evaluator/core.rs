use std::io::Write;

use tracing::{trace, warn};

use crate::{
    ast::{Block, Expr, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::environment::{Environment, Function},
        token::{Token, TokenKind},
        value::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Executes parsed programs.
///
/// The interpreter owns the writer that native functions print to; all name
/// bindings live in the [`Environment`] chain passed to [`Self::execute`].
///
/// # Examples
/// ```
/// use ban::interpreter::{
///     evaluator::{Environment, Interpreter},
///     lexer::tokenize,
///     parser::parse,
/// };
///
/// let tokens = tokenize("«բարև» որպես բառ\nբառը տպիր").unwrap();
/// let program = parse(&tokens).unwrap();
///
/// let mut environment = Environment::new();
/// let mut interpreter = Interpreter::new(Vec::new());
/// interpreter.execute(&mut environment, &program).unwrap();
///
/// assert_eq!(interpreter.into_output(), "բարև\n".as_bytes());
/// ```
#[derive(Debug)]
pub struct Interpreter<W: Write> {
    pub(in crate::interpreter::evaluator) out: W,
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter that prints to `out`.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Gives back the output writer.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Executes the statements of `block` in order against `env`.
    ///
    /// # Errors
    /// Stops at the first [`RuntimeError`]; statements before it have taken
    /// effect, statements after it have not.
    pub fn execute<'a>(&mut self, env: &mut Environment<'a>, block: &'a Block) -> EvalResult<()> {
        for statement in block {
            self.execute_statement(env, statement)?;
        }
        Ok(())
    }

    /// Executes a single statement.
    ///
    /// Definitions bind into the innermost environment. Expression statements
    /// only have an effect when they are calls.
    fn execute_statement<'a>(&mut self,
                             env: &mut Environment<'a>,
                             statement: &'a Statement)
                             -> EvalResult<()> {
        match statement {
            Statement::Definition { expr: Expr::Value(token),
                                    name,
                                    .. } => {
                let value = resolve(env, token)?;
                trace!(%name, %value, depth = env.depth(), "defining variable");
                env.define_variable(name, value);
            },
            Statement::Definition { expr: Expr::Function { params, body },
                                    name,
                                    .. } => {
                trace!(%name, params = params.len(), depth = env.depth(), "defining function");
                env.define_function(name, Function { params, body });
            },
            Statement::Definition { expr: Expr::Call { callee, .. },
                                    name,
                                    position, } => {
                warn!(%name, %callee, %position, "calls produce no value; definition ignored");
            },
            Statement::Expression(Expr::Call { callee,
                                               position,
                                               args, }) => {
                self.call(env, callee, *position, args)?;
            },
            Statement::Expression(Expr::Value(_) | Expr::Function { .. }) => {},
        }
        Ok(())
    }
}

/// Resolves a value token in `env`.
///
/// Identifiers are looked up through the environment chain; literals convert
/// directly.
///
/// # Errors
/// `UndefinedName` if an identifier has no variable binding anywhere in the
/// chain.
pub fn resolve(env: &Environment<'_>, token: &Token) -> EvalResult<Value> {
    if token.kind == TokenKind::Identifier {
        return env.variable(&token.text)
                  .cloned()
                  .ok_or_else(|| RuntimeError::UndefinedName { name:     token.text.clone(),
                                                               position: token.position, });
    }

    Value::from_literal(token).ok_or_else(|| RuntimeError::UndefinedName { name:     token.text.clone(),
                                                                           position: token.position, })
}
