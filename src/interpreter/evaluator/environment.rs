use std::collections::HashMap;

use crate::{ast::Block, interpreter::value::Value};

/// A user-defined function, borrowed from the parsed program.
#[derive(Debug, Clone, Copy)]
pub struct Function<'a> {
    /// Parameter names, bound positionally at call time.
    pub params: &'a [String],
    /// The statements executed on each call.
    pub body:   &'a Block,
}

/// A scope record mapping names to values and functions.
///
/// Environments form a chain through `outer`. Lookups walk the chain upward
/// from the innermost environment; definitions always go into the innermost
/// one, so a binding made during a call shadows an outer binding of the same
/// name without touching it, and disappears when the call's environment is
/// dropped.
///
/// The `outer` link is a shared borrow: an inner environment can never
/// outlive the one it encloses.
///
/// # Examples
/// ```
/// use ban::interpreter::{evaluator::Environment, value::Value};
///
/// let mut global = Environment::new();
/// global.define_variable("ա", Value::Number(1.0));
///
/// let mut call = Environment::enclosed(&global);
/// assert_eq!(call.variable("ա"), Some(&Value::Number(1.0)));
///
/// call.define_variable("ա", Value::Number(2.0));
/// assert_eq!(call.variable("ա"), Some(&Value::Number(2.0)));
/// assert_eq!(global.variable("ա"), Some(&Value::Number(1.0)));
/// ```
#[derive(Debug, Default)]
pub struct Environment<'a> {
    variables: HashMap<String, Value>,
    functions: HashMap<String, Function<'a>>,
    outer:     Option<&'a Environment<'a>>,
}

impl<'a> Environment<'a> {
    /// Creates a top-level environment with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty environment enclosed by `outer`.
    #[must_use]
    pub fn enclosed(outer: &'a Environment<'a>) -> Self {
        Self { outer: Some(outer),
               ..Self::default() }
    }

    /// Binds a variable in this environment.
    pub fn define_variable(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_owned(), value);
    }

    /// Binds a function in this environment.
    pub fn define_function(&mut self, name: &str, function: Function<'a>) {
        self.functions.insert(name.to_owned(), function);
    }

    /// Looks a variable up, innermost environment first.
    #[must_use]
    pub fn variable(&self, name: &str) -> Option<&Value> {
        self.chain().find_map(|env| env.variables.get(name))
    }

    /// Looks a function up, innermost environment first.
    #[must_use]
    pub fn function(&self, name: &str) -> Option<Function<'a>> {
        self.chain().find_map(|env| env.functions.get(name).copied())
    }

    /// Number of environments in the chain, this one included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.chain().count()
    }

    /// Iterates from this environment out to the top level.
    fn chain(&self) -> impl Iterator<Item = &Self> {
        std::iter::successors(Some(self), |env| env.outer)
    }
}
