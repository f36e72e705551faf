use crate::interpreter::token::{Position, Token};

/// An ordered sequence of statements: the whole program or a function body.
pub type Block = Vec<Statement>;

/// An expression node.
///
/// Values, calls and function literals all start with a value token in the
/// source; the parser settles which one it is by lookahead and by the case
/// marker on the first value.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A single value token: identifier, number, boolean or quoted text.
    Value(Token),
    /// A function literal: `ա և բ չափոցով գործառույթ « ... »`.
    Function {
        /// Parameter names in binding order: the leading name comes last.
        params: Vec<String>,
        /// The statements of the body.
        body:   Block,
    },
    /// A call of a user or native function.
    Call {
        /// Name of the function being called.
        callee:   String,
        /// Where the callee name appears.
        position: Position,
        /// Argument tokens, resolved in the caller's environment at call time.
        args:     Vec<Token>,
    },
}

/// A statement node.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `<expr> որպես <name>`: binds a value or function to a name.
    Definition {
        /// The bound expression.
        expr:     Expr,
        /// The name being defined.
        name:     String,
        /// Where the name appears.
        position: Position,
    },
    /// An expression evaluated for its effect. Only calls have one.
    Expression(Expr),
}
