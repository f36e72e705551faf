use std::fmt;

use crate::interpreter::{
    keywords::{FALSE, TRUE},
    token::{Token, TokenKind},
};

/// Represents a runtime value in the interpreter.
///
/// Numbers are always floating point; there is no integer type.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `ճշմարիտ` or `կեղծ`.
    Bool(bool),
    /// A number parsed from a run of decimal digits.
    Number(f64),
    /// Quoted text.
    Text(String),
}

impl Value {
    /// Converts a literal token into its value.
    ///
    /// Returns `None` for identifiers, which need an environment, and for
    /// tokens that are not values at all.
    ///
    /// # Examples
    /// ```
    /// use ban::interpreter::{
    ///     token::{Position, Token, TokenKind},
    ///     value::Value,
    /// };
    ///
    /// let token = Token::new(TokenKind::Number, "007", Position::default());
    /// assert_eq!(Value::from_literal(&token), Some(Value::Number(7.0)));
    ///
    /// let token = Token::new(TokenKind::Identifier, "ա", Position::default());
    /// assert_eq!(Value::from_literal(&token), None);
    /// ```
    #[must_use]
    pub fn from_literal(token: &Token) -> Option<Self> {
        match token.kind {
            TokenKind::True => Some(Self::Bool(true)),
            TokenKind::False => Some(Self::Bool(false)),
            TokenKind::Number => token.text.parse().ok().map(Self::Number),
            TokenKind::Quote => Some(Self::Text(token.text.clone())),
            _ => None,
        }
    }
}

/// Booleans render as the language's own literal words, numbers in their
/// shortest decimal form, and text verbatim.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(true) => f.write_str(TRUE),
            Self::Bool(false) => f.write_str(FALSE),
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}
