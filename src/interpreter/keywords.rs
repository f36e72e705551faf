//! Vocabulary of the language.
//!
//! Words are matched case-sensitively and only as whole letter runs.

use crate::interpreter::token::TokenKind;

/// Opens quoted text, and opens a function body after [`FUNCTION`].
pub const QUOTE_OPEN: char = '«';
/// Closes quoted text and function bodies.
pub const QUOTE_CLOSE: char = '»';
/// Starts a comment.
pub const COMMENT_START: char = '(';
/// Ends a comment. Comments do not nest.
pub const COMMENT_END: char = ')';

/// The true literal.
pub const TRUE: &str = "ճշմարիտ";
/// The false literal.
pub const FALSE: &str = "կեղծ";
/// Introduces the name a definition binds.
pub const AS: &str = "որպես";
/// Introduces a function body.
pub const FUNCTION: &str = "գործառույթ";
/// Ends a parameter list.
pub const PARAMETER: &str = "չափոցով";
/// Joins values into an argument or parameter list.
pub const SEPARATOR: &str = "և";

/// Letters that mark the preceding value as the object of a call when they
/// end a letter run.
pub const CASE_MARKERS: [char; 2] = ['ն', 'ը'];

/// Name of the native print function.
pub const PRINT: &str = "տպիր";

/// Looks a stripped letter run up in the keyword table.
///
/// # Examples
/// ```
/// use ban::interpreter::{keywords::keyword_kind, token::TokenKind};
///
/// assert_eq!(keyword_kind("որպես"), TokenKind::As);
/// assert_eq!(keyword_kind("բարև"), TokenKind::Identifier);
/// ```
#[must_use]
pub fn keyword_kind(word: &str) -> TokenKind {
    match word {
        TRUE => TokenKind::True,
        FALSE => TokenKind::False,
        AS => TokenKind::As,
        FUNCTION => TokenKind::Function,
        PARAMETER => TokenKind::Parameter,
        SEPARATOR => TokenKind::Separator,
        _ => TokenKind::Identifier,
    }
}

/// Splits a trailing case marker off a letter run.
///
/// Returns the remaining text and whether a marker was removed. The marker
/// is removed at most once. A run made of a single marker letter leaves
/// empty text: it marks whatever value precedes it, such as a number or
/// quoted text.
///
/// # Examples
/// ```
/// use ban::interpreter::keywords::strip_case_marker;
///
/// assert_eq!(strip_case_marker("սովածը"), ("սոված", true));
/// assert_eq!(strip_case_marker("թիվն"), ("թիվ", true));
/// assert_eq!(strip_case_marker("բարև"), ("բարև", false));
/// assert_eq!(strip_case_marker("ն"), ("", true));
/// ```
#[must_use]
pub fn strip_case_marker(word: &str) -> (&str, bool) {
    match word.char_indices().last() {
        Some((index, last)) if CASE_MARKERS.contains(&last) => (&word[..index], true),
        _ => (word, false),
    }
}
