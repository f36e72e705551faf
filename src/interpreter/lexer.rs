use logos::{FilterResult, Logos};
use tracing::trace;

use crate::{
    error::LexError,
    interpreter::{
        keywords::{COMMENT_END, FUNCTION, QUOTE_CLOSE, keyword_kind, strip_case_marker},
        token::{LineIndex, Position, Token, TokenKind},
    },
};

/// A raw lexical unit as recognized by `logos`.
///
/// Lexemes are one step short of [`Token`]s: a letter run still carries its
/// case marker as a flag, and nothing has a source position yet. [`tokenize`]
/// turns them into tokens.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras, error = LexFault)]
pub enum Lexeme {
    /// Spaces and newlines. No other whitespace is recognized.
    #[regex(r"[ \n]+", logos::skip)]
    Whitespace,
    /// `( comment )`
    #[token("(", skip_comment)]
    Comment,
    /// `«quoted text»`, or the opening of a function body.
    #[token("«", open_quote)]
    Quote(String),
    /// `»` outside quoted text.
    #[token("»")]
    EndBlock,
    /// A maximal run of Armenian letters.
    #[regex("[Ա-Ֆա-և]+", scan_word)]
    Word(Word),
    /// A maximal run of decimal digits.
    #[regex("[0-9]+", |lex| lex.slice().to_owned())]
    Number(String),
}

/// A classified letter run.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Word {
    /// Keyword kind, or [`TokenKind::Identifier`].
    pub kind:   TokenKind,
    /// The run with its case marker removed. Empty when the run was a lone
    /// marker.
    pub text:   String,
    /// Whether a case marker was removed.
    pub marked: bool,
}

/// State carried by the lexer between lexemes.
#[derive(Debug, Default)]
pub struct LexerExtras {
    /// Set by the function keyword; the next `«` opens the function body
    /// instead of quoted text.
    pub awaiting_body: bool,
}

/// Why `logos` failed to produce a lexeme. Positions are attached by
/// [`tokenize`].
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum LexFault {
    /// No rule matches the character.
    #[default]
    Unrecognized,
    /// `(` without a matching `)`.
    UnterminatedComment,
    /// `«` without a matching `»`.
    UnterminatedQuote,
}

/// Skips a comment up to and including its closing delimiter.
fn skip_comment(lex: &mut logos::Lexer<Lexeme>) -> FilterResult<(), LexFault> {
    match lex.remainder().find(COMMENT_END) {
        Some(length) => {
            lex.bump(length + COMMENT_END.len_utf8());
            FilterResult::Skip
        },
        None => FilterResult::Error(LexFault::UnterminatedComment),
    }
}

/// Handles `«`: either closes the function-body mode, or reads quoted text
/// verbatim up to the closing mark.
fn open_quote(lex: &mut logos::Lexer<Lexeme>) -> FilterResult<String, LexFault> {
    if lex.extras.awaiting_body {
        lex.extras.awaiting_body = false;
        return FilterResult::Skip;
    }

    match lex.remainder().find(QUOTE_CLOSE) {
        Some(length) => {
            let text = lex.remainder()[..length].to_owned();
            lex.bump(length + QUOTE_CLOSE.len_utf8());
            FilterResult::Emit(text)
        },
        None => FilterResult::Error(LexFault::UnterminatedQuote),
    }
}

/// Strips the case marker and classifies the rest of the run.
fn scan_word(lex: &mut logos::Lexer<Lexeme>) -> Word {
    let (text, marked) = strip_case_marker(lex.slice());
    let kind = keyword_kind(text);
    if text == FUNCTION {
        lex.extras.awaiting_body = true;
    }

    Word { kind,
           text: text.to_owned(),
           marked }
}

/// Converts source text into the token sequence consumed by the parser.
///
/// Scanning stops at the first character no rule accepts; no partial token
/// list is returned in that case.
///
/// # Errors
/// - `UnexpectedCharacter` for anything outside letters, digits, spaces,
///   newlines and the quote and comment delimiters.
/// - `UnterminatedComment` / `UnterminatedQuote` when a delimiter never
///   closes.
///
/// # Examples
/// ```
/// use ban::interpreter::{lexer::tokenize, token::TokenKind};
///
/// let tokens = tokenize("տպիր սովածը").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds, [TokenKind::Identifier, TokenKind::Identifier, TokenKind::CaseEnding]);
/// assert_eq!(tokens[1].text, "սոված");
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let lines = LineIndex::new(source);
    let mut lexer = Lexeme::lexer(source);
    let mut tokens = Vec::new();

    while let Some(lexeme) = lexer.next() {
        let span = lexer.span();
        let position = lines.position(source, span.start);

        match lexeme {
            Ok(Lexeme::Quote(text)) => tokens.push(Token::new(TokenKind::Quote, text, position)),
            Ok(Lexeme::EndBlock) => tokens.push(Token::new(TokenKind::EndFunction, "", position)),
            Ok(Lexeme::Number(digits)) => {
                tokens.push(Token::new(TokenKind::Number, digits, position));
            },
            Ok(Lexeme::Word(Word { kind, text, marked })) => {
                let marker_column = position.column + text.chars().count();
                if !text.is_empty() {
                    tokens.push(Token::new(kind, text, position));
                }
                if marked {
                    tokens.push(Token::new(TokenKind::CaseEnding,
                                           "",
                                           Position::new(position.line, marker_column)));
                }
            },
            Ok(Lexeme::Whitespace | Lexeme::Comment) => {},
            Err(fault) => return Err(locate_fault(fault, source, span.start, position)),
        }
    }

    trace!(count = tokens.len(), "lexing finished");
    Ok(tokens)
}

/// Attaches a position to a `logos` failure.
fn locate_fault(fault: LexFault, source: &str, offset: usize, position: Position) -> LexError {
    match fault {
        LexFault::Unrecognized => {
            let character = source[offset..].chars().next().unwrap_or_default();
            LexError::UnexpectedCharacter { character, position }
        },
        LexFault::UnterminatedComment => LexError::UnterminatedComment { position },
        LexFault::UnterminatedQuote => LexError::UnterminatedQuote { position },
    }
}
