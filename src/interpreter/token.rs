use std::fmt;

/// A location in the source text. Lines and columns start at 1; columns
/// count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// The source line.
    pub line:   usize,
    /// The character offset within the line.
    pub column: usize,
}

impl Position {
    /// Creates a position from a line and a column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Translates byte offsets into [`Position`]s.
///
/// Built once per source text; every lookup is a binary search over the byte
/// offsets at which lines start.
///
/// # Examples
/// ```
/// use ban::interpreter::token::{LineIndex, Position};
///
/// let source = "ա բ\nգ";
/// let index = LineIndex::new(source);
///
/// assert_eq!(index.position(source, 0), Position::new(1, 1));
/// // `բ` follows a two-byte letter and a space.
/// assert_eq!(index.position(source, 3), Position::new(1, 3));
/// assert_eq!(index.position(source, 6), Position::new(2, 1));
/// ```
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Records the start offset of every line in `source`.
    #[must_use]
    pub fn new(source: &str) -> Self {
        let line_starts = std::iter::once(0).chain(source.match_indices('\n').map(|(i, _)| i + 1))
                                            .collect();
        Self { line_starts }
    }

    /// Returns the position of the byte `offset` within `source`.
    ///
    /// `offset` must lie on a character boundary of the text this index was
    /// built from.
    #[must_use]
    pub fn position(&self, source: &str, offset: usize) -> Position {
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts[line - 1];
        let column = source[line_start..offset].chars().count() + 1;

        Position { line, column }
    }
}

/// Every kind of token the lexer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Quoted text: `«...»`.
    Quote,
    /// The true literal `ճշմարիտ`.
    True,
    /// The false literal `կեղծ`.
    False,
    /// `որպես`, introducing the name of a definition.
    As,
    /// `գործառույթ`, introducing a function body.
    Function,
    /// A name.
    Identifier,
    /// A run of decimal digits.
    Number,
    /// `և`, joining values into a list.
    Separator,
    /// `չափոցով`, closing a parameter list.
    Parameter,
    /// `»` outside quoted text, ending a function body.
    EndFunction,
    /// A case marker split off the preceding identifier.
    CaseEnding,
}

impl TokenKind {
    /// Whether a token of this kind can stand as a value in an expression.
    #[must_use]
    pub const fn is_value(self) -> bool {
        matches!(self, Self::Identifier | Self::Number | Self::True | Self::False | Self::Quote)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Quote => "Quote",
            Self::True => "True",
            Self::False => "False",
            Self::As => "As",
            Self::Function => "Function",
            Self::Identifier => "Identifier",
            Self::Number => "Number",
            Self::Separator => "Separator",
            Self::Parameter => "Parameter",
            Self::EndFunction => "EndFunction",
            Self::CaseEnding => "CaseEnding",
        };
        f.write_str(name)
    }
}

/// A lexical token: its kind, the text it carries and where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the token is.
    pub kind:     TokenKind,
    /// Identifier or keyword text, quoted content or digits. Empty for
    /// [`TokenKind::EndFunction`] and [`TokenKind::CaseEnding`].
    pub text:     String,
    /// Where the token starts in the source.
    pub position: Position,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, position: Position) -> Self {
        Self { kind,
               text: text.into(),
               position }
    }

    /// Short human-readable description used in parse errors.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::EndFunction => "'»'".to_string(),
            TokenKind::CaseEnding => "a case ending".to_string(),
            TokenKind::Quote => format!("«{}»", self.text),
            _ => format!("'{}'", self.text),
        }
    }
}
