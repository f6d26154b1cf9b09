use std::fmt;

/// A byte-offset span in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Creates a new span from start (inclusive) to end (exclusive).
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Errors raised by the built-in reformatter. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormatError {
    /// The lexer met input that matches no token rule.
    InvalidToken { line: usize, span: Span },

    /// A `}` line appeared with no open block.
    UnexpectedClosingBrace { line: usize },

    /// Input ended while a block was still open.
    UnclosedBlock { name: String, line: usize },

    /// A block was opened inside another block.
    NestedBlock { line: usize },
}

impl FormatError {
    /// The 1-based line the error points at.
    pub fn line(&self) -> usize {
        match self {
            Self::InvalidToken { line, .. }
            | Self::UnexpectedClosingBrace { line }
            | Self::UnclosedBlock { line, .. }
            | Self::NestedBlock { line } => *line,
        }
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidToken { line, span } => {
                write!(f, "invalid token on line {line} at {span}")
            }
            Self::UnexpectedClosingBrace { line } => {
                write!(f, "unexpected '}}' on line {line}: no block is open")
            }
            Self::UnclosedBlock { name, line } => {
                write!(
                    f,
                    "block '{name}' opened on line {line} is never closed; add a '}}' line"
                )
            }
            Self::NestedBlock { line } => {
                write!(
                    f,
                    "block opened on line {line} inside another block; blocks cannot nest"
                )
            }
        }
    }
}

impl std::error::Error for FormatError {}
