use logos::Logos;

/// Tokens of Prisma SDL as seen by the reformatter.
///
/// Newlines are significant; other whitespace is skipped by logos. Comments
/// are kept as tokens so their text survives reformatting.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\f]+")]
pub enum Token {
    #[token("\n")]
    Newline,

    // -- Comments --
    /// A documentation comment, e.g. `/// The user's email`.
    #[regex(r"///[^\n]*", priority = 5)]
    DocComment,

    /// A plain line comment, e.g. `// legacy column`.
    #[regex(r"//[^\n]*", priority = 4)]
    LineComment,

    // -- Punctuation --
    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token(",")]
    Comma,

    #[token(":")]
    Colon,

    #[token("=")]
    Equals,

    #[token("@")]
    At,

    #[token("?")]
    Question,

    // -- Literals --
    /// A double-quoted string literal, e.g. `"postgresql"`.
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    StringLiteral,

    /// A number, optionally negative, fractional or in exponent form, e.g.
    /// `42`, `-2.5` or `1e+21`.
    #[regex(r"-?[0-9]+", priority = 2)]
    #[regex(r"-?[0-9]+\.[0-9]+", priority = 3)]
    #[regex(r"-?[0-9]+[eE][+\-]?[0-9]+", priority = 3)]
    #[regex(r"-?[0-9]+\.[0-9]+[eE][+\-]?[0-9]+", priority = 4)]
    Number,

    // -- Identifiers --
    /// A keyword, name or bare value. Dots and dashes are allowed after the
    /// first character so values like `rhel-openssl-1.0.x` lex as one token.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_.\-]*")]
    Ident,
}

impl Token {
    /// Returns a human-readable description of this token kind.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Newline => "newline",
            Self::DocComment => "documentation comment",
            Self::LineComment => "comment",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::Comma => "','",
            Self::Colon => "':'",
            Self::Equals => "'='",
            Self::At => "'@'",
            Self::Question => "'?'",
            Self::StringLiteral => "string literal",
            Self::Number => "number",
            Self::Ident => "identifier",
        }
    }

    /// True for tokens that open a parenthesized or bracketed group.
    pub fn opens_group(&self) -> bool {
        matches!(self, Self::LParen | Self::LBracket)
    }

    /// True for tokens that close a parenthesized or bracketed group.
    pub fn closes_group(&self) -> bool {
        matches!(self, Self::RParen | Self::RBracket)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}
