//! Built-in SDL layout: indentation, column alignment and statement spacing.
//!
//! The reformatter works line by line on the token stream. It understands
//! just enough structure to lay out flat `keyword name { ... }` blocks; it
//! never reorders or rewrites content.

use crate::error::FormatError;
use crate::formatter::Formatter;
use crate::lexer::{tokenize, SpannedToken};
use crate::token::Token;

/// Default number of spaces a block body is indented by.
pub const DEFAULT_INDENT: usize = 2;

/// Formatter that lays out SDL text in canonical style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reformatter {
    indent: usize,
}

impl Default for Reformatter {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT)
    }
}

impl Reformatter {
    pub fn new(indent: usize) -> Self {
        Self { indent }
    }

    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Reformats `source` synchronously.
    ///
    /// Empty or whitespace-only input yields an empty string. Any other
    /// output ends with exactly one newline.
    ///
    /// # Errors
    ///
    /// Returns a `FormatError` for unlexable input or unbalanced blocks.
    pub fn reformat(&self, source: &str) -> Result<String, FormatError> {
        let tokens = tokenize(source)?;
        let mut statements: Vec<Vec<String>> = Vec::new();
        let mut pending: Vec<String> = Vec::new();
        let mut open: Option<Block<'_>> = None;

        for line in tokens
            .split(|t| t.token == Token::Newline)
            .filter(|l| !l.is_empty())
        {
            let number = line[0].line;
            let closes = line.len() == 1 && line[0].token == Token::RBrace;
            let opens = line.last().is_some_and(|t| t.token == Token::LBrace);

            match open.take() {
                None if closes => {
                    return Err(FormatError::UnexpectedClosingBrace { line: number });
                }
                None if opens => {
                    let header = segments(source, &line[..line.len() - 1]);
                    open = Some(Block::new(header, number));
                }
                None => pending.push(segments(source, line).join(" ")),
                Some(block) if closes => {
                    let mut statement = std::mem::take(&mut pending);
                    statement.extend(block.render(self.indent));
                    statements.push(statement);
                }
                Some(_) if opens => {
                    return Err(FormatError::NestedBlock { line: number });
                }
                Some(mut block) => {
                    block.body.push(BodyLine::classify(source, line));
                    open = Some(block);
                }
            }
        }

        if let Some(block) = open {
            return Err(FormatError::UnclosedBlock {
                name: block.header.join(" "),
                line: block.line,
            });
        }
        if !pending.is_empty() {
            statements.push(pending);
        }

        tracing::debug!(
            statements = statements.len(),
            indent = self.indent,
            "reformatted schema"
        );

        if statements.is_empty() {
            return Ok(String::new());
        }
        let mut output = statements
            .iter()
            .map(|lines| lines.join("\n"))
            .collect::<Vec<_>>()
            .join("\n\n");
        output.push('\n');
        Ok(output)
    }
}

impl Formatter for Reformatter {
    type Error = FormatError;

    async fn format(&self, raw: &str) -> Result<String, Self::Error> {
        self.reformat(raw)
    }
}

/// An open `keyword name {` block and the lines collected so far.
struct Block<'s> {
    header: Vec<&'s str>,
    line: usize,
    body: Vec<BodyLine<'s>>,
}

impl<'s> Block<'s> {
    fn new(header: Vec<&'s str>, line: usize) -> Self {
        Self {
            header,
            line,
            body: Vec::new(),
        }
    }

    fn kind(&self) -> BlockKind {
        match self.header.first().copied() {
            Some("datasource" | "generator") => BlockKind::Config,
            Some("model" | "view" | "type") => BlockKind::Fields,
            _ => BlockKind::Plain,
        }
    }

    fn render(&self, indent: usize) -> Vec<String> {
        let pad = " ".repeat(indent);
        let mut lines = Vec::with_capacity(self.body.len() + 2);

        if self.header.is_empty() {
            lines.push("{".to_string());
        } else {
            lines.push(format!("{} {{", self.header.join(" ")));
        }

        let kind = self.kind();
        let widths = Widths::measure(&self.body);
        for body_line in &self.body {
            lines.push(format!("{pad}{}", body_line.render(kind, &widths)));
        }

        lines.push("}".to_string());
        lines
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    /// `key = value` lines, keys aligned.
    Config,
    /// Field lines, name and type columns aligned.
    Fields,
    Plain,
}

/// One non-empty line inside a block.
enum BodyLine<'s> {
    /// `key = value...`
    Assignment { key: &'s str, value: Vec<&'s str> },
    /// A line starting with an identifier: a field or an enum value.
    Field(Vec<&'s str>),
    /// Comments, block attributes and anything else.
    Other(Vec<&'s str>),
}

impl<'s> BodyLine<'s> {
    fn classify(source: &'s str, line: &[SpannedToken]) -> Self {
        match line {
            [key, eq, rest @ ..] if key.token == Token::Ident && eq.token == Token::Equals => {
                Self::Assignment {
                    key: &source[key.span.start..key.span.end],
                    value: segments(source, rest),
                }
            }
            [first, ..] if first.token == Token::Ident => Self::Field(segments(source, line)),
            _ => Self::Other(segments(source, line)),
        }
    }

    fn render(&self, kind: BlockKind, widths: &Widths) -> String {
        match self {
            Self::Assignment { key, value } => {
                let key_width = if kind == BlockKind::Config { widths.key } else { 0 };
                if value.is_empty() {
                    format!("{key:<key_width$} =")
                } else {
                    format!("{key:<key_width$} = {}", value.join(" "))
                }
            }
            Self::Field(segs) if kind == BlockKind::Fields => match segs.as_slice() {
                [name, ty, rest @ ..] if !rest.is_empty() => format!(
                    "{name:<nw$} {ty:<tw$} {}",
                    rest.join(" "),
                    nw = widths.name,
                    tw = widths.r#type,
                ),
                [name, ty] => format!("{name:<nw$} {ty}", nw = widths.name),
                _ => segs.join(" "),
            },
            Self::Field(segs) | Self::Other(segs) => segs.join(" "),
        }
    }
}

/// Column widths of a block body, in characters.
#[derive(Debug, Default)]
struct Widths {
    key: usize,
    name: usize,
    r#type: usize,
}

impl Widths {
    fn measure(body: &[BodyLine<'_>]) -> Self {
        let mut widths = Self::default();
        for line in body {
            match line {
                BodyLine::Assignment { key, .. } => {
                    widths.key = widths.key.max(key.chars().count());
                }
                BodyLine::Field(segs) => {
                    if let Some(name) = segs.first() {
                        widths.name = widths.name.max(name.chars().count());
                    }
                    if let Some(r#type) = segs.get(1) {
                        widths.r#type = widths.r#type.max(r#type.chars().count());
                    }
                }
                BodyLine::Other(_) => {}
            }
        }
        widths
    }
}

/// Splits one line's tokens into segments at whitespace that lies outside
/// parentheses and brackets. Each segment is a verbatim slice of `source`.
fn segments<'s>(source: &'s str, tokens: &[SpannedToken]) -> Vec<&'s str> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start: Option<usize> = None;
    let mut end = 0;

    for t in tokens {
        if let Some(s) = start {
            if depth == 0 && t.span.start > end {
                segments.push(source[s..end].trim_end());
                start = Some(t.span.start);
            }
        } else {
            start = Some(t.span.start);
        }

        if t.token.opens_group() {
            depth += 1;
        } else if t.token.closes_group() {
            depth = depth.saturating_sub(1);
        }
        end = t.span.end;
    }

    if let Some(s) = start {
        segments.push(source[s..end].trim_end());
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reformat(source: &str) -> String {
        Reformatter::default().reformat(source).unwrap()
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(reformat(""), "");
        assert_eq!(reformat("  \n\t\n"), "");
    }

    #[test]
    fn indents_enum_values() {
        assert_eq!(
            reformat("enum Role {\nUSER\nADMIN\n}"),
            "enum Role {\n  USER\n  ADMIN\n}\n"
        );
    }

    #[test]
    fn aligns_config_keys() {
        let raw = "generator client {\n  provider = \"prisma-client-js\"\n  output = \"./out\"\n  binaryTargets = [\"native\",\"debian-openssl-1.1.x\"]\n}";
        assert_eq!(
            reformat(raw),
            "generator client {\n  provider      = \"prisma-client-js\"\n  output        = \"./out\"\n  binaryTargets = [\"native\",\"debian-openssl-1.1.x\"]\n}\n"
        );
    }

    #[test]
    fn aligns_model_columns() {
        let raw = "model User {\nid Int @id @default(autoincrement())\nemail String @unique\nname String?\nposts Post[]\n}";
        assert_eq!(
            reformat(raw),
            "model User {\n  id    Int     @id @default(autoincrement())\n  email String  @unique\n  name  String?\n  posts Post[]\n}\n"
        );
    }

    #[test]
    fn keeps_parenthesized_text_verbatim() {
        let raw = "model Post {\nauthor User @relation(name: \"PostToUser\", fields: [authorId], references: [id])\n}";
        assert_eq!(
            reformat(raw),
            "model Post {\n  author User @relation(name: \"PostToUser\", fields: [authorId], references: [id])\n}\n"
        );
    }

    #[test]
    fn keeps_documentation_lines() {
        let raw = "/// Accounts\nmodel User {\n/// Primary key\nid Int @id\n}";
        assert_eq!(
            reformat(raw),
            "/// Accounts\nmodel User {\n  /// Primary key\n  id Int @id\n}\n"
        );
    }

    #[test]
    fn separates_statements_with_one_blank_line() {
        let raw = "enum A {\nX\n}\n\n\n\nenum B {\nY\n}\nenum C {\nZ\n}";
        assert_eq!(
            reformat(raw),
            "enum A {\n  X\n}\n\nenum B {\n  Y\n}\n\nenum C {\n  Z\n}\n"
        );
    }

    #[test]
    fn drops_blank_lines_inside_blocks() {
        assert_eq!(reformat("enum A {\n\nX\n\nY\n}"), "enum A {\n  X\n  Y\n}\n");
    }

    #[test]
    fn honors_indent_width() {
        let out = Reformatter::new(4).reformat("enum A {\nX\n}").unwrap();
        assert_eq!(out, "enum A {\n    X\n}\n");
    }

    #[test]
    fn normalizes_header_spacing() {
        assert_eq!(reformat("model   User{\nid Int\n}"), "model User {\n  id Int\n}\n");
    }

    #[test]
    fn reformatting_is_idempotent() {
        let raw = "datasource db {\n  provider = \"postgresql\"\n  url      = env(\"DATABASE_URL\")\n}\n\nmodel User {\nid Int @id\nname String?\n}";
        let once = reformat(raw);
        assert_eq!(reformat(&once), once);
    }

    #[test]
    fn keeps_exponent_defaults() {
        assert_eq!(
            reformat("model M {\nratio Float @default(1.5e-7)\n}"),
            "model M {\n  ratio Float @default(1.5e-7)\n}\n"
        );
    }

    #[test]
    fn unexpected_closing_brace() {
        let err = Reformatter::default().reformat("enum A {\nX\n}\n}").unwrap_err();
        assert_eq!(err, FormatError::UnexpectedClosingBrace { line: 4 });
    }

    #[test]
    fn unclosed_block() {
        let err = Reformatter::default().reformat("\nmodel User {\nid Int").unwrap_err();
        assert_eq!(
            err,
            FormatError::UnclosedBlock {
                name: "model User".into(),
                line: 2
            }
        );
    }

    #[test]
    fn nested_block() {
        let err = Reformatter::default()
            .reformat("model User {\nmodel Inner {\n}\n}")
            .unwrap_err();
        assert_eq!(err, FormatError::NestedBlock { line: 2 });
    }

    #[test]
    fn invalid_token() {
        let err = Reformatter::default().reformat("enum A {\nX $\n}").unwrap_err();
        assert!(matches!(err, FormatError::InvalidToken { line: 2, .. }));
    }

    #[test]
    fn segments_respect_groups() {
        let source = "a @default( now() ) [x, y] b";
        let tokens = tokenize(source).unwrap();
        assert_eq!(
            segments(source, &tokens),
            vec!["a", "@default( now() )", "[x, y]", "b"]
        );
    }

    #[tokio::test]
    async fn formatter_impl_matches_reformat() {
        let formatter = Reformatter::default();
        let out = formatter.format("enum A {\nX\n}").await.unwrap();
        assert_eq!(out, formatter.reformat("enum A {\nX\n}").unwrap());
    }
}
