use logos::Logos;

use crate::error::{FormatError, Span};
use crate::token::Token;

/// A token paired with its source span and the 1-based line it sits on.
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
    pub line: usize,
}

/// Tokenizes SDL text into a sequence of spanned tokens.
///
/// # Errors
///
/// Returns `FormatError::InvalidToken` for the first run of bytes the lexer
/// cannot match to a token rule.
pub fn tokenize(source: &str) -> Result<Vec<SpannedToken>, FormatError> {
    let mut tokens = Vec::new();
    let mut line = 1;

    let lexer = Token::lexer(source);
    for (result, range) in lexer.spanned() {
        let span = Span::new(range.start, range.end);
        match result {
            Ok(token) => {
                tokens.push(SpannedToken { token, span, line });
                if token == Token::Newline {
                    line += 1;
                }
            }
            Err(()) => return Err(FormatError::InvalidToken { line, span }),
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).unwrap().into_iter().map(|t| t.token).collect()
    }

    #[test]
    fn tokenize_block_header() {
        let tokens = tokenize("model User {").unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].token, Token::Ident);
        assert_eq!(tokens[0].span, Span::new(0, 5));
        assert_eq!(tokens[1].span, Span::new(6, 10));
        assert_eq!(tokens[2].token, Token::LBrace);
    }

    #[test]
    fn tokenize_field_with_attributes() {
        assert_eq!(
            kinds("id Int? @default(autoincrement())"),
            vec![
                Token::Ident,
                Token::Ident,
                Token::Question,
                Token::At,
                Token::Ident,
                Token::LParen,
                Token::Ident,
                Token::LParen,
                Token::RParen,
                Token::RParen,
            ]
        );
    }

    #[test]
    fn tokenize_counts_lines() {
        let tokens = tokenize("enum Role {\nUSER\n}").unwrap();
        let last = tokens.last().unwrap();
        assert_eq!(last.token, Token::RBrace);
        assert_eq!(last.line, 3);
    }

    #[test]
    fn doc_comment_wins_over_line_comment() {
        assert_eq!(kinds("/// docs"), vec![Token::DocComment]);
        assert_eq!(kinds("// note"), vec![Token::LineComment]);
    }

    #[test]
    fn exponent_numbers_are_one_token() {
        assert_eq!(kinds("1e+21"), vec![Token::Number]);
        assert_eq!(kinds("-1.5e-7"), vec![Token::Number]);
        assert_eq!(kinds("2E5"), vec![Token::Number]);
    }

    #[test]
    fn binary_target_is_one_ident() {
        let tokens = tokenize("rhel-openssl-1.0.x").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].token, Token::Ident);
    }

    #[test]
    fn tokenize_json_array() {
        assert_eq!(
            kinds(r#"["native","debian-openssl-1.1.x"]"#),
            vec![
                Token::LBracket,
                Token::StringLiteral,
                Token::Comma,
                Token::StringLiteral,
                Token::RBracket,
            ]
        );
    }

    #[test]
    fn tokenize_invalid_character() {
        let err = tokenize("model User {\n  id Int #\n}").unwrap_err();
        assert_eq!(
            err,
            FormatError::InvalidToken {
                line: 2,
                span: Span::new(22, 23)
            }
        );
    }

    #[test]
    fn tokenize_whitespace_only() {
        assert_eq!(kinds("   \t  "), vec![]);
        assert_eq!(kinds("\n\n"), vec![Token::Newline, Token::Newline]);
    }

    #[test]
    fn tokenize_string_with_escapes() {
        assert_eq!(kinds(r#""say \"hi\"""#), vec![Token::StringLiteral]);
    }
}
