//! Tokenizer for expression strings.

use super::errors::ParseError;

#[derive(Debug, Clone, PartialEq)]
pub(super) enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
}

/// A token plus the byte position it started at, for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Spanned {
    pub pos: usize,
    pub token: Token,
}

pub(super) fn tokenize(src: &str) -> Result<Vec<Spanned>, ParseError> {
    let bytes = src.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let pos = i;
        let ch = bytes[i] as char;

        let token = match ch {
            ' ' | '\t' | '\r' | '\n' => {
                i += 1;
                continue;
            }
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '^' => Token::Caret,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '0'..='9' | '.' => {
                while i < bytes.len() && matches!(bytes[i] as char, '0'..='9' | '.') {
                    i += 1;
                }
                // exponent suffix: 1e-3, 2.5E4
                if i < bytes.len() && matches!(bytes[i] as char, 'e' | 'E') {
                    let mut j = i + 1;
                    if j < bytes.len() && matches!(bytes[j] as char, '+' | '-') {
                        j += 1;
                    }
                    if j < bytes.len() && (bytes[j] as char).is_ascii_digit() {
                        i = j;
                        while i < bytes.len() && (bytes[i] as char).is_ascii_digit() {
                            i += 1;
                        }
                    }
                }
                let literal = &src[pos..i];
                let value: f64 = literal.parse().map_err(|_| ParseError::BadNumber { pos })?;
                tokens.push(Spanned {
                    pos,
                    token: Token::Number(value),
                });
                continue;
            }
            'a'..='z' | 'A'..='Z' | '_' => {
                while i < bytes.len()
                    && matches!(bytes[i] as char, 'a'..='z' | 'A'..='Z' | '0'..='9' | '_')
                {
                    i += 1;
                }
                tokens.push(Spanned {
                    pos,
                    token: Token::Ident(src[pos..i].to_owned()),
                });
                continue;
            }
            other => return Err(ParseError::UnexpectedChar { ch: other, pos }),
        };

        tokens.push(Spanned { pos, token });
        i += 1;
    }

    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(tokens)
}
