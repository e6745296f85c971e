//! Recursive-descent parser for expression strings.
//!
//! Grammar (tightest binding last):
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := unary (('*' | '/') unary)*
//! unary  := '-' unary | power
//! power  := atom ('^' unary)?          right-associative
//! atom   := number | ident | ident '(' expr ')' | '(' expr ')'
//! ```
//! `-x^2` parses as `-(x^2)`, matching usual mathematical convention.

use super::ast::{BinOp, Expr};
use super::errors::ParseError;
use super::token::{Spanned, Token};

pub(super) fn parse(tokens: &[Spanned]) -> Result<Expr, ParseError> {
    let mut cursor = Cursor { tokens, at: 0 };
    let expr = cursor.expr()?;
    if let Some(spanned) = cursor.peek() {
        return Err(ParseError::TrailingInput { pos: spanned.pos });
    }
    Ok(expr)
}

struct Cursor<'a> {
    tokens: &'a [Spanned],
    at: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<&'a Spanned> {
        self.tokens.get(self.at)
    }

    fn bump(&mut self) -> Option<&'a Spanned> {
        let spanned = self.tokens.get(self.at);
        if spanned.is_some() {
            self.at += 1;
        }
        spanned
    }

    fn eat(&mut self, expected: &Token) -> bool {
        match self.peek() {
            Some(spanned) if spanned.token == *expected => {
                self.at += 1;
                true
            }
            _ => false,
        }
    }

    fn expr(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.term()?;
        loop {
            let op = match self.peek().map(|s| &s.token) {
                Some(Token::Plus) => BinOp::Add,
                Some(Token::Minus) => BinOp::Sub,
                _ => return Ok(lhs),
            };
            self.at += 1;
            let rhs = self.term()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut lhs = self.unary()?;
        loop {
            let op = match self.peek().map(|s| &s.token) {
                Some(Token::Star) => BinOp::Mul,
                Some(Token::Slash) => BinOp::Div,
                _ => return Ok(lhs),
            };
            self.at += 1;
            let rhs = self.unary()?;
            lhs = Expr::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            };
        }
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        if self.eat(&Token::Minus) {
            return Ok(Expr::Neg(Box::new(self.unary()?)));
        }
        self.power()
    }

    fn power(&mut self) -> Result<Expr, ParseError> {
        let base = self.atom()?;
        if self.eat(&Token::Caret) {
            let exponent = self.unary()?;
            return Ok(Expr::Binary {
                op: BinOp::Pow,
                lhs: Box::new(base),
                rhs: Box::new(exponent),
            });
        }
        Ok(base)
    }

    fn atom(&mut self) -> Result<Expr, ParseError> {
        let Some(spanned) = self.bump() else {
            return Err(ParseError::UnexpectedEnd);
        };
        let pos = spanned.pos;

        match &spanned.token {
            Token::Number(v) => Ok(Expr::Number(*v)),
            Token::Ident(name) => {
                if self.eat(&Token::LParen) {
                    let name = name.clone();
                    let arg = self.expr()?;
                    self.close_paren()?;
                    return Ok(Expr::Call {
                        name,
                        arg: Box::new(arg),
                    });
                }
                Ok(match name.as_str() {
                    "x" => Expr::Variable,
                    "pi" => Expr::Number(std::f64::consts::PI),
                    "e" => Expr::Number(std::f64::consts::E),
                    other => Expr::Ident(other.to_owned()),
                })
            }
            Token::LParen => {
                let inner = self.expr()?;
                self.close_paren()?;
                Ok(inner)
            }
            _ => Err(ParseError::Unexpected {
                pos,
                expected: "a number, name, or '('",
            }),
        }
    }

    fn close_paren(&mut self) -> Result<(), ParseError> {
        match self.bump() {
            Some(spanned) if spanned.token == Token::RParen => Ok(()),
            Some(spanned) => Err(ParseError::Unexpected {
                pos: spanned.pos,
                expected: "')'",
            }),
            None => Err(ParseError::UnexpectedEnd),
        }
    }
}
