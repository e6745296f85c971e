//! Expression error types.
//!
//! ┌ [`ParseError`] : construction-time failures (syntax)
//! └ [`EvalError`]  : evaluation-time failures (unresolved names)

use thiserror::Error;

/// The expression string is not well-formed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty expression")]
    Empty,

    #[error("unexpected character {ch:?} at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("invalid number literal at position {pos}")]
    BadNumber { pos: usize },

    #[error("unexpected token at position {pos}: expected {expected}")]
    Unexpected { pos: usize, expected: &'static str },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("trailing input at position {pos}")]
    TrailingInput { pos: usize },
}

/// The expression parsed but cannot be evaluated.
///
/// Names bind late: `foo(x)` or a stray `y` passes parsing and fails on the
/// first evaluation, which the solver reports as an evaluation failure for
/// that run.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("unknown function {name:?}")]
    UnknownFunction { name: String },

    #[error("unknown identifier {name:?}")]
    UnknownIdentifier { name: String },
}
