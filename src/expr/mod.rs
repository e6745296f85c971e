//! Expression parsing and evaluation.
//!
//! Turns user-entered text like `x^3 - x - 2` or `cos(x) - x` into a
//! function of one real variable, without any dynamic code execution: a
//! tokenizer ([`token`]), a recursive-descent parser ([`parser`]), and a
//! plain AST walked at evaluation time ([`ast`]).
//!
//! Construction can fail ([`ParseError`], syntax) and evaluation can fail
//! ([`EvalError`], unresolved names); both are ordinary errors the solver
//! layer reports as a failed run. Arithmetic faults inside the expression
//! (division by zero, domain errors) follow IEEE semantics and come back as
//! non-finite values for the caller to detect.

pub mod errors;

mod ast;
mod parser;
mod token;

pub use errors::{EvalError, ParseError};

use ast::Expr;

/// A parsed equation, evaluable at any `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    source: String,
    expr: Expr,
}

impl Equation {
    /// Parses an expression string.
    ///
    /// Accepted grammar: `+ - * /` with usual precedence, right-associative
    /// `^`, unary minus, parentheses, numeric literals, the variable `x`,
    /// the constants `pi` and `e`, and single-argument function calls
    /// (`sin cos tan asin acos atan sqrt cbrt abs exp ln log`). Function and
    /// identifier names are resolved at evaluation time.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let tokens = token::tokenize(source)?;
        let expr = parser::parse(&tokens)?;
        Ok(Self {
            source: source.to_owned(),
            expr,
        })
    }

    /// Evaluates the equation at `x`.
    pub fn eval(&self, x: f64) -> Result<f64, EvalError> {
        self.expr.eval(x)
    }

    /// The original text, as entered.
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl std::str::FromStr for Equation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Equation::parse(s)
    }
}

impl std::fmt::Display for Equation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}
