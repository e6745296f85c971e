//! Failure diagnostics for root-finding runs.
//!
//! The caller-facing outcome of a run is binary
//! ([`RunResult`](super::report::RunResult)); every failure nonetheless
//! carries a [`Diagnostic`] on the report and is emitted on the `tracing`
//! channel, so the underlying cause stays observable.
//!
//! [`DiagnosticKind`] groups the variants into the four failure classes:
//! ├ `InvalidPrecondition`     : a method-specific mathematical condition broke
//! ├ `DivergedOutsideBracket`  : false position's escape guard fired
//! ├ `Exhausted`               : iteration cap reached without convergence
//! └ `EvaluationFailure`       : the injected function itself failed

use thiserror::Error;

use crate::expr::{EvalError, ParseError};

use super::method::Method;

/// The four failure classes of the error taxonomy.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    InvalidPrecondition,
    DivergedOutsideBracket,
    Exhausted,
    EvaluationFailure,
}

/// Why a run failed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Diagnostic {
    /// Bisection requires a sign change over `[a, b]`.
    #[error("{method} failed: endpoints have the same sign on [{a}, {b}]")]
    SameSignEndpoints { method: Method, a: f64, b: f64 },

    /// The interpolation denominator `f(b) - f(a)` would be zero.
    #[error("{method} failed: division by zero or no convergence (f(a) == f(b) at a={a}, b={b})")]
    EqualEndpointValues { method: Method, a: f64, b: f64 },

    /// Newton-Raphson's update divides by the derivative.
    #[error("newton_raphson failed: derivative is zero at x={x}")]
    ZeroDerivative { x: f64 },

    /// False position's estimate escaped the working interval.
    #[error("false_position failed: root estimate {root} outside the interval [{a}, {b}]")]
    RootOutsideBracket { root: f64, a: f64, b: f64 },

    /// Iteration cap reached; no further distinction is made.
    #[error("{method} failed: no convergence within {max_iterations} iterations")]
    IterationsExhausted { method: Method, max_iterations: usize },

    /// The injected function signalled an error at `x`.
    #[error("{method} failed: function evaluation at x={x}: {source}")]
    Evaluation {
        method: Method,
        x: f64,
        source: EvalError,
    },

    /// The injected function produced NaN or an infinity at `x`
    /// (e.g. a division by zero inside the expression).
    #[error("{method} failed: non-finite function value {fx} at x={x}")]
    NonFiniteValue { method: Method, x: f64, fx: f64 },

    /// The expression string could not be turned into a function. Caught at
    /// the `solve` boundary; the run fails before its first iteration.
    #[error("could not build a function from the expression: {source}")]
    MalformedExpression { source: ParseError },
}

impl Diagnostic {
    pub const fn kind(&self) -> DiagnosticKind {
        match self {
            Diagnostic::SameSignEndpoints { .. }
            | Diagnostic::EqualEndpointValues { .. }
            | Diagnostic::ZeroDerivative { .. } => DiagnosticKind::InvalidPrecondition,

            Diagnostic::RootOutsideBracket { .. } => DiagnosticKind::DivergedOutsideBracket,

            Diagnostic::IterationsExhausted { .. } => DiagnosticKind::Exhausted,

            Diagnostic::Evaluation { .. }
            | Diagnostic::NonFiniteValue { .. }
            | Diagnostic::MalformedExpression { .. } => DiagnosticKind::EvaluationFailure,
        }
    }
}
