//! Caller-supplied run parameters.
//!
//! [`RunParameters`] — universal fields
//! ├ `a`, `b`          : bracket / starting pair (bisection, false position, secant)
//! ├ `initial_guess`   : starting point (Newton-Raphson)
//! ├ `tolerance`       : convergence threshold on `|f(root)|`, finite and > 0
//! └ `max_iterations`  : iteration cap, >= 1 (default 20)
//!
//! Parameters are immutable for the duration of one run. Validation happens
//! once at the [`find_root`](crate::solver::run::find_root) boundary via
//! [`RunParameters::validate`]; invalid parameters are input errors, reported
//! before any iteration runs.

use thiserror::Error;

/// Invalid run parameters.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParamError {
    #[error("invalid tolerance: must be finite and > 0. got {got}")]
    InvalidTolerance { got: f64 },

    #[error("invalid max_iterations: must be >= 1. got {got}")]
    InvalidMaxIterations { got: usize },

    #[error("non-finite bracket endpoints: a={a}, b={b}")]
    NonFiniteEndpoints { a: f64, b: f64 },

    #[error("non-finite initial guess: {got}")]
    NonFiniteGuess { got: f64 },
}

/// Parameters for one root-finding run.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RunParameters {
    pub a: f64,
    pub b: f64,
    pub initial_guess: f64,
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl RunParameters {
    pub const DEFAULT_MAX_ITERATIONS: usize = 20;

    /// Parameters with the given tolerance, zeroed starting values, and the
    /// default iteration cap.
    #[must_use]
    pub fn new(tolerance: f64) -> Self {
        Self {
            a: 0.0,
            b: 0.0,
            initial_guess: 0.0,
            tolerance,
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
        }
    }

    #[must_use]
    pub fn with_bracket(mut self, a: f64, b: f64) -> Self {
        self.a = a;
        self.b = b;
        self
    }

    #[must_use]
    pub fn with_initial_guess(mut self, guess: f64) -> Self {
        self.initial_guess = guess;
        self
    }

    #[must_use]
    pub fn with_max_iterations(mut self, v: usize) -> Self {
        self.max_iterations = v;
        self
    }

    /// Checks every field, including the ones the selected method will not
    /// read; a parameter set is either wholly valid or rejected.
    pub fn validate(&self) -> Result<(), ParamError> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(ParamError::InvalidTolerance { got: self.tolerance });
        }
        if self.max_iterations == 0 {
            return Err(ParamError::InvalidMaxIterations { got: self.max_iterations });
        }
        if !(self.a.is_finite() && self.b.is_finite()) {
            return Err(ParamError::NonFiniteEndpoints { a: self.a, b: self.b });
        }
        if !self.initial_guess.is_finite() {
            return Err(ParamError::NonFiniteGuess { got: self.initial_guess });
        }
        Ok(())
    }
}
