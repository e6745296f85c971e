//! Run outcome and the per-iteration record shape shared by all methods.

use super::diagnostics::Diagnostic;
use super::method::Method;

/// Decimal places used when formatting results and record values for a
/// display sink.
pub const DISPLAY_PRECISION: usize = 6;

/// Endpoint columns of an iteration row.
///
/// Present for bisection, false position, and secant. Newton-Raphson iterates
/// a single point and records no endpoints; modeling the fields as an
/// `Option` keeps them unset rather than defaulting to a sentinel number a
/// reader could mistake for a real value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Endpoints {
    pub a: f64,
    pub b: f64,
    pub f_a: f64,
    pub f_b: f64,
}

/// One row of the iteration audit trail.
///
/// Indices are 1-based and contiguous for the records of one run. Rows are
/// appended as they happen and never mutated afterwards; a run's sequence is
/// a complete trail up to termination, including failed runs.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IterationRecord {
    pub method: Method,
    pub index: usize,
    pub endpoints: Option<Endpoints>,
    /// Candidate root estimate produced this iteration.
    pub root: f64,
    /// Residual `f(root)` driving the convergence test.
    pub f_root: f64,
}

impl std::fmt::Display for IterationRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method, self.index)?;
        if let Some(Endpoints { a, b, f_a, f_b }) = self.endpoints {
            write!(
                f,
                " a={a:.p$} b={b:.p$} f(a)={f_a:.p$} f(b)={f_b:.p$}",
                p = DISPLAY_PRECISION
            )?;
        }
        write!(
            f,
            " root={:.p$} f(root)={:.p$}",
            self.root,
            self.f_root,
            p = DISPLAY_PRECISION
        )
    }
}

/// Binary outcome of a run.
///
/// `Converged` is the only state carrying a numeric result. Every other
/// termination surfaces as `Failed`; the distinguishing [`Diagnostic`] lives
/// on the [`RunReport`] and the log channel, not here.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RunResult {
    Converged(f64),
    Failed,
}

impl RunResult {
    pub const fn is_converged(&self) -> bool {
        matches!(self, RunResult::Converged(_))
    }

    pub const fn root(&self) -> Option<f64> {
        match self {
            RunResult::Converged(root) => Some(*root),
            RunResult::Failed => None,
        }
    }
}

impl std::fmt::Display for RunResult {
    /// The display-sink format: the root to six decimals, or the literal
    /// failure message.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunResult::Converged(root) => write!(f, "{root:.p$}", p = DISPLAY_PRECISION),
            RunResult::Failed => write!(f, "Failed to converge"),
        }
    }
}

/// Everything one run produced: the binary outcome, the ordered record
/// sequence, and the failure diagnostic when there is one.
///
/// Invariant: `diagnostic().is_some()` exactly when the result is `Failed`.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub(crate) result: RunResult,
    pub(crate) records: Vec<IterationRecord>,
    pub(crate) diagnostic: Option<Diagnostic>,
}

impl RunReport {
    pub fn result(&self) -> RunResult {
        self.result
    }

    pub fn records(&self) -> &[IterationRecord] {
        &self.records
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        self.diagnostic.as_ref()
    }

    /// Shorthand for `self.result().root()`.
    pub fn root(&self) -> Option<f64> {
        self.result.root()
    }

    /// Hands the record sequence to a display collaborator.
    pub fn into_records(self) -> Vec<IterationRecord> {
        self.records
    }
}
