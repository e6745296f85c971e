//! Iteration recorder shared by all four methods.
//!
//! [`Trace`] owns the append-only record sequence of one run and seals it
//! into a [`RunReport`] at termination. Indices are assigned here, so every
//! run's records are 1-based and contiguous regardless of the method.

use tracing::{debug, info, warn};

use crate::expr::EvalError;

use super::diagnostics::Diagnostic;
use super::method::Method;
use super::report::{Endpoints, IterationRecord, RunReport, RunResult};

/// Evaluates the injected function at `x`, turning its failures and
/// non-finite values into diagnostics.
///
/// Every method routes its calls through here: an evaluator error or a NaN /
/// infinity (a domain error inside the expression, e.g. division by zero)
/// terminates the run instead of poisoning later arithmetic.
#[inline]
pub(crate) fn checked_eval<F>(f: &mut F, method: Method, x: f64) -> Result<f64, Diagnostic>
where
    F: FnMut(f64) -> Result<f64, EvalError>,
{
    match f(x) {
        Ok(fx) if fx.is_finite() => Ok(fx),
        Ok(fx) => Err(Diagnostic::NonFiniteValue { method, x, fx }),
        Err(source) => Err(Diagnostic::Evaluation { method, x, source }),
    }
}

#[derive(Debug)]
pub(crate) struct Trace {
    method: Method,
    records: Vec<IterationRecord>,
}

impl Trace {
    pub(crate) fn new(method: Method) -> Self {
        Self {
            method,
            records: Vec::new(),
        }
    }

    /// Appends the row for the iteration that just ran.
    pub(crate) fn record(&mut self, endpoints: Option<Endpoints>, root: f64, f_root: f64) {
        let record = IterationRecord {
            method: self.method,
            index: self.records.len() + 1,
            endpoints,
            root,
            f_root,
        };
        debug!(target: "rootspan", "{record}");
        self.records.push(record);
    }

    pub(crate) fn converged(self, root: f64) -> RunReport {
        info!(
            target: "rootspan",
            method = %self.method,
            iterations = self.records.len(),
            root,
            "converged",
        );
        RunReport {
            result: RunResult::Converged(root),
            records: self.records,
            diagnostic: None,
        }
    }

    pub(crate) fn failed(self, diagnostic: Diagnostic) -> RunReport {
        warn!(
            target: "rootspan",
            method = %self.method,
            iterations = self.records.len(),
            %diagnostic,
        );
        RunReport {
            result: RunResult::Failed,
            records: self.records,
            diagnostic: Some(diagnostic),
        }
    }
}
