//! Secant method.

use crate::expr::EvalError;

use super::diagnostics::Diagnostic;
use super::method::Method;
use super::params::RunParameters;
use super::report::{Endpoints, RunReport};
use super::trace::{checked_eval, Trace};

const METHOD: Method = Method::Secant;

/// Finds a root of `f` by the
/// [secant method](https://en.wikipedia.org/wiki/Secant_method), starting
/// from the two points `a`, `b`.
///
/// Unlike bisection and false position the two points are not a bracket: no
/// sign change is required, and the window simply slides (`a <- b`,
/// `b <- root`) each iteration. The per-iteration precondition is
/// `f(a) != f(b)`, the interpolation denominator; equal values fail the run
/// immediately.
///
/// `root = b - f(b) * (b - a) / (f(b) - f(a))`, convergence on
/// `|f(root)| < tolerance`.
pub fn secant<F>(mut f: F, params: &RunParameters) -> RunReport
where
    F: FnMut(f64) -> Result<f64, EvalError>,
{
    let mut trace = Trace::new(METHOD);
    match iterate(&mut f, params, &mut trace) {
        Ok(root) => trace.converged(root),
        Err(diagnostic) => trace.failed(diagnostic),
    }
}

fn iterate<F>(f: &mut F, params: &RunParameters, trace: &mut Trace) -> Result<f64, Diagnostic>
where
    F: FnMut(f64) -> Result<f64, EvalError>,
{
    let mut a = params.a;
    let mut b = params.b;

    for _ in 0..params.max_iterations {
        let f_a = checked_eval(f, METHOD, a)?;
        let f_b = checked_eval(f, METHOD, b)?;

        if f_a == f_b {
            return Err(Diagnostic::EqualEndpointValues { method: METHOD, a, b });
        }

        let root = b - f_b * (b - a) / (f_b - f_a);
        let f_root = checked_eval(f, METHOD, root)?;
        trace.record(Some(Endpoints { a, b, f_a, f_b }), root, f_root);

        if f_root.abs() < params.tolerance {
            return Ok(root);
        }

        a = b;
        b = root;
    }

    Err(Diagnostic::IterationsExhausted {
        method: METHOD,
        max_iterations: params.max_iterations,
    })
}
