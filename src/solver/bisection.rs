//! Bisection method.

use crate::expr::EvalError;

use super::diagnostics::Diagnostic;
use super::method::Method;
use super::params::RunParameters;
use super::report::{Endpoints, RunReport};
use super::trace::{checked_eval, Trace};

const METHOD: Method = Method::Bisection;

/// Finds a root of `f` on `[a, b]` by
/// [bisection](https://en.wikipedia.org/wiki/Bisection_method).
///
/// Requires a valid bracket: `f(a) * f(b) <= 0` (a sign change, or a root
/// sitting on an endpoint). The check runs every iteration, before the
/// midpoint is taken; a same-sign bracket fails the run immediately with an
/// invalid-precondition diagnostic and no further rows.
///
/// Per iteration: `root = a + (b - a) / 2`, one record appended, convergence
/// on `|f(root)| < tolerance`, otherwise the half keeping the sign change is
/// retained. Exhausting `max_iterations` fails the run.
///
/// Parameters are assumed validated; [`find_root`](super::run::find_root) is
/// the checked entry point.
pub fn bisection<F>(mut f: F, params: &RunParameters) -> RunReport
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

        if f_a * f_b > 0.0 {
            return Err(Diagnostic::SameSignEndpoints { method: METHOD, a, b });
        }

        let root = a + (b - a) / 2.0;
        let f_root = checked_eval(f, METHOD, root)?;
        trace.record(Some(Endpoints { a, b, f_a, f_b }), root, f_root);

        if f_root.abs() < params.tolerance {
            return Ok(root);
        }

        if f_root * f_a < 0.0 {
            b = root;
        } else {
            a = root;
        }
    }

    Err(Diagnostic::IterationsExhausted {
        method: METHOD,
        max_iterations: params.max_iterations,
    })
}
