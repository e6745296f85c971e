//! Newton-Raphson method.

use crate::expr::EvalError;

use super::derivative::derivative;
use super::diagnostics::Diagnostic;
use super::method::Method;
use super::params::RunParameters;
use super::report::RunReport;
use super::trace::{checked_eval, Trace};

const METHOD: Method = Method::NewtonRaphson;

/// Finds a root of `f` by the
/// [Newton-Raphson method](https://en.wikipedia.org/wiki/Newton%27s_method),
/// starting from `params.initial_guess`.
///
/// The derivative is the numeric central difference from
/// [`derivative`](super::derivative::derivative); there is no symbolic or
/// analytic path. A derivative of exactly zero fails the run before the
/// division it would break — the check fires ahead of the row for that
/// iteration, so such runs can terminate with an empty trace.
///
/// This is the one method with no endpoints: records carry `None` there.
pub fn newton_raphson<F>(mut f: F, params: &RunParameters) -> RunReport
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
    let mut root = params.initial_guess;

    for _ in 0..params.max_iterations {
        let f_x = checked_eval(f, METHOD, root)?;
        let f_prime = derivative(f, root).map_err(|source| Diagnostic::Evaluation {
            method: METHOD,
            x: root,
            source,
        })?;

        if f_prime == 0.0 {
            return Err(Diagnostic::ZeroDerivative { x: root });
        }

        root -= f_x / f_prime;
        let f_root = checked_eval(f, METHOD, root)?;
        trace.record(None, root, f_root);

        if f_root.abs() < params.tolerance {
            return Ok(root);
        }
    }

    Err(Diagnostic::IterationsExhausted {
        method: METHOD,
        max_iterations: params.max_iterations,
    })
}
