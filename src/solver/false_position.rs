//! False position (regula falsi) method.

use crate::expr::EvalError;

use super::diagnostics::Diagnostic;
use super::method::Method;
use super::params::RunParameters;
use super::report::{Endpoints, RunReport};
use super::trace::{checked_eval, Trace};

const METHOD: Method = Method::FalsePosition;

/// Finds a root of `f` on `[a, b]` by
/// [false position](https://en.wikipedia.org/wiki/Regula_falsi): the secant
/// line through the two endpoints replaces bisection's midpoint.
///
/// Per iteration: requires `f(a) != f(b)` (else the interpolation divides by
/// zero and the run fails immediately); then
/// `root = (a * f(b) - b * f(a)) / (f(b) - f(a))`, one record appended,
/// convergence on `|f(root)| < tolerance`, bracket update exactly as
/// bisection's sign test.
///
/// One guard bisection does not need: after the bracket update, an estimate
/// outside the updated `[a, b]` fails the run with a distinct diagnostic.
/// This catches the method's known stall mode where one endpoint stays fixed
/// across iterations. The guard deliberately compares against the
/// just-updated interval, not the pre-update one.
pub fn false_position<F>(mut f: F, params: &RunParameters) -> RunReport
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

        let root = (a * f_b - b * f_a) / (f_b - f_a);
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

        if root < a || root > b {
            return Err(Diagnostic::RootOutsideBracket { root, a, b });
        }
    }

    Err(Diagnostic::IterationsExhausted {
        method: METHOD,
        max_iterations: params.max_iterations,
    })
}
