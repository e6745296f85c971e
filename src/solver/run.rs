//! Run invocation: method dispatch and the expression-string entry point.

use thiserror::Error;

use crate::expr::{Equation, EvalError};

use super::bisection::bisection;
use super::diagnostics::Diagnostic;
use super::false_position::false_position;
use super::method::{Method, UnknownMethod};
use super::newton::newton_raphson;
use super::params::{ParamError, RunParameters};
use super::report::RunReport;
use super::secant::secant;
use super::trace::Trace;

/// Input-validation failures.
///
/// These are rejected before any run is attempted, unlike run failures,
/// which produce a [`RunReport`] with a diagnostic and whatever trace
/// accumulated.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error(transparent)]
    UnknownMethod(#[from] UnknownMethod),

    #[error(transparent)]
    Parameters(#[from] ParamError),
}

/// Runs the selected method against an injected function.
///
/// The function is an opaque capability: any `f(x)` that can fail with an
/// [`EvalError`]. Its failures, and non-finite values it produces, end the
/// run as a reported evaluation failure rather than a panic.
///
/// Validates `params` first; an invalid set is an input error and no run is
/// attempted. The report always carries the full record sequence, including
/// for failed runs.
pub fn find_root<F>(method: Method, f: F, params: &RunParameters) -> Result<RunReport, ParamError>
where
    F: FnMut(f64) -> Result<f64, EvalError>,
{
    params.validate()?;
    Ok(match method {
        Method::Bisection     => bisection(f, params),
        Method::FalsePosition => false_position(f, params),
        Method::NewtonRaphson => newton_raphson(f, params),
        Method::Secant        => secant(f, params),
    })
}

/// Parses `expression` into an [`Equation`] and runs `method` (by name)
/// against it.
///
/// An unrecognized method name or invalid parameters are input errors; no
/// run happens. An expression that fails to parse is different: the fault is
/// caught at this boundary and surfaced as a *failed run* — `Ok` report,
/// `Failed` result, malformed-expression diagnostic, empty trace.
pub fn solve(method: &str, expression: &str, params: &RunParameters) -> Result<RunReport, InputError> {
    let method: Method = method.parse()?;
    params.validate().map_err(InputError::Parameters)?;

    let equation = match Equation::parse(expression) {
        Ok(equation) => equation,
        Err(source) => {
            return Ok(Trace::new(method).failed(Diagnostic::MalformedExpression { source }));
        }
    };

    let f = |x: f64| equation.eval(x);
    find_root(method, f, params).map_err(InputError::Parameters)
}
