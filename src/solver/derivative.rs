//! Numeric differentiation for the Newton-Raphson update.

use crate::expr::EvalError;

/// Default finite-difference step.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Central-difference approximation of `f'(x)`:
/// `(f(x + epsilon) - f(x - epsilon)) / (2 * epsilon)`.
///
/// Pure, with no failure path of its own; any error from `f` propagates
/// unchanged. The step size is a known precision/stability trade-off: too
/// large biases the estimate, too small loses digits to floating-point
/// cancellation. The default suits well-scaled inputs; callers working far
/// from unit scale can pick their own via [`derivative_with_epsilon`].
pub fn derivative<F>(f: &mut F, x: f64) -> Result<f64, EvalError>
where
    F: FnMut(f64) -> Result<f64, EvalError>,
{
    derivative_with_epsilon(f, x, DEFAULT_EPSILON)
}

/// [`derivative`] with a caller-chosen step.
pub fn derivative_with_epsilon<F>(f: &mut F, x: f64, epsilon: f64) -> Result<f64, EvalError>
where
    F: FnMut(f64) -> Result<f64, EvalError>,
{
    Ok((f(x + epsilon)? - f(x - epsilon)?) / (2.0 * epsilon))
}
