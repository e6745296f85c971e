//! Classical root-finding for single-variable real functions, with a full
//! per-iteration audit trail.
//!
//! Four methods are provided: bisection, false position (regula falsi),
//! Newton-Raphson, and secant. Each run is a bounded loop that appends one
//! [`IterationRecord`] per pass and ends in exactly one terminal state:
//! converged, detected-invalid-input, or iteration exhaustion. The caller
//! receives a [`RunReport`] holding the binary [`RunResult`], the ordered
//! record sequence, and (on failure) the underlying [`Diagnostic`].
//!
//! The function under search can be any `FnMut(f64) -> Result<f64, EvalError>`
//! closure, or an [`Equation`] parsed from an expression string by the
//! [`expr`] module:
//!
//! ```
//! use rootspan::{solve, RunParameters, RunResult};
//!
//! let params = RunParameters::new(1e-4).with_bracket(0.0, 3.0);
//! let report = solve("bisection", "x^2 - 4", &params).unwrap();
//!
//! match report.result() {
//!     RunResult::Converged(root) => assert!((root - 2.0).abs() < 1e-3),
//!     RunResult::Failed => unreachable!(),
//! }
//! assert!(!report.records().is_empty());
//! ```

pub mod expr;
pub mod solver;

pub use expr::{Equation, EvalError, ParseError};
pub use solver::diagnostics::{Diagnostic, DiagnosticKind};
pub use solver::method::{Method, UnknownMethod};
pub use solver::params::{ParamError, RunParameters};
pub use solver::report::{Endpoints, IterationRecord, RunReport, RunResult};
pub use solver::run::{find_root, solve, InputError};
