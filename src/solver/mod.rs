// shared iteration/convergence contract
pub mod diagnostics;
pub mod method;
pub mod params;
pub mod report;
pub mod run;
pub(crate) mod trace;

// algorithms
pub mod bisection;
pub mod derivative;
pub mod false_position;
pub mod newton;
pub mod secant;
