//! Method selection for root-finding runs.
//! - [`Method`]        : the four supported algorithms
//! - [`UnknownMethod`] : input-validation error for unrecognized names

use std::str::FromStr;

use thiserror::Error;

/// All supported root-finding methods.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Method {
    Bisection,
    FalsePosition,
    NewtonRaphson,
    Secant,
}

impl Method {
    pub const ALL: [Method; 4] = [
        Method::Bisection,
        Method::FalsePosition,
        Method::NewtonRaphson,
        Method::Secant,
    ];

    /// Canonical name used in records, diagnostics, and logs.
    pub const fn name(self) -> &'static str {
        match self {
            Method::Bisection     => "bisection",
            Method::FalsePosition => "false_position",
            Method::NewtonRaphson => "newton_raphson",
            Method::Secant        => "secant",
        }
    }

    /// Whether the method carries endpoint columns in its records.
    ///
    /// Newton-Raphson iterates a single point and has no endpoints;
    /// its records leave those fields unset.
    pub const fn uses_endpoints(self) -> bool {
        !matches!(self, Method::NewtonRaphson)
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Unrecognized method name.
///
/// Raised before any run is attempted; distinct from run failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown method: {got:?}")]
pub struct UnknownMethod {
    pub got: String,
}

impl FromStr for Method {
    type Err = UnknownMethod;

    /// Accepts the caller-facing camelCase names (`falsePosition`,
    /// `newtonRaphson`) as well as the canonical snake_case ones.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bisection"                        => Ok(Method::Bisection),
            "falsePosition" | "false_position" => Ok(Method::FalsePosition),
            "newtonRaphson" | "newton_raphson" => Ok(Method::NewtonRaphson),
            "secant"                           => Ok(Method::Secant),
            _ => Err(UnknownMethod { got: s.to_owned() }),
        }
    }
}
