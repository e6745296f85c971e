//! tests for the false position (regula falsi) run
use rootspan::{find_root, Diagnostic, DiagnosticKind, Method, ParamError, RunParameters};

type TestResult = Result<(), ParamError>;

#[test]
fn converges_on_x_cubed_minus_x_minus_2() -> TestResult {
    let tol = 1e-4;
    let params = RunParameters::new(tol)
        .with_bracket(1.0, 2.0)
        .with_max_iterations(20);

    let report = find_root(Method::FalsePosition, |x| Ok(x * x * x - x - 2.0), &params)?;

    let root = report.root().expect("should converge within 20 iterations");
    assert!((root - 1.521380).abs() < 1e-3);

    let last = report.records().last().expect("at least one row");
    assert!(last.f_root.abs() < tol);
    Ok(())
}

#[test]
fn records_stay_inside_the_bracket() -> TestResult {
    let params = RunParameters::new(1e-4)
        .with_bracket(1.0, 2.0)
        .with_max_iterations(20);

    let report = find_root(Method::FalsePosition, |x| Ok(x * x * x - x - 2.0), &params)?;

    for (i, record) in report.records().iter().enumerate() {
        assert_eq!(record.index, i + 1);
        let endpoints = record.endpoints.expect("false position rows carry endpoints");
        assert!(endpoints.a <= record.root && record.root <= endpoints.b);
    }
    Ok(())
}

#[test]
fn equal_endpoint_values_fail_immediately() -> TestResult {
    // f(-1) == f(1) == 1: the interpolation denominator would be zero
    let params = RunParameters::new(1e-4).with_bracket(-1.0, 1.0);

    let report = find_root(Method::FalsePosition, |x| Ok(x * x), &params)?;

    assert!(!report.result().is_converged());
    assert!(report.records().is_empty());

    let diagnostic = report.diagnostic().expect("failed runs carry a diagnostic");
    assert_eq!(diagnostic.kind(), DiagnosticKind::InvalidPrecondition);
    assert!(matches!(diagnostic, Diagnostic::EqualEndpointValues { .. }));
    Ok(())
}

#[test]
fn escaping_estimate_trips_the_divergence_guard() -> TestResult {
    // f(0) = 1, f(1) = 2, so the first interpolated estimate is -1, and
    // f(-1) = -1 pulls the update to b = -1; the estimate now sits outside
    // the updated interval and the run must fail rather than stall.
    let f = |x: f64| Ok(-0.5 * x * x + 1.5 * x + 1.0);
    let params = RunParameters::new(1e-4).with_bracket(0.0, 1.0);

    let report = find_root(Method::FalsePosition, f, &params)?;

    assert!(!report.result().is_converged());
    assert_eq!(report.records().len(), 1);

    let diagnostic = report.diagnostic().expect("failed runs carry a diagnostic");
    assert_eq!(diagnostic.kind(), DiagnosticKind::DivergedOutsideBracket);
    assert!(matches!(
        diagnostic,
        Diagnostic::RootOutsideBracket { root, .. } if *root == -1.0
    ));
    Ok(())
}

#[test]
fn exhaustion_reports_every_iteration() -> TestResult {
    let niter = 5;
    let params = RunParameters::new(1e-15)
        .with_bracket(1.0, 2.0)
        .with_max_iterations(niter);

    let report = find_root(Method::FalsePosition, |x| Ok(x * x * x - x - 2.0), &params)?;

    assert!(!report.result().is_converged());
    assert_eq!(report.records().len(), niter);

    let diagnostic = report.diagnostic().expect("failed runs carry a diagnostic");
    assert_eq!(diagnostic.kind(), DiagnosticKind::Exhausted);
    Ok(())
}
