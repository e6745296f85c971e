//! tests for the secant run
use rootspan::{find_root, Diagnostic, DiagnosticKind, Method, ParamError, RunParameters};

type TestResult = Result<(), ParamError>;

#[test]
fn converges_on_cos_x_minus_x() -> TestResult {
    let tol = 1e-6;
    let params = RunParameters::new(tol)
        .with_bracket(0.0, 1.0)
        .with_max_iterations(20);

    let report = find_root(Method::Secant, |x| Ok(x.cos() - x), &params)?;

    let root = report.root().expect("should converge");
    assert!((root - 0.739085).abs() < 1e-5);

    let last = report.records().last().expect("at least one row");
    assert!(last.f_root.abs() < tol);
    Ok(())
}

#[test]
fn needs_no_sign_change() -> TestResult {
    // both starting values are on the same side of the root at 2
    let params = RunParameters::new(1e-6)
        .with_bracket(0.0, 1.0)
        .with_max_iterations(20);

    let report = find_root(Method::Secant, |x| Ok((x - 2.0) * (x - 5.0)), &params)?;

    let root = report.root().expect("should converge");
    assert!((root - 2.0).abs() < 1e-5);
    Ok(())
}

#[test]
fn equal_starting_values_fail_immediately() -> TestResult {
    let params = RunParameters::new(1e-6).with_bracket(-1.0, 1.0);

    let report = find_root(Method::Secant, |x| Ok(x * x), &params)?;

    assert!(!report.result().is_converged());
    assert!(report.records().is_empty());

    let diagnostic = report.diagnostic().expect("failed runs carry a diagnostic");
    assert_eq!(diagnostic.kind(), DiagnosticKind::InvalidPrecondition);
    assert!(matches!(diagnostic, Diagnostic::EqualEndpointValues { .. }));
    Ok(())
}

#[test]
fn window_slides_each_iteration() -> TestResult {
    let params = RunParameters::new(1e-6)
        .with_bracket(0.0, 1.0)
        .with_max_iterations(20);

    let report = find_root(Method::Secant, |x| Ok(x.cos() - x), &params)?;

    let records = report.records();
    for pair in records.windows(2) {
        let prev = pair[0].endpoints.expect("secant rows carry both points");
        let next = pair[1].endpoints.expect("secant rows carry both points");
        assert_eq!(next.a, prev.b);
        assert_eq!(next.b, pair[0].root);
    }
    Ok(())
}

#[test]
fn exhaustion_produces_exactly_max_iterations_records() -> TestResult {
    let niter = 3;
    let params = RunParameters::new(1e-300)
        .with_bracket(0.0, 1.0)
        .with_max_iterations(niter);

    let report = find_root(Method::Secant, |x| Ok(x.cos() - x), &params)?;

    assert!(!report.result().is_converged());
    assert_eq!(report.records().len(), niter);

    let diagnostic = report.diagnostic().expect("failed runs carry a diagnostic");
    assert_eq!(diagnostic.kind(), DiagnosticKind::Exhausted);
    Ok(())
}
