//! Known-answer tests: RFC 8032 §7.1, the router fixture, malformed inputs
//! and small-order public keys, each under both verification modes.

use edsig_sign::VerifyMode;
use edsig_tests::suites::vectors::{load_ed25519, run_case, run_suite};

#[test]
fn test_ed25519_vector_suite() {
    let suite = load_ed25519().expect("vector file should parse");
    assert_eq!(suite.algorithm, "Ed25519");

    let report = run_suite(&suite).expect("modes should be known");
    for failure in &report.failures {
        eprintln!("{}", failure);
    }
    assert!(report.is_success(), "{} vector failures", report.failures.len());
    assert_eq!(report.passed, 28);
}

#[test]
fn test_rfc8032_vectors_sign_exactly() {
    let suite = load_ed25519().unwrap();
    let rfc = suite
        .groups
        .iter()
        .find(|g| g.name == "rfc8032" && g.mode == "cofactored")
        .unwrap();

    assert_eq!(rfc.tests.len(), 3);
    for case in &rfc.tests {
        assert!(case.seed.is_some());
        assert!(case.valid);
        run_case(case, VerifyMode::Cofactored).unwrap();
    }
}

#[test]
fn test_torsion_key_splits_modes() {
    let suite = load_ed25519().unwrap();
    let torsion: Vec<_> = suite.groups.iter().filter(|g| g.name == "torsion").collect();
    assert_eq!(torsion.len(), 2);

    // the same bytes flip verdict between modes
    let cofactored = torsion.iter().find(|g| g.mode == "cofactored").unwrap();
    let cofactorless = torsion.iter().find(|g| g.mode == "cofactorless").unwrap();
    let strict = cofactored.tests.iter().find(|c| c.id == 21).unwrap();
    let exact = cofactorless.tests.iter().find(|c| c.id == 121).unwrap();

    assert_eq!(strict.signature, exact.signature);
    assert!(strict.valid);
    assert!(!exact.valid);
    run_case(strict, VerifyMode::Cofactored).unwrap();
    run_case(exact, VerifyMode::Cofactorless).unwrap();
}
