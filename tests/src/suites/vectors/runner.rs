//! Executes vector cases against the signer and verifier.

use super::error::{EngineError, Result};
use super::model::{TestCase, TestSuite};
use edsig_sign::{Signer, Verifier, VerifyMode};

/// Tally of a suite run
#[derive(Debug, Default)]
pub struct SuiteReport {
    pub passed: usize,
    pub failures: Vec<EngineError>,
}

impl SuiteReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

fn parse_mode(raw: &str) -> Result<VerifyMode> {
    match raw {
        "cofactored" => Ok(VerifyMode::Cofactored),
        "cofactorless" => Ok(VerifyMode::Cofactorless),
        other => Err(EngineError::UnknownMode(other.to_string())),
    }
}

fn expect_eq(field: &'static str, expected: &[u8], actual: &[u8]) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(EngineError::Mismatch {
            field,
            expected: hex::encode(expected),
            actual: hex::encode(actual),
        })
    }
}

/// Run one case under `mode`
pub fn run_case(case: &TestCase, mode: VerifyMode) -> Result<()> {
    let public_key = hex::decode(&case.public_key)?;
    let message = hex::decode(&case.message)?;
    let signature = hex::decode(&case.signature)?;

    if let Some(seed) = &case.seed {
        let signer = Signer::from_seed(&hex::decode(seed)?)?;
        expect_eq("public key", &public_key, signer.public_key().as_bytes())?;
        if case.valid {
            expect_eq("signature", &signature, signer.sign(&message).as_ref())?;
        }
    }

    let verifier = Verifier::from_bytes(&public_key)?.with_mode(mode);
    let verdict = verifier.verify(&message, &signature);
    if verdict != case.valid {
        return Err(EngineError::Mismatch {
            field: "verdict",
            expected: case.valid.to_string(),
            actual: verdict.to_string(),
        });
    }

    Ok(())
}

/// Run every case in `suite`, collecting failures instead of stopping
pub fn run_suite(suite: &TestSuite) -> Result<SuiteReport> {
    let mut report = SuiteReport::default();

    for group in &suite.groups {
        let mode = parse_mode(&group.mode)?;
        for case in &group.tests {
            match run_case(case, mode) {
                Ok(()) => report.passed += 1,
                Err(e) => report.failures.push(EngineError::Case {
                    id: case.id,
                    source: Box::new(e),
                }),
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode() {
        assert_eq!(parse_mode("cofactored").unwrap(), VerifyMode::Cofactored);
        assert_eq!(parse_mode("cofactorless").unwrap(), VerifyMode::Cofactorless);
        assert!(matches!(
            parse_mode("strict"),
            Err(EngineError::UnknownMode(_))
        ));
    }

    #[test]
    fn test_mismatched_verdict_is_reported() {
        let case = TestCase {
            id: 1,
            comment: String::new(),
            seed: None,
            public_key: "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a".into(),
            message: String::new(),
            signature: "00".repeat(64),
            valid: true,
        };
        assert!(matches!(
            run_case(&case, VerifyMode::Cofactored),
            Err(EngineError::Mismatch { field: "verdict", .. })
        ));
    }
}
