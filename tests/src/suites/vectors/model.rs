//! Pure data model for the JSON test vectors.

use serde::Deserialize;

/// One signature check
#[derive(Debug, Clone, Deserialize)]
pub struct TestCase {
    pub id: u64,
    #[serde(default)]
    pub comment: String,
    /// Hex seed; when present the derived key and signature are checked too
    #[serde(default)]
    pub seed: Option<String>,
    pub public_key: String,
    pub message: String,
    pub signature: String,
    /// Expected verdict of `verify`
    pub valid: bool,
}

/// Cases sharing a verification mode
#[derive(Debug, Clone, Deserialize)]
pub struct TestGroup {
    pub name: String,
    /// `"cofactored"` or `"cofactorless"`
    pub mode: String,
    pub tests: Vec<TestCase>,
}

/// A whole vector file
#[derive(Debug, Clone, Deserialize)]
pub struct TestSuite {
    pub algorithm: String,
    pub groups: Vec<TestGroup>,
}
