use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::suite::TestSuite;

pub const PASSED: &str = "Passed";
pub const FAILED: &str = "Failed";

/// Strategy that decides pass/fail for one test case
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Evaluator {
    /// Exact string equality
    #[default]
    Simple,
    /// Exact string equality, gated on `complexity_level > 2`
    Advanced { complexity_level: i32 },
}

impl Evaluator {
    /// Pure pass/fail decision, no tracing
    pub fn evaluate(&self, input: &str, expected: &str) -> bool {
        match self {
            Evaluator::Simple => input == expected,
            Evaluator::Advanced { complexity_level } => {
                input == expected && *complexity_level > 2
            }
        }
    }
}

/// Case-level tag. Advanced cases announce their complexity before delegating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CaseKind {
    Standard,
    Advanced { complexity_level: i32 },
}

/// One input/expected pair bound to an evaluator.
///
/// Fields are private: a case cannot change after construction, and an
/// advanced case always carries the matching advanced evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCase {
    input: String,
    expected: String,
    kind: CaseKind,
    evaluator: Evaluator,
}

impl TestCase {
    pub fn simple(input: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::with_evaluator(input, expected, Evaluator::Simple)
    }

    pub fn advanced(
        input: impl Into<String>,
        expected: impl Into<String>,
        complexity_level: i32,
    ) -> Self {
        Self {
            input: input.into(),
            expected: expected.into(),
            kind: CaseKind::Advanced { complexity_level },
            evaluator: Evaluator::Advanced { complexity_level },
        }
    }

    /// Standard case with an explicitly chosen evaluator
    pub fn with_evaluator(
        input: impl Into<String>,
        expected: impl Into<String>,
        evaluator: Evaluator,
    ) -> Self {
        Self {
            input: input.into(),
            expected: expected.into(),
            kind: CaseKind::Standard,
            evaluator,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn expected(&self) -> &str {
        &self.expected
    }

    pub fn kind(&self) -> CaseKind {
        self.kind
    }

    pub fn evaluator(&self) -> Evaluator {
        self.evaluator
    }

    pub fn complexity_level(&self) -> Option<i32> {
        match self.kind {
            CaseKind::Advanced { complexity_level } => Some(complexity_level),
            CaseKind::Standard => None,
        }
    }
}

/// A described test suite. The suite is owned by value.
#[derive(Debug, Clone)]
pub struct Task {
    description: String,
    suite: TestSuite,
}

impl Task {
    pub fn new(description: impl Into<String>, suite: TestSuite) -> Self {
        Self {
            description: description.into(),
            suite,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn suite(&self) -> &TestSuite {
        &self.suite
    }
}

/// Candidate answer. Opaque: never parsed or executed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub code: String,
}

impl Solution {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub actual_output: String,
    pub passed: bool,
}

impl ExecutionResult {
    pub fn from_outcome(passed: bool) -> Self {
        Self {
            actual_output: if passed { PASSED } else { FAILED }.to_string(),
            passed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    /// Every test passed
    Accepted,
    /// At least one test passed, at least one failed
    Partial,
    /// Nothing passed, or there was nothing to run
    Rejected,
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Accepted => write!(f, "accepted"),
            SubmissionStatus::Partial => write!(f, "partial"),
            SubmissionStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// Wire shape of a submission. `total_passed` here is untrusted.
#[derive(Debug, Deserialize)]
struct SubmissionRecord {
    id: Uuid,
    submitted_at: DateTime<Utc>,
    solution: Solution,
    #[serde(default)]
    results: Vec<ExecutionResult>,
}

/// Recorded outcome of one solution against one task.
///
/// `total_passed` always equals the number of passed results: it is derived
/// on construction and recomputed on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "SubmissionRecord")]
pub struct Submission {
    id: Uuid,
    submitted_at: DateTime<Utc>,
    solution: Solution,
    results: Vec<ExecutionResult>,
    total_passed: usize,
}

impl From<SubmissionRecord> for Submission {
    fn from(record: SubmissionRecord) -> Self {
        Self::assemble(record.id, record.submitted_at, record.solution, record.results)
    }
}

impl Submission {
    /// Build a submission, deriving `total_passed` from the results
    pub fn new(solution: Solution, results: Vec<ExecutionResult>) -> Self {
        Self::assemble(Uuid::new_v4(), Utc::now(), solution, results)
    }

    fn assemble(
        id: Uuid,
        submitted_at: DateTime<Utc>,
        solution: Solution,
        results: Vec<ExecutionResult>,
    ) -> Self {
        let total_passed = results.iter().filter(|r| r.passed).count();
        Self {
            id,
            submitted_at,
            solution,
            results,
            total_passed,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    pub fn results(&self) -> &[ExecutionResult] {
        &self.results
    }

    pub fn total_passed(&self) -> usize {
        self.total_passed
    }

    pub fn total_tests(&self) -> usize {
        self.results.len()
    }

    pub fn total_failed(&self) -> usize {
        self.results.iter().filter(|r| !r.passed).count()
    }

    /// Fraction of passed tests in `[0, 1]`; 0.0 for an empty submission
    pub fn pass_rate(&self) -> f64 {
        if self.results.is_empty() {
            0.0
        } else {
            self.total_passed as f64 / self.results.len() as f64
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        if self.results.is_empty() || self.total_passed == 0 {
            SubmissionStatus::Rejected
        } else if self.total_passed == self.results.len() {
            SubmissionStatus::Accepted
        } else {
            SubmissionStatus::Partial
        }
    }
}
