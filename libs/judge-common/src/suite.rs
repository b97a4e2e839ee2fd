use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::types::TestCase;

/// Suites constructed through `TestSuite::new` since process start.
/// Copies made with `Clone` are not counted.
static TOTAL_SUITES_CREATED: AtomicUsize = AtomicUsize::new(0);

/// Ordered collection of test cases
///
/// Cases are held behind `Arc` so a case handed out by
/// `find_test_by_expected` stays valid while the suite is re-sorted or
/// dropped. Cases are immutable, so aliases never observe a change.
#[derive(Debug, Clone)]
pub struct TestSuite {
    tests: Vec<Arc<TestCase>>,
}

impl TestSuite {
    pub fn new() -> Self {
        TOTAL_SUITES_CREATED.fetch_add(1, Ordering::Relaxed);
        Self { tests: Vec::new() }
    }

    /// Append a case, keeping insertion order
    pub fn add_test(&mut self, test: impl Into<Arc<TestCase>>) {
        self.tests.push(test.into());
    }

    pub fn tests(&self) -> &[Arc<TestCase>] {
        &self.tests
    }

    pub fn count(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Inputs in current order
    pub fn inputs(&self) -> Vec<&str> {
        self.tests.iter().map(|t| t.input()).collect()
    }

    /// Stable ascending sort by input
    pub fn sort_tests_by_input(&mut self) {
        self.tests.sort_by(|a, b| a.input().cmp(b.input()));
    }

    /// First case, in current order, whose expected value equals `expected`
    pub fn find_test_by_expected(&self, expected: &str) -> Option<Arc<TestCase>> {
        self.tests
            .iter()
            .find(|t| t.expected() == expected)
            .cloned()
    }

    pub fn total_suites_created() -> usize {
        TOTAL_SUITES_CREATED.load(Ordering::Relaxed)
    }
}

impl Default for TestSuite {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<TestCase> for TestSuite {
    fn from_iter<I: IntoIterator<Item = TestCase>>(iter: I) -> Self {
        let mut suite = TestSuite::new();
        for test in iter {
            suite.add_test(test);
        }
        suite
    }
}
