// Built-in demonstration run, used when no task file is given
use crate::pipeline::check_solution;
use crate::report;
use crate::trace::TraceSink;
use judge_common::suite::TestSuite;
use judge_common::types::{Solution, Submission, Task, TestCase};
use serde::Serialize;
use std::sync::Arc;

pub const DEMO_TASK: &str = "Example Task";
pub const DEMO_LOOKUP: &str = "expected2";
pub const DEMO_MISSING_LOOKUP: &str = "expected4";

#[derive(Debug, Serialize)]
pub struct DemoReport {
    pub task: String,
    pub submission: Submission,
    pub suite_count: usize,
    pub inputs_before_sort: Vec<String>,
    pub inputs_after_sort: Vec<String>,
    #[serde(skip)]
    pub found: Option<Arc<TestCase>>,
    pub found_input: Option<String>,
    #[serde(skip)]
    pub missing: Option<Arc<TestCase>>,
    pub missing_input: Option<String>,
    pub total_suites_created: usize,
}

/// Scoring scenario: one simple case that passes, one advanced case that fails
pub fn scoring_task() -> Task {
    let mut suite = TestSuite::new();
    suite.add_test(TestCase::simple("input1", "input1"));
    suite.add_test(TestCase::advanced("input2", "expected2", 3));
    Task::new(DEMO_TASK, suite)
}

/// Suite operations scenario, deliberately out of order
pub fn unsorted_suite() -> TestSuite {
    let mut suite = TestSuite::new();
    suite.add_test(TestCase::simple("input3", "expected3"));
    suite.add_test(TestCase::simple("input1", "expected1"));
    suite.add_test(TestCase::advanced("input2", "expected2", 4));
    suite
}

pub fn run(solution: &Solution, sink: &dyn TraceSink) -> DemoReport {
    let task = scoring_task();
    let submission = check_solution(solution, &task, sink);

    let mut suite = unsorted_suite();
    let inputs_before_sort = owned(suite.inputs());
    suite.sort_tests_by_input();
    let inputs_after_sort = owned(suite.inputs());
    let found = suite.find_test_by_expected(DEMO_LOOKUP);
    let missing = suite.find_test_by_expected(DEMO_MISSING_LOOKUP);

    DemoReport {
        task: task.description().to_string(),
        suite_count: task.suite().count(),
        submission,
        inputs_before_sort,
        inputs_after_sort,
        found_input: found.as_ref().map(|t| t.input().to_string()),
        found,
        missing_input: missing.as_ref().map(|t| t.input().to_string()),
        missing,
        total_suites_created: TestSuite::total_suites_created(),
    }
}

fn owned(inputs: Vec<&str>) -> Vec<String> {
    inputs.into_iter().map(str::to_string).collect()
}

impl DemoReport {
    pub fn render_human(&self) -> String {
        let mut out = format!("Task: {}\n", self.task);
        out.push_str(&report::render_human(&self.submission, self.suite_count));
        out.push_str(&format!(
            "Inputs before sort: {}\n",
            self.inputs_before_sort.join(", ")
        ));
        out.push_str(&format!(
            "Inputs after sort: {}\n",
            self.inputs_after_sort.join(", ")
        ));
        out.push_str(&format!("Looking up {}: ", DEMO_LOOKUP));
        out.push_str(&report::render_found(self.found.as_deref()));
        out.push_str(&format!("Looking up {}: ", DEMO_MISSING_LOOKUP));
        out.push_str(&report::render_found(self.missing.as_deref()));
        out.push_str(&report::render_suites_created(self.total_suites_created));
        out
    }
}
