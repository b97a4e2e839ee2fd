/// Scoring Pipeline - Submission Orchestration
///
/// **Responsibility:**
/// Run every test case of a task for a solution and record a submission.
///
/// **Architecture:**
/// 1. Walk the task's suite in its current order
/// 2. Use the evaluator (evaluator.rs) to decide each case
/// 3. Aggregate per-case results into a Submission
///
/// This module is the glue layer - it knows nothing about:
/// - How a case decides pass/fail (evaluator's job)
/// - How results are displayed (report's job)
///
/// The solution is carried through but never executed.

use crate::evaluator::run_test;
use crate::trace::TraceSink;
use judge_common::types::{ExecutionResult, Solution, Submission, Task, TestCase};
use tracing::{debug, info};

/// Evaluate a single case for a solution
///
/// The case is run exactly once, so `actual_output` and `passed` always agree.
pub fn run_test_case(
    _solution: &Solution,
    test: &TestCase,
    sink: &dyn TraceSink,
) -> ExecutionResult {
    ExecutionResult::from_outcome(run_test(test, sink))
}

/// Score a solution against every case of a task
///
/// ## Returns
/// A Submission with one result per case, in suite order. An empty suite
/// yields an empty result list and zero passed.
pub fn check_solution(solution: &Solution, task: &Task, sink: &dyn TraceSink) -> Submission {
    let suite = task.suite();

    info!(
        task = %task.description(),
        test_count = suite.count(),
        solution_size = solution.code.len(),
        "Checking solution"
    );

    let mut results = Vec::with_capacity(suite.count());
    for (idx, test) in suite.tests().iter().enumerate() {
        let result = run_test_case(solution, test, sink);
        debug!(
            test_num = idx + 1,
            input = %test.input(),
            expected = %test.expected(),
            passed = result.passed,
            "Test result"
        );
        results.push(result);
    }

    let submission = Submission::new(solution.clone(), results);

    info!(
        submission_id = %submission.id(),
        total_passed = submission.total_passed(),
        total_tests = submission.total_tests(),
        status = %submission.status(),
        "Solution checked"
    );

    submission
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::MemorySink;
    use judge_common::suite::TestSuite;
    use judge_common::types::SubmissionStatus;

    fn task_of(cases: Vec<TestCase>) -> Task {
        Task::new("pipeline", cases.into_iter().collect())
    }

    #[test]
    fn test_run_test_case_output_text() {
        let sink = MemorySink::new();
        let solution = Solution::new("code");

        let pass = run_test_case(&solution, &TestCase::simple("a", "a"), &sink);
        assert!(pass.passed);
        assert_eq!(pass.actual_output, "Passed");

        let fail = run_test_case(&solution, &TestCase::simple("a", "b"), &sink);
        assert!(!fail.passed);
        assert_eq!(fail.actual_output, "Failed");
    }

    #[test]
    fn test_run_test_case_evaluates_once() {
        let sink = MemorySink::new();
        run_test_case(&Solution::new(""), &TestCase::advanced("a", "a", 3), &sink);
        assert_eq!(sink.lines().len(), 2);
    }

    #[test]
    fn test_solution_text_does_not_affect_outcome() {
        let sink = MemorySink::new();
        let task = task_of(vec![TestCase::simple("x", "x"), TestCase::simple("x", "y")]);

        let a = check_solution(&Solution::new("print(1)"), &task, &sink);
        let b = check_solution(&Solution::new(""), &task, &sink);

        assert_eq!(a.results(), b.results());
    }

    #[test]
    fn test_simple_and_advanced_mix() {
        let sink = MemorySink::new();
        let task = task_of(vec![
            TestCase::simple("input1", "input1"),
            TestCase::advanced("input2", "expected2", 3),
        ]);

        let submission = check_solution(&Solution::new("user_solution_code"), &task, &sink);

        assert_eq!(submission.total_passed(), 1);
        assert_eq!(submission.results().len(), 2);
        assert!(submission.results()[0].passed);
        assert!(!submission.results()[1].passed);
        assert_eq!(submission.solution().code, "user_solution_code");
        assert_eq!(submission.status(), SubmissionStatus::Partial);
    }

    #[test]
    fn test_all_advanced_mismatches_fail() {
        let sink = MemorySink::new();
        let task = task_of(vec![
            TestCase::advanced("input1", "expected1", 5),
            TestCase::advanced("input2", "expected2", 4),
        ]);

        let submission = check_solution(&Solution::new("code"), &task, &sink);

        assert_eq!(submission.total_passed(), 0);
        assert_eq!(submission.results().len(), 2);
        assert_eq!(submission.status(), SubmissionStatus::Rejected);
    }

    #[test]
    fn test_empty_suite() {
        let sink = MemorySink::new();
        let task = Task::new("empty", TestSuite::new());

        let submission = check_solution(&Solution::new("code"), &task, &sink);

        assert!(submission.results().is_empty());
        assert_eq!(submission.total_passed(), 0);
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_results_follow_suite_order() {
        let sink = MemorySink::new();
        let mut suite = TestSuite::new();
        suite.add_test(TestCase::simple("b", "wrong"));
        suite.add_test(TestCase::simple("a", "a"));
        suite.sort_tests_by_input();
        let task = Task::new("sorted", suite);

        let submission = check_solution(&Solution::new(""), &task, &sink);

        let outcomes: Vec<bool> = submission.results().iter().map(|r| r.passed).collect();
        assert_eq!(outcomes, vec![true, false]);
    }

    #[test]
    fn test_total_passed_matches_results() {
        let sink = MemorySink::new();
        let cases: Vec<TestCase> = (0..20)
            .map(|i| {
                let expected = if i % 3 == 0 { format!("in{}", i) } else { "other".to_string() };
                if i % 2 == 0 {
                    TestCase::simple(format!("in{}", i), expected)
                } else {
                    TestCase::advanced(format!("in{}", i), expected, i % 5)
                }
            })
            .collect();
        let task = task_of(cases);

        let submission = check_solution(&Solution::new(""), &task, &sink);

        assert_eq!(submission.results().len(), 20);
        assert_eq!(
            submission.total_passed(),
            submission.results().iter().filter(|r| r.passed).count()
        );
    }
}
