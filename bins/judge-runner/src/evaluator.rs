/// Test Evaluator - Pass/Fail Decisions
///
/// **Core Responsibility:**
/// Decide whether a single test case passes, using the evaluator the case
/// was built with.
///
/// **Critical Properties:**
/// - Knows nothing about solutions (they are never executed)
/// - Knows nothing about scoring or aggregation
/// - Decision is pure; trace lines go to the injected `TraceSink`
///
/// **Decision Rules:**
/// - Simple: input == expected
/// - Advanced(level): input == expected AND level > 2
/// - No normalization: comparison is exact and case sensitive

use crate::trace::TraceSink;
use judge_common::types::{CaseKind, Evaluator, TestCase};

/// Evaluate with the given strategy, announcing advanced runs on `sink`
pub fn evaluate_traced(
    evaluator: &Evaluator,
    input: &str,
    expected: &str,
    sink: &dyn TraceSink,
) -> bool {
    if let Evaluator::Advanced { complexity_level } = evaluator {
        sink.trace(&format!(
            "Executing with complexity level: {}",
            complexity_level
        ));
    }
    evaluator.evaluate(input, expected)
}

/// Run one test case against its own input/expected pair
///
/// Advanced cases announce themselves before delegating to the evaluator.
/// Idempotent: the same case always yields the same answer.
pub fn run_test(test: &TestCase, sink: &dyn TraceSink) -> bool {
    if let CaseKind::Advanced { complexity_level } = test.kind() {
        sink.trace(&format!(
            "Running advanced test with complexity level: {}",
            complexity_level
        ));
    }
    evaluate_traced(&test.evaluator(), test.input(), test.expected(), sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::MemorySink;

    #[test]
    fn test_simple_case_passes_on_equality() {
        let sink = MemorySink::new();

        assert!(run_test(&TestCase::simple("input1", "input1"), &sink));
        assert!(!run_test(&TestCase::simple("input1", "Input1"), &sink));
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_advanced_case_traces_case_then_evaluator() {
        let sink = MemorySink::new();

        let passed = run_test(&TestCase::advanced("same", "same", 3), &sink);

        assert!(passed);
        assert_eq!(
            sink.lines(),
            vec![
                "Running advanced test with complexity level: 3".to_string(),
                "Executing with complexity level: 3".to_string(),
            ]
        );
    }

    #[test]
    fn test_advanced_case_low_level_fails() {
        let sink = MemorySink::new();
        assert!(!run_test(&TestCase::advanced("same", "same", 2), &sink));
    }

    #[test]
    fn test_advanced_case_mismatch_fails_regardless_of_level() {
        let sink = MemorySink::new();
        for level in [3, 4, 5, 50] {
            assert!(!run_test(&TestCase::advanced("input2", "expected2", level), &sink));
        }
    }

    #[test]
    fn test_standard_case_with_advanced_evaluator_traces_once() {
        let sink = MemorySink::new();
        let test = TestCase::with_evaluator("x", "x", Evaluator::Advanced { complexity_level: 7 });

        assert!(run_test(&test, &sink));
        assert_eq!(sink.lines(), vec!["Executing with complexity level: 7".to_string()]);
    }

    #[test]
    fn test_traced_matches_pure_decision() {
        let sink = MemorySink::new();
        let evaluators = [
            Evaluator::Simple,
            Evaluator::Advanced { complexity_level: 2 },
            Evaluator::Advanced { complexity_level: 3 },
        ];
        let pairs = [("a", "a"), ("a", "b"), ("", "")];

        for evaluator in &evaluators {
            for (input, expected) in pairs {
                assert_eq!(
                    evaluate_traced(evaluator, input, expected, &sink),
                    evaluator.evaluate(input, expected)
                );
            }
        }
    }

    #[test]
    fn test_run_test_is_idempotent() {
        let sink = MemorySink::new();
        let test = TestCase::advanced("v", "v", 4);
        let first = run_test(&test, &sink);
        let second = run_test(&test.clone(), &sink);
        assert_eq!(first, second);
    }
}
