// Console and JSON rendering of submissions and suite listings
use anyhow::{Context, Result};
use judge_common::suite::TestSuite;
use judge_common::types::{Submission, TestCase};
use serde::Serialize;

pub fn render_human(submission: &Submission, suite_count: usize) -> String {
    let mut out = format!(
        "Total tests passed: {} out of {}\n",
        submission.total_passed(), suite_count
    );
    for (idx, result) in submission.results().iter().enumerate() {
        let mark = if result.passed { "✓" } else { "✗" };
        out.push_str(&format!(
            "  {} Test {}: {}\n",
            mark,
            idx + 1,
            result.actual_output
        ));
    }
    out
}

pub fn render_inputs(label: &str, suite: &TestSuite) -> String {
    format!("{}: {}\n", label, suite.inputs().join(", "))
}

pub fn render_found(found: Option<&TestCase>) -> String {
    match found {
        Some(test) => format!(
            "Found test: input={}, expected={}\n",
            test.input(),
            test.expected()
        ),
        None => "Test not found.\n".to_string(),
    }
}

pub fn render_suites_created(total: usize) -> String {
    format!("Total Test Suites Created: {}\n", total)
}

pub fn render_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize report")
}

#[cfg(test)]
mod tests {
    use super::*;
    use judge_common::types::{ExecutionResult, Solution};

    #[test]
    fn test_render_human() {
        let submission = Submission::new(
            Solution::new("code"),
            vec![ExecutionResult::from_outcome(true), ExecutionResult::from_outcome(false)],
        );

        let text = render_human(&submission, 2);

        assert!(text.starts_with("Total tests passed: 1 out of 2\n"));
        assert!(text.contains("Test 1: Passed"));
        assert!(text.contains("Test 2: Failed"));
    }

    #[test]
    fn test_render_inputs() {
        let suite: TestSuite = vec![TestCase::simple("b", "1"), TestCase::simple("a", "2")]
            .into_iter()
            .collect();
        assert_eq!(render_inputs("Before sort", &suite), "Before sort: b, a\n");
    }

    #[test]
    fn test_render_found() {
        let test = TestCase::simple("input2", "expected2");
        assert_eq!(
            render_found(Some(&test)),
            "Found test: input=input2, expected=expected2\n"
        );
        assert_eq!(render_found(None), "Test not found.\n");
    }

    #[test]
    fn test_render_json_submission() {
        let submission = Submission::new(
            Solution::new("code"),
            vec![ExecutionResult::from_outcome(true)],
        );

        let json = render_json(&submission).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["total_passed"], 1);
        assert_eq!(value["results"][0]["actual_output"], "Passed");
        assert_eq!(value["solution"]["code"], "code");
    }
}
