// Task definition loading for the judge runner
use anyhow::{bail, Context, Result};
use judge_common::suite::TestSuite;
use judge_common::types::{Evaluator, Task, TestCase};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCaseDefinition {
    pub input: String,
    pub expected: String,
    /// Present for advanced cases
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity_level: Option<i32>,
    /// Explicit evaluator for standard cases; simple when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluator: Option<Evaluator>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDefinition {
    pub description: String,
    #[serde(default)]
    pub tests: Vec<TestCaseDefinition>,
}

impl TestCaseDefinition {
    fn into_test_case(self) -> Result<TestCase> {
        match (self.complexity_level, self.evaluator) {
            (Some(level), None) => Ok(TestCase::advanced(self.input, self.expected, level)),
            (None, evaluator) => Ok(TestCase::with_evaluator(
                self.input,
                self.expected,
                evaluator.unwrap_or_default(),
            )),
            (Some(_), Some(_)) => bail!(
                "Test with input {:?} sets both complexity_level and evaluator",
                self.input
            ),
        }
    }
}

impl TaskDefinition {
    /// Build the task, constructing exactly one suite
    pub fn into_task(self) -> Result<Task> {
        if self.description.trim().is_empty() {
            bail!("Task description cannot be empty");
        }

        let mut suite = TestSuite::new();
        for (idx, test) in self.tests.into_iter().enumerate() {
            let case = test
                .into_test_case()
                .with_context(|| format!("Invalid test #{}", idx + 1))?;
            suite.add_test(case);
        }

        Ok(Task::new(self.description, suite))
    }
}

/// Loads task definitions from JSON files
pub struct TaskLoader;

impl TaskLoader {
    /// Load a task from a JSON file
    pub fn load(path: &Path) -> Result<Task> {
        if !path.exists() {
            bail!("Task file not found: {}", path.display());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read task file {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to load task file {}", path.display()))
    }

    /// Parse a task from JSON text
    pub fn parse(content: &str) -> Result<Task> {
        let definition: TaskDefinition =
            serde_json::from_str(content).context("Failed to parse task definition")?;
        definition.into_task()
    }
}
