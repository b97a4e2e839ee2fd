// Runner configuration, read from the environment

use std::str::FromStr;

pub const ENV_OUTPUT_FORMAT: &str = "JUDGE_OUTPUT_FORMAT";
pub const ENV_SOLUTION: &str = "JUDGE_SOLUTION";
pub const DEFAULT_SOLUTION: &str = "user_solution_code";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    pub output_format: OutputFormat,
    pub solution: String,
    /// Values that were present but could not be used, as `(variable, reason)`
    pub rejected: Vec<(String, String)>,
}

impl RunnerConfig {
    /// Read from process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read through an arbitrary lookup; invalid values fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_OUTPUT_FORMAT) {
            match raw.parse() {
                Ok(format) => config.output_format = format,
                Err(reason) => config.rejected.push((ENV_OUTPUT_FORMAT.to_string(), reason)),
            }
        }

        if let Some(solution) = lookup(ENV_SOLUTION) {
            config.solution = solution;
        }

        config
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            solution: DEFAULT_SOLUTION.to_string(),
            rejected: Vec::new(),
        }
    }
}
