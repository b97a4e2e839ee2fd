// Diagnostic side channel for evaluation
//
// Evaluation decisions are pure; the lines an advanced case or evaluator
// announces go through a sink the caller provides.

use tracing::info;

pub trait TraceSink {
    fn trace(&self, line: &str);
}

/// Forwards trace lines to the tracing subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn trace(&self, line: &str) {
        info!(target: "judge::trace", "{}", line);
    }
}

/// Collects trace lines in memory
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl TraceSink for MemorySink {
    fn trace(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}
