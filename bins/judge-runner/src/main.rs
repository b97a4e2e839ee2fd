mod config;
mod demo;
mod evaluator;
mod pipeline;
mod report;
mod trace;


use anyhow::Result;
use clap::Parser;
use config::TaskLoader;
use judge_common::config::{OutputFormat, RunnerConfig};
use judge_common::suite::TestSuite;
use judge_common::types::{Solution, Task};
use std::path::PathBuf;
use trace::{TraceSink, TracingSink};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "judge-runner")]
#[command(about = "Judge Runner - Score a solution against a task's test suite", long_about = None)]
struct Cli {
    /// Task definition file (JSON); runs the built-in demo when omitted
    #[arg(short, long)]
    task: Option<PathBuf>,

    /// Solution text (never executed)
    #[arg(short, long)]
    solution: Option<String>,

    /// Output format: human or json
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Sort the task's tests by input before scoring
    #[arg(long, default_value = "false")]
    sort: bool,
}

fn main() -> Result<()> {
    // Initialize tracing subscriber; stdout is reserved for the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(true)
        .init();

    let cli = Cli::parse();
    let config = RunnerConfig::from_env();
    for (variable, reason) in &config.rejected {
        warn!(variable = %variable, reason = %reason, "Ignoring invalid configuration value");
    }

    let format = cli.format.unwrap_or(config.output_format);
    let solution = Solution::new(cli.solution.unwrap_or(config.solution));
    let sink = TracingSink;

    info!(format = %format, "Judge runner starting");

    let output = match cli.task {
        Some(path) => {
            info!(path = %path.display(), "Loading task file");
            let task = TaskLoader::load(&path)?;
            run_task(task, cli.sort, &solution, format, &sink)?
        }
        None => {
            let demo = demo::run(&solution, &sink);
            match format {
                OutputFormat::Human => demo.render_human(),
                OutputFormat::Json => report::render_json(&demo)?,
            }
        }
    };

    print!("{}", output);
    if !output.ends_with('\n') {
        println!();
    }

    Ok(())
}

fn run_task(
    task: Task,
    sort: bool,
    solution: &Solution,
    format: OutputFormat,
    sink: &dyn TraceSink,
) -> Result<String> {
    let mut out = format!("Task: {}\n", task.description());

    let task = if sort {
        let mut suite = task.suite().clone();
        out.push_str(&report::render_inputs("Inputs before sort", &suite));
        suite.sort_tests_by_input();
        out.push_str(&report::render_inputs("Inputs after sort", &suite));
        Task::new(task.description(), suite)
    } else {
        task
    };

    let submission = pipeline::check_solution(solution, &task, sink);

    match format {
        OutputFormat::Human => {
            out.push_str(&report::render_human(&submission, task.suite().count()));
            out.push_str(&report::render_suites_created(TestSuite::total_suites_created()));
            Ok(out)
        }
        OutputFormat::Json => report::render_json(&submission),
    }
}
