//! Geosemantics CLI
//!
//! Evaluates JSON problem files and reports graded results.

use anyhow::{Context, Result};
use clap::Parser;
use geosemantics_core::loader::json;
use geosemantics_core::{EvaluationProblem, Evaluator, EvaluatorConfig, FunctionRegistry};
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "geo-eval")]
#[command(about = "Evaluate geometric formulas against coordinate assignments")]
struct Args {
    /// Problem file (JSON) or a directory of problem files
    path: PathBuf,

    /// Tolerance when comparing against a problem's expected confidence
    #[arg(long, default_value_t = 1e-6)]
    tolerance: f64,

    /// Flag results whose confidence falls below this threshold
    #[arg(long)]
    min_confidence: Option<f64>,

    /// Maximum formula nesting depth
    #[arg(long, default_value_t = 256)]
    max_depth: usize,

    /// Emit one JSON object per problem
    #[arg(long)]
    json: bool,
}

fn load(args: &Args) -> Result<Vec<EvaluationProblem>> {
    if args.path.is_dir() {
        json::load_problems(&args.path)
            .with_context(|| format!("loading problems from {}", args.path.display()))
    } else {
        let problem = json::load_problem(&args.path)
            .with_context(|| format!("loading {}", args.path.display()))?;
        Ok(vec![problem])
    }
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let problems = load(&args)?;
    info!(count = problems.len(), "loaded problems");

    let registry = FunctionRegistry::standard();
    let evaluator = Evaluator::with_config(&registry, EvaluatorConfig { max_depth: args.max_depth });
    info!(operations = evaluator.registry().len(), max_depth = args.max_depth, "evaluator ready");

    let mut failures = 0usize;
    for problem in &problems {
        let result = problem.evaluate(&evaluator);

        let (status, confidence) = match &result {
            Ok(value) => {
                let confidence = value.confidence();
                let status = if !problem.matches_expectation(value, args.tolerance) {
                    failures += 1;
                    "mismatch"
                } else if matches!((args.min_confidence, confidence), (Some(min), Some(c)) if c < min) {
                    "below-threshold"
                } else {
                    "ok"
                };
                (status, confidence)
            }
            Err(_) => {
                failures += 1;
                ("error", None)
            }
        };

        if args.json {
            let line = match &result {
                Ok(value) => json!({
                    "id": problem.id,
                    "status": status,
                    "value": value,
                    "confidence": confidence,
                }),
                Err(e) => json!({
                    "id": problem.id,
                    "status": status,
                    "error": e.to_string(),
                }),
            };
            println!("{}", line);
        } else {
            match &result {
                Ok(value) => println!("{:<32} {:<16} {}", problem.id, status, value),
                Err(e) => println!("{:<32} {:<16} {}", problem.id, status, e),
            }
        }
    }

    if !args.json {
        println!("\n{} problems, {} failed", problems.len(), failures);
    }

    Ok(if failures == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
