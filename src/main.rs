//! Model confidence evaluation CLI
//!
//! Prints the softmax selection probabilities of the five candidate models,
//! then the Chernoff-Hoeffding upper bound on each model's risk.
//!
//! Usage:
//!   cargo run --release

use anyhow::Result;
use clap::Parser;
use model_confidence::evaluation::{self, CONFIDENCE_DELTA, MODEL_SCORES, SAMPLE_COUNT};

#[derive(Parser, Debug)]
#[command(name = "model_confidence")]
#[command(about = "Softmax selection probabilities and Chernoff-Hoeffding risk bounds")]
struct Args {}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let _args = Args::parse();

    log::info!(
        "Evaluating {} candidate models (delta = {}, n = {})",
        MODEL_SCORES.len(),
        CONFIDENCE_DELTA,
        SAMPLE_COUNT
    );

    let report = evaluation::evaluate()?;
    for line in report.lines() {
        println!("{}", line);
    }

    Ok(())
}
