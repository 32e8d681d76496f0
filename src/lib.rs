pub mod battle_log;
pub mod data;
pub mod scenarios;
pub mod sim;

use crate::scenarios::{run_all, run_scenario, write_csv, AggregateResult, SCENARIOS};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CliOptions {
    /// One named scenario, or None for the whole catalog.
    pub scenario: Option<String>,
    pub iterations: u32,
    pub seed: u64,
    pub output_path: PathBuf,
    pub list: bool,
}

pub fn run(opts: CliOptions) -> anyhow::Result<()> {
    if opts.list {
        for scenario in SCENARIOS.iter() {
            println!("{:<16} {}", scenario.name, scenario.description);
        }
        return Ok(());
    }
    if opts.iterations == 0 {
        anyhow::bail!("--iterations must be > 0");
    }
    let results: Vec<AggregateResult> = match &opts.scenario {
        Some(name) => vec![run_scenario(name, opts.iterations, opts.seed)?],
        None => run_all(opts.iterations, opts.seed)?,
    };
    for result in &results {
        println!(
            "{:<16} A {:>4} / B {:>4} / ties {:>4}  (win rate A {:.1}%, mean {:.1} turns)",
            result.scenario,
            result.wins_a,
            result.wins_b,
            result.ties,
            result.win_rate_a() * 100.0,
            result.mean_turns
        );
    }
    write_csv(&results, &opts.output_path)?;
    println!(
        "Wrote {} scenario summaries to {}",
        results.len(),
        opts.output_path.display()
    );
    Ok(())
}
