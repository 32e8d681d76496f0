use pokemon_battle_lab::{run, CliOptions};
use std::env;
use std::path::PathBuf;

fn usage() -> ! {
    eprintln!(
        "Usage: cargo run --release -- [--scenario NAME] [--iterations N] [--seed SEED] \
[--output results.csv] [--list]"
    );
    std::process::exit(1);
}

fn parse_args() -> anyhow::Result<CliOptions> {
    let mut scenario = None;
    let mut iterations = 100u32;
    let mut seed = 0u64;
    let mut output_path = PathBuf::from("results.csv");
    let mut list = false;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--scenario" => {
                scenario = Some(args.next().ok_or_else(|| {
                    anyhow::anyhow!("--scenario requires a name (e.g. --scenario speed_equal)")
                })?);
            }
            "--iterations" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--iterations requires a number"))?;
                iterations = val.parse()?;
            }
            "--seed" => {
                let val = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--seed requires a number"))?;
                seed = val.parse()?;
            }
            "--output" => {
                output_path = args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--output requires a path (e.g. --output results.csv)")
                })?;
            }
            "--list" => list = true,
            "--help" | "-h" => usage(),
            other => return Err(anyhow::anyhow!("Unknown argument {other}")),
        }
    }

    Ok(CliOptions {
        scenario,
        iterations,
        seed,
        output_path,
        list,
    })
}

fn main() -> anyhow::Result<()> {
    let opts = parse_args()?;
    run(opts)
}
