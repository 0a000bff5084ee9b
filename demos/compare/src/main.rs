//! compare: run BFS, A* and Q-learning on the same grid city and report
//! how each one did.
//!
//! Three ways to describe the work:
//!
//! ```text
//! compare --width 12 --height 10 --start I1,1 --dest I9,7 --traffic medium
//! compare --config demos/compare/scenario.json
//! compare --batch demos/compare/scenarios.csv
//! ```
//!
//! Results land in `--output` (default `output/compare`) as `routes.csv`,
//! `comparison.csv` and `episodes.csv`.  Set `RUST_LOG=debug` for
//! per-episode logging.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, ArgMatches, Command, arg};

use gr_city::TrafficLevel;
use gr_core::Coord;
use gr_learn::Hyperparameters;
use gr_output::{CsvWriter, OutputWriter, TrainingOutputObserver};
use gr_sim::{Comparison, ScenarioBuilder, ScenarioConfig, load_scenarios_csv};

// ── CLI ───────────────────────────────────────────────────────────────────────

fn cli() -> Command {
    Command::new("compare")
        .about("Compares Q-learning against BFS and A* on a synthetic grid city")
        .arg(
            arg!(--config [FILE] "Scenario JSON file")
                .value_parser(clap::value_parser!(PathBuf))
                .conflicts_with("batch"),
        )
        .arg(
            arg!(--batch [FILE] "Batch CSV: name,width,height,start_x,start_y,dest_x,dest_y,traffic,seed")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(--output [DIR] "Output directory")
                .default_value("output/compare")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(arg!(--name [NAME] "Scenario label").default_value("cli"))
        .arg(arg!(--width [W] "City width").default_value("10").value_parser(clap::value_parser!(u32)))
        .arg(arg!(--height [H] "City height").default_value("10").value_parser(clap::value_parser!(u32)))
        .arg(arg!(--start [NODE] "Start node, I{x},{y}").default_value("I1,1"))
        .arg(arg!(--dest [NODE] "Destination node, I{x},{y}").default_value("I8,8"))
        .arg(arg!(--traffic [LEVEL] "none | light | medium | heavy").default_value("none"))
        .arg(arg!(--seed [SEED] "Root seed").default_value("42").value_parser(clap::value_parser!(u64)))
        .arg(arg!(--episodes [N] "Training episodes").value_parser(clap::value_parser!(u32)))
        .arg(arg!(--alpha [RATE] "Learning rate").value_parser(clap::value_parser!(f64)))
        .arg(arg!(--gamma [RATE] "Discount factor").value_parser(clap::value_parser!(f64)))
        .arg(
            arg!(--epsilon [RATE] "Exploitation probability (higher = greedier)")
                .value_parser(clap::value_parser!(f64)),
        )
        .arg(
            arg!(--"revisit-penalty" "Penalise revisiting a node within an episode")
                .action(ArgAction::SetTrue),
        )
}

/// Build the single scenario described by flags.
fn config_from_flags(m: &ArgMatches) -> Result<ScenarioConfig> {
    let parse_node = |flag: &str| -> Result<Coord> {
        let text = m.get_one::<String>(flag).context("missing node flag")?;
        text.parse().with_context(|| format!("--{flag} {text:?}"))
    };
    let traffic: TrafficLevel = m
        .get_one::<String>("traffic")
        .context("missing --traffic")?
        .parse()
        .map_err(anyhow::Error::msg)?;

    let mut params = Hyperparameters::default();
    if let Some(&n) = m.get_one::<u32>("episodes") {
        params.episodes = n;
    }
    if let Some(&v) = m.get_one::<f64>("alpha") {
        params.learning_rate = v;
    }
    if let Some(&v) = m.get_one::<f64>("gamma") {
        params.discount_factor = v;
    }
    if let Some(&v) = m.get_one::<f64>("epsilon") {
        params.epsilon = v;
    }
    params.revisit_penalty = m.get_flag("revisit-penalty");

    let mut config = ScenarioConfig::new(
        m.get_one::<String>("name").context("missing --name")?.as_str(),
        *m.get_one::<u32>("width").context("missing --width")?,
        *m.get_one::<u32>("height").context("missing --height")?,
        parse_node("start")?,
        parse_node("dest")?,
    );
    config.traffic = traffic;
    config.seed = *m.get_one::<u64>("seed").context("missing --seed")?;
    config.hyperparameters = params;
    Ok(config)
}

fn load_json(path: &Path) -> Result<ScenarioConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

// ── Run ───────────────────────────────────────────────────────────────────────

fn run_one(config: ScenarioConfig, writer: CsvWriter) -> Result<(Comparison, CsvWriter)> {
    let name = config.name.clone();
    let scenario = ScenarioBuilder::from_config(config)
        .build()
        .with_context(|| format!("building scenario {name:?}"))?;

    let mut obs = TrainingOutputObserver::new(writer, name.as_str());
    let comparison = scenario.compare(&mut obs)?;
    if let Some(e) = obs.take_error() {
        bail!("writing episodes for {name:?}: {e}");
    }
    let mut writer = obs.into_writer();
    writer.write_comparison_result(&comparison)?;
    Ok((comparison, writer))
}

fn print_summary(c: &Comparison) {
    println!("{}", c.scenario);
    println!("  {:<10} {:<14} {:>6} {:>10} {:>12}", "method", "status", "edges", "examined", "elapsed_us");
    for o in &c.outcomes {
        println!(
            "  {:<10} {:<14} {:>6} {:>10} {:>12}",
            o.method,
            o.status.as_str(),
            o.edge_count().map_or_else(|| "-".to_owned(), |e| e.to_string()),
            o.nodes_examined(),
            o.elapsed.as_micros(),
        );
    }
    println!(
        "  training: {} episodes, {:.1}% reached the goal, {} truncated, {:.3} s",
        c.training.episodes,
        c.training.goal_rate() * 100.0,
        c.training.truncated_episodes,
        c.training.elapsed.as_secs_f64(),
    );
    println!();
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = cli().get_matches();
    let out_dir = matches
        .get_one::<PathBuf>("output")
        .context("missing --output")?
        .clone();

    let configs = if let Some(path) = matches.get_one::<PathBuf>("batch") {
        load_scenarios_csv(path).with_context(|| format!("loading {}", path.display()))?
    } else if let Some(path) = matches.get_one::<PathBuf>("config") {
        vec![load_json(path)?]
    } else {
        vec![config_from_flags(&matches)?]
    };
    log::info!("{} scenario(s), writing to {}", configs.len(), out_dir.display());

    let t0 = Instant::now();
    let mut writer = CsvWriter::new(&out_dir)?;
    for config in configs {
        let (comparison, w) = run_one(config, writer)?;
        writer = w;
        print_summary(&comparison);
    }
    writer.finish()?;

    println!("Done in {:.3} s; results in {}", t0.elapsed().as_secs_f64(), out_dir.display());
    Ok(())
}
