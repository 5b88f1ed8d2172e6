//! Tournament CLI
//!
//! Run round-robin tournaments or single matches between strategies.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tournament::{quick_match, run_round_robin, TournamentConfig, TournamentResults, TournamentSettings};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(author, version)]
#[clap(name = "tournament")]
#[clap(about = "Plays rock-paper-scissors strategies against each other", long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,

    /// Log match progress at debug level
    #[clap(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Every roster entry plays every other entry once
    Run(RunCommand),
    /// Play a single match between two roster entries
    Match(MatchCommand),
    /// List the roster
    Roster(RosterArgs),
}

#[derive(Args)]
struct RosterArgs {
    /// TOML roster file; the stock roster is used when absent
    #[clap(short, long)]
    config: Option<PathBuf>,
}

#[derive(Args)]
struct PlayArgs {
    #[clap(flatten)]
    roster: RosterArgs,

    /// Rounds per match, overriding the config
    #[clap(short, long)]
    rounds: Option<u32>,

    /// Seed for the random source, overriding the config
    #[clap(short, long)]
    seed: Option<u64>,
}

#[derive(Args)]
struct RunCommand {
    #[clap(flatten)]
    play: PlayArgs,

    /// Write the results as JSON to this file
    #[clap(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct MatchCommand {
    player1: String,
    player2: String,

    #[clap(flatten)]
    play: PlayArgs,
}

fn load_config(args: &RosterArgs) -> Result<TournamentConfig> {
    match &args.config {
        Some(path) => TournamentConfig::load(path)
            .with_context(|| format!("loading roster from {}", path.display())),
        None => Ok(TournamentConfig::default()),
    }
}

fn settings(config: &TournamentConfig, args: &PlayArgs) -> TournamentSettings {
    TournamentSettings {
        rounds_per_match: args.rounds.unwrap_or(config.rounds_per_match),
        seed: args.seed.or(config.seed),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn run(args: &RunCommand) -> Result<()> {
    let config = load_config(&args.play.roster)?;
    let settings = settings(&config, &args.play);
    let mut rng = make_rng(settings.seed);
    let mut strategies = config.build_roster()?;

    info!(
        name = %config.name,
        strategies = strategies.len(),
        rounds = settings.rounds_per_match,
        "starting round robin"
    );
    let results = run_round_robin(&config.name, &mut strategies, settings, &mut rng)?;
    println!("{}", results.generate_report());

    if let Some(path) = &args.output {
        write_results(&results, path)?;
        info!(path = %path.display(), "results written");
    }
    Ok(())
}

fn write_results(results: &TournamentResults, path: &Path) -> Result<()> {
    let json = results.to_json().context("serializing results")?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))
}

fn run_match(args: &MatchCommand) -> Result<()> {
    let config = load_config(&args.play.roster)?;
    let settings = settings(&config, &args.play);
    let mut rng = make_rng(settings.seed);

    let build = |name: &str| {
        config
            .find(name)
            .ok_or_else(|| anyhow!("no strategy named {name} in the roster"))
            .and_then(|entry| entry.build().map_err(Into::into))
    };
    let mut player1 = build(&args.player1)?;
    let mut player2 = build(&args.player2)?;

    let scores = quick_match(
        player1.as_mut(),
        player2.as_mut(),
        settings.rounds_per_match,
        &mut rng,
    )?;

    let mut results = TournamentResults::new(
        &format!("{} vs {}", args.player1, args.player2),
        vec![args.player1.clone(), args.player2.clone()],
        settings,
    );
    results.add_match(&args.player1, &args.player2, &scores);
    println!("{}", results.generate_report());
    Ok(())
}

fn show_roster(args: &RosterArgs) -> Result<()> {
    let config = load_config(args)?;
    println!("=== Roster: {} ===", config.name);
    for entry in &config.strategies {
        println!("  {}", entry.name());
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Run(args) => run(args),
        Commands::Match(args) => run_match(args),
        Commands::Roster(args) => show_roster(args),
    }
}
