use std::process::exit;
use std::time::Instant;

use clap::Parser;
use log::{error, info};
use owo_colors::OwoColorize;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use gambit::agents::*;
use gambit::game::*;
use gambit::logging;
use gambit::simulate::{simulate, Tally};

#[derive(Parser)]
#[command(
    name = "gambit simulator",
    about = "Play an agent against an opponent and count the results."
)]
struct Opts {
    /// Preset board and win condition.
    #[arg(long, value_enum, default_value_t = Variant::ConnectFour)]
    game: Variant,
    /// JSON rules, overriding the preset.
    #[arg(long)]
    rules: Option<Rules>,
    #[arg(short, long, default_value_t = 10)]
    games: usize,
    /// Number of parallel workers.
    #[arg(short, long, default_value_t = 4)]
    jobs: usize,
    #[arg(short, long)]
    verbose: bool,
    /// JSON agent configuration.
    #[arg(long, default_value_t)]
    agent: Agent,
    #[arg(long, default_value_t = Agent::Random)]
    opponent: Agent,
}

#[tokio::main]
async fn main() {
    logging();

    let Opts {
        game,
        rules,
        games,
        jobs,
        verbose,
        agent,
        opponent,
    } = Opts::parse();

    let rules = rules.unwrap_or(game.rules());
    if let Err(e) = rules.validate() {
        error!("Invalid rules: {e}");
        exit(1);
    }
    for config in [&agent, &opponent] {
        if let Err(e) = config.validate(&rules) {
            error!("Invalid agent {config}: {e}");
            exit(1);
        }
    }

    info!("{rules:?}: {agent} vs {opponent}");

    let start = Instant::now();
    let jobs = jobs.clamp(1, games.max(1));

    let workers = (0..jobs)
        .map(|i| {
            let count = games / jobs + usize::from(i < games % jobs);
            let agent = agent.clone();
            let opponent = opponent.clone();
            tokio::task::spawn_blocking(move || {
                let mut rng = SmallRng::from_entropy();
                simulate(rules, &agent, &opponent, count, verbose, &mut rng)
            })
        })
        .collect::<Vec<_>>();

    let mut tally = Tally::default();
    for worker in workers {
        match worker.await {
            Ok(result) => tally += result,
            Err(e) => error!("Worker failed: {e}"),
        }
    }

    println!(
        "{}: {tally} in {}ms",
        "Result".bright_green(),
        start.elapsed().as_millis()
    );
}
