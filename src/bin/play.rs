use std::io::{self, BufRead, Write};
use std::process::exit;

use clap::Parser;
use log::{error, info};
use owo_colors::OwoColorize;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use gambit::agents::Agent;
use gambit::env::Move;
use gambit::game::*;
use gambit::logging;

#[derive(Parser)]
#[command(name = "gambit", about = "Play against the computer.")]
struct Opts {
    /// Preset board and win condition.
    #[arg(long, value_enum, default_value_t = Variant::TicTacToe)]
    game: Variant,
    /// JSON rules, overriding the preset.
    #[arg(long)]
    rules: Option<Rules>,
    /// JSON agent configuration, chosen by board size if omitted.
    #[arg(long)]
    agent: Option<Agent>,
    /// The computer plays X and moves first.
    #[arg(long)]
    ai_first: bool,
    /// Start from up to this many random moves.
    #[arg(long, default_value_t = 0)]
    random_start: usize,
}

fn main() {
    logging();

    let Opts {
        game,
        rules,
        agent,
        ai_first,
        random_start,
    } = Opts::parse();

    let rules = rules.unwrap_or(game.rules());
    if let Err(e) = rules.validate() {
        error!("Invalid rules: {e}");
        exit(1);
    }
    let agent = agent.unwrap_or_else(|| Agent::for_rules(&rules));
    if let Err(e) = agent.validate(&rules) {
        error!("Invalid agent {agent}: {e}");
        exit(1);
    }
    info!("{rules:?}: {agent}");

    let mut board = if random_start > 0 {
        Board::random_opening(rules, random_start, &mut SmallRng::from_entropy())
    } else {
        Board::new(rules)
    };
    let ai = if ai_first { Mark::X } else { Mark::O };

    let mut lines = io::stdin().lock().lines();

    println!("{board}");
    loop {
        match board.outcome() {
            Outcome::None => {}
            Outcome::Draw => {
                println!("{}", "Draw!".bright_yellow());
                break;
            }
            Outcome::Winner(mark) if mark == ai => {
                println!("{}", format!("{mark} wins, the computer beat you.").bright_red());
                break;
            }
            Outcome::Winner(mark) => {
                println!("{}", format!("{mark} wins, you beat the computer!").bright_green());
                break;
            }
        }

        let mark = board.to_move();
        if mark == ai {
            println!("AI is thinking...");
            let Some(mv) = agent.step(&board, mark) else {
                error!("No move found");
                exit(1);
            };
            if let Err(e) = board.place(mv, mark) {
                error!("Agent played {mv}: {e}");
                exit(1);
            }
            println!("{mark} plays {mv}");
        } else {
            let Some(mv) = read_move(&mut lines, &board, mark) else {
                break;
            };
            if let Err(e) = board.place(mv, mark) {
                println!("{}", e.bright_red());
                continue;
            }
        }
        println!("{board}");
    }
}

/// Prompts until the input parses. Returns `None` at the end of input.
fn read_move(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    board: &Board,
    mark: Mark,
) -> Option<Move> {
    let hint = if board.rules().gravity { "col" } else { "row col" };
    loop {
        print!("{mark} to move ({hint}): ");
        let _ = io::stdout().flush();

        let line = match lines.next()? {
            Ok(line) => line,
            Err(e) => {
                error!("Reading input: {e}");
                return None;
            }
        };
        match line.trim().parse::<Move>() {
            Ok(mv) => return Some(mv),
            Err(e) => println!("{}", e.bright_red()),
        }
    }
}
