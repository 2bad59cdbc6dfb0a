use std::process::ExitCode;

use crossterm::style::Stylize;
use tracing_subscriber::EnvFilter;

use slider_puzzle::render::solution_text;
use slider_puzzle::{InversionParity, PuzzleConfig, Solvability, Solver};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("slider_puzzle=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => PuzzleConfig::load(path),
        None => Ok(PuzzleConfig::default()),
    };
    let config = match config {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", format!("Failed to load configuration: {err}").red());
            return ExitCode::FAILURE;
        }
    };

    let (start, goal) = match config.boards() {
        Ok(boards) => boards,
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            return ExitCode::FAILURE;
        }
    };

    println!("{}\n{}", "Initial Puzzle:".bold(), start);
    println!("{}\n{}", "Goal:".bold(), goal);

    if !InversionParity.is_solvable(&start, &goal) {
        eprintln!("{}", "Board is not solvable!".red());
        return ExitCode::FAILURE;
    }

    let mut solver = Solver::new();
    if let Some(limit) = config.search.max_expansions {
        solver = solver.with_max_expansions(limit);
    }

    match solver.solve(&start, &goal) {
        Ok(solution) => {
            let summary = format!("Found optimal solution with: {} moves", solution.len());
            println!("{}\n", summary.green().bold());
            println!("{}", solution_text(&start, &solution.steps));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            ExitCode::FAILURE
        }
    }
}
