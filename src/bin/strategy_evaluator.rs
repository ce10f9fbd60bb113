use clap::Parser;
use log::{info, warn};
use sliding_puzzle_solver::engine::{Board, Puzzle, DEFAULT_SIZE};
use sliding_puzzle_solver::heuristics::Heuristic;
use sliding_puzzle_solver::solver::{solve, SearchOptions};
use sliding_puzzle_solver::utils::parse_board_size;
use std::collections::HashMap;
use std::time::Duration;

/// Compares the search strategies on a batch of reproducible scrambled boards.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Number of boards to evaluate
    #[clap(short, long, default_value_t = 20)]
    boards: usize,

    /// Random moves applied to the goal to build each board
    #[clap(short, long, default_value_t = 10)]
    moves: usize,

    /// Seed of the first board; board i uses start_seed + i
    #[clap(long, default_value_t = 0)]
    start_seed: u64,

    /// Board side length
    #[clap(long, default_value_t = DEFAULT_SIZE, value_parser = parse_board_size)]
    size: usize,

    /// Skip boards that were already expanded
    #[clap(long)]
    deduplicate: bool,

    /// Per-search expansion limit; searches hitting it are reported as misses
    #[clap(long, default_value_t = 2_000_000)]
    max_expansions: u64,
}

#[derive(Default)]
struct Totals {
    solved: usize,
    missed: usize,
    expanded: u64,
    elapsed: Duration,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let puzzle = Puzzle::new(args.size);
    let options = SearchOptions {
        deduplicate: args.deduplicate,
        max_expansions: Some(args.max_expansions),
    };

    let mut totals: HashMap<Heuristic, Totals> = HashMap::new();

    info!(
        "Starting strategy evaluation for {} boards ({} scramble moves each)...",
        args.boards, args.moves
    );

    for board_idx in 0..args.boards {
        let seed = args.start_seed + board_idx as u64;
        let initial = Board::scrambled(&puzzle, args.moves, seed);

        println!("\nEvaluating Board {} (Seed: {})\n{}", board_idx, seed, initial);

        let mut depths = Vec::new();
        for heuristic in Heuristic::ALL {
            let entry = totals.entry(heuristic).or_default();
            match solve(&puzzle, &initial, heuristic, options) {
                Ok(solution) => {
                    println!(
                        "  Strategy: {:<10} Depth: {:<4} Expanded: {:<10} Time: {} us",
                        heuristic.name(),
                        solution.path_cost(),
                        solution.expanded(),
                        solution.elapsed().as_micros()
                    );
                    depths.push(solution.path_cost());
                    entry.solved += 1;
                    entry.expanded += solution.expanded();
                    entry.elapsed += solution.elapsed();
                }
                Err(e) => {
                    println!("  Strategy: {:<10} {}", heuristic.name(), e);
                    entry.missed += 1;
                }
            }
        }

        if depths.windows(2).any(|w| w[0] != w[1]) {
            warn!(
                "Board {} (Seed: {}): strategies disagree on the solution depth: {:?}",
                board_idx, seed, depths
            );
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!("Number of boards evaluated: {}", args.boards);
    println!("\n--- Averages over solved boards ---");

    for heuristic in Heuristic::ALL {
        let Some(total) = totals.get(&heuristic) else {
            continue;
        };
        if total.solved == 0 {
            println!("Strategy {:<10}: no board solved ({} misses)", heuristic.name(), total.missed);
            continue;
        }
        let avg_expanded = total.expanded as f64 / total.solved as f64;
        let avg_micros = total.elapsed.as_micros() as f64 / total.solved as f64;
        println!(
            "Strategy {:<10}: Average Expanded = {:.2}, Average Time = {:.2} us, Misses = {}",
            heuristic.name(),
            avg_expanded,
            avg_micros,
            total.missed
        );
    }
}
