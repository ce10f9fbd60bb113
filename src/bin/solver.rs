use clap::Parser;
use log::{error, info, warn};
use sliding_puzzle_solver::engine::{Board, Puzzle, DEFAULT_SIZE};
use sliding_puzzle_solver::heuristics::Heuristic;
use sliding_puzzle_solver::report::render;
use sliding_puzzle_solver::solver::{solve, SearchError, SearchOptions};
use sliding_puzzle_solver::utils::{board_from_str_array, parse_board_size, Preset};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Solves the sliding-tile puzzle with uniform-cost search or A*.
///
/// With no board option the program asks for one interactively. Unsolvable boards make
/// the search run until memory is exhausted; use --max-expansions to bound it.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Built-in puzzle: trivial, very-easy, easy, doable or oh-boy
    #[clap(short, long, conflicts_with_all = ["board", "board_file", "scramble"])]
    preset: Option<Preset>,

    /// Board rows separated by '/', e.g. "1 2 3/4 5 6/7 8 0"
    #[clap(short, long, conflicts_with_all = ["board_file", "scramble"])]
    board: Option<String>,

    /// Path to a file with one board row per line
    #[clap(short = 'f', long, conflicts_with = "scramble")]
    board_file: Option<PathBuf>,

    /// Generate a board with this many random moves from the goal
    #[clap(short, long)]
    scramble: Option<usize>,

    /// Seed for --scramble
    #[clap(long, default_value_t = 0)]
    seed: u64,

    /// Board side length used by --scramble and interactive input
    #[clap(long, default_value_t = DEFAULT_SIZE, value_parser = parse_board_size)]
    size: usize,

    /// Search strategy: uniform, misplaced or manhattan
    #[clap(short, long)]
    algorithm: Option<Heuristic>,

    /// Run every strategy on the same board
    #[clap(long, conflicts_with = "algorithm")]
    compare: bool,

    /// Skip boards that were already expanded (changes the reported statistics)
    #[clap(long)]
    deduplicate: bool,

    /// Give up after this many expansions
    #[clap(long)]
    max_expansions: Option<u64>,
}

fn read_board_file(path: &PathBuf) -> Result<Board, String> {
    let content = fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;

    let lines: Vec<&str> = content
        .lines()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    board_from_str_array(&lines).map_err(|e| format!("Invalid board format: {}", e))
}

fn parse_board_arg(board: &str) -> Result<Board, String> {
    let rows: Vec<&str> = board.split(['/', ';']).map(|s| s.trim()).collect();
    board_from_str_array(&rows).map_err(|e| format!("Invalid board format: {}", e))
}

/// Prints `message` and reads one trimmed line from stdin.
fn prompt(input: &mut impl BufRead, message: &str) -> Result<String, String> {
    print!("{}", message);
    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to write prompt: {}", e))?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| format!("Failed to read input: {}", e))?;
    if read == 0 {
        return Err("Unexpected end of input".to_string());
    }
    Ok(line.trim().to_string())
}

fn prompt_board(input: &mut impl BufRead, size: usize) -> Result<Board, String> {
    loop {
        let choice = prompt(
            input,
            "Type \"1\" to use a built-in puzzle, or \"2\" to enter your own: ",
        )?;
        match choice.as_str() {
            "1" => {
                for (i, preset) in Preset::ALL.iter().enumerate() {
                    println!("  {}. {} (solution depth {})", i + 1, preset, preset.optimal_depth());
                }
                let pick = prompt(input, "Choose a puzzle: ")?;
                let preset = match pick.parse::<usize>() {
                    Ok(n) if (1..=Preset::ALL.len()).contains(&n) => Ok(Preset::ALL[n - 1]),
                    _ => pick.parse::<Preset>().map_err(|e| e.to_string()),
                };
                match preset {
                    Ok(preset) => return Ok(preset.board()),
                    Err(e) => println!("{}", e),
                }
            }
            "2" => {
                println!(
                    "Enter your puzzle, use a zero to represent the blank. Separate numbers with spaces."
                );
                let mut rows = Vec::with_capacity(size);
                for r in 0..size {
                    rows.push(prompt(input, &format!("Enter row {}: ", r + 1))?);
                }
                let row_refs: Vec<&str> = rows.iter().map(String::as_str).collect();
                match board_from_str_array(&row_refs) {
                    Ok(board) => return Ok(board),
                    Err(e) => println!("Invalid board: {}. Please try again.", e),
                }
            }
            _ => println!("Invalid choice, please type 1 or 2."),
        }
    }
}

fn prompt_algorithm(input: &mut impl BufRead) -> Result<Heuristic, String> {
    loop {
        println!("Select algorithm:");
        for (i, heuristic) in Heuristic::ALL.iter().enumerate() {
            println!("  {}. {}", i + 1, heuristic.description());
        }
        let choice = prompt(input, "Algorithm: ")?;
        match choice.parse::<Heuristic>() {
            Ok(heuristic) => return Ok(heuristic),
            Err(e) => println!("{}", e),
        }
    }
}

fn run(args: Args) -> Result<(), String> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let board = if let Some(preset) = args.preset {
        preset.board()
    } else if let Some(rows) = &args.board {
        parse_board_arg(rows)?
    } else if let Some(path) = &args.board_file {
        read_board_file(path)?
    } else if let Some(moves) = args.scramble {
        Board::scrambled(&Puzzle::new(args.size), moves, args.seed)
    } else {
        println!("Welcome to the sliding puzzle solver!");
        prompt_board(&mut input, args.size)?
    };

    let strategies: Vec<Heuristic> = if args.compare {
        Heuristic::ALL.to_vec()
    } else if let Some(heuristic) = args.algorithm {
        vec![heuristic]
    } else {
        vec![prompt_algorithm(&mut input)?]
    };

    let puzzle = Puzzle::new(board.size());
    let options = SearchOptions {
        deduplicate: args.deduplicate,
        max_expansions: args.max_expansions,
    };
    if options.max_expansions.is_none() {
        info!("no expansion limit set; an unsolvable board will not terminate");
    }

    println!("Initial board:\n{}\n", board);

    let mut failures = 0;
    for heuristic in strategies {
        info!("solving with {}", heuristic.description());
        match solve(&puzzle, &board, heuristic, options) {
            Ok(solution) => println!("{}\n", render(&solution)),
            Err(e @ SearchError::LimitReached { .. }) => {
                warn!("{}: {}", heuristic, e);
                println!("{}: {}\n", heuristic.description(), e);
                failures += 1;
            }
            Err(e @ SearchError::Exhausted { .. }) => {
                println!("{}: {}\n", heuristic.description(), e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        return Err(format!("{} search(es) ended without a solution", failures));
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
