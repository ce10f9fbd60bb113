use criterion::{criterion_group, criterion_main, Criterion};
use sliding_puzzle_solver::engine::{Board, Puzzle};
use sliding_puzzle_solver::heuristics::{manhattan_distance, misplaced_tiles, Heuristic};
use sliding_puzzle_solver::solver::{solve, SearchOptions};
use sliding_puzzle_solver::utils::Preset;
use std::hint::black_box;

fn bench_heuristics(c: &mut Criterion) {
    let puzzle = Puzzle::new(3);
    let boards: Vec<Board> = (0..32).map(|seed| Board::scrambled(&puzzle, 30, seed)).collect();

    c.bench_function("heuristic/misplaced", |b| {
        b.iter(|| boards.iter().map(|bd| misplaced_tiles(bd, &puzzle)).sum::<u32>())
    });
    c.bench_function("heuristic/manhattan", |b| {
        b.iter(|| boards.iter().map(|bd| manhattan_distance(bd, &puzzle)).sum::<u32>())
    });
}

fn bench_search(c: &mut Criterion) {
    let puzzle = Puzzle::new(3);
    let doable = Preset::Doable.board();
    let hard = Board::from_tiles(3, vec![2, 7, 3, 4, 6, 8, 1, 5, 0]);
    let dedup = SearchOptions {
        deduplicate: true,
        max_expansions: None,
    };

    for heuristic in Heuristic::ALL {
        c.bench_function(&format!("search/doable/{}", heuristic), |b| {
            b.iter(|| solve(&puzzle, black_box(&doable), heuristic, SearchOptions::default()))
        });
    }
    c.bench_function("search/depth16/manhattan", |b| {
        b.iter(|| solve(&puzzle, black_box(&hard), Heuristic::ManhattanDistance, SearchOptions::default()))
    });
    c.bench_function("search/depth16/misplaced-dedup", |b| {
        b.iter(|| solve(&puzzle, black_box(&hard), Heuristic::MisplacedTiles, dedup))
    });
}

criterion_group!(search, bench_heuristics, bench_search);
criterion_main!(search);
