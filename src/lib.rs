//! # Sliding Puzzle Solver Library
//!
//! This library solves the n×n sliding-tile puzzle (the 3×3 "8-puzzle" by default) with
//! best-first search: uniform-cost search, A* with the misplaced-tile heuristic and A*
//! with the Manhattan-distance heuristic.
//!
//! It is used by two binaries:
//! - `solver`: Takes a preset, a board or a scramble seed (or asks for a board
//!   interactively), runs the chosen strategy and prints the solution path.
//! - `strategy_evaluator`: Runs every strategy on a batch of seeded scrambles and
//!   compares expansions and time.
//!
//! ## Modules
//! - `engine`: The board (`Board`), blank moves (`Move`) and the search configuration
//!   (`Puzzle`), including successor generation.
//! - `heuristics`: The cost estimates and the `Heuristic` strategy selector.
//! - `solver`: Search nodes and the best-first search (`solve`).
//! - `report`: Rendering of a solution path and its statistics.
//! - `utils`: Board parsing and validation, and the built-in presets.

pub mod engine;
pub mod heuristics;
pub mod report;
pub mod solver;
pub mod utils;
