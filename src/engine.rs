//! Board representation and move generation for the sliding-tile puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Move`: The four directions the blank tile can travel.
//! - `Board`: An immutable square grid of tile values with `0` as the blank.
//! - `Puzzle`: The fixed configuration of a search (goal board and ordered move table),
//!   including successor generation (`Puzzle::expand`).
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt;

/// Side length of the classic 8-puzzle.
pub const DEFAULT_SIZE: usize = 3;

/// Largest side length whose tiles fit in a `u8`.
pub const MAX_SIZE: usize = 16;

/// Value used for the blank cell.
pub const BLANK: u8 = 0;

/// A single move of the blank tile.
///
/// The variant names the direction the blank travels, so `Move::Up` swaps the blank
/// with the tile directly above it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Every move in the default expansion order.
    ///
    /// This order decides which child is pushed first and therefore how ties in the
    /// search frontier are resolved.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Returns the `(row, column)` offset applied to the blank.
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    /// Returns the move that undoes this one.
    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// A square grid of tiles stored row-major.
///
/// Values run from `0` to `size * size - 1` with `0` denoting the blank. The search core
/// assumes a well-formed board (exactly one blank, all values distinct); validation of
/// user input lives in `crate::utils`.
///
/// Boards are never mutated once handed to the search: every move produces a new board.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    tiles: Vec<u8>,
}

impl Board {
    /// Creates the conventional goal board: `1..size²-1` in row-major order, blank last.
    ///
    /// # Examples
    /// ```
    /// use sliding_puzzle_solver::engine::Board;
    /// let goal = Board::goal(3);
    /// assert_eq!(goal.tiles(), &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
    /// ```
    ///
    /// # Panics
    /// Panics if `size` is not in `1..=MAX_SIZE`.
    pub fn goal(size: usize) -> Self {
        assert!(
            (1..=MAX_SIZE).contains(&size),
            "board size must be between 1 and {}, got {}",
            MAX_SIZE,
            size
        );
        let cells = size * size;
        let mut tiles: Vec<u8> = (1..cells).map(|v| v as u8).collect();
        tiles.push(BLANK);
        Board { size, tiles }
    }

    /// Creates a board from row-major tile values without validating them.
    ///
    /// # Arguments
    /// * `size`: The side length of the grid.
    /// * `tiles`: Exactly `size * size` values.
    ///
    /// # Panics
    /// Panics if `tiles.len() != size * size`.
    pub fn from_tiles(size: usize, tiles: Vec<u8>) -> Self {
        assert_eq!(
            tiles.len(),
            size * size,
            "a {}x{} board needs {} tiles",
            size,
            size,
            size * size
        );
        Board { size, tiles }
    }

    /// Returns the side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the tile values in row-major order.
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    /// Returns the tile at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside the board.
    pub fn get_tile(&self, r: usize, c: usize) -> u8 {
        self.tiles[r * self.size + c]
    }

    /// Iterates over the rows of the board, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.tiles.chunks(self.size.max(1))
    }

    /// Locates the blank cell.
    ///
    /// # Returns
    /// `Some((row, col))` of the blank, or `None` on a board without one.
    pub fn blank_position(&self) -> Option<(usize, usize)> {
        self.tiles
            .iter()
            .position(|&t| t == BLANK)
            .map(|i| (i / self.size, i % self.size))
    }

    /// Returns the board reached by moving the blank one step in direction `mv`.
    ///
    /// The blank and the neighbouring tile swap places; every other cell is unchanged.
    ///
    /// # Returns
    /// * `Some(Board)` with the move applied.
    /// * `None` if the neighbour lies outside the grid (or the board has no blank).
    ///
    /// # Examples
    /// ```
    /// use sliding_puzzle_solver::engine::{Board, Move};
    /// let goal = Board::goal(3);
    /// // The blank sits in the bottom-right corner, so it cannot move down or right.
    /// assert!(goal.apply_move(Move::Down).is_none());
    /// let moved = goal.apply_move(Move::Left).unwrap();
    /// assert_eq!(moved.tiles(), &[1, 2, 3, 4, 5, 6, 7, 0, 8]);
    /// ```
    pub fn apply_move(&self, mv: Move) -> Option<Board> {
        let (r, c) = self.blank_position()?;
        let (dr, dc) = mv.offset();
        let nr = r as isize + dr;
        let nc = c as isize + dc;

        if nr < 0 || nr >= self.size as isize || nc < 0 || nc >= self.size as isize {
            return None;
        }

        let blank_idx = r * self.size + c;
        let neighbour_idx = nr as usize * self.size + nc as usize;
        let mut tiles = self.tiles.clone();
        tiles.swap(blank_idx, neighbour_idx);
        Some(Board {
            size: self.size,
            tiles,
        })
    }

    /// Generates a solvable board by walking the blank randomly away from the goal.
    ///
    /// The walk never immediately undoes its previous move, though it may still return
    /// to an earlier configuration, so the optimal solution depth is at most `moves`.
    /// The same `seed` always produces the same board.
    ///
    /// # Arguments
    /// * `puzzle`: Supplies the goal board and the legal moves.
    /// * `moves`: Number of random blank moves to apply.
    /// * `seed`: Seed for the random number generator.
    pub fn scrambled(puzzle: &Puzzle, moves: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = puzzle.goal().clone();
        let mut last_move: Option<Move> = None;

        for _ in 0..moves {
            let candidates: Vec<(Move, Board)> = puzzle
                .expand(&board)
                .into_iter()
                .filter(|(mv, _)| last_move.map_or(true, |last| *mv != last.opposite()))
                .collect();

            match candidates.choose(&mut rng) {
                Some((mv, next)) => {
                    last_move = Some(*mv);
                    board = next.clone();
                }
                None => break,
            }
        }
        board
    }
}

impl fmt::Display for Board {
    /// Prints one row per line, values right-aligned to the widest tile.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.size * self.size).saturating_sub(1).to_string().len();
        for (r_idx, row) in self.rows().enumerate() {
            let line: Vec<String> = row.iter().map(|v| format!("{:>width$}", v)).collect();
            write!(f, "{}", line.join(" "))?;
            if r_idx + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// The fixed configuration of a search: the goal board and the ordered move table.
///
/// A `Puzzle` is built once and shared read-only by the search, the heuristics and the
/// scrambler. It also caches where each tile lives on the goal board so the Manhattan
/// heuristic does not need to search for it.
#[derive(Clone, Debug)]
pub struct Puzzle {
    goal: Board,
    moves: Vec<Move>,
    goal_positions: Vec<(usize, usize)>,
}

impl Puzzle {
    /// Creates a puzzle of side `size` with the conventional goal and default move order.
    pub fn new(size: usize) -> Self {
        Puzzle::with_goal(Board::goal(size))
    }

    /// Creates a puzzle with an arbitrary goal board and the default move order.
    ///
    /// # Arguments
    /// * `goal`: A well-formed board (each value `0..size²` exactly once).
    pub fn with_goal(goal: Board) -> Self {
        let size = goal.size();
        let mut goal_positions = vec![(0, 0); size * size];
        for (idx, &value) in goal.tiles().iter().enumerate() {
            if let Some(slot) = goal_positions.get_mut(value as usize) {
                *slot = (idx / size, idx % size);
            }
        }
        Puzzle {
            goal,
            moves: Move::ALL.to_vec(),
            goal_positions,
        }
    }

    /// Replaces the move table, which also fixes the order children are generated in.
    pub fn with_moves(mut self, moves: Vec<Move>) -> Self {
        self.moves = moves;
        self
    }

    /// Returns the goal board.
    pub fn goal(&self) -> &Board {
        &self.goal
    }

    /// Returns the side length of the puzzle's boards.
    pub fn size(&self) -> usize {
        self.goal.size()
    }

    /// Returns the move table in expansion order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Returns the `(row, col)` that tile `value` occupies on the goal board.
    ///
    /// # Returns
    /// `None` if `value` does not fit on a board of this size.
    pub fn goal_position(&self, value: u8) -> Option<(usize, usize)> {
        self.goal_positions.get(value as usize).copied()
    }

    /// Checks whether `board` equals the goal by value.
    pub fn is_goal(&self, board: &Board) -> bool {
        *board == self.goal
    }

    /// Generates every board reachable from `board` with one legal blank move.
    ///
    /// Children come back in move-table order (up, down, left, right by default), each
    /// paired with the move that produced it. Moves that would push the blank off the grid
    /// are skipped, so a 3x3 board yields 2 children from a corner, 3 from an edge and 4
    /// from the centre. Every child costs one move more than its parent.
    pub fn expand(&self, board: &Board) -> Vec<(Move, Board)> {
        self.moves
            .iter()
            .filter_map(|&mv| board.apply_move(mv).map(|child| (mv, child)))
            .collect()
    }
}

impl Default for Puzzle {
    fn default() -> Self {
        Puzzle::new(DEFAULT_SIZE)
    }
}
