//! Cost estimates used to order the search frontier.
use crate::engine::{Board, Puzzle, BLANK};
use crate::utils::ParseError;
use std::fmt;
use std::str::FromStr;

/// Counts the tiles that are not on their goal cell.
///
/// The blank is ignored: its position carries no cost information.
///
/// # Arguments
/// * `board`: The board to evaluate.
/// * `puzzle`: Supplies the goal board.
///
/// # Returns
/// The number of misplaced non-blank tiles as `u32`.
///
/// # Examples
/// ```
/// use sliding_puzzle_solver::engine::{Board, Puzzle};
/// use sliding_puzzle_solver::heuristics::misplaced_tiles;
/// let puzzle = Puzzle::new(3);
/// let board = Board::from_tiles(3, vec![1, 2, 3, 4, 5, 6, 7, 0, 8]);
/// assert_eq!(misplaced_tiles(&board, &puzzle), 1);
/// ```
pub fn misplaced_tiles(board: &Board, puzzle: &Puzzle) -> u32 {
    board
        .tiles()
        .iter()
        .zip(puzzle.goal().tiles())
        .filter(|(&tile, &goal_tile)| tile != BLANK && tile != goal_tile)
        .count() as u32
}

/// Sums the Manhattan distance of every non-blank tile to its goal cell.
///
/// For a tile at `(r, c)` whose goal cell is `(gr, gc)` the contribution is
/// `|r - gr| + |c - gc|`. With the conventional goal the goal cell of tile `v` is
/// `((v - 1) / size, (v - 1) % size)`.
///
/// # Arguments
/// * `board`: The board to evaluate.
/// * `puzzle`: Supplies the goal position of each tile.
///
/// # Returns
/// The summed distance as `u32`.
pub fn manhattan_distance(board: &Board, puzzle: &Puzzle) -> u32 {
    let size = board.size();
    let mut distance = 0;

    for (idx, &tile) in board.tiles().iter().enumerate() {
        if tile == BLANK {
            continue;
        }
        if let Some((goal_row, goal_col)) = puzzle.goal_position(tile) {
            let (r, c) = (idx / size, idx % size);
            distance += r.abs_diff(goal_row) + c.abs_diff(goal_col);
        }
    }

    distance as u32
}

/// Selects the cost estimate used to order the search frontier.
///
/// Every variant is admissible (never overestimates the remaining moves), which keeps
/// best-first search optimal. Plugging in an inadmissible estimate is a programming
/// error and is not detected at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// Always `0`; best-first search degrades to uniform-cost search.
    Uniform,
    /// A* with the misplaced-tile count.
    MisplacedTiles,
    /// A* with the Manhattan distance.
    ManhattanDistance,
}

impl Heuristic {
    /// All strategies, from uninformed to most informed.
    pub const ALL: [Heuristic; 3] = [
        Heuristic::Uniform,
        Heuristic::MisplacedTiles,
        Heuristic::ManhattanDistance,
    ];

    /// Estimates the number of moves from `board` to the goal of `puzzle`.
    pub fn evaluate(&self, board: &Board, puzzle: &Puzzle) -> u32 {
        match self {
            Heuristic::Uniform => 0,
            Heuristic::MisplacedTiles => misplaced_tiles(board, puzzle),
            Heuristic::ManhattanDistance => manhattan_distance(board, puzzle),
        }
    }

    /// Short name, also accepted by `FromStr`.
    pub fn name(&self) -> &'static str {
        match self {
            Heuristic::Uniform => "uniform",
            Heuristic::MisplacedTiles => "misplaced",
            Heuristic::ManhattanDistance => "manhattan",
        }
    }

    /// Human-readable description for reports and menus.
    pub fn description(&self) -> &'static str {
        match self {
            Heuristic::Uniform => "Uniform Cost Search",
            Heuristic::MisplacedTiles => "A* with the Misplaced Tile heuristic",
            Heuristic::ManhattanDistance => "A* with the Manhattan Distance heuristic",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Heuristic {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uniform" | "ucs" | "1" => Ok(Heuristic::Uniform),
            "misplaced" | "misplaced-tiles" | "2" => Ok(Heuristic::MisplacedTiles),
            "manhattan" | "manhattan-distance" | "3" => Ok(Heuristic::ManhattanDistance),
            other => Err(ParseError::UnknownName {
                kind: "algorithm",
                name: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board3(tiles: [u8; 9]) -> Board {
        Board::from_tiles(3, tiles.to_vec())
    }

    #[test]
    fn test_goal_scores_zero() {
        let puzzle = Puzzle::new(3);
        assert_eq!(misplaced_tiles(puzzle.goal(), &puzzle), 0);
        assert_eq!(manhattan_distance(puzzle.goal(), &puzzle), 0);

        let puzzle4 = Puzzle::new(4);
        assert_eq!(misplaced_tiles(puzzle4.goal(), &puzzle4), 0);
        assert_eq!(manhattan_distance(puzzle4.goal(), &puzzle4), 0);
    }

    #[test]
    fn test_known_values() {
        let puzzle = Puzzle::new(3);

        let board = board3([2, 7, 3, 4, 6, 8, 1, 5, 0]);
        assert_eq!(misplaced_tiles(&board, &puzzle), 6);
        assert_eq!(manhattan_distance(&board, &puzzle), 10);

        let centred = board3([1, 2, 3, 4, 0, 5, 6, 7, 8]);
        assert_eq!(misplaced_tiles(&centred, &puzzle), 4);
        assert_eq!(manhattan_distance(&centred, &puzzle), 6);

        let oh_boy = board3([8, 7, 1, 6, 0, 2, 5, 4, 3]);
        assert_eq!(misplaced_tiles(&oh_boy, &puzzle), 8);
        assert_eq!(manhattan_distance(&oh_boy, &puzzle), 18);
    }

    #[test]
    fn test_blank_is_ignored() {
        let puzzle = Puzzle::new(3);
        // Only the blank and tile 8 are swapped: one misplaced tile, one step away.
        let board = board3([1, 2, 3, 4, 5, 6, 7, 0, 8]);
        assert_eq!(misplaced_tiles(&board, &puzzle), 1);
        assert_eq!(manhattan_distance(&board, &puzzle), 1);
    }

    #[test]
    fn test_custom_goal() {
        let goal = board3([0, 1, 2, 3, 4, 5, 6, 7, 8]);
        let puzzle = Puzzle::with_goal(goal.clone());
        assert_eq!(manhattan_distance(&goal, &puzzle), 0);

        let conventional = Board::goal(3);
        assert_eq!(misplaced_tiles(&conventional, &puzzle), 8);
        // Each tile sits one cell to the left of its goal, except 3 and 6 which wrap rows.
        assert_eq!(manhattan_distance(&conventional, &puzzle), 12);
    }

    #[test]
    fn test_manhattan_dominates_misplaced() {
        let puzzle = Puzzle::new(3);
        for seed in 0..50 {
            let board = Board::scrambled(&puzzle, 30, seed);
            let misplaced = misplaced_tiles(&board, &puzzle);
            let manhattan = manhattan_distance(&board, &puzzle);
            assert!(
                manhattan >= misplaced,
                "seed {}: manhattan {} < misplaced {} for\n{}",
                seed,
                manhattan,
                misplaced,
                board
            );
        }
    }

    #[test]
    fn test_evaluate_dispatch() {
        let puzzle = Puzzle::new(3);
        let board = board3([2, 7, 3, 4, 6, 8, 1, 5, 0]);
        assert_eq!(Heuristic::Uniform.evaluate(&board, &puzzle), 0);
        assert_eq!(Heuristic::MisplacedTiles.evaluate(&board, &puzzle), 6);
        assert_eq!(Heuristic::ManhattanDistance.evaluate(&board, &puzzle), 10);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("uniform".parse::<Heuristic>().unwrap(), Heuristic::Uniform);
        assert_eq!("Misplaced".parse::<Heuristic>().unwrap(), Heuristic::MisplacedTiles);
        assert_eq!("3".parse::<Heuristic>().unwrap(), Heuristic::ManhattanDistance);
        for heuristic in Heuristic::ALL {
            assert_eq!(heuristic.name().parse::<Heuristic>().unwrap(), heuristic);
        }
        let err = "greedy".parse::<Heuristic>().unwrap_err();
        assert!(err.to_string().contains("greedy"));
    }
}
