//! Board parsing and validation, CLI value parsers and the built-in presets.
use crate::engine::{Board, MAX_SIZE};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while turning user input into a `Board`, a `Preset` or a `Heuristic`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("the board has no rows")]
    Empty,
    #[error("row {row} has {found} values, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("a {size}x{size} board does not fit in 8-bit tiles")]
    TooLarge { size: usize },
    #[error("unrecognized value '{token}' in row {row}")]
    InvalidNumber { row: usize, token: String },
    #[error("tile {value} is out of range, expected 0 to {max}")]
    OutOfRange { value: u32, max: u32 },
    #[error("tile {value} appears more than once")]
    Duplicate { value: u32 },
    #[error("invalid board size '{value}', expected 1 to {max}")]
    InvalidSize { value: String, max: usize },
    #[error("unknown {kind} '{name}'")]
    UnknownName { kind: &'static str, name: String },
}

/// Parses rows of whitespace- or comma-separated integers into a `Board`.
///
/// Each string slice is one row, starting from the top. The number of rows fixes the
/// board size; every row must hold exactly that many values and the values together must
/// be a permutation of `0..size²` (so exactly one `0`, the blank).
///
/// # Arguments
/// * `s`: A slice of string slices, one per row.
///
/// # Returns
/// * `Ok(Board)` if every row parses and the values form a valid board.
/// * `Err(ParseError)` describing the first problem found.
///
/// # Examples
/// ```
/// use sliding_puzzle_solver::utils::board_from_str_array;
///
/// let board = board_from_str_array(&["1 2 3", "4 5 6", "7 8 0"]).unwrap();
/// assert_eq!(board.size(), 3);
/// assert_eq!(board.get_tile(2, 2), 0);
///
/// assert!(board_from_str_array(&["1 2", "3 4"]).is_err()); // no blank, 4 out of range
/// assert!(board_from_str_array(&["1 2 x"]).is_err());
/// ```
pub fn board_from_str_array(s: &[&str]) -> Result<Board, ParseError> {
    let mut rows = Vec::with_capacity(s.len());

    for (r, row_str) in s.iter().enumerate() {
        let mut row = Vec::new();
        for token in row_str
            .split(|ch: char| ch.is_whitespace() || ch == ',')
            .filter(|t| !t.is_empty())
        {
            let value = token.parse::<u32>().map_err(|_| ParseError::InvalidNumber {
                row: r,
                token: token.to_string(),
            })?;
            row.push(value);
        }
        rows.push(row);
    }

    board_from_rows(rows)
}

/// Builds a `Board` from already-parsed rows, validating shape and contents.
///
/// # Returns
/// * `Ok(Board)` for a square grid holding each of `0..size²` exactly once.
/// * `Err(ParseError)` otherwise.
pub fn board_from_rows(rows: Vec<Vec<u32>>) -> Result<Board, ParseError> {
    let size = rows.len();
    if size == 0 {
        return Err(ParseError::Empty);
    }
    if size > MAX_SIZE {
        return Err(ParseError::TooLarge { size });
    }

    let max = (size * size - 1) as u32;
    let mut seen = vec![false; size * size];
    let mut tiles = Vec::with_capacity(size * size);

    for (r, row) in rows.iter().enumerate() {
        if row.len() != size {
            return Err(ParseError::NotSquare {
                row: r,
                expected: size,
                found: row.len(),
            });
        }
        for &value in row {
            if value > max {
                return Err(ParseError::OutOfRange { value, max });
            }
            if seen[value as usize] {
                return Err(ParseError::Duplicate { value });
            }
            seen[value as usize] = true;
            tiles.push(value as u8);
        }
    }

    // A full permutation of 0..=max leaves no room for a missing blank.
    Ok(Board::from_tiles(size, tiles))
}

/// Parses a board side length, accepting only `1..=MAX_SIZE`.
///
/// Used as the clap value parser for `--size` so that the goal board is always well-formed.
///
/// # Examples
/// ```
/// use sliding_puzzle_solver::utils::parse_board_size;
/// assert_eq!(parse_board_size("4"), Ok(4));
/// assert!(parse_board_size("0").is_err());
/// assert!(parse_board_size("17").is_err());
/// ```
pub fn parse_board_size(s: &str) -> Result<usize, ParseError> {
    let trimmed = s.trim();
    match trimmed.parse::<usize>() {
        Ok(size) if (1..=MAX_SIZE).contains(&size) => Ok(size),
        _ => Err(ParseError::InvalidSize {
            value: trimmed.to_string(),
            max: MAX_SIZE,
        }),
    }
}

/// Built-in 8-puzzle boards of increasing difficulty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    Trivial,
    VeryEasy,
    Easy,
    Doable,
    OhBoy,
}

impl Preset {
    /// All presets, easiest first.
    pub const ALL: [Preset; 5] = [
        Preset::Trivial,
        Preset::VeryEasy,
        Preset::Easy,
        Preset::Doable,
        Preset::OhBoy,
    ];

    /// Short name, also accepted by `FromStr`.
    pub fn name(&self) -> &'static str {
        match self {
            Preset::Trivial => "trivial",
            Preset::VeryEasy => "very-easy",
            Preset::Easy => "easy",
            Preset::Doable => "doable",
            Preset::OhBoy => "oh-boy",
        }
    }

    /// Returns the preset's 3x3 board.
    pub fn board(&self) -> Board {
        let tiles: [u8; 9] = match self {
            Preset::Trivial => [1, 2, 3, 4, 5, 6, 7, 8, 0],
            Preset::VeryEasy => [1, 2, 3, 4, 5, 6, 7, 0, 8],
            Preset::Easy => [1, 2, 0, 4, 5, 3, 7, 8, 6],
            Preset::Doable => [0, 1, 2, 4, 5, 3, 7, 8, 6],
            Preset::OhBoy => [8, 7, 1, 6, 0, 2, 5, 4, 3],
        };
        Board::from_tiles(3, tiles.to_vec())
    }

    /// Length of the optimal solution from this preset to the conventional goal.
    pub fn optimal_depth(&self) -> u32 {
        match self {
            Preset::Trivial => 0,
            Preset::VeryEasy => 1,
            Preset::Easy => 2,
            Preset::Doable => 4,
            Preset::OhBoy => 22,
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Preset {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Preset::ALL
            .into_iter()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| ParseError::UnknownName {
                kind: "preset",
                name: s.trim().to_string(),
            })
    }
}
