//! Text rendering of a finished search.
use crate::solver::Solution;

/// Renders the solution path and search statistics.
///
/// Every board from the initial state to the goal is printed with the move that produced
/// it and its g and h values, followed by a summary block.
///
/// # Examples
/// ```
/// use sliding_puzzle_solver::engine::Board;
/// use sliding_puzzle_solver::heuristics::Heuristic;
/// use sliding_puzzle_solver::report::render;
/// use sliding_puzzle_solver::solver::solve_default;
///
/// let board = Board::from_tiles(3, vec![1, 2, 3, 4, 5, 6, 7, 0, 8]);
/// let solution = solve_default(&board, Heuristic::ManhattanDistance).unwrap();
/// let text = render(&solution);
/// assert!(text.contains("Solution depth: 1"));
/// ```
pub fn render(solution: &Solution) -> String {
    let mut output = String::new();

    for (step, node) in solution.path().iter().enumerate() {
        match node.action() {
            None => output.push_str(&format!(
                "Initial state (g = {}, h = {}):\n",
                node.path_cost(),
                node.heuristic()
            )),
            Some(mv) => output.push_str(&format!(
                "Step {}: move blank {} (g = {}, h = {}):\n",
                step,
                mv,
                node.path_cost(),
                node.heuristic()
            )),
        }
        output.push_str(&format!("{}\n\n", node.state()));
    }

    output.push_str("Goal reached!\n");
    output.push_str(&format!("Algorithm: {}\n", solution.heuristic().description()));
    output.push_str(&format!("Solution depth: {}\n", solution.path_cost()));
    output.push_str(&format!("Nodes expanded: {}\n", solution.expanded()));
    output.push_str(&format!("Nodes generated: {}\n", solution.nodes_generated()));
    output.push_str(&format!(
        "Elapsed time: {} microseconds",
        solution.elapsed().as_micros()
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Board, Puzzle};
    use crate::heuristics::Heuristic;
    use crate::solver::{solve, SearchOptions};
    use crate::utils::Preset;

    #[test]
    fn test_render_lists_every_step() {
        let puzzle = Puzzle::new(3);
        let solution = solve(
            &puzzle,
            &Preset::Doable.board(),
            Heuristic::ManhattanDistance,
            SearchOptions::default(),
        )
        .unwrap();
        let text = render(&solution);

        assert!(text.starts_with("Initial state (g = 0, h = 4):\n0 1 2\n4 5 3\n7 8 6\n"));
        assert_eq!(text.matches("Step ").count(), 4);
        assert!(text.contains("Step 4: move blank Down (g = 4, h = 0):\n1 2 3\n4 5 6\n7 8 0"));
        assert!(text.contains("Solution depth: 4"));
        assert!(text.contains("Nodes expanded: 4"));
        assert!(text.contains("A* with the Manhattan Distance heuristic"));
    }

    #[test]
    fn test_render_goal_board() {
        let solution = crate::solver::solve_default(&Board::goal(3), Heuristic::Uniform).unwrap();
        let text = render(&solution);
        assert!(!text.contains("Step "));
        assert!(text.contains("Solution depth: 0"));
        assert!(text.contains("Nodes expanded: 0"));
        assert!(text.contains("Nodes generated: 1"));
    }
}
