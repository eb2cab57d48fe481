use crate::search::Problem;

pub const DIAMOND_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/mazes/diamond.txt"
));

pub const DISCONNECTED_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/mazes/disconnected.txt"
));

pub const OPEN_GRID_3_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/mazes/open_grid_3.txt"
));

pub const CORRIDORS_4_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/mazes/corridors_4.txt"
));

pub fn problem(text: &str) -> Problem {
    Problem::from_text(text).expect("benchmark problems are well formed")
}

/// The diamond `0 -> {1, 2} -> 3` on a 2x2 grid with a different goal.
pub fn diamond_with_goal(goal_state: usize) -> Problem {
    Problem::new(2, vec![vec![1, 2], vec![3], vec![3], vec![]], 0, goal_state)
}
