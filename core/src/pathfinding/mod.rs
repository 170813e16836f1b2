pub mod frontier;
pub mod search;
pub mod solver;
pub mod state;
pub mod utils;

// Re-export the public functions
pub use frontier::{Frontier, Queue, Stack};
pub use search::{search, solve, solve_bfs, solve_dfs};
pub use solver::MazeSolver;
pub use state::SearchState;
pub use utils::{ParentMap, SearchOutcome, reconstruct_path};
