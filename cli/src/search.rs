use mazepath_core::{Algorithm, Grid, MazeError, MazeSolver, SearchOutcome};
use tracing::info;

use crate::args::Args;

pub struct SearchRequest {
    pub grid: Grid,
    pub maze_name: String,
    pub search_args: Args,
}

pub struct SearchResult {
    pub algorithm: Algorithm,
    pub outcome: Result<SearchOutcome, MazeError>,
}

impl SearchResult {
    pub fn is_solved(&self) -> bool {
        self.outcome.is_ok()
    }
}

pub fn create_search_request(args: Args, grid: Grid, maze_name: String) -> SearchRequest {
    SearchRequest {
        grid,
        maze_name,
        search_args: args,
    }
}

/// Runs every requested algorithm against the same maze. The solver resets
/// its search state before each run.
pub fn execute_searches(request: &SearchRequest) -> Vec<SearchResult> {
    let mut solver = MazeSolver::with_grid(request.grid.clone());
    solver.set_max_expansions(request.search_args.max_expansions);

    request
        .search_args
        .algorithm
        .algorithms()
        .into_iter()
        .map(|algorithm| {
            let outcome = solver.solve(algorithm);
            if let Ok(found) = &outcome {
                info!(
                    algorithm = algorithm.as_str(),
                    steps = found.step_count(),
                    visited = found.visited_count(),
                    "solved maze"
                );
            }
            SearchResult { algorithm, outcome }
        })
        .collect()
}

/// 0 when every search found a path, 2 otherwise.
pub fn exit_code(results: &[SearchResult]) -> i32 {
    if results.iter().all(SearchResult::is_solved) {
        0
    } else {
        2
    }
}
