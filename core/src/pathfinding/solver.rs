use super::frontier::{Frontier, Queue, Stack};
use super::search::run_search;
use super::state::SearchState;
use super::utils::SearchOutcome;
use crate::error::{MazeError, Result};
use crate::grid::Grid;
use crate::pathfinding_config::{Algorithm, SearchConfig};
use std::time::Instant;

/// Solves one maze repeatedly, reusing its search buffers between runs.
///
/// Each solve resets the buffers it uses before seeding, so running DFS and
/// then BFS on the same maze never sees metadata from the earlier run.
#[derive(Debug, Default)]
pub struct MazeSolver {
    grid: Option<Grid>,
    max_expansions: Option<usize>,
    dfs_state: SearchState<Stack>,
    bfs_state: SearchState<Queue>,
}

impl MazeSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_grid(grid: Grid) -> Self {
        Self {
            grid: Some(grid),
            ..Self::default()
        }
    }

    pub fn set_grid(&mut self, grid: Grid) {
        self.grid = Some(grid);
        self.reset();
    }

    pub fn set_max_expansions(&mut self, max_expansions: Option<usize>) {
        self.max_expansions = max_expansions;
    }

    pub fn reset(&mut self) {
        self.dfs_state.reset();
        self.bfs_state.reset();
    }

    pub fn solve_dfs(&mut self) -> Result<SearchOutcome> {
        self.solve(Algorithm::Dfs)
    }

    pub fn solve_bfs(&mut self) -> Result<SearchOutcome> {
        self.solve(Algorithm::Bfs)
    }

    pub fn solve(&mut self, algorithm: Algorithm) -> Result<SearchOutcome> {
        let grid = self.grid.as_ref().ok_or(MazeError::MissingGrid)?;
        let config = SearchConfig::new(algorithm, self.max_expansions);

        match algorithm {
            Algorithm::Dfs => solve_reusing(&mut self.dfs_state, grid, &config),
            Algorithm::Bfs => solve_reusing(&mut self.bfs_state, grid, &config),
        }
    }
}

fn solve_reusing<F: Frontier>(
    search_state: &mut SearchState<F>,
    grid: &Grid,
    config: &SearchConfig,
) -> Result<SearchOutcome> {
    let search_timer = Instant::now();
    search_state.reset();

    let path = run_search(search_state, grid, config)?;

    let elapsed_time = search_timer.elapsed().as_secs_f64();
    Ok(search_state.snapshot_outcome(config.algorithm, path, elapsed_time))
}
