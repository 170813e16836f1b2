use super::frontier::{Frontier, Queue, Stack};
use super::state::SearchState;
use super::utils::SearchOutcome;
use crate::error::Result;
use crate::grid::{Coord, Grid};
use crate::pathfinding_config::{Algorithm, SearchConfig};
use std::time::Instant;
use tracing::debug;

pub fn solve_dfs(grid: &Grid) -> Result<Vec<Coord>> {
    solve(grid, Algorithm::Dfs)
}

pub fn solve_bfs(grid: &Grid) -> Result<Vec<Coord>> {
    solve(grid, Algorithm::Bfs)
}

pub fn solve(grid: &Grid, algorithm: Algorithm) -> Result<Vec<Coord>> {
    search(grid, &SearchConfig::new(algorithm, None)).map(|outcome| outcome.path)
}

/// Solves `grid` with fresh search state and reports the path together with
/// how much of the maze was explored.
pub fn search(grid: &Grid, config: &SearchConfig) -> Result<SearchOutcome> {
    match config.algorithm {
        Algorithm::Dfs => search_with::<Stack>(grid, config),
        Algorithm::Bfs => search_with::<Queue>(grid, config),
    }
}

fn search_with<F: Frontier>(grid: &Grid, config: &SearchConfig) -> Result<SearchOutcome> {
    let search_timer = Instant::now();
    let mut search_state = SearchState::<F>::new();

    let path = run_search(&mut search_state, grid, config)?;

    let elapsed_time = search_timer.elapsed().as_secs_f64();
    Ok(search_state.into_outcome(config.algorithm, path, elapsed_time))
}

pub(crate) fn run_search<F: Frontier>(
    search_state: &mut SearchState<F>,
    grid: &Grid,
    config: &SearchConfig,
) -> Result<Vec<Coord>> {
    debug!(
        algorithm = config.algorithm.as_str(),
        start = %grid.start(),
        end = %grid.end(),
        "starting search"
    );

    search_state.seed(grid.start())?;
    let result = search_state.find_path_to_target(grid, grid.end(), config.max_expansions);

    match &result {
        Ok(path) => debug!(
            algorithm = config.algorithm.as_str(),
            path_len = path.len(),
            visited = search_state.visited().len(),
            expanded = search_state.expanded_count(),
            "search reached end"
        ),
        Err(error) => debug!(
            algorithm = config.algorithm.as_str(),
            visited = search_state.visited().len(),
            expanded = search_state.expanded_count(),
            %error,
            "search failed"
        ),
    }

    result
}
