use super::frontier::Frontier;
use super::utils::{ParentMap, SearchOutcome, reconstruct_path};
use crate::error::{MazeError, Result};
use crate::grid::{Coord, Grid};
use crate::pathfinding_config::Algorithm;
use rustc_hash::FxHashSet;
use tracing::trace;

/// Per-run search metadata, kept apart from the grid so the grid stays
/// immutable while it is being solved.
#[derive(Debug, Default)]
pub struct SearchState<F: Frontier> {
    frontier: F,
    visited: FxHashSet<Coord>,
    parent_map: ParentMap,
    start: Option<Coord>,
    expanded: usize,
}

impl<F: Frontier> SearchState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_fresh(&self) -> bool {
        self.start.is_none()
            && self.expanded == 0
            && self.frontier.is_empty()
            && self.visited.is_empty()
            && self.parent_map.is_empty()
    }

    pub fn reset(&mut self) {
        self.frontier.clear();
        self.visited.clear();
        self.parent_map.clear();
        self.start = None;
        self.expanded = 0;
    }

    /// Puts `start` on the frontier. Fails if anything is left over from a
    /// previous run.
    pub fn seed(&mut self, start: Coord) -> Result<()> {
        if !self.is_fresh() {
            return Err(MazeError::StaleMetadata);
        }

        self.frontier.insert(start);
        self.visited.insert(start);
        self.start = Some(start);
        Ok(())
    }

    fn visit_neighbor(&mut self, neighbor: Coord, current: Coord) {
        if self.visited.insert(neighbor) {
            self.parent_map.insert(neighbor, current);
            self.frontier.insert(neighbor);
        }
    }

    fn expand(&mut self, grid: &Grid, current: Coord) {
        self.expanded += 1;
        trace!(cell = %current, frontier = self.frontier.len(), "expanding");

        for neighbor in grid.open_neighbors(current) {
            self.visit_neighbor(neighbor, current);
        }
    }

    pub fn find_path_to_target(
        &mut self,
        grid: &Grid,
        target: Coord,
        max_expansions: Option<usize>,
    ) -> Result<Vec<Coord>> {
        let start = self.start.ok_or(MazeError::StaleMetadata)?;

        while let Some(current_cell) = self.frontier.remove() {
            if current_cell == target {
                return reconstruct_path(&self.parent_map, start, target);
            }

            if let Some(limit) = max_expansions {
                if self.expanded >= limit {
                    return Err(MazeError::SearchBudgetExceeded { limit });
                }
            }

            self.expand(grid, current_cell);
        }

        Err(MazeError::NoPathFound {
            start,
            end: target,
            visited: self.visited.len(),
        })
    }

    pub fn visited(&self) -> &FxHashSet<Coord> {
        &self.visited
    }

    pub fn parent_of(&self, coord: Coord) -> Option<Coord> {
        self.parent_map.get(&coord).copied()
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded
    }

    pub fn into_outcome(
        self,
        algorithm: Algorithm,
        path: Vec<Coord>,
        search_duration: f64,
    ) -> SearchOutcome {
        SearchOutcome {
            algorithm,
            path,
            visited: self.visited,
            expanded_count: self.expanded,
            search_duration,
        }
    }

    pub fn snapshot_outcome(
        &self,
        algorithm: Algorithm,
        path: Vec<Coord>,
        search_duration: f64,
    ) -> SearchOutcome {
        SearchOutcome {
            algorithm,
            path,
            visited: self.visited.clone(),
            expanded_count: self.expanded,
            search_duration,
        }
    }
}
