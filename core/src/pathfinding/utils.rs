use crate::error::{MazeError, Result};
use crate::grid::Coord;
use crate::pathfinding_config::Algorithm;
use rustc_hash::{FxHashMap, FxHashSet};

pub type ParentMap = FxHashMap<Coord, Coord>;

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub algorithm: Algorithm,
    /// Start to end inclusive
    pub path: Vec<Coord>,
    /// Every cell discovered during the run, start included
    pub visited: FxHashSet<Coord>,
    pub expanded_count: usize,
    pub search_duration: f64,
}

impl SearchOutcome {
    pub fn step_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

/// Walks parent links back from `target` and returns the route from
/// `start` to `target`.
///
/// A cell other than `start` without a parent means `target` was never
/// reached, which surfaces as `NoPathFound` rather than a broken walk. A
/// chain longer than the map itself can only come from a cycle and is
/// rejected the same way.
pub fn reconstruct_path(parent_map: &ParentMap, start: Coord, target: Coord) -> Result<Vec<Coord>> {
    let no_path = || MazeError::NoPathFound {
        start,
        end: target,
        visited: parent_map.len() + 1,
    };

    let mut path = vec![target];
    let mut current_cell = target;

    while current_cell != start {
        let parent_cell = *parent_map.get(&current_cell).ok_or_else(no_path)?;
        path.push(parent_cell);
        current_cell = parent_cell;

        if path.len() > parent_map.len() + 1 {
            return Err(no_path());
        }
    }

    path.reverse();
    Ok(path)
}
