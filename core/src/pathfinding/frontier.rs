use crate::grid::Coord;
use std::collections::VecDeque;

/// Discovered cells waiting to be expanded. The removal order is what
/// separates depth-first from breadth-first search.
pub trait Frontier: Default {
    fn insert(&mut self, coord: Coord);
    fn remove(&mut self) -> Option<Coord>;
    fn len(&self) -> usize;
    fn clear(&mut self);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// LIFO frontier used by DFS.
#[derive(Debug, Default, Clone)]
pub struct Stack {
    cells: Vec<Coord>,
}

impl Frontier for Stack {
    fn insert(&mut self, coord: Coord) {
        self.cells.push(coord);
    }

    fn remove(&mut self) -> Option<Coord> {
        self.cells.pop()
    }

    fn len(&self) -> usize {
        self.cells.len()
    }

    fn clear(&mut self) {
        self.cells.clear();
    }
}

/// FIFO frontier used by BFS.
#[derive(Debug, Default, Clone)]
pub struct Queue {
    cells: VecDeque<Coord>,
}

impl Frontier for Queue {
    fn insert(&mut self, coord: Coord) {
        self.cells.push_back(coord);
    }

    fn remove(&mut self) -> Option<Coord> {
        self.cells.pop_front()
    }

    fn len(&self) -> usize {
        self.cells.len()
    }

    fn clear(&mut self) {
        self.cells.clear();
    }
}
