use crate::error::{MazeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True when `other` is exactly one cardinal step away.
    pub fn is_adjacent(&self, other: &Coord) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terrain {
    Wall,
    Open,
}

impl Terrain {
    pub fn is_wall(self) -> bool {
        self == Terrain::Wall
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Expansion order. Changing it changes every DFS and BFS result.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }
}

/// Rectangular maze topology. The shape and terrain never change after
/// construction; search metadata lives in the per-run search state instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Terrain>,
    rows: usize,
    cols: usize,
    start: Coord,
    end: Coord,
}

impl Grid {
    pub fn new(cells: Vec<Vec<Terrain>>, start: Coord, end: Coord) -> Result<Self> {
        let rows = cells.len();
        let cols = cells.first().map(|row| row.len()).unwrap_or(0);

        if rows == 0 || cols == 0 {
            return Err(MazeError::invalid_grid("maze has no cells"));
        }

        if let Some(row_index) = cells.iter().position(|row| row.len() != cols) {
            return Err(MazeError::invalid_grid(format!(
                "row {} has {} cells, expected {}",
                row_index,
                cells[row_index].len(),
                cols
            )));
        }

        let grid = Self {
            cells: cells.into_iter().flatten().collect(),
            rows,
            cols,
            start,
            end,
        };

        grid.check_endpoint("start", start)?;
        grid.check_endpoint("end", end)?;

        Ok(grid)
    }

    /// Builds a grid with every cell open.
    pub fn open(rows: usize, cols: usize, start: Coord, end: Coord) -> Result<Self> {
        Self::new(vec![vec![Terrain::Open; cols]; rows], start, end)
    }

    fn check_endpoint(&self, label: &str, coord: Coord) -> Result<()> {
        match self.cell(coord.row, coord.col) {
            None => Err(MazeError::invalid_grid(format!(
                "{} cell {} is outside the {}x{} maze",
                label, coord, self.rows, self.cols
            ))),
            Some(Terrain::Wall) => Err(MazeError::invalid_grid(format!(
                "{} cell {} is a wall",
                label, coord
            ))),
            Some(Terrain::Open) => Ok(()),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn start(&self) -> Coord {
        self.start
    }

    pub fn end(&self) -> Coord {
        self.end
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Terrain> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// In bounds and not a wall. Takes signed coordinates so callers can
    /// look one step past the edge without underflow.
    pub fn is_valid_cell(&self, row: isize, col: isize) -> bool {
        if row < 0 || col < 0 {
            return false;
        }
        matches!(self.cell(row as usize, col as usize), Some(Terrain::Open))
    }

    pub fn step(&self, from: Coord, direction: Direction) -> Option<Coord> {
        let (row_offset, col_offset) = direction.offset();
        let row = from.row as isize + row_offset;
        let col = from.col as isize + col_offset;

        if self.is_valid_cell(row, col) {
            Some(Coord::new(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Open neighbors of `from` in North, East, South, West order.
    pub fn open_neighbors(&self, from: Coord) -> impl Iterator<Item = Coord> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.step(from, direction))
    }

    pub fn open_cell_count(&self) -> usize {
        self.cells.iter().filter(|terrain| !terrain.is_wall()).count()
    }
}
