use crate::grid::{Coord, Grid, Terrain};
use crate::parsing::{END, OPEN, START, WALL};
use rustc_hash::FxHashSet;

pub const PATH: char = '*';
pub const EXPLORED: char = 'o';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapGlyph {
    Wall,
    Open,
    Start,
    End,
    Path,
    Explored,
}

impl MapGlyph {
    pub fn as_char(self) -> char {
        match self {
            MapGlyph::Wall => WALL,
            MapGlyph::Open => OPEN,
            MapGlyph::Start => START,
            MapGlyph::End => END,
            MapGlyph::Path => PATH,
            MapGlyph::Explored => EXPLORED,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RenderOptions<'a> {
    /// Cells visited by the search; drawn as `o` when not on the path
    pub explored: Option<&'a FxHashSet<Coord>>,
}

/// Classifies every cell for drawing. Start and end keep their own glyphs
/// even though they are on the path.
pub fn render_glyphs(grid: &Grid, path: &[Coord], options: &RenderOptions) -> Vec<Vec<MapGlyph>> {
    let path_cells: FxHashSet<Coord> = path.iter().copied().collect();

    (0..grid.rows())
        .map(|row| {
            (0..grid.cols())
                .map(|col| {
                    let coord = Coord::new(row, col);
                    if coord == grid.start() {
                        MapGlyph::Start
                    } else if coord == grid.end() {
                        MapGlyph::End
                    } else if grid.cell(row, col) == Some(Terrain::Wall) {
                        MapGlyph::Wall
                    } else if path_cells.contains(&coord) {
                        MapGlyph::Path
                    } else if options.explored.is_some_and(|explored| explored.contains(&coord)) {
                        MapGlyph::Explored
                    } else {
                        MapGlyph::Open
                    }
                })
                .collect()
        })
        .collect()
}

pub fn render_solution(grid: &Grid, path: &[Coord], options: &RenderOptions) -> String {
    render_glyphs(grid, path, options)
        .into_iter()
        .map(|row| row.into_iter().map(MapGlyph::as_char).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
