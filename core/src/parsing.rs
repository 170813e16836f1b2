use crate::error::{MazeError, Result};
use crate::grid::{Coord, Grid, Terrain};
use std::path::Path;
use tracing::debug;

pub const WALL: char = '#';
pub const OPEN: char = '.';
pub const START: char = 'A';
pub const END: char = 'B';

enum Glyph {
    Terrain(Terrain),
    Start,
    End,
}

fn classify_glyph(glyph: char) -> Option<Glyph> {
    match glyph {
        WALL => Some(Glyph::Terrain(Terrain::Wall)),
        OPEN | ' ' => Some(Glyph::Terrain(Terrain::Open)),
        START | 'S' => Some(Glyph::Start),
        END | 'E' => Some(Glyph::End),
        _ => None,
    }
}

pub fn load_maze(maze_path: &Path) -> Result<Grid> {
    let maze_text = std::fs::read_to_string(maze_path)?;
    let grid = parse_maze(&maze_text)?;

    debug!(
        path = %maze_path.display(),
        rows = grid.rows(),
        cols = grid.cols(),
        "loaded maze"
    );

    Ok(grid)
}

/// Parses the maze text format: an optional `rows cols` header followed by
/// one line per row of `#`, `.`, `A` (start) and `B` (end).
pub fn parse_maze(maze_text: &str) -> Result<Grid> {
    let mut numbered_lines: Vec<(usize, &str)> = maze_text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .collect();

    while numbered_lines.last().is_some_and(|(_, line)| line.is_empty()) {
        numbered_lines.pop();
    }

    let declared_shape = match numbered_lines.first() {
        Some(&(line_number, line)) => parse_header(line_number, line)?,
        None => return Err(MazeError::invalid_grid("maze has no cells")),
    };

    let body = if declared_shape.is_some() {
        &numbered_lines[1..]
    } else {
        &numbered_lines[..]
    };

    if body.is_empty() {
        return Err(MazeError::invalid_grid("maze has no cells"));
    }

    if let Some((rows, cols)) = declared_shape {
        check_declared_shape(body, rows, cols)?;
    }

    build_grid(body)
}

fn parse_header(line_number: usize, line: &str) -> Result<Option<(usize, usize)>> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let looks_numeric = !fields.is_empty()
        && fields
            .iter()
            .all(|field| field.chars().all(|c| c.is_ascii_digit()));

    if !looks_numeric {
        return Ok(None);
    }

    match fields.as_slice() {
        [rows, cols] => {
            let rows = rows
                .parse()
                .map_err(|_| MazeError::parse(line_number, "row count is not a number"))?;
            let cols = cols
                .parse()
                .map_err(|_| MazeError::parse(line_number, "column count is not a number"))?;
            Ok(Some((rows, cols)))
        }
        _ => Err(MazeError::parse(
            line_number,
            "header must be exactly `<rows> <cols>`",
        )),
    }
}

fn check_declared_shape(body: &[(usize, &str)], rows: usize, cols: usize) -> Result<()> {
    if body.len() != rows {
        let last_line = body.last().map(|(line_number, _)| *line_number).unwrap_or(1);
        return Err(MazeError::parse(
            last_line,
            format!("header declares {} rows but maze has {}", rows, body.len()),
        ));
    }

    for &(line_number, line) in body {
        let width = line.chars().count();
        if width != cols {
            return Err(MazeError::parse(
                line_number,
                format!("header declares {} columns but row has {}", cols, width),
            ));
        }
    }

    Ok(())
}

fn build_grid(body: &[(usize, &str)]) -> Result<Grid> {
    let expected_width = body[0].1.chars().count();
    let mut cells = Vec::with_capacity(body.len());
    let mut start = None;
    let mut end = None;

    for (row, &(line_number, line)) in body.iter().enumerate() {
        let mut row_cells = Vec::with_capacity(expected_width);

        for (col, glyph) in line.chars().enumerate() {
            let terrain = match classify_glyph(glyph) {
                Some(Glyph::Terrain(terrain)) => terrain,
                Some(Glyph::Start) => {
                    record_endpoint(&mut start, Coord::new(row, col), line_number, "start")?;
                    Terrain::Open
                }
                Some(Glyph::End) => {
                    record_endpoint(&mut end, Coord::new(row, col), line_number, "end")?;
                    Terrain::Open
                }
                None => {
                    return Err(MazeError::parse(
                        line_number,
                        format!("unexpected character {:?} at column {}", glyph, col),
                    ));
                }
            };
            row_cells.push(terrain);
        }

        if row_cells.len() != expected_width {
            return Err(MazeError::parse(
                line_number,
                format!(
                    "row has {} cells but the first row has {}",
                    row_cells.len(),
                    expected_width
                ),
            ));
        }

        cells.push(row_cells);
    }

    let start = start.ok_or_else(|| MazeError::invalid_grid("maze has no start cell"))?;
    let end = end.ok_or_else(|| MazeError::invalid_grid("maze has no end cell"))?;

    Grid::new(cells, start, end)
}

fn record_endpoint(
    slot: &mut Option<Coord>,
    coord: Coord,
    line_number: usize,
    label: &str,
) -> Result<()> {
    if let Some(existing) = slot {
        return Err(MazeError::parse(
            line_number,
            format!("second {} cell at {} (first at {})", label, coord, existing),
        ));
    }
    *slot = Some(coord);
    Ok(())
}
