use mazepath_core::{Coord, Grid, MazeError, Terrain, load_maze, solve_bfs};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_maze_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "4 5").unwrap();
    writeln!(file, "A..#.").unwrap();
    writeln!(file, "##.#.").unwrap();
    writeln!(file, "...#.").unwrap();
    writeln!(file, ".#..B").unwrap();
    file.flush().unwrap();

    let grid = load_maze(file.path()).unwrap();
    assert_eq!(grid.rows(), 4);
    assert_eq!(grid.cols(), 5);

    let path = solve_bfs(&grid).unwrap();
    assert_eq!(path.first(), Some(&Coord::new(0, 0)));
    assert_eq!(path.last(), Some(&Coord::new(3, 4)));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let error = load_maze(&dir.path().join("missing.txt")).unwrap_err();

    assert!(matches!(error, MazeError::Io(_)));
}

#[test]
fn test_grid_rejects_wall_start() {
    let cells = vec![vec![Terrain::Wall, Terrain::Open]];
    let error = Grid::new(cells, Coord::new(0, 0), Coord::new(0, 1)).unwrap_err();

    assert!(error.to_string().contains("start cell (0, 0) is a wall"));
}

#[test]
fn test_grid_rejects_out_of_bounds_end() {
    let error = Grid::open(2, 2, Coord::new(0, 0), Coord::new(5, 0)).unwrap_err();
    assert!(matches!(error, MazeError::InvalidGrid { .. }));
}

#[test]
fn test_grid_rejects_ragged_cells() {
    let cells = vec![vec![Terrain::Open, Terrain::Open], vec![Terrain::Open]];
    let error = Grid::new(cells, Coord::new(0, 0), Coord::new(0, 1)).unwrap_err();

    assert!(matches!(error, MazeError::InvalidGrid { .. }));
}

fn bundled_maze(name: &str) -> Grid {
    let maze_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../mazes")
        .join(name);
    load_maze(&maze_path).unwrap()
}

#[test]
fn test_bundled_mazes_solve() {
    let grid = bundled_maze("maze1.txt");
    assert_eq!(mazepath_core::solve_dfs(&grid).unwrap().len(), 13);
    assert_eq!(solve_bfs(&grid).unwrap().len(), 9);

    let grid = bundled_maze("maze2.txt");
    assert_eq!(solve_bfs(&grid).unwrap().len(), 17);

    let grid = bundled_maze("unsolvable.txt");
    assert!(solve_bfs(&grid).unwrap_err().is_no_path());
    assert!(mazepath_core::solve_dfs(&grid).unwrap_err().is_no_path());
}
