use super::*;
use mazepath_core::{Algorithm, MazeError, SearchConfig, search, solve_bfs, solve_dfs};

#[test]
fn test_bfs_open_grid_shortest_path() {
    let grid = maze(OPEN_3X3);
    let path = solve_bfs(&grid).unwrap();

    assert_eq!(path, coords(&[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]));
    assert_valid_path(&grid, &path);
}

#[test]
fn test_bfs_shorter_than_dfs_on_wide_grid() {
    let grid = maze(WIDE_2X3);
    let bfs_path = solve_bfs(&grid).unwrap();
    let dfs_path = solve_dfs(&grid).unwrap();

    assert_eq!(bfs_path, coords(&[(0, 0), (0, 1), (0, 2)]));
    assert!(bfs_path.len() < dfs_path.len());
}

#[test]
fn test_bfs_loop_takes_east_side_first() {
    let grid = maze(LOOP_5X5);
    let path = solve_bfs(&grid).unwrap();

    // Both sides are 9 cells; North/East ordering reaches the east route first
    assert_eq!(
        path,
        coords(&[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (1, 4), (2, 4), (3, 4), (4, 4)])
    );
}

#[test]
fn test_bfs_never_longer_than_dfs() {
    for rows in [OPEN_3X3, WIDE_2X3, LOOP_5X5, CORRIDOR] {
        let grid = maze(rows);
        let bfs_path = solve_bfs(&grid).unwrap();
        let dfs_path = solve_dfs(&grid).unwrap();

        assert_valid_path(&grid, &bfs_path);
        assert_valid_path(&grid, &dfs_path);
        assert!(bfs_path.len() <= dfs_path.len());
    }
}

#[test]
fn test_bfs_path_length_is_manhattan_on_open_grid() {
    let grid = Grid::open(6, 9, Coord::new(1, 2), Coord::new(5, 7)).unwrap();
    let path = solve_bfs(&grid).unwrap();

    assert_eq!(path.len(), 4 + 5 + 1);
    assert_valid_path(&grid, &path);
}

#[test]
fn test_bfs_stats() {
    let grid = maze(OPEN_3X3);
    let outcome = search(&grid, &SearchConfig::default()).unwrap();

    assert_eq!(outcome.algorithm, Algorithm::Bfs);
    assert_eq!(outcome.visited_count(), 9);
    assert_eq!(outcome.expanded_count, 8);
    assert_eq!(outcome.step_count(), 4);
}

#[test]
fn test_bfs_no_path_when_end_walled_off() {
    let grid = maze(WALLED_OFF_END);
    let error = solve_bfs(&grid).unwrap_err();

    assert!(matches!(error, MazeError::NoPathFound { visited: 4, .. }));
}

#[test]
fn test_bfs_no_path_across_wall() {
    let grid = maze(SPLIT_BY_WALL);
    assert!(solve_bfs(&grid).unwrap_err().is_no_path());
}
