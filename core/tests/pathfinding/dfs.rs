use super::*;
use mazepath_core::{Algorithm, MazeError, SearchConfig, search, solve_dfs};

#[test]
fn test_dfs_open_grid_follows_expansion_order() {
    let grid = maze(OPEN_3X3);
    let path = solve_dfs(&grid).unwrap();

    // South is pushed after East, so it is popped first
    assert_eq!(path, coords(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]));
    assert_valid_path(&grid, &path);
}

#[test]
fn test_dfs_can_return_longer_path_than_bfs() {
    let grid = maze(WIDE_2X3);
    let path = solve_dfs(&grid).unwrap();

    assert_eq!(path, coords(&[(0, 0), (1, 0), (1, 1), (1, 2), (0, 2)]));
    assert_valid_path(&grid, &path);
}

#[test]
fn test_dfs_loop_goes_down_the_west_side() {
    let grid = maze(LOOP_5X5);
    let path = solve_dfs(&grid).unwrap();

    assert_eq!(
        path,
        coords(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (4, 1), (4, 2), (4, 3), (4, 4)])
    );
}

#[test]
fn test_dfs_corridor() {
    let grid = maze(CORRIDOR);
    let outcome = search(&grid, &SearchConfig::new(Algorithm::Dfs, None)).unwrap();

    assert_eq!(outcome.path.len(), 13);
    assert_eq!(outcome.visited_count(), 15);
    assert_eq!(outcome.expanded_count, 12);
    assert_eq!(outcome.algorithm, Algorithm::Dfs);
    assert_valid_path(&grid, &outcome.path);
}

#[test]
fn test_dfs_no_path_when_end_walled_off() {
    let grid = maze(WALLED_OFF_END);

    match solve_dfs(&grid) {
        Err(MazeError::NoPathFound { start, end, visited }) => {
            assert_eq!(start, Coord::new(0, 0));
            assert_eq!(end, Coord::new(2, 2));
            assert_eq!(visited, 4);
        }
        other => panic!("expected NoPathFound, got {:?}", other),
    }
}

#[test]
fn test_dfs_no_path_across_wall() {
    let grid = maze(SPLIT_BY_WALL);
    let error = solve_dfs(&grid).unwrap_err();
    assert!(error.is_no_path());
}

#[test]
fn test_dfs_start_equals_end() {
    let grid = Grid::open(2, 2, Coord::new(1, 1), Coord::new(1, 1)).unwrap();
    assert_eq!(solve_dfs(&grid).unwrap(), vec![Coord::new(1, 1)]);
}

#[test]
fn test_dfs_respects_expansion_budget() {
    let grid = maze(CORRIDOR);
    let config = SearchConfig::new(Algorithm::Dfs, Some(5));

    match search(&grid, &config) {
        Err(MazeError::SearchBudgetExceeded { limit }) => assert_eq!(limit, 5),
        other => panic!("expected SearchBudgetExceeded, got {:?}", other),
    }
}

#[test]
fn test_dfs_budget_large_enough_succeeds() {
    let grid = maze(CORRIDOR);
    let config = SearchConfig::new(Algorithm::Dfs, Some(12));
    assert!(search(&grid, &config).is_ok());
}
