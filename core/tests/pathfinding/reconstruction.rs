use mazepath_core::pathfinding::{ParentMap, reconstruct_path};
use mazepath_core::{Coord, MazeError};

fn parent_map(links: &[((usize, usize), (usize, usize))]) -> ParentMap {
    links
        .iter()
        .map(|&(child, parent)| (Coord::from(child), Coord::from(parent)))
        .collect()
}

#[test]
fn test_reconstruct_runs_start_to_end() {
    let parents = parent_map(&[((0, 1), (0, 0)), ((1, 1), (0, 1)), ((1, 0), (0, 0))]);
    let path = reconstruct_path(&parents, Coord::new(0, 0), Coord::new(1, 1)).unwrap();

    assert_eq!(path, vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)]);
}

#[test]
fn test_reconstruct_target_is_start() {
    let path = reconstruct_path(&ParentMap::default(), Coord::new(2, 2), Coord::new(2, 2)).unwrap();
    assert_eq!(path, vec![Coord::new(2, 2)]);
}

#[test]
fn test_reconstruct_unreached_target_is_no_path() {
    let parents = parent_map(&[((0, 1), (0, 0))]);
    let error = reconstruct_path(&parents, Coord::new(0, 0), Coord::new(3, 3)).unwrap_err();

    assert!(matches!(error, MazeError::NoPathFound { .. }));
}

#[test]
fn test_reconstruct_broken_chain_is_no_path() {
    // (0, 2) -> (0, 1) but (0, 1) never got a parent
    let parents = parent_map(&[((0, 2), (0, 1))]);
    let error = reconstruct_path(&parents, Coord::new(0, 0), Coord::new(0, 2)).unwrap_err();

    assert!(error.is_no_path());
}

#[test]
fn test_reconstruct_cycle_terminates() {
    let parents = parent_map(&[((0, 1), (0, 2)), ((0, 2), (0, 1))]);
    let error = reconstruct_path(&parents, Coord::new(0, 0), Coord::new(0, 1)).unwrap_err();

    assert!(error.is_no_path());
}
