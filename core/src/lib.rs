pub mod error;
pub mod grid;
pub mod parsing;
pub mod pathfinding;
pub mod pathfinding_config;
pub mod render;

// Re-export commonly used items
pub use error::MazeError;
pub use grid::{Coord, Direction, Grid, Terrain};
pub use parsing::{load_maze, parse_maze};
pub use pathfinding::{MazeSolver, SearchOutcome, search, solve, solve_bfs, solve_dfs};
pub use pathfinding_config::{Algorithm, SearchConfig};
pub use render::{RenderOptions, render_solution};
