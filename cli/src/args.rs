use clap::{Parser, ValueEnum};
use mazepath_core::{Algorithm, SearchConfig};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "mazepath")]
#[command(about = "Solve a text grid maze with depth-first and breadth-first search")]
pub struct Args {
    /// Maze file (`#` wall, `.` open, `A` start, `B` end)
    pub maze_file: PathBuf,

    /// Which search to run; `both` runs DFS and then BFS on the same maze
    #[arg(short, long, value_enum, default_value = "both")]
    pub algorithm: AlgorithmChoice,

    /// Give up after expanding this many cells
    #[arg(short = 'm', long, value_name = "COUNT")]
    pub max_expansions: Option<usize>,

    /// Mark cells the search visited but did not use
    #[arg(short = 'e', long)]
    pub show_explored: bool,

    /// Print results as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log filter for diagnostics on stderr (e.g. `debug`, `mazepath_core=trace`)
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Verbose mode - show search info and statistics
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the path flow
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmChoice {
    Dfs,
    Bfs,
    Both,
}

impl AlgorithmChoice {
    pub fn algorithms(self) -> Vec<Algorithm> {
        match self {
            AlgorithmChoice::Dfs => vec![Algorithm::Dfs],
            AlgorithmChoice::Bfs => vec![Algorithm::Bfs],
            AlgorithmChoice::Both => vec![Algorithm::Dfs, Algorithm::Bfs],
        }
    }
}

impl Args {
    pub fn search_config(&self, algorithm: Algorithm) -> SearchConfig {
        SearchConfig::new(algorithm, self.max_expansions)
    }
}
