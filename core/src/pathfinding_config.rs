use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Depth-first search over a LIFO frontier
    Dfs,
    /// Breadth-first search over a FIFO frontier; finds a shortest path
    #[default]
    Bfs,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Dfs => "dfs",
            Algorithm::Bfs => "bfs",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Algorithm::Dfs => "depth-first search (DFS)",
            Algorithm::Bfs => "breadth-first search (BFS)",
        }
    }
}

impl From<&str> for Algorithm {
    fn from(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "dfs" => Algorithm::Dfs,
            _ => Algorithm::Bfs,
        }
    }
}

impl From<String> for Algorithm {
    fn from(value: String) -> Self {
        Algorithm::from(value.as_str())
    }
}

/// Configuration for a single solve
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Frontier discipline to search with
    pub algorithm: Algorithm,
    /// Give up after expanding this many cells (unbounded when `None`)
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    pub fn new(algorithm: Algorithm, max_expansions: Option<usize>) -> Self {
        Self {
            algorithm,
            max_expansions,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Bfs,
            max_expansions: None,
        }
    }
}
