use mazepath_core::{Algorithm, Coord};
use serde::{Deserialize, Serialize};

use crate::search::{SearchRequest, SearchResult};

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub results: Vec<JsonResult>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub maze: String,
    pub rows: usize,
    pub cols: usize,
    pub start: Coord,
    pub end: Coord,
    pub options: JsonOptions,
}

#[derive(Serialize, Deserialize)]
pub struct JsonOptions {
    pub algorithms: Vec<Algorithm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_expansions: Option<usize>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonResult {
    pub algorithm: Algorithm,
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Coord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<JsonStats>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub search_time_ms: u64,
    pub cells_visited: usize,
    pub cells_expanded: usize,
}

pub fn create_json_output(request: &SearchRequest, results: &[SearchResult]) -> JsonOutput {
    let grid = &request.grid;

    JsonOutput {
        query: JsonQuery {
            maze: request.maze_name.clone(),
            rows: grid.rows(),
            cols: grid.cols(),
            start: grid.start(),
            end: grid.end(),
            options: JsonOptions {
                algorithms: request.search_args.algorithm.algorithms(),
                max_expansions: request.search_args.max_expansions,
            },
        },
        results: results.iter().map(create_json_result).collect(),
    }
}

fn create_json_result(result: &SearchResult) -> JsonResult {
    match &result.outcome {
        Ok(outcome) => JsonResult {
            algorithm: result.algorithm,
            found: true,
            path: Some(outcome.path.clone()),
            error: None,
            stats: Some(JsonStats {
                search_time_ms: (outcome.search_duration * 1000.0) as u64,
                cells_visited: outcome.visited_count(),
                cells_expanded: outcome.expanded_count,
            }),
        },
        Err(error) => JsonResult {
            algorithm: result.algorithm,
            found: false,
            path: None,
            error: Some(error.to_string()),
            stats: None,
        },
    }
}
