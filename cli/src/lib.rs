pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod json_output;
pub mod logging;
pub mod search;
pub mod utils;

// Re-export commonly used items
pub use app::MazePathApp;
pub use args::{AlgorithmChoice, Args};
pub use search::{SearchRequest, SearchResult, create_search_request, execute_searches, exit_code};
pub use utils::format_number;
