use clap::Parser;
use mazepath::colors::ColorScheme;
use mazepath::display::{display_search_info, display_search_results};
use mazepath::json_output::create_json_output;
use mazepath::logging::init_tracing;
use mazepath::*;

fn main() {
    let search_args = Args::parse();

    if let Err(error) = init_tracing(search_args.verbose, search_args.log_level.as_deref()) {
        eprintln!("⚠️  Logging disabled: {}", error);
    }

    let colors = ColorScheme::new(!search_args.no_color && !search_args.json);

    let app = match MazePathApp::new(search_args.maze_file.clone()) {
        Ok(app) => app,
        Err(error) => exit_with_error(&error.to_string(), &colors),
    };

    let grid = match app.load_grid() {
        Ok(grid) => grid,
        Err(error) => exit_with_error(&error.to_string(), &colors),
    };

    let search_request = create_search_request(search_args, grid, app.maze_name());
    let is_json = search_request.search_args.json;

    if !is_json && !search_request.search_args.quiet {
        display_search_info(&search_request, &colors);
    }

    let search_results = execute_searches(&search_request);

    if is_json {
        let json_output = create_json_output(&search_request, &search_results);
        match serde_json::to_string_pretty(&json_output) {
            Ok(json) => println!("{}", json),
            Err(error) => exit_with_error(&error.to_string(), &colors),
        }
    } else {
        display_search_results(&search_request, &search_results, &colors);
    }

    std::process::exit(exit_code(&search_results));
}

fn exit_with_error(message: &str, colors: &ColorScheme) -> ! {
    eprintln!("{} {}", colors.error("❌ Error:"), message);
    std::process::exit(1);
}
