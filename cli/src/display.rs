use mazepath_core::render::render_glyphs;
use mazepath_core::{Grid, MazeError, RenderOptions, SearchOutcome};

use crate::args::Args;
use crate::colors::ColorScheme;
use crate::search::{SearchRequest, SearchResult};
use crate::utils::{format_number, format_path_flow};

pub fn display_search_info(request: &SearchRequest, colors: &ColorScheme) {
    let grid = &request.grid;

    println!(
        "🧩 Solving {} ({}x{}) from {} to {}",
        colors.heading(&request.maze_name),
        grid.rows(),
        grid.cols(),
        colors.coord(&grid.start().to_string()),
        colors.coord(&grid.end().to_string())
    );

    if request.search_args.verbose {
        println!("📐 {}", format_maze_summary(grid));
    }

    if let Some(limit) = request.search_args.max_expansions {
        println!(
            "⏱️  Giving up after {} expansions",
            colors.number(&format_number(limit))
        );
    }
}

pub fn format_maze_summary(grid: &Grid) -> String {
    format!(
        "{}x{} maze with {} open cells",
        grid.rows(),
        grid.cols(),
        format_number(grid.open_cell_count())
    )
}

pub fn display_search_results(
    request: &SearchRequest,
    results: &[SearchResult],
    colors: &ColorScheme,
) {
    let display_options = &request.search_args;

    for result in results {
        if !display_options.quiet {
            println!();
            let heading = format!("⚙️  {}", result.algorithm.display_name());
            println!("{}", colors.heading(&heading));
        }

        match &result.outcome {
            Ok(outcome) => {
                display_successful_path(&request.grid, outcome, display_options, colors)
            }
            Err(error) => display_search_error(error, colors),
        }
    }
}

fn display_successful_path(
    grid: &Grid,
    outcome: &SearchOutcome,
    display_options: &Args,
    colors: &ColorScheme,
) {
    if display_options.verbose {
        println!(
            "{} Found path with {} steps:\n",
            colors.success("✅"),
            colors.number(&outcome.step_count().to_string())
        );
    }

    if !display_options.quiet {
        println!("{}", format_maze(grid, outcome, display_options.show_explored, colors));
        println!();
    }

    println!("{}", colors.coord(&format_path_flow(&outcome.path)));

    if display_options.verbose {
        display_search_statistics(outcome, colors);
    }
}

fn display_search_error(error: &MazeError, colors: &ColorScheme) {
    let message = match error {
        MazeError::NoPathFound { start, end, .. } => {
            format!("No path found from {} to {}", start, end)
        }
        other => other.to_string(),
    };
    println!("{} {}", colors.error("❌"), colors.error(&message));
}

pub fn format_maze(
    grid: &Grid,
    outcome: &SearchOutcome,
    show_explored: bool,
    colors: &ColorScheme,
) -> String {
    let options = RenderOptions {
        explored: show_explored.then_some(&outcome.visited),
    };

    render_glyphs(grid, &outcome.path, &options)
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|glyph| colors.glyph(glyph).to_string())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn display_search_statistics(outcome: &SearchOutcome, colors: &ColorScheme) {
    println!(
        "{} Visited {} cells, expanded {} in {} sec",
        colors.stats("📊"),
        colors.number(&format_number(outcome.visited_count())),
        colors.number(&format_number(outcome.expanded_count)),
        colors.number(&format!("{:.3}", outcome.search_duration))
    );
}
