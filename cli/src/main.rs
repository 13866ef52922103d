use clap::Parser;
use degrees::app::DegreesApp;
use degrees::args::Args;
use degrees::colors::ColorScheme;
use degrees::display::{display_search_info, display_search_results};
use degrees::search::{SearchRequest, SearchResult, create_search_request, read_line};
use degrees::utils::format_number;
use degrees_core::{Catalog, bfs_find_path};

fn main() {
    let args = Args::parse();
    let colors = ColorScheme::new(!args.no_color);

    let app = match DegreesApp::new(args.data_dir.clone()) {
        Ok(app) => app,
        Err(error) => exit_with_error(&error.to_string(), &colors),
    };

    println!("🎬 Loading catalog from {:?}...", app.data_dir);
    let catalog = match app.load_catalog() {
        Ok(catalog) => catalog,
        Err(error) => exit_with_error(&error.to_string(), &colors),
    };
    println!(
        "Loaded {} people and {} films.",
        format_number(catalog.people.len()),
        format_number(catalog.films.len())
    );

    let source_query = match resolve_query(args.source.clone()) {
        Ok(name) => name,
        Err(error) => exit_with_error(&error, &colors),
    };
    let target_query = match resolve_query(args.target.clone()) {
        Ok(name) => name,
        Err(error) => exit_with_error(&error, &colors),
    };

    let request = match create_search_request(args, &source_query, &target_query, &catalog) {
        Ok(request) => request,
        Err(message) => exit_with_error(&message, &colors),
    };

    display_search_info(&request, &colors);

    let result = execute_search(request, &catalog);
    display_search_results(&result, &catalog, &colors);
}

fn resolve_query(arg: Option<String>) -> Result<String, String> {
    match arg {
        Some(name) => Ok(name),
        None => read_line("Name: "),
    }
}

fn execute_search(request: SearchRequest, catalog: &Catalog) -> SearchResult {
    let (path, people_expanded, search_duration) =
        bfs_find_path(&request.source, &request.target, catalog);

    SearchResult {
        path,
        people_expanded,
        search_duration,
        source_name: request.source_name,
        target_name: request.target_name,
        display_options: request.search_args,
    }
}

fn exit_with_error(message: &str, colors: &ColorScheme) -> ! {
    eprintln!("{} {}", colors.error("❌ Error:"), message);
    std::process::exit(1);
}
